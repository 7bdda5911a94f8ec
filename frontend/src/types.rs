//! Content record types for the site.
//!
//! This module centralizes type definitions so page copy lives in one place
//! ([`crate::config`]) and components stay purely presentational.
//!
//! # Categories
//!
//! - **Hero Types** - the hero section content record
//! - **Feature Pill Types** - feature badges with their icons
//! - **Stat Types** - floating card statistics

// =============================================================================
// Hero Types
// =============================================================================

/// Content configuration for the hero section.
///
/// Built once as a `const` literal in [`crate::config`] and read-only for
/// the lifetime of the process. Every field must be non-empty for the
/// section to render correctly.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroContent {
    /// Eyebrow line above the headline
    pub subtitle: &'static str,
    /// Main headline
    pub title: &'static str,
    /// Supporting paragraph under the headline
    pub description: &'static str,
    /// Feature photograph URL
    pub background_image: &'static str,
    /// Alt text for the feature photograph
    pub background_image_alt: &'static str,
    /// Primary call-to-action label
    pub cta_text: &'static str,
    /// Primary call-to-action target path
    pub cta_url: &'static str,
    /// Secondary call-to-action label
    pub secondary_cta_text: &'static str,
    /// Secondary call-to-action target path
    pub secondary_cta_url: &'static str,
}

// =============================================================================
// Feature Pill Types
// =============================================================================

/// Glyph shown inside a feature pill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeatureIcon {
    /// Pulse line (recovery)
    Activity,
    /// Heart outline (wellness)
    Heart,
    /// Lightning bolt (performance)
    Zap,
}

/// A single feature pill under the hero description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    /// Icon shown before the label
    pub icon: FeatureIcon,
    /// Pill label
    pub label: &'static str,
}

// =============================================================================
// Stat Types
// =============================================================================

/// One entry of the floating statistics card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    /// Headline figure ("15+", "98%", ...)
    pub value: &'static str,
    /// Caption under the figure
    pub label: &'static str,
}
