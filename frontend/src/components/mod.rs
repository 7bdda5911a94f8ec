//! UI Components for the Pro-Active Therapy frontend.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Full hero section (headline, CTAs, floating stats card)
//!
//! # Primitives
//! - [`AppImage`] - `img` wrapper with priority and fill-mode hints
//! - Icon components - inline SVG glyphs used by the hero

mod hero;
mod icons;
mod image;

pub use hero::*;
pub use icons::*;
pub use image::*;
