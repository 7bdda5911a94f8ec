//! Inline SVG icon components.
//!
//! Stroke-based 24x24 glyphs sized through their class attribute. All
//! icons are decorative and hidden from assistive technology.

use leptos::*;

use crate::types::FeatureIcon;

impl FeatureIcon {
    /// Render the glyph with the given utility classes.
    pub fn view(self, class: &'static str) -> View {
        match self {
            FeatureIcon::Activity => view! { <ActivityIcon class=class/> }.into_view(),
            FeatureIcon::Heart => view! { <HeartIcon class=class/> }.into_view(),
            FeatureIcon::Zap => view! { <ZapIcon class=class/> }.into_view(),
        }
    }
}

/// Right-pointing chevron.
#[component]
pub fn ChevronRightIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <polyline points="9 18 15 12 9 6"/>
        </svg>
    }
}

/// Right-pointing arrow.
#[component]
pub fn ArrowRightIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <line x1="5" y1="12" x2="19" y2="12"/>
            <polyline points="12 5 19 12 12 19"/>
        </svg>
    }
}

/// Pulse line.
#[component]
pub fn ActivityIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <polyline points="22 12 18 12 15 21 9 3 6 12 2 12"/>
        </svg>
    }
}

/// Heart outline.
#[component]
pub fn HeartIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>
        </svg>
    }
}

/// Lightning bolt.
#[component]
pub fn ZapIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>
        </svg>
    }
}
