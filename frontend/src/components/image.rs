//! Image rendering primitive.
//!
//! Thin wrapper over a plain `img` element reproducing the loading hints a
//! framework image pipeline would emit: `priority` maps to eager loading
//! with high fetch priority, `fill` stretches the image over its nearest
//! positioned ancestor instead of using fixed dimensions.

use leptos::*;

use crate::utils::cn;

/// Classes applied in fill-mode.
const FILL_CLASS: &str = "absolute inset-0 h-full w-full";

/// Map the priority hint onto (`loading`, `fetchpriority`) attribute values.
fn loading_hints(priority: bool) -> (&'static str, &'static str) {
    if priority {
        ("eager", "high")
    } else {
        ("lazy", "auto")
    }
}

/// Fixed dimensions are dropped in fill-mode.
fn dimensions(fill: bool, width: Option<u32>, height: Option<u32>) -> (Option<u32>, Option<u32>) {
    if fill {
        (None, None)
    } else {
        (width, height)
    }
}

/// `img` element with framework-style loading hints.
///
/// `width`/`height` are ignored in fill-mode; `sizes` only matters for
/// responsive sources and is passed through untouched.
#[component]
pub fn AppImage(
    /// Source URL or site-local path
    src: &'static str,
    /// Alternative text
    alt: &'static str,
    /// Fixed width in CSS pixels
    #[prop(optional)]
    width: Option<u32>,
    /// Fixed height in CSS pixels
    #[prop(optional)]
    height: Option<u32>,
    /// Stretch over the nearest positioned ancestor
    #[prop(optional)]
    fill: bool,
    /// Eager-load with high fetch priority
    #[prop(optional)]
    priority: bool,
    /// Extra utility classes
    #[prop(optional, into)]
    class: Option<String>,
    /// Responsive sizes hint
    #[prop(optional)]
    sizes: Option<&'static str>,
) -> impl IntoView {
    let (loading, fetchpriority) = loading_hints(priority);
    let (width, height) = dimensions(fill, width, height);
    let class = if fill {
        cn(FILL_CLASS, class.as_deref())
    } else {
        class.unwrap_or_default()
    };

    view! {
        <img
            src=src
            alt=alt
            width=width
            height=height
            sizes=sizes
            loading=loading
            fetchpriority=fetchpriority
            decoding="async"
            class=class
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_maps_to_eager_high() {
        assert_eq!(loading_hints(true), ("eager", "high"));
    }

    #[test]
    fn test_default_maps_to_lazy_auto() {
        assert_eq!(loading_hints(false), ("lazy", "auto"));
    }

    #[test]
    fn test_fill_drops_fixed_dimensions() {
        assert_eq!(dimensions(true, Some(120), Some(120)), (None, None));
        assert_eq!(
            dimensions(false, Some(120), Some(120)),
            (Some(120), Some(120))
        );
    }
}
