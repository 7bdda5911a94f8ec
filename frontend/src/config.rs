//! Site content configuration.
//!
//! Centralized copy, image sources and page metadata for the Pro-Active
//! Therapy frontend. Everything here is a compile-time literal; components
//! read it and never mutate it.

use crate::types::{Feature, FeatureIcon, HeroContent, Stat};

/// Document title for the demo page.
pub const PAGE_TITLE: &str = "Pro-Active Therapy Demo";

/// Document meta description for the demo page.
pub const PAGE_DESCRIPTION: &str = "Demo page showcasing the Pro-Active Therapy hero section";

/// Clinic logo asset path.
///
/// Served from the site's static uploads directory.
pub const LOGO_SRC: &str = "/uploads/Pro-Active-Therapy.gif";

/// Alt text for the clinic logo.
pub const LOGO_ALT: &str = "Pro-Active Therapy Logo";

/// Hero section copy and link targets.
pub const HERO: HeroContent = HeroContent {
    subtitle: "Professional Physiotherapy Services",
    title: "Get Moving. Stay Active. Live Better.",
    description: "Expert care for injury recovery, pain management, and movement optimization. Your journey to better health starts here.",
    background_image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=1920&h=1080&fit=crop",
    background_image_alt: "Physiotherapist helping patient with rehabilitation exercises",
    cta_text: "Book Your Appointment",
    cta_url: "/contact",
    secondary_cta_text: "Learn More",
    secondary_cta_url: "/about",
};

/// Feature pills, in display order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: FeatureIcon::Activity,
        label: "Recovery",
    },
    Feature {
        icon: FeatureIcon::Heart,
        label: "Wellness",
    },
    Feature {
        icon: FeatureIcon::Zap,
        label: "Performance",
    },
];

/// Floating card statistics, in display order.
pub const STATS: [Stat; 3] = [
    Stat {
        value: "15+",
        label: "Years Experience",
    },
    Stat {
        value: "5000+",
        label: "Patients Treated",
    },
    Stat {
        value: "98%",
        label: "Success Rate",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_content_is_fully_populated() {
        let fields = [
            HERO.subtitle,
            HERO.title,
            HERO.description,
            HERO.background_image,
            HERO.background_image_alt,
            HERO.cta_text,
            HERO.cta_url,
            HERO.secondary_cta_text,
            HERO.secondary_cta_url,
        ];
        for field in fields {
            assert!(!field.trim().is_empty(), "empty hero content field");
        }
    }

    #[test]
    fn test_hero_headline_copy() {
        assert_eq!(HERO.title, "Get Moving. Stay Active. Live Better.");
    }

    #[test]
    fn test_cta_targets() {
        assert_eq!(HERO.cta_url, "/contact");
        assert_eq!(HERO.secondary_cta_url, "/about");
    }

    #[test]
    fn test_feature_pills_order() {
        let labels: Vec<_> = FEATURES.iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Recovery", "Wellness", "Performance"]);
    }

    #[test]
    fn test_stats_order() {
        let values: Vec<_> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, ["15+", "5000+", "98%"]);

        let labels: Vec<_> = STATS.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            ["Years Experience", "Patients Treated", "Success Rate"]
        );
    }

    #[test]
    fn test_page_metadata() {
        assert_eq!(PAGE_TITLE, "Pro-Active Therapy Demo");
        assert!(!PAGE_DESCRIPTION.is_empty());
    }
}
