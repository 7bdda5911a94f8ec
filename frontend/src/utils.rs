//! Small presentation helpers.

/// Merge a base utility-class string with an optional override.
///
/// The override is appended after the defaults; `None`, empty and
/// whitespace-only overrides are skipped. The defaults are never replaced.
pub fn cn(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.trim().is_empty() => format!("{} {}", base, extra.trim()),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_without_override() {
        assert_eq!(
            cn("relative overflow-hidden", None),
            "relative overflow-hidden"
        );
    }

    #[test]
    fn test_cn_appends_override_after_defaults() {
        assert_eq!(cn("relative", Some("bg-white")), "relative bg-white");
    }

    #[test]
    fn test_cn_skips_blank_override() {
        assert_eq!(cn("relative", Some("")), "relative");
        assert_eq!(cn("relative", Some("   ")), "relative");
    }

    #[test]
    fn test_cn_trims_override_whitespace() {
        assert_eq!(cn("relative", Some("  mt-4 ")), "relative mt-4");
    }
}
