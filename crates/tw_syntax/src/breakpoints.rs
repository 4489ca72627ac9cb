//! Named viewport-width breakpoints.
//! Reference: <https://tailwindcss.com/docs/responsive-design>

use std::collections::HashMap;

/// Mapping from breakpoint name to its min-width threshold in pixels.
///
/// Keys are unique; no ordering is implied by iteration. The descriptor
/// assembler imposes descending-threshold order explicitly.
pub type BreakpointConfig = HashMap<String, u32>;

/// Standard Tailwind CSS v4 breakpoints (min-widths in pixels).
pub const DEFAULT_BREAKPOINTS: [(&str, u32); 5] = [
    ("sm", 640),
    ("md", 768),
    ("lg", 1024),
    ("xl", 1280),
    ("2xl", 1536),
];

/// Build the standard breakpoint configuration.
pub fn default_breakpoints() -> BreakpointConfig {
    DEFAULT_BREAKPOINTS
        .iter()
        .map(|(name, min_width_px)| ((*name).to_owned(), *min_width_px))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_standard_thresholds() {
        let config = default_breakpoints();
        assert_eq!(config.len(), 5);
        assert_eq!(config.get("sm"), Some(&640));
        assert_eq!(config.get("md"), Some(&768));
        assert_eq!(config.get("lg"), Some(&1024));
        assert_eq!(config.get("xl"), Some(&1280));
        assert_eq!(config.get("2xl"), Some(&1536));
    }
}
