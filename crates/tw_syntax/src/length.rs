//! Utility-value → CSS length resolution.
//!
//! Resolves the value fragment of a sizing utility (`32`, `1/2`, `[50%]`,
//! `(--x)`, `screen-md`, …) to a canonical CSS length string. First match in
//! a strict precedence chain wins; anything out of grammar resolves to `None`.
//! Reference: <https://tailwindcss.com/docs/width>

use crate::breakpoints::BreakpointConfig;
use css_length::format_px;
use std::collections::HashMap;

/// The six viewport-relative dynamic keywords.
/// Spec: <https://www.w3.org/TR/css-values-4/#viewport-variants>
const VIEWPORT_KEYWORDS: [&str; 6] = ["dvw", "lvw", "svw", "dvh", "lvh", "svh"];

/// Resolve a utility value fragment into a CSS length string.
///
/// `auto` and `full` are width intents, not lengths, and short-circuit to
/// `None` before any lookup. Precedence afterwards: reserved `px` / custom
/// spacing, `screen` keywords, viewport keywords, fractions, arbitrary
/// brackets, arbitrary parens, then plain spacing-scale numbers.
pub fn resolve_length(
    raw: &str,
    base_spacing_px: f64,
    breakpoints: &BreakpointConfig,
    custom_spacing: &HashMap<String, String>,
) -> Option<String> {
    if raw == "auto" || raw == "full" {
        return None;
    }

    resolve_fixed_keyword(raw, custom_spacing)
        .or_else(|| resolve_screen(raw, breakpoints))
        .or_else(|| resolve_viewport_keyword(raw))
        .or_else(|| resolve_fraction(raw))
        .or_else(|| resolve_arbitrary_brackets(raw))
        .or_else(|| resolve_arbitrary_parens(raw))
        .or_else(|| resolve_spacing_multiple(raw, base_spacing_px))
}

/// Reserved `px` (always `1px`, custom spacing cannot shadow it) and custom
/// named spacing values, taken verbatim.
fn resolve_fixed_keyword(raw: &str, custom_spacing: &HashMap<String, String>) -> Option<String> {
    if raw == "px" {
        return Some("1px".to_owned());
    }
    custom_spacing.get(raw).cloned()
}

/// `screen` → `100vw`; `screen-<name>` → the named breakpoint's threshold.
fn resolve_screen(raw: &str, breakpoints: &BreakpointConfig) -> Option<String> {
    if raw == "screen" {
        return Some("100vw".to_owned());
    }
    let name = raw.strip_prefix("screen-")?;
    breakpoints
        .get(name)
        .map(|min_width_px| format!("{min_width_px}px"))
}

/// `dvw`/`lvw`/`svw`/`dvh`/`lvh`/`svh` → the full viewport extent.
fn resolve_viewport_keyword(raw: &str) -> Option<String> {
    VIEWPORT_KEYWORDS
        .contains(&raw)
        .then(|| format!("100{raw}"))
}

/// `<a>/<b>` → a percentage, rounded to 6 decimal places.
///
/// A zero denominator falls out naturally: the quotient is non-finite and is
/// rejected by the finiteness check.
fn resolve_fraction(raw: &str) -> Option<String> {
    let (numerator_text, denominator_text) = raw.split_once('/')?;
    let numerator: f64 = numerator_text.parse().ok()?;
    let denominator: f64 = denominator_text.parse().ok()?;
    if !numerator.is_finite() || !denominator.is_finite() {
        return None;
    }
    let percent = numerator / denominator * 100.0;
    if !percent.is_finite() {
        return None;
    }
    let rounded = (percent * 1_000_000.0).round() / 1_000_000.0;
    Some(format!("{rounded}%"))
}

/// `[<inner>]` → inner text with underscores as spaces, trimmed, verbatim.
///
/// No further validation: arbitrary values are the author's escape hatch and
/// may well be CSS this crate has never heard of.
fn resolve_arbitrary_brackets(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
    let unescaped = inner.replace('_', " ");
    let trimmed = unescaped.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// `(<inner>)` → trimmed inner text; a leading `--` is shorthand for a
/// custom-property reference and gets wrapped as `var(…)`.
fn resolve_arbitrary_parens(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix('(')?.strip_suffix(')')?.trim();
    if inner.is_empty() {
        return None;
    }
    if inner.starts_with("--") {
        return Some(format!("var({inner})"));
    }
    Some(inner.to_owned())
}

/// Plain number → steps on the spacing scale (`n * base_spacing_px`).
fn resolve_spacing_multiple(raw: &str, base_spacing_px: f64) -> Option<String> {
    let steps: f64 = raw.parse().ok()?;
    if !steps.is_finite() || steps < 0.0 {
        return None;
    }
    Some(format_px(steps * base_spacing_px))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::default_breakpoints;

    fn resolve(raw: &str) -> Option<String> {
        resolve_length(raw, 4.0, &default_breakpoints(), &HashMap::new())
    }

    #[test]
    fn auto_and_full_are_never_lengths() {
        assert_eq!(resolve("auto"), None);
        assert_eq!(resolve("full"), None);
    }

    #[test]
    fn auto_and_full_beat_custom_spacing() {
        let mut custom_spacing = HashMap::new();
        custom_spacing.insert("full".to_owned(), "100%".to_owned());
        assert_eq!(
            resolve_length("full", 4.0, &default_breakpoints(), &custom_spacing),
            None
        );
    }

    #[test]
    fn spacing_scale_numbers_multiply_base_spacing() {
        assert_eq!(resolve("32"), Some("128px".to_owned()));
        assert_eq!(resolve("0"), Some("0px".to_owned()));
        assert_eq!(resolve("2.5"), Some("10px".to_owned()));
        assert_eq!(
            resolve_length("10", 8.0, &default_breakpoints(), &HashMap::new()),
            Some("80px".to_owned())
        );
    }

    #[test]
    fn negative_and_non_numeric_are_rejected() {
        assert_eq!(resolve("-4"), None);
        assert_eq!(resolve("nan"), None);
        assert_eq!(resolve("inf"), None);
        assert_eq!(resolve("banana"), None);
    }

    #[test]
    fn px_keyword_is_one_pixel() {
        assert_eq!(resolve("px"), Some("1px".to_owned()));
    }

    #[test]
    fn px_keyword_cannot_be_shadowed_by_custom_spacing() {
        let mut custom_spacing = HashMap::new();
        custom_spacing.insert("px".to_owned(), "999px".to_owned());
        assert_eq!(
            resolve_length("px", 4.0, &default_breakpoints(), &custom_spacing),
            Some("1px".to_owned())
        );
    }

    #[test]
    fn custom_spacing_values_pass_through_verbatim() {
        let mut custom_spacing = HashMap::new();
        custom_spacing.insert("container".to_owned(), "1312px".to_owned());
        assert_eq!(
            resolve_length("container", 4.0, &default_breakpoints(), &custom_spacing),
            Some("1312px".to_owned())
        );
    }

    #[test]
    fn screen_keywords_use_breakpoint_thresholds() {
        assert_eq!(resolve("screen"), Some("100vw".to_owned()));
        assert_eq!(resolve("screen-sm"), Some("640px".to_owned()));
        assert_eq!(resolve("screen-2xl"), Some("1536px".to_owned()));
        assert_eq!(resolve("screen-tablet"), None);
    }

    #[test]
    fn viewport_keywords_expand_to_full_extent() {
        for keyword in ["dvw", "lvw", "svw", "dvh", "lvh", "svh"] {
            assert_eq!(resolve(keyword), Some(format!("100{keyword}")));
        }
        assert_eq!(resolve("vw"), None);
    }

    #[test]
    fn fractions_become_percentages() {
        assert_eq!(resolve("1/2"), Some("50%".to_owned()));
        assert_eq!(resolve("1/3"), Some("33.333333%".to_owned()));
        assert_eq!(resolve("2/3"), Some("66.666667%".to_owned()));
        assert_eq!(resolve("3/4"), Some("75%".to_owned()));
    }

    #[test]
    fn degenerate_fractions_are_rejected() {
        assert_eq!(resolve("1/0"), None);
        assert_eq!(resolve("1/2/3"), None);
        assert_eq!(resolve("a/b"), None);
    }

    #[test]
    fn bracket_values_pass_through_with_underscores_unescaped() {
        assert_eq!(resolve("[350px]"), Some("350px".to_owned()));
        assert_eq!(resolve("[50%]"), Some("50%".to_owned()));
        assert_eq!(
            resolve("[calc(100%_-_2rem)]"),
            Some("calc(100% - 2rem)".to_owned())
        );
        assert_eq!(resolve("[]"), None);
        assert_eq!(resolve("[_]"), None);
    }

    #[test]
    fn paren_values_wrap_custom_properties() {
        assert_eq!(
            resolve("(--container-width)"),
            Some("var(--container-width)".to_owned())
        );
        assert_eq!(resolve("(50vw)"), Some("50vw".to_owned()));
        assert_eq!(resolve("()"), None);
    }
}
