//! Per-breakpoint sizing constraints mined from utility class tokens.

use crate::StyleSizing;
use css_length::parse_style_length;
use std::collections::HashMap;
use tw_syntax::{BreakpointConfig, match_breakpoint, resolve_length, split_variant_token};

/// Sizing constraints contributed at one breakpoint bucket.
///
/// Each present field is a syntactically valid CSS length or function
/// expression — never `auto`, never unitless.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SizeInfo {
    pub width: Option<String>,
    pub min_width: Option<String>,
    pub max_width: Option<String>,
    pub height: Option<String>,
    pub min_height: Option<String>,
    pub max_height: Option<String>,
}

/// All sizing constraints of one class list, bucketed by breakpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct BreakpointSizing {
    /// Constraints without a breakpoint variant.
    pub base: SizeInfo,
    /// Constraints scoped to a named breakpoint.
    pub by_breakpoint: HashMap<String, SizeInfo>,
}

/// The sizing utilities this crate understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SizingUtility {
    Size,
    MinWidth,
    MaxWidth,
    Width,
    MinHeight,
    MaxHeight,
    Height,
}

/// Closed dispatch table, checked in order, first match wins. The compound
/// prefixes sit ahead of their one-letter suffixes so `max-w-` can never be
/// read as `w-`.
const SIZING_PREFIXES: [(&str, SizingUtility); 7] = [
    ("size-", SizingUtility::Size),
    ("min-w-", SizingUtility::MinWidth),
    ("max-w-", SizingUtility::MaxWidth),
    ("w-", SizingUtility::Width),
    ("min-h-", SizingUtility::MinHeight),
    ("max-h-", SizingUtility::MaxHeight),
    ("h-", SizingUtility::Height),
];

/// Fold every token of a class list into per-breakpoint constraint records.
///
/// Tokens that are not sizing utilities, and sizing utilities whose value does
/// not resolve to a length, contribute nothing. Within one bucket, later
/// tokens overwrite earlier ones field by field.
pub(crate) fn parse_size_info_by_breakpoint(
    class_name: &str,
    base_spacing_px: f64,
    breakpoints: &BreakpointConfig,
    custom_spacing: &HashMap<String, String>,
) -> BreakpointSizing {
    let mut sizing = BreakpointSizing::default();
    for token in class_name.split_whitespace() {
        let split = split_variant_token(token);
        let Some((utility, value_fragment)) = recognize_sizing_utility(split.base) else {
            continue;
        };
        let Some(resolved) =
            resolve_length(value_fragment, base_spacing_px, breakpoints, custom_spacing)
        else {
            continue;
        };

        let bucket = match match_breakpoint(&split.variants, breakpoints) {
            Some(breakpoint) => sizing.by_breakpoint.entry(breakpoint.to_owned()).or_default(),
            None => &mut sizing.base,
        };
        apply_sizing(bucket, utility, resolved);
    }
    sizing
}

/// Overlay inline-style lengths onto a constraint record.
///
/// Style wins over class-derived values, but an unparseable style value never
/// clears a field.
pub(crate) fn merge_style_into_size_info(info: &mut SizeInfo, style: &StyleSizing) {
    let fields = [
        (&style.width, &mut info.width),
        (&style.max_width, &mut info.max_width),
        (&style.height, &mut info.height),
        (&style.max_height, &mut info.max_height),
    ];
    for (style_value, field) in fields {
        if let Some(parsed) = style_value.as_ref().and_then(parse_style_length) {
            *field = Some(parsed);
        }
    }
}

fn recognize_sizing_utility(base: &str) -> Option<(SizingUtility, &str)> {
    SIZING_PREFIXES.iter().find_map(|(prefix, utility)| {
        base.strip_prefix(prefix)
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| (*utility, fragment))
    })
}

fn apply_sizing(info: &mut SizeInfo, utility: SizingUtility, value: String) {
    match utility {
        SizingUtility::Size => {
            info.width = Some(value.clone());
            info.height = Some(value);
        }
        SizingUtility::Width => info.width = Some(value),
        SizingUtility::MinWidth => info.min_width = Some(value),
        SizingUtility::MaxWidth => info.max_width = Some(value),
        SizingUtility::Height => info.height = Some(value),
        SizingUtility::MinHeight => info.min_height = Some(value),
        SizingUtility::MaxHeight => info.max_height = Some(value),
    }
}
