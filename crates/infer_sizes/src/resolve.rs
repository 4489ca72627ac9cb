//! Width resolution — collapse one bucket's constraints into a single CSS
//! length or expression.
//!
//! Plain px values clamp numerically; anything symbolic (percentages,
//! viewport units, `calc()`/`var()` expressions) falls back to emitting a CSS
//! `min()`/`max()`/`clamp()` expression so no constraint is dropped.

use crate::size_info::{BreakpointSizing, SizeInfo};
use css_length::{format_px, max_px, min_px, parse_px_number};
use tw_syntax::BreakpointConfig;

/// Resolve one bucket into a final width, or `None` when nothing usable is
/// known.
///
/// Precedence: explicit width (clamped by bounds); a lone max-width, which is
/// the "fluid width capped at N" pattern; a height converted through the
/// aspect ratio, again clamped by the width bounds.
pub(crate) fn compute_resolved_width(info: &SizeInfo, aspect_ratio: Option<f64>) -> Option<String> {
    if let Some(width) = &info.width {
        return Some(apply_min_max(
            width,
            info.min_width.as_deref(),
            info.max_width.as_deref(),
        ));
    }

    if let Some(max_width) = &info.max_width {
        return Some(max_width.clone());
    }

    let ratio = aspect_ratio?;
    let height_px = resolve_height_px(info)?;
    Some(apply_min_max(
        &format_px(height_px * ratio),
        info.min_width.as_deref(),
        info.max_width.as_deref(),
    ))
}

/// Breakpoint bucket with the base bucket's min/max constraints as fallback
/// bounds. Width and height never inherit; a breakpoint only sizes itself.
pub(crate) fn merge_over_base_constraints(bucket: &SizeInfo, base: &SizeInfo) -> SizeInfo {
    SizeInfo {
        width: bucket.width.clone(),
        height: bucket.height.clone(),
        min_width: bucket.min_width.clone().or_else(|| base.min_width.clone()),
        max_width: bucket.max_width.clone().or_else(|| base.max_width.clone()),
        min_height: bucket.min_height.clone().or_else(|| base.min_height.clone()),
        max_height: bucket.max_height.clone().or_else(|| base.max_height.clone()),
    }
}

/// One media-condition clause per resolvable breakpoint bucket, ordered by
/// descending threshold (ties by name, so map iteration order never shows).
pub(crate) fn build_breakpoint_conditions(
    sizing: &BreakpointSizing,
    aspect_ratio: Option<f64>,
    breakpoints: &BreakpointConfig,
) -> Vec<String> {
    let mut ordered: Vec<(&str, u32)> = breakpoints
        .iter()
        .map(|(name, threshold)| (name.as_str(), *threshold))
        .collect();
    ordered.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(right.0)));

    let mut conditions = Vec::new();
    for (name, min_width_px) in ordered {
        let Some(bucket) = sizing.by_breakpoint.get(name) else {
            continue;
        };
        let merged = merge_over_base_constraints(bucket, &sizing.base);
        let Some(resolved) = compute_resolved_width(&merged, aspect_ratio) else {
            continue;
        };
        conditions.push(format!("(min-width: {min_width_px}px) {resolved}"));
    }
    conditions
}

/// Clamp a width by optional min/max bounds.
///
/// All-px operands clamp numerically; otherwise the bounds are preserved
/// symbolically as `clamp()`, `max()`, or `min()`.
fn apply_min_max(value: &str, min_value: Option<&str>, max_value: Option<&str>) -> String {
    match (min_value, max_value) {
        (Some(lower), Some(upper)) => {
            if let (Some(value_px), Some(lower_px), Some(upper_px)) = (
                parse_px_number(value),
                parse_px_number(lower),
                parse_px_number(upper),
            ) {
                format_px(value_px.max(lower_px).min(upper_px))
            } else {
                format!("clamp({lower}, {value}, {upper})")
            }
        }
        (Some(lower), None) => {
            max_px(value, lower).unwrap_or_else(|| format!("max({value}, {lower})"))
        }
        (None, Some(upper)) => {
            min_px(value, upper).unwrap_or_else(|| format!("min({value}, {upper})"))
        }
        (None, None) => value.to_owned(),
    }
}

/// Effective height in px for ratio-based width derivation.
///
/// An explicit height is capped at max-height first, then floored at
/// min-height; with no explicit height, max-height stands in (floored by
/// min-height). Non-px heights cannot drive a numeric ratio conversion and
/// yield `None`.
fn resolve_height_px(info: &SizeInfo) -> Option<f64> {
    let height_px = info.height.as_deref().and_then(parse_px_number);
    let min_height_px = info.min_height.as_deref().and_then(parse_px_number);
    let max_height_px = info.max_height.as_deref().and_then(parse_px_number);

    if let Some(height) = height_px {
        let mut resolved = height;
        if let Some(upper) = max_height_px {
            resolved = resolved.min(upper);
        }
        if let Some(lower) = min_height_px {
            resolved = resolved.max(lower);
        }
        return Some(resolved);
    }

    let fallback = max_height_px?;
    Some(min_height_px.map_or(fallback, |lower| fallback.max(lower)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_with(
        width: Option<&str>,
        min_width: Option<&str>,
        max_width: Option<&str>,
    ) -> SizeInfo {
        SizeInfo {
            width: width.map(str::to_owned),
            min_width: min_width.map(str::to_owned),
            max_width: max_width.map(str::to_owned),
            ..SizeInfo::default()
        }
    }

    #[test]
    fn plain_width_passes_through() {
        assert_eq!(
            compute_resolved_width(&info_with(Some("128px"), None, None), None),
            Some("128px".to_owned())
        );
    }

    #[test]
    fn numeric_bounds_clamp_numerically() {
        assert_eq!(
            compute_resolved_width(&info_with(Some("40px"), Some("80px"), None), None),
            Some("80px".to_owned())
        );
        assert_eq!(
            compute_resolved_width(&info_with(Some("400px"), None, Some("320px")), None),
            Some("320px".to_owned())
        );
        assert_eq!(
            compute_resolved_width(&info_with(Some("400px"), Some("80px"), Some("320px")), None),
            Some("320px".to_owned())
        );
        assert_eq!(
            compute_resolved_width(&info_with(Some("100px"), Some("80px"), Some("320px")), None),
            Some("100px".to_owned())
        );
    }

    #[test]
    fn symbolic_operands_emit_css_expressions() {
        assert_eq!(
            compute_resolved_width(&info_with(Some("50%"), None, Some("320px")), None),
            Some("min(50%, 320px)".to_owned())
        );
        assert_eq!(
            compute_resolved_width(&info_with(Some("50%"), Some("10vw"), None), None),
            Some("max(50%, 10vw)".to_owned())
        );
        assert_eq!(
            compute_resolved_width(&info_with(Some("50vw"), Some("100px"), Some("800px")), None),
            Some("clamp(100px, 50vw, 800px)".to_owned())
        );
    }

    #[test]
    fn lone_max_width_caps_a_fluid_width() {
        assert_eq!(
            compute_resolved_width(&info_with(None, None, Some("200px")), None),
            Some("200px".to_owned())
        );
    }

    #[test]
    fn height_and_ratio_derive_width() {
        let bucket = SizeInfo {
            height: Some("40px".to_owned()),
            ..SizeInfo::default()
        };
        assert_eq!(
            compute_resolved_width(&bucket, Some(2.0)),
            Some("80px".to_owned())
        );
        assert_eq!(compute_resolved_width(&bucket, None), None);
    }

    #[test]
    fn height_clamps_before_ratio_conversion() {
        let capped = SizeInfo {
            height: Some("80px".to_owned()),
            max_height: Some("40px".to_owned()),
            ..SizeInfo::default()
        };
        assert_eq!(
            compute_resolved_width(&capped, Some(2.0)),
            Some("80px".to_owned())
        );

        let floored = SizeInfo {
            height: Some("40px".to_owned()),
            min_height: Some("80px".to_owned()),
            ..SizeInfo::default()
        };
        assert_eq!(
            compute_resolved_width(&floored, Some(2.0)),
            Some("160px".to_owned())
        );
    }

    #[test]
    fn max_height_stands_in_for_missing_height() {
        let bucket = SizeInfo {
            max_height: Some("40px".to_owned()),
            ..SizeInfo::default()
        };
        assert_eq!(
            compute_resolved_width(&bucket, Some(2.0)),
            Some("80px".to_owned())
        );
    }

    #[test]
    fn symbolic_height_cannot_drive_ratio() {
        let bucket = SizeInfo {
            height: Some("50vh".to_owned()),
            ..SizeInfo::default()
        };
        assert_eq!(compute_resolved_width(&bucket, Some(2.0)), None);
    }

    #[test]
    fn nothing_known_is_unresolvable() {
        assert_eq!(compute_resolved_width(&SizeInfo::default(), None), None);
        assert_eq!(compute_resolved_width(&SizeInfo::default(), Some(2.0)), None);
    }

    #[test]
    fn base_bounds_back_fill_breakpoint_buckets() {
        let base = SizeInfo {
            min_width: Some("80px".to_owned()),
            max_height: Some("200px".to_owned()),
            ..SizeInfo::default()
        };
        let bucket = SizeInfo {
            width: Some("40px".to_owned()),
            min_width: None,
            ..SizeInfo::default()
        };
        let merged = merge_over_base_constraints(&bucket, &base);
        assert_eq!(merged.min_width.as_deref(), Some("80px"));
        assert_eq!(merged.max_height.as_deref(), Some("200px"));
        assert_eq!(merged.width.as_deref(), Some("40px"));
        assert_eq!(merged.height, None);
    }

    #[test]
    fn bucket_bounds_beat_base_bounds() {
        let base = SizeInfo {
            min_width: Some("80px".to_owned()),
            ..SizeInfo::default()
        };
        let bucket = SizeInfo {
            width: Some("40px".to_owned()),
            min_width: Some("60px".to_owned()),
            ..SizeInfo::default()
        };
        assert_eq!(
            merge_over_base_constraints(&bucket, &base)
                .min_width
                .as_deref(),
            Some("60px")
        );
    }
}
