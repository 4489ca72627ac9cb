//! Infer a responsive image `sizes` descriptor from the utility classes that
//! already size the element.
//!
//! The same class list that lays out an image wrapper (`w-64`, `max-w-[50vw]`,
//! `lg:size-96`, …) is mined for per-breakpoint width constraints, merged with
//! inline-style overrides and an optional aspect ratio, and collapsed into a
//! media-condition list like `"(min-width: 1024px) 120px, 100px"`. A layout
//! author never computes the hint by hand, and it cannot drift from the
//! classes that actually size the element.
//!
//! Inference is best-effort over a closed utility grammar: out-of-grammar
//! input degrades to "ignore this token", and the only failure mode is
//! returning `None`, at which point the caller substitutes its own fallback
//! (typically `100vw`).
//! Reference: <https://developer.mozilla.org/en-US/docs/Web/API/HTMLImageElement/sizes>

#![forbid(unsafe_code)]

mod aspect_ratio;
mod resolve;
mod size_info;

use log::debug;
use std::collections::HashMap;

use crate::aspect_ratio::{aspect_ratio_from_class, src_aspect_ratio};
use crate::resolve::{build_breakpoint_conditions, compute_resolved_width};
use crate::size_info::{merge_style_into_size_info, parse_size_info_by_breakpoint};
use css_length::parse_style_aspect_ratio;

pub use aspect_ratio::IntrinsicSize;
pub use css_length::StyleValue;
pub use size_info::SizeInfo;
pub use tw_syntax::{BreakpointConfig, DEFAULT_BREAKPOINTS, default_breakpoints};

/// Tailwind v4's base spacing unit: one spacing step is 4px (0.25rem).
pub const DEFAULT_BASE_SPACING_PX: f64 = 4.0;

/// Inline-style sizing overrides, mirroring the style properties an element
/// wrapper would receive. Style values win over class-derived values on the
/// base bucket; breakpoint buckets are never touched by style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSizing {
    pub width: Option<StyleValue>,
    pub max_width: Option<StyleValue>,
    pub height: Option<StyleValue>,
    pub max_height: Option<StyleValue>,
    /// Width ÷ height, as a number or a `"W/H"` string.
    pub aspect_ratio: Option<StyleValue>,
}

/// Everything one inference call may consider. All fields are optional;
/// `SizesInput::default()` plus a class list is the common case.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizesInput {
    /// Whitespace-delimited utility class list.
    pub class_name: Option<String>,
    /// Inline-style overrides.
    pub style: Option<StyleSizing>,
    /// Explicit width-to-height ratio (e.g. `16.0 / 9.0`). A last-resort
    /// escape hatch for layouts like `h-10 w-auto`; wins over every other
    /// ratio source.
    pub ratio: Option<f64>,
    /// Intrinsic dimensions of the image source, used to derive a ratio.
    pub src: Option<IntrinsicSize>,
    /// Override for the base spacing unit in px; defaults to
    /// [`DEFAULT_BASE_SPACING_PX`].
    pub base_spacing_px: Option<f64>,
    /// Breakpoint configuration; defaults to the standard five breakpoints.
    pub breakpoints: Option<BreakpointConfig>,
    /// Named spacing values (e.g. `container` → `"1312px"`) for utilities
    /// like `w-container`.
    pub custom_spacing: Option<HashMap<String, String>>,
}

/// Infer a `sizes` descriptor from utility classes, style overrides, and an
/// optional aspect ratio.
///
/// Returns descending media conditions followed by an unconditioned base
/// clause, the base clause alone when no breakpoint contributes, or `None`
/// when the base width cannot be resolved at all — the caller must then
/// supply its own fallback.
///
/// ```
/// use infer_sizes::{SizesInput, infer_image_sizes};
///
/// let input = SizesInput {
///     class_name: Some("size-25 lg:size-30".to_owned()),
///     ..SizesInput::default()
/// };
/// assert_eq!(
///     infer_image_sizes(&input),
///     Some("(min-width: 1024px) 120px, 100px".to_owned())
/// );
/// ```
pub fn infer_image_sizes(input: &SizesInput) -> Option<String> {
    let base_spacing_px = input.base_spacing_px.unwrap_or(DEFAULT_BASE_SPACING_PX);
    let breakpoints = input.breakpoints.clone().unwrap_or_else(default_breakpoints);
    let custom_spacing = input.custom_spacing.clone().unwrap_or_default();
    let class_name = input.class_name.as_deref().unwrap_or("");

    let mut sizing =
        parse_size_info_by_breakpoint(class_name, base_spacing_px, &breakpoints, &custom_spacing);
    if let Some(style) = &input.style {
        merge_style_into_size_info(&mut sizing.base, style);
    }

    let aspect_ratio = resolve_aspect_ratio(input, class_name);

    let Some(resolved_base) = compute_resolved_width(&sizing.base, aspect_ratio) else {
        debug!("no base width resolvable from class list {class_name:?}");
        return None;
    };

    let conditions = build_breakpoint_conditions(&sizing, aspect_ratio, &breakpoints);
    if conditions.is_empty() {
        return Some(resolved_base);
    }
    Some(format!("{}, {resolved_base}", conditions.join(", ")))
}

/// Pick the aspect ratio: explicit argument, then style, then intrinsic
/// source dimensions, then `aspect-*` classes. Each source validates
/// independently; an invalid candidate falls through to the next.
fn resolve_aspect_ratio(input: &SizesInput, class_name: &str) -> Option<f64> {
    if let Some(ratio) = input.ratio
        && ratio.is_finite()
        && ratio > 0.0
    {
        return Some(ratio);
    }

    input
        .style
        .as_ref()
        .and_then(|style| style.aspect_ratio.as_ref())
        .and_then(parse_style_aspect_ratio)
        .or_else(|| src_aspect_ratio(input.src.as_ref()))
        .or_else(|| aspect_ratio_from_class(class_name))
}
