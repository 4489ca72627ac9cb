//! Aspect-ratio derivation from intrinsic dimensions and `aspect-*` utilities.
//! Reference: <https://tailwindcss.com/docs/aspect-ratio>

use css_length::parse_unsigned_decimal;
use tw_syntax::split_variant_token;

/// Intrinsic dimensions of an image source, e.g. from build-time imported
/// image metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntrinsicSize {
    pub width: f64,
    pub height: f64,
}

/// Ratio from intrinsic source dimensions; both must be finite and positive.
pub(crate) fn src_aspect_ratio(src: Option<&IntrinsicSize>) -> Option<f64> {
    let size = src?;
    (size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0)
        .then(|| size.width / size.height)
}

/// Scan a class list for the first `aspect-*` utility that parses.
///
/// Malformed candidates (zero, negative, non-finite, out of grammar) are
/// skipped; scanning continues with the next token.
pub(crate) fn aspect_ratio_from_class(class_name: &str) -> Option<f64> {
    class_name
        .split_whitespace()
        .find_map(|token| aspect_ratio_from_base_token(split_variant_token(token).base))
}

/// Parse one `aspect-*` base utility.
///
/// Built-in forms: `aspect-square` (1), `aspect-video` (16/9), and
/// `aspect-<a>/<b>` with plain unsigned decimals. Arbitrary form:
/// `aspect-[<inner>]` accepting `num/num` or a single positive number.
fn aspect_ratio_from_base_token(base: &str) -> Option<f64> {
    if base == "aspect-square" {
        return Some(1.0);
    }
    if base == "aspect-video" {
        return Some(16.0 / 9.0);
    }

    let value = base.strip_prefix("aspect-")?;
    if let Some(inner) = value.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return arbitrary_aspect_ratio(inner);
    }

    let (numerator_text, denominator_text) = value.split_once('/')?;
    let numerator = parse_unsigned_decimal(numerator_text)?;
    let denominator = parse_unsigned_decimal(denominator_text)?;
    (numerator > 0.0 && denominator > 0.0).then(|| numerator / denominator)
}

/// Parse the inside of `aspect-[…]`: underscores read as spaces, then either
/// a `num/num` fraction or a single positive finite number (scientific
/// notation included — arbitrary values are free-form).
fn arbitrary_aspect_ratio(inner: &str) -> Option<f64> {
    let unescaped = inner.replace('_', " ");
    let trimmed = unescaped.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some((numerator_text, denominator_text)) = trimmed.split_once('/') {
        let numerator: f64 = numerator_text.trim().parse().ok()?;
        let denominator: f64 = denominator_text.trim().parse().ok()?;
        return (numerator.is_finite()
            && denominator.is_finite()
            && numerator > 0.0
            && denominator > 0.0)
            .then(|| numerator / denominator);
    }

    let ratio: f64 = trimmed.parse().ok()?;
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}
