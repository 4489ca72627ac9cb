//! CSS length primitives — formatting, strict px parsing, and inline-style value validation.
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

#![forbid(unsafe_code)]

use cssparser::{Parser, ParserInput, Token};

/// Length units accepted in inline-style string values.
///
/// Only units that can describe a rendered width are allowed; physical units
/// (`pt`, `cm`, …) and bare percentages are rejected because a percentage of an
/// unknown container tells the image loader nothing.
const STYLE_LENGTH_UNITS: [&str; 13] = [
    "px", "rem", "em", "vw", "vh", "vmin", "vmax", "dvw", "lvw", "svw", "dvh", "lvh", "svh",
];

/// Math functions accepted as inline-style length expressions.
/// Spec: <https://www.w3.org/TR/css-values-4/#math-function>
const STYLE_LENGTH_FUNCTIONS: [&str; 4] = ["calc", "min", "max", "clamp"];

/// An inline-style value as supplied by a caller: either a bare number or CSS text.
///
/// Bare numbers mirror the common framework convention of treating unitless
/// style values as pixel counts.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A bare number. Meaning depends on the property: a pixel count for
    /// lengths, a plain ratio for aspect ratios.
    Number(f64),
    /// Raw CSS text, validated before use.
    Text(String),
}

/// Format a pixel count as a CSS length: round to 3 decimal places, shortest
/// decimal form (no trailing zeros, no trailing dot), `px` suffix.
pub fn format_px(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{rounded}px")
}

/// Parse a plain px length of the form `<digits>[.<digits>]px`.
///
/// Signs and exponents are rejected: negative lengths are never produced by
/// this workspace, and anything fancier than a plain decimal means the value
/// came from an arbitrary expression that cannot be compared numerically.
pub fn parse_px_number(length: &str) -> Option<f64> {
    parse_unsigned_decimal(length.strip_suffix("px")?)
}

/// Parse a plain unsigned decimal (`<digits>[.<digits>]`, nothing else).
pub fn parse_unsigned_decimal(text: &str) -> Option<f64> {
    let (integer_digits, fraction_digits) = match text.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, Some(fraction_part)),
        None => (text, None),
    };
    if integer_digits.is_empty() || !integer_digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if let Some(digits) = fraction_digits
        && (digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()))
    {
        return None;
    }
    text.parse().ok()
}

/// Numeric minimum of two plain px lengths.
///
/// Returns `None` when either side is not a plain px value; callers fall back
/// to emitting a symbolic CSS `min()` expression instead.
pub fn min_px(first: &str, second: &str) -> Option<String> {
    let first_px = parse_px_number(first)?;
    let second_px = parse_px_number(second)?;
    Some(format_px(first_px.min(second_px)))
}

/// Numeric maximum of two plain px lengths; `None` when not comparable.
pub fn max_px(first: &str, second: &str) -> Option<String> {
    let first_px = parse_px_number(first)?;
    let second_px = parse_px_number(second)?;
    Some(format_px(first_px.max(second_px)))
}

/// Parse an inline-style sizing value into a canonical CSS length string.
///
/// Accepted forms:
/// - a bare non-negative number, treated as a pixel count;
/// - a bare literal length, `<number><unit>` with a unit from
///   [`STYLE_LENGTH_UNITS`], unsigned;
/// - a `calc()`/`min()`/`max()`/`clamp()` call with non-empty arguments;
/// - a `var()` reference with non-empty arguments.
///
/// `auto`, empty strings, and everything else yield `None` — the caller keeps
/// whatever value it already had.
pub fn parse_style_length(value: &StyleValue) -> Option<String> {
    match value {
        StyleValue::Number(pixels) => {
            (pixels.is_finite() && *pixels >= 0.0).then(|| format!("{pixels}px"))
        }
        StyleValue::Text(text) => parse_style_length_text(text),
    }
}

/// Parse an inline-style aspect-ratio value into a strictly positive ratio.
///
/// Accepts a positive finite number, a `"<number>"` string, or a `"W/H"`
/// fraction with positive finite halves.
/// Spec: <https://www.w3.org/TR/css-sizing-4/#aspect-ratio>
pub fn parse_style_aspect_ratio(value: &StyleValue) -> Option<f64> {
    match value {
        StyleValue::Number(ratio) => (ratio.is_finite() && *ratio > 0.0).then_some(*ratio),
        StyleValue::Text(text) => parse_aspect_ratio_text(text),
    }
}

/// Validate a string style value with the CSS tokenizer.
///
/// Token-level validation mirrors how `<length>` parsing works elsewhere in
/// the stack: one `Dimension` token with an accepted unit, or one known
/// function token whose block is non-empty, with nothing trailing.
fn parse_style_length_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "auto" {
        return None;
    }

    let mut input = ParserInput::new(trimmed);
    let mut parser = Parser::new(&mut input);
    let token = parser.next().ok()?.clone();
    let accepted = match token {
        Token::Dimension {
            has_sign,
            value,
            ref unit,
            ..
        } => !has_sign && value >= 0.0 && STYLE_LENGTH_UNITS.contains(&unit.as_ref()),
        Token::Function(ref name) => {
            let function_name = name.as_ref();
            (function_name == "var" || STYLE_LENGTH_FUNCTIONS.contains(&function_name))
                && trimmed.ends_with(')')
                && has_function_arguments(&mut parser)
        }
        Token::Ident(_)
        | Token::AtKeyword(_)
        | Token::Hash(_)
        | Token::IDHash(_)
        | Token::QuotedString(_)
        | Token::UnquotedUrl(_)
        | Token::Delim(_)
        | Token::Number { .. }
        | Token::Percentage { .. }
        | Token::WhiteSpace(_)
        | Token::Comment(_)
        | Token::Colon
        | Token::Semicolon
        | Token::Comma
        | Token::IncludeMatch
        | Token::DashMatch
        | Token::PrefixMatch
        | Token::SuffixMatch
        | Token::SubstringMatch
        | Token::CDO
        | Token::CDC
        | Token::ParenthesisBlock
        | Token::SquareBracketBlock
        | Token::CurlyBracketBlock
        | Token::BadUrl(_)
        | Token::BadString(_)
        | Token::CloseParenthesis
        | Token::CloseSquareBracket
        | Token::CloseCurlyBracket => false,
    };

    (accepted && parser.is_exhausted()).then(|| trimmed.to_owned())
}

/// Consume the current function block and report whether it held any token.
fn has_function_arguments(parser: &mut Parser<'_, '_>) -> bool {
    let arguments_seen: Result<bool, cssparser::ParseError<'_, ()>> =
        parser.parse_nested_block(|arguments| {
            let mut seen_any = false;
            while arguments.next().is_ok() {
                seen_any = true;
            }
            Ok(seen_any)
        });
    arguments_seen.unwrap_or(false)
}

/// Parse a `"<number>"` or `"W/H"` aspect-ratio string.
fn parse_aspect_ratio_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(ratio) = parse_unsigned_decimal(trimmed) {
        return (ratio > 0.0).then_some(ratio);
    }

    let (numerator_text, denominator_text) = trimmed.split_once('/')?;
    let numerator = parse_unsigned_decimal(numerator_text.trim())?;
    let denominator = parse_unsigned_decimal(denominator_text.trim())?;
    if numerator <= 0.0 || denominator <= 0.0 {
        return None;
    }
    Some(numerator / denominator)
}
