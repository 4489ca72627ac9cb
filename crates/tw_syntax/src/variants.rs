//! Variant-prefix splitting for utility class tokens.
//!
//! `md:hover:w-full` carries the variant chain `md`, `hover` in front of the
//! base utility `w-full`. A `:` only separates at the top level: colons inside
//! arbitrary-value brackets or parens (`bg-[url('a:b')]`, `[&:hover]:w-full`)
//! belong to the value. Naive colon splitting gets those wrong, so this is an
//! explicit scanner with two depth counters rather than a pattern match.

use crate::breakpoints::BreakpointConfig;

/// A class token split into its variant chain and base utility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSplit<'token> {
    /// The base utility, e.g. `w-full`.
    pub base: &'token str,
    /// Variant prefixes in source order, e.g. `["md", "hover"]`. Empty when
    /// the token has no top-level colon.
    pub variants: Vec<&'token str>,
}

impl<'token> VariantSplit<'token> {
    /// The whole token as base, no variants.
    const fn unsplit(token: &'token str) -> Self {
        Self {
            base: token,
            variants: Vec::new(),
        }
    }
}

/// Split a token into variant prefixes and a base utility.
///
/// Bracket and paren nesting are mutually exclusive depth domains: a character
/// only moves one counter while the other is zero. Any empty segment between
/// separators (leading, trailing, or doubled colons) disables splitting for
/// the whole token — malformed input is kept intact rather than guessed at.
pub fn split_variant_token(token: &str) -> VariantSplit<'_> {
    if !token.contains(':') {
        return VariantSplit::unsplit(token);
    }

    let mut separators: Vec<usize> = Vec::new();
    let mut bracket_depth: u32 = 0;
    let mut paren_depth: u32 = 0;
    for (index, character) in token.char_indices() {
        match character {
            '[' if paren_depth == 0 => bracket_depth += 1,
            ']' if paren_depth == 0 && bracket_depth > 0 => bracket_depth -= 1,
            '(' if bracket_depth == 0 => paren_depth += 1,
            ')' if bracket_depth == 0 && paren_depth > 0 => paren_depth -= 1,
            ':' if bracket_depth == 0 && paren_depth == 0 => separators.push(index),
            _ => {}
        }
    }
    if separators.is_empty() {
        return VariantSplit::unsplit(token);
    }

    let mut segments: Vec<&str> = Vec::with_capacity(separators.len() + 1);
    let mut segment_start = 0;
    for separator in separators {
        segments.push(&token[segment_start..separator]);
        segment_start = separator + 1;
    }
    segments.push(&token[segment_start..]);

    if segments.iter().any(|segment| segment.is_empty()) {
        return VariantSplit::unsplit(token);
    }
    let Some(base) = segments.pop() else {
        return VariantSplit::unsplit(token);
    };
    VariantSplit {
        base,
        variants: segments,
    }
}

/// Find the first variant (source order) that names a configured breakpoint.
///
/// State and pseudo-class variants (`hover`, `dark`, …) never match; they are
/// simply not keys of the configuration.
pub fn match_breakpoint<'variants>(
    variants: &[&'variants str],
    breakpoints: &BreakpointConfig,
) -> Option<&'variants str> {
    variants
        .iter()
        .copied()
        .find(|variant| breakpoints.contains_key(*variant))
}
