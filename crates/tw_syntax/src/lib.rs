//! Utility-class token grammar — variant prefixes, breakpoint thresholds, and
//! utility-value length resolution.
//! Reference: <https://tailwindcss.com/docs/styling-with-utility-classes>

#![forbid(unsafe_code)]

pub mod breakpoints;
pub mod length;
pub mod variants;

// Re-exports for ergonomic access from other crates.
pub use breakpoints::{BreakpointConfig, DEFAULT_BREAKPOINTS, default_breakpoints};
pub use length::resolve_length;
pub use variants::{VariantSplit, match_breakpoint, split_variant_token};
