//! Command-line configuration helpers.

pub mod overrides;

pub use overrides::{overrides_for_model, parse_override, parse_value};
