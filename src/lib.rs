pub mod config;
pub mod core;
pub mod drill;
pub mod validation;

pub use crate::core::converter::romanize;
pub use validation::{analyze_input, is_complete_match, is_valid_prefix, InputCheck};
