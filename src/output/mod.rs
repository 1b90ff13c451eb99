//! Output formatting for comparison reports.
//!
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{format_field, format_row, print_text};
