//! Prefix data processing.
//!
//! - [`pairs`] - Parsing prefix lists and comparing every pair of them

mod pairs;

// Re-export public functions
pub use pairs::{compare_pairs, parse_prefixes, PairReport};
