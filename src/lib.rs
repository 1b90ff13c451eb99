//! Address and prefix arithmetic for routing.
//!
//! - [`models`] - [`Address`] and [`Prefix`] value types
//! - [`filter`] - Route filter actions applied to a prefix and its path attributes
//! - [`processing`] - Pairwise prefix comparison used by the command-line tool
//! - [`output`] - Text and JSON rendering of comparison reports

pub mod config;
mod error;
pub mod filter;
pub mod models;
pub mod output;
pub mod processing;

pub use error::NetError;
pub use models::{Address, Prefix};
