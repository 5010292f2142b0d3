//! # bc-core
//!
//! Error definitions shared by the bizcal workspace crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
