//! # Plotkit Common
//!
//! Shared types, errors and utilities for the Plotkit workspace.
//!
//! This crate provides the node identifier type, the error taxonomy and
//! the logging infrastructure used across all other Plotkit crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod logging;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{PlotError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use types::{NodeId, Timestamp};
