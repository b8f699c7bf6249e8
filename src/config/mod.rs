//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default paths, catalog queries)
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel, Opt};
