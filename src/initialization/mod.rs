//! Application initialization.
//!
//! The exporter's only process-wide resource is the logger; the database
//! connection is scoped to a run (see `storage`).

mod logger;

// Re-export public API
pub use logger::init_logger_with;
