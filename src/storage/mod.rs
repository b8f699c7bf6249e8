//! Source database access.

pub mod pool;

// Re-export commonly used items
pub use pool::{close_source_db, open_source_db};
