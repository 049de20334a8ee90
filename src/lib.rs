// hoi-ola Library - Public API

// Re-export error types
pub mod error;
pub use error::{HoiError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::ProbeConfig;
pub use crate::core::snapshot::{Snapshot, SnapshotCollector};

// Initialize logging (stderr, filtered by RUST_LOG, warn by default)
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
