// Command handlers module
pub mod snapshot;

// Re-exports for cleaner imports
pub use snapshot::execute as snapshot;
