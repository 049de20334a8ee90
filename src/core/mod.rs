// Core probing logic
pub mod config;
pub mod probes;
pub mod snapshot;
