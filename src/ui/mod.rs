// UI and formatting module

pub mod formatters;
pub mod report;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_celsius, format_percent, format_rate};
pub use report::{render_header, render_report};
