//! Colorized snapshot report.

use colored::*;

use super::formatters::{format_celsius, format_percent};
use crate::core::snapshot::Snapshot;
use crate::platform::format_clock;

pub const TITLE: &str = "=== hoi-ola System Monitor ===";
pub const GPU_NOT_AVAILABLE: &str = "Not available";

/// Title line followed by a blank line, printed before sampling starts.
pub fn render_header() -> String {
    format!("{}\n\n", TITLE.cyan())
}

/// Timestamp line plus one line per reading and a trailing blank line.
pub fn render_report(snapshot: &Snapshot) -> String {
    let gpu = match snapshot.gpu_temp_c {
        Some(celsius) => format_celsius(celsius),
        None => GPU_NOT_AVAILABLE.to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("[{}]", format_clock(&snapshot.timestamp)).magenta()
    ));
    out.push_str(&format!(
        "{}     {}\n",
        "RAM Usage:".green(),
        format_percent(snapshot.ram_percent)
    ));
    out.push_str(&format!(
        "{}      {}\n",
        "CPU Temp:".yellow(),
        format_celsius(snapshot.cpu_temp_c)
    ));
    out.push_str(&format!("{}      {}\n", "GPU Temp:".blue(), gpu));
    out.push_str(&format!(
        "{}       RX: {} TX: {}\n",
        "Network:".red(),
        snapshot.network.rx,
        snapshot.network.tx
    ));
    out.push('\n');
    out
}
