//! Default command: sample once, print the report, exit.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::snapshot::SnapshotCollector;
use crate::ui::report::{render_header, render_report};

/// Execute the snapshot command
///
/// Never fails on probe errors; a broken stdout is logged and ignored so the
/// process still exits successfully.
pub fn execute() -> Result<()> {
    emit(&render_header());

    let mut collector = SnapshotCollector::new();
    let snapshot = collector.collect();

    emit(&render_report(&snapshot));
    Ok(())
}

fn emit(text: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
        log::warn!("Failed to write report: {}", e);
    }
}
