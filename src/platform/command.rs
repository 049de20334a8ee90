use std::process::Command;

use crate::core::config::CommandSpec;
use crate::error::{HoiError, Result};

/// Trait for running external diagnostic commands
///
/// The probes only need captured stdout; a command that cannot be spawned or
/// that exits unsuccessfully is an error.
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<String>;
}

/// Runs commands through `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<String> {
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .output()
            .map_err(|e| HoiError::command(format!("Failed to run {}: {}", spec.program, e)))?;

        if !output.status.success() {
            return Err(HoiError::command(format!(
                "{} exited with {}",
                spec.display(),
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
