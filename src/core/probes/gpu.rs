//! GPU temperature probe.
//!
//! Asks `nvidia-smi` first, then falls back to AMD hwmon sensor files.

use super::temperature_file::read_temperature_file;
use crate::core::config::ProbeConfig;
use crate::error::{HoiError, Result};
use crate::platform::CommandRunner;

/// Returned by [`gpu_temperature`] when no source produced a reading.
pub const GPU_TEMP_UNAVAILABLE: f64 = -1.0;

/// GPU temperature in Celsius, or [`GPU_TEMP_UNAVAILABLE`].
pub fn gpu_temperature(config: &ProbeConfig, runner: &dyn CommandRunner) -> f64 {
    read_gpu_temperature(config, runner).unwrap_or(GPU_TEMP_UNAVAILABLE)
}

pub fn read_gpu_temperature(config: &ProbeConfig, runner: &dyn CommandRunner) -> Option<f64> {
    match query_vendor_temperature(config, runner) {
        Ok(celsius) => return Some(celsius),
        Err(e) => log::debug!("GPU vendor query failed: {}", e),
    }

    let celsius = config
        .gpu_sensor_paths
        .iter()
        .find_map(|path| read_temperature_file(path));

    if celsius.is_none() {
        log::debug!("No GPU temperature source available");
    }
    celsius
}

fn query_vendor_temperature(config: &ProbeConfig, runner: &dyn CommandRunner) -> Result<f64> {
    let output = runner.run(&config.gpu_query_command)?;
    parse_vendor_output(&output)
}

/// Parse the first line of `--format=csv,noheader,nounits` output.
pub fn parse_vendor_output(output: &str) -> Result<f64> {
    let line = output
        .trim()
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| HoiError::parse("empty GPU query output"))?;

    line.parse::<f64>()
        .map_err(|_| HoiError::parse(format!("unexpected GPU query output: {:?}", line)))
}
