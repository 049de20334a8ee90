//! CPU temperature probe.
//!
//! Sensor files are tried first; when none of them yields a plausible value
//! the output of `sensors` is scanned for a labelled reading.

use super::temperature_file::read_temperature_file;
use crate::core::config::ProbeConfig;
use crate::platform::CommandRunner;

/// Line labels that mark a CPU reading in `sensors` output (case-sensitive)
pub const CPU_LINE_LABELS: [&str; 4] = ["CPU", "Package", "Tdie", "Core"];

const DEGREE_MARKER: &str = "°C";

/// CPU temperature in Celsius, or 0.0 when nothing could be read.
pub fn cpu_temperature(config: &ProbeConfig, runner: &dyn CommandRunner) -> f64 {
    read_cpu_temperature(config, runner).unwrap_or(0.0)
}

/// Same fallback chain as [`cpu_temperature`], with absence made explicit.
pub fn read_cpu_temperature(config: &ProbeConfig, runner: &dyn CommandRunner) -> Option<f64> {
    for path in &config.cpu_sensor_paths {
        if let Some(celsius) = read_temperature_file(path) {
            log::debug!("CPU temperature from {}", path.display());
            return Some(celsius);
        }
    }

    let output = match runner.run(&config.sensors_command) {
        Ok(output) => output,
        Err(e) => {
            log::debug!("CPU temperature fallback unavailable: {}", e);
            return None;
        }
    };

    let celsius = parse_sensors_output(&output);
    if celsius.is_none() {
        log::debug!(
            "No CPU temperature found in `{}` output",
            config.sensors_command.display()
        );
    }
    celsius
}

/// First temperature token on the first qualifying line of `sensors` output.
pub fn parse_sensors_output(output: &str) -> Option<f64> {
    output
        .lines()
        .filter(|line| CPU_LINE_LABELS.iter().any(|label| line.contains(label)))
        .find_map(parse_temperature_tokens)
}

fn parse_temperature_tokens(line: &str) -> Option<f64> {
    line.split_whitespace()
        .filter(|token| token.contains(DEGREE_MARKER))
        .find_map(|token| {
            token
                .replace(DEGREE_MARKER, "")
                .replace('+', "")
                .parse::<f64>()
                .ok()
        })
}
