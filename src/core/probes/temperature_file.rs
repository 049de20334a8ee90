//! Reader for millidegree sensor pseudo-files (hwmon, thermal zones).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{HoiError, Result};

/// Lowest plausible reading; anything at or below this is rejected.
pub const MIN_PLAUSIBLE_CELSIUS: f64 = 10.0;
/// Highest plausible reading; anything at or above this is rejected.
pub const MAX_PLAUSIBLE_CELSIUS: f64 = 100.0;

/// Read a temperature in Celsius from a sensor file.
///
/// Returns `None` when the file is missing or unreadable, does not hold an
/// integer, or holds a value outside (10, 100) °C once converted.
pub fn read_temperature_file(path: &Path) -> Option<f64> {
    match try_read_temperature_file(path) {
        Ok(celsius) => Some(celsius),
        Err(e) => {
            log::debug!("{}: {}", path.display(), e);
            None
        }
    }
}

fn try_read_temperature_file(path: &Path) -> Result<f64> {
    let file = File::open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;

    let millidegrees: i64 = line
        .trim()
        .parse()
        .map_err(|_| HoiError::parse(format!("not an integer: {:?}", line.trim())))?;

    let celsius = millidegrees as f64 / 1000.0;
    if is_plausible(celsius) {
        Ok(celsius)
    } else {
        Err(HoiError::sensor_unavailable(format!(
            "implausible reading {:.3}°C",
            celsius
        )))
    }
}

pub fn is_plausible(celsius: f64) -> bool {
    celsius > MIN_PLAUSIBLE_CELSIUS && celsius < MAX_PLAUSIBLE_CELSIUS
}
