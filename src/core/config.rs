//! Static probe configuration.
//!
//! Every sensor path, external command and timing constant the probes use lives
//! here. Nothing is read from disk: [`ProbeConfig::default`] is the only
//! configuration the binary ever uses, tests build their own.

use std::path::PathBuf;
use std::time::Duration;

/// Preferred CPU package sensor (coretemp on most Intel boards).
pub const CPU_PACKAGE_SENSOR: &str = "/sys/class/hwmon/hwmon5/temp1_input";

/// Number of generic thermal zones probed after the package sensor.
pub const THERMAL_ZONE_COUNT: usize = 10;

/// AMD GPU hwmon sensors, tried in order.
pub const AMD_GPU_SENSORS: [&str; 2] = [
    "/sys/class/drm/card0/device/hwmon/hwmon2/temp1_input",
    "/sys/class/drm/card1/device/hwmon/hwmon3/temp1_input",
];

pub const LOOPBACK_INTERFACE: &str = "lo";

pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// An external program plus its fixed argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<S: Into<String>>(program: S, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Human readable form used in log messages
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Configuration shared by all probes
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// CPU sensor files, highest priority first
    pub cpu_sensor_paths: Vec<PathBuf>,
    /// Diagnostic command scanned when no CPU sensor file is usable
    pub sensors_command: CommandSpec,
    /// Vendor query returning a single numeric GPU temperature
    pub gpu_query_command: CommandSpec,
    /// GPU sensor files tried after the vendor query
    pub gpu_sensor_paths: Vec<PathBuf>,
    /// Gap between the two network counter samples
    pub sample_interval: Duration,
    /// Interface excluded from throughput totals
    pub loopback_interface: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        let mut cpu_sensor_paths = vec![PathBuf::from(CPU_PACKAGE_SENSOR)];
        cpu_sensor_paths.extend(
            (0..THERMAL_ZONE_COUNT)
                .map(|zone| PathBuf::from(format!("/sys/class/thermal/thermal_zone{}/temp", zone))),
        );

        Self {
            cpu_sensor_paths,
            sensors_command: CommandSpec::new("sensors", &[]),
            gpu_query_command: CommandSpec::new(
                "nvidia-smi",
                &["--query-gpu=temperature.gpu", "--format=csv,noheader,nounits"],
            ),
            gpu_sensor_paths: AMD_GPU_SENSORS.iter().map(PathBuf::from).collect(),
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            loopback_interface: LOOPBACK_INTERFACE.to_string(),
        }
    }
}
