use hoi_ola::core::config::{CommandSpec, ProbeConfig};
use hoi_ola::core::probes::{
    cpu_temperature, gpu_temperature, network_speed, read_temperature_file, GPU_TEMP_UNAVAILABLE,
};
use hoi_ola::platform::{CommandRunner, CounterSample, CounterSource, InterfaceCounters};
use hoi_ola::{HoiError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

struct NoCommands;

impl CommandRunner for NoCommands {
    fn run(&self, spec: &CommandSpec) -> Result<String> {
        Err(HoiError::command(format!("{} is not installed", spec.program)))
    }
}

struct SensorsOnly(&'static str);

impl CommandRunner for SensorsOnly {
    fn run(&self, spec: &CommandSpec) -> Result<String> {
        if spec.program == "sensors" {
            Ok(self.0.to_string())
        } else {
            Err(HoiError::command(format!("{} is not installed", spec.program)))
        }
    }
}

/// Fake sysfs tree with hwmon-style files
struct FakeSysfs {
    dir: TempDir,
}

impl FakeSysfs {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn sensor(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

#[test]
fn test_file_reader_accepts_only_plausible_range() {
    let sysfs = FakeSysfs::new();

    for millidegrees in [-1000i64, 0, 9_999, 10_000, 10_001, 55_555, 99_999, 100_000, 1_000_000] {
        let path = sysfs.sensor("temp", &format!("{}\n", millidegrees));
        let celsius = millidegrees as f64 / 1000.0;
        let expected = if celsius > 10.0 && celsius < 100.0 {
            Some(celsius)
        } else {
            None
        };
        assert_eq!(read_temperature_file(&path), expected, "{}", millidegrees);
    }
}

#[test]
fn test_cpu_falls_back_to_sensors_output() {
    let sysfs = FakeSysfs::new();
    let config = ProbeConfig {
        cpu_sensor_paths: vec![sysfs.missing("hwmon5"), sysfs.missing("thermal_zone0")],
        ..ProbeConfig::default()
    };
    let runner = SensorsOnly("Package id 0:  +45.0°C  (high = 80.0°C)\n");

    assert_eq!(cpu_temperature(&config, &runner), 45.0);
}

#[test]
fn test_cpu_prefers_sensor_files() {
    let sysfs = FakeSysfs::new();
    let config = ProbeConfig {
        cpu_sensor_paths: vec![
            sysfs.missing("hwmon5"),
            sysfs.sensor("thermal_zone0", "8000\n"),
            sysfs.sensor("thermal_zone1", "47000\n"),
        ],
        ..ProbeConfig::default()
    };
    let runner = SensorsOnly("Package id 0:  +45.0°C  (high = 80.0°C)\n");

    assert_eq!(cpu_temperature(&config, &runner), 47.0);
}

#[test]
fn test_gpu_sentinel_when_everything_fails() {
    let sysfs = FakeSysfs::new();
    let config = ProbeConfig {
        gpu_sensor_paths: vec![sysfs.missing("hwmon2"), sysfs.sensor("hwmon3", "0\n")],
        ..ProbeConfig::default()
    };

    assert_eq!(gpu_temperature(&config, &NoCommands), GPU_TEMP_UNAVAILABLE);
}

#[test]
fn test_gpu_reads_amd_sensor() {
    let sysfs = FakeSysfs::new();
    let config = ProbeConfig {
        gpu_sensor_paths: vec![sysfs.missing("hwmon2"), sysfs.sensor("hwmon3", "66000\n")],
        ..ProbeConfig::default()
    };

    assert_eq!(gpu_temperature(&config, &NoCommands), 66.0);
}

struct TwoSamples(Vec<CounterSample>);

impl CounterSource for TwoSamples {
    fn sample(&mut self) -> Result<CounterSample> {
        if self.0.is_empty() {
            return Err(HoiError::metric_collection("no more samples"));
        }
        Ok(self.0.remove(0))
    }
}

fn interfaces(entries: &[(&str, u64, u64)]) -> BTreeMap<String, InterfaceCounters> {
    entries
        .iter()
        .map(|&(name, rx_bytes, tx_bytes)| (name.to_string(), InterfaceCounters { rx_bytes, tx_bytes }))
        .collect()
}

#[test]
fn test_network_ignores_loopback_and_new_interfaces() {
    let start = Instant::now();
    let mut source = TwoSamples(vec![
        CounterSample::new(interfaces(&[("lo", 0, 0), ("eth0", 0, 0)]), start),
        CounterSample::new(
            interfaces(&[
                ("lo", 900_000_000, 900_000_000),
                ("eth0", 1_048_576, 10_240),
                ("docker0", 500_000_000, 500_000_000),
            ]),
            start + Duration::from_secs(1),
        ),
    ]);
    let config = ProbeConfig {
        sample_interval: Duration::ZERO,
        ..ProbeConfig::default()
    };

    let speed = network_speed(&config, &mut source);
    assert_eq!(speed.rx, "1.0 MB/s");
    assert_eq!(speed.tx, "10.0 KB/s");
}

#[test]
fn test_network_unavailable_without_counters() {
    let mut source = TwoSamples(vec![]);
    let config = ProbeConfig {
        sample_interval: Duration::ZERO,
        ..ProbeConfig::default()
    };

    let speed = network_speed(&config, &mut source);
    assert_eq!((speed.rx.as_str(), speed.tx.as_str()), ("N/A", "N/A"));
}
