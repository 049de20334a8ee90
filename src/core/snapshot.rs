//! One-shot telemetry snapshot.

use chrono::{DateTime, Local};

use crate::core::config::ProbeConfig;
use crate::core::probes::{
    cpu_temperature, gpu_temperature, network_speed, ram_usage, NetworkSpeed,
};
use crate::platform::{
    CommandRunner, CounterSource, SysinfoCounterSource, SystemCommandRunner,
};

/// Everything the report shows, captured once per run
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub timestamp: DateTime<Local>,
    pub ram_percent: f64,
    pub cpu_temp_c: f64,
    /// `None` when no GPU source produced a reading
    pub gpu_temp_c: Option<f64>,
    pub network: NetworkSpeed,
}

/// Runs the probes in report order and assembles a [`Snapshot`]
pub struct SnapshotCollector<R: CommandRunner, C: CounterSource> {
    config: ProbeConfig,
    runner: R,
    counters: C,
}

impl SnapshotCollector<SystemCommandRunner, SysinfoCounterSource> {
    /// Collector wired to the real system
    pub fn new() -> Self {
        Self::with_sources(
            ProbeConfig::default(),
            SystemCommandRunner,
            SysinfoCounterSource::new(),
        )
    }
}

impl Default for SnapshotCollector<SystemCommandRunner, SysinfoCounterSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner, C: CounterSource> SnapshotCollector<R, C> {
    pub fn with_sources(config: ProbeConfig, runner: R, counters: C) -> Self {
        Self {
            config,
            runner,
            counters,
        }
    }

    /// Probe RAM, CPU, GPU and network, in that order.
    pub fn collect(&mut self) -> Snapshot {
        let timestamp = Local::now();

        let ram_percent = ram_usage();
        log::debug!("RAM usage: {:.2}%", ram_percent);

        let cpu_temp_c = cpu_temperature(&self.config, &self.runner);
        log::debug!("CPU temperature: {:.2}°C", cpu_temp_c);

        let gpu_reading = gpu_temperature(&self.config, &self.runner);
        let gpu_temp_c = if gpu_reading >= 0.0 {
            Some(gpu_reading)
        } else {
            None
        };
        log::debug!("GPU temperature: {:?}", gpu_temp_c);

        let network = network_speed(&self.config, &mut self.counters);
        log::debug!("Network: rx {} tx {}", network.rx, network.tx);

        Snapshot {
            timestamp,
            ram_percent,
            cpu_temp_c,
            gpu_temp_c,
            network,
        }
    }
}
