//! Network throughput probe.
//!
//! Two counter samples are taken `sample_interval` apart and the per-interface
//! deltas are summed into aggregate receive/transmit rates.

use std::thread;

use crate::core::config::ProbeConfig;
use crate::platform::{CounterSample, CounterSource};
use crate::ui::formatters::format_rate;

pub const UNAVAILABLE: &str = "N/A";
pub const ZERO_RATE: &str = "0 KB/s";

/// Formatted aggregate receive and transmit rates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSpeed {
    pub rx: String,
    pub tx: String,
}

impl NetworkSpeed {
    fn uniform(value: &str) -> Self {
        Self {
            rx: value.to_string(),
            tx: value.to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self::uniform(UNAVAILABLE)
    }

    pub fn zero() -> Self {
        Self::uniform(ZERO_RATE)
    }
}

/// Byte totals summed over every qualifying interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrafficDelta {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Sample, sleep, sample again and turn the difference into rates.
pub fn network_speed(config: &ProbeConfig, source: &mut dyn CounterSource) -> NetworkSpeed {
    let first = match source.sample() {
        Ok(sample) => sample,
        Err(e) => {
            log::warn!("Network counters unavailable: {}", e);
            return NetworkSpeed::unavailable();
        }
    };

    thread::sleep(config.sample_interval);

    let second = match source.sample() {
        Ok(sample) => sample,
        Err(e) => {
            log::warn!("Network counters unavailable: {}", e);
            return NetworkSpeed::unavailable();
        }
    };

    compute_speed(&first, &second, &config.loopback_interface)
}

/// Rates between two samples, timed by the instants the samples were taken.
pub fn compute_speed(first: &CounterSample, second: &CounterSample, loopback: &str) -> NetworkSpeed {
    let elapsed = second
        .taken_at
        .saturating_duration_since(first.taken_at)
        .as_secs_f64();
    if elapsed <= 0.0 {
        log::warn!("Non-positive sampling interval, reporting zero throughput");
        return NetworkSpeed::zero();
    }

    let delta = traffic_delta(first, second, loopback);
    NetworkSpeed {
        rx: format_rate(delta.rx_bytes as f64 / elapsed / 1024.0),
        tx: format_rate(delta.tx_bytes as f64 / elapsed / 1024.0),
    }
}

/// Sum of per-interface deltas, skipping loopback and interfaces that only
/// appear in `second`.
pub fn traffic_delta(first: &CounterSample, second: &CounterSample, loopback: &str) -> TrafficDelta {
    second
        .interfaces
        .iter()
        .filter(|(name, _)| name.as_str() != loopback)
        .filter_map(|(name, after)| {
            first
                .interfaces
                .get(name)
                .map(|before| (before, after))
        })
        .fold(TrafficDelta::default(), |acc, (before, after)| TrafficDelta {
            rx_bytes: acc
                .rx_bytes
                .saturating_add(after.rx_bytes.saturating_sub(before.rx_bytes)),
            tx_bytes: acc
                .tx_bytes
                .saturating_add(after.tx_bytes.saturating_sub(before.tx_bytes)),
        })
}
