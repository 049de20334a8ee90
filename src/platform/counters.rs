//! Network counter sampling.

use std::collections::BTreeMap;
use std::time::Instant;

use sysinfo::Networks;

use crate::error::{HoiError, Result};

/// Cumulative byte counters of one interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceCounters {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Point-in-time capture of every interface's counters
#[derive(Debug, Clone)]
pub struct CounterSample {
    pub interfaces: BTreeMap<String, InterfaceCounters>,
    pub taken_at: Instant,
}

impl CounterSample {
    pub fn new(interfaces: BTreeMap<String, InterfaceCounters>, taken_at: Instant) -> Self {
        Self {
            interfaces,
            taken_at,
        }
    }
}

/// Trait for anything that can produce counter samples
pub trait CounterSource {
    fn sample(&mut self) -> Result<CounterSample>;
}

/// Counter source backed by `sysinfo::Networks`
pub struct SysinfoCounterSource {
    networks: Networks,
}

impl SysinfoCounterSource {
    pub fn new() -> Self {
        Self {
            networks: Networks::new(),
        }
    }
}

impl Default for SysinfoCounterSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterSource for SysinfoCounterSource {
    fn sample(&mut self) -> Result<CounterSample> {
        self.networks.refresh(true);
        let taken_at = Instant::now();

        // sysinfo reports an empty list when the counters cannot be read at all;
        // this is shown as N/A rather than the 0.0 KB/s an empty sum would give
        if self.networks.is_empty() {
            return Err(HoiError::metric_collection(
                "No network interfaces reported",
            ));
        }

        let interfaces = self
            .networks
            .iter()
            .map(|(name, data)| {
                (
                    name.to_string(),
                    InterfaceCounters {
                        rx_bytes: data.total_received(),
                        tx_bytes: data.total_transmitted(),
                    },
                )
            })
            .collect();

        Ok(CounterSample::new(interfaces, taken_at))
    }
}
