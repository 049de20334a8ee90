//! Platform seams: external commands, network counters and local time.

pub mod command;
pub mod counters;
pub mod timezone;

pub use command::{CommandRunner, SystemCommandRunner};
pub use counters::{CounterSample, CounterSource, InterfaceCounters, SysinfoCounterSource};
pub use timezone::{format_clock, zone_abbreviation};
