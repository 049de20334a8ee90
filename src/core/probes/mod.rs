//! Best-effort sensor probes.
//!
//! Every probe degrades to a placeholder value instead of returning an error;
//! the `read_*` variants expose the same chains with an explicit `None`.

pub mod cpu;
pub mod gpu;
pub mod memory;
pub mod network;
pub mod temperature_file;

pub use cpu::{cpu_temperature, read_cpu_temperature};
pub use gpu::{gpu_temperature, read_gpu_temperature, GPU_TEMP_UNAVAILABLE};
pub use memory::{ram_usage, read_ram_usage};
pub use network::{network_speed, NetworkSpeed};
pub use temperature_file::read_temperature_file;
