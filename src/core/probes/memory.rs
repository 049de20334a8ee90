use sysinfo::{MemoryRefreshKind, RefreshKind, System};

/// Percentage of physical memory in use, or 0.0 when the OS reports nothing.
pub fn ram_usage() -> f64 {
    read_ram_usage().unwrap_or(0.0)
}

pub fn read_ram_usage() -> Option<f64> {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
    let sys = System::new_with_specifics(refresh);

    let percent = usage_percent(sys.used_memory(), sys.total_memory());
    if percent.is_none() {
        log::warn!("Memory usage unavailable: total memory reported as 0");
    }
    percent
}

/// `used / total` as a percentage; `None` when `total` is zero.
pub fn usage_percent(used: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(used as f64 / total as f64 * 100.0)
}
