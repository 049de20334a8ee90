use chrono::{DateTime, Local};

/// Local time zone abbreviation ("CEST", "UTC", ...) in effect at `at`.
///
/// chrono only knows numeric offsets, so the name comes from the C library.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
))]
pub fn zone_abbreviation(at: &DateTime<Local>) -> Option<String> {
    use std::ffi::CStr;

    let secs = to_time_t(at.timestamp())?;
    // SAFETY: `tm` is plain old data, and localtime_r only writes into it.
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::localtime_r(&secs, &mut tm) };
    if result.is_null() || tm.tm_zone.is_null() {
        return None;
    }

    // SAFETY: tm_zone points at a NUL-terminated string owned by libc.
    let name = unsafe { CStr::from_ptr(tm.tm_zone) }
        .to_string_lossy()
        .trim()
        .to_string();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// `None` when the timestamp does not fit the platform's `time_t`.
#[cfg(unix)]
fn to_time_t(secs: i64) -> Option<libc::time_t> {
    libc::time_t::try_from(secs).ok()
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
)))]
pub fn zone_abbreviation(_at: &DateTime<Local>) -> Option<String> {
    None
}

/// `HH:MM:SS TZ` in 24-hour form, falling back to `+HH:MM` when the zone has
/// no abbreviation.
pub fn format_clock(at: &DateTime<Local>) -> String {
    let zone = zone_abbreviation(at).unwrap_or_else(|| at.format("%:z").to_string());
    format!("{} {}", at.format("%H:%M:%S"), zone)
}
