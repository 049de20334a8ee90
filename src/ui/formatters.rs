/// Format a transfer rate given in KB/s (KB/s below 1024, MB/s from 1024 up)
pub fn format_rate(kb_per_sec: f64) -> String {
    if kb_per_sec < 1024.0 {
        format!("{:.1} KB/s", kb_per_sec)
    } else {
        format!("{:.1} MB/s", kb_per_sec / 1024.0)
    }
}

/// Format a percentage with two decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a Celsius reading with two decimals
pub fn format_celsius(value: f64) -> String {
    format!("{:.2}°C", value)
}
