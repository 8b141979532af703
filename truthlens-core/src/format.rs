const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size, base 1024, at most two decimals and no trailing
/// zeros: `1536` -> `"1.5 KB"`. Anything past GB stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    while unit + 1 < UNITS.len() && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }
    let value = bytes as f64 / (1u64 << (10 * unit)) as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", trim_decimals(rounded), UNITS[unit])
}

fn trim_decimals(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
