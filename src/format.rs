//! Human-readable byte formatting.

/// Format a byte count with binary units, dividing by 1024 through B, KB,
/// MB, GB and TB, always with two decimal places and no space before the
/// unit: `400.00B`, `1.50KB`, `2.00TB`.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.2}{unit}");
        }
        value /= 1024.0;
    }

    format!("{value:.2}TB")
}
