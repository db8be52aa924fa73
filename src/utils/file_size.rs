const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human readable size shown next to the selected image, e.g. `1.50 MB`.
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    match unit {
        0 => format!("{} {}", bytes, UNITS[0]),
        _ => format!("{:.2} {}", size, UNITS[unit]),
    }
}

#[cfg(test)]
mod tests {
    use super::human_size;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1.00 KB")]
    #[case(1_572_864, "1.50 MB")]
    #[case(5 * 1024 * 1024 * 1024, "5.00 GB")]
    fn formats_sizes(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(human_size(bytes), expected);
    }
}
