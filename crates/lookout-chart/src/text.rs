//! Tick label formatting.

/// Format a numeric tick value compactly: `1.5K`, `2.3M`, `0.125`, `42`.
pub fn format_tick_value(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let abs_value = value.abs();
    let (scaled, suffix) = if abs_value >= 1e9 {
        (value / 1e9, "B")
    } else if abs_value >= 1e6 {
        (value / 1e6, "M")
    } else if abs_value >= 1e3 {
        (value / 1e3, "K")
    } else {
        (value, "")
    };

    let precision = if scaled == scaled.round() {
        0
    } else if scaled.abs() >= 100.0 {
        1
    } else if scaled.abs() >= 1.0 {
        2
    } else {
        3
    };

    let formatted = format!("{:.*}", precision, scaled);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    // Avoid "-0" for tiny negative values rounded away.
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    format!("{trimmed}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(format_tick_value(1_500.0), "1.5K");
        assert_eq!(format_tick_value(-2_300_000.0), "-2.3M");
        assert_eq!(format_tick_value(4_000_000_000.0), "4B");
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(format_tick_value(42.0), "42");
        assert_eq!(format_tick_value(0.0), "0");
        assert_eq!(format_tick_value(2.5), "2.5");
        assert_eq!(format_tick_value(0.125), "0.125");
        assert_eq!(format_tick_value(-0.0001), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_tick_value(f64::NAN), "");
    }
}
