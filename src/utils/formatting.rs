//! Number formatting for chart ticks and tooltips.

/// Formats a number the way a JavaScript engine prints it: integers without
/// a fractional part, other values with trailing zeros trimmed.
///
/// # Examples
/// ```
/// use pulseboard::utils::format_plain;
/// assert_eq!(format_plain(45.0), "45");
/// assert_eq!(format_plain(52.5), "52.5");
/// ```
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let text = format!("{:.6}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Formats a value with thousands separators, keeping up to three decimals.
///
/// # Examples
/// ```
/// use pulseboard::utils::format_thousands;
/// assert_eq!(format_thousands(1543.0), "1,543");
/// assert_eq!(format_thousands(1234567.0), "1,234,567");
/// ```
pub fn format_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let magnitude = rounded.abs();

    let digits = (magnitude.trunc() as u64).to_string();
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::new();
    if negative {
        result.push('-');
    }
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }

    let fraction = magnitude.fract();
    if fraction > 0.0 {
        let text = format!("{:.3}", fraction);
        let trimmed = text.trim_end_matches('0');
        // "0.5" -> ".5"
        result.push_str(&trimmed[1..]);
    }
    result
}

/// Formats a currency value in thousands: `45000` becomes `"$45k"`.
pub fn format_currency_k(value: f64) -> String {
    format!("${}k", format_plain(value / 1000.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1543.0), "1,543");
        assert_eq!(format_thousands(-12543.0), "-12,543");
        assert_eq!(format_thousands(1200.5), "1,200.5");
    }

    #[test]
    fn test_currency_k() {
        assert_eq!(format_currency_k(45000.0), "$45k");
        assert_eq!(format_currency_k(52500.0), "$52.5k");
        assert_eq!(format_currency_k(0.0), "$0k");
    }

    #[test]
    fn test_plain() {
        assert_eq!(format_plain(10.0), "10");
        assert_eq!(format_plain(0.25), "0.25");
    }
}
