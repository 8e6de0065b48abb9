//! # Formatting Utilities
//!
//! Number and currency formatting for the pools overview.
//!
//! ## Functions
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_usd`] - Format a dollar amount with two decimals

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();
    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{sign}{integer_with_commas}")
    } else {
        format!("{sign}{integer_with_commas}.{decimal_part}")
    }
}

/// Format a USD amount (e.g., 2.58 -> "$2.58", -1200.5 -> "-$1,200.50")
pub fn format_usd(value: f64) -> String {
    let amount = format_number(value, 2);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-${abs}"),
        None => format!("${amount}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(2.58), "$2.58");
        assert_eq!(format_usd(1_200.5), "$1,200.50");
        assert_eq!(format_usd(-1_200.5), "-$1,200.50");
    }
}
