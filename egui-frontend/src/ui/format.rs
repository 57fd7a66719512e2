//! Currency and date display helpers used across the tables and forms.

use chrono::NaiveDate;

/// Format an amount as en-US currency, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Format a `YYYY-MM-DD` date as e.g. "Jan 5, 2024".
///
/// Unparsable input is echoed back unchanged rather than erroring; the tables
/// render whatever string they were given.
pub fn format_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_basic() {
        assert_eq!(format_currency(200.0), "$200.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(99.9), "$99.90");
    }

    #[test]
    fn test_currency_thousands_grouping() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1000000.0), "$1,000,000.00");
    }

    #[test]
    fn test_currency_rounds_to_cents() {
        assert_eq!(format_currency(10.005), "$10.01");
        assert_eq!(format_currency(-42.5), "-$42.50");
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
    }

    #[test]
    fn test_unparsable_date_echoed_back() {
        assert_eq!(format_date("tomorrow"), "tomorrow");
        assert_eq!(format_date(""), "");
    }
}
