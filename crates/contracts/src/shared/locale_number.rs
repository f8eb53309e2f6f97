//! Grouped-digit amounts for currency-style inputs.
//!
//! Amounts are non-negative integers displayed with `.` between every three
//! digits (`1250000` -> `"1.250.000"`). `None` is the empty field, which is
//! distinct from an explicit zero.

/// Thousands separator used in displayed amounts.
pub const GROUP_SEPARATOR: char = '.';

/// Formats an amount with thousands grouping.
///
/// ```
/// use contracts::shared::locale_number::format_grouped;
/// assert_eq!(format_grouped(Some(1250000)), "1.250.000");
/// assert_eq!(format_grouped(Some(0)), "0");
/// assert_eq!(format_grouped(None), "");
/// ```
pub fn format_grouped(value: Option<u64>) -> String {
    let Some(n) = value else {
        return String::new();
    };

    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(ch);
    }
    result
}

/// Parses user-typed text back into an amount.
///
/// Everything except ASCII digits is discarded, the separator included, so
/// stray letters never fail the parse. Text with no digits yields `None`.
/// Digit runs past `u64::MAX` saturate.
///
/// ```
/// use contracts::shared::locale_number::parse_grouped;
/// assert_eq!(parse_grouped("1.250.000"), Some(1250000));
/// assert_eq!(parse_grouped("abc123"), Some(123));
/// assert_eq!(parse_grouped(""), None);
/// ```
pub fn parse_grouped(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return None;
    }

    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Formats an amount followed by a unit, e.g. `"1.250.000 €"`.
/// Empty amounts render as a dash, the way read-only cells show missing values.
pub fn format_with_unit(value: Option<u64>, unit: &str) -> String {
    match value {
        Some(_) if unit.is_empty() => format_grouped(value),
        Some(_) => format!("{} {}", format_grouped(value), unit),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(Some(0)), "0");
        assert_eq!(format_grouped(Some(7)), "7");
        assert_eq!(format_grouped(Some(500)), "500");
        assert_eq!(format_grouped(Some(999)), "999");
        assert_eq!(format_grouped(Some(1000)), "1.000");
        assert_eq!(format_grouped(Some(15007)), "15.007");
        assert_eq!(format_grouped(Some(1250000)), "1.250.000");
        assert_eq!(format_grouped(Some(999999999)), "999.999.999");
        assert_eq!(format_grouped(Some(u64::MAX)), "18.446.744.073.709.551.615");
        assert_eq!(format_grouped(None), "");
    }

    #[test]
    fn test_parse_grouped() {
        assert_eq!(parse_grouped(""), None);
        assert_eq!(parse_grouped("abc"), None);
        assert_eq!(parse_grouped("..."), None);
        assert_eq!(parse_grouped("abc123"), Some(123));
        assert_eq!(parse_grouped("15007"), Some(15007));
        assert_eq!(parse_grouped("1.250.000"), Some(1250000));
        assert_eq!(parse_grouped("1.2.5"), Some(125));
        assert_eq!(parse_grouped(" 12 500 €"), Some(12500));
        assert_eq!(parse_grouped("0"), Some(0));
        assert_eq!(parse_grouped("-40"), Some(40));
    }

    #[test]
    fn test_parse_saturates_on_overflow() {
        assert_eq!(parse_grouped("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn test_round_trip() {
        let mut x: u64 = 0;
        while x <= 999_999_999 {
            assert_eq!(parse_grouped(&format_grouped(Some(x))), Some(x));
            x = x * 3 + 1;
        }
        for x in [0, 9, 10, 99, 100, 999, 1000, 1001, 99_999, 100_000, 999_999_999] {
            assert_eq!(parse_grouped(&format_grouped(Some(x))), Some(x));
        }
        assert_eq!(parse_grouped(&format_grouped(None)), None);
    }

    #[test]
    fn test_format_with_unit() {
        assert_eq!(format_with_unit(Some(1250000), "€"), "1.250.000 €");
        assert_eq!(format_with_unit(Some(12), ""), "12");
        assert_eq!(format_with_unit(None, "€"), "—");
    }
}
