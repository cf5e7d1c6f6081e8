//! Display Formatting

/// `$1,234.5` style money: grouped thousands, at most two decimals,
/// sign before the currency symbol.
pub fn money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac {
        0 => format!("{sign}${grouped}"),
        f if f % 10 == 0 => format!("{sign}${grouped}.{}", f / 10),
        f => format!("{sign}${grouped}.{f:02}"),
    }
}

/// Whole-number percentage label
pub fn percent_label(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(1500.0), "$1,500");
        assert_eq!(money(1234567.89), "$1,234,567.89");
        assert_eq!(money(99.5), "$99.5");
        assert_eq!(money(100.05), "$100.05");
        assert_eq!(money(-200.0), "-$200");
    }

    #[test]
    fn test_money_rounding_to_zero_has_no_sign() {
        assert_eq!(money(-0.001), "$0");
        assert_eq!(money(-0.004), "$0");
        assert_eq!(money(-0.006), "-$0.01");
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(66.6), "67%");
        assert_eq!(percent_label(0.0), "0%");
    }
}
