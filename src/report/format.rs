//! Number formatting shared by the console report and chart labels.

/// Rupee amount with no decimals and thousands separators: `₹1,234,567`.
pub fn inr(value: f64) -> String {
    if value.is_nan() {
        return "n/a".to_string();
    }
    format!("₹{}", thousands(value))
}

/// Rounds to a whole number and inserts thousands separators.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Fixed-precision number, `n/a` for NaN.
pub fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}

/// Percentage with the given precision, `n/a` for NaN.
pub fn percent(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.decimals$}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.4), "999");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(1_234_567.89), "1,234,568");
        assert_eq!(thousands(-45_000.0), "-45,000");
    }

    #[test]
    fn test_nan_renders_as_not_available() {
        assert_eq!(inr(f64::NAN), "n/a");
        assert_eq!(percent(f64::NAN, 1), "n/a");
        assert_eq!(fixed(f64::NAN, 2), "n/a");
        assert_eq!(inr(160_000.0), "₹160,000");
        assert_eq!(percent(12.345, 1), "12.3%");
    }
}
