//! Dollar amount formatting for display.

/// Formats an amount as dollars with thousands separators and two decimals.
///
/// # Examples
///
/// ```
/// use prorator::utils::currency::format_currency;
///
/// assert_eq!(format_currency(1750.0), "$1,750.00");
/// assert_eq!(format_currency(56.451_612), "$56.45");
/// assert_eq!(format_currency(-1234567.891), "-$1,234,567.89");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" reads oddly; only show the sign when something rounds to a cent.
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
