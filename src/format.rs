//! Display formatting for currency amounts and per-minute rates.

/// Format number with thousand separators
pub fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let len = s.len();

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format a dollar amount with two decimals and thousand separators.
/// Example: 1270.0 -> "$1,270.00"
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Format a per-minute rate with four decimals.
pub fn format_rate(rate: f64) -> String {
    format!("${:.4}", rate)
}

/// Format a markup fraction as a percentage. Example: 0.20 -> "20%"
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}
