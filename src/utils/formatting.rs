//! Formatting utilities used for CLI and export outputs.

/// Hours with two decimals: `3.00`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Money with two decimals, sign before the currency: `$60.00`, `-$8.00`.
pub fn format_amount(currency: &str, amount: f64) -> String {
    // -0.00 would otherwise print with a sign
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded < 0.0 {
        format!("-{}{:.2}", currency, rounded.abs())
    } else {
        format!("{}{:.2}", currency, rounded.abs())
    }
}

/// Hourly rate as entered: `$20/h`, `$12.5/h`, `$-8/h`.
pub fn format_rate(currency: &str, rate: f64) -> String {
    format!("{}{}/h", currency, rate)
}
