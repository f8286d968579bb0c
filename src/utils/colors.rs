/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Amount color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_amount(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

pub fn colorize_amount(value: f64, text: &str) -> String {
    format!("{}{}{}", color_for_amount(value), text, RESET)
}
