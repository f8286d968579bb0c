use std::fmt;
use std::io::{self, BufRead, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}{}{}", FG_BLUE, BOLD, msg, RESET);
}

/// Print `label` (no newline) and read one trimmed line from stdin.
pub fn ask(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask a yes/no question; anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> io::Result<bool> {
    warning(question);
    let answer = ask("Confirm [y/N]: ")?.to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
