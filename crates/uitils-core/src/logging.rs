//! Colored console output

use colored::Colorize;
use std::fmt::Display;

/// Print a green line to stdout
pub fn success(message: impl Display) {
    println!("{}", message.to_string().green());
}

/// Print a failure as the single red `Error: ...` line shown to the user
pub fn report_error(err: impl Display) {
    eprintln!("{}", format!("Error: {}", err).red().bold());
}
