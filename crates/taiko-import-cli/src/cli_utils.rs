//! Common CLI utility functions shared across commands.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a failure line in red.
pub fn print_error(message: impl Display) {
    eprintln!("{}", message.to_string().red());
}

pub fn print_ok(message: impl Display) {
    println!("{} {}", message, "OK!".green());
}
