//! Console output helpers shared by the subcommands.

use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("  Error: failed to encode JSON: {e}"),
    }
}

/// Two-column `label  value` line, labels padded to a fixed width.
pub fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {label:<22}{value}")
}

/// Section heading.
pub fn heading(title: &str) -> String {
    format!("\n{title}\n{}", "─".repeat(title.chars().count()))
}
