//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use roster::constants;

/// Print the interactive-session header to stderr.
pub fn print_header() {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        constants::APP_NAME.bold(),
        "· interactive session — type 'help' for the command list, 'quit' to leave."
            .dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_header_does_not_panic() {
        print_header();
    }
}
