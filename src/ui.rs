//! User-interaction collaborator
//!
//! The engine never talks to the terminal directly; every prompt,
//! confirmation and progress report goes through this trait so hosts (and
//! tests) can supply their own implementation.

use std::io::{self, BufRead, Write};

use colored::Colorize;

pub trait Ui {
    /// Ask for a line of input. Returns `None` when the user cancels
    /// (end-of-input, or an empty answer with no default to fall back on).
    fn prompt(&mut self, message: &str, default: Option<&str>) -> io::Result<Option<String>>;

    /// Ask a yes/no question; `yes_label` names the affirmative choice.
    fn confirm(&mut self, message: &str, yes_label: &str) -> io::Result<bool>;

    /// Report a human-readable progress step.
    fn progress(&mut self, message: &str);
}

/// Terminal implementation over stdin/stdout.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            // EOF is a cancellation, not an answer
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Ui for Console {
    fn prompt(&mut self, message: &str, default: Option<&str>) -> io::Result<Option<String>> {
        match default {
            Some(value) if !value.is_empty() => {
                print!("{message} [{value}]: ");
            }
            _ => print!("{message}: "),
        }
        io::stdout().flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(default.map(str::to_string));
        }
        Ok(Some(answer))
    }

    fn confirm(&mut self, message: &str, yes_label: &str) -> io::Result<bool> {
        print!("{message} ({yes_label}/n): ");
        io::stdout().flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(false);
        };
        Ok(answer.eq_ignore_ascii_case("y")
            || answer.eq_ignore_ascii_case("yes")
            || answer.eq_ignore_ascii_case(yes_label))
    }

    fn progress(&mut self, message: &str) {
        println!("  {} {}", "→".dimmed(), message.dimmed());
    }
}
