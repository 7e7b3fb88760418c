//! Unified output formatting utilities for consistent CLI presentation.
//!
//! All functions write to an explicit stream so callers (and tests) decide where
//! text goes: git's regular output to stdout, diagnostics to stderr.
//!
//! # Design Principles
//! - **git's words first**: git output is passed through trimmed but otherwise verbatim
//! - **Consistent color scheme**: red for errors, yellow for questions
//! - **No empty lines**: blank git output prints nothing at all

use colored::*;
use std::io::{self, Write};

/// Writes `message` trimmed, followed by a newline, unless it is blank
///
/// # Format
/// ```text
/// <message>
/// ```
pub fn print_if_not_empty(out: &mut dyn Write, message: &str) -> io::Result<()> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    writeln!(out, "{trimmed}")
}

/// Formats and writes an error message with consistent styling
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message uncolored so git's text stays readable
pub fn print_error(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✕ Error:".red(), message.trim())
}

/// Writes a yes/no question and leaves the cursor on the same line
///
/// # Format
/// ```text
/// <question> [y/N]:
/// ```
pub fn print_confirm_prompt(out: &mut dyn Write, question: &str) -> io::Result<()> {
    write!(out, "{} {}", question.yellow(), "[y/N]: ".bright_black())?;
    out.flush()
}
