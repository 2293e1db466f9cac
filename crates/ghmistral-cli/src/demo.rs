//! Scripted demo run.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use ghmistral::{ChatBackend, ChatResult, Session};

use crate::display::{self, DEMO_PREVIEW_CHARS};

/// Sends each demo message and prints a preview of every response.
///
/// Failures are printed and the demo moves on to the next message.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub async fn run_demo<B: ChatBackend>(
    session: &Session<B>,
    messages: &[String],
    out: &mut impl Write,
) -> Result<()> {
    writeln!(
        out,
        "{}",
        "Mistral AI GitHub Integration Demo".bright_magenta().bold()
    )?;
    writeln!(out, "{}", "=".repeat(40).dimmed())?;

    for (i, message) in messages.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{} {message}", format!("Demo Message {}:", i + 1).bright_cyan())?;
        writeln!(out, "{}", "Sending to Mistral AI...".dimmed())?;

        match session.invoke(message).await {
            Ok(ChatResult::Success { text, .. }) => {
                display::assistant_response(out, &display::truncate(&text, DEMO_PREVIEW_CHARS))?;
            }
            Ok(ChatResult::Failure { error, .. }) => display::error_line(out, &error)?,
            Err(e) => display::error_line(out, &e.to_string())?,
        }
    }

    Ok(())
}

/// Asks whether to continue into interactive mode.
///
/// Re-asks until the answer is `y`/`yes` or `n`/`no`. End of input counts
/// as no.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn ask_interactive(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    loop {
        write!(
            out,
            "\n{} ",
            "Would you like to start interactive mode? (y/n):".bright_yellow()
        )?;
        out.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "Please enter 'y' or 'n'")?,
        }
    }
}
