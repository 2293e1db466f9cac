//! REPL mode for interactive conversations.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use ghmistral::{ChatBackend, ChatResult, Session};

use crate::display;

/// A parsed REPL input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Models,
    Health,
    Quit,
    Empty,
    Chat(String),
}

impl ReplCommand {
    /// Parses a line; command words are matched case-insensitively.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            "help" => Self::Help,
            "models" => Self::Models,
            "health" => Self::Health,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Chat(line.to_string()),
        }
    }
}

/// Whether the loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Handles one input line, printing the outcome to `out`.
///
/// Chat failures and rejected messages are printed; the loop continues.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub async fn handle_line<B: ChatBackend>(
    session: &Session<B>,
    line: &str,
    out: &mut impl Write,
) -> Result<Flow> {
    match ReplCommand::parse(line) {
        ReplCommand::Empty => {}
        ReplCommand::Help => display::help(out)?,
        ReplCommand::Models => display::models(
            out,
            Session::<B>::available_models(),
            session.default_model(),
        )?,
        ReplCommand::Health => {
            writeln!(out, "{}", "Checking connection health...".dimmed())?;
            if session.health_check().await {
                display::success_line(out, "Connection is healthy")?;
            } else {
                display::error_line(out, "Connection health check failed")?;
            }
        }
        ReplCommand::Quit => {
            writeln!(out, "Goodbye!")?;
            return Ok(Flow::Exit);
        }
        ReplCommand::Chat(message) => {
            writeln!(out, "{}", "Mistral AI is thinking...".dimmed())?;
            match session.invoke(&message).await {
                Ok(ChatResult::Success { text, .. }) => display::assistant_response(out, &text)?,
                Ok(ChatResult::Failure { error, .. }) => display::error_line(out, &error)?,
                Err(e) => display::error_line(out, &e.to_string())?,
            }
        }
    }

    Ok(Flow::Continue)
}

fn print_header(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Interactive Mode".bright_magenta().bold())?;
    writeln!(
        out,
        "{}",
        "Type 'help' for commands, 'quit' or 'exit' to end the session".dimmed()
    )?;
    writeln!(out, "{}", "=".repeat(60).dimmed())?;
    Ok(())
}

/// Runs the REPL loop.
///
/// # Errors
///
/// Returns an error if the line editor cannot be initialized or output fails.
pub async fn run_repl<B: ChatBackend>(session: &Session<B>, out: &mut impl Write) -> Result<()> {
    print_header(out)?;

    let mut rl = DefaultEditor::new()?;

    loop {
        out.flush()?;
        let readline = rl.readline(&format!("\n{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.trim());

                if handle_line(session, &line, out).await? == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                writeln!(out, "\nSession ended by user. Goodbye!")?;
                break;
            }
            Err(err) => {
                display::error_line(out, &err.to_string())?;
                break;
            }
        }
    }

    Ok(())
}
