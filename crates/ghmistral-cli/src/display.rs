//! Display utilities for CLI output formatting

use std::io::{self, Write};

use colored::Colorize;

use ghmistral::{CredentialSource, DEFAULT_TOKEN_ENV};

/// Longest response shown in full during the demo run.
pub const DEMO_PREVIEW_CHARS: usize = 200;

/// Shortens `text` to `max_chars` characters, appending `...` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Mistral AI Client - GitHub Integration".bright_magenta().bold()
    )?;
    writeln!(out, "{}", "=".repeat(40).dimmed())
}

/// Explains how to provide a token after `source` yielded none.
pub fn setup_instructions(out: &mut impl Write, source: &CredentialSource) -> io::Result<()> {
    error_line(out, &format!("{} not set.", source.describe()))?;
    writeln!(out)?;
    writeln!(out, "{}", "Setup Instructions:".bright_cyan().bold())?;
    writeln!(out, "  1. Go to https://github.com/settings/tokens")?;
    writeln!(out, "  2. Create a new personal access token")?;
    let token_env = match source {
        CredentialSource::Env(name) => name.as_str(),
        _ => DEFAULT_TOKEN_ENV,
    };
    writeln!(out, "  3. Export it as an environment variable:")?;
    writeln!(out, "     export {token_env}='your_token_here'")?;
    writeln!(out, "  4. Run this program again (or pass --token)")?;
    writeln!(out)?;
    writeln!(out, "{}", "Security Note:".bright_yellow().bold())?;
    writeln!(
        out,
        "  Never commit tokens to source control or share them in chat messages."
    )?;
    writeln!(
        out,
        "  Grant the token only the permissions this program needs."
    )
}

pub fn error_line(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", "Error:".bright_red().bold())
}

/// Prints an error under a category label, e.g. `Configuration Error: ...`.
pub fn categorized_error(out: &mut impl Write, category: &str, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", format!("{category}:").bright_red().bold())
}

pub fn success_line(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", "OK".bright_green().bold())
}

/// Display an assistant response
pub fn assistant_response(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{} {text}", "Mistral AI:".bright_blue().bold())
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Available Commands:".bright_cyan().bold())?;
    writeln!(out, "  {} - Show this help message", "help".bright_yellow())?;
    writeln!(out, "  {} - List available models", "models".bright_yellow())?;
    writeln!(out, "  {} - Check connection health", "health".bright_yellow())?;
    writeln!(
        out,
        "  {} - Exit interactive mode",
        "quit, exit, q".bright_yellow()
    )?;
    writeln!(out, "  Anything else is sent to the model as a message.")
}

/// Lists models, marking the session default.
pub fn models(out: &mut impl Write, models: &[&str], default_model: &str) -> io::Result<()> {
    writeln!(out, "{}", "Available Models:".bright_cyan().bold())?;
    for model in models {
        if *model == default_model {
            writeln!(out, "  - {model} {}", "(default)".dimmed())?;
        } else {
            writeln!(out, "  - {model}")?;
        }
    }
    Ok(())
}
