//! ghmistral CLI - demo and interactive REPL for Mistral through GitHub Models
//!
//! Runs a short scripted demo against the configured model, then optionally
//! drops into an interactive chat loop.
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::debug;
use secrecy::SecretString;

use ghmistral::{CredentialSource, Error, GitHubModelsClient, Session};

mod demo;
mod display;
mod repl;
mod settings;
#[cfg(test)]
mod testing;

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token (or set GITHUB_TOKEN env var)
    #[arg(long)]
    token: Option<String>,

    /// Model to use for chat messages
    #[arg(long)]
    model: Option<String>,

    /// Base URL for the inference endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the demo and start interactive mode directly
    #[arg(long, conflicts_with = "demo_only")]
    interactive: bool,

    /// Run the demo and exit without prompting
    #[arg(long)]
    demo_only: bool,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Initializes logging with `env_logger`.
///
/// `RUST_LOG` takes precedence over the `--verbose` default.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

async fn run(args: Args, out: &mut impl Write) -> Result<ExitCode> {
    display::banner(out)?;

    let settings = match Settings::load(args.config.as_deref())
        .and_then(|settings| settings.with_overrides(args.model, args.base_url))
    {
        Ok(settings) => settings,
        Err(e) => {
            display::categorized_error(out, "Configuration Error", &e.to_string())?;
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!("Using settings: {settings:?}");

    let fallback = CredentialSource::Env(settings.token_env.clone());
    let explicit = args.token.map(SecretString::from);
    let config = settings.backend_config();

    let session = match Session::connect(explicit, &fallback, |credential| {
        GitHubModelsClient::new(config, credential.secret())
    }) {
        Ok(session) => session,
        Err(Error::MissingCredential) => {
            display::setup_instructions(out, &fallback)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e @ Error::InvalidCredentialFormat) => {
            display::categorized_error(out, "Configuration Error", &e.to_string())?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            display::categorized_error(out, "Connection Error", &e.to_string())?;
            return Ok(ExitCode::FAILURE);
        }
    };

    display::success_line(
        out,
        "Successfully initialized Mistral AI client with GitHub authentication",
    )?;

    if args.interactive {
        repl::run_repl(&session, out).await?;
        return Ok(ExitCode::SUCCESS);
    }

    writeln!(out, "\n{}", "Running demonstration...".bright_cyan())?;
    demo::run_demo(&session, &settings.demo_messages, out).await?;

    if !args.demo_only && demo::ask_interactive(&mut io::stdin().lock(), out)? {
        repl::run_repl(&session, out).await?;
    } else {
        display::success_line(out, "Demo completed successfully!")?;
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout();
    match run(args, &mut stdout).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".bright_red());
            ExitCode::FAILURE
        }
    }
}
