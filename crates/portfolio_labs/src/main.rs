//! Portfolio Labs - unified CLI
//!
//! Tic-tac-toe against an unbeatable opponent and a keypad calculator.

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_labs::commands::{open_store, run_eval, run_history, run_scores};
use portfolio_labs::telemetry::{init_cli_tracing, init_tui_tracing};
use portfolio_labs::tui::{AppContext, StartScreen, run_tui};
use portfolio_labs::{Cli, Command, LabsConfig};
use std::process::ExitCode;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Eval { ref expr }) => {
            init_cli_tracing();
            let ok = run_eval(&expr.join(" "), &mut std::io::stdout())?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Some(Command::Scores { reset }) => {
            init_cli_tracing();
            let config = resolve_config(&cli)?;
            let store = open_store(&config, cli.ephemeral)?;
            run_scores(&store, reset, &mut std::io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::History { clear }) => {
            init_cli_tracing();
            let config = resolve_config(&cli)?;
            let store = open_store(&config, cli.ephemeral)?;
            run_history(&store, clear, &mut std::io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Tictactoe { .. }) => launch(&cli, StartScreen::TicTacToe).await,
        Some(Command::Calculator) => launch(&cli, StartScreen::Calculator).await,
        None => launch(&cli, StartScreen::Menu).await,
    }
}

/// Layers the config file, the environment and the command line.
#[instrument(skip(cli))]
fn resolve_config(cli: &Cli) -> Result<LabsConfig> {
    let (mode, first) = match &cli.command {
        Some(Command::Tictactoe { mode, first }) => {
            (mode.map(Into::into), first.map(Into::into))
        }
        _ => (None, None),
    };

    let config = LabsConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_env(|key| std::env::var(key).ok())
        .with_overrides(cli.store.clone(), cli.ai_delay_ms, mode, first);
    info!(?config, "Configuration resolved");
    Ok(config)
}

/// Runs the terminal UI.
async fn launch(cli: &Cli, start: StartScreen) -> Result<ExitCode> {
    let config = resolve_config(cli)?;
    init_tui_tracing(config.log_file())?;
    let store = open_store(&config, cli.ephemeral)?;

    run_tui(AppContext::new(config, store), start).await?;
    Ok(ExitCode::SUCCESS)
}
