//! Argument parsing.

use clap::Parser;
use portfolio_labs::{Cli, Command, FirstArg, ModeArg};

#[test]
fn test_no_subcommand_opens_menu() {
    let cli = Cli::try_parse_from(["portfolio_labs"]).unwrap();
    assert_eq!(cli.command, None);
    assert!(!cli.ephemeral);
}

#[test]
fn test_tictactoe_flags() {
    let cli = Cli::try_parse_from([
        "portfolio_labs",
        "tictactoe",
        "--mode",
        "two-player",
        "--first",
        "computer",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Some(Command::Tictactoe {
            mode: Some(ModeArg::TwoPlayer),
            first: Some(FirstArg::Computer),
        })
    );
}

#[test]
fn test_unknown_mode_is_rejected() {
    assert!(Cli::try_parse_from(["portfolio_labs", "tictactoe", "--mode", "online"]).is_err());
}

#[test]
fn test_eval_collects_words() {
    let cli = Cli::try_parse_from(["portfolio_labs", "eval", "10", "-", "-4"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Command::Eval {
            expr: vec!["10".to_string(), "-".to_string(), "-4".to_string()],
        })
    );
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "portfolio_labs",
        "scores",
        "--reset",
        "--ephemeral",
        "--config",
        "labs.toml",
    ])
    .unwrap();
    assert!(cli.ephemeral);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("labs.toml")));
    assert_eq!(cli.command, Some(Command::Scores { reset: true }));
}

#[test]
fn test_history_clear() {
    let cli = Cli::try_parse_from(["portfolio_labs", "history", "--clear"]).unwrap();
    assert_eq!(cli.command, Some(Command::History { clear: true }));
}
