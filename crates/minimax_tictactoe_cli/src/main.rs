//! Minimax Tic-Tac-Toe - command-line position inspector
//!
//! Reads one board from the command line, runs the rules or the search on
//! it and prints the answer.

#![warn(missing_docs)]

mod board_arg;
mod cli;
mod report;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, Format};
use minimax_tictactoe::{Board, InvariantSet, ReachableBoard};
use report::{AnalyzeReport, BestReport, StatusReport};
use serde::Serialize;
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let board = cli.command.board().0;

    validate(&board, cli.allow_unreachable)?;

    info!(command = ?cli.command, "Running command");

    match cli.command {
        Command::Status { .. } => {
            let report = StatusReport::new(board);
            emit(cli.format, &report, || report.to_text())
        }
        Command::Best { .. } => {
            let report = BestReport::new(board);
            emit(cli.format, &report, || report.to_text())
        }
        Command::Analyze { .. } => {
            let report = AnalyzeReport::new(board);
            emit(cli.format, &report, || report.to_text())
        }
    }
}

/// Rejects boards legal play cannot produce, unless explicitly allowed.
#[instrument(skip(board))]
fn validate(board: &Board, allow_unreachable: bool) -> Result<()> {
    if let Err(violations) = ReachableBoard::check_all(board) {
        let reasons = violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        if allow_unreachable {
            warn!(%reasons, "Board is not reachable by legal play");
        } else {
            bail!("board cannot arise from legal play: {reasons}");
        }
    }
    Ok(())
}

/// Prints a report in the requested format.
fn emit<R: Serialize>(format: Format, report: &R, text: impl FnOnce() -> String) -> Result<()> {
    println!("{}", render(format, report, text)?);
    Ok(())
}

/// Renders a report in the requested format.
#[instrument(skip(report, text))]
fn render<R: Serialize>(
    format: Format,
    report: &R,
    text: impl FnOnce() -> String,
) -> Result<String> {
    match format {
        Format::Text => Ok(text()),
        Format::Json => serde_json::to_string_pretty(report).context("Failed to encode report"),
    }
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,minimax_tictactoe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
