// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Street Odds command line calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use std::{io, time::Duration};

use streetodds_odds::{EngineConfig, MAX_EXACT_DRAW, MONTE_CARLO_TRIALS, OddsEngine, Street};

pub mod input;
pub mod session;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The hole cards, like "As Kd".
    #[clap(long, default_value = "")]
    hole: String,
    /// The board cards, `_` for an empty slot, like "Kd 9c 4s _ 2h".
    #[clap(long, short, default_value = "")]
    board: String,
    /// The target street, follows the board if not given.
    #[clap(long, short)]
    street: Option<Street>,
    /// Prints the report as JSON.
    #[clap(long, short, conflicts_with = "interactive")]
    json: bool,
    /// Reads commands from the standard input.
    #[clap(long, short)]
    interactive: bool,
    /// The interactive settle delay in milliseconds.
    #[clap(long, default_value_t = 50)]
    settle_ms: u64,
    /// Number of Monte Carlo runouts.
    #[clap(long, default_value_t = MONTE_CARLO_TRIALS as u32,
        value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    trials: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let engine = OddsEngine::new(EngineConfig {
        trials: cli.trials as usize,
        max_exact_draw: MAX_EXACT_DRAW,
    });

    if cli.interactive {
        let config = session::Config {
            settle_delay: Duration::from_millis(cli.settle_ms),
        };

        let (session, reports) = session::Session::new(engine, config);
        return terminal::run(session, reports).await;
    }

    let hole = input::parse_hole(&cli.hole)?;
    let board = input::parse_board(&cli.board)?;
    if hole.cards().is_none() && !cli.json {
        bail!("two hole cards are needed, like --hole \"As Kd\"");
    }

    let report = engine.evaluate(&hole, &board, cli.street)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        terminal::print_report(&mut io::stdout(), &report)?;
    }

    Ok(())
}
