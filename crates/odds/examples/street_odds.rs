// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example street_odds -- --hole "Ah Kh" --board "Qh 7h 2c"
// ...
// Street: Flop   runs: 1      elapsed: 0.000s
// Street: Turn   runs: 46     elapsed: 0.000s
// Street: River  runs: 1081   elapsed: 0.001s
// ```
use clap::Parser;
use std::time::Instant;

use streetodds_odds::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The two hole cards.
    #[clap(long, default_value = "Ah Kh")]
    hole: String,
    /// The board cards, up to five.
    #[clap(long, default_value = "")]
    board: String,
}

fn parse_cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| c.parse::<Card>().unwrap_or_else(|e| panic!("{c}: {e}")))
        .collect()
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let hole = parse_cards(&cli.hole);
    assert_eq!(hole.len(), 2, "two hole cards required");

    let hole = HoleCards::new(hole[0], hole[1]);
    let board = Board::with_cards(&parse_cards(&cli.board));

    let engine = OddsEngine::default();
    for street in Street::ALL {
        let now = Instant::now();
        let odds = engine.compute_odds(&hole, &board, street).unwrap();
        let elapsed = now.elapsed().as_secs_f64();

        let Some(result) = odds.result() else {
            continue;
        };

        println!(
            "Street: {:<6} runs: {:<6} elapsed: {elapsed:.3}s",
            street.to_string(),
            result.runs()
        );

        for (category, pct) in result.iter() {
            println!("  {:<16} {pct:6.2}%", category.name());
        }
    }
}
