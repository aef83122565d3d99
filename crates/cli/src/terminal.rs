// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Color, Stylize},
};
use std::io::{self, Write};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use streetodds_odds::{Card, Report};

use crate::{
    input::Command,
    session::{HandInput, Session, SessionReport},
};

/// Runs the interactive loop until quit or the end of the input.
pub async fn run(
    mut session: Session,
    mut reports: mpsc::UnboundedReceiver<SessionReport>,
) -> Result<()> {
    let mut stdout = io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input = HandInput::default();

    println!("{}\n", Command::HELP);
    prompt(&mut stdout)?;

    loop {
        tokio::select! {
            // A new command line from the user.
            res = lines.next_line() => {
                let Some(line) = res? else {
                    break;
                };

                if line.trim().is_empty() {
                    prompt(&mut stdout)?;
                    continue;
                }

                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", Command::HELP),
                    Ok(cmd) => {
                        if input.apply(&cmd) {
                            session.submit(input);
                            continue;
                        }
                    }
                    Err(e) => print_error(&mut stdout, &e.to_string())?,
                }

                prompt(&mut stdout)?;
            },
            // The odds for the latest input are ready.
            Some(msg) = reports.recv() => {
                if !session.is_current(&msg) {
                    continue;
                }

                print_hand(&mut stdout, &msg.input)?;
                match msg.report {
                    Ok(report) => print_report(&mut stdout, &report)?,
                    Err(e) => print_error(&mut stdout, &e.to_string())?,
                }

                prompt(&mut stdout)?;
            },
        }
    }

    session.cancel();

    Ok(())
}

/// Prints the odds table and the best hand.
pub fn print_report(w: &mut impl Write, report: &Report) -> Result<()> {
    queue!(w, style::Print(format!("Odds by the {}\n", report.street)))?;

    if let Some(result) = report.odds.result() {
        for (category, pct) in result.iter() {
            let info = category.info();
            let line = format!("  {:<16} {pct:6.2}%   {}\n", info.name, info.frequency);
            queue!(w, style::PrintStyledContent(style::style(line).with(odds_color(pct))))?;
        }

        queue!(w, style::Print(format!("  {} runs\n", result.runs())))?;
    } else {
        queue!(
            w,
            style::PrintStyledContent("  Both hole cards are needed\n".dark_grey())
        )?;
    }

    if let Some(best) = report.best_hand {
        queue!(
            w,
            style::Print("Best hand: "),
            style::PrintStyledContent(best.name().bold()),
            style::Print("\n")
        )?;
    }

    w.flush()?;

    Ok(())
}

/// Picks the color for a percentage, certain hands stand out the most.
fn odds_color(pct: f64) -> Color {
    if pct >= 100.0 {
        Color::Red
    } else if pct > 50.0 {
        Color::DarkRed
    } else if pct > 20.0 {
        Color::Blue
    } else {
        Color::Grey
    }
}

fn print_hand(w: &mut impl Write, input: &HandInput) -> Result<()> {
    let street = input
        .street
        .map(|s| s.to_string())
        .unwrap_or_else(|| "auto".to_string());

    let text = format!(
        "\nHole: {}  Board: {}  Street: {street}\n",
        format_slots(input.hole.slots()),
        format_slots(input.board.slots())
    );

    queue!(w, style::PrintStyledContent(text.as_str().dark_green()))?;

    Ok(())
}

fn print_error(w: &mut impl Write, msg: &str) -> Result<()> {
    queue!(
        w,
        style::PrintStyledContent(format!("error: {msg}\n").as_str().red())
    )?;
    w.flush()?;

    Ok(())
}

fn prompt(w: &mut impl Write) -> Result<()> {
    queue!(w, style::Print("> "))?;
    w.flush()?;

    Ok(())
}

/// Formats card slots with the suit symbols, `_` for an empty slot.
fn format_slots(slots: &[Option<Card>]) -> String {
    slots
        .iter()
        .map(|slot| match slot {
            Some(c) => format!("{}{}", c.rank(), c.suit().symbol()),
            None => "_".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
