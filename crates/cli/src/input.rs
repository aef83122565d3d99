// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and commands parsing.
use anyhow::{Result, anyhow, bail};

use streetodds_odds::{Board, Card, HoleCards, Street};

/// The placeholder for an empty slot.
const EMPTY_SLOT: &str = "_";

/// Parses space or comma separated card slots, `_` is an empty slot.
fn parse_slots(s: &str) -> Result<Vec<Option<Card>>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| {
            if t == EMPTY_SLOT {
                Ok(None)
            } else {
                t.parse::<Card>()
                    .map(Some)
                    .map_err(|e| anyhow!("invalid card '{t}': {e}"))
            }
        })
        .collect()
}

/// Parses the hole cards, like `As Kd` or `As _`.
pub fn parse_hole(s: &str) -> Result<HoleCards> {
    let slots = parse_slots(s)?;
    if slots.len() > HoleCards::SLOTS {
        bail!("expected at most 2 hole cards, got {}", slots.len());
    }

    let mut hole = HoleCards::default();
    for (idx, card) in slots.into_iter().enumerate() {
        hole.set(idx, card);
    }

    Ok(hole)
}

/// Parses the board cards in slot order, like `Kd 9c 4s` or `Kd 9c 4s _ 2h`.
pub fn parse_board(s: &str) -> Result<Board> {
    let slots = parse_slots(s)?;
    if slots.len() > Board::SLOTS {
        bail!("expected at most 5 board cards, got {}", slots.len());
    }

    let mut board = Board::default();
    for (idx, card) in slots.into_iter().enumerate() {
        board.set(idx, card);
    }

    Ok(board)
}

/// An interactive session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sets the hole cards.
    Hole(HoleCards),
    /// Sets the board cards.
    Board(Board),
    /// Sets the target street, `None` follows the board.
    Street(Option<Street>),
    /// Clears all the cards and the street.
    Reset,
    /// Prints the commands.
    Help,
    /// Exits the session.
    Quit,
}

impl Command {
    /// The commands help text.
    pub const HELP: &'static str = "\
hole <cards>     set the hole cards, e.g. hole As Kd
board <cards>    set the board, _ for an empty slot, e.g. board Kd 9c 4s _ 2h
street <street>  set the target street: flop, turn, river, or auto
reset            clear the hand
help             show this help
quit             exit";

    /// Parses a command line.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (cmd, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let cmd = match cmd.to_ascii_lowercase().as_str() {
            "hole" | "h" => Command::Hole(parse_hole(args)?),
            "board" | "b" => Command::Board(parse_board(args)?),
            "street" | "s" => match args.trim() {
                "" | "auto" => Command::Street(None),
                street => Command::Street(Some(street.parse()?)),
            },
            "reset" | "r" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => bail!("unknown command '{cmd}', type help for the commands"),
        };

        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn hole_parsing() {
        let hole = parse_hole("As Kd").unwrap();
        assert_eq!(hole, HoleCards::new(card("As"), card("Kd")));

        let hole = parse_hole("As,Kd").unwrap();
        assert_eq!(hole, HoleCards::new(card("As"), card("Kd")));

        let hole = parse_hole("_ Kd").unwrap();
        assert_eq!(hole.slots(), &[None, Some(card("Kd"))]);

        assert_eq!(parse_hole("").unwrap(), HoleCards::default());
        assert!(parse_hole("As Kd Qh").is_err());
        assert!(parse_hole("As Xd").is_err());
    }

    #[test]
    fn board_parsing() {
        let board = parse_board("Kd 9c 4s").unwrap();
        assert_eq!(board.filled_count(), 3);
        assert_eq!(board.slots()[3], None);

        let board = parse_board("Kd 9c 4s _ 2h").unwrap();
        assert_eq!(board.slots()[3], None);
        assert_eq!(board.slots()[4], Some(card("2h")));

        assert!(parse_board("Kd 9c 4s 2h 3h 5h").is_err());
        assert!(parse_board("Kd 9").is_err());
    }

    #[test]
    fn command_parsing() {
        assert_eq!(
            Command::parse("hole As Ah").unwrap(),
            Command::Hole(HoleCards::new(card("As"), card("Ah")))
        );
        assert_eq!(
            Command::parse("  B Kd 9c 4s ").unwrap(),
            Command::Board(parse_board("Kd 9c 4s").unwrap())
        );
        assert_eq!(
            Command::parse("street turn").unwrap(),
            Command::Street(Some(Street::Turn))
        );
        assert_eq!(Command::parse("street auto").unwrap(), Command::Street(None));
        assert_eq!(Command::parse("street").unwrap(), Command::Street(None));
        assert_eq!(Command::parse("reset").unwrap(), Command::Reset);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);

        assert!(Command::parse("street preflop").is_err());
        assert!(Command::parse("deal").is_err());
        assert!(Command::parse("").is_err());
    }
}
