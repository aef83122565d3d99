// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds session.
//!
//! Every edit to the hand submits a new input, the session aborts the pending
//! computation, waits for the input to settle, and runs the engine on the
//! blocking pool. A report is published only if no newer input was submitted
//! in the meantime.
use log::{debug, error};
use parking_lot::Mutex;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::mpsc,
    task::{self, JoinHandle},
    time,
};

use streetodds_odds::{Board, HoleCards, OddsEngine, OddsError, Report, Street};

use crate::input::Command;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long an input must stay unchanged before the odds are computed.
    pub settle_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(50),
        }
    }
}

/// The hand being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandInput {
    /// The hole cards.
    pub hole: HoleCards,
    /// The board cards.
    pub board: Board,
    /// The target street, `None` follows the board.
    pub street: Option<Street>,
}

impl HandInput {
    /// Applies an edit command, returns true if the hand changed.
    pub fn apply(&mut self, cmd: &Command) -> bool {
        let prev = *self;
        match cmd {
            Command::Hole(hole) => self.hole = *hole,
            Command::Board(board) => self.board = *board,
            Command::Street(street) => self.street = *street,
            Command::Reset => *self = HandInput::default(),
            Command::Help | Command::Quit => {}
        }

        prev != *self
    }
}

/// A computed report and the input it was computed from.
#[derive(Debug)]
pub struct SessionReport {
    /// The input.
    pub input: HandInput,
    /// The engine report or the input error.
    pub report: Result<Report, OddsError>,
}

/// Coalesces hand edits into odds computations.
#[derive(Debug)]
pub struct Session {
    engine: Arc<OddsEngine>,
    config: Config,
    generation: Arc<Mutex<u64>>,
    latest: Option<HandInput>,
    pending: Option<JoinHandle<()>>,
    reports_tx: mpsc::UnboundedSender<SessionReport>,
}

impl Session {
    /// Creates a session, the reports are published on the returned channel.
    pub fn new(
        engine: OddsEngine,
        config: Config,
    ) -> (Self, mpsc::UnboundedReceiver<SessionReport>) {
        let (reports_tx, reports_rx) = mpsc::unbounded_channel();
        let session = Self {
            engine: Arc::new(engine),
            config,
            generation: Arc::new(Mutex::new(0)),
            latest: None,
            pending: None,
            reports_tx,
        };

        (session, reports_rx)
    }

    /// Submits a new input replacing any pending one.
    pub fn submit(&mut self, input: HandInput) {
        self.cancel();
        self.latest = Some(input);

        let generation = *self.generation.lock();
        let current = self.generation.clone();
        let engine = self.engine.clone();
        let reports_tx = self.reports_tx.clone();
        let settle_delay = self.config.settle_delay;

        let handle = tokio::spawn(async move {
            time::sleep(settle_delay).await;

            let res = task::spawn_blocking(move || {
                engine.evaluate(&input.hole, &input.board, input.street)
            })
            .await;

            let report = match res {
                Ok(report) => report,
                Err(e) => {
                    error!("Odds task failed: {e}");
                    return;
                }
            };

            // Check and send under the lock.
            let current = current.lock();
            if *current != generation {
                debug!("Discarding report for generation {generation}");
                return;
            }

            // The receiver is gone when the session is shutting down.
            let _ = reports_tx.send(SessionReport { input, report });
        });

        self.pending = Some(handle);
    }

    /// Checks if a report is for the latest submitted input, a report sent
    /// just before a new submit can still be in the channel.
    pub fn is_current(&self, msg: &SessionReport) -> bool {
        self.latest == Some(msg.input)
    }

    /// Cancels the pending computation if any.
    pub fn cancel(&mut self) {
        *self.generation.lock() += 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel();
    }
}
