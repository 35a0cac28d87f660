//! Session state machine: attempt and time budgets for one level attempt.
//!
//! A [`Session`] owns the mutable counters for a single level run and is
//! the only component allowed to change them. It consumes two kinds of
//! input - completed turns from the flip turn resolver and clock ticks
//! from the driving loop - and transitions among three states:
//!
//! ```text
//! Playing --(all pairs found)--> Won      (terminal)
//! Playing --(budget exhausted)--> Lost    (terminal)
//! ```
//!
//! `Won` and `Lost` are terminal and irreversible: once reached, every
//! further event is a no-op and counters are frozen. A new level attempt
//! is a fresh `Session`, never a resumed one.
//!
//! ## Win/lose tie-break
//!
//! A turn that finds the last pair on the last allowed attempt reaches
//! `score == pair_count` and `attempts_remaining == 0` simultaneously.
//! The win check runs first, so that turn is a **Won**. This ordering is
//! a deliberate contract (the player completed the board; the budget
//! merely hit zero at the same instant) and is pinned by tests - do not
//! reorder the checks.
//!
//! ## Threading
//!
//! Single-threaded, frame-driven. Ticks and turns arrive from the one
//! control loop that owns the session; attempt and time exhaustion can
//! race only in the sense that whichever call lands first wins.

pub mod events;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use events::{EventBatch, LoseReason, SessionEvent};

use crate::core::{AttemptBudget, LevelConfig, TimeBudget};

/// Session lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Accepting turns and ticks.
    Playing,
    /// All pairs found. Terminal.
    Won,
    /// A budget ran out. Terminal.
    Lost,
}

impl SessionStatus {
    /// Whether the session has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Self::Playing
    }
}

/// Mutable counters and status for one in-progress level attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pair_count: u32,
    score: u32,
    attempts_remaining: AttemptBudget,
    time_remaining: TimeBudget,
    status: SessionStatus,
}

impl Session {
    /// Start a session from a level config.
    ///
    /// Counters initialize to the config's budgets, `score` to 0, status
    /// to `Playing`. The config is assumed valid ([`LevelConfig::new`]
    /// already rejects a zero pair count).
    #[must_use]
    pub fn start(config: &LevelConfig) -> Self {
        info!(
            level = config.level_number,
            pair_count = config.pair_count,
            attempts = ?config.max_attempts,
            time = ?config.time_limit,
            "session started"
        );

        Self {
            pair_count: config.pair_count,
            score: 0,
            attempts_remaining: config.max_attempts,
            time_remaining: config.time_limit,
            status: SessionStatus::Playing,
        }
    }

    // === Queries (read-only surface for HUDs and orchestration) ===

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Pairs found so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.pair_count
    }

    /// Remaining attempt budget.
    #[must_use]
    pub fn attempts_remaining(&self) -> AttemptBudget {
        self.attempts_remaining
    }

    /// Remaining time budget.
    #[must_use]
    pub fn time_remaining(&self) -> TimeBudget {
        self.time_remaining
    }

    // === Event inputs ===

    /// Consume a completed turn.
    ///
    /// No-op when terminal. Otherwise: a limited attempt budget drops by
    /// exactly one; a match raises `score` by exactly one. Terminal
    /// evaluation order is win before attempt exhaustion (see module
    /// docs).
    pub fn on_turn_completed(&mut self, matched: bool) -> EventBatch {
        let mut events = EventBatch::new();

        if self.status.is_terminal() {
            return events;
        }

        if matched {
            self.score += 1;
            events.push(SessionEvent::MatchFound { score: self.score });
        } else {
            events.push(SessionEvent::TurnFailed);
        }

        if let AttemptBudget::Limited(n) = self.attempts_remaining {
            let remaining = n.saturating_sub(1);
            self.attempts_remaining = AttemptBudget::Limited(remaining);
            events.push(SessionEvent::AttemptsChanged { remaining });
        }

        if self.score == self.pair_count {
            self.status = SessionStatus::Won;
            info!(score = self.score, "level won");
            events.push(SessionEvent::LevelWon);
        } else if self.attempts_remaining == AttemptBudget::Limited(0) {
            self.status = SessionStatus::Lost;
            info!(score = self.score, "level lost: attempts exhausted");
            events.push(SessionEvent::LevelLost {
                reason: LoseReason::AttemptsExhausted,
            });
        }

        events
    }

    /// Consume an elapsed-time tick.
    ///
    /// No-op when terminal, when time is unlimited, or when `delta` is
    /// not positive. The clock clamps at zero; reaching zero loses the
    /// session.
    pub fn on_clock_tick(&mut self, delta_seconds: f32) -> EventBatch {
        let mut events = EventBatch::new();

        if self.status.is_terminal() || delta_seconds <= 0.0 {
            return events;
        }

        let TimeBudget::Limited(current) = self.time_remaining else {
            return events;
        };

        let remaining = (current - delta_seconds).max(0.0);
        self.time_remaining = TimeBudget::Limited(remaining);
        events.push(SessionEvent::TimeChanged { remaining });

        if remaining <= 0.0 {
            self.status = SessionStatus::Lost;
            info!(score = self.score, "level lost: time expired");
            events.push(SessionEvent::LevelLost {
                reason: LoseReason::TimeExpired,
            });
        } else {
            debug!(remaining, "clock tick");
        }

        events
    }
}
