//! Domain events emitted by the session state machine.
//!
//! The core never calls back into views, timers, or animation code.
//! Instead every state-changing session method returns a batch of events
//! describing what happened; presentation layers subscribe by draining
//! the batch and own all animation and timing concerns from there.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Why a session was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoseReason {
    /// The attempt budget ran out before all pairs were found.
    AttemptsExhausted,
    /// The clock ran out.
    TimeExpired,
}

/// Something observable happened inside a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A turn matched a pair; `score` is the new total.
    MatchFound {
        /// Pairs found so far, including this one.
        score: u32,
    },

    /// A turn did not match.
    TurnFailed,

    /// The attempt counter changed.
    AttemptsChanged {
        /// Attempts left after the change.
        remaining: u32,
    },

    /// The clock changed.
    TimeChanged {
        /// Seconds left after the change.
        remaining: f32,
    },

    /// All pairs found; the session is terminal.
    LevelWon,

    /// A budget ran out; the session is terminal.
    LevelLost {
        /// Which budget ran out.
        reason: LoseReason,
    },
}

/// Batch of events from one session call.
///
/// A single turn produces at most three events (verdict, counter change,
/// terminal), so batches stay on the stack.
pub type EventBatch = SmallVec<[SessionEvent; 4]>;
