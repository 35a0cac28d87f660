//! Flip turn resolver: the two-selection staging buffer.
//!
//! A turn is exactly two token selections resolved together. The resolver
//! is an explicit two-state machine (`Empty -> OneSelected -> Empty`)
//! rather than a nullable "first flipped" field, so there is never any
//! ambiguity about whether a turn is in progress.
//!
//! The second selection always completes the turn, match or not: attempts
//! are consumed per turn, not per match, so both outcomes count against
//! the session's budget.
//!
//! The resolver trusts its inputs. Preventing selection of an already
//! matched, face-up, or pending token is the caller's job (the view layer
//! or [`crate::games::ClassicGame`], which enforces it with `Misuse`
//! errors).

use serde::{Deserialize, Serialize};

use crate::core::Token;
use crate::deck::resolve_pair;

/// Resolver state: is a turn in progress?
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum TurnState {
    /// No selection staged.
    #[default]
    Empty,
    /// First token of the turn staged, awaiting the second.
    OneSelected(Token),
}

/// A completed turn: both selections and the match verdict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnCompleted {
    /// First token selected this turn.
    pub first: Token,
    /// Second token selected this turn.
    pub second: Token,
    /// Whether the two tokens form a pair.
    pub matched: bool,
}

/// Outcome of a single `select` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First selection staged; the turn is still open.
    Pending,
    /// Second selection closed the turn.
    Completed(TurnCompleted),
}

impl SelectOutcome {
    /// Whether this outcome completed a turn.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Accumulates exactly two selections per turn, then resolves them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnResolver {
    state: TurnState,
}

impl TurnResolver {
    /// Create a resolver with no turn in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current resolver state.
    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Whether a first selection is staged.
    #[must_use]
    pub fn turn_in_progress(&self) -> bool {
        matches!(self.state, TurnState::OneSelected(_))
    }

    /// Stage a selection.
    ///
    /// The first selection of a turn returns [`SelectOutcome::Pending`].
    /// The second resolves the pair, resets the buffer, and returns
    /// [`SelectOutcome::Completed`] regardless of the verdict.
    pub fn select(&mut self, token: Token) -> SelectOutcome {
        match std::mem::take(&mut self.state) {
            TurnState::Empty => {
                self.state = TurnState::OneSelected(token);
                SelectOutcome::Pending
            }
            TurnState::OneSelected(first) => {
                let matched = resolve_pair(&first, &token);
                SelectOutcome::Completed(TurnCompleted {
                    first,
                    second: token,
                    matched,
                })
            }
        }
    }

    /// Drop any staged selection, e.g. when a level is restaged mid-turn.
    pub fn reset(&mut self) {
        self.state = TurnState::Empty;
    }
}
