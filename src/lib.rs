//! # memotest
//!
//! Rule engine for memory-matching ("memotest") puzzles: deck generation,
//! flip-turn resolution, and per-level attempt/time budgets.
//!
//! ## Design Principles
//!
//! 1. **Identity vs policy**: match detection (token identity) lives in the
//!    deck engine; score and attempt bookkeeping live in the session state
//!    machine. Neither reaches into the other.
//!
//! 2. **Events out, never callbacks in**: state-changing session methods
//!    return [`session::SessionEvent`] batches. Views and timers subscribe;
//!    the core never waits on or calls into presentation code.
//!
//! 3. **Explicit state, no hidden globals**: the turn buffer is a typed
//!    two-state machine, budgets are explicit `Unlimited`/`Limited`
//!    variants, and games are constructed and passed, never process-wide
//!    singletons.
//!
//! 4. **Deterministic by seed**: deals come from a seedable, serializable
//!    RNG, so any board can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: tokens, budgets, level configs, RNG, errors
//! - `deck`: pair generation, Fisher-Yates shuffle, match resolution
//! - `turn`: the two-selection flip turn resolver
//! - `session`: attempt/time budgets and Playing/Won/Lost transitions
//! - `levels`: the ordered level-config table with clamped lookup
//! - `games`: complete games wired on top of the parts

pub mod core;
pub mod deck;
pub mod games;
pub mod levels;
pub mod session;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    AttemptBudget, DeckRng, DeckRngState, Error, LevelConfig, Result, TimeBudget, Token, TokenId,
};

pub use crate::deck::{resolve_pair, Deck};

pub use crate::turn::{SelectOutcome, TurnCompleted, TurnResolver, TurnState};

pub use crate::session::{EventBatch, LoseReason, Session, SessionEvent, SessionStatus};

pub use crate::levels::LevelProgression;

pub use crate::games::{ClassicGame, SelectResult};
