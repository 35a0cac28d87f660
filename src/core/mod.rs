//! Core engine types: tokens, budgets, level configs, RNG, errors.
//!
//! This module contains the fundamental building blocks shared by the
//! deck engine, the turn resolver, and the session state machine.

pub mod error;
pub mod level;
pub mod rng;
pub mod token;

pub use error::{Error, Result};
pub use level::{AttemptBudget, LevelConfig, TimeBudget};
pub use rng::{DeckRng, DeckRngState};
pub use token::{Token, TokenId};
