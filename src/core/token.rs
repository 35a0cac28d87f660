//! Tokens - the matchable card identities.
//!
//! A `Token` is one face of a pair. A correctly built deck contains
//! exactly two tokens per `TokenId`. Equality is by id only: the label
//! is display data and never participates in matching.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Pair identity. Two tokens match iff their `TokenId`s are equal.
///
/// Ids are dense: a deck built for `pair_count` pairs uses ids
/// `0..pair_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// One face of a matchable pair.
///
/// Immutable once built. The deck owns its tokens; view layers and the
/// turn resolver work with clones/copies of the identity.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Pair identity.
    pub id: TokenId,

    /// Display name, derived from the id (`"Card 1"` for id 0).
    /// Not used for equality.
    pub label: String,
}

impl Token {
    /// Create a token with the standard 1-based display label.
    #[must_use]
    pub fn new(id: TokenId) -> Self {
        Self {
            label: format!("Card {}", id.raw() + 1),
            id,
        }
    }

    /// Check whether two tokens form a matching pair.
    #[must_use]
    pub fn matches(&self, other: &Token) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
