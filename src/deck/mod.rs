//! Deck engine: pair generation, shuffling, and match resolution.
//!
//! A deck is built once per level: exactly two [`Token`]s per id for
//! `id in 0..pair_count`, then a Fisher-Yates shuffle over the whole
//! sequence. Slot order is significant - view layers populate their card
//! grid straight from deck order.
//!
//! Match detection lives here ([`resolve_pair`]); score and attempt
//! bookkeeping belong to the session state machine. Keeping identity
//! checks separate from budget policy means neither can drift into the
//! other's invariants.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DeckRng, Error, Result, Token, TokenId};

/// Check whether two tokens form a matching pair.
///
/// Pure: no side effects, no counter mutation. Symmetric in its
/// arguments.
#[must_use]
pub fn resolve_pair(a: &Token, b: &Token) -> bool {
    a.id == b.id
}

/// A shuffled sequence of paired tokens for one level instance.
///
/// Invariant: the id multiset is exactly `{0,0,1,1,...,pair_count-1 x2}`.
/// The deck is immutable once built; a retry or a new level builds a
/// fresh one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    tokens: Vec<Token>,
    pair_count: u32,
}

impl Deck {
    /// Build and shuffle a deck of `pair_count` pairs.
    ///
    /// Labels are 1-based (`"Card 1"` for id 0). Fails with
    /// `InvalidConfiguration` when `pair_count == 0`.
    pub fn build(pair_count: u32, rng: &mut DeckRng) -> Result<Self> {
        if pair_count == 0 {
            return Err(Error::invalid_configuration(
                "deck pair count must be positive",
            ));
        }

        let mut tokens = Vec::with_capacity(pair_count as usize * 2);
        for id in 0..pair_count {
            let token = Token::new(TokenId::new(id));
            tokens.push(token.clone());
            tokens.push(token);
        }

        rng.shuffle(&mut tokens);

        debug!(pair_count, seed = rng.seed(), "deck built");

        Ok(Self { tokens, pair_count })
    }

    /// Number of matchable pairs.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.pair_count
    }

    /// Total number of slots (`2 * pair_count`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A deck is never empty; provided for clippy-idiomatic pairing with
    /// `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at a slot, if the slot exists.
    #[must_use]
    pub fn token(&self, slot: usize) -> Option<&Token> {
        self.tokens.get(slot)
    }

    /// Tokens in slot order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate tokens in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
