//! Classic single-player memotest, wired end to end.
//!
//! [`ClassicGame`] binds the engine parts together the way a game scene
//! would: level progression supplies a config, the deck engine deals a
//! board, player selections flow through the turn resolver, completed
//! turns feed the session, and win/lose outcomes drive advance or retry.
//!
//! The game addresses tokens by **slot index** (position in deck order),
//! because that is what a view layer has: a grid of card widgets laid out
//! in deck order. It also enforces the call-order preconditions the
//! resolver trusts its callers with: selecting an out-of-range slot, an
//! already-matched slot, the pending slot again, or anything after the
//! session ended is a [`Error::Misuse`].
//!
//! Timing concerns (memorize preview, flip-back delays, panel
//! animations) stay outside: they only gate when the caller invokes
//! `select` and `tick`, never mutate state here directly.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{DeckRng, Error, LevelConfig, Result};
use crate::deck::Deck;
use crate::levels::LevelProgression;
use crate::session::{EventBatch, Session, SessionStatus};
use crate::turn::{SelectOutcome, TurnResolver};

/// Outcome of one slot selection, with the session events it produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectResult {
    /// First selection of a turn; nothing to resolve yet.
    Pending,
    /// The turn completed.
    Completed {
        /// Whether the two slots matched.
        matched: bool,
        /// Session events produced by the completed turn.
        events: EventBatch,
    },
}

/// One staged level: deck, session, and slot bookkeeping.
#[derive(Clone, Debug)]
struct Board {
    deck: Deck,
    session: Session,
    resolver: TurnResolver,
    /// Slot holding the turn's first selection, while one is staged.
    pending_slot: Option<usize>,
    /// Slots whose pairs have been found.
    matched_slots: FxHashSet<usize>,
}

impl Board {
    fn stage(config: &LevelConfig, rng: &mut DeckRng) -> Result<Self> {
        Ok(Self {
            deck: Deck::build(config.pair_count, rng)?,
            session: Session::start(config),
            resolver: TurnResolver::new(),
            pending_slot: None,
            matched_slots: FxHashSet::default(),
        })
    }
}

/// A full memotest game: progression, deck, resolver, and session.
#[derive(Clone, Debug)]
pub struct ClassicGame {
    progression: LevelProgression,
    rng: DeckRng,
    board: Option<Board>,
}

impl ClassicGame {
    /// Create a game over a level table. No level is staged yet; call
    /// [`ClassicGame::start_level`].
    ///
    /// Deals are deterministic per seed: the same seed and the same call
    /// sequence produce the same boards.
    #[must_use]
    pub fn new(progression: LevelProgression, seed: u64) -> Self {
        Self {
            progression,
            rng: DeckRng::new(seed),
            board: None,
        }
    }

    /// Stage the current level: fresh deck, fresh session, cleared turn
    /// buffer.
    pub fn start_level(&mut self) -> Result<()> {
        let config = self.progression.current_config().clone();
        self.board = Some(Board::stage(&config, &mut self.rng)?);

        info!(
            level = config.level_number,
            pair_count = config.pair_count,
            "level staged"
        );
        Ok(())
    }

    /// Select the card at `slot` (deck-order index).
    ///
    /// Returns `Misuse` when no level is staged, the session already
    /// ended, the slot is out of range, already matched, or is the
    /// pending first selection.
    pub fn select(&mut self, slot: usize) -> Result<SelectResult> {
        let board = self
            .board
            .as_mut()
            .ok_or_else(|| Error::misuse("no level staged; call start_level first"))?;

        if board.session.status().is_terminal() {
            return Err(Error::misuse("session already ended"));
        }
        if board.matched_slots.contains(&slot) {
            return Err(Error::misuse(format!("slot {slot} already matched")));
        }
        if board.pending_slot == Some(slot) {
            return Err(Error::misuse(format!("slot {slot} is already face up")));
        }
        let token = board
            .deck
            .token(slot)
            .ok_or_else(|| Error::misuse(format!("slot {slot} out of range")))?
            .clone();

        match board.resolver.select(token) {
            SelectOutcome::Pending => {
                board.pending_slot = Some(slot);
                debug!(slot, "first selection staged");
                Ok(SelectResult::Pending)
            }
            SelectOutcome::Completed(turn) => {
                // pending_slot is always set when the resolver holds a
                // first selection; both are written together below.
                let first_slot = board.pending_slot.take().ok_or_else(|| {
                    Error::misuse("turn completed without a staged first selection")
                })?;

                if turn.matched {
                    board.matched_slots.insert(first_slot);
                    board.matched_slots.insert(slot);
                }

                debug!(
                    first = first_slot,
                    second = slot,
                    matched = turn.matched,
                    "turn completed"
                );

                let events = board.session.on_turn_completed(turn.matched);
                Ok(SelectResult::Completed {
                    matched: turn.matched,
                    events,
                })
            }
        }
    }

    /// Forward an elapsed-time tick to the staged session.
    pub fn tick(&mut self, delta_seconds: f32) -> Result<EventBatch> {
        let board = self
            .board
            .as_mut()
            .ok_or_else(|| Error::misuse("no level staged; call start_level first"))?;

        Ok(board.session.on_clock_tick(delta_seconds))
    }

    /// Advance to the next level and stage it.
    ///
    /// Only valid after a win; losing restages via [`ClassicGame::retry`].
    pub fn advance_level(&mut self) -> Result<()> {
        let won = self
            .board
            .as_ref()
            .is_some_and(|b| b.session.status() == SessionStatus::Won);
        if !won {
            return Err(Error::misuse("advance_level requires a won session"));
        }

        self.progression.advance();
        self.start_level()
    }

    /// Restage the current level with a fresh deal and counters.
    pub fn retry(&mut self) -> Result<()> {
        self.start_level()
    }

    /// Go back to level 1 and stage it.
    pub fn restart(&mut self) -> Result<()> {
        self.progression.reset();
        self.start_level()
    }

    // === Queries ===

    /// 1-based current level number.
    #[must_use]
    pub fn current_level(&self) -> u32 {
        self.progression.current_level()
    }

    /// Whether a level is defined after the current one.
    #[must_use]
    pub fn has_next_level(&self) -> bool {
        self.progression.has_next_level(self.progression.current_level())
    }

    /// The staged deck, in slot order, if a level is staged.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.board.as_ref().map(|b| &b.deck)
    }

    /// The staged session, if a level is staged.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.board.as_ref().map(|b| &b.session)
    }

    /// Slot holding the turn's first selection, if one is staged.
    #[must_use]
    pub fn pending_slot(&self) -> Option<usize> {
        self.board.as_ref().and_then(|b| b.pending_slot)
    }

    /// Whether a slot's pair has been found.
    #[must_use]
    pub fn is_slot_matched(&self, slot: usize) -> bool {
        self.board
            .as_ref()
            .is_some_and(|b| b.matched_slots.contains(&slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TokenId;

    fn single_level(pair_count: u32, max_attempts: i32, time_limit: f32) -> ClassicGame {
        let progression = LevelProgression::new(vec![LevelConfig::new(
            1,
            pair_count,
            max_attempts,
            time_limit,
            0.0,
        )
        .unwrap()])
        .unwrap();
        ClassicGame::new(progression, 42)
    }

    /// Slot indices in deck order, grouped by token id.
    fn slots_by_id(deck: &Deck) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); deck.pair_count() as usize];
        for (slot, token) in deck.iter().enumerate() {
            groups[token.id.raw() as usize].push(slot);
        }
        groups
    }

    #[test]
    fn test_select_before_start_is_misuse() {
        let mut game = single_level(2, -1, -1.0);
        assert!(matches!(game.select(0), Err(Error::Misuse { .. })));
        assert!(matches!(game.tick(1.0), Err(Error::Misuse { .. })));
    }

    #[test]
    fn test_matched_slots_tracked() {
        let mut game = single_level(3, -1, -1.0);
        game.start_level().unwrap();

        let pairs = slots_by_id(game.deck().unwrap());
        let [a, b] = pairs[0][..] else { unreachable!() };

        assert_eq!(game.select(a).unwrap(), SelectResult::Pending);
        assert_eq!(game.pending_slot(), Some(a));

        let result = game.select(b).unwrap();
        assert!(matches!(
            result,
            SelectResult::Completed { matched: true, .. }
        ));
        assert!(game.is_slot_matched(a));
        assert!(game.is_slot_matched(b));
        assert_eq!(game.pending_slot(), None);
    }

    #[test]
    fn test_reselect_pending_slot_is_misuse() {
        let mut game = single_level(2, -1, -1.0);
        game.start_level().unwrap();

        game.select(0).unwrap();
        assert!(matches!(game.select(0), Err(Error::Misuse { .. })));
        // The staged selection survives the rejected call.
        assert_eq!(game.pending_slot(), Some(0));
    }

    #[test]
    fn test_select_matched_slot_is_misuse() {
        let mut game = single_level(2, -1, -1.0);
        game.start_level().unwrap();

        let pairs = slots_by_id(game.deck().unwrap());
        let [a, b] = pairs[0][..] else { unreachable!() };
        game.select(a).unwrap();
        game.select(b).unwrap();

        assert!(matches!(game.select(a), Err(Error::Misuse { .. })));
    }

    #[test]
    fn test_select_out_of_range_is_misuse() {
        let mut game = single_level(2, -1, -1.0);
        game.start_level().unwrap();

        assert!(matches!(game.select(4), Err(Error::Misuse { .. })));
    }

    #[test]
    fn test_same_seed_same_deal() {
        let deal = |seed: u64| {
            let progression = LevelProgression::new(vec![LevelConfig::new(
                1, 8, -1, -1.0, 0.0,
            )
            .unwrap()])
            .unwrap();
            let mut game = ClassicGame::new(progression, seed);
            game.start_level().unwrap();
            let ids: Vec<TokenId> = game.deck().unwrap().iter().map(|t| t.id).collect();
            ids
        };

        assert_eq!(deal(11), deal(11));
        assert_ne!(deal(11), deal(12));
    }

    #[test]
    fn test_retry_redeals() {
        let mut game = single_level(8, -1, -1.0);
        game.start_level().unwrap();
        let first: Vec<TokenId> = game.deck().unwrap().iter().map(|t| t.id).collect();

        game.select(0).unwrap();
        game.retry().unwrap();

        let second: Vec<TokenId> = game.deck().unwrap().iter().map(|t| t.id).collect();
        // The RNG advanced, so the redeal is (overwhelmingly likely) a
        // different permutation; bookkeeping is definitely cleared.
        assert_ne!(first, second);
        assert_eq!(game.pending_slot(), None);
        assert_eq!(game.session().unwrap().score(), 0);
    }

    #[test]
    fn test_advance_requires_win() {
        let mut game = single_level(2, -1, -1.0);
        game.start_level().unwrap();

        assert!(matches!(game.advance_level(), Err(Error::Misuse { .. })));
    }
}
