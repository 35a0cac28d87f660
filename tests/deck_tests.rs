//! Deck engine tests: build shape, shuffle properties, match resolution.

use proptest::prelude::*;

use memotest::{resolve_pair, Deck, DeckRng, Token, TokenId};

/// Count how many times each id occurs in the deck.
fn id_multiset(deck: &Deck) -> Vec<u32> {
    let mut counts = vec![0u32; deck.pair_count() as usize];
    for token in deck.tokens() {
        counts[token.id.raw() as usize] += 1;
    }
    counts
}

#[test]
fn test_build_length_and_multiset() {
    let mut rng = DeckRng::new(1);

    for pair_count in [1u32, 2, 3, 8, 20] {
        let deck = Deck::build(pair_count, &mut rng).unwrap();

        assert_eq!(deck.len(), pair_count as usize * 2);
        assert!(
            id_multiset(&deck).iter().all(|&c| c == 2),
            "every id must appear exactly twice"
        );
    }
}

#[test]
fn test_shuffle_is_a_permutation_of_the_pair_multiset() {
    // Shuffling must never create, drop, or duplicate tokens.
    for seed in 0..50 {
        let mut rng = DeckRng::new(seed);
        let deck = Deck::build(10, &mut rng).unwrap();

        let mut ids: Vec<u32> = deck.tokens().iter().map(|t| t.id.raw()).collect();
        ids.sort_unstable();
        let expected: Vec<u32> = (0..10).flat_map(|id| [id, id]).collect();

        assert_eq!(ids, expected);
    }
}

#[test]
fn test_shuffle_position_distribution_is_near_uniform() {
    // Each id has 2 copies among 6 slots, so over `trials` deals each
    // (slot, id) cell expects trials/3 hits. The bound below is well past
    // five standard deviations; the seeds are fixed, so this is
    // deterministic in practice.
    const PAIR_COUNT: u32 = 3;
    const SLOTS: usize = 6;
    const TRIALS: u64 = 3000;

    let mut counts = [[0u32; PAIR_COUNT as usize]; SLOTS];
    for seed in 0..TRIALS {
        let mut rng = DeckRng::new(seed);
        let deck = Deck::build(PAIR_COUNT, &mut rng).unwrap();
        for (slot, token) in deck.tokens().iter().enumerate() {
            counts[slot][token.id.raw() as usize] += 1;
        }
    }

    let expected = TRIALS as f64 / PAIR_COUNT as f64;
    for (slot, row) in counts.iter().enumerate() {
        for (id, &count) in row.iter().enumerate() {
            let deviation = (f64::from(count) - expected).abs();
            assert!(
                deviation < expected * 0.15,
                "slot {slot} id {id}: count {count} deviates too far from {expected}"
            );
        }
    }
}

#[test]
fn test_resolve_pair_reflexive_and_symmetric() {
    let a = Token::new(TokenId::new(0));
    let a2 = Token::new(TokenId::new(0));
    let b = Token::new(TokenId::new(1));

    assert!(resolve_pair(&a, &a2));
    assert!(resolve_pair(&a2, &a));
    assert!(!resolve_pair(&a, &b));
    assert!(!resolve_pair(&b, &a));
}

proptest! {
    #[test]
    fn prop_build_shape(pair_count in 1u32..64, seed in any::<u64>()) {
        let mut rng = DeckRng::new(seed);
        let deck = Deck::build(pair_count, &mut rng).unwrap();

        prop_assert_eq!(deck.len(), pair_count as usize * 2);
        prop_assert!(id_multiset(&deck).iter().all(|&c| c == 2));
    }

    #[test]
    fn prop_resolve_pair_symmetric(a in 0u32..100, b in 0u32..100) {
        let ta = Token::new(TokenId::new(a));
        let tb = Token::new(TokenId::new(b));

        prop_assert_eq!(resolve_pair(&ta, &tb), resolve_pair(&tb, &ta));
        prop_assert_eq!(resolve_pair(&ta, &tb), a == b);
    }

    #[test]
    fn prop_shuffle_preserves_multiset(len in 2usize..64, seed in any::<u64>()) {
        let mut rng = DeckRng::new(seed);
        let mut data: Vec<usize> = (0..len).collect();
        rng.shuffle(&mut data);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
    }
}
