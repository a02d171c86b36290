//! Display order shuffling.
//!
//! Fisher-Yates (Knuth): walk from the end of the slice towards the front,
//! swapping the last unplaced element with a uniformly chosen element of the
//! unplaced prefix, inclusive.

use crate::types::Card;
use rand::Rng;

/// Shuffle a slice in place, producing a uniformly random permutation.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut remaining = items.len();

    while remaining != 0 {
        let pick = rng.gen_range(0..remaining);
        remaining -= 1;
        items.swap(remaining, pick);
    }
}

/// Build a shuffled display order from the card IDs of a deck.
pub fn shuffle_order<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<String> {
    let mut ids: Vec<String> = cards.iter().map(|card| card.id.clone()).collect();
    fisher_yates(&mut ids, rng);
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardData;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn deck(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| {
                Card::from(CardData::new(
                    format!("card-{i}"),
                    format!("Q{i}"),
                    format!("A{i}"),
                ))
            })
            .collect()
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..25 {
            let cards = deck(n);
            let mut order = shuffle_order(&cards, &mut rng);
            assert_eq!(order.len(), n);

            order.sort();
            let mut expected: Vec<String> = cards.iter().map(|c| c.id.clone()).collect();
            expected.sort();
            assert_eq!(order, expected);
        }
    }

    #[test]
    fn empty_deck_gives_empty_order() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffle_order(&[], &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_order() {
        let cards = deck(10);
        let a = shuffle_order(&cards, &mut StdRng::seed_from_u64(7));
        let b = shuffle_order(&cards, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn every_permutation_is_reachable() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

        for _ in 0..6000 {
            let mut items = [1u8, 2, 3];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items.to_vec()).or_default() += 1;
        }

        // 3! permutations, each expected ~1000 times
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!(*count > 800 && *count < 1200, "skewed count {count}");
        }
    }
}
