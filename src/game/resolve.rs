//! Correct-planet lookup

use super::round::Round;
use super::shape::{Goal, Shape};

/// Return the planet matching the round's goal.
///
/// Left fold from the first planet: a later planet only replaces the
/// candidate when strictly bigger (or smaller). Sizes are unique, so the
/// answer is unique too.
///
/// # Panics
/// On a round without planets, which only a broken generator can produce.
pub fn resolve(round: &Round) -> &Shape {
    assert!(
        !round.shapes.is_empty(),
        "round {} has no planets to resolve",
        round.id
    );

    let (first, rest) = round.shapes.split_at(1);
    rest.iter().fold(&first[0], |best, shape| {
        let better = match round.goal {
            Goal::Largest => shape.size > best.size,
            Goal::Smallest => shape.size < best.size,
        };
        if better { shape } else { best }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn round_of(goal: Goal, sizes: &[u32]) -> Round {
        Round {
            id: 1,
            goal,
            shapes: sizes.iter().map(|&s| Shape::new(s, "#FFFFFF")).collect(),
        }
    }

    #[test]
    fn test_largest_regardless_of_order() {
        let round = round_of(Goal::Largest, &[160, 80, 120]);
        assert_eq!(resolve(&round).size, 160);
    }

    #[test]
    fn test_every_permutation() {
        let perms: [[u32; 3]; 6] = [
            [80, 120, 160],
            [80, 160, 120],
            [120, 80, 160],
            [120, 160, 80],
            [160, 80, 120],
            [160, 120, 80],
        ];
        for sizes in perms {
            assert_eq!(resolve(&round_of(Goal::Largest, &sizes)).size, 160);
            assert_eq!(resolve(&round_of(Goal::Smallest, &sizes)).size, 80);
        }
    }

    #[test]
    fn test_single_planet() {
        let round = round_of(Goal::Smallest, &[120]);
        assert_eq!(resolve(&round).size, 120);
    }

    #[test]
    fn test_idempotent() {
        let round = round_of(Goal::Smallest, &[120, 160, 80]);
        let first = resolve(&round).clone();
        assert_eq!(resolve(&round), &first);
        assert_eq!(round.correct_shape(), &first);
    }

    #[test]
    #[should_panic(expected = "no planets")]
    fn test_empty_round_panics() {
        resolve(&round_of(Goal::Largest, &[]));
    }

    proptest! {
        #[test]
        fn prop_matches_min_max(sizes in prop::collection::hash_set(1u32..10_000, 1..10)) {
            let sizes: Vec<u32> = sizes.into_iter().collect();
            let max = *sizes.iter().max().unwrap();
            let min = *sizes.iter().min().unwrap();
            prop_assert_eq!(resolve(&round_of(Goal::Largest, &sizes)).size, max);
            prop_assert_eq!(resolve(&round_of(Goal::Smallest, &sizes)).size, min);
        }
    }
}
