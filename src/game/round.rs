//! Round generation
//!
//! A round pairs every configured size with a colour, both independently
//! shuffled, then shuffles the pairs again for display. Colour and screen
//! position therefore carry no signal about size.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::resolve::resolve;
use super::shape::{Goal, Shape};
use crate::config::GameConfig;

/// One goal plus the planets on screen, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Monotonic per controller; timers carry it to detect staleness
    pub id: u64,
    pub goal: Goal,
    pub shapes: Vec<Shape>,
}

impl Round {
    /// Whether a planet with this size tag is on screen
    pub fn contains(&self, size: u32) -> bool {
        self.shapes.iter().any(|s| s.size == size)
    }

    /// The planet the player has to click
    pub fn correct_shape(&self) -> &Shape {
        resolve(self)
    }
}

/// Return a uniformly shuffled copy (Fisher-Yates)
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Build a fresh round from a validated config
pub fn generate_round<R: Rng>(id: u64, config: &GameConfig, rng: &mut R) -> Round {
    let goal = Goal::random(rng);

    let sizes = shuffled(&config.sizes, rng);
    let colors = shuffled(&config.colors, rng);
    let mut shapes: Vec<Shape> = sizes
        .into_iter()
        .zip(colors)
        .map(|(size, color)| Shape { size, color })
        .collect();

    // Independent permutation for display order
    shapes.shuffle(rng);

    log::debug!(
        "Round {} generated: goal={} sizes={:?}",
        id,
        goal,
        shapes.iter().map(|s| s.size).collect::<Vec<_>>()
    );

    Round { id, goal, shapes }
}
