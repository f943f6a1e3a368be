//! Planets and round goals

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// What the player is asked to find this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    Largest,
    Smallest,
}

impl Goal {
    pub const ALL: [Goal; 2] = [Goal::Largest, Goal::Smallest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Largest => "LARGEST",
            Goal::Smallest => "SMALLEST",
        }
    }

    /// Pick a goal uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clickable planet. Sizes are unique within a round, so the size doubles
/// as the planet's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Diameter in pixels
    pub size: u32,
    /// CSS colour
    pub color: String,
}

impl Shape {
    pub fn new(size: u32, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_goal_display() {
        assert_eq!(Goal::Largest.to_string(), "LARGEST");
        assert_eq!(Goal::Smallest.to_string(), "SMALLEST");
    }

    #[test]
    fn test_random_goal_hits_both() {
        let mut rng = Pcg32::seed_from_u64(7);
        let goals: Vec<Goal> = (0..64).map(|_| Goal::random(&mut rng)).collect();
        assert!(goals.contains(&Goal::Largest));
        assert!(goals.contains(&Goal::Smallest));
    }

    #[test]
    fn test_goal_serde_name() {
        let json = serde_json::to_string(&Goal::Smallest).unwrap();
        assert_eq!(json, "\"SMALLEST\"");
    }
}
