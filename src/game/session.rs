//! Score tracking across rounds

use serde::{Deserialize, Serialize};

/// Score and win threshold for one page lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Correct guesses so far (never decreases)
    pub score: u32,
    pub win_threshold: u32,
}

impl Session {
    pub fn new(win_threshold: u32) -> Self {
        Self {
            score: 0,
            win_threshold,
        }
    }

    /// Count one correct guess. Returns true once the threshold is reached.
    pub fn record_correct(&mut self) -> bool {
        self.score = self.score.saturating_add(1);
        self.has_won()
    }

    pub fn has_won(&self) -> bool {
        self.score >= self.win_threshold
    }

    /// Text for the score display
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wins_exactly_at_threshold() {
        let mut session = Session::new(3);
        assert!(!session.record_correct());
        assert!(!session.record_correct());
        assert!(session.record_correct());
        assert_eq!(session.score, 3);
    }

    #[test]
    fn test_score_text() {
        let mut session = Session::new(10);
        assert_eq!(session.score_text(), "Score: 0");
        session.record_correct();
        assert_eq!(session.score_text(), "Score: 1");
    }
}
