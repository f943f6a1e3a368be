//! Status line text

use super::shape::Goal;

pub fn goal_prompt(goal: Goal) -> String {
    format!("Click the {goal} planet!")
}

pub fn success(goal: Goal) -> String {
    format!("🪐 Correct! You found the {goal}!")
}

pub fn retry(goal: Goal) -> String {
    format!("Oops! Try again. Cosmo wants the {goal} one.")
}

pub const WIN: &str = "🎉 MISSION COMPLETE! Unlock Game 4: Sequence Satellite Stream!";
