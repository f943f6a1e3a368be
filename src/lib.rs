//! Cosmo Planets - click the largest or smallest planet
//!
//! Core modules:
//! - `game`: Round generation, guess evaluation and win detection (pure, seeded)
//! - `config`: Data-driven game configuration
//! - `ui`: Browser DOM front end (wasm32 only)

pub mod config;
pub mod game;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use game::{EvalPhase, GameEvent, Goal, Round, RoundController, Shape};

/// Game configuration constants
pub mod consts {
    /// Planet diameters in pixels (small, medium, large)
    pub const PLANET_SIZES: [u32; 3] = [80, 120, 160];
    /// Planet colours: red, blue, gold
    pub const PLANET_COLORS: [&str; 3] = ["#FF6347", "#4682B4", "#DAA520"];

    /// Correct guesses needed to win
    pub const SCORE_TO_WIN: u32 = 10;

    /// Pause after a correct guess before the next round (ms)
    pub const NEXT_ROUND_DELAY_MS: u32 = 1500;
    /// Pause after a wrong guess before input comes back (ms)
    pub const RETRY_DELAY_MS: u32 = 1200;
    /// Pause before the very first round (ms)
    pub const START_DELAY_MS: u32 = 500;

    /// Where the win handoff sends the player
    pub const NEXT_GAME_URL: &str = "https://ealimon.github.io/Satellite-Stream/";
    pub const NEXT_GAME_LABEL: &str = "Continue to Game 4 >>";
}
