//! Game configuration
//!
//! Defaults come from [`crate::consts`]. A page can override any field by
//! embedding `<script id="game-config" type="application/json">` with a
//! partial JSON object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("at least one planet size is required")]
    NoSizes,
    #[error("planet size {0} appears more than once")]
    DuplicateSize(u32),
    #[error("planet sizes must be greater than zero")]
    ZeroSize,
    #[error("{colors} colours cannot cover {sizes} planet sizes")]
    NotEnoughColors { sizes: usize, colors: usize },
    #[error("score_to_win must be at least 1")]
    ZeroWinThreshold,
    #[error("next_game_url must not be empty")]
    MissingNextGameUrl,
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Planet diameters in pixels; unique within a round
    pub sizes: Vec<u32>,
    /// CSS colours, shuffled and paired with sizes each round
    pub colors: Vec<String>,
    /// Correct guesses needed to win
    pub score_to_win: u32,
    pub next_round_delay_ms: u32,
    pub retry_delay_ms: u32,
    pub start_delay_ms: u32,
    /// Win handoff destination
    pub next_game_url: String,
    pub next_game_label: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sizes: PLANET_SIZES.to_vec(),
            colors: PLANET_COLORS.iter().map(|c| c.to_string()).collect(),
            score_to_win: SCORE_TO_WIN,
            next_round_delay_ms: NEXT_ROUND_DELAY_MS,
            retry_delay_ms: RETRY_DELAY_MS,
            start_delay_ms: START_DELAY_MS,
            next_game_url: NEXT_GAME_URL.to_string(),
            next_game_label: NEXT_GAME_LABEL.to_string(),
        }
    }
}

impl GameConfig {
    /// Element holding an optional JSON override (used only in wasm32)
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "game-config";

    /// Parse and validate a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants round generation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        for (i, size) in self.sizes.iter().enumerate() {
            if self.sizes[i + 1..].contains(size) {
                return Err(ConfigError::DuplicateSize(*size));
            }
        }
        if self.sizes.contains(&0) {
            return Err(ConfigError::ZeroSize);
        }
        if self.colors.len() < self.sizes.len() {
            return Err(ConfigError::NotEnoughColors {
                sizes: self.sizes.len(),
                colors: self.colors.len(),
            });
        }
        if self.score_to_win == 0 {
            return Err(ConfigError::ZeroWinThreshold);
        }
        if self.next_game_url.trim().is_empty() {
            return Err(ConfigError::MissingNextGameUrl);
        }
        Ok(())
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded game config from page");
                    return config;
                }
                Err(e) => log::warn!("Ignoring page config: {}", e),
            }
        }

        log::info!("Using default game config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
