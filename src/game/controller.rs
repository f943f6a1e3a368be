//! Round controller
//!
//! Owns the session, the current round and the evaluation phase. Input
//! (clicks, elapsed timers) goes in, an ordered list of `GameEvent`s comes
//! out. The controller never schedules anything itself: a `Schedule` event
//! asks the front end to call [`RoundController::timer_elapsed`] later.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::messages;
use super::round::{Round, generate_round};
use super::session::Session;
use crate::config::{ConfigError, GameConfig};

/// Where the guess evaluator currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalPhase {
    /// Before the first round exists
    Starting,
    /// Planets are clickable
    AwaitingGuess,
    /// A guess is being shown; input is locked until a timer fires
    Evaluating,
    /// Threshold reached, only the handoff remains
    Won,
}

/// What a pending timer will do when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Initial pause before the first round
    StartGame,
    /// Pause after a correct guess
    NextRound,
    /// Pause after a wrong guess
    Retry,
}

/// A fire-once timer, bound to the round that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub kind: TimerKind,
    pub round_id: u64,
}

/// Side effects for the front end, applied in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Replace the displayed planets with this round's
    RoundStarted(Round),
    /// Status line text
    Message(String),
    /// Score display text
    Score(String),
    /// Enable or disable clicking on every planet
    SetInteractive(bool),
    /// Highlight the planet with this size tag
    MarkCorrect(u32),
    /// Remove the highlight from the planet with this size tag
    UnmarkCorrect(u32),
    /// Call `timer_elapsed(timer)` after `delay_ms`
    Schedule { timer: Timer, delay_ms: u32 },
    /// Clear the planets and offer a button to the next game
    WinHandoff { label: String, url: String },
}

/// Single owner of all game state
#[derive(Debug, Clone)]
pub struct RoundController {
    config: GameConfig,
    rng: Pcg32,
    session: Session,
    round: Option<Round>,
    phase: EvalPhase,
    /// Id of the current round; 0 means no round yet
    round_id: u64,
}

impl RoundController {
    /// Create a controller, rejecting configs that cannot produce a full round
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = Session::new(config.score_to_win);
        Ok(Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            session,
            round: None,
            phase: EvalPhase::Starting,
            round_id: 0,
        })
    }

    pub fn phase(&self) -> EvalPhase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Handoff destination, once the game is won
    pub fn next_game_url(&self) -> Option<&str> {
        (self.phase == EvalPhase::Won).then_some(self.config.next_game_url.as_str())
    }

    /// Kick off the game: show the score and schedule the first round
    pub fn begin(&mut self) -> Vec<GameEvent> {
        if self.phase != EvalPhase::Starting {
            return Vec::new();
        }
        vec![
            GameEvent::Score(self.session.score_text()),
            GameEvent::Schedule {
                timer: Timer {
                    kind: TimerKind::StartGame,
                    round_id: self.round_id,
                },
                delay_ms: self.config.start_delay_ms,
            },
        ]
    }

    /// Replace any previous round with a fresh one and accept guesses.
    ///
    /// Timers scheduled for the previous round become stale.
    pub fn start_round(&mut self) -> Vec<GameEvent> {
        if self.phase == EvalPhase::Won {
            log::warn!("start_round after win ignored");
            return Vec::new();
        }

        self.round_id += 1;
        let round = generate_round(self.round_id, &self.config, &mut self.rng);
        let goal = round.goal;
        log::info!("Round {} started, goal {}", round.id, goal);

        self.round = Some(round.clone());
        self.phase = EvalPhase::AwaitingGuess;

        vec![
            GameEvent::RoundStarted(round),
            GameEvent::Message(messages::goal_prompt(goal)),
            GameEvent::SetInteractive(true),
        ]
    }

    /// Evaluate a click on the planet tagged `size`.
    ///
    /// Returns no events when there is no round, the evaluator is not
    /// awaiting a guess, or the tag is not on screen.
    pub fn submit_guess(&mut self, size: u32) -> Vec<GameEvent> {
        if self.phase != EvalPhase::AwaitingGuess {
            log::debug!("Guess {} ignored in phase {:?}", size, self.phase);
            return Vec::new();
        }
        let Some(round) = &self.round else {
            log::debug!("Guess {} ignored: no active round", size);
            return Vec::new();
        };
        if !round.contains(size) {
            log::warn!("Guess {} ignored: no such planet in round {}", size, round.id);
            return Vec::new();
        }

        // Lock input before anything else happens
        self.phase = EvalPhase::Evaluating;
        let mut events = vec![GameEvent::SetInteractive(false)];

        let goal = round.goal;
        let correct = round.correct_shape().size;
        let round_id = round.id;

        if size == correct {
            let won = self.session.record_correct();
            log::info!("Correct guess {} (score {})", size, self.session.score);
            events.push(GameEvent::Message(messages::success(goal)));
            events.push(GameEvent::Score(self.session.score_text()));
            events.push(GameEvent::MarkCorrect(size));

            if won {
                self.phase = EvalPhase::Won;
                log::info!("Won with score {}", self.session.score);
                events.push(GameEvent::Message(messages::WIN.to_string()));
                events.push(GameEvent::WinHandoff {
                    label: self.config.next_game_label.clone(),
                    url: self.config.next_game_url.clone(),
                });
                return events;
            }

            events.push(GameEvent::Schedule {
                timer: Timer {
                    kind: TimerKind::NextRound,
                    round_id,
                },
                delay_ms: self.config.next_round_delay_ms,
            });
        } else {
            log::info!("Wrong guess {} (wanted {})", size, correct);
            events.push(GameEvent::Message(messages::retry(goal)));
            events.push(GameEvent::MarkCorrect(correct));
            events.push(GameEvent::Schedule {
                timer: Timer {
                    kind: TimerKind::Retry,
                    round_id,
                },
                delay_ms: self.config.retry_delay_ms,
            });
        }

        events
    }

    /// Handle a timer previously requested through `GameEvent::Schedule`
    pub fn timer_elapsed(&mut self, timer: Timer) -> Vec<GameEvent> {
        if timer.round_id != self.round_id {
            log::debug!(
                "Stale {:?} timer for round {} (current {})",
                timer.kind,
                timer.round_id,
                self.round_id
            );
            return Vec::new();
        }

        match timer.kind {
            TimerKind::StartGame => {
                if self.phase != EvalPhase::Starting {
                    return Vec::new();
                }
                self.start_round()
            }
            TimerKind::NextRound => {
                if self.phase != EvalPhase::Evaluating {
                    return Vec::new();
                }
                self.start_round()
            }
            TimerKind::Retry => {
                if self.phase != EvalPhase::Evaluating {
                    return Vec::new();
                }
                let Some(round) = &self.round else {
                    return Vec::new();
                };
                let correct = round.correct_shape().size;
                self.phase = EvalPhase::AwaitingGuess;
                vec![
                    GameEvent::UnmarkCorrect(correct),
                    GameEvent::SetInteractive(true),
                ]
            }
        }
    }
}
