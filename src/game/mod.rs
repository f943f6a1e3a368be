//! Round lifecycle module
//!
//! All gameplay logic lives here. Like a simulation, it is pure and seeded:
//! - No DOM or platform dependencies
//! - Randomness only from the controller's seeded RNG
//! - Side effects are returned as ordered `GameEvent`s for a front end to apply

pub mod controller;
pub mod messages;
pub mod resolve;
pub mod round;
pub mod session;
pub mod shape;

pub use controller::{EvalPhase, GameEvent, RoundController, Timer, TimerKind};
pub use resolve::resolve;
pub use round::{Round, generate_round, shuffled};
pub use session::Session;
pub use shape::{Goal, Shape};
