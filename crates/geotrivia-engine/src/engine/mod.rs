//! Answer evaluation, scoring and the game state machine.
//!
//! - [`evaluate`] - Judges a guess against a question's geometry
//! - [`EvaluatorConfig`] - Tunable constants of the evaluation algorithm
//! - [`GameSummary`] - End-of-game percentage and message
//! - [`GameSession`] - Drives a game from difficulty selection to game over
//! - [`SessionSnapshot`] - Observable state for the presentation layer
//!
//! # Game Flow
//!
//! ```text
//! ChoosingDifficulty --start_game--> Playing --submit_guess--> AnswerSubmitted
//!                                       ^                            |
//!                                       +-------next_question--------+
//!                                                                    |
//!                                            GameOver <--(no more)---+
//! ```
//!
//! Every command checks the current [`GameMode`] first and fails with
//! [`InvalidStateTransitionError`](crate::InvalidStateTransitionError) without
//! touching any state when called at the wrong time.

pub use self::{config::*, evaluator::*, scoring::*, session::*, snapshot::*};

mod config;
mod evaluator;
mod scoring;
mod session;
mod snapshot;
