//! Questions and where they come from.
//!
//! - [`Difficulty`] - Point multiplier chosen before a game starts
//! - [`Question`] - One prompt with its answer label and true geometry
//! - [`Catalog`] - Ordered, immutable set of questions for a game
//! - [`QuestionSource`] - Asynchronous supplier of raw question records
//!
//! A catalog only exists once every record has been fetched and validated;
//! [`Catalog::fetch`] never exposes a partially loaded set.

pub use self::{catalog::*, difficulty::*, question::*, source::*};

mod catalog;
mod difficulty;
mod question;
mod source;
