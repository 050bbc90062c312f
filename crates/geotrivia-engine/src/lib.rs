//! Game session engine for a map-based geography trivia game.
//!
//! The player is shown a question about a place, picks a point on a map, and
//! earns points depending on how close the guess lands to the true shape.
//!
//! - [`core`] - Questions, difficulty levels, the question catalog and its sources
//! - [`engine`] - Answer evaluation, scoring and the [`GameSession`] state machine
//!
//! Geometric work is delegated to a [`GeometryProvider`]; see the
//! `geotrivia-geometry` crate.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use geotrivia_engine::{Catalog, Difficulty, GameMode, GameSession, RawQuestionRecord};
//! use geotrivia_geometry::{
//!     PlanarGeometryProvider,
//!     geo::{Geometry, Point, Rect},
//! };
//!
//! let records = vec![RawQuestionRecord::new(
//!     "Where is the square?",
//!     "The Square",
//!     Geometry::Rect(Rect::new((0.0, 0.0), (4.0, 4.0))),
//! )];
//! let catalog = Catalog::load(records, &PlanarGeometryProvider).unwrap();
//!
//! let mut session = GameSession::new(Arc::new(catalog), PlanarGeometryProvider);
//! session.set_difficulty(Difficulty::Medium).unwrap();
//! session.start_game().unwrap();
//!
//! session.submit_guess(Point::new(2.0, 2.0)).unwrap();
//! assert_eq!(session.points(), 1000);
//!
//! session.next_question().unwrap();
//! assert_eq!(session.mode(), GameMode::GameOver);
//! ```

pub use geotrivia_geometry::{GeometryError, GeometryProvider};

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("question index {index} is out of range for a catalog of {count} questions")]
pub struct IndexOutOfRangeError {
    pub index: usize,
    pub count: usize,
}

/// Why a raw record could not become a question.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum MalformedReason {
    #[display("missing question text")]
    MissingQuestionText,
    #[display("missing answer label")]
    MissingAnswerLabel,
    #[display("missing geometry")]
    MissingGeometry,
    #[display("geometry could not be reprojected: {_0}")]
    Reprojection(GeometryError),
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
#[display("record {index} skipped: {reason}")]
pub struct MalformedRecordError {
    pub index: usize,
    #[error(not(source))]
    pub reason: MalformedReason,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CatalogError {
    #[display("no valid questions in catalog ({} records skipped)", skipped.len())]
    #[from(ignore)]
    Empty {
        #[error(not(source))]
        skipped: Vec<MalformedRecordError>,
    },
    #[display("failed to fetch question records")]
    Source(SourceError),
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SourceError {
    #[display("failed to read question file")]
    Io(std::io::Error),
    #[display("failed to parse GeoJSON")]
    GeoJson(geojson::Error),
    #[display("expected a GeoJSON feature collection")]
    #[from(ignore)]
    NotAFeatureCollection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot {operation} while {mode}")]
pub struct InvalidStateTransitionError {
    pub operation: SessionOperation,
    pub mode: GameMode,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    #[display("{_0}")]
    InvalidStateTransition(InvalidStateTransitionError),
    #[display("{_0}")]
    IndexOutOfRange(IndexOutOfRangeError),
    #[display("answer evaluation failed")]
    Geometry(GeometryError),
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("num_attempts must be at least 1")]
    NoAttempts,
    #[display("num_attempts must be at most {max}, got {num_attempts}")]
    TooManyAttempts { num_attempts: u32, max: u32 },
    #[display("{field} must be finite and non-negative, got {value}")]
    InvalidFraction { field: &'static str, value: f64 },
}
