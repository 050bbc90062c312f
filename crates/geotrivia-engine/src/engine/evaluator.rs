//! Progressive buffer evaluation of a guess.
//!
//! A guess is tried against the true shape grown by increasingly large
//! tolerances:
//!
//! ```text
//! ring(attempt) = buffer(shape, min_dimension * buffer_fraction * attempt)
//! tier          = first attempt whose ring contains the guess
//! score_delta   = multiplier * (num_attempts + 1 - tier)
//! ```
//!
//! `min_dimension` is the smaller side of the shape's extent, so tolerances
//! scale with the size of the place being asked about. Attempt 0 is the exact
//! shape. With the default three attempts an exact hit scores four times the
//! multiplier and the loosest accepted ring scores twice the multiplier.
//!
//! A guess outside every ring scores nothing; the result then carries the
//! geodesic distance from the guess to the center of the shape's extent and a
//! line joining the two for display.

use geotrivia_geometry::{
    GeometryError, GeometryProvider, LinearUnit,
    geo::{Geometry, Point},
};
use serde::Serialize;

use crate::{Difficulty, EvaluatorConfig, Question};

/// Rings shown after a hit, whatever tier it landed in.
const MIN_HIGHLIGHT_TIER: u32 = 2;

/// Outcome of judging one guess.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub is_correct: bool,
    /// Accepted tolerance ring, `None` on a miss.
    pub tier: Option<u32>,
    pub score_delta: u64,
    /// Zero when the guess is correct.
    pub distance_error_km: f64,
    pub guess_point: Point,
    /// Tolerance rings (on a hit) or a small halo (on a miss), followed by the
    /// unmodified true shape.
    pub highlight_geometries: Vec<Geometry>,
    /// Line from the guess to the answer, only on a miss.
    pub connecting_line: Option<Geometry>,
    /// Area the map should frame to show the result.
    pub zoom_target: Geometry,
}

/// What the player is told after submitting a guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub distance_km: f64,
    pub correct_answer_label: String,
    pub fun_fact: String,
}

impl Feedback {
    #[must_use]
    pub fn new(result: &EvaluationResult, question: &Question) -> Self {
        Self {
            is_correct: result.is_correct,
            distance_km: result.distance_error_km,
            correct_answer_label: question.answer_label().to_owned(),
            fun_fact: question.fun_fact().to_owned(),
        }
    }
}

/// Points for a hit in `tier`.
#[must_use]
pub fn tier_score(difficulty: Difficulty, tier: u32, num_attempts: u32) -> u64 {
    let steps = num_attempts.saturating_add(1).saturating_sub(tier);
    difficulty.multiplier() * u64::from(steps)
}

/// Judges `guess` against `true_geometry`.
///
/// The guess must already be in the same frame as the geometry. Any provider
/// failure aborts the evaluation.
pub fn evaluate<P>(
    provider: &P,
    true_geometry: &Geometry,
    guess: Point,
    difficulty: Difficulty,
    config: &EvaluatorConfig,
) -> Result<EvaluationResult, GeometryError>
where
    P: GeometryProvider + ?Sized,
{
    let extent = provider.extent(true_geometry)?;
    let min_dimension = extent.min_dimension();
    let step = min_dimension * config.buffer_fraction;
    let ring = |attempt: u32| provider.buffer(true_geometry, step * f64::from(attempt));

    // A shape without area has nothing to grow from; only an exact hit counts.
    let attempts = if min_dimension > 0.0 {
        config.num_attempts
    } else {
        1
    };

    let mut rings = Vec::with_capacity(MIN_HIGHLIGHT_TIER as usize + 1);
    let mut tier = None;
    for attempt in 0..attempts {
        let shape = ring(attempt)?;
        let hit = provider.contains(&shape, guess)?;
        rings.push(shape);
        if hit {
            tier = Some(attempt);
            break;
        }
    }

    let mut result = match tier {
        Some(tier) => {
            for attempt in (tier + 1)..=tier.max(MIN_HIGHLIGHT_TIER) {
                rings.push(ring(attempt)?);
            }
            EvaluationResult {
                is_correct: true,
                tier: Some(tier),
                score_delta: tier_score(difficulty, tier, config.num_attempts),
                distance_error_km: 0.0,
                guess_point: guess,
                highlight_geometries: rings,
                connecting_line: None,
                zoom_target: provider.buffer(true_geometry, extent.width)?,
            }
        }
        None => {
            let line = provider.build_line(guess, extent.center);
            let distance_error_km =
                provider.geodesic_distance(guess, extent.center, LinearUnit::Kilometers)?;
            let line_extent = provider.extent(&line)?;
            let halo =
                provider.buffer(true_geometry, min_dimension * config.miss_highlight_fraction)?;
            EvaluationResult {
                is_correct: false,
                tier: None,
                score_delta: 0,
                distance_error_km,
                guess_point: guess,
                highlight_geometries: vec![halo],
                zoom_target: provider.buffer(&line, line_extent.width / 4.0)?,
                connecting_line: Some(line),
            }
        }
    };

    result.highlight_geometries.push(true_geometry.clone());

    tracing::debug!(
        is_correct = result.is_correct,
        tier = ?result.tier,
        score_delta = result.score_delta,
        distance_error_km = result.distance_error_km,
        "guess evaluated"
    );
    Ok(result)
}
