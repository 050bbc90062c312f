use serde::Serialize;

use crate::Difficulty;

/// Reference total used to turn a final score into a percentage.
///
/// Not a cap: an exact hit scores `num_attempts + 1` steps, so a perfect game
/// ends above 100%.
#[must_use]
pub fn max_possible_points(question_count: usize, num_attempts: u32, difficulty: Difficulty) -> u64 {
    question_count as u64 * u64::from(num_attempts) * difficulty.multiplier()
}

/// Renders a points banner label.
///
/// ```
/// use geotrivia_engine::format_points;
///
/// assert_eq!(format_points(1), "1 point");
/// assert_eq!(format_points(250), "250 points");
/// ```
#[must_use]
pub fn format_points(points: u64) -> String {
    if points == 1 {
        "1 point".to_owned()
    } else {
        format!("{points} points")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    NeedsImprovement,
    Solid,
    Expert,
}

impl PerformanceTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 30.0 {
            Self::NeedsImprovement
        } else if percentage <= 80.0 {
            Self::Solid
        } else {
            Self::Expert
        }
    }
}

/// Final result of a game, fixed once the last question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameSummary {
    pub points: u64,
    pub max_points: u64,
    pub percentage: f64,
    pub tier: PerformanceTier,
}

impl GameSummary {
    #[must_use]
    pub fn new(points: u64, max_points: u64) -> Self {
        #[expect(clippy::cast_precision_loss)]
        let percentage = if max_points == 0 {
            0.0
        } else {
            points as f64 / max_points as f64 * 100.0
        };
        Self {
            points,
            max_points,
            percentage,
            tier: PerformanceTier::from_percentage(percentage),
        }
    }

    /// The end-of-game message shown to the player.
    #[must_use]
    pub fn message(&self) -> String {
        let Self {
            points, percentage, ..
        } = self;
        match self.tier {
            PerformanceTier::NeedsImprovement => format!(
                "You finished with {points} Points. The world is a big place, keep exploring and try again!"
            ),
            PerformanceTier::Solid => format!(
                "Nice work! You finished with {points} Points, {percentage:.1}% of the maximum score."
            ),
            PerformanceTier::Expert => format!(
                "Outstanding! You finished with {points} Points, {percentage:.1}% of the maximum score. You really know your way around the globe!"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_possible_points() {
        assert_eq!(max_possible_points(2, 3, Difficulty::Easy), 600);
        assert_eq!(max_possible_points(10, 3, Difficulty::Hard), 15_000);
    }

    #[test]
    fn test_tier_boundaries() {
        assert!(PerformanceTier::from_percentage(0.0).is_needs_improvement());
        assert!(PerformanceTier::from_percentage(30.0).is_needs_improvement());
        assert!(PerformanceTier::from_percentage(30.1).is_solid());
        assert!(PerformanceTier::from_percentage(80.0).is_solid());
        assert!(PerformanceTier::from_percentage(80.1).is_expert());
        assert!(PerformanceTier::from_percentage(133.3).is_expert());
    }

    #[test]
    fn test_solid_message_reports_points_and_percentage() {
        let summary = GameSummary::new(400, 600);
        assert_eq!(summary.tier, PerformanceTier::Solid);

        let message = summary.message();
        assert!(message.contains("400 Points"), "{message}");
        assert!(message.contains("66.7%"), "{message}");
    }

    #[test]
    fn test_low_score_message_omits_percentage() {
        let message = GameSummary::new(100, 600).message();
        assert!(message.contains("100 Points"), "{message}");
        assert!(!message.contains('%'), "{message}");
    }

    #[test]
    fn test_expert_message() {
        let summary = GameSummary::new(800, 600);
        assert!(summary.tier.is_expert());
        assert!(summary.message().contains("133.3%"));
    }
}
