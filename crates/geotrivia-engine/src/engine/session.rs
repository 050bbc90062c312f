use std::sync::Arc;

use geotrivia_geometry::{GeometryProvider, geo::Point};
use serde::Serialize;

use crate::{
    Catalog, ConfigError, Difficulty, EvaluationResult, EvaluatorConfig, Feedback, GameSummary,
    InvalidStateTransitionError, Question, QuestionPrompt, SessionError, evaluate,
    max_possible_points,
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    #[display("choosing difficulty")]
    ChoosingDifficulty,
    #[display("playing")]
    Playing,
    #[display("answer submitted")]
    AnswerSubmitted,
    #[display("game over")]
    GameOver,
}

/// Commands a [`GameSession`] accepts, used to report rejected calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum SessionOperation {
    #[display("set difficulty")]
    SetDifficulty,
    #[display("start game")]
    StartGame,
    #[display("submit guess")]
    SubmitGuess,
    #[display("advance to next question")]
    NextQuestion,
}

/// One play-through of a question catalog.
///
/// The session is the only thing that changes mode or score; callers feed it
/// commands and read its state back. It is not synchronized: the owner must
/// serialize calls if it is shared between threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use geotrivia_engine::{Catalog, Difficulty, GameMode, GameSession, RawQuestionRecord};
/// use geotrivia_geometry::{
///     PlanarGeometryProvider,
///     geo::{Geometry, Point, Rect},
/// };
///
/// let records = vec![
///     RawQuestionRecord::new("Q1", "A1", Geometry::Rect(Rect::new((0.0, 0.0), (2.0, 2.0)))),
///     RawQuestionRecord::new("Q2", "A2", Geometry::Rect(Rect::new((8.0, 8.0), (9.0, 9.0)))),
/// ];
/// let catalog = Arc::new(Catalog::load(records, &PlanarGeometryProvider).unwrap());
/// let mut session = GameSession::new(catalog, PlanarGeometryProvider);
///
/// session.set_difficulty(Difficulty::Easy).unwrap();
/// session.start_game().unwrap();
/// assert_eq!(session.current_question().unwrap().text, "Q1");
///
/// session.submit_guess(Point::new(1.0, 1.0)).unwrap();
/// assert_eq!(session.mode(), GameMode::AnswerSubmitted);
/// assert!(session.feedback().unwrap().is_correct);
///
/// session.next_question().unwrap();
/// assert_eq!(session.current_index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<P> {
    catalog: Arc<Catalog>,
    provider: P,
    config: EvaluatorConfig,
    mode: GameMode,
    difficulty: Difficulty,
    points: u64,
    current_index: usize,
    max_points: Option<u64>,
    last_evaluation: Option<EvaluationResult>,
    feedback: Option<Feedback>,
    summary: Option<GameSummary>,
}

impl<P> GameSession<P>
where
    P: GeometryProvider,
{
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, provider: P) -> Self {
        Self {
            catalog,
            provider,
            config: EvaluatorConfig::default(),
            mode: GameMode::ChoosingDifficulty,
            difficulty: Difficulty::default(),
            points: 0,
            current_index: 0,
            max_points: None,
            last_evaluation: None,
            feedback: None,
            summary: None,
        }
    }

    pub fn with_config(
        catalog: Arc<Catalog>,
        provider: P,
        config: EvaluatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(catalog, provider)
        })
    }

    fn ensure_mode(
        &self,
        expected: GameMode,
        operation: SessionOperation,
    ) -> Result<(), InvalidStateTransitionError> {
        if self.mode != expected {
            tracing::debug!(%operation, mode = %self.mode, "rejected session command");
            return Err(InvalidStateTransitionError {
                operation,
                mode: self.mode,
            });
        }
        Ok(())
    }

    fn set_mode(&mut self, mode: GameMode) {
        tracing::debug!(
            from = %self.mode,
            to = %mode,
            index = self.current_index,
            "game mode changed"
        );
        self.mode = mode;
    }

    /// Chooses the point multiplier. Only allowed before the game starts.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        self.ensure_mode(GameMode::ChoosingDifficulty, SessionOperation::SetDifficulty)?;
        self.difficulty = difficulty;
        Ok(())
    }

    /// Starts playing with the difficulty chosen so far.
    ///
    /// The reference total for the end-of-game percentage is fixed here.
    pub fn start_game(&mut self) -> Result<(), SessionError> {
        self.ensure_mode(GameMode::ChoosingDifficulty, SessionOperation::StartGame)?;
        self.max_points = Some(max_possible_points(
            self.catalog.count(),
            self.config.num_attempts,
            self.difficulty,
        ));
        tracing::info!(
            difficulty = %self.difficulty,
            questions = self.catalog.count(),
            "game started"
        );
        self.set_mode(GameMode::Playing);
        Ok(())
    }

    /// Judges a guess for the current question and adds its score.
    ///
    /// On a geometry failure nothing changes and the session stays in
    /// [`GameMode::Playing`], so the player can guess again.
    pub fn submit_guess(&mut self, guess: Point) -> Result<&EvaluationResult, SessionError> {
        self.ensure_mode(GameMode::Playing, SessionOperation::SubmitGuess)?;
        let question = self.catalog.at(self.current_index)?;
        let result = evaluate(
            &self.provider,
            question.geometry(),
            guess,
            self.difficulty,
            &self.config,
        )?;

        self.feedback = Some(Feedback::new(&result, question));
        self.points += result.score_delta;
        self.set_mode(GameMode::AnswerSubmitted);
        Ok(self.last_evaluation.insert(result))
    }

    /// Moves past the answered question, ending the game after the last one.
    pub fn next_question(&mut self) -> Result<(), SessionError> {
        self.ensure_mode(GameMode::AnswerSubmitted, SessionOperation::NextQuestion)?;
        self.last_evaluation = None;
        self.feedback = None;
        self.current_index += 1;

        if self.current_index < self.catalog.count() {
            self.set_mode(GameMode::Playing);
            return Ok(());
        }

        let max_points = self.max_points.unwrap_or_else(|| {
            max_possible_points(self.catalog.count(), self.config.num_attempts, self.difficulty)
        });
        let summary = GameSummary::new(self.points, max_points);
        tracing::info!(
            points = summary.points,
            percentage = summary.percentage,
            "game over"
        );
        self.summary = Some(summary);
        self.set_mode(GameMode::GameOver);
        Ok(())
    }
}

impl<P> GameSession<P> {
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn points(&self) -> u64 {
        self.points
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.catalog.count()
    }

    /// The question being asked, `None` once the game is over.
    ///
    /// The geometry is withheld; it is revealed through
    /// [`Self::last_evaluation`] once a guess has been submitted.
    #[must_use]
    pub fn current_question(&self) -> Option<QuestionPrompt> {
        self.catalog
            .at(self.current_index)
            .ok()
            .map(Question::prompt)
    }

    #[must_use]
    pub fn last_evaluation(&self) -> Option<&EvaluationResult> {
        self.last_evaluation.as_ref()
    }

    #[must_use]
    pub fn is_last_evaluation_correct(&self) -> Option<bool> {
        self.last_evaluation.as_ref().map(|r| r.is_correct)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Reference total for the end-of-game percentage, fixed at game start.
    #[must_use]
    pub fn max_possible_points(&self) -> Option<u64> {
        self.max_points
    }

    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn end_of_game_message(&self) -> Option<String> {
        self.summary.as_ref().map(GameSummary::message)
    }
}
