use serde::Serialize;

use crate::{Difficulty, Feedback, GameMode, GameSession, QuestionPrompt};

/// Everything a presentation layer may observe about a session.
///
/// Take one after each command and compare it with the previous one through
/// [`Self::changes_since`] to learn what needs redrawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub points: u64,
    pub current_question: Option<QuestionPrompt>,
    pub current_index: usize,
    pub question_count: usize,
    pub is_last_evaluation_correct: Option<bool>,
    pub feedback: Option<Feedback>,
    pub end_of_game_message: Option<String>,
}

/// An observable property of a [`SessionSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum SessionField {
    #[display("mode")]
    Mode,
    #[display("difficulty")]
    Difficulty,
    #[display("points")]
    Points,
    #[display("current_question")]
    CurrentQuestion,
    #[display("current_index")]
    CurrentIndex,
    #[display("is_last_evaluation_correct")]
    IsLastEvaluationCorrect,
    #[display("feedback")]
    Feedback,
    #[display("end_of_game_message")]
    EndOfGameMessage,
}

impl SessionSnapshot {
    /// Fields whose value differs from `previous`, in declaration order.
    #[must_use]
    pub fn changes_since(&self, previous: &Self) -> Vec<SessionField> {
        let checks = [
            (SessionField::Mode, self.mode != previous.mode),
            (SessionField::Difficulty, self.difficulty != previous.difficulty),
            (SessionField::Points, self.points != previous.points),
            (
                SessionField::CurrentQuestion,
                self.current_question != previous.current_question,
            ),
            (
                SessionField::CurrentIndex,
                self.current_index != previous.current_index,
            ),
            (
                SessionField::IsLastEvaluationCorrect,
                self.is_last_evaluation_correct != previous.is_last_evaluation_correct,
            ),
            (SessionField::Feedback, self.feedback != previous.feedback),
            (
                SessionField::EndOfGameMessage,
                self.end_of_game_message != previous.end_of_game_message,
            ),
        ];
        checks
            .into_iter()
            .filter_map(|(field, changed)| changed.then_some(field))
            .collect()
    }
}

impl<P> GameSession<P> {
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode(),
            difficulty: self.difficulty(),
            points: self.points(),
            current_question: self.current_question(),
            current_index: self.current_index(),
            question_count: self.question_count(),
            is_last_evaluation_correct: self.is_last_evaluation_correct(),
            feedback: self.feedback().cloned(),
            end_of_game_message: self.end_of_game_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geotrivia_geometry::{
        PlanarGeometryProvider,
        geo::{Geometry, Rect, point},
    };

    use super::*;
    use crate::{Catalog, RawQuestionRecord};

    fn session() -> GameSession<PlanarGeometryProvider> {
        let records = vec![RawQuestionRecord::new(
            "Where is the square?",
            "The Square",
            Geometry::Rect(Rect::new((0.0, 0.0), (4.0, 4.0))),
        )];
        let catalog = Catalog::load(records, &PlanarGeometryProvider).unwrap();
        GameSession::new(Arc::new(catalog), PlanarGeometryProvider)
    }

    #[test]
    fn test_no_changes() {
        let session = session();
        assert!(session.snapshot().changes_since(&session.snapshot()).is_empty());
    }

    #[test]
    fn test_changes_through_a_game() {
        let mut session = session();
        let initial = session.snapshot();
        assert_eq!(initial.mode, GameMode::ChoosingDifficulty);
        assert_eq!(initial.question_count, 1);
        assert_eq!(
            initial.current_question.as_ref().map(|q| q.text.as_str()),
            Some("Where is the square?")
        );

        session.set_difficulty(Difficulty::Hard).unwrap();
        let chosen = session.snapshot();
        assert_eq!(chosen.changes_since(&initial), [SessionField::Difficulty]);

        session.start_game().unwrap();
        let playing = session.snapshot();
        assert_eq!(playing.changes_since(&chosen), [SessionField::Mode]);

        session.submit_guess(point!(x: 2.0, y: 2.0)).unwrap();
        let answered = session.snapshot();
        assert_eq!(
            answered.changes_since(&playing),
            [
                SessionField::Mode,
                SessionField::Points,
                SessionField::IsLastEvaluationCorrect,
                SessionField::Feedback,
            ]
        );

        session.next_question().unwrap();
        let over = session.snapshot();
        assert_eq!(
            over.changes_since(&answered),
            [
                SessionField::Mode,
                SessionField::CurrentQuestion,
                SessionField::CurrentIndex,
                SessionField::IsLastEvaluationCorrect,
                SessionField::Feedback,
                SessionField::EndOfGameMessage,
            ]
        );
        assert_eq!(over.current_question, None);
    }

    #[test]
    fn test_rejected_command_changes_nothing() {
        let mut session = session();
        let before = session.snapshot();
        assert!(session.next_question().is_err());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_serializes_for_the_shell() {
        let value = serde_json::to_value(session().snapshot()).unwrap();
        assert_eq!(value["mode"], "choosing_difficulty");
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["points"], 0);
        assert_eq!(value["current_question"]["answer_label"], "The Square");
        assert!(value["feedback"].is_null());
    }
}
