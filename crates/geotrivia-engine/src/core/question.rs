use geotrivia_geometry::{SpatialReference, geo::Geometry};
use serde::Serialize;

/// A trivia question and the place that answers it.
///
/// The geometry is always in [`SpatialReference::CANONICAL`]; the catalog
/// reprojects it when the question is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    text: String,
    answer_label: String,
    fun_fact: String,
    geometry: Geometry,
}

impl Question {
    pub(crate) fn new(
        text: String,
        answer_label: String,
        fun_fact: String,
        geometry: Geometry,
    ) -> Self {
        Self {
            text,
            answer_label,
            fun_fact,
            geometry,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answer_label(&self) -> &str {
        &self.answer_label
    }

    /// Trivia shown after the answer is revealed. Empty when the source has none.
    #[must_use]
    pub fn fun_fact(&self) -> &str {
        &self.fun_fact
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub const fn spatial_reference(&self) -> SpatialReference {
        SpatialReference::CANONICAL
    }

    /// The parts of the question that may be shown before a guess is made.
    #[must_use]
    pub fn prompt(&self) -> QuestionPrompt {
        QuestionPrompt {
            text: self.text.clone(),
            answer_label: self.answer_label.clone(),
        }
    }
}

/// Question text and answer label, without the geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPrompt {
    pub text: String,
    pub answer_label: String,
}

/// An unvalidated question as delivered by a [`QuestionSource`](crate::QuestionSource).
///
/// Blank strings are treated the same as missing fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawQuestionRecord {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub fun_fact: Option<String>,
    pub geometry: Option<Geometry>,
    pub spatial_reference: SpatialReference,
}

impl RawQuestionRecord {
    /// Creates a complete record in the canonical frame.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        geometry: impl Into<Geometry>,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            fun_fact: None,
            geometry: Some(geometry.into()),
            spatial_reference: SpatialReference::CANONICAL,
        }
    }

    #[must_use]
    pub fn with_fun_fact(mut self, fun_fact: impl Into<String>) -> Self {
        self.fun_fact = Some(fun_fact.into());
        self
    }

    #[must_use]
    pub fn with_spatial_reference(mut self, spatial_reference: SpatialReference) -> Self {
        self.spatial_reference = spatial_reference;
        self
    }
}
