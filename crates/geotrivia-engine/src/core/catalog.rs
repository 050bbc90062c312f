use geotrivia_geometry::{GeometryProvider, SpatialReference};

use crate::{
    CatalogError, IndexOutOfRangeError, MalformedReason, MalformedRecordError, Question,
    QuestionSource, RawQuestionRecord,
};

/// Ordered questions for one game.
///
/// Order is exactly the order records were supplied in; nothing is shuffled.
/// A catalog is never empty.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    skipped: Vec<MalformedRecordError>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn validate<P>(
    index: usize,
    record: RawQuestionRecord,
    provider: &P,
) -> Result<Question, MalformedRecordError>
where
    P: GeometryProvider + ?Sized,
{
    let malformed = |reason| MalformedRecordError { index, reason };

    let text = non_blank(record.question)
        .ok_or_else(|| malformed(MalformedReason::MissingQuestionText))?;
    let answer_label =
        non_blank(record.answer).ok_or_else(|| malformed(MalformedReason::MissingAnswerLabel))?;
    let geometry = record
        .geometry
        .ok_or_else(|| malformed(MalformedReason::MissingGeometry))?;
    let geometry = provider
        .reproject(
            &geometry,
            record.spatial_reference,
            SpatialReference::CANONICAL,
        )
        .map_err(|e| malformed(MalformedReason::Reprojection(e)))?;

    Ok(Question::new(
        text,
        answer_label,
        non_blank(record.fun_fact).unwrap_or_default(),
        geometry,
    ))
}

impl Catalog {
    /// Validates records and reprojects their geometry into the canonical frame.
    ///
    /// Malformed records are skipped and kept in [`Self::skipped_records`].
    /// Fails with [`CatalogError::Empty`] when no record survives.
    pub fn load<I, P>(records: I, provider: &P) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = RawQuestionRecord>,
        P: GeometryProvider + ?Sized,
    {
        let mut questions = vec![];
        let mut skipped = vec![];

        for (index, record) in records.into_iter().enumerate() {
            match validate(index, record, provider) {
                Ok(question) => questions.push(question),
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed question record");
                    skipped.push(err);
                }
            }
        }

        if questions.is_empty() {
            return Err(CatalogError::Empty { skipped });
        }

        tracing::info!(
            questions = questions.len(),
            skipped = skipped.len(),
            "question catalog loaded"
        );
        Ok(Self { questions, skipped })
    }

    /// Fetches every record from `source`, then builds the catalog in one step.
    ///
    /// Dropping the returned future cancels the load; no catalog is produced.
    pub async fn fetch<S, P>(source: &S, provider: &P) -> Result<Self, CatalogError>
    where
        S: QuestionSource + ?Sized,
        P: GeometryProvider + ?Sized,
    {
        let records = source.fetch().await?;
        Self::load(records, provider)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn at(&self, index: usize) -> Result<&Question, IndexOutOfRangeError> {
        self.questions.get(index).ok_or(IndexOutOfRangeError {
            index,
            count: self.count(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter()
    }

    #[must_use]
    pub fn skipped_records(&self) -> &[MalformedRecordError] {
        &self.skipped
    }
}

#[cfg(test)]
mod tests {
    use geotrivia_geometry::{
        PlanarGeometryProvider,
        geo::{Geometry, Point, Rect},
    };

    use super::*;
    use crate::InMemorySource;

    fn square(x: f64, y: f64) -> Geometry {
        Geometry::Rect(Rect::new((x, y), (x + 1.0, y + 1.0)))
    }

    #[test]
    fn test_preserves_order() {
        let records = [("first", 0.0), ("second", 1.0), ("third", 2.0)]
            .into_iter()
            .map(|(name, x)| RawQuestionRecord::new(name, name, square(x, 0.0)));
        let catalog = Catalog::load(records, &PlanarGeometryProvider).unwrap();

        assert_eq!(catalog.count(), 3);
        let texts = catalog.iter().map(Question::text).collect::<Vec<_>>();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_skips_malformed_records() {
        let mut missing_text = RawQuestionRecord::new("", "Label", square(0.0, 0.0));
        missing_text.question = Some("   ".to_owned());
        let mut missing_geometry = RawQuestionRecord::new("Question", "Label", square(0.0, 0.0));
        missing_geometry.geometry = None;
        let mut missing_answer = RawQuestionRecord::new("Question", "Label", square(0.0, 0.0));
        missing_answer.answer = None;

        let records = vec![
            missing_text,
            RawQuestionRecord::new("Valid", "Answer", square(2.0, 2.0)),
            missing_geometry,
            missing_answer,
        ];
        let catalog = Catalog::load(records, &PlanarGeometryProvider).unwrap();

        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.at(0).unwrap().text(), "Valid");
        let reasons = catalog
            .skipped_records()
            .iter()
            .map(|e| (e.index, e.reason.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            reasons,
            [
                (0, MalformedReason::MissingQuestionText),
                (2, MalformedReason::MissingGeometry),
                (3, MalformedReason::MissingAnswerLabel),
            ]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let err = Catalog::load(vec![], &PlanarGeometryProvider).unwrap_err();
        assert!(matches!(err, CatalogError::Empty { ref skipped } if skipped.is_empty()));

        let mut bad = RawQuestionRecord::new("Question", "Label", square(0.0, 0.0));
        bad.geometry = None;
        let err = Catalog::load(vec![bad], &PlanarGeometryProvider).unwrap_err();
        assert!(matches!(err, CatalogError::Empty { ref skipped } if skipped.len() == 1));
    }

    #[test]
    fn test_unsupported_frame_is_skipped() {
        let records = vec![
            RawQuestionRecord::new("British grid", "Somewhere", square(0.0, 0.0))
                .with_spatial_reference(SpatialReference(27700)),
            RawQuestionRecord::new("Valid", "Answer", square(0.0, 0.0)),
        ];
        let catalog = Catalog::load(records, &PlanarGeometryProvider).unwrap();

        assert_eq!(catalog.count(), 1);
        assert!(matches!(
            catalog.skipped_records()[0].reason,
            MalformedReason::Reprojection(_)
        ));
    }

    #[test]
    fn test_reprojects_web_mercator() {
        // Roughly (10 E, 0 N) in Web Mercator.
        let mercator = Geometry::Point(Point::new(1_113_194.907_932_735_7, 0.0));
        let records = vec![
            RawQuestionRecord::new("Mercator", "Point", mercator)
                .with_spatial_reference(SpatialReference::WEB_MERCATOR),
        ];
        let catalog = Catalog::load(records, &PlanarGeometryProvider).unwrap();

        let Geometry::Point(point) = catalog.at(0).unwrap().geometry() else {
            panic!("expected a point");
        };
        assert!((point.x() - 10.0).abs() < 1e-9);
        assert!(point.y().abs() < 1e-9);
    }

    #[test]
    fn test_index_out_of_range() {
        let records = vec![RawQuestionRecord::new("Q", "A", square(0.0, 0.0))];
        let catalog = Catalog::load(records, &PlanarGeometryProvider).unwrap();

        assert_eq!(
            catalog.at(1).unwrap_err(),
            IndexOutOfRangeError { index: 1, count: 1 }
        );
    }

    #[tokio::test]
    async fn test_fetch_from_source() {
        let source = InMemorySource::new(vec![
            RawQuestionRecord::new("Q1", "A1", square(0.0, 0.0)).with_fun_fact("Fact"),
            RawQuestionRecord::new("Q2", "A2", square(5.0, 5.0)),
        ]);
        let catalog = Catalog::fetch(&source, &PlanarGeometryProvider)
            .await
            .unwrap();

        assert_eq!(catalog.count(), 2);
        assert_eq!(catalog.at(0).unwrap().fun_fact(), "Fact");
        assert_eq!(catalog.at(1).unwrap().fun_fact(), "");
    }
}
