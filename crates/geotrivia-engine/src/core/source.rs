use std::path::{Path, PathBuf};

use async_trait::async_trait;
use geojson::{FeatureCollection, GeoJson, JsonObject, JsonValue};
use geotrivia_geometry::{SpatialReference, geo::Geometry};

use crate::{RawQuestionRecord, SourceError};

/// Property holding the question text.
pub const QUESTION_FIELD: &str = "Question";
/// Property holding the answer label.
pub const ANSWER_FIELD: &str = "Answer";
/// Optional property holding trivia shown with the feedback.
pub const FUN_FACT_FIELD: &str = "FunFact";

/// Supplies raw question records, typically from a remote feature service.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawQuestionRecord>, SourceError>;
}

/// Records that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<RawQuestionRecord>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(records: Vec<RawQuestionRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    async fn fetch(&self) -> Result<Vec<RawQuestionRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

/// A GeoJSON `FeatureCollection` file, one question per feature.
///
/// GeoJSON is WGS84 by definition, but exports from some feature services keep
/// their native frame; [`Self::with_spatial_reference`] declares it.
#[derive(Debug, Clone)]
pub struct GeoJsonSource {
    path: PathBuf,
    spatial_reference: SpatialReference,
}

impl GeoJsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            spatial_reference: SpatialReference::WGS84,
        }
    }

    #[must_use]
    pub fn with_spatial_reference(mut self, spatial_reference: SpatialReference) -> Self {
        self.spatial_reference = spatial_reference;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for GeoJsonSource {
    async fn fetch(&self) -> Result<Vec<RawQuestionRecord>, SourceError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "read question file");
        parse_geojson_records(&text, self.spatial_reference)
    }
}

fn property(properties: Option<&JsonObject>, name: &str) -> Option<String> {
    match properties?.get(name)? {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Turns a GeoJSON `FeatureCollection` into raw records.
///
/// Missing or unconvertible fields become `None`; validation happens when the
/// catalog is built.
pub fn parse_geojson_records(
    text: &str,
    spatial_reference: SpatialReference,
) -> Result<Vec<RawQuestionRecord>, SourceError> {
    let GeoJson::FeatureCollection(FeatureCollection { features, .. }) =
        text.parse::<GeoJson>()?
    else {
        return Err(SourceError::NotAFeatureCollection);
    };

    let records = features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let properties = feature.properties.as_ref();
            let geometry = feature.geometry.and_then(|g| {
                Geometry::try_from(g)
                    .inspect_err(|err| {
                        tracing::warn!(index, %err, "feature geometry could not be converted");
                    })
                    .ok()
            });
            RawQuestionRecord {
                question: property(properties, QUESTION_FIELD),
                answer: property(properties, ANSWER_FIELD),
                fun_fact: property(properties, FUN_FACT_FIELD),
                geometry,
                spatial_reference,
            }
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use geotrivia_geometry::geo::Point;

    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "Question": "Where is Null Island?", "Answer": "Null Island", "FunFact": "It does not exist." },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            },
            {
                "type": "Feature",
                "properties": { "Question": "Which year?", "Answer": 1984 },
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let records = parse_geojson_records(COLLECTION, SpatialReference::WGS84).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question.as_deref(), Some("Where is Null Island?"));
        assert_eq!(records[0].answer.as_deref(), Some("Null Island"));
        assert_eq!(records[0].fun_fact.as_deref(), Some("It does not exist."));
        assert_eq!(records[0].geometry, Some(Geometry::Point(Point::new(0.0, 0.0))));

        assert_eq!(records[1].answer.as_deref(), Some("1984"));
        assert_eq!(records[1].fun_fact, None);
        assert_eq!(records[1].geometry, None);
    }

    #[test]
    fn test_rejects_single_feature() {
        let text = r#"{ "type": "Feature", "properties": {}, "geometry": null }"#;
        assert!(matches!(
            parse_geojson_records(text, SpatialReference::WGS84),
            Err(SourceError::NotAFeatureCollection)
        ));
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(
            parse_geojson_records("not json", SpatialReference::WGS84),
            Err(SourceError::GeoJson(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = GeoJsonSource::new("/nonexistent/questions.geojson");
        assert!(matches!(source.fetch().await, Err(SourceError::Io(_))));
    }
}
