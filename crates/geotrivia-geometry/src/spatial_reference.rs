use serde::{Deserialize, Serialize};

/// Well-known ID of a coordinate reference frame.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("WKID {_0}")]
#[serde(transparent)]
pub struct SpatialReference(pub u32);

impl SpatialReference {
    /// Geographic longitude/latitude in degrees.
    pub const WGS84: Self = Self(4326);
    /// Spherical Web Mercator in meters.
    pub const WEB_MERCATOR: Self = Self(3857);
    /// Legacy alias for Web Mercator still emitted by some feature services.
    pub const WEB_MERCATOR_AUXILIARY: Self = Self(102_100);

    /// The frame every question and guess is normalized into before comparison.
    pub const CANONICAL: Self = Self::WGS84;

    #[must_use]
    pub const fn wkid(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_web_mercator(self) -> bool {
        matches!(self.0, 3857 | 102_100)
    }
}

impl Default for SpatialReference {
    fn default() -> Self {
        Self::CANONICAL
    }
}
