use geo::{Geometry, Point};
use serde::{Deserialize, Serialize};

use crate::{GeometryError, SpatialReference};

/// Axis-aligned bounds of a geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
    pub center: Point,
}

impl Extent {
    /// Returns the smaller of width and height.
    #[must_use]
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Unit for distances measured along the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinearUnit {
    #[default]
    Kilometers,
    Meters,
}

impl LinearUnit {
    #[must_use]
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            LinearUnit::Kilometers => meters / 1000.0,
            LinearUnit::Meters => meters,
        }
    }
}

/// Geometric primitives the trivia engine relies on.
///
/// Planar operations (`contains`, `buffer`, `extent`) work in the native units
/// of the shapes passed in. Callers are responsible for keeping every shape in
/// one reference frame; use [`GeometryProvider::reproject`] to get there.
pub trait GeometryProvider {
    /// Converts `geometry` from frame `from` into frame `to`.
    ///
    /// Reprojecting into the frame a geometry is already in returns it unchanged.
    fn reproject(
        &self,
        geometry: &Geometry,
        from: SpatialReference,
        to: SpatialReference,
    ) -> Result<Geometry, GeometryError>;

    /// Reports whether `point` lies inside `container`.
    fn contains(&self, container: &Geometry, point: Point) -> Result<bool, GeometryError>;

    /// Grows `geometry` outward by `distance`.
    ///
    /// A zero distance returns the input unchanged.
    fn buffer(&self, geometry: &Geometry, distance: f64) -> Result<Geometry, GeometryError>;

    fn extent(&self, geometry: &Geometry) -> Result<Extent, GeometryError>;

    /// Measures the shortest surface distance between two points given in
    /// the canonical geographic frame (degrees).
    fn geodesic_distance(&self, a: Point, b: Point, unit: LinearUnit)
    -> Result<f64, GeometryError>;

    fn build_line(&self, a: Point, b: Point) -> Geometry;
}

impl<P> GeometryProvider for &P
where
    P: GeometryProvider + ?Sized,
{
    fn reproject(
        &self,
        geometry: &Geometry,
        from: SpatialReference,
        to: SpatialReference,
    ) -> Result<Geometry, GeometryError> {
        (**self).reproject(geometry, from, to)
    }

    fn contains(&self, container: &Geometry, point: Point) -> Result<bool, GeometryError> {
        (**self).contains(container, point)
    }

    fn buffer(&self, geometry: &Geometry, distance: f64) -> Result<Geometry, GeometryError> {
        (**self).buffer(geometry, distance)
    }

    fn extent(&self, geometry: &Geometry) -> Result<Extent, GeometryError> {
        (**self).extent(geometry)
    }

    fn geodesic_distance(
        &self,
        a: Point,
        b: Point,
        unit: LinearUnit,
    ) -> Result<f64, GeometryError> {
        (**self).geodesic_distance(a, b, unit)
    }

    fn build_line(&self, a: Point, b: Point) -> Geometry {
        (**self).build_line(a, b)
    }
}

#[cfg(test)]
mod tests {
    use geo::point;

    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert!((LinearUnit::Kilometers.from_meters(1500.0) - 1.5).abs() < f64::EPSILON);
        assert!((LinearUnit::Meters.from_meters(1500.0) - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_min_dimension() {
        let extent = Extent {
            width: 3.0,
            height: 7.5,
            center: point!(x: 0.0, y: 0.0),
        };
        assert!((extent.min_dimension() - 3.0).abs() < f64::EPSILON);
    }
}
