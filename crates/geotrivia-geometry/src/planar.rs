use geo::{
    BoundingRect as _, Buffer as _, Contains as _, Distance as _, Geodesic, Geometry, LineString,
    Point,
};

use crate::{Extent, GeometryError, GeometryProvider, LinearUnit, SpatialReference, projection};

/// [`GeometryProvider`] backed by the `geo` crate.
///
/// Containment, buffering and extents are planar, in whatever units the shapes
/// carry. Geodesic distances are measured on the WGS84 ellipsoid. Reprojection
/// supports WGS84 and Web Mercator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarGeometryProvider;

impl GeometryProvider for PlanarGeometryProvider {
    fn reproject(
        &self,
        geometry: &Geometry,
        from: SpatialReference,
        to: SpatialReference,
    ) -> Result<Geometry, GeometryError> {
        projection::reproject(geometry, from, to)
    }

    fn contains(&self, container: &Geometry, point: Point) -> Result<bool, GeometryError> {
        Ok(container.contains(&point))
    }

    fn buffer(&self, geometry: &Geometry, distance: f64) -> Result<Geometry, GeometryError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(GeometryError::InvalidDistance { distance });
        }
        if geometry.bounding_rect().is_none() {
            return Err(GeometryError::EmptyGeometry);
        }
        // Offsetting by nothing would still approximate every curve; hand back
        // the exact shape instead.
        if distance == 0.0 {
            return Ok(geometry.clone());
        }
        Ok(Geometry::MultiPolygon(geometry.buffer(distance)))
    }

    fn extent(&self, geometry: &Geometry) -> Result<Extent, GeometryError> {
        let rect = geometry
            .bounding_rect()
            .ok_or(GeometryError::EmptyGeometry)?;
        Ok(Extent {
            width: rect.width(),
            height: rect.height(),
            center: rect.center().into(),
        })
    }

    fn geodesic_distance(
        &self,
        a: Point,
        b: Point,
        unit: LinearUnit,
    ) -> Result<f64, GeometryError> {
        let meters = Geodesic.distance(a, b);
        if !meters.is_finite() {
            return Err(GeometryError::Operation {
                message: format!("geodesic distance between {a:?} and {b:?} did not converge"),
            });
        }
        Ok(unit.from_meters(meters))
    }

    fn build_line(&self, a: Point, b: Point) -> Geometry {
        Geometry::LineString(LineString::from(vec![a.0, b.0]))
    }
}
