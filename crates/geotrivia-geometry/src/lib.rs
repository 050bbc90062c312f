//! Geometry capabilities consumed by the trivia engine.
//!
//! The engine never inspects coordinates itself. Everything it needs from a
//! geometry library goes through the [`GeometryProvider`] trait:
//!
//! - [`GeometryProvider::reproject`] - Move a shape between reference frames
//! - [`GeometryProvider::contains`] - Point-in-shape test
//! - [`GeometryProvider::buffer`] - Grow a shape outward by a distance
//! - [`GeometryProvider::extent`] - Bounding box size and center
//! - [`GeometryProvider::geodesic_distance`] - Surface distance between two points
//! - [`GeometryProvider::build_line`] - Segment joining two points
//!
//! [`PlanarGeometryProvider`] is the bundled implementation, built on the
//! [`geo`] crate. Shapes are plain [`geo::Geometry`] values.
//!
//! # Example
//!
//! ```
//! use geotrivia_geometry::{GeometryProvider, PlanarGeometryProvider};
//! use geo::{Geometry, Point, Rect};
//!
//! let provider = PlanarGeometryProvider;
//! let square = Geometry::Rect(Rect::new((0.0, 0.0), (2.0, 2.0)));
//!
//! assert!(provider.contains(&square, Point::new(1.0, 1.0)).unwrap());
//!
//! let grown = provider.buffer(&square, 0.5).unwrap();
//! assert!(provider.contains(&grown, Point::new(2.25, 1.0)).unwrap());
//! ```

pub use geo;

pub use self::{planar::*, provider::*, spatial_reference::*};

mod planar;
mod projection;
mod provider;
mod spatial_reference;

/// Failure reported by a [`GeometryProvider`] operation.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GeometryError {
    #[display("geometry has no coordinates")]
    EmptyGeometry,
    #[display("cannot reproject from {from} to {to}")]
    UnsupportedSpatialReference {
        from: SpatialReference,
        to: SpatialReference,
    },
    #[display("buffer distance must be finite and non-negative, got {distance}")]
    InvalidDistance { distance: f64 },
    #[display("geometry operation failed: {message}")]
    Operation {
        #[error(not(source))]
        message: String,
    },
}
