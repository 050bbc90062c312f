//! Spherical Web Mercator conversions.
//!
//! Feature services commonly serve shapes in Web Mercator (WKID 3857) while the
//! game compares everything in WGS84 degrees. Only these two frames are
//! supported.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use geo::{Coord, Geometry, MapCoords as _};

use crate::{GeometryError, SpatialReference};

/// Radius of the sphere Web Mercator is defined on, in meters.
const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitudes beyond this are undefined in Web Mercator.
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

fn to_web_mercator(coord: Coord) -> Coord {
    let lat = coord.y.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
    Coord {
        x: coord.x.to_radians() * EARTH_RADIUS,
        y: (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS,
    }
}

fn from_web_mercator(coord: Coord) -> Coord {
    Coord {
        x: (coord.x / EARTH_RADIUS).to_degrees(),
        y: (2.0 * (coord.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees(),
    }
}

pub(crate) fn reproject(
    geometry: &Geometry,
    from: SpatialReference,
    to: SpatialReference,
) -> Result<Geometry, GeometryError> {
    if from == to || (from.is_web_mercator() && to.is_web_mercator()) {
        return Ok(geometry.clone());
    }
    if from == SpatialReference::WGS84 && to.is_web_mercator() {
        return Ok(geometry.map_coords(to_web_mercator));
    }
    if from.is_web_mercator() && to == SpatialReference::WGS84 {
        return Ok(geometry.map_coords(from_web_mercator));
    }
    Err(GeometryError::UnsupportedSpatialReference { from, to })
}
