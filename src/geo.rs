//! Geographic coordinates and the projection to layer pixels.
//!
//! The host map owns the real projection; this module carries a spherical Web
//! Mercator implementation of the same contract so overlay placement can be
//! computed (and tested) without the host. `Projection` is the seam: a host
//! with a different CRS plugs in its own implementation.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;
use crate::geom::Point;

/// Latitude limit beyond which Web Mercator diverges.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A geographic rectangle given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Build bounds from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    #[must_use]
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) * 0.5,
            (self.south_west.lng + self.north_east.lng) * 0.5,
        )
    }
}

/// Maps geographic coordinates to absolute pixel coordinates at a zoom level.
pub trait Projection {
    fn project(&self, latlng: LatLng, zoom: f64) -> Point;
    fn unproject(&self, point: Point, zoom: f64) -> LatLng;
}

/// Spherical Web Mercator with square tiles of [`TILE_SIZE`] pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl Projection for WebMercator {
    fn project(&self, latlng: LatLng, zoom: f64) -> Point {
        let world = world_size(zoom);
        let lat = latlng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let sin = lat.to_radians().sin();
        let x = (latlng.lng / 360.0 + 0.5) * world;
        let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * world;
        Point::new(x, y)
    }

    fn unproject(&self, point: Point, zoom: f64) -> LatLng {
        let world = world_size(zoom);
        let lng = (point.x / world - 0.5) * 360.0;
        let merc_y = (0.5 - point.y / world) * 2.0 * PI;
        let lat = (2.0 * merc_y.exp().atan() - PI / 2.0).to_degrees();
        LatLng::new(lat, lng)
    }
}

/// Width of the whole world in pixels at `zoom`.
#[must_use]
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

/// Scale factor that takes a drawing at `from_zoom` to `to_zoom`.
#[must_use]
pub fn zoom_scale(to_zoom: f64, from_zoom: f64) -> f64 {
    (to_zoom - from_zoom).exp2()
}
