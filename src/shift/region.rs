//! Rectangular geofence deciding where the Chinese offsets apply.

use crate::coord::LatLng;

/// An axis-aligned lat/lng box in decimal degrees, edges inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub const fn new(min_lng: f64, max_lng: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            max_lng,
            min_lat,
            max_lat,
        }
    }

    /// True unless `c` lies strictly beyond one of the edges.
    ///
    /// A NaN component compares false against every edge and therefore
    /// counts as inside.
    pub fn contains(&self, c: LatLng) -> bool {
        !(c.longitude < self.min_lng
            || c.longitude > self.max_lng
            || c.latitude < self.min_lat
            || c.latitude > self.max_lat)
    }
}

/// Coarse rectangle around mainland China. Not territory-accurate.
pub const CHINA: BoundingBox = BoundingBox::new(72.004, 137.8347, 0.8293, 55.8271);

/// True when `c` is outside [`CHINA`] and must not be offset.
pub fn is_out_of_china(c: LatLng) -> bool {
    !CHINA.contains(c)
}
