/// Mean Earth radius (IUGG), metres.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A latitude/longitude pair in decimal degrees.
///
/// The same shape carries WGS-84, GCJ-02 and BD-09 values; which system a
/// value belongs to is decided by the function that produced it. No range
/// checks are made.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in metres (haversine, spherical Earth).
    pub fn haversine_distance(&self, other: &LatLng) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let dphi = phi2 - phi1;
        let dlambda = (other.longitude - self.longitude).to_radians();

        let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * h.sqrt().asin()
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for LatLng {
    /// Build from a `(latitude, longitude)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<LatLng> for (f64, f64) {
    fn from(c: LatLng) -> Self {
        (c.latitude, c.longitude)
    }
}
