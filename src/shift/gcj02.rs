//! WGS-84 ↔ GCJ-02 ("Mars coordinates").
//!
//! The offset is an empirical polynomial-plus-sine field evaluated on the
//! point recentred at (35°N, 105°E), converted from metres to degrees with
//! the Krasovsky radii of curvature:
//!
//!   dφ = transform_lat(φ-35, λ-105) · 180 / (M·π)
//!   dλ = transform_lng(φ-35, λ-105) · 180 / (N·cosφ·π)
//!
//! Literals and evaluation order match the published field bit-for-bit.

use std::f64::consts::PI;

use crate::coord::LatLng;
use crate::shift::ellipsoid::KRASOVSKY_1940;
use crate::shift::region::is_out_of_china;
use crate::shift::DatumShift;

/// Latitude component of the offset field, in metres.
///
/// `c` is the point already recentred at (35°N, 105°E).
pub fn transform_lat(c: LatLng) -> f64 {
    let x = c.longitude;
    let y = c.latitude;
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Longitude component of the offset field, in metres.
///
/// `c` is the point already recentred at (35°N, 105°E).
pub fn transform_lng(c: LatLng) -> f64 {
    let x = c.longitude;
    let y = c.latitude;
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Offset point `c + (dφ, dλ)`, evaluated at `c` whatever system `c` is in.
fn shifted(c: LatLng) -> LatLng {
    let centred = LatLng::new(c.latitude - 35.0, c.longitude - 105.0);
    let dlat = transform_lat(centred);
    let dlng = transform_lng(centred);

    // lat / 180 · π, not to_radians(): the latter rounds differently
    let radlat = c.latitude / 180.0 * PI;
    let (m, n) = KRASOVSKY_1940.curvature_radii(radlat);
    let dlat = dlat * 180.0 / (m * PI);
    let dlng = dlng * 180.0 / (n * radlat.cos() * PI);

    LatLng::new(c.latitude + dlat, c.longitude + dlng)
}

/// WGS-84 → GCJ-02. Points outside China are returned unchanged.
pub fn wgs84_to_gcj02(c: LatLng) -> LatLng {
    if is_out_of_china(c) {
        return c;
    }
    shifted(c)
}

/// GCJ-02 → WGS-84, accurate to a few metres.
///
/// Evaluates the forward offset at the GCJ-02 point itself and reflects the
/// shifted point back across it. Not an exact inverse of [`wgs84_to_gcj02`].
pub fn gcj02_to_wgs84(c: LatLng) -> LatLng {
    if is_out_of_china(c) {
        return c;
    }
    let fwd = shifted(c);
    LatLng::new(
        c.latitude * 2.0 - fwd.latitude,
        c.longitude * 2.0 - fwd.longitude,
    )
}

/// WGS-84 (forward) ↔ GCJ-02 (inverse).
#[derive(Clone, Copy, Debug, Default)]
pub struct Gcj02Shift;

impl DatumShift for Gcj02Shift {
    fn forward(&self, c: LatLng) -> LatLng {
        wgs84_to_gcj02(c)
    }

    fn inverse(&self, c: LatLng) -> LatLng {
        gcj02_to_wgs84(c)
    }

    fn name(&self) -> &'static str {
        "wgs84->gcj02"
    }
}
