//! GCJ-02 ↔ BD-09 (Baidu) and the WGS-84 ↔ BD-09 composites.
//!
//! forward: z = √(λ² + φ²) + 2e-5·sin(φ·x_π),  θ = atan2(φ, λ) + 3e-6·cos(λ·x_π)
//!          λ' = z·cosθ + 0.0065,  φ' = z·sinθ + 0.006
//! inverse: the same warp with the biases removed first and the signs flipped.
//! The inverse is approximate; a round trip leaves a residual of a few cm.

use std::f64::consts::PI;

use crate::coord::LatLng;
use crate::shift::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
use crate::shift::DatumShift;

/// Angular frequency of the BD-09 warp terms: π·3000/180.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

const LNG_BIAS: f64 = 0.0065;
const LAT_BIAS: f64 = 0.006;

/// GCJ-02 → BD-09.
pub fn gcj02_to_bd09(c: LatLng) -> LatLng {
    let x = c.longitude;
    let y = c.latitude;
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();
    LatLng::new(z * theta.sin() + LAT_BIAS, z * theta.cos() + LNG_BIAS)
}

/// BD-09 → GCJ-02 (approximate inverse of [`gcj02_to_bd09`]).
pub fn bd09_to_gcj02(c: LatLng) -> LatLng {
    let x = c.longitude - LNG_BIAS;
    let y = c.latitude - LAT_BIAS;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    LatLng::new(z * theta.sin(), z * theta.cos())
}

/// WGS-84 → BD-09 via GCJ-02.
pub fn wgs84_to_bd09(c: LatLng) -> LatLng {
    gcj02_to_bd09(wgs84_to_gcj02(c))
}

/// BD-09 → WGS-84 via GCJ-02. Accumulates the error of both steps.
pub fn bd09_to_wgs84(c: LatLng) -> LatLng {
    gcj02_to_wgs84(bd09_to_gcj02(c))
}

/// GCJ-02 (forward) ↔ BD-09 (inverse).
///
/// Unlike [`Gcj02Shift`](crate::shift::gcj02::Gcj02Shift) this applies
/// everywhere; BD-09 has no geofence.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bd09Shift;

impl DatumShift for Bd09Shift {
    fn forward(&self, c: LatLng) -> LatLng {
        gcj02_to_bd09(c)
    }

    fn inverse(&self, c: LatLng) -> LatLng {
        bd09_to_gcj02(c)
    }

    fn name(&self) -> &'static str {
        "gcj02->bd09"
    }
}
