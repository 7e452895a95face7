//! Reference ellipsoid used by the GCJ-02 offset.

/// Reference ellipsoid given by semi-major axis and first eccentricity squared.
///
/// GCJ-02 is defined against Krasovsky 1940 with a published `e²` literal,
/// so the struct stores `e2` directly instead of deriving it from a
/// flattening (the derived value differs in the last bits).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// First eccentricity squared
    pub e2: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, e2: f64) -> Self {
        Self { a, e2 }
    }

    /// Radii of curvature at latitude `phi` (radians).
    ///
    /// Returns `(meridional, prime_vertical)`:
    ///   M = a·(1 - e²) / W³,  N = a / W,  with W = sqrt(1 - e²·sin²φ)
    pub fn curvature_radii(&self, phi: f64) -> (f64, f64) {
        let sin_phi = phi.sin();
        let w2 = 1.0 - self.e2 * sin_phi * sin_phi;
        let w = w2.sqrt();
        let m = self.a * (1.0 - self.e2) / (w2 * w);
        let n = self.a / w;
        (m, n)
    }
}

/// Krasovsky 1940, the ellipsoid GCJ-02 offsets are computed on.
pub const KRASOVSKY_1940: Ellipsoid = Ellipsoid::new(6_378_245.0, 0.006_693_421_622_965_943_23);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_krasovsky_constants() {
        assert_eq!(KRASOVSKY_1940.a, 6378245.0);
        assert_eq!(KRASOVSKY_1940.e2, 0.00669342162296594323);
    }

    #[test]
    fn test_curvature_radii_equator() {
        let (m, n) = KRASOVSKY_1940.curvature_radii(0.0);
        assert_relative_eq!(n, KRASOVSKY_1940.a);
        assert_relative_eq!(m, KRASOVSKY_1940.a * (1.0 - KRASOVSKY_1940.e2));
    }

    #[test]
    fn test_curvature_radii_grow_towards_pole() {
        let (m0, n0) = KRASOVSKY_1940.curvature_radii(0.0);
        let (m1, n1) = KRASOVSKY_1940.curvature_radii(std::f64::consts::FRAC_PI_4);
        assert!(m1 > m0 && n1 > n0);
        // N >= M everywhere on an oblate ellipsoid
        assert!(n1 >= m1);
    }
}
