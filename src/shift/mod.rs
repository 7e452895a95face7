pub mod bd09;
pub mod ellipsoid;
pub mod gcj02;
pub mod pipeline;
pub mod region;

use crate::coord::LatLng;

/// A datum shift between two adjacent systems in the WGS-84 → GCJ-02 → BD-09 chain.
///
/// Implementations are pure: no state, no errors, safe to share across threads.
pub trait DatumShift: Send + Sync {
    /// Towards the more obfuscated system.
    fn forward(&self, c: LatLng) -> LatLng;

    /// Back towards WGS-84. Approximate for every shift in this crate.
    fn inverse(&self, c: LatLng) -> LatLng;

    /// Batch forward shift (default: loop).
    fn forward_batch(&self, coords: &mut [LatLng]) {
        for c in coords.iter_mut() {
            *c = self.forward(*c);
        }
    }

    /// Batch inverse shift.
    fn inverse_batch(&self, coords: &mut [LatLng]) {
        for c in coords.iter_mut() {
            *c = self.inverse(*c);
        }
    }

    /// Short label for logs, e.g. `"wgs84->gcj02"`.
    fn name(&self) -> &'static str;
}
