//! Scalar shift functions. All take and return `(latitude, longitude)`.

use pyo3::prelude::*;

use crate::coord::LatLng;

#[pyfunction]
pub fn wgs84_to_gcj02(lat: f64, lng: f64) -> (f64, f64) {
    crate::wgs84_to_gcj02(LatLng::new(lat, lng)).into()
}

#[pyfunction]
pub fn gcj02_to_wgs84(lat: f64, lng: f64) -> (f64, f64) {
    crate::gcj02_to_wgs84(LatLng::new(lat, lng)).into()
}

#[pyfunction]
pub fn gcj02_to_bd09(lat: f64, lng: f64) -> (f64, f64) {
    crate::gcj02_to_bd09(LatLng::new(lat, lng)).into()
}

#[pyfunction]
pub fn bd09_to_gcj02(lat: f64, lng: f64) -> (f64, f64) {
    crate::bd09_to_gcj02(LatLng::new(lat, lng)).into()
}

#[pyfunction]
pub fn wgs84_to_bd09(lat: f64, lng: f64) -> (f64, f64) {
    crate::wgs84_to_bd09(LatLng::new(lat, lng)).into()
}

#[pyfunction]
pub fn bd09_to_wgs84(lat: f64, lng: f64) -> (f64, f64) {
    crate::bd09_to_wgs84(LatLng::new(lat, lng)).into()
}

/// True when the point lies outside the rectangle where GCJ-02 applies.
#[pyfunction]
pub fn out_of_china(lat: f64, lng: f64) -> bool {
    crate::is_out_of_china(LatLng::new(lat, lng))
}
