//! PyO3 binding for batch coordinate shifts.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::shift::pipeline::Pipeline;

/// Shift arrays of coordinates from one CRS to another.
///
/// Args:
///     lat: 1D array of latitudes (degrees).
///     lng: 1D array of longitudes (degrees).
///     src_crs: Source CRS name ("wgs84", "gcj02", "bd09" or an alias).
///     dst_crs: Destination CRS name.
///
/// Returns:
///     Tuple of (lat_out, lng_out) arrays in the destination CRS.
#[pyfunction]
#[pyo3(signature = (lat, lng, src_crs, dst_crs))]
#[allow(clippy::type_complexity)]
pub fn transform_points<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    lng: PyReadonlyArray1<'py, f64>,
    src_crs: &str,
    dst_crs: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let pipeline =
        Pipeline::new(src_crs, dst_crs).map_err(|e| PyValueError::new_err(e.to_string()))?;

    // Copy to owned buffers before releasing the GIL
    let mut lats: Vec<f64> = lat.as_array().iter().copied().collect();
    let mut lngs: Vec<f64> = lng.as_array().iter().copied().collect();

    let (lats, lngs) = py.allow_threads(move || -> PyResult<(Vec<f64>, Vec<f64>)> {
        pipeline
            .transform_xy(&mut lats, &mut lngs)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((lats, lngs))
    })?;

    Ok((
        PyArray1::from_owned_array_bound(py, ndarray::Array1::from(lats)),
        PyArray1::from_owned_array_bound(py, ndarray::Array1::from(lngs)),
    ))
}
