pub mod coord;
pub mod error;
pub mod shift;
#[cfg(feature = "python")]
mod py;

pub use coord::LatLng;
pub use error::ShiftError;
pub use shift::bd09::{bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, wgs84_to_bd09};
pub use shift::gcj02::{gcj02_to_wgs84, transform_lat, transform_lng, wgs84_to_gcj02};
pub use shift::pipeline::{Crs, Pipeline, PipelineOptions};
pub use shift::region::{is_out_of_china, BoundingBox, CHINA};
pub use shift::DatumShift;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
