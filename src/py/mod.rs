use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

mod shift;
mod transform;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    m.add_function(wrap_pyfunction!(shift::wgs84_to_gcj02, m)?)?;
    m.add_function(wrap_pyfunction!(shift::gcj02_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(shift::gcj02_to_bd09, m)?)?;
    m.add_function(wrap_pyfunction!(shift::bd09_to_gcj02, m)?)?;
    m.add_function(wrap_pyfunction!(shift::wgs84_to_bd09, m)?)?;
    m.add_function(wrap_pyfunction!(shift::bd09_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(shift::out_of_china, m)?)?;
    m.add_function(wrap_pyfunction!(transform::transform_points, m)?)?;
    Ok(())
}

/// Route the crate's `tracing` output to stderr.
///
/// Args:
///     level: Filter directive (e.g. "debug", "_rust=trace"). Defaults to
///         `RUST_LOG`, or "warn" when that is unset.
#[pyfunction]
#[pyo3(signature = (level=None))]
fn init_logging(level: Option<&str>) -> PyResult<()> {
    let filter = match level {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|e| PyValueError::new_err(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // Only the first call installs a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
