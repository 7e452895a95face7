use thiserror::Error;

/// Errors from the parts of the crate that parse or validate caller input.
///
/// The shift functions themselves are total and never return this.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShiftError {
    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),

    #[error("Invalid shape: {0}")]
    Shape(String),
}
