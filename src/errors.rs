//! Centralized error handling for ru_grads
//!
//! The GrADS-style operators signal bad input through these variants instead of
//! printing a message and returning nothing, so callers have to handle the
//! failure path before touching the output.

use std::fmt;

/// Main error type for ru_grads operations
#[derive(Debug)]
pub enum GradsError {
    /// Field handed to a finite-difference operator is not 2-D
    ShapeError { ndim: usize },

    /// Axis selector outside {0, 1}
    AxisError { axis: usize },

    /// Field or coordinate axis does not line up with the reference field
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// Dimension not found in variable
    DimensionNotFound { var: String, dim: String },

    /// Invalid `dim=index` selection
    InvalidSelection { message: String },

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Anything else
    Generic(String),
}

impl fmt::Display for GradsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradsError::ShapeError { ndim } => write!(
                f,
                "Scalar field must have exactly 2 dimensions, but it has {}",
                ndim
            ),
            GradsError::AxisError { axis } => write!(
                f,
                "Invalid axis option {}: must be either 0 (lat) or 1 (lon)",
                axis
            ),
            GradsError::ShapeMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "Shape mismatch for '{}': expected {:?}, found {:?}",
                name, expected, found
            ),
            GradsError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            GradsError::IoError(e) => write!(f, "I/O error: {}", e),
            GradsError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            GradsError::DimensionNotFound { var, dim } => {
                write!(f, "Dimension '{}' not found in variable '{}'", dim, var)
            }
            GradsError::InvalidSelection { message } => {
                write!(f, "Invalid selection: {}", message)
            }
            GradsError::ArrayError(e) => write!(f, "Array error: {}", e),
            GradsError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GradsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GradsError::NetCDFError(e) => Some(e),
            GradsError::IoError(e) => Some(e),
            GradsError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for GradsError {
    fn from(error: netcdf::Error) -> Self {
        GradsError::NetCDFError(error)
    }
}

impl From<std::io::Error> for GradsError {
    fn from(error: std::io::Error) -> Self {
        GradsError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for GradsError {
    fn from(error: ndarray::ShapeError) -> Self {
        GradsError::ArrayError(error)
    }
}

impl From<String> for GradsError {
    fn from(error: String) -> Self {
        GradsError::Generic(error)
    }
}

impl From<&str> for GradsError {
    fn from(error: &str) -> Self {
        GradsError::Generic(error.to_string())
    }
}

/// Result type alias for ru_grads operations
pub type Result<T> = std::result::Result<T, GradsError>;
