//! Regular latitude/longitude grid geometry
//!
//! Constants and coordinate meshes shared by the divergence, vorticity and
//! advection operators.

use crate::errors::{GradsError, Result};
use ndarray::{Array2, ArrayView1};
use std::f64::consts::PI;

/// Mean Earth radius in metres, as used by GrADS.
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Degrees to radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Dimension along which a centered difference is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffAxis {
    /// First dimension (rows, latitude)
    Lat,
    /// Second dimension (columns, longitude)
    Lon,
}

impl DiffAxis {
    /// ndarray axis index of this dimension
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Lat => 0,
            Self::Lon => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lat => "lat",
            Self::Lon => "lon",
        }
    }
}

impl TryFrom<usize> for DiffAxis {
    type Error = GradsError;

    fn try_from(axis: usize) -> Result<Self> {
        match axis {
            0 => Ok(Self::Lat),
            1 => Ok(Self::Lon),
            _ => Err(GradsError::AxisError { axis }),
        }
    }
}

/// Latitude and longitude broadcast to 2-D, "ij" indexing.
///
/// `lat[[i, j]] == lat_axis[i]` and `lon[[i, j]] == lon_axis[j]`, so a field
/// indexed `[lat, lon]` lines up cell for cell with both meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMesh {
    pub lat: Array2<f64>,
    pub lon: Array2<f64>,
}

impl CoordinateMesh {
    /// Broadcast the two axes across each other (degrees in, degrees out)
    #[must_use]
    pub fn new(lat: ArrayView1<'_, f64>, lon: ArrayView1<'_, f64>) -> Self {
        let shape = (lat.len(), lon.len());
        Self {
            lat: Array2::from_shape_fn(shape, |(i, _)| lat[i]),
            lon: Array2::from_shape_fn(shape, |(_, j)| lon[j]),
        }
    }

    /// `(rows, cols)` of both meshes
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.lat.dim()
    }

    #[must_use]
    pub fn lat_radians(&self) -> Array2<f64> {
        self.lat.mapv(|x| x * DEG_TO_RAD)
    }

    #[must_use]
    pub fn lon_radians(&self) -> Array2<f64> {
        self.lon.mapv(|x| x * DEG_TO_RAD)
    }

    /// cos(latitude) in every cell
    #[must_use]
    pub fn cos_lat(&self) -> Array2<f64> {
        self.lat.mapv(|x| (x * DEG_TO_RAD).cos())
    }
}

/// Companion fields must have the reference field's shape; ndarray panics on
/// mismatched elementwise arithmetic.
pub(crate) fn check_field(
    name: &str,
    expected: (usize, usize),
    found: (usize, usize),
) -> Result<()> {
    if expected != found {
        return Err(GradsError::ShapeMismatch {
            name: name.to_string(),
            expected: vec![expected.0, expected.1],
            found: vec![found.0, found.1],
        });
    }
    Ok(())
}

/// `lat` must match the rows of the field, `lon` its columns
pub(crate) fn check_axes(
    shape: (usize, usize),
    lat: ArrayView1<'_, f64>,
    lon: ArrayView1<'_, f64>,
) -> Result<()> {
    if lat.len() != shape.0 {
        return Err(GradsError::ShapeMismatch {
            name: "lat".to_string(),
            expected: vec![shape.0],
            found: vec![lat.len()],
        });
    }
    if lon.len() != shape.1 {
        return Err(GradsError::ShapeMismatch {
            name: "lon".to_string(),
            expected: vec![shape.1],
            found: vec![lon.len()],
        });
    }
    Ok(())
}
