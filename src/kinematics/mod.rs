//! GrADS finite-difference operators on regular lat/lon grids
//!
//! # Organization
//!
//! - [`cdiff`]: centered differences, the primitive every other operator uses
//! - [`divergence`], [`vorticity`], [`advection`]: the derived operators
//! - [`operations`]: operator catalogue and result type
//! - [`netcdf`]: running the operators on NetCDF variables
//!
//! All operators take `[lat, lon]` indexed fields, return a new array of the
//! same shape, and leave a one-cell NaN border.

pub mod advection;
pub mod cdiff;
pub mod divergence;
pub mod netcdf;
pub mod operations;
pub mod vorticity;

pub use advection::horizontal_advection;
pub use cdiff::{centered_difference, centered_difference_index, CenteredDifference};
pub use divergence::horizontal_divergence;
pub use self::netcdf::{compute_from_file, GridOptions};
pub use operations::{DerivativeOp, DerivativeResult};
pub use vorticity::relative_vorticity;
