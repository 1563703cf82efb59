//! ru_grads: GrADS finite-difference functions for regular lat/lon grids
//!
//! Centered differences, horizontal divergence, relative vorticity and
//! horizontal advection computed exactly the way GrADS' `cdiff`, `hdivg`,
//! `hcurl` and `hadv` do, so results match the reference tool cell for cell.
//!
//! ## Key Features
//!
//! - **GrADS parity**: same stencils, constants and arithmetic order, with a
//!   NaN border where GrADS leaves undefined values
//! - **Typed failures**: bad shapes and axis selectors are `Err` values
//! - **NetCDF front end**: read wind and scalar fields, write derived fields
//!
//! ## Module Organization
//!
//! - [`kinematics`]: the operators and the operator catalogue
//! - [`grid`]: constants, axis selector and coordinate meshes
//! - [`netcdf_io`]: reading horizontal fields and writing results
//! - [`metadata`]: file and grid inspection
//! - [`summary`]: statistics over derived fields
//! - [`console`]: where progress and warning lines are printed
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust
//! use ndarray::{array, Array2};
//! use ru_grads::prelude::*;
//!
//! let lat = array![-10.0, 0.0, 10.0];
//! let lon = array![-10.0, 0.0, 10.0];
//! let u = Array2::<f64>::ones((3, 3));
//! let v = Array2::<f64>::ones((3, 3));
//!
//! let div = horizontal_divergence(u.view(), v.view(), lat.view(), lon.view()).unwrap();
//! assert_eq!(div[[1, 1]], 0.0);
//! assert!(div[[0, 0]].is_nan());
//! ```

pub mod console;
pub mod errors;
pub mod grid;
pub mod kinematics;
pub mod metadata;
pub mod netcdf_io;
pub mod summary;

pub use errors::*;
pub use grid::{CoordinateMesh, DiffAxis, DEG_TO_RAD, EARTH_RADIUS};
pub use kinematics::{
    centered_difference, centered_difference_index, horizontal_advection, horizontal_divergence,
    relative_vorticity, CenteredDifference, DerivativeOp, DerivativeResult,
};

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::errors::{GradsError, Result};
    pub use crate::grid::{CoordinateMesh, DiffAxis};
    pub use crate::kinematics::{
        centered_difference, horizontal_advection, horizontal_divergence, relative_vorticity,
        CenteredDifference, DerivativeOp, DerivativeResult, GridOptions,
    };
    pub use crate::netcdf_io::{NetCDFWriter, Selection};
    pub use crate::summary::FieldSummary;
}
