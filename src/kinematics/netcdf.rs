//! Operators applied to NetCDF variables
//!
//! Locates the latitude/longitude coordinates, reads the input fields on that
//! grid and runs a [`DerivativeOp`] over them.

use super::operations::{DerivativeOp, DerivativeResult};
use crate::console::Console;
use crate::errors::{GradsError, Result};
use crate::netcdf_io::{
    find_coordinate, read_axis, read_horizontal_field, Selection, LAT_CANDIDATES, LON_CANDIDATES,
};
use ndarray::Array2;
use ::netcdf::File;

/// How to find the horizontal grid in a file
#[derive(Debug, Clone, Default)]
pub struct GridOptions {
    /// Latitude coordinate variable, auto-detected when `None`
    pub lat_name: Option<String>,
    /// Longitude coordinate variable, auto-detected when `None`
    pub lon_name: Option<String>,
    /// Indices for every dimension other than lat/lon
    pub selection: Selection,
    pub verbose: bool,
    /// Where verbose progress lines go
    pub console: Console,
}

/// Computes `op` over `var_names` (in `u, v, t` order) read from `file`.
///
/// Fields stored `[lon, lat]` are transposed so the result is always indexed
/// `[lat, lon]`.
///
/// # Errors
///
/// Returns an error if the variables or coordinates cannot be found, a field
/// is not on the lat/lon grid, or the operator rejects the input.
pub fn compute_from_file(
    file: &File,
    op: DerivativeOp,
    var_names: &[String],
    options: &GridOptions,
) -> Result<DerivativeResult> {
    if var_names.len() != op.arity() {
        return Err(GradsError::Generic(format!(
            "{} expects {} variable(s), got {}",
            op.as_str(),
            op.arity(),
            var_names.len()
        )));
    }

    let lat_var = find_coordinate(file, options.lat_name.as_deref(), LAT_CANDIDATES)?;
    let lon_var = find_coordinate(file, options.lon_name.as_deref(), LON_CANDIDATES)?;
    let (lat, lat_dim) = read_axis(file, &lat_var)?;
    let (lon, lon_dim) = read_axis(file, &lon_var)?;

    if options.verbose {
        options.console.line(format!(
            "🚀 Grid: {} = {} points, {} = {} points",
            lat_var,
            lat.len(),
            lon_var,
            lon.len()
        ));
    }

    let mut fields: Vec<Array2<f64>> = Vec::with_capacity(var_names.len());
    let mut scalar_units = None;

    for name in var_names {
        let field = read_horizontal_field(file, name, &options.selection)?;

        let data = if field.dims[0] == lat_dim && field.dims[1] == lon_dim {
            field.data
        } else if field.dims[0] == lon_dim && field.dims[1] == lat_dim {
            if options.verbose {
                options.console.line(format!(
                    "⚠ '{}' is stored [{}, {}], transposing",
                    name, lon_dim, lat_dim
                ));
            }
            field.data.reversed_axes().as_standard_layout().into_owned()
        } else {
            let missing = if field.dims.contains(&lat_dim) {
                &lon_dim
            } else {
                &lat_dim
            };
            return Err(GradsError::DimensionNotFound {
                var: name.clone(),
                dim: missing.clone(),
            });
        };

        // Units of the last field: the differenced scalar for cdiff and hadv
        scalar_units = field.units;
        fields.push(data);
    }

    if options.verbose {
        options.console.line(format!(
            "⚡ Computing {} of [{}]",
            op.long_name(),
            var_names.join(", ")
        ));
    }

    let views: Vec<_> = fields.iter().map(|f| f.view()).collect();
    let data = op.apply(&views, lat.view(), lon.view())?;

    Ok(DerivativeResult {
        data,
        operation: op,
        input_variables: var_names.to_vec(),
        lat_name: lat_dim,
        lon_name: lon_dim,
        lat_var,
        lon_var,
        lat,
        lon,
        units: op.units(scalar_units.as_deref()),
    })
}
