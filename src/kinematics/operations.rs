//! Operator catalogue and result container
//!
//! This module names the four GrADS operators and bundles a computed field with
//! the grid and variable information needed to write it back out.

use super::{centered_difference, horizontal_advection, horizontal_divergence, relative_vorticity};
use crate::errors::{GradsError, Result};
use crate::grid::DiffAxis;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Supported finite-difference operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeOp {
    /// Centered difference along one dimension
    CenteredDifference(DiffAxis),
    /// Horizontal divergence of (u, v)
    Divergence,
    /// Relative vorticity of (u, v)
    Vorticity,
    /// Horizontal advection of t by (u, v)
    Advection,
}

impl DerivativeOp {
    /// GrADS function name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CenteredDifference(_) => "cdiff",
            Self::Divergence => "hdivg",
            Self::Vorticity => "hcurl",
            Self::Advection => "hadv",
        }
    }

    #[must_use]
    pub fn long_name(self) -> String {
        match self {
            Self::CenteredDifference(axis) => {
                format!("centered difference along {}", axis.as_str())
            }
            Self::Divergence => "horizontal divergence".to_string(),
            Self::Vorticity => "relative vorticity".to_string(),
            Self::Advection => "horizontal advection".to_string(),
        }
    }

    /// Number of input fields the operator consumes
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::CenteredDifference(_) => 1,
            Self::Divergence | Self::Vorticity => 2,
            Self::Advection => 3,
        }
    }

    /// Units of the output given the units of the differenced scalar, if known
    #[must_use]
    pub fn units(self, scalar_units: Option<&str>) -> String {
        match (self, scalar_units) {
            (Self::CenteredDifference(_), Some(units)) => units.to_string(),
            (Self::CenteredDifference(_), None) => "1".to_string(),
            (Self::Divergence | Self::Vorticity, _) => "s-1".to_string(),
            (Self::Advection, Some(units)) => format!("{units} s-1"),
            (Self::Advection, None) => "s-1".to_string(),
        }
    }

    /// Output variable name for the given inputs, e.g. `hdivg_u_v`
    #[must_use]
    pub fn variable_name(self, inputs: &[String]) -> String {
        match self {
            Self::CenteredDifference(axis) => {
                format!("{}_{}_{}", self.as_str(), axis.as_str(), inputs.join("_"))
            }
            _ => format!("{}_{}", self.as_str(), inputs.join("_")),
        }
    }

    /// Run the operator on `fields` (in `u, v, t` order).
    ///
    /// # Errors
    ///
    /// Returns an error if the number of fields does not match [`Self::arity`],
    /// or whatever the operator itself reports.
    pub fn apply(
        self,
        fields: &[ArrayView2<'_, f64>],
        lat: ArrayView1<'_, f64>,
        lon: ArrayView1<'_, f64>,
    ) -> Result<Array2<f64>> {
        if fields.len() != self.arity() {
            return Err(GradsError::Generic(format!(
                "{} expects {} field(s), got {}",
                self.as_str(),
                self.arity(),
                fields.len()
            )));
        }

        match self {
            Self::CenteredDifference(axis) => centered_difference(&fields[0], axis),
            Self::Divergence => horizontal_divergence(fields[0], fields[1], lat, lon),
            Self::Vorticity => relative_vorticity(fields[0], fields[1], lat, lon),
            Self::Advection => horizontal_advection(fields[0], fields[1], fields[2], lat, lon),
        }
    }
}

/// Result of an operator applied to gridded variables
#[derive(Debug, Clone)]
pub struct DerivativeResult {
    /// The computed field, indexed `[lat, lon]`
    pub data: Array2<f64>,
    /// The operation that was performed
    pub operation: DerivativeOp,
    /// Input variable names, in `u, v, t` order
    pub input_variables: Vec<String>,
    /// Name of the latitude dimension / coordinate
    pub lat_name: String,
    /// Name of the longitude dimension / coordinate
    pub lon_name: String,
    /// Latitude coordinate variable in the input file
    pub lat_var: String,
    /// Longitude coordinate variable in the input file
    pub lon_var: String,
    pub lat: Array1<f64>,
    pub lon: Array1<f64>,
    /// Units of the output field
    pub units: String,
}

impl DerivativeResult {
    /// Name for the output variable
    #[must_use]
    pub fn variable_name(&self) -> String {
        self.operation.variable_name(&self.input_variables)
    }

    /// Get the shape of the result data
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn names_follow_grads() {
        assert_eq!(DerivativeOp::Divergence.as_str(), "hdivg");
        assert_eq!(DerivativeOp::Vorticity.as_str(), "hcurl");
        assert_eq!(DerivativeOp::Advection.as_str(), "hadv");
        assert_eq!(DerivativeOp::CenteredDifference(DiffAxis::Lat).as_str(), "cdiff");

        let inputs = vec!["u".to_string(), "v".to_string()];
        assert_eq!(DerivativeOp::Divergence.variable_name(&inputs), "hdivg_u_v");
        assert_eq!(
            DerivativeOp::CenteredDifference(DiffAxis::Lon).variable_name(&["t".to_string()]),
            "cdiff_lon_t"
        );
    }

    #[test]
    fn units() {
        assert_eq!(DerivativeOp::Vorticity.units(Some("m s-1")), "s-1");
        assert_eq!(DerivativeOp::Advection.units(Some("K")), "K s-1");
        assert_eq!(DerivativeOp::CenteredDifference(DiffAxis::Lat).units(Some("K")), "K");
        assert_eq!(DerivativeOp::CenteredDifference(DiffAxis::Lat).units(None), "1");
    }

    #[test]
    fn apply_checks_arity() {
        let lat = array![0.0, 1.0, 2.0];
        let lon = array![0.0, 1.0, 2.0];
        let field = Array2::<f64>::zeros((3, 3));

        let result = DerivativeOp::Advection.apply(&[field.view(), field.view()], lat.view(), lon.view());
        assert!(matches!(result, Err(GradsError::Generic(_))));

        let out = DerivativeOp::Vorticity
            .apply(&[field.view(), field.view()], lat.view(), lon.view())
            .unwrap();
        assert_eq!(out[[1, 1]], 0.0);
    }
}
