//! NetCDF I/O for horizontal fields and derivative results
//!
//! Reading pins every non-horizontal dimension (time, level, ...) to a single
//! index so the operators always see a 2-D `[lat, lon]` field. Writing
//! produces a self-describing file with the grid coordinates and the derived
//! variable.

use crate::errors::{GradsError, Result};
use crate::kinematics::DerivativeResult;
use chrono::Utc;
use ndarray::{Array1, Array2};
use netcdf::{create, AttributeValue, File, Variable};
use std::{fs, path::Path};

/// Names tried, in order, when no latitude coordinate is given
pub const LAT_CANDIDATES: &[&str] = &["lat", "latitude", "y"];

/// Names tried, in order, when no longitude coordinate is given
pub const LON_CANDIDATES: &[&str] = &["lon", "longitude", "x"];

/// A dimension pinned to a single index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimSelection {
    pub dimension: String,
    pub index: usize,
}

impl DimSelection {
    /// Parse `dim=index`
    ///
    /// # Errors
    ///
    /// Returns [`GradsError::InvalidSelection`] for anything not of that form.
    pub fn parse(s: &str) -> Result<Self> {
        let (dimension, index) = s.split_once('=').ok_or_else(|| GradsError::InvalidSelection {
            message: format!("Expected '<dimension>=<index>', got '{s}'"),
        })?;

        if dimension.is_empty() {
            return Err(GradsError::InvalidSelection {
                message: format!("Missing dimension name in '{s}'"),
            });
        }

        let index = index
            .parse::<usize>()
            .map_err(|_| GradsError::InvalidSelection {
                message: format!("Invalid index for dimension '{dimension}': '{index}'"),
            })?;

        Ok(Self {
            dimension: dimension.to_string(),
            index,
        })
    }
}

/// Set of pinned dimensions applied to every variable that is read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub pins: Vec<DimSelection>,
}

impl Selection {
    #[must_use]
    pub fn new(pins: Vec<DimSelection>) -> Self {
        Self { pins }
    }

    /// Index pinned for `dimension`, if any
    #[must_use]
    pub fn index_of(&self, dimension: &str) -> Option<usize> {
        self.pins
            .iter()
            .find(|p| p.dimension == dimension)
            .map(|p| p.index)
    }
}

/// A 2-D field read from a NetCDF variable
#[derive(Debug, Clone)]
pub struct HorizontalField {
    pub data: Array2<f64>,
    /// Names of the two free dimensions, in storage order
    pub dims: [String; 2],
    pub units: Option<String>,
}

/// Read `var_name` as a 2-D field, pinning the dimensions named in `selection`.
///
/// Packed variables are unpacked as `x * scale_factor + add_offset`.
///
/// # Errors
///
/// - [`GradsError::VariableNotFound`] if the variable does not exist
/// - [`GradsError::InvalidSelection`] if a pinned index is out of range or the
///   variable has more than 4 dimensions
/// - [`GradsError::ShapeError`] unless exactly two dimensions remain free
pub fn read_horizontal_field(
    file: &File,
    var_name: &str,
    selection: &Selection,
) -> Result<HorizontalField> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| GradsError::VariableNotFound {
            var: var_name.to_string(),
        })?;

    let mut ranges = Vec::new();
    let mut free = Vec::new();

    for dim in var.dimensions() {
        let name = dim.name().to_string();
        let len = dim.len();

        match selection.index_of(&name) {
            Some(index) if index >= len => {
                return Err(GradsError::InvalidSelection {
                    message: format!(
                        "Index {} out of range for dimension '{}' of '{}' (length {})",
                        index, name, var_name, len
                    ),
                });
            }
            Some(index) => ranges.push(index..index + 1),
            None => {
                ranges.push(0..len);
                free.push((name, len));
            }
        }
    }

    if free.len() != 2 {
        return Err(GradsError::ShapeError { ndim: free.len() });
    }

    let values: Vec<f64> = match ranges.len() {
        2 => var.get_values::<f64, _>((ranges[0].clone(), ranges[1].clone()))?,
        3 => var.get_values::<f64, _>((
            ranges[0].clone(),
            ranges[1].clone(),
            ranges[2].clone(),
        ))?,
        4 => var.get_values::<f64, _>((
            ranges[0].clone(),
            ranges[1].clone(),
            ranges[2].clone(),
            ranges[3].clone(),
        ))?,
        _ => {
            return Err(GradsError::InvalidSelection {
                message: format!(
                    "Unsupported number of dimensions for '{}' (max 4)",
                    var_name
                ),
            })
        }
    };

    let values: Vec<f64> = match unpacking(&var) {
        Some((scale, offset)) => values.into_iter().map(|x| x * scale + offset).collect(),
        None => values,
    };

    let [(dim0, len0), (dim1, len1)]: [(String, usize); 2] = free
        .try_into()
        .map_err(|_| GradsError::Generic("free dimensions changed while reading".to_string()))?;

    Ok(HorizontalField {
        data: Array2::from_shape_vec((len0, len1), values)?,
        dims: [dim0, dim1],
        units: string_attribute(&var, "units"),
    })
}

/// Pick a coordinate variable: `preferred` if given, else the first of
/// `candidates` present in the file.
///
/// # Errors
///
/// Returns [`GradsError::VariableNotFound`] if nothing matches.
pub fn find_coordinate(file: &File, preferred: Option<&str>, candidates: &[&str]) -> Result<String> {
    if let Some(name) = preferred {
        return file
            .variable(name)
            .map(|_| name.to_string())
            .ok_or_else(|| GradsError::VariableNotFound {
                var: name.to_string(),
            });
    }

    candidates
        .iter()
        .find(|name| file.variable(name).is_some())
        .map(|name| name.to_string())
        .ok_or_else(|| GradsError::VariableNotFound {
            var: candidates.join("|"),
        })
}

/// Read a 1-D coordinate variable, returning its values and its dimension name
///
/// # Errors
///
/// Returns an error if the variable is missing or not 1-D.
pub fn read_axis(file: &File, name: &str) -> Result<(Array1<f64>, String)> {
    let var = file
        .variable(name)
        .ok_or_else(|| GradsError::VariableNotFound {
            var: name.to_string(),
        })?;

    let dims = var.dimensions();
    if dims.len() != 1 {
        return Err(GradsError::Generic(format!(
            "Coordinate variable '{}' must be 1-D, but it has {} dimensions",
            name,
            dims.len()
        )));
    }
    let dim_name = dims[0].name().to_string();

    let values = var.get_values::<f64, _>(..)?;
    Ok((Array1::from_vec(values), dim_name))
}

/// `(scale_factor, add_offset)` of a packed variable, `None` if unpacked
fn unpacking(var: &Variable) -> Option<(f64, f64)> {
    let scale = numeric_attribute(var, "scale_factor");
    let offset = numeric_attribute(var, "add_offset");
    if scale.is_none() && offset.is_none() {
        return None;
    }
    Some((scale.unwrap_or(1.0), offset.unwrap_or(0.0)))
}

/// Scalar numeric attribute of a variable as `f64`, if present
pub fn numeric_attribute(var: &Variable, name: &str) -> Option<f64> {
    match var.attribute(name)?.value().ok()? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(f64::from(v)),
        AttributeValue::Int(v) => Some(f64::from(v)),
        AttributeValue::Short(v) => Some(f64::from(v)),
        _ => None,
    }
}

/// String-valued attribute of a variable, if present
pub fn string_attribute(var: &Variable, name: &str) -> Option<String> {
    match var.attribute(name)?.value().ok()? {
        AttributeValue::Str(s) => Some(s),
        _ => None,
    }
}

/// Writer for derivative results
pub struct NetCDFWriter<'a> {
    input_file: &'a File,
    output_path: &'a Path,
}

impl<'a> NetCDFWriter<'a> {
    /// Create a new NetCDF writer
    pub fn new(input_file: &'a File, output_path: &'a Path) -> Self {
        Self {
            input_file,
            output_path,
        }
    }

    /// Write the grid coordinates and the derived field to a fresh file.
    ///
    /// Coordinates are named after their dimensions; their `units`,
    /// `standard_name` and `long_name` come from the input coordinate
    /// variables. NaN cells are written as-is.
    pub fn write_result(&self, result: &DerivativeResult) -> Result<()> {
        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;

        file.add_dimension(&result.lat_name, result.lat.len())?;
        file.add_dimension(&result.lon_name, result.lon.len())?;

        let coords = [
            (&result.lat_name, &result.lat_var, &result.lat),
            (&result.lon_name, &result.lon_var, &result.lon),
        ];
        for (name, source, values) in coords {
            let mut coord = file.add_variable::<f64>(name, &[name.as_str()])?;
            if let Some(orig) = self.input_file.variable(source) {
                for attr in ["units", "standard_name", "long_name"] {
                    if let Some(value) = string_attribute(&orig, attr) {
                        coord.put_attribute(attr, value)?;
                    }
                }
            }
            coord.put(values.view(), ..)?;
        }

        let var_name = result.variable_name();
        let mut var = file.add_variable::<f64>(
            &var_name,
            &[result.lat_name.as_str(), result.lon_name.as_str()],
        )?;
        var.put_attribute("long_name", result.operation.long_name())?;
        var.put_attribute("units", result.units.clone())?;
        var.put_attribute("grads_function", result.operation.as_str())?;
        var.put_attribute("source_variables", result.input_variables.join(" "))?;
        var.put(result.data.view(), ..)?;

        file.add_attribute(
            "history",
            format!("Created by ru_grads on {}", Utc::now().to_rfc3339()),
        )?;

        Ok(())
    }
}

/// Writes a derivative result to a new NetCDF file.
pub fn write_result_to_netcdf(
    result: &DerivativeResult,
    input_file: &File,
    output_path: &Path,
) -> Result<()> {
    NetCDFWriter::new(input_file, output_path).write_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_selection() {
        let sel = DimSelection::parse("time=3").unwrap();
        assert_eq!(sel.dimension, "time");
        assert_eq!(sel.index, 3);

        assert!(DimSelection::parse("time").is_err());
        assert!(DimSelection::parse("=1").is_err());
        assert!(DimSelection::parse("lev=-1").is_err());
    }

    #[test]
    fn selection_lookup() {
        let selection = Selection::new(vec![
            DimSelection::parse("time=2").unwrap(),
            DimSelection::parse("lev=0").unwrap(),
        ]);
        assert_eq!(selection.index_of("lev"), Some(0));
        assert_eq!(selection.index_of("time"), Some(2));
        assert_eq!(selection.index_of("lat"), None);
    }
}
