//! NetCDF metadata inspection
//!
//! Lists variables and dimensions, describes a single variable, and reports
//! the horizontal grid the operators will run on.

use crate::errors::{GradsError, Result};
use crate::netcdf_io::{find_coordinate, read_axis, LAT_CANDIDATES, LON_CANDIDATES};
use ndarray::Array1;
use netcdf::{AttributeValue, File};

/// Spacing and extent of one coordinate axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisInfo {
    pub name: String,
    pub dimension: String,
    pub len: usize,
    pub first: f64,
    pub last: f64,
    /// Constant spacing, or `None` if the axis is irregular or too short
    pub spacing: Option<f64>,
}

impl AxisInfo {
    #[must_use]
    pub fn from_values(name: &str, dimension: &str, values: &Array1<f64>) -> Self {
        let len = values.len();
        let first = values.iter().next().copied().unwrap_or(f64::NAN);
        let last = values.iter().last().copied().unwrap_or(f64::NAN);

        let steps: Vec<f64> = values.windows(2).into_iter().map(|w| w[1] - w[0]).collect();
        let spacing = steps.first().copied().filter(|&step| {
            steps
                .iter()
                .all(|s| (s - step).abs() <= 1e-6 * step.abs().max(1.0))
        });

        Self {
            name: name.to_string(),
            dimension: dimension.to_string(),
            len,
            first,
            last,
            spacing,
        }
    }

    /// True if any value sits on a pole, where cos(lat) vanishes
    #[must_use]
    pub fn touches_pole(values: &Array1<f64>) -> bool {
        values.iter().any(|v| (v.abs() - 90.0).abs() < 1e-9)
    }
}

/// Prints global attributes and variables of a NetCDF file.
pub fn print_metadata(file: &File) -> Result<()> {
    println!("\n===== Global Attributes =====");
    for attr in file.attributes() {
        println!("- {}: {:?}", attr.name(), attr.value()?);
    }

    println!("\n===== Variables =====");
    for var in file.variables() {
        let dims: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| format!("{}[{}]", d.name(), d.len()))
            .collect();
        println!("- {} ({})", var.name(), dims.join(", "));
    }

    Ok(())
}

/// Lists all dimensions and variables, sorted by name.
pub fn list_variables_and_dimensions(file: &File) -> Result<()> {
    println!("\n Dimensions");
    println!("==============");

    let mut dimensions: Vec<_> = file.dimensions().collect();
    dimensions.sort_by(|a, b| a.name().cmp(&b.name()));

    if dimensions.is_empty() {
        println!("   (No dimensions found)");
    }
    for dim in dimensions {
        let unlimited = if dim.is_unlimited() { " (unlimited)" } else { "" };
        println!("    {} = {}{}", dim.name(), dim.len(), unlimited);
    }

    println!("\n Variables");
    println!("=============");

    let mut variables: Vec<_> = file.variables().collect();
    variables.sort_by(|a, b| a.name().cmp(&b.name()));

    if variables.is_empty() {
        println!("   (No variables found)");
    }
    for var in variables {
        let dims: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        let shape: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| d.len().to_string())
            .collect();

        println!(
            "    {} ({}): [{}] = ({})",
            var.name(),
            format!("{:?}", var.vartype()).to_lowercase(),
            dims.join(", "),
            shape.join(" × ")
        );

        if let Some(AttributeValue::Str(units)) =
            var.attribute("units").and_then(|a| a.value().ok())
        {
            println!("      └─ units: {}", units);
        }
    }

    println!("\n💡 Tip: Use --hdivg <u>:<v> or --hcurl <u>:<v> on wind components");

    Ok(())
}

/// Describes a variable: dimensions, shape and attributes.
pub fn describe_variable(file: &File, var_name: &str) -> Result<()> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| GradsError::VariableNotFound {
            var: var_name.to_string(),
        })?;

    println!("\n Variable Description: {}", var_name);
    println!("={}", "=".repeat(var_name.len() + 25));
    println!(" Data type: {}", format!("{:?}", var.vartype()).to_lowercase());

    let dims: Vec<String> = var
        .dimensions()
        .iter()
        .map(|d| format!("{}[{}]", d.name(), d.len()))
        .collect();
    if dims.is_empty() {
        println!(" Dimensions: (scalar)");
    } else {
        println!(" Dimensions: [{}]", dims.join(", "));
    }

    let attributes: Vec<_> = var.attributes().collect();
    if attributes.is_empty() {
        println!("\n  Attributes: (none)");
    } else {
        println!("\n  Attributes:");
        for attr in attributes {
            match attr.value() {
                Ok(AttributeValue::Str(s)) => println!("   • {}: \"{}\"", attr.name(), s),
                Ok(value) => println!("   • {}: {:?}", attr.name(), value),
                Err(e) => println!("   • {}: (error reading value: {})", attr.name(), e),
            }
        }
    }

    if var.dimensions().len() > 2 {
        let extra: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| d.name().to_string())
            .filter(|d| !LAT_CANDIDATES.contains(&d.as_str()) && !LON_CANDIDATES.contains(&d.as_str()))
            .collect();
        println!(
            "\n💡 Tip: Pin extra dimensions with --select, e.g. --select {}=0",
            extra.first().map(String::as_str).unwrap_or("time")
        );
    }

    Ok(())
}

/// Detects the lat/lon axes and returns their description.
pub fn grid_info(
    file: &File,
    lat_name: Option<&str>,
    lon_name: Option<&str>,
) -> Result<(AxisInfo, AxisInfo, bool)> {
    let lat_var = find_coordinate(file, lat_name, LAT_CANDIDATES)?;
    let lon_var = find_coordinate(file, lon_name, LON_CANDIDATES)?;
    let (lat, lat_dim) = read_axis(file, &lat_var)?;
    let (lon, lon_dim) = read_axis(file, &lon_var)?;

    Ok((
        AxisInfo::from_values(&lat_var, &lat_dim, &lat),
        AxisInfo::from_values(&lon_var, &lon_dim, &lon),
        AxisInfo::touches_pole(&lat),
    ))
}

/// Prints the horizontal grid the operators would use.
pub fn describe_grid(file: &File, lat_name: Option<&str>, lon_name: Option<&str>) -> Result<()> {
    let (lat, lon, polar) = grid_info(file, lat_name, lon_name)?;

    println!("\n Horizontal Grid");
    println!("=================");
    for axis in [&lat, &lon] {
        let spacing = axis
            .spacing
            .map(|s| format!("{s}°"))
            .unwrap_or_else(|| "irregular".to_string());
        println!(
            "    {} (dim '{}'): {} points, {} → {}, spacing {}",
            axis.name, axis.dimension, axis.len, axis.first, axis.last, spacing
        );
    }

    if lat.spacing.is_none() || lon.spacing.is_none() {
        println!("\n⚠ Irregular spacing: centered differences use the local spacing");
    }
    if polar {
        println!("⚠ Latitude axis reaches a pole: hdivg/hcurl/hadv give inf/NaN on that row");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn regular_axis_spacing() {
        let info = AxisInfo::from_values("lat", "lat", &array![-10.0, -5.0, 0.0, 5.0]);
        assert_eq!(info.len, 4);
        assert_eq!(info.first, -10.0);
        assert_eq!(info.last, 5.0);
        assert_eq!(info.spacing, Some(5.0));
    }

    #[test]
    fn irregular_axis_spacing() {
        let info = AxisInfo::from_values("lon", "lon", &array![0.0, 1.0, 3.0]);
        assert_eq!(info.spacing, None);
    }

    #[test]
    fn pole_detection() {
        assert!(AxisInfo::touches_pole(&array![80.0, 85.0, 90.0]));
        assert!(AxisInfo::touches_pole(&array![-90.0, 0.0]));
        assert!(!AxisInfo::touches_pole(&array![-89.5, 89.5]));
    }
}
