//! Defines command-line interface options using `clap` for ru_grads.

use clap::Parser;
use ru_grads::console::Console;
use ru_grads::netcdf_io::DimSelection;
use ru_grads::{DerivativeOp, DiffAxis};
use std::path::PathBuf;

/// GrADS finite-difference functions on NetCDF lat/lon fields
#[derive(Parser, Debug)]
#[command(
    version,
    name = "ru_grads",
    about = "Centered differences, divergence, vorticity and advection on NetCDF grids"
)]
pub struct Args {
    /// Path to the NetCDF file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Centered difference of a variable along an axis, formatted as <var>:<lat|lon|0|1>
    #[arg(long, value_parser = parse_cdiff_arg)]
    pub cdiff: Option<(String, DiffAxis)>,

    /// Horizontal divergence of a wind, formatted as <u>:<v>
    #[arg(long, value_parser = parse_wind_arg)]
    pub hdivg: Option<(String, String)>,

    /// Relative vorticity of a wind, formatted as <u>:<v>
    #[arg(long, value_parser = parse_wind_arg)]
    pub hcurl: Option<(String, String)>,

    /// Horizontal advection of a scalar, formatted as <u>:<v>:<t>
    #[arg(long, value_parser = parse_adv_arg)]
    pub hadv: Option<(String, String, String)>,

    /// Latitude coordinate variable (default: lat, latitude or y)
    #[arg(long)]
    pub lat_name: Option<String>,

    /// Longitude coordinate variable (default: lon, longitude or x)
    #[arg(long)]
    pub lon_name: Option<String>,

    /// Pin a non-horizontal dimension to one index, formatted as <dim>=<index>. Repeatable.
    #[arg(long = "select", value_parser = parse_select_arg)]
    pub select: Vec<DimSelection>,

    /// Path to save result as NetCDF. If not set, prints a summary to terminal.
    #[arg(long)]
    pub output_netcdf: Option<PathBuf>,

    /// Print the result summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// List all variables and dimensions in the NetCDF file
    #[arg(long)]
    pub list_vars: bool,

    /// Describe a specific variable (data type, shape, and attributes)
    #[arg(long)]
    pub describe: Option<String>,

    /// Show the detected latitude/longitude grid
    #[arg(long)]
    pub grid: bool,
}

impl Args {
    /// Where progress and warning lines go for this run
    pub fn console(&self) -> Console {
        Console::for_json(self.json)
    }

    /// The requested operator and its input variables, if any.
    ///
    /// Only one operator may be requested per run.
    pub fn operation(&self) -> Result<Option<(DerivativeOp, Vec<String>)>, String> {
        let mut requested = Vec::new();

        if let Some((var, axis)) = &self.cdiff {
            requested.push((DerivativeOp::CenteredDifference(*axis), vec![var.clone()]));
        }
        if let Some((u, v)) = &self.hdivg {
            requested.push((DerivativeOp::Divergence, vec![u.clone(), v.clone()]));
        }
        if let Some((u, v)) = &self.hcurl {
            requested.push((DerivativeOp::Vorticity, vec![u.clone(), v.clone()]));
        }
        if let Some((u, v, t)) = &self.hadv {
            requested.push((DerivativeOp::Advection, vec![u.clone(), v.clone(), t.clone()]));
        }

        match requested.len() {
            0 => Ok(None),
            1 => Ok(requested.pop()),
            _ => Err("Only one of --cdiff, --hdivg, --hcurl, --hadv may be given".to_string()),
        }
    }
}

fn parse_wind_arg(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [u, v] if !u.is_empty() && !v.is_empty() => Ok((u.to_string(), v.to_string())),
        _ => Err("Invalid format: Expected '<u>:<v>'.".to_string()),
    }
}

fn parse_adv_arg(s: &str) -> Result<(String, String, String), String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [u, v, t] if parts.iter().all(|p| !p.is_empty()) => {
            Ok((u.to_string(), v.to_string(), t.to_string()))
        }
        _ => Err("Invalid format: Expected '<u>:<v>:<t>'.".to_string()),
    }
}

fn parse_cdiff_arg(s: &str) -> Result<(String, DiffAxis), String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (var, axis) = match parts.as_slice() {
        [var, axis] if !var.is_empty() => (var.to_string(), *axis),
        _ => return Err("Invalid format: Expected '<variable>:<axis>'.".to_string()),
    };

    let axis = match axis {
        "lat" | "y" => DiffAxis::Lat,
        "lon" | "x" => DiffAxis::Lon,
        other => {
            let index = other
                .parse::<usize>()
                .map_err(|_| format!("Invalid axis '{other}': use lat, lon, 0 or 1"))?;
            DiffAxis::try_from(index).map_err(|e| e.to_string())?
        }
    };
    Ok((var, axis))
}

fn parse_select_arg(s: &str) -> Result<DimSelection, String> {
    DimSelection::parse(s).map_err(|e| e.to_string())
}
