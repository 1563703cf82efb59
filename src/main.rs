//! Entry point for the ru_grads application.
//! Handles CLI parsing, file loading, and dispatches operators or metadata inspection.

use clap::Parser;
use netcdf::open;
use ru_grads::kinematics::{compute_from_file, GridOptions};
use ru_grads::metadata::{describe_grid, describe_variable, list_variables_and_dimensions, print_metadata};
use ru_grads::netcdf_io::{write_result_to_netcdf, Selection};
use ru_grads::summary::FieldSummary;
use std::process::ExitCode;

mod cli;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let operation = args.operation()?;

    let console = args.console();

    let file = open(&args.file)?;
    if args.verbose {
        console.line(format!("✅ Opened NetCDF file: {}", args.file.display()));
    }

    if args.list_vars {
        list_variables_and_dimensions(&file)?;
    }
    if let Some(var) = &args.describe {
        describe_variable(&file, var)?;
    }
    if args.grid {
        describe_grid(&file, args.lat_name.as_deref(), args.lon_name.as_deref())?;
    }

    let Some((op, vars)) = operation else {
        if !args.list_vars && args.describe.is_none() && !args.grid {
            print_metadata(&file)?;
        }
        return Ok(());
    };

    let options = GridOptions {
        lat_name: args.lat_name.clone(),
        lon_name: args.lon_name.clone(),
        selection: Selection::new(args.select.clone()),
        verbose: args.verbose,
        console,
    };

    let result = compute_from_file(&file, op, &vars, &options)?;
    let var_name = result.variable_name();
    let summary = FieldSummary::from_field(&result.data);

    if summary.infinite > 0 {
        console.line(format!(
            "⚠ {} cell(s) of '{}' are infinite (pole or zero grid spacing)",
            summary.infinite, var_name
        ));
    }

    if let Some(output_path) = &args.output_netcdf {
        write_result_to_netcdf(&result, &file, output_path)?;
        console.line(format!("✅ Saved '{}' to {}", var_name, output_path.display()));
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.to_json(&var_name))?);
    } else {
        summary.print(&var_name);
    }

    Ok(())
}
