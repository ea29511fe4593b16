//! Check command implementation
//!
//! Loads and validates the six tone textures without writing anything.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tampack::TamGenerator;

use super::json_output::{CheckOutput, JsonError};
use super::PackOptions;

/// Run the check command
///
/// # Returns
/// Exit code: 0 if the inputs are usable, 1 otherwise
pub fn run(options: &PackOptions, json_output: bool) -> Result<ExitCode> {
    let result = options
        .to_config()
        .and_then(|config| TamGenerator::new(config).check().map_err(Into::into));

    if json_output {
        let (output, code) = match result {
            Ok((width, height)) => (CheckOutput::success(width, height), ExitCode::SUCCESS),
            Err(e) => (
                CheckOutput::failure(vec![JsonError::from_anyhow(&e)]),
                ExitCode::from(1),
            ),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(code);
    }

    match result {
        Ok((width, height)) => {
            println!(
                "{} all 6 tone textures are {}x{}",
                "ok".green().bold(),
                width,
                height
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {:#}", "invalid".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}
