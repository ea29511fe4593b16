//! Generate command implementation
//!
//! Packs six tone textures into the two hatch maps and writes them to disk.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tampack::{GenerateReport, TamGenerator};

use super::json_output::{GenerateOutput, JsonError};
use super::PackOptions;

/// Run the generate command
///
/// # Arguments
/// * `options` - Inputs, output location and encoder choices
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(options: &PackOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(options: &PackOptions) -> Result<ExitCode> {
    let generator = TamGenerator::new(options.to_config()?);

    println!("{}", "Generating TAM textures".cyan().bold());
    for (i, input) in generator.config().inputs.iter().enumerate() {
        println!("  {} {}", format!("Tone {}:", i).dimmed(), input.display());
    }

    let report = generator.run()?;
    print_report(&report);

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(options: &PackOptions) -> Result<ExitCode> {
    let result = options
        .to_config()
        .and_then(|config| TamGenerator::new(config).run().map_err(Into::into));

    let (output, code) = match result {
        Ok(report) => (GenerateOutput::success(report), ExitCode::SUCCESS),
        Err(e) => (
            GenerateOutput::failure(vec![JsonError::from_anyhow(&e)]),
            ExitCode::from(1),
        ),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

fn print_report(report: &GenerateReport) {
    println!();
    println!("{} {}x{}", "Size:".dimmed(), report.width, report.height);
    for map in &report.outputs {
        println!(
            "  {} {} {}",
            "->".green(),
            map.path.display(),
            format!("({})", &map.hash[..16]).dimmed()
        );
    }
    println!("\n{}", "TAM textures generated successfully!".green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use std::path::PathBuf;

    fn tones(dir: &std::path::Path, sizes: [(u32, u32); 6]) -> Vec<PathBuf> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| {
                let path = dir.join(format!("t{}.png", i));
                GrayImage::from_pixel(w, h, Luma([i as u8 * 10])).save(&path).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_generate_writes_both_maps() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let options = PackOptions {
            inputs: tones(tmp.path(), [(4, 4); 6]),
            out_dir: Some(out.clone()),
            ..PackOptions::default()
        };

        let code = run(&options, false).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.join("Hatch0.png").is_file());
        assert!(out.join("Hatch1.png").is_file());
    }

    #[test]
    fn test_generate_json_reports_failure_as_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sizes = [(4, 4); 6];
        sizes[3] = (2, 2);
        let out = tmp.path().join("out");
        let options = PackOptions {
            inputs: tones(tmp.path(), sizes),
            out_dir: Some(out.clone()),
            ..PackOptions::default()
        };

        let code = run(&options, true).unwrap();

        assert_eq!(code, ExitCode::from(1));
        assert!(!out.exists());
    }

    #[test]
    fn test_generate_human_propagates_validation_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut inputs = tones(tmp.path(), [(4, 4); 6]);
        inputs.pop();
        let options = PackOptions {
            inputs,
            out_dir: Some(tmp.path().join("out")),
            ..PackOptions::default()
        };

        let err = run(&options, false).unwrap_err();
        assert!(err.to_string().contains("Expected 6 input textures, got 5"));
    }
}
