//! Split command implementation
//!
//! Writes one mono WAV file per channel of a multichannel input.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use wavsplit_format::report::format_duration;

use crate::demux::{split_file, SplitOptions, SplitReport};
use crate::json_output::{JsonError, SplitOutputJson};

/// Run the split command
///
/// # Arguments
/// * `input` - Path to the multichannel WAV file
/// * `out_dir` - Output directory (default: the input's directory)
/// * `force` - Overwrite existing output files
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, out_dir: Option<&str>, force: bool, json_output: bool) -> Result<ExitCode> {
    let mut options = SplitOptions::new(input).with_overwrite(force);
    if let Some(dir) = out_dir {
        options = options.with_out_dir(PathBuf::from(dir));
    }

    if json_output {
        run_json(&options)
    } else {
        run_human(&options)
    }
}

/// Run split with human-readable (colored) output
fn run_human(options: &SplitOptions) -> Result<ExitCode> {
    println!("{} {}", "Splitting:".cyan().bold(), options.input.display());

    let report = split_file(options)?;
    print_summary(&report);

    Ok(ExitCode::SUCCESS)
}

/// Run split with machine-readable JSON output
fn run_json(options: &SplitOptions) -> Result<ExitCode> {
    let output = split_json(options);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn split_json(options: &SplitOptions) -> SplitOutputJson {
    let input = options.input.display().to_string();
    match split_file(options) {
        Ok(report) => SplitOutputJson::success(&input, &report),
        Err(e) => {
            let error = JsonError::from_split(e).with_file(&input);
            SplitOutputJson::failure(&input, vec![error])
        }
    }
}

fn print_summary(report: &SplitReport) {
    let source = &report.source;
    println!(
        "  {} {} ch, {} Hz, {} bit, {}",
        "Source:".dimmed(),
        source.num_channels(),
        source.sample_rate(),
        source.bits_per_sample(),
        format_duration(source.duration())
    );
    println!(
        "  {} {} bytes per channel",
        "Mono data:".dimmed(),
        report.mono.data_size()
    );
    if report.stats.padding > 0 {
        println!(
            "  {} padded each output with {} zero bytes",
            "warning:".yellow().bold(),
            report.stats.padding
        );
    }

    println!("\n{}", "Wrote:".green().bold());
    for output in &report.outputs {
        println!("  {:>4}  {}", output.label.cyan(), output.path.display());
    }
}
