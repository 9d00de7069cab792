//! Info command implementation
//!
//! Prints the header of a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use wavsplit_format::{channel_labels, parse_header, FormatError, Header};

use crate::json_output::{error_codes, InfoOutput, JsonError};

/// Run the info command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn read_header(input: &str) -> Result<Header> {
    let file = File::open(input).with_context(|| format!("Failed to open {}", input))?;
    let header = parse_header(&mut BufReader::new(file))
        .with_context(|| format!("Failed to read WAV header from {}", input))?;
    Ok(header)
}

/// Run info with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);

    let header = read_header(input)?;

    println!();
    print!("{}", header);
    println!(
        "{} {}",
        "Channels:".dimmed(),
        channel_labels(&header).join(" ")
    );
    if !header.is_consistent() {
        println!(
            "{} byte rate or block align disagrees with channels, rate and bits",
            "warning:".yellow().bold()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Run info with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let file = match File::open(input) {
        Ok(f) => f,
        Err(e) => {
            let error = JsonError::new(error_codes::FILE_READ, format!("Failed to open: {}", e))
                .with_file(input);
            let output = InfoOutput::failure(input, vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let output = match parse_header(&mut BufReader::new(file)) {
        Ok(header) => InfoOutput::success(input, &header),
        Err(e) => InfoOutput::failure(input, vec![format_error(&e, input)]),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn format_error(err: &FormatError, input: &str) -> JsonError {
    JsonError::from_format(err).with_file(input)
}
