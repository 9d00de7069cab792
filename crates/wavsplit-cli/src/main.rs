//! wavsplit CLI - inspect WAV headers and split multichannel files
//!
//! This binary reads WAVE headers (canonical PCM and WAVEFORMATEXTENSIBLE)
//! and writes one mono file per channel of a multichannel recording.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavsplit_cli::{commands, logging};

/// wavsplit - WAV header inspector and channel splitter
#[derive(Parser)]
#[command(name = "wavsplit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header of a WAV file
    Info {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Split a multichannel WAV file into one mono file per channel
    Split {
        /// Path to the multichannel WAV file
        #[arg(short, long)]
        input: String,

        /// Output directory (default: the input file's directory)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Overwrite existing output files
        #[arg(short = 'f', long)]
        force: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Info { input, json } => commands::info::run(&input, json),
        Commands::Split {
            input,
            out_dir,
            force,
            json,
        } => commands::split::run(&input, out_dir.as_deref(), force, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
