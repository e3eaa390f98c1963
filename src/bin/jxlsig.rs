mod cli_utils;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{cmd_check, cmd_inspect};

#[derive(Parser)]
#[command(name = "jxlsig")]
#[command(
    about = "Detect JPEG XL files by their signature",
    long_about = "jxlsig - Detect JPEG XL files by their signature bytes\n\n\
    Reads at most the first 12 bytes of each input and classifies it the same\n\
    way libjxl's JxlSignatureCheck does. Nothing is decoded.\n\n\
    Results:\n\
      • codestream        bare JPEG XL codestream (FF 0A)\n\
      • container         ISOBMFF container (00 00 00 0C 'JXL ' ...)\n\
      • invalid           not JPEG XL\n\
      • not_enough_bytes  input too short to decide\n\n\
    Examples:\n\
      jxlsig check Original/*.jxl\n\
      jxlsig check --format json -j auto downloads/*\n\
      jxlsig inspect image.jxl --json"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether files are JPEG XL (exit 0 only if all are)
    Check {
        /// Files to check, or "-" for stdin
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output format: text (default), json (NDJSON), or csv
        #[arg(long, default_value = "text")]
        format: String,

        /// Quiet mode - no output, only exit code (0 = all JPEG XL, 1 = otherwise)
        #[arg(short, long)]
        quiet: bool,

        /// Number of worker threads (default: 1, use "auto" for all cores)
        #[arg(short = 'j', long)]
        threads: Option<String>,

        /// Show per-file timing and a summary on stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the signature bytes and classification of a single input
    Inspect {
        /// File to inspect, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            inputs,
            format,
            quiet,
            threads,
            verbose,
        } => cmd_check(inputs, format, quiet, threads, verbose),
        Commands::Inspect { input, json } => cmd_inspect(input, json),
    }
}
