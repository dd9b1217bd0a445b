//! CLI definitions and entry point

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use gravycharge::report;

/// gravycharge - Calculate GRAVY and net charge for peptides
#[derive(Parser, Debug)]
#[command(
    name = "gravycharge",
    disable_version_flag = true,
    version,
    about = "Calculate GRAVY and net charge for peptides",
    long_about = "Score peptide sequences, one per line, and emit a CSV report.\n\n\
                  Each line is treated as a separate sequence; the output holds the\n\
                  sequence, its GRAVY score (Kyte-Doolittle hydropathy scale), and\n\
                  its approximate net charge at pH 7.0."
)]
pub struct Cli {
    /// Input sequence file [default: stdin]
    pub input_file: Option<PathBuf>,

    /// Output file [default: stdout]
    pub output_file: Option<PathBuf>,

    /// Show program's version number and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Input resolves before output, so a bad input path fails first
    let input: Box<dyn BufRead> = match &cli.input_file {
        Some(path) => {
            log::debug!("reading sequences from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("cannot open input file '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        },
        None => {
            log::debug!("reading sequences from stdin");
            Box::new(io::stdin().lock())
        },
    };

    let output: Box<dyn Write> = match &cli.output_file {
        Some(path) => {
            log::debug!("writing report to {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("cannot open output file '{}'", path.display()))?;
            Box::new(BufWriter::new(file))
        },
        None => Box::new(io::stdout().lock()),
    };

    report::write_report(input, output).context("failed to write report")?;
    Ok(())
}
