// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All extraction logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `extract` — builds input/output dataset files
//   2. `dump`    — prints the extracted corpus as JSON
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DumpArgs, ExtractArgs};

/// clap reads the fields and generates the parsing code via the
/// Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "igt-extract",
    version,
    about = "Turn FLExText interlinear exports into morphology training datasets."
)]
pub struct Cli {
    /// The subcommand to run (extract or dump)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args) => run_extract(args),
            Commands::Dump(args) => run_dump(args),
        }
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    use crate::application::extract_use_case::ExtractUseCase;

    let config = args.into_config()?;
    tracing::info!("Writing datasets to: {}", config.out_dir.display());

    let reports = ExtractUseCase::new(config).execute()?;

    for report in &reports {
        println!(
            "{}: {} lexemes, {} numerals, {} trainable, {} unannotated, {} files",
            report.name,
            report.stats.lexemes,
            report.stats.numerals,
            report.trainable,
            report.unannotated,
            report.written.len() * 2
        );
    }
    Ok(())
}

fn run_dump(args: DumpArgs) -> Result<()> {
    use crate::application::dump_use_case::DumpUseCase;

    let to_stdout = args.output.is_none();
    let json = DumpUseCase::new(args.input, args.output).execute()?;

    if to_stdout {
        println!("{json}");
    }
    Ok(())
}
