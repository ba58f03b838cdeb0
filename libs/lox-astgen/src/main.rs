//! `generate-ast`: writes the Lox node model to a source file.
//!
//! ```text
//! generate-ast [--output <PATH>] [--check] [--verbose]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::constants::DEFAULT_OUTPUT_PATH;
use lox_astgen::{generate_lox_ast, sync_generated, GenerateError};

#[derive(Debug, Parser)]
#[command(
    name = "generate-ast",
    version,
    about = "Generates the Lox expression and statement node model"
)]
struct Cli {
    /// Destination file; overwritten if it exists.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Compare the destination with a fresh generation instead of writing.
    #[arg(long)]
    check: bool,

    /// Log each parsed variant and emitted grammar.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, GenerateError> {
    let source = generate_lox_ast()?;
    let outcome = sync_generated(&cli.output, &source, cli.check)?;
    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
