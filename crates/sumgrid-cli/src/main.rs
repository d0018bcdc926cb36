//! sumgrid CLI - evaluate small sum-formula sheets

mod demo;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use sumgrid::display::render_results;
use sumgrid::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sumgrid")]
#[command(author, version, about = "Evaluate sheets of constant and sum cells")]
struct Cli {
    /// Reuse results of cells already evaluated in the same pass
    #[arg(long, global = true)]
    memoize: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration scenarios
    Demo,

    /// Execute a command script and print every cell
    Run {
        /// Script file, or `-` for stdin
        input: PathBuf,

        /// Print the final cells as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = CalculationOptions {
        memoize: cli.memoize,
        ..Default::default()
    };

    match cli.command {
        Commands::Demo => run_demo(&options),
        Commands::Run { input, json } => run_script(&input, json, &options),
    }
}

fn run_demo(options: &CalculationOptions) -> Result<()> {
    let mut out = io::stdout().lock();
    for (index, scenario) in demo::scenarios().iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "== {}", scenario.name)?;

        let (values, _) = (scenario.build)().calculate(options);
        for line in render_results(&values) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn run_script(input: &Path, json: bool, options: &CalculationOptions) -> Result<()> {
    let source = script::read_source(input, io::stdin().lock())?;
    let commands = script::parse_script(&source)?;
    tracing::debug!(commands = commands.len(), "parsed script");

    let stats = script::execute(commands, options, json, &mut io::stdout().lock())?;

    eprintln!(
        "Evaluated {} cells ({} errors, {} on cycles)",
        stats.cell_count, stats.ref_errors, stats.circular_references
    );

    Ok(())
}
