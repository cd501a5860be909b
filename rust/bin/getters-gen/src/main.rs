//! `getters-gen` — runs one generation pass over a declaration forest.
//!
//! Usage:
//!   getters-gen --forest <forest.json> --out <dir> [--config <getters.toml>] [--check]
//!
//! Diagnostics go to stderr. The process exits with status 1 if any
//! diagnostic blocked generation (errors, or warnings under
//! `warnings_as_errors`); sources for unaffected containers are still written.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use getters_codegen::validate::is_blocking;
use getters_codegen::{run, DirectorySink, GeneratorConfig, SourceRegistry, SourceSink};
use getters_ir::{Diagnostic, Forest};
use tracing::info;

/// Component getters code generator.
#[derive(Parser, Debug)]
#[command(name = "getters-gen", about = "Generate cached component accessors")]
struct Cli {
    /// Declaration forest (JSON) exported by the host compiler.
    #[arg(short, long)]
    forest: PathBuf,

    /// Output directory for generated sources.
    #[arg(short, long, required_unless_present = "check")]
    out: Option<PathBuf>,

    /// Generator config file (TOML). Missing file means defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report diagnostics only; write nothing.
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GeneratorConfig::load(path)?
        }
        None => GeneratorConfig::default(),
    };

    info!("Reading forest from {}", cli.forest.display());
    let content = std::fs::read_to_string(&cli.forest)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", cli.forest.display(), e))?;
    let forest = Forest::from_json(&content)?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut sink: Box<dyn SourceSink> = match (&cli.out, cli.check) {
        (Some(dir), false) => Box::new(DirectorySink::new(dir.clone())),
        _ => Box::new(SourceRegistry::new()),
    };
    let summary = run(&forest, &config, &mut diagnostics, &mut *sink)?;

    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }
    info!(
        "{} generated, {} suppressed",
        summary.generated, summary.suppressed
    );

    if diagnostics.iter().any(|d| is_blocking(d, &config)) {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
