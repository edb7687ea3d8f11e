//! LLM extraction-accuracy checker CLI.
//!
//! This binary runs the single-shot comparison pipeline. It performs:
//! 1. **Load:** Read the UDB ground-truth document (YAML) and the LLM output
//!    document (JSON).
//! 2. **Compare:** Partition the two name sets and compute precision, recall,
//!    and F1.
//! 3. **Report:** Write the markdown accuracy report, creating parent
//!    directories as needed.
//!
//! Any failure is fatal: the error is printed and the process exits with a
//! non-zero code. Diagnostics go to stderr via `tracing`; set `RUST_LOG` to
//! raise the default `warn` filter.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use udbcheck_core::Result;
use udbcheck_core::compare;
use udbcheck_core::loader;
use udbcheck_core::report;

#[derive(Parser, Debug)]
#[command(
    name = "udbcheck",
    version,
    about = "Compare LLM-extracted CSR parameters against UDB ground truth",
    long_about = "Compares the architectural parameters an LLM extracted from a RISC-V CSR \
description against the Unified Database ground truth, computes precision/recall/F1, and \
writes a markdown accuracy report.\n\nExample:\n  udbcheck --llm-output results/gpt4_mstatus.json \\\n           --udb-file udb/csr/mstatus.yaml \\\n           --report analysis/gpt4_mstatus.md \\\n           --llm-name \"GPT-4\""
)]
struct Cli {
    /// LLM output document (JSON).
    #[arg(long)]
    llm_output: PathBuf,

    /// UDB ground-truth document (YAML).
    #[arg(long)]
    udb_file: PathBuf,

    /// Destination path for the markdown report.
    #[arg(long)]
    report: PathBuf,

    /// Name of the LLM under test, used in the report heading.
    #[arg(long, default_value = "Unknown LLM")]
    llm_name: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr logger; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the pipeline: load both documents, compare, write the report.
///
/// Progress goes to stdout; the report lands at the path given on the
/// command line.
fn run(cli: &Cli) -> Result<()> {
    println!("[*] Loading UDB ground truth: {}", cli.udb_file.display());
    let udb_params = loader::udb::load(&cli.udb_file)?;
    println!("    {} parameters", udb_params.len());

    println!("[*] Loading LLM output: {}", cli.llm_output.display());
    let llm_params = loader::llm::load(&cli.llm_output)?;
    println!("    {} parameters", llm_params.len());

    println!("[*] Comparing parameter sets...");
    let result = compare::compare(&udb_params, &llm_params);

    println!();
    println!("[*] Results:");
    println!(
        "    precision {:.2}%  recall {:.2}%  f1 {:.3}",
        result.precision * 100.0,
        result.recall * 100.0,
        result.f1_score
    );
    println!(
        "    identified {}/{}, missed {}, hallucinated {}, misclassified {}",
        result.correctly_identified.len(),
        result.total_udb,
        result.missed.len(),
        result.hallucinations.len(),
        result.misclassified.len()
    );

    report::write(&result, &cli.llm_name, &cli.report)?;
    println!("\n[*] Report written: {}", cli.report.display());
    Ok(())
}
