//! Command-line driver: load transaction files, mine each against every
//! requested threshold, print the reports and optionally append them to a
//! results file.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fpgrowth::io::{append_report, load_transactions, render_report, run_dataset};
use fpgrowth::{MinSupport, MiningConfig};

#[derive(Parser, Debug)]
#[command(name = "fpgrowth", about = "Mine frequent itemsets with FP-Growth")]
struct Cli {
    /// Transaction file, one whitespace-separated transaction per line
    #[arg(long = "input", short = 'i', required = true)]
    inputs: Vec<PathBuf>,

    /// Minimum support: an absolute count (`6000`) or a fraction (`0.05`)
    #[arg(long = "min-support", short = 's', required = true)]
    min_supports: Vec<MinSupport>,

    /// Append report headers to this file
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Print every mined pattern after its report
    #[arg(long)]
    print_patterns: bool,

    /// Mine top-level items in parallel
    #[arg(long)]
    parallel: bool,

    /// Enumerate single-path trees directly
    #[arg(long)]
    single_path: bool,
}

fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for input in &cli.inputs {
        let transactions = load_transactions(input)
            .with_context(|| format!("failed to load {}", input.display()))?;
        let dataset = dataset_name(input);

        for &min_support in &cli.min_supports {
            let config = MiningConfig::new(min_support)
                .with_parallel(cli.parallel)
                .with_single_path_shortcut(cli.single_path);
            let (report, patterns) = run_dataset(&dataset, &transactions, &config)
                .with_context(|| format!("mining {} at min support {}", dataset, min_support))?;

            let shown = cli.print_patterns.then_some(&patterns);
            writer
                .write_all(render_report(&report, shown).as_bytes())
                .context("failed to write report")?;

            if let Some(output) = &cli.output {
                append_report(output, &render_report::<String>(&report, None))?;
            }
        }
    }

    writer.flush().context("failed to flush output")?;
    Ok(())
}
