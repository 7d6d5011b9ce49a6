use crate::config::{MinSupport, MiningConfig};
use crate::error::{FpError, Result};
use crate::fp::memory::estimate_itemset_storage_size;
use crate::fp::{Item, Patterns, fp_growth_with_config};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Summary of one mining run over one dataset and threshold.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub dataset: String,
    pub min_support: MinSupport,
    pub min_count: usize,
    pub pattern_count: usize,
    pub patterns_by_size: BTreeMap<usize, usize>,
    pub elapsed: Duration,
    /// Estimated bytes held by the top-level tree and the mined patterns.
    pub estimated_bytes: usize,
}

/// Mine `transactions` and time the run.
#[instrument(skip(transactions, config), fields(transactions = transactions.len(), min_support = %config.min_support))]
pub fn run_dataset<T: Item + Send + Sync>(
    dataset: &str,
    transactions: &[Vec<T>],
    config: &MiningConfig,
) -> Result<(RunReport, Patterns<T>)> {
    let start = Instant::now();
    let outcome = fp_growth_with_config(transactions, config)?;
    let elapsed = start.elapsed();

    let report = RunReport {
        dataset: dataset.to_string(),
        min_support: config.min_support,
        min_count: outcome.min_count,
        pattern_count: outcome.patterns.len(),
        patterns_by_size: outcome.patterns.count_by_size(),
        elapsed,
        estimated_bytes: outcome.estimated_tree_bytes
            + estimate_itemset_storage_size(&outcome.patterns),
    };
    info!(
        patterns = report.pattern_count,
        tree_nodes = outcome.fp_tree_nodes,
        elapsed_ms = elapsed.as_millis() as u64,
        "mining run finished"
    );

    Ok((report, outcome.patterns))
}

/// Render the report header, then one `[a, b] (support)` line per pattern
/// when `patterns` is given. Ends with a blank line.
pub fn render_report<T: Clone + Display>(report: &RunReport, patterns: Option<&Patterns<T>>) -> String {
    let threshold = match report.min_support {
        MinSupport::Count(count) => count.to_string(),
        MinSupport::Fraction(fraction) => format!("{} ({})", fraction, report.min_count),
    };
    let mut out = format!(
        "==== dataset: {} | min support: {} ====\nfrequent itemsets: {}\nelapsed: {} ms\nmemory: {} KB\n",
        report.dataset,
        threshold,
        report.pattern_count,
        report.elapsed.as_millis(),
        report.estimated_bytes / 1024,
    );

    if let Some(patterns) = patterns {
        for pattern in patterns.iter() {
            let items: Vec<String> = pattern.items.iter().map(ToString::to_string).collect();
            out.push_str(&format!("[{}] ({})\n", items.join(", "), pattern.support));
        }
    }

    out.push('\n');
    out
}

/// Append `text` to `path`, creating the file if needed.
pub fn append_report(path: &Path, text: &str) -> Result<()> {
    let write_error = |source| FpError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)
}
