//! Loading transactions and reporting runs around the miner.

pub mod loader;
pub mod report;

pub use loader::{load_transactions, parse_transactions};
pub use report::{RunReport, append_report, render_report, run_dataset};
