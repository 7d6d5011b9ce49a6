use crate::error::{FpError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parse one transaction per line, items separated by whitespace.
///
/// Blank lines become empty transactions so they still count towards the
/// total used by fractional supports.
pub fn parse_transactions<R: BufRead>(reader: R) -> io::Result<Vec<Vec<String>>> {
    reader
        .lines()
        .map(|line| line.map(|line| line.split_whitespace().map(str::to_owned).collect()))
        .collect()
}

pub fn load_transactions(path: &Path) -> Result<Vec<Vec<String>>> {
    let read_error = |source| FpError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let transactions = parse_transactions(BufReader::new(file)).map_err(read_error)?;
    debug!(path = %path.display(), transactions = transactions.len(), "loaded transactions");
    Ok(transactions)
}
