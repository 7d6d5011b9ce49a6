//! Mining configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{FpError, Result};

/// Minimum support threshold, either absolute or relative to the number of
/// transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    /// An itemset is frequent when at least this many transactions contain it.
    Count(usize),
    /// Fraction of all transactions, rounded up to a count.
    Fraction(f64),
}

impl MinSupport {
    /// Resolve to an absolute transaction count.
    ///
    /// `Fraction(f)` becomes `ceil(f * num_transactions)`.
    pub fn resolve(self, num_transactions: usize) -> Result<usize> {
        match self {
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) => {
                if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                    return Err(FpError::InvalidSupportFraction(fraction));
                }
                Ok((fraction * num_transactions as f64).ceil() as usize)
            }
        }
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Fraction(0.01)
    }
}

impl FromStr for MinSupport {
    type Err = FpError;

    /// `"6000"` parses as a count, `"0.25"` as a fraction.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let parsed = if trimmed.contains('.') {
            trimmed.parse::<f64>().ok().map(MinSupport::Fraction)
        } else {
            trimmed.parse::<usize>().ok().map(MinSupport::Count)
        };
        let support = parsed.ok_or_else(|| FpError::InvalidSupportArg(s.to_string()))?;
        // fractions are range-checked here so bad input fails before loading data
        support.resolve(0)?;
        Ok(support)
    }
}

impl fmt::Display for MinSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinSupport::Count(count) => write!(f, "{}", count),
            MinSupport::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}

/// Knobs for a mining run.
#[derive(Debug, Clone, Default)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    /// Mine the top-level items on the rayon pool.
    pub parallel: bool,
    /// Enumerate single-chain trees directly instead of recursing.
    pub single_path_shortcut: bool,
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }
}
