//! FP-Growth frequent itemset mining.
//!
//! Transactions are counted, filtered by a minimum support, projected into
//! descending-frequency order and compressed into an [`FPTree`]. The tree is
//! then mined recursively through conditional pattern bases, emitting every
//! frequent itemset into a [`Patterns`] accumulator.
//!
//! ```
//! use fpgrowth::fp_growth;
//!
//! let transactions = vec![
//!     vec!["a", "b"],
//!     vec!["b", "c"],
//!     vec!["a", "b", "c"],
//! ];
//! let patterns = fp_growth(&transactions, 2);
//! assert!(patterns.iter().any(|p| p.items == ["b"] && p.support == 3));
//! ```

pub mod config;
pub mod error;
pub mod fp;
pub mod io;

#[cfg(feature = "python")]
mod python;

pub use config::{MinSupport, MiningConfig};
pub use error::{FpError, Result};
pub use fp::{
    FPNode, FPTree, HeaderTable, Item, Miner, MiningOutcome, Pattern, Patterns, fp_growth,
    fp_growth_with_config, transactions_from_matrix,
};
