pub mod combinations;
pub mod growth;
pub mod matrix;
pub mod memory;
pub mod storage;


pub use growth::{
    FPNode, FPTree, HeaderTable, Item, Miner, MiningOutcome, fp_growth, fp_growth_with_config,
};
pub use matrix::transactions_from_matrix;
pub use storage::{Pattern, Patterns};
