pub mod builder;
pub mod mining;
pub mod tree;

pub use builder::{
    FrequencyTable, build_conditional_fp_tree, build_fp_tree, build_tree, count_frequencies,
    filter_by_support, project_transactions,
};
pub use mining::{Miner, MiningOutcome, fp_growth, fp_growth_with_config};
pub use tree::{FPNode, FPTree, HeaderTable, Item, NodeChain, NodeLinks};
