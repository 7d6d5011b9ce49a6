use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::tree::{FPTree, Item};
use crate::config::MiningConfig;
use crate::error::Result;
use crate::fp::combinations::generate_combinations_from_path;
use crate::fp::storage::Patterns;
use rayon::prelude::*;
use tracing::{debug, instrument, trace, warn};

/// Mine every frequent itemset of `transactions` with an absolute threshold.
///
/// Patterns come out in mining order: for each tree, its items from least to
/// most frequent, each followed depth-first by its conditional tree.
/// A `min_count` of 0 accepts every item present and enumerates close to the
/// full powerset of each transaction.
pub fn fp_growth<T: Item>(transactions: &[Vec<T>], min_count: usize) -> Patterns<T> {
    let fp_tree = build_fp_tree(transactions, min_count);
    let mut patterns = Patterns::new();
    Miner::new(min_count).mine(&fp_tree, &[], &mut patterns);
    patterns
}

/// Result of [`fp_growth_with_config`].
#[derive(Debug, Clone)]
pub struct MiningOutcome<T> {
    pub patterns: Patterns<T>,
    /// Resolved absolute threshold.
    pub min_count: usize,
    pub fp_tree_nodes: usize,
    pub estimated_tree_bytes: usize,
}

/// Mine with a full [`MiningConfig`]. Fails only when a fractional support
/// is out of range.
#[instrument(level = "debug", skip(transactions), fields(transactions = transactions.len()))]
pub fn fp_growth_with_config<T: Item + Send + Sync>(
    transactions: &[Vec<T>],
    config: &MiningConfig,
) -> Result<MiningOutcome<T>> {
    let min_count = config.min_support.resolve(transactions.len())?;

    let fp_tree = build_fp_tree(transactions, min_count);
    debug!(
        min_count,
        nodes = fp_tree.node_count(),
        frequent_items = fp_tree.header_table.len(),
        "built FP-tree"
    );

    let miner = Miner::new(min_count).with_single_path_shortcut(config.single_path_shortcut);
    let patterns = if config.parallel {
        miner.mine_parallel(&fp_tree)
    } else {
        let mut patterns = Patterns::new();
        miner.mine(&fp_tree, &[], &mut patterns);
        patterns
    };
    debug!(patterns = patterns.len(), "mining finished");

    Ok(MiningOutcome {
        patterns,
        min_count,
        fp_tree_nodes: fp_tree.node_count(),
        estimated_tree_bytes: crate::fp::memory::estimate_fp_tree_size(&fp_tree),
    })
}

/// Recursive conditional-tree miner.
#[derive(Debug, Clone, Copy)]
pub struct Miner {
    min_count: usize,
    single_path_shortcut: bool,
}

impl Miner {
    /// Warns when `min_count` is 0, which enumerates every itemset of every
    /// transaction.
    pub fn new(min_count: usize) -> Self {
        if min_count == 0 {
            warn!("minimum support is 0; every itemset of every transaction will be enumerated");
        }
        Self {
            min_count,
            single_path_shortcut: false,
        }
    }

    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }

    /// Emit `prefix + [item]` for every item of `fp_tree` and recurse into
    /// each item's conditional tree. An empty tree emits nothing.
    pub fn mine<T: Item>(&self, fp_tree: &FPTree<T>, prefix: &[T], patterns: &mut Patterns<T>) {
        if fp_tree.is_empty() {
            return;
        }

        if self.takes_single_path_shortcut(fp_tree) {
            generate_combinations_from_path(&fp_tree.single_path(), prefix, patterns);
            return;
        }

        for (item, support) in fp_tree.items_by_ascending_support() {
            self.mine_item(fp_tree, item, support, prefix, patterns);
        }
    }

    /// Same output sequence as [`Self::mine`] with an empty prefix, but the
    /// top-level items are mined on the rayon pool. Each branch builds its own
    /// conditional trees and fills a local buffer; buffers are concatenated
    /// in item order.
    pub fn mine_parallel<T: Item + Send + Sync>(&self, fp_tree: &FPTree<T>) -> Patterns<T> {
        let mut patterns = Patterns::new();

        if fp_tree.is_empty() {
            return patterns;
        }

        if self.takes_single_path_shortcut(fp_tree) {
            generate_combinations_from_path(&fp_tree.single_path(), &[], &mut patterns);
            return patterns;
        }

        let branches: Vec<Patterns<T>> = fp_tree
            .items_by_ascending_support()
            .into_par_iter()
            .map(|(item, support)| {
                let mut local = Patterns::new();
                self.mine_item(fp_tree, item, support, &[], &mut local);
                local
            })
            .collect();

        for branch in branches {
            patterns.append(branch);
        }
        patterns
    }

    /// A chain repeating an item (duplicates within a transaction) is mined
    /// by recursion so the item's support sums over its nodes.
    fn takes_single_path_shortcut<T: Item>(&self, fp_tree: &FPTree<T>) -> bool {
        self.single_path_shortcut
            && fp_tree.has_single_path()
            && fp_tree.header_table.len() == fp_tree.node_count()
    }

    fn mine_item<T: Item>(
        &self,
        fp_tree: &FPTree<T>,
        item: T,
        support: usize,
        prefix: &[T],
        patterns: &mut Patterns<T>,
    ) {
        let prefix_paths = fp_tree.prefix_paths(&item);

        let mut new_pattern = Vec::with_capacity(prefix.len() + 1);
        new_pattern.extend_from_slice(prefix);
        new_pattern.push(item);
        patterns.push(&new_pattern, support);

        if prefix_paths.is_empty() {
            return;
        }

        let conditional_tree = build_conditional_fp_tree(&prefix_paths, self.min_count);
        trace!(
            depth = new_pattern.len(),
            paths = prefix_paths.len(),
            nodes = conditional_tree.node_count(),
            "conditional tree"
        );

        if !conditional_tree.is_empty() {
            self.mine(&conditional_tree, &new_pattern, patterns);
        }
    }
}
