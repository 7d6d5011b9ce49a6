//! Shallow footprint estimates.
//!
//! Only the inline size of each element is counted; heap data owned by the
//! items themselves (e.g. `String` buffers) is not.

use super::growth::{FPNode, FPTree, Item, NodeChain};
use super::storage::Patterns;
use std::mem::size_of;

const HASH_MAP_OVERHEAD: usize = 48;

pub fn estimate_fp_tree_size<T: Item>(tree: &FPTree<T>) -> usize {
    let nodes = tree.nodes.len();
    let node_size = size_of::<FPNode<T>>() + HASH_MAP_OVERHEAD;
    // every node but the root is some parent's child entry
    let child_entries = nodes.saturating_sub(1) * size_of::<(T, usize)>();
    let header_entries = tree.header_table.len() * size_of::<(T, NodeChain)>();
    nodes * node_size + child_entries + header_entries + HASH_MAP_OVERHEAD
}

pub fn estimate_itemset_storage_size<T: Clone>(patterns: &Patterns<T>) -> usize {
    let offset_size = size_of::<(usize, usize)>();
    let support_size = size_of::<usize>();
    patterns.len() * (offset_size + support_size) + patterns.item_slots() * size_of::<T>()
}
