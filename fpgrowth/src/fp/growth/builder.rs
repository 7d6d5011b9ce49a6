use super::tree::{FPTree, Item};
use std::collections::{HashMap, HashSet};

/// Occurrence count per item.
pub type FrequencyTable<T> = HashMap<T, usize>;

/// Count every item occurrence. A transaction listing an item twice counts
/// it twice.
pub fn count_frequencies<T: Item>(transactions: &[Vec<T>]) -> FrequencyTable<T> {
    tally(transactions.iter().map(|transaction| (transaction.as_slice(), 1)))
}

pub(crate) fn tally<'a, T, I>(weighted: I) -> FrequencyTable<T>
where
    T: Item + 'a,
    I: IntoIterator<Item = (&'a [T], usize)>,
{
    let mut item_counts: FrequencyTable<T> = HashMap::new();

    for (items, weight) in weighted {
        for item in items {
            *item_counts.entry(item.clone()).or_insert(0) += weight;
        }
    }

    item_counts
}

/// Items whose count is at least `min_count`.
pub fn filter_by_support<T: Item>(frequencies: &FrequencyTable<T>, min_count: usize) -> HashSet<T> {
    frequencies
        .iter()
        .filter_map(|(item, &count)| (count >= min_count).then(|| item.clone()))
        .collect()
}

/// Drop infrequent items, order the rest by descending frequency (ties by
/// ascending item) and discard transactions left empty. Surviving
/// transactions keep their relative order.
pub fn project_transactions<T: Item>(
    transactions: &[Vec<T>],
    frequencies: &FrequencyTable<T>,
    frequent_items: &HashSet<T>,
) -> Vec<Vec<T>> {
    transactions
        .iter()
        .filter_map(|transaction| project(transaction, frequencies, frequent_items))
        .collect()
}

fn project<T: Item>(
    items: &[T],
    frequencies: &FrequencyTable<T>,
    frequent_items: &HashSet<T>,
) -> Option<Vec<T>> {
    let mut filtered: Vec<T> = items
        .iter()
        .filter(|&item| frequent_items.contains(item))
        .cloned()
        .collect();

    if filtered.is_empty() {
        return None;
    }

    let frequency = |item: &T| frequencies.get(item).copied().unwrap_or(0);
    filtered.sort_by(|a, b| frequency(b).cmp(&frequency(a)).then_with(|| a.cmp(b)));
    Some(filtered)
}

/// Insert already projected transactions into a fresh tree.
pub fn build_tree<T: Item>(transactions: &[Vec<T>]) -> FPTree<T> {
    let mut fp_tree = FPTree::new();
    for transaction in transactions {
        fp_tree.insert_transaction(transaction, 1);
    }
    fp_tree
}

/// Count, filter, project and insert: the full top-level tree construction.
pub fn build_fp_tree<T: Item>(transactions: &[Vec<T>], min_count: usize) -> FPTree<T> {
    let frequencies = count_frequencies(transactions);
    let frequent_items = filter_by_support(&frequencies, min_count);
    let projected = project_transactions(transactions, &frequencies, &frequent_items);
    build_tree(&projected)
}

/// Build the conditional tree for a weighted conditional pattern base.
///
/// A path of weight `w` stands for `w` identical paths; counting and
/// insertion add the weight instead of repeating the path.
pub fn build_conditional_fp_tree<T: Item>(
    prefix_paths: &[(Vec<T>, usize)],
    min_count: usize,
) -> FPTree<T> {
    let frequencies = tally(prefix_paths.iter().map(|(path, count)| (path.as_slice(), *count)));
    let frequent_items = filter_by_support(&frequencies, min_count);

    let mut conditional_tree = FPTree::new();

    for (path, count) in prefix_paths {
        if let Some(projected) = project(path, &frequencies, &frequent_items) {
            conditional_tree.insert_transaction(&projected, *count);
        }
    }

    conditional_tree
}
