use ndarray::ArrayView2;

/// Convert a binary transaction matrix (rows are transactions, columns are
/// items, non-zero means present) into column-index transactions.
pub fn transactions_from_matrix(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}
