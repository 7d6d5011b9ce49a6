use super::growth::Item;
use super::storage::Patterns;

/// Emit `prefix + c` for every non-empty combination `c` of a single-chain
/// tree's nodes, smallest combinations first.
///
/// `path` is root-first `(item, count)`; a combination's support is the
/// smallest count among its nodes, i.e. that of the deepest one.
pub fn generate_combinations_from_path<T: Item>(
    path: &[(T, usize)],
    prefix: &[T],
    patterns: &mut Patterns<T>,
) {
    for k in 1..=path.len() {
        let mut callback = |combination: &[usize]| {
            let mut pattern = Vec::with_capacity(prefix.len() + combination.len());
            pattern.extend_from_slice(prefix);
            pattern.extend(combination.iter().map(|&idx| path[idx].0.clone()));
            let support = combination
                .iter()
                .map(|&idx| path[idx].1)
                .min()
                .unwrap_or(0);
            patterns.push(&pattern, support);
        };
        generate_combinations_recursive(path.len(), k, 0, &mut Vec::with_capacity(k), &mut callback);
    }
}

/// Call `callback` with every `k`-subset of `0..n` as ascending indices.
pub fn generate_combinations_recursive<F>(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..n {
        current.push(i);
        generate_combinations_recursive(n, k, i + 1, current, callback);
        current.pop();
    }
}
