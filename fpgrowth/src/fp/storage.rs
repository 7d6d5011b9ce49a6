use std::collections::BTreeMap;

/// Append-only store of mined patterns in emission order.
///
/// Items of all patterns sit in one flat vector; `offsets` holds the
/// `(start, len)` of each pattern. Item order inside a pattern is kept as
/// emitted (prefix first, newest item last).
#[derive(Debug, Clone)]
pub struct Patterns<T> {
    items: Vec<T>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// Borrowed view of one stored pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern<'a, T> {
    pub items: &'a [T],
    pub support: usize,
}

impl<T> Default for Patterns<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }
}

impl<T: Clone> Patterns<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `pattern` with its support and return its index.
    pub fn push(&mut self, pattern: &[T], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(pattern);
        self.offsets.push((start, pattern.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    /// Move every pattern of `other` to the end of `self`.
    pub fn append(&mut self, other: Patterns<T>) {
        let base = self.items.len();
        self.items.extend(other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, len)| (base + start, len)));
        self.supports.extend(other.supports);
    }

    pub fn get(&self, idx: usize) -> Option<Pattern<'_, T>> {
        let &(start, len) = self.offsets.get(idx)?;
        Some(Pattern {
            items: self.items.get(start..start + len)?,
            support: *self.supports.get(idx)?,
        })
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Total number of stored item slots across all patterns.
    pub fn item_slots(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pattern<'_, T>> + '_ {
        (0..self.len()).filter_map(move |idx| self.get(idx))
    }

    /// Number of patterns per itemset size.
    pub fn count_by_size(&self) -> BTreeMap<usize, usize> {
        let mut sizes = BTreeMap::new();
        for &(_, len) in &self.offsets {
            *sizes.entry(len).or_insert(0) += 1;
        }
        sizes
    }
}
