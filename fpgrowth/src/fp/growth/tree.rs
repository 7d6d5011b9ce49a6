use std::collections::HashMap;
use std::collections::hash_map::Keys;
use std::hash::Hash;

/// Anything usable as a transaction item.
///
/// `Ord` is only used to break ties between items of equal frequency.
pub trait Item: Clone + Eq + Hash + Ord {}

impl<T: Clone + Eq + Hash + Ord> Item for T {}

/// One node of an [`FPTree`].
///
/// Nodes live in the tree's arena and refer to each other by index: the
/// arena owns every node, `parent` and `next` are plain back/side links.
#[derive(Debug, Clone)]
pub struct FPNode<T> {
    /// `None` only for the root.
    pub item: Option<T>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<T, usize>,
    /// Next node holding the same item, in creation order.
    pub next: Option<usize>,
}

impl<T> FPNode<T> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next: None,
        }
    }

    pub fn new_item(item: T, count: usize, parent: Option<usize>) -> Self {
        Self {
            item: Some(item),
            count,
            parent,
            children: HashMap::new(),
            next: None,
        }
    }
}

/// First and last node of one item's node chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeChain {
    pub head: usize,
    pub tail: usize,
}

/// Index from item to the chain of tree nodes holding it.
#[derive(Debug, Clone)]
pub struct HeaderTable<T> {
    chains: HashMap<T, NodeChain>,
}

impl<T> Default for HeaderTable<T> {
    fn default() -> Self {
        Self {
            chains: HashMap::new(),
        }
    }
}

impl<T: Item> HeaderTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.chains.contains_key(item)
    }

    pub fn head(&self, item: &T) -> Option<usize> {
        self.chains.get(item).map(|chain| chain.head)
    }

    pub fn chain(&self, item: &T) -> Option<NodeChain> {
        self.chains.get(item).copied()
    }

    /// Items in unspecified order.
    pub fn items(&self) -> Keys<'_, T, NodeChain> {
        self.chains.keys()
    }

    /// Append `node_index` to the item's chain. Returns the previous tail,
    /// whose `next` link the caller must point at the new node.
    fn link(&mut self, item: T, node_index: usize) -> Option<usize> {
        match self.chains.get_mut(&item) {
            Some(chain) => {
                let previous_tail = chain.tail;
                chain.tail = node_index;
                Some(previous_tail)
            }
            None => {
                self.chains.insert(
                    item,
                    NodeChain {
                        head: node_index,
                        tail: node_index,
                    },
                );
                None
            }
        }
    }
}

/// Prefix tree over projected transactions, plus its header table.
#[derive(Debug, Clone)]
pub struct FPTree<T> {
    pub nodes: Vec<FPNode<T>>,
    pub header_table: HeaderTable<T>,
    pub root_index: usize,
}

impl<T: Item> Default for FPTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Item> FPTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HeaderTable::new(),
            root_index: 0,
        }
    }

    pub fn root(&self) -> &FPNode<T> {
        &self.nodes[self.root_index]
    }

    /// Number of item nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.header_table.is_empty()
    }

    /// Insert one transaction `count` times over.
    ///
    /// Items must already be in projection order. Shared prefixes reuse the
    /// existing path; each newly created node is appended to the tail of its
    /// item's header chain.
    pub fn insert_transaction(&mut self, transaction: &[T], count: usize) {
        let mut current_index = self.root_index;

        for item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += count;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item.clone(), count, Some(current_index)));
                self.nodes[current_index]
                    .children
                    .insert(item.clone(), new_index);
                if let Some(previous_tail) = self.header_table.link(item.clone(), new_index) {
                    self.nodes[previous_tail].next = Some(new_index);
                }
                current_index = new_index;
            }
        }
    }

    /// Walk the header chain of `item`.
    pub fn node_links(&self, item: &T) -> NodeLinks<'_, T> {
        NodeLinks {
            nodes: &self.nodes,
            current: self.header_table.head(item),
        }
    }

    /// Sum of counts over every node holding `item`.
    pub fn item_support(&self, item: &T) -> usize {
        self.node_links(item).map(|node| node.count).sum()
    }

    /// Header items with their supports, least frequent first; equal
    /// supports fall back to item order.
    pub fn items_by_ascending_support(&self) -> Vec<(T, usize)> {
        let mut items: Vec<(T, usize)> = self
            .header_table
            .items()
            .map(|item| (item.clone(), self.item_support(item)))
            .collect();
        items.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        items
    }

    /// Conditional pattern base of `item`: one root-first ancestor path per
    /// node, weighted by that node's count. Nodes hanging off the root
    /// contribute nothing.
    pub fn prefix_paths(&self, item: &T) -> Vec<(Vec<T>, usize)> {
        self.node_links(item)
            .filter_map(|node| {
                let mut path = Vec::new();
                let mut current = node.parent;

                while let Some(index) = current {
                    let ancestor = &self.nodes[index];
                    match &ancestor.item {
                        Some(ancestor_item) => path.push(ancestor_item.clone()),
                        None => break,
                    }
                    current = ancestor.parent;
                }

                path.reverse();
                (!path.is_empty()).then_some((path, node.count))
            })
            .collect()
    }

    pub fn has_single_path(&self) -> bool {
        self.nodes.iter().all(|node| node.children.len() <= 1)
    }

    /// Items and counts from the root downwards, following the first child
    /// at each level. Only meaningful when [`Self::has_single_path`] holds.
    pub fn single_path(&self) -> Vec<(T, usize)> {
        let mut path = Vec::new();
        let mut current = self.root().children.values().next().copied();

        while let Some(index) = current {
            let node = &self.nodes[index];
            if let Some(item) = &node.item {
                path.push((item.clone(), node.count));
            }
            current = node.children.values().next().copied();
        }
        path
    }
}

/// Iterator over one item's header chain.
#[derive(Debug, Clone)]
pub struct NodeLinks<'a, T> {
    nodes: &'a [FPNode<T>],
    current: Option<usize>,
}

impl<'a, T> Iterator for NodeLinks<'a, T> {
    type Item = &'a FPNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next;
        Some(node)
    }
}
