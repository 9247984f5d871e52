use generational_arena::{Arena, Index};
use tracing::instrument;

/// Which child slot of the parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Tree node in the arena-based BST.
#[derive(Debug)]
pub struct ArenaNode {
    pub val: i32,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    pub left: Option<Index>,
    pub right: Option<Index>,
}

/// Arena-based binary search tree.
///
/// Same shape as the boxed tree from `sorted_array_to_bst`, but nodes live
/// in a generational arena and link by index. Construction uses an explicit
/// work stack, so input size is not bounded by call-stack depth.
#[derive(Debug)]
pub struct BstArena {
    arena: Arena<ArenaNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for BstArena {
    fn default() -> Self {
        Self::new()
    }
}

impl BstArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Builds a height-balanced BST from ascending `nums`, picking the lower
    /// middle of each range as the subtree root.
    #[instrument(level = "debug", skip(nums), fields(len = nums.len()))]
    pub fn from_sorted(nums: &[i32]) -> Self {
        let mut tree = Self {
            arena: Arena::with_capacity(nums.len()),
            root: None,
        };
        // (start, end exclusive, parent, side)
        let mut stack: Vec<(usize, usize, Option<(Index, Side)>)> = vec![(0, nums.len(), None)];

        while let Some((start, end, parent)) = stack.pop() {
            if start >= end {
                continue;
            }
            let mid = start + (end - start - 1) / 2;
            let idx = tree.insert_node(nums[mid], parent);
            stack.push((mid + 1, end, Some((idx, Side::Right))));
            stack.push((start, mid, Some((idx, Side::Left))));
        }

        tree
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, val: i32, parent: Option<(Index, Side)>) -> Index {
        let node = ArenaNode {
            val,
            parent: parent.map(|(p, _)| p),
            left: None,
            right: None,
        };
        let node_idx = self.arena.insert(node);

        if let Some((parent_idx, side)) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                match side {
                    Side::Left => parent.left = Some(node_idx),
                    Side::Right => parent.right = Some(node_idx),
                }
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order (root, left, right) iterator.
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        // Breadth-first, one level per round
        let mut height = 0;
        let mut level: Vec<Index> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .filter_map(|&idx| self.get_node(idx))
                .flat_map(|node| node.left.into_iter().chain(node.right))
                .collect();
        }
        height
    }

    /// Values in left-root-right order.
    #[instrument(level = "debug", skip(self))]
    pub fn inorder(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(idx) = current {
                stack.push(idx);
                current = self.get_node(idx).and_then(|n| n.left);
            }
            let Some(idx) = stack.pop() else {
                break;
            };
            if let Some(node) = self.get_node(idx) {
                out.push(node.val);
                current = node.right;
            }
        }
        out
    }

    /// Values of all nodes without children, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<i32> {
        self.iter()
            .filter(|(_, node)| node.left.is_none() && node.right.is_none())
            .map(|(_, node)| node.val)
            .collect()
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a BstArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a BstArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a ArenaNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push right before left for left-to-right traversal
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sorted_links_parents() {
        let tree = BstArena::from_sorted(&[1, 2, 3]);
        let root_idx = tree.root().unwrap();
        let root = tree.get_node(root_idx).unwrap();
        assert_eq!(root.val, 2);
        assert!(root.parent.is_none());

        let left = tree.get_node(root.left.unwrap()).unwrap();
        assert_eq!(left.val, 1);
        assert_eq!(left.parent, Some(root_idx));
    }

    #[test]
    fn test_empty_arena() {
        let tree = BstArena::from_sorted(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.inorder().is_empty());
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn test_leaf_values() {
        let tree = BstArena::from_sorted(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.leaf_values(), vec![1, 3, 5, 7]);
        assert_eq!(tree.height(), 3);
    }
}
