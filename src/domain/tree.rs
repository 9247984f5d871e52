//! Height-balanced binary search tree built from a sorted slice.

use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Binary tree node owning both of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Values in left-root-right order.
    pub fn inorder(&self) -> Vec<i32> {
        let mut out = Vec::new();
        self.collect_inorder(&mut out);
        out
    }

    fn collect_inorder(&self, out: &mut Vec<i32>) {
        if let Some(left) = &self.left {
            left.collect_inorder(out);
        }
        out.push(self.val);
        if let Some(right) = &self.right {
            right.collect_inorder(out);
        }
    }

    /// Values in root-left-right order.
    pub fn preorder(&self) -> Vec<i32> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.val);
            // Right first so left is visited first
            if let Some(right) = &node.right {
                stack.push(right);
            }
            if let Some(left) = &node.left {
                stack.push(left);
            }
        }
        out
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        1 + height(&self.left).max(height(&self.right))
    }

    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.node_count())
            + self.right.as_ref().map_or(0, |n| n.node_count())
    }

    /// True if every node's subtree heights differ by at most one.
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }

    /// True if in-order traversal is non-decreasing.
    pub fn is_search_tree(&self) -> bool {
        self.inorder().windows(2).all(|w| w[0] <= w[1])
    }
}

/// Height of an optional subtree, 0 for `None`.
pub fn height(node: &Option<Box<TreeNode>>) -> usize {
    node.as_ref().map_or(0, |n| n.height())
}

// Height if balanced, None as soon as any node is not.
fn balanced_height(node: Option<&TreeNode>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };
    let left = balanced_height(node.left.as_deref())?;
    let right = balanced_height(node.right.as_deref())?;
    if left.abs_diff(right) > 1 {
        return None;
    }
    Some(1 + left.max(right))
}

/// Builds a height-balanced BST whose in-order traversal is `nums`.
///
/// The lower middle of each range becomes the subtree root, so
/// `[1, 2, 3, 4]` is rooted at `2`. Returns `None` for an empty slice.
/// The input is expected to be ascending; see [`ensure_ascending`].
#[instrument(level = "debug", skip(nums), fields(len = nums.len()))]
pub fn sorted_array_to_bst(nums: &[i32]) -> Option<Box<TreeNode>> {
    build(nums)
}

fn build(nums: &[i32]) -> Option<Box<TreeNode>> {
    if nums.is_empty() {
        return None;
    }
    let mid = (nums.len() - 1) / 2;
    trace!(mid, val = nums[mid], "subtree root");
    Some(Box::new(TreeNode {
        val: nums[mid],
        left: build(&nums[..mid]),
        right: build(&nums[mid + 1..]),
    }))
}

/// Rejects input that is not in non-decreasing order.
///
/// The reported index is the first element smaller than its predecessor.
pub fn ensure_ascending(nums: &[i32]) -> DomainResult<()> {
    match nums.windows(2).position(|w| w[0] > w[1]) {
        Some(i) => Err(DomainError::NotAscending { index: i + 1 }),
        None => Ok(()),
    }
}
