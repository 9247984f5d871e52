/*
Rendering of both tree representations as termtree output.

Children are listed left before right. A missing child next to a present one
is shown as "·" so the left/right position stays readable.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::BstArena;
use crate::domain::tree::TreeNode;

const EMPTY_SLOT: &str = "·";

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for TreeNode {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves = match (&self.left, &self.right) {
            (None, None) => Vec::new(),
            (left, right) => [left, right]
                .into_iter()
                .map(|child| match child {
                    Some(node) => node.to_tree_string(),
                    None => Tree::new(EMPTY_SLOT.to_string()),
                })
                .collect(),
        };
        Tree::new(self.val.to_string()).with_leaves(leaves)
    }
}

impl TreeDisplay for Option<Box<TreeNode>> {
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl TreeDisplay for BstArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(arena: &BstArena, node_idx: Index) -> Tree<String> {
            let Some(node) = arena.get_node(node_idx) else {
                return Tree::new(EMPTY_SLOT.to_string());
            };
            let mut tree = Tree::new(node.val.to_string());
            if node.left.is_some() || node.right.is_some() {
                for child in [node.left, node.right] {
                    match child {
                        Some(child_idx) => tree.push(build_tree(arena, child_idx)),
                        None => tree.push(Tree::new(EMPTY_SLOT.to_string())),
                    };
                }
            }
            tree
        }

        match self.root() {
            Some(root_idx) => build_tree(self, root_idx),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
