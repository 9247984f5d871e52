//! Domain layer: the exercises and their data structures
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod matrix;
pub mod missing_number;
pub mod move_zeroes;
pub mod pow;
pub mod sort_colors;
pub mod three_sum;
pub mod tree;
pub mod tree_display;

pub use arena::{ArenaNode, BstArena, Side};
pub use error::{DomainError, DomainResult};
pub use matrix::{ensure_square, rotate_matrix};
pub use missing_number::missing_number;
pub use move_zeroes::move_zeroes;
pub use pow::{pow, pow_with_policy, ZeroBasePolicy};
pub use sort_colors::{sort_color_values, sort_colors, Color};
pub use three_sum::three_sum;
pub use tree::{ensure_ascending, sorted_array_to_bst, TreeNode};
pub use tree_display::TreeDisplay;
