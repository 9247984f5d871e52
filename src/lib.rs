//! Algorithm katas as a library of pure functions, plus the `katas` CLI
//!
//! - [`domain`]: the exercises and their tree types
//! - [`application`]: turning text input into exercise input
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing, dispatch and output
//!
//! ```
//! use katas::domain::{move_zeroes, sorted_array_to_bst};
//!
//! let mut nums = vec![0, 1, 0, 3, 12];
//! move_zeroes(&mut nums);
//! assert_eq!(nums, vec![1, 3, 12, 0, 0]);
//!
//! let root = sorted_array_to_bst(&[-10, -3, 0, 5, 9]).unwrap();
//! assert_eq!(root.inorder(), vec![-10, -3, 0, 5, 9]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
