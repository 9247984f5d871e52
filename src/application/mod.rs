//! Application layer: input handling between the CLI and the exercises

pub mod error;
pub mod parse;

pub use error::{ApplicationError, ApplicationResult};
pub use parse::{parse_int_list, parse_list, parse_matrix};
