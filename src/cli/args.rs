//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Algorithm katas: balanced BST, 3Sum, missing number, move zeroes, rotate image, pow, sort colors
#[derive(Parser, Debug)]
#[command(name = "katas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "KATAS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Values may be given as separate arguments, comma-separated, or both.
///
/// Value lists accept a leading `-`, so `-1,0,1` is data and not a flag.
/// Options go before the subcommand.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a height-balanced BST from ascending values
    Bst {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// List every unique triplet summing to zero
    ThreeSum {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Find the value missing from [0, n]
    MissingNumber {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Move zeros to the end, keeping the order of the rest
    MoveZeroes {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Rotate a square matrix 90° clockwise
    Rotate {
        /// One row per argument, values comma-separated (or rows split by ';')
        #[arg(allow_hyphen_values = true)]
        rows: Vec<String>,
    },

    /// Raise BASE to the integer power EXP
    Pow {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exp: i64,
    },

    /// Sort 0/1/2 values in one pass
    SortColors {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file location
    Path,
}
