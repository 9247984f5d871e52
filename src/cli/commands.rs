//! Command dispatch: parse input, run the exercise, print the report

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{parse_list, parse_matrix};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings, TreeStorage};
use crate::domain::{
    ensure_ascending, missing_number, move_zeroes, pow_with_policy, rotate_matrix,
    sort_colors, sorted_array_to_bst, three_sum, BstArena, TreeDisplay,
};

/// Result of one exercise run, ready for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub label: &'static str,
    pub value: String,
    pub details: Vec<String>,
}

impl Report {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            details: Vec::new(),
        }
    }

    fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

pub fn execute(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `katas --help`".to_string(),
        ));
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => {
            match command {
                ConfigCommands::Show => {
                    let settings = Settings::load(cli.config.as_deref())?;
                    output::info(&settings.to_toml()?)
                }
                // Must work while the config file is broken
                ConfigCommands::Path => match global_config_path() {
                    Some(path) => output::info(&path.display()),
                    None => {
                        return Err(CliError::Usage(
                            "no home directory, global config unavailable".to_string(),
                        ))
                    }
                },
            }
            Ok(())
        }
        _ => {
            let settings = Settings::load(cli.config.as_deref())?;
            let report = run(command, &settings)?;
            print_report(&report);
            Ok(())
        }
    }
}

fn print_report(report: &Report) {
    output::action(report.label, &report.value);
    for line in &report.details {
        output::detail(line);
    }
}

/// Runs an exercise command and returns its report.
///
/// `Config` and `Completion` are not exercises and are rejected here.
#[instrument(level = "debug", skip(settings))]
pub fn run(command: &Commands, settings: &Settings) -> CliResult<Report> {
    match command {
        Commands::Bst { values } => {
            let nums: Vec<i32> = parse_list(&values.join(","))?;
            bst(&nums, settings.tree.storage)
        }
        Commands::ThreeSum { values } => {
            let nums: Vec<i32> = parse_list(&values.join(","))?;
            let triplets = three_sum(&nums);
            Ok(
                Report::new("triplets", triplets.len().to_string()).with_details(
                    triplets.iter().map(|t| format_list(t.as_slice())).collect(),
                ),
            )
        }
        Commands::MissingNumber { values } => {
            let nums: Vec<usize> = parse_list(&values.join(","))?;
            Ok(Report::new("missing", missing_number(&nums)?.to_string()))
        }
        Commands::MoveZeroes { values } => {
            let mut nums: Vec<i32> = parse_list(&values.join(","))?;
            move_zeroes(&mut nums);
            Ok(Report::new("moved", format_list(nums.as_slice())))
        }
        Commands::Rotate { rows } => {
            let mut matrix = parse_matrix(&rows.join(";"))?;
            rotate_matrix(&mut matrix)?;
            let n = matrix.len();
            Ok(Report::new("rotated", format!("{n}x{n}"))
                .with_details(matrix.iter().map(|row| format_list(row.as_slice())).collect()))
        }
        Commands::Pow { base, exp } => {
            debug!(policy = ?settings.pow.zero_base, "pow");
            let result = pow_with_policy(*base, *exp, settings.pow.zero_base)?;
            Ok(Report::new("result", result.to_string()))
        }
        Commands::SortColors { values } => {
            let mut nums: Vec<i32> = parse_list(&values.join(","))?;
            sort_colors(&mut nums)?;
            Ok(Report::new("sorted", format_list(nums.as_slice())))
        }
        Commands::Config { .. } | Commands::Completion { .. } => Err(CliError::InvalidArgs(
            "not an exercise command".to_string(),
        )),
    }
}

fn bst(nums: &[i32], storage: TreeStorage) -> CliResult<Report> {
    ensure_ascending(nums)?;
    let (summary, tree) = match storage {
        TreeStorage::Boxed => {
            let root = sorted_array_to_bst(nums);
            let height = root.as_ref().map_or(0, |r| r.height());
            (format!("{} nodes, height {height}", nums.len()), root.to_tree_string())
        }
        TreeStorage::Arena => {
            let arena = BstArena::from_sorted(nums);
            let height = arena.height();
            (format!("{} nodes, height {height}", arena.len()), arena.to_tree_string())
        }
    };
    Ok(
        Report::new("bst", format!("{summary} ({storage})"))
            .with_details(tree.to_string().lines().map(str::to_string).collect()),
    )
}

fn format_list<T: std::fmt::Display>(items: &[T]) -> String {
    format!("[{}]", items.iter().join(", "))
}
