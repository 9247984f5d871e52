//! Tests for CLI parsing, dispatch and exit codes

use clap::Parser;
use rstest::rstest;

use katas::cli::commands::{run, Report};
use katas::cli::{execute, Cli, CliError, Commands};
use katas::config::{PowConfig, Settings, TreeConfig, TreeStorage};
use katas::domain::ZeroBasePolicy;
use katas::exitcode;
use katas::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn command(args: &[&str]) -> Commands {
    let cli = Cli::try_parse_from(std::iter::once("katas").chain(args.iter().copied()))
        .expect("valid arguments");
    cli.command.expect("a subcommand")
}

fn run_with(args: &[&str], settings: &Settings) -> Result<Report, CliError> {
    run(&command(args), settings)
}

fn run_default(args: &[&str]) -> Result<Report, CliError> {
    run_with(args, &Settings::default())
}

// ============================================================
// Parsing Tests
// ============================================================

#[test]
fn given_negative_values_when_parsing_then_accepted_as_positionals() {
    match command(&["three-sum", "-1", "0", "1", "2", "-1", "-4"]) {
        Commands::ThreeSum { values } => assert_eq!(values.len(), 6),
        other => panic!("unexpected command {other:?}"),
    }
    assert!(matches!(
        command(&["pow", "2", "-2"]),
        Commands::Pow { exp: -2, .. }
    ));
}

#[rstest]
#[case(&["three-sum", "-1,0,1,2,-1,-4"], 6)]
#[case(&["three-sum", "-1,0", "-4"], 3)]
#[case(&["sort-colors", "-1"], 1)]
fn given_list_starting_with_negative_when_parsing_then_kept_as_value(
    #[case] args: &[&str],
    #[case] count: usize,
) {
    let values = match command(args) {
        Commands::ThreeSum { values } | Commands::SortColors { values } => values,
        other => panic!("unexpected command {other:?}"),
    };
    assert_eq!(values.join(",").split(',').count(), count);
}

#[test]
fn given_repeated_debug_flag_when_parsing_then_counts() {
    let cli = Cli::try_parse_from(["katas", "-ddd", "missing-number", "0"]).unwrap();
    assert_eq!(cli.debug, 3);
}

// ============================================================
// Exercise Dispatch Tests
// ============================================================

#[rstest]
#[case(&["three-sum", "-1,0,1,2,-1,-4"], "triplets", "2")]
#[case(&["missing-number", "3", "0", "1"], "missing", "2")]
#[case(&["missing-number", "0,1"], "missing", "2")]
#[case(&["move-zeroes", "0", "1", "0", "3", "12"], "moved", "[1, 3, 12, 0, 0]")]
#[case(&["sort-colors", "2,0,2", "1,1,0"], "sorted", "[0, 0, 1, 1, 2, 2]")]
#[case(&["pow", "2", "10"], "result", "1024")]
#[case(&["pow", "2", "-2"], "result", "0.25")]
#[case(&["rotate", "1,2,3", "4,5,6", "7,8,9"], "rotated", "3x3")]
fn given_exercise_command_when_run_then_reports_value(
    #[case] args: &[&str],
    #[case] label: &str,
    #[case] value: &str,
) {
    let report = run_default(args).expect("exercise succeeds");
    assert_eq!(report.label, label);
    assert_eq!(report.value, value);
}

#[test]
fn given_three_sum_when_run_then_details_list_triplets() {
    let report = run_default(&["three-sum", "-1", "0", "1", "2", "-1", "-4"]).unwrap();
    assert_eq!(report.details, vec!["[-1, -1, 2]", "[-1, 0, 1]"]);
}

#[test]
fn given_rotate_when_run_then_details_are_rotated_rows() {
    let report = run_default(&["rotate", "1,2,3;4,5,6;7,8,9"]).unwrap();
    assert_eq!(report.details, vec!["[7, 4, 1]", "[8, 5, 2]", "[9, 6, 3]"]);
}

#[test]
fn given_negative_matrix_rows_when_rotate_then_rotated() {
    let report = run_default(&["rotate", "-1,2", "3,-4"]).unwrap();
    assert_eq!(report.value, "2x2");
    assert_eq!(report.details, vec!["[3, -1]", "[-4, 2]"]);
}

#[rstest]
#[case(TreeStorage::Boxed)]
#[case(TreeStorage::Arena)]
fn given_storage_setting_when_bst_then_same_tree(#[case] storage: TreeStorage) {
    let settings = Settings {
        tree: TreeConfig { storage },
        ..Default::default()
    };
    let report = run_with(&["bst", "-10", "-3", "0", "5", "9"], &settings).unwrap();

    assert_eq!(report.value, format!("5 nodes, height 3 ({storage})"));
    assert_eq!(report.details.first().map(String::as_str), Some("0"));
    assert!(report.details.iter().any(|l| l.ends_with("-10")));
}

#[test]
fn given_no_values_when_bst_then_empty_tree() {
    let report = run_default(&["bst"]).unwrap();
    assert_eq!(report.value, "0 nodes, height 0 (boxed)");
    assert_eq!(report.details, vec!["Empty tree"]);
}

#[test]
fn given_compatible_policy_when_pow_zero_negative_then_zero() {
    let settings = Settings {
        pow: PowConfig {
            zero_base: ZeroBasePolicy::Compatible,
        },
        ..Default::default()
    };
    let report = run_with(&["pow", "0", "-3"], &settings).unwrap();
    assert_eq!(report.value, "0");
}

// ============================================================
// Error and Exit Code Tests
// ============================================================

#[rstest]
#[case(&["bst", "3", "1"], exitcode::DATAERR)]
#[case(&["sort-colors", "0", "5"], exitcode::DATAERR)]
#[case(&["rotate", "1,2", "3"], exitcode::DATAERR)]
#[case(&["missing-number", "7"], exitcode::DATAERR)]
#[case(&["pow", "0", "-1"], exitcode::DATAERR)]
#[case(&["move-zeroes", "1,,2"], exitcode::USAGE)]
#[case(&["three-sum", "one"], exitcode::USAGE)]
#[case(&["missing-number", "-1"], exitcode::USAGE)]
fn given_bad_input_when_run_then_error_maps_to_exit_code(
    #[case] args: &[&str],
    #[case] code: i32,
) {
    let err = run_default(args).unwrap_err();
    assert_eq!(err.exit_code(), code, "{err}");
}

#[test]
fn given_no_subcommand_when_execute_then_usage_error() {
    let cli = Cli::try_parse_from(["katas"]).unwrap();
    let err = execute(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_missing_config_file_when_execute_then_config_exit_code() {
    let cli = Cli::try_parse_from([
        "katas",
        "--config",
        "/nonexistent/katas.toml",
        "pow",
        "2",
        "3",
    ])
    .unwrap();
    let err = execute(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::CONFIG);
}

#[test]
fn given_broken_config_file_when_config_path_then_not_a_config_error() {
    let cli = Cli::try_parse_from([
        "katas",
        "--config",
        "/nonexistent/katas.toml",
        "config",
        "path",
    ])
    .unwrap();
    // Without a home directory the path is unavailable, which is a usage error
    if let Err(err) = execute(&cli) {
        assert_ne!(err.exit_code(), exitcode::CONFIG, "{err}");
    }
}
