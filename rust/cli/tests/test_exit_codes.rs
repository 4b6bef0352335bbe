//! Tests for exit code standardization and error handling consistency
//!
//! - Successful commands return exit code 0
//! - Validation errors, engine errors, and file errors return exit code 2
//! - Errors are written to stderr, never stdout
//! - Help and version print to stdout with exit code 0

/// Test that a successful deal command returns exit code 0
#[test]
fn test_deal_success_returns_zero() {
    let args = vec!["showdown", "deal", "--hands", "4", "--seed", "42"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "Successful deal command should return exit code 0");
}

/// Test that a successful sim command returns exit code 0
#[test]
fn test_sim_success_returns_zero() {
    let args = vec![
        "showdown", "sim", "--rounds", "3", "--hands", "2", "--seed", "7",
    ];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "Successful sim command should return exit code 0");
}

/// Test that the cfg command returns exit code 0
#[test]
fn test_cfg_success_returns_zero() {
    let args = vec!["showdown", "cfg"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "Config command should return exit code 0");
}

/// Test that asking for more hands than the deck holds returns exit code 2
#[test]
fn test_deal_too_many_hands_returns_two() {
    let args = vec!["showdown", "deal", "--hands", "11", "--seed", "42"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Overdrawing the deck should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("not enough cards in the deck"),
        "Error message should name the deck shortage, got: {}",
        err_str
    );
}

/// Test that an astronomically large hand count still reports the deck
/// shortage instead of overflowing the card arithmetic
#[test]
fn test_deal_huge_hand_count_returns_two() {
    let args = vec![
        "showdown",
        "deal",
        "--hands",
        "18446744073709551615",
        "--seed",
        "42",
    ];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Oversized request should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(err_str.contains("not enough cards in the deck"));
}

/// Test that zero rounds for sim returns exit code 2
#[test]
fn test_sim_zero_rounds_returns_two() {
    let args = vec!["showdown", "sim", "--rounds", "0"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Zero rounds should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("rounds must be >= 1"),
        "Error message should be written to stderr"
    );
}

/// Test that stats with a missing input file returns exit code 2
#[test]
fn test_stats_missing_input_returns_two() {
    let args = vec!["showdown", "stats", "--input", "/nonexistent/rounds.jsonl"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(
        code, 2,
        "Stats with missing input should return exit code 2"
    );
}

/// Test that an unknown subcommand returns exit code 2 with a usage summary
#[test]
fn test_unknown_command_returns_two() {
    let args = vec!["showdown", "shuffle"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Unknown command should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("Usage: showdown <command> [options]"),
        "Usage summary should be written to stderr"
    );
}

/// Test that errors are written to stderr, not stdout
#[test]
fn test_errors_written_to_stderr_not_stdout() {
    let args = vec!["showdown", "deal", "--hands", "11", "--seed", "42"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2);
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("not enough cards"),
        "Error should be in stderr"
    );
    let out_str = String::from_utf8_lossy(&out);
    assert!(
        !out_str.contains("not enough cards"),
        "Error should not be in stdout"
    );
}

/// Test that --help prints to stdout and returns 0
#[test]
fn test_help_returns_zero() {
    let args = vec!["showdown", "--help"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = showdown_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "Help should return exit code 0");
    let out_str = String::from_utf8_lossy(&out);
    assert!(out_str.contains("deal"), "Help text should list commands");
    assert!(err.is_empty(), "Help should not write to stderr");
}

/// Test exit code consistency: successful commands return 0
#[test]
fn test_successful_commands_return_zero() {
    let test_cases = vec![
        vec!["showdown", "deal", "--seed", "42"],
        vec!["showdown", "deal", "--hands", "2", "--seed", "1"],
        vec!["showdown", "sim", "--rounds", "1", "--seed", "9"],
        vec!["showdown", "cfg"],
    ];

    for args in test_cases {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = showdown_cli::run(args.clone(), &mut out, &mut err);

        assert_eq!(code, 0, "Successful command should return 0 for {:?}", args);
    }
}
