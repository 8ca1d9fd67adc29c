use crate::helpers::{run_lib, run_with_input};

#[test]
fn duplicate_move_names_exit_nonzero_with_usage() {
    let res = run_lib(&["a", "a", "b"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Invalid arguments."),
        "stderr: {}",
        res.stderr
    );
    assert!(
        res.stderr.contains("Example: roshambo rock paper scissors lizard Spock"),
        "stderr: {}",
        res.stderr
    );
}

#[test]
fn even_move_counts_exit_nonzero() {
    let res = run_lib(&["a", "b"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid arguments."));
}

#[test]
fn single_move_exits_nonzero() {
    let res = run_lib(&["rock"]);
    assert_eq!(res.exit_code, 2);
}

#[test]
fn three_distinct_moves_start_a_session() {
    let res = run_with_input(&["a", "b", "c"], "0\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Available moves:"));
    assert!(res.stdout.contains("Goodbye!"));
}

#[test]
fn no_arguments_print_usage() {
    let res = run_lib(&[]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid arguments."));
}

#[test]
fn help_flag_exits_zero() {
    let res = run_lib(&["--help"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Usage"));
}

#[test]
fn case_sensitive_names_are_distinct() {
    let res = run_with_input(&["Rock", "rock", "paper"], "0\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
}
