use crate::helpers::{line_value, run_lib, run_with_input};
use roshambo_engine::commitment::{Commitment, SecretKey};

const RPS: [&str; 3] = ["rock", "paper", "scissors"];

fn play_args(seed: &str) -> Vec<&str> {
    let mut args = vec!["play"];
    args.extend(RPS);
    args.push("--seed");
    args.push(seed);
    args
}

#[test]
fn session_publishes_digest_menu_and_prompt_in_order() {
    let res = run_with_input(&play_args("11"), "0\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let digest_at = res.stdout.find("HMAC: ").expect("digest line");
    let menu_at = res.stdout.find("Available moves:").expect("menu");
    let prompt_at = res.stdout.find("Enter your move: ").expect("prompt");
    assert!(digest_at < menu_at && menu_at < prompt_at);

    assert!(res.stdout.contains("1 - rock"));
    assert!(res.stdout.contains("3 - scissors"));
    assert!(res.stdout.contains("0 - exit"));
    assert!(res.stdout.contains("? - help"));
    assert!(res.stdout.ends_with("Goodbye!\n"));
}

#[test]
fn a_round_reports_moves_outcome_and_key() {
    let res = run_with_input(&play_args("11"), "2\n0\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    assert_eq!(line_value(&res.stdout, "Your move: "), "paper");
    assert!(RPS.contains(&line_value(&res.stdout, "Computer move: ")));
    assert!(
        res.stdout.contains("It's a draw!")
            || res.stdout.contains("You win!")
            || res.stdout.contains("You lose!")
    );
    assert_eq!(line_value(&res.stdout, "HMAC key: ").len(), 64);
}

#[test]
fn revealed_key_verifies_the_published_digest() {
    let res = run_with_input(&play_args("29"), "1\n0\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let digest = line_value(&res.stdout, "HMAC: ");
    let computer = line_value(&res.stdout, "Computer move: ");
    let key = SecretKey::from_hex(line_value(&res.stdout, "HMAC key: ")).expect("key parses");
    assert!(Commitment::verify(&key, computer, digest));
}

#[test]
fn same_seed_replays_the_same_computer_move() {
    let first = run_with_input(&play_args("64"), "1\n0\n");
    let second = run_with_input(&play_args("64"), "1\n0\n");
    assert_eq!(
        line_value(&first.stdout, "Computer move: "),
        line_value(&second.stdout, "Computer move: ")
    );
    // the key is fresh entropy, so the digests must differ
    assert_ne!(
        line_value(&first.stdout, "HMAC: "),
        line_value(&second.stdout, "HMAC: ")
    );
}

#[test]
fn invalid_tokens_redisplay_the_menu_and_continue() {
    let res = run_with_input(&play_args("3"), "9\nbogus\n1\n0\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(
        res.stdout.matches("Invalid input. Please try again.").count(),
        2
    );
    assert_eq!(res.stdout.matches("Available moves:").count(), 3);
    assert!(res.stdout.contains("Your move: rock"));
    assert!(res.stdout.ends_with("Goodbye!\n"));
}

#[test]
fn help_token_prints_the_table_and_keeps_prompting() {
    let res = run_with_input(&play_args("3"), "?\n0\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Help Table:"));
    assert!(res.stdout.contains("Moves\trock\tpaper\tscissors"));
    assert_eq!(res.stdout.matches("Enter your move: ").count(), 2);
}

#[test]
fn closed_stdin_ends_the_session_cleanly() {
    let res = run_with_input(&play_args("3"), "");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.ends_with("Goodbye!\n"));
}

#[test]
fn verify_subcommand_confirms_a_played_session() {
    let res = run_with_input(&play_args("77"), "1\n0\n");
    let digest = line_value(&res.stdout, "HMAC: ").to_string();
    let computer = line_value(&res.stdout, "Computer move: ").to_string();
    let key = line_value(&res.stdout, "HMAC key: ").to_string();

    let ok = run_lib(&[
        "verify", "--key", &key, "--move", &computer, "--digest", &digest,
    ]);
    assert_eq!(ok.exit_code, 0, "stderr: {}", ok.stderr);
    assert!(ok.stdout.contains("verify: ok"));

    // claiming any other move must fail verification
    let substituted = RPS
        .iter()
        .find(|m| **m != computer)
        .expect("another move exists");
    let bad = run_lib(&[
        "verify", "--key", &key, "--move", substituted, "--digest", &digest,
    ]);
    assert_eq!(bad.exit_code, 2);
    assert!(bad.stderr.contains("digest mismatch"), "stderr: {}", bad.stderr);
}

#[test]
fn five_move_sessions_resolve_with_wrapped_windows() {
    let res = run_with_input(
        &[
            "play", "rock", "paper", "scissors", "lizard", "Spock", "--seed", "5",
        ],
        "4\n0\n",
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(line_value(&res.stdout, "Your move: "), "lizard");
    // lizard defeats the two moves after it (wrapping to rock) and loses
    // to the two before it
    let computer = line_value(&res.stdout, "Computer move: ");
    let expected = match computer {
        "lizard" => "It's a draw!",
        "Spock" | "rock" => "You win!",
        "paper" | "scissors" => "You lose!",
        other => panic!("unexpected computer move {}", other),
    };
    assert!(res.stdout.contains(expected), "stdout: {}", res.stdout);
}
