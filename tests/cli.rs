use assert_cmd::Command;
use predicates::prelude::predicate::str;

const EXAMPLE: &str = "src/examples/09.txt";

#[test]
fn short_rope_right_answer() {
    let mut cmd = Command::cargo_bin("rope_bridge").unwrap();
    cmd.arg(EXAMPLE);

    cmd.assert()
        .success()
        .stdout(str::contains("Different positions: 13"));
}

#[test]
fn long_rope_right_answer() {
    let mut cmd = Command::cargo_bin("rope_bridge").unwrap();
    cmd.args(["--knots", "10", EXAMPLE]);

    cmd.assert()
        .success()
        .stdout(str::contains("Different positions: 1\n"));
}

#[test]
fn render_draws_trail() {
    let mut cmd = Command::cargo_bin("rope_bridge").unwrap();
    cmd.args(["--render", EXAMPLE]);

    cmd.assert()
        .success()
        .stdout(str::contains(".####.\n....#.\ns###.."));
}

#[test]
fn malformed_line_is_reported() {
    let mut cmd = Command::cargo_bin("rope_bridge").unwrap();
    cmd.arg("tests/data/malformed.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("line 3 (\"L three\") is not a valid move"));
}

#[test]
fn missing_input_is_reported() {
    let mut cmd = Command::cargo_bin("rope_bridge").unwrap();
    cmd.arg("tests/data/no-such-file.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("could not read tests/data/no-such-file.txt"));
}

#[test]
fn zero_knots_is_rejected() {
    let mut cmd = Command::cargo_bin("rope_bridge").unwrap();
    cmd.args(["--knots", "0", EXAMPLE]);

    cmd.assert().failure();
}

#[test]
fn day_nine_solves_both_parts() {
    let mut cmd = Command::cargo_bin("09").unwrap();

    // Without a puzzle input present the day binary must fail loudly.
    if std::path::Path::new("src/inputs/09.txt").exists() {
        cmd.assert().success().stdout(str::contains("Part 2"));
    } else {
        cmd.assert()
            .failure()
            .stderr(str::contains("could not load puzzle input"));
    }
}
