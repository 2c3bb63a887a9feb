//! Tests for `keylift preview`.

mod harness;

use harness::TestEnv;
use predicates::prelude::*;

#[test]
fn test_preview_normalizes_and_skips_noise() {
    let env = TestEnv::new();
    env.write(
        ".env",
        "API_KEY=abc123\n# comment\nEMPTY_LINE_BELOW\n\nDB_HOST=localhost\n",
    );

    env.cmd()
        .args(["preview", ".env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API-KEY: abc123"))
        .stdout(predicate::str::contains("DB-HOST: localhost"))
        .stdout(predicate::str::contains("comment").not())
        .stdout(predicate::str::contains("EMPTY_LINE_BELOW").not());
}

#[test]
fn test_preview_last_write_wins() {
    let env = TestEnv::new();
    env.write(".env", "A=1\nA=2\n");

    env.cmd()
        .args(["preview", ".env"])
        .assert()
        .success()
        .stdout("A: 2\n");
}

#[test]
fn test_preview_reads_preview_syntax_back() {
    let env = TestEnv::new();
    env.write("edited.txt", "DB-URL: postgres://localhost:5432\n");

    env.cmd()
        .args(["preview", "edited.txt", "--syntax", "preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DB-URL: postgres://localhost:5432"));
}

#[test]
fn test_preview_strict_names_the_offending_line() {
    let env = TestEnv::new();
    env.write(".env", "GOOD=1\nthis is broken\n");

    env.cmd()
        .args(["preview", ".env", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("this is broken"));
}

#[test]
fn test_preview_missing_file_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["preview", "nope.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
