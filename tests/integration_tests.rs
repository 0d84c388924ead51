//! End-to-end tests for the scanner binary.
//!
//! These pipe source text into `wlp4scan` on stdin and check the token
//! lines on stdout, or the single error line on stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn scanner() -> Command {
    let mut cmd = Command::new(PathBuf::from(env!("CARGO_BIN_EXE_wlp4scan")));
    cmd.env_remove("WLP4SCAN_LOG")
        .env_remove("RUST_LOG")
        .env_remove("WLP4SCAN_TERSE_ERRORS");
    cmd
}

#[test]
fn test_scan_wain() {
    scanner()
        .write_stdin("int wain ( ) { return 0 ; }")
        .assert()
        .success()
        .stdout(
            "INT int\nWAIN wain\nLPAREN (\nRPAREN )\nLBRACE {\nRETURN return\nNUM 0\nSEMI ;\nRBRACE }\n",
        )
        .stderr("");
}

#[test]
fn test_scan_full_program() {
    let source = r#"
// Returns the larger of a and b
int wain(int a, int b) {
    int *p = NULL;
    if (a >= b) {
        println(a);
    } else {
        println(b);
    }
    while (a != b) { a = a + 1; }
    return a % 2;
}
"#;

    scanner()
        .write_stdin(source)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("INT int\nWAIN wain\nLPAREN (\n"))
        .stdout(predicate::str::contains("STAR *\nID p\nBECOMES =\nNULL NULL\n"))
        .stdout(predicate::str::contains("GE >="))
        .stdout(predicate::str::contains("NE !="))
        .stdout(predicate::str::contains("PCT %\nNUM 2\nSEMI ;\nRBRACE }\n"))
        .stdout(predicate::str::contains("larger").not());
}

#[test]
fn test_comment_only_line() {
    scanner()
        .write_stdin("// comment\nx")
        .assert()
        .success()
        .stdout("ID x\n");
}

#[test]
fn test_unterminated_comment() {
    scanner()
        .write_stdin("x // no newline")
        .assert()
        .success()
        .stdout("ID x\n");
}

#[test]
fn test_empty_input() {
    scanner().write_stdin("").assert().success().stdout("");
}

#[test]
fn test_leading_zero_fails_without_output() {
    scanner()
        .write_stdin("x=01;")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("ERROR"))
        .stderr(predicate::str::contains("at byte 2"));
}

#[test]
fn test_out_of_range_number() {
    scanner()
        .write_stdin("2147483647")
        .assert()
        .success()
        .stdout("NUM 2147483647\n");

    scanner()
        .write_stdin("2147483648")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_lone_bang() {
    scanner()
        .write_stdin("!=")
        .assert()
        .success()
        .stdout("NE !=\n");

    scanner().write_stdin("!").assert().failure().stdout("");
}

#[test]
fn test_error_after_valid_tokens_prints_nothing() {
    scanner()
        .write_stdin("int x = 5;\nint y = $;\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("'$'"));
}

#[test]
fn test_terse_errors() {
    scanner()
        .env("WLP4SCAN_TERSE_ERRORS", "1")
        .write_stdin("@")
        .assert()
        .failure()
        .stdout("")
        .stderr("ERROR\n");
}

#[test]
fn test_non_utf8_input_is_rejected() {
    scanner()
        .write_stdin(vec![b'a', b' ', 0xff])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("\\xff"));
}

#[test]
fn test_logging_stays_off_stdout() {
    scanner()
        .env("WLP4SCAN_LOG", "trace")
        .write_stdin("a = b;")
        .assert()
        .success()
        .stdout("ID a\nBECOMES =\nID b\nSEMI ;\n");
}
