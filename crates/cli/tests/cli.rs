use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn chatlift() -> Command {
    Command::cargo_bin("chatlift").expect("binary builds")
}

#[test]
fn parses_stdin_to_json() {
    chatlift()
        .write_stdin("You: Hi\n\nChatGPT: Hello there!")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"role\": \"user\""))
        .stdout(predicate::str::contains("\"Hello there!\""))
        .stdout(predicate::str::contains("\"platform\": \"ChatGPT\""));
}

#[test]
fn parses_file_to_markdown() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "You: Explain traits\nClaude: A trait is an interface.").unwrap();

    chatlift()
        .arg(file.path())
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Explain traits"))
        .stdout(predicate::str::contains("**Assistant:**"));
}

#[test]
fn rejects_empty_input() {
    chatlift()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn rejects_url_input() {
    chatlift()
        .write_stdin("https://chat.example.com/share/abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL"));
}

#[test]
fn missing_file_is_an_error() {
    chatlift()
        .arg("definitely-not-a-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn no_fences_flag_disables_wrapping() {
    chatlift()
        .write_stdin("You: review\nClaude: ok\ndef f(x):\n    return x")
        .arg("--no-fences")
        .assert()
        .success()
        .stdout(predicate::str::contains("```").not());
}
