//! Integration tests for the sort-verbs CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const UNSORTED: &str = r#"[{"kanaStart":"た","kanaEnd":"べる","id":1},{"kanaStart":"あ","kanaEnd":"う","id":2},{"kanaStart":"あ","kanaEnd":"い","id":3}]"#;

const SORTED: &str = r#"[
  {
    "kanaStart": "あ",
    "kanaEnd": "い",
    "id": 3
  },
  {
    "kanaStart": "あ",
    "kanaEnd": "う",
    "id": 2
  },
  {
    "kanaStart": "た",
    "kanaEnd": "べる",
    "id": 1
  }
]"#;

fn sort_verbs() -> Command {
    Command::cargo_bin("sort-verbs").unwrap()
}

fn fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_help_command() {
    sort_verbs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kanaStart"))
        .stdout(predicate::str::contains("--check"));
}

#[test]
fn test_version_command() {
    sort_verbs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sort-verbs"));
}

#[test]
fn test_sorts_in_place() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "verbs.json", UNSORTED);

    sort_verbs()
        .arg(&input)
        .assert()
        .success()
        .stdout(format!(
            "Sorted 3 verbs and saved to {}\n",
            input.display()
        ));

    assert_eq!(fs::read_to_string(&input).unwrap(), SORTED);
}

#[test]
fn test_writes_to_separate_output() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "verbs.json", UNSORTED);
    let output = dir.path().join("sorted.json");

    sort_verbs()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted 3 verbs and saved to"))
        .stdout(predicate::str::contains("sorted.json"));

    assert_eq!(fs::read_to_string(&input).unwrap(), UNSORTED);
    assert_eq!(fs::read_to_string(&output).unwrap(), SORTED);
}

#[test]
fn test_default_input_path() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/assets")).unwrap();
    let input = fixture(&dir, "src/assets/verbs.json", UNSORTED);

    sort_verbs()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sorted 3 verbs and saved to src/assets/verbs.json",
        ));

    assert_eq!(fs::read_to_string(&input).unwrap(), SORTED);
}

#[test]
fn test_object_instead_of_array_fails() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "verbs.json", r#"{"kanaStart":"あ"}"#);
    let output = dir.path().join("sorted.json");

    sort_verbs()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON array"));

    assert!(!output.exists());
}

#[test]
fn test_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "verbs.json", "[{\"kanaStart\": ");

    sort_verbs()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid verb document"));

    assert_eq!(fs::read_to_string(&input).unwrap(), "[{\"kanaStart\": ");
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    sort_verbs()
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_check_reports_unsorted() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "verbs.json", UNSORTED);

    sort_verbs()
        .arg("--check")
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is not sorted"));

    assert_eq!(fs::read_to_string(&input).unwrap(), UNSORTED);
}

#[test]
fn test_check_accepts_sorted() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "verbs.json", SORTED);

    sort_verbs()
        .args(["--check", "--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .stdout("{\"count\":3,\"first_unsorted\":null}\n");
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "verbs.json", UNSORTED);

    sort_verbs()
        .args(["--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"count\":3,\"destination\":"));
}

#[test]
fn test_config_and_indent_override() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "verbs.json", r#"[{"id":1}]"#);
    let config = fixture(
        &dir,
        "verb-sort.toml",
        &format!("default_input = {:?}\nindent = 4\n", input.display().to_string()),
    );

    sort_verbs().arg("--config").arg(&config).assert().success();
    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        "[\n    {\n        \"id\": 1\n    }\n]"
    );

    sort_verbs()
        .arg("--config")
        .arg(&config)
        .args(["--indent", "1"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        "[\n {\n  \"id\": 1\n }\n]"
    );
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = fixture(&dir, "verb-sort.toml", "indent = \"wide\"");

    sort_verbs()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
