//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// English sample comfortably over the 100-word minimum.
fn long_english() -> String {
    "The cat sat on the mat and the dog ran fast across the yard. ".repeat(9)
}

const RUSSIAN: &str = "Мороз и солнце, день чудесный. Ещё ты дремлешь, друг прелестный. \
                       Пора, красавица, проснись, открой сомкнуты негой взоры.";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_prints_all_five_indices() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), long_english()).unwrap();
    cmd()
        .args(["score", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch reading-ease score is"))
        .stdout(predicate::str::contains("Gunning fog index is"))
        .stdout(predicate::str::contains("Coleman-Liau index is"))
        .stdout(predicate::str::contains("Dale-Chall readability score is"))
        .stdout(predicate::str::contains("Automated Readability Index is"));
}

#[test]
fn score_short_text_fails_with_minimum_message() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "The cat sat on the mat.").unwrap();
    cmd()
        .args(["score", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The text is too short"));
}

#[test]
fn score_allow_short_overrides_minimum() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "The cat sat on the mat. The dog ran fast.").unwrap();
    cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--allow-short"])
        .assert()
        .success()
        .stdout(predicate::str::contains("School level of difficulty:"));
}

#[test]
fn score_selected_formula_only() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), long_english()).unwrap();
    cmd()
        .args([
            "score",
            tmp.path().to_str().unwrap(),
            "--formula",
            "flesch",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch reading-ease score is"))
        .stdout(predicate::str::contains("Gunning fog index").not());
}

#[test]
fn score_russian_marks_dale_chall_not_applicable() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), RUSSIAN).unwrap();
    cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--allow-short"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dale-Chall readability score: not applicable",
        ))
        .stdout(predicate::str::contains("only with English texts"));
}

#[test]
fn score_json_outputs_valid_report() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), long_english()).unwrap();
    let output = cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("score --json should output valid JSON");
    assert_eq!(json["language"], "en");
    assert_eq!(json["results"].as_array().unwrap().len(), 5);
}

#[test]
fn score_reads_stdin_with_dash() {
    cmd()
        .args(["score", "-", "--allow-short"])
        .write_stdin("The cat sat on the mat. The dog ran fast.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch reading-ease score is"));
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .args(["score", "definitely-missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn score_unknown_formula_rejected() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), long_english()).unwrap();
    cmd()
        .args([
            "score",
            tmp.path().to_str().unwrap(),
            "--formula",
            "smog",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Stats Command
// =============================================================================

#[test]
fn stats_prints_measurements() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "The cat sat on the mat. The dog ran fast.").unwrap();
    cmd()
        .args(["stats", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words"))
        .stdout(predicate::str::contains("Sentences"));
}

#[test]
fn stats_json_includes_language() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), RUSSIAN).unwrap();
    let output = cmd()
        .args(["stats", tmp.path().to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stats --json should output valid JSON");
    assert_eq!(json["language"], "ru");
    assert!(json["word_count"].as_u64().unwrap() > 0);
}

#[test]
fn stats_unrecognized_language_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "12345 67890 ... 42").unwrap();
    cmd()
        .args(["stats", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("language not recognized"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn config_flag_overrides_minimum() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("override.toml");
    std::fs::write(&config, "min_words = 5\n").unwrap();
    let text = dir.path().join("sample.txt");
    std::fs::write(&text, "The cat sat on the mat. The dog ran fast.").unwrap();
    cmd()
        .args([
            "--config",
            config.to_str().unwrap(),
            "score",
            text.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch reading-ease score is"));
}
