//! Integration tests for CLI behavior
//!
//! These tests drive the `ordlint` binary and check what it prints and how it
//! exits.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Helper to create a command for the ordlint CLI
fn ordlint_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ordlint"))
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        ordlint_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        ordlint_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        ordlint_cmd().assert().failure();
    }
}

mod lint_command {
    use super::*;

    #[test]
    fn passes_clean_file() {
        ordlint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("valid.md"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 1 files, found 0 issues"));
    }

    #[test]
    fn reports_misnumbered_item() {
        ordlint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("misnumbered.md"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "misnumbered.md:4: [list-numbering] List item should either match previous number or increment by 1",
            ))
            .stdout(predicate::str::contains("found 1 issues"));
    }

    #[test]
    fn style_flag_overrides_default() {
        ordlint_cmd()
            .arg("lint")
            .arg("--style")
            .arg("one")
            .arg(fixtures_dir().join("misnumbered.md"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "misnumbered.md:5: [list-numbering] Expected list item to start with '1.'",
            ))
            .stdout(predicate::str::contains("found 2 issues"));
    }

    #[test]
    fn rejects_unknown_style() {
        ordlint_cmd()
            .arg("lint")
            .arg("--style")
            .arg("roman")
            .arg(fixtures_dir().join("valid.md"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown list style 'roman'"));
    }

    #[test]
    fn reports_code_block_indentation() {
        ordlint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("unindented_code.md"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "unindented_code.md:2: [code-block-indent] Code block should be indented with 3 spaces from list item",
            ))
            .stdout(predicate::str::contains(
                "unindented_code.md:3: [code-block-indent] Code block content should maintain indentation",
            ))
            .stdout(predicate::str::contains("found 3 issues"));
    }

    #[test]
    fn lints_directory() {
        ordlint_cmd()
            .arg("lint")
            .arg(fixtures_dir())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Checked 3 files"));
    }

    #[test]
    fn reports_zero_files_for_nonexistent_path() {
        ordlint_cmd()
            .arg("lint")
            .arg("nonexistent_file.md")
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 0 files"));
    }

    #[test]
    fn dry_run_requires_fix() {
        ordlint_cmd()
            .arg("lint")
            .arg("--dry-run")
            .arg(fixtures_dir().join("valid.md"))
            .assert()
            .failure();
    }
}

mod output_formats {
    use super::*;

    #[test]
    fn json_lists_findings_per_file() {
        let output = ordlint_cmd()
            .arg("lint")
            .arg("--format")
            .arg("json")
            .arg(fixtures_dir().join("misnumbered.md"))
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let report = &parsed[0];
        assert_eq!(report["valid"], false);
        assert_eq!(report["errors"][0]["line"], 4);
        assert_eq!(report["errors"][0]["rule"], "list-numbering");
        assert!(report["path"].as_str().unwrap().ends_with("misnumbered.md"));
    }

    #[test]
    fn json_marks_clean_file_valid() {
        let output = ordlint_cmd()
            .arg("lint")
            .arg("--format")
            .arg("json")
            .arg(fixtures_dir().join("valid.md"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed[0]["valid"], true);
        assert_eq!(parsed[0]["errors"], serde_json::json!([]));
    }

    #[test]
    fn sarif_output_is_valid_log() {
        let output = ordlint_cmd()
            .arg("lint")
            .arg("--format")
            .arg("sarif")
            .arg(fixtures_dir().join("misnumbered.md"))
            .output()
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["version"], "2.1.0");
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "ordlint");
        assert_eq!(parsed["runs"][0]["results"][0]["ruleId"], "list-numbering");
    }
}

mod stdin_input {
    use super::*;

    #[test]
    fn lints_stdin() {
        ordlint_cmd()
            .arg("lint")
            .arg("-")
            .write_stdin("1. a\n3. b\n")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("<stdin>:2: [list-numbering]"));
    }

    #[test]
    fn fix_prints_corrected_document() {
        ordlint_cmd()
            .arg("lint")
            .arg("--style")
            .arg("ordered")
            .arg("--fix")
            .arg("-")
            .write_stdin("1. a\n1. b\n1. c\n")
            .assert()
            .success()
            .stdout("1. a\n2. b\n3. c\n");
    }

    #[test]
    fn fix_passes_clean_document_through() {
        ordlint_cmd()
            .arg("lint")
            .arg("--fix")
            .arg("-")
            .write_stdin("# Title\n\n1. a\n2. b\n")
            .assert()
            .success()
            .stdout("# Title\n\n1. a\n2. b\n");
    }
}
