//! End-to-end tests for the `casegen` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A `casegen` command isolated from the user's config and environment.
fn casegen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("casegen").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("CASEGEN_CONFIG")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .arg("--output-format")
        .arg("plain");
    cmd
}

fn relative_entries(root: &Path, want_dirs: bool) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_dir() == want_dirs)
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    entries.sort();
    entries
}

fn paths(list: &[&str]) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = list.iter().map(PathBuf::from).collect();
    out.sort();
    out
}

// ── use case ──────────────────────────────────────────────────────────────────

#[test]
fn use_case_creates_fixed_set_of_paths() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .write_stdin("1\nfoo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scaffold for use case 'foo' has been created successfully.",
        ))
        .stdout(predicate::str::contains(
            "Controller created in src/controllers/fooController.ts",
        ))
        .stdout(predicate::str::contains(
            "Base Repository created in src/shared/repository.ts",
        ));

    assert_eq!(
        relative_entries(temp.path(), false),
        paths(&[
            "src/controllers/fooController.ts",
            "src/repositories/fooRepository.ts",
            "src/shared/repository.ts",
            "src/cases/foo/types/index.ts",
            "src/cases/foo/index.ts",
            "src/cases/foo/manager/index.ts",
            "src/cases/foo/impl/index.ts",
            "src/cases/foo/__tests__/index.test.ts",
        ])
    );
    assert_eq!(
        relative_entries(temp.path(), true),
        paths(&[
            "src",
            "src/cases",
            "src/cases/foo",
            "src/cases/foo/impl",
            "src/cases/foo/manager",
            "src/cases/foo/types",
            "src/cases/foo/__tests__",
            "src/controllers",
            "src/repositories",
            "src/shared",
        ])
    );
}

#[test]
fn use_case_content_uses_name_and_capitalized_name() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .write_stdin("1\ngetUser\n")
        .assert()
        .success();

    let controller =
        fs::read_to_string(temp.path().join("src/controllers/getUserController.ts")).unwrap();
    assert!(controller.contains("export default class GetUserController"));
    assert!(controller.contains("getUserRepository: GetUserRepository"));
    assert!(controller.contains("@/cases/getUser/types"));
    assert!(!controller.contains("{{"));
}

#[test]
fn rerun_overwrites_existing_files() {
    let temp = TempDir::new().unwrap();
    let controller = temp.path().join("src/controllers/fooController.ts");

    casegen(temp.path())
        .write_stdin("1\nfoo\n")
        .assert()
        .success();
    let original = fs::read_to_string(&controller).unwrap();

    fs::write(&controller, "edited by hand").unwrap();

    casegen(temp.path())
        .write_stdin("1\nfoo\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&controller).unwrap(), original);
    assert_eq!(relative_entries(temp.path(), false).len(), 8);
}

#[test]
fn second_use_case_shares_base_directories() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .write_stdin("1\nfoo\n")
        .assert()
        .success();
    casegen(temp.path())
        .write_stdin("1\nbar\n")
        .assert()
        .success();

    let files = relative_entries(temp.path(), false);
    assert_eq!(files.len(), 15);
    assert!(files.contains(&PathBuf::from("src/controllers/barController.ts")));
    assert!(files.contains(&PathBuf::from("src/controllers/fooController.ts")));
}

#[test]
fn leading_slash_in_name_stays_under_working_directory() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .write_stdin("1\n/foo\n")
        .assert()
        .success();

    assert!(temp.path().join("src/cases/foo/index.ts").is_file());
    assert!(
        temp.path()
            .join("src/controllers/fooController.ts")
            .is_file()
    );
    assert_eq!(relative_entries(temp.path(), false).len(), 8);
}

#[test]
fn plain_summary_lines_have_no_glyphs() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .write_stdin("1\nfoo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scaffold for use case 'foo' has been created successfully.\nController created in",
        ))
        .stdout(predicate::str::contains("\u{2713}").not());
}

// ── menu ──────────────────────────────────────────────────────────────────────

#[test]
fn invalid_choice_prints_message_and_writes_nothing() {
    for input in ["3\n", "\n", "yes\n"] {
        let temp = TempDir::new().unwrap();

        casegen(temp.path())
            .write_stdin(input)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Invalid choice. Please run the command again and select 1 or 2.",
            ));

        assert!(relative_entries(temp.path(), false).is_empty());
        assert!(relative_entries(temp.path(), true).is_empty());
    }
}

#[test]
fn menu_prompt_is_shown() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .write_stdin("3\n")
        .assert()
        .stdout(predicate::str::starts_with(
            "Select an option:\n1. Generate use case scaffold\n2. Generate empty project\nEnter your choice (1 or 2): ",
        ));
}

#[test]
fn end_of_input_cancels_with_user_error() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .write_stdin("1\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));

    assert!(relative_entries(temp.path(), true).is_empty());
}

// ── empty project ─────────────────────────────────────────────────────────────

#[test]
fn empty_project_manifest_name_is_verbatim() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .write_stdin("2\nbilling\nAda Lovelace\nInvoices and payments\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Empty project 'billing' has been created successfully.",
        ))
        .stdout(predicate::str::contains("Project structure:"))
        .stdout(predicate::str::contains("billing/"))
        .stdout(predicate::str::contains("│   └── .env.ts"));

    assert_eq!(
        relative_entries(temp.path(), false),
        paths(&[
            "billing/package.json",
            "billing/tsconfig.json",
            "billing/src/.env.ts",
            "billing/README.md",
        ])
    );

    let manifest = fs::read_to_string(temp.path().join("billing/package.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(json["name"], "billing");
    assert_eq!(json["author"], "Ada Lovelace");
    assert_eq!(json["description"], "Invoices and payments");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["license"], "ISC");
}

#[test]
fn env_overrides_manifest_license() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .env("CASEGEN_PROJECT__LICENSE", "MIT")
        .write_stdin("2\napi\n\n\n")
        .assert()
        .success();

    let manifest = fs::read_to_string(temp.path().join("api/package.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(json["license"], "MIT");
    assert_eq!(json["author"], "");
}

#[test]
fn env_version_is_written_as_typed() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .env("CASEGEN_PROJECT__VERSION", "2.0")
        .write_stdin("2\napi\n\n\n")
        .assert()
        .success();

    let manifest = fs::read_to_string(temp.path().join("api/package.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(json["version"], "2.0");
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn config_file_sets_scaffold_root() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();
    let config = temp.path().join("casegen.toml");
    fs::write(
        &config,
        format!("[scaffold]\nroot = {:?}\n", out.to_str().unwrap()),
    )
    .unwrap();

    casegen(temp.path())
        .arg("--config")
        .arg(&config)
        .write_stdin("1\nfoo\n")
        .assert()
        .success();

    assert!(out.join("src/controllers/fooController.ts").is_file());
    assert!(!temp.path().join("src").exists());
}

#[test]
fn missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    casegen(temp.path())
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .write_stdin("1\nfoo\n")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!temp.path().join("src").exists());
}

// ── output formats ────────────────────────────────────────────────────────────

#[test]
fn json_output_is_machine_readable() {
    let temp = TempDir::new().unwrap();

    let assert = Command::cargo_bin("casegen")
        .unwrap()
        .current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env_remove("CASEGEN_CONFIG")
        .args(["--output-format", "json"])
        .write_stdin("1\nfoo\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter the name of the use case: "));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["mode"], "use-case");
    assert_eq!(report["files"].as_array().unwrap().len(), 8);
    assert_eq!(report["files"][0]["kind"], "controller");
    assert_eq!(
        report["files"][0]["path"],
        "src/controllers/fooController.ts"
    );
}

#[test]
fn json_invalid_choice_keeps_stdout_empty() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("casegen")
        .unwrap()
        .current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env_remove("CASEGEN_CONFIG")
        .args(["--output-format", "json"])
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Invalid choice. Please run the command again and select 1 or 2.",
        ));

    assert!(relative_entries(temp.path(), true).is_empty());
}

#[test]
fn version_flag_prints_package_version() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("casegen")
        .unwrap()
        .current_dir(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_describes_the_tool() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("casegen")
        .unwrap()
        .current_dir(temp.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate a scaffold for a use case or create an empty project",
        ))
        .stdout(predicate::str::contains("--output-format"));
}

#[test]
fn unknown_argument_is_usage_error() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("casegen")
        .unwrap()
        .current_dir(temp.path())
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(2);
}
