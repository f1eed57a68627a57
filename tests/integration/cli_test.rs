//! Integration tests for the command-line surface

use crate::helpers::{run_termfolio, write_temp_file};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_termfolio(&["--help"]);

    assert_eq!(exit_code, 0);
    for subcommand in ["play", "exec", "list", "config", "completions"] {
        assert!(stdout.contains(subcommand), "missing {subcommand}");
    }
}

#[test]
fn play_help_mentions_mode() {
    let (stdout, _stderr, exit_code) = run_termfolio(&["play", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--mode"));
    assert!(stdout.contains("interactive"));
    assert!(stdout.contains("scripted"));
}

// ============================================================================
// Exec Tests
// ============================================================================

#[test]
fn exec_about_prints_its_lines() {
    let (stdout, stderr, exit_code) = run_termfolio(&["exec", "about"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Name: Maleyha Fatima
    Role: Software Developer
    Interests: Backend, Full Stack, AI/ML
    ");
}

#[test]
fn exec_ignores_case() {
    let (lower, _, _) = run_termfolio(&["exec", "about"]);
    let (upper, _, exit_code) = run_termfolio(&["exec", "ABOUT"]);

    assert_eq!(exit_code, 0);
    assert_eq!(lower, upper);
}

#[test]
fn exec_joins_words_of_intro_trigger() {
    let (stdout, _stderr, exit_code) = run_termfolio(&["exec", "run", "maleyha's_portfolio.exe"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("System ready."));
    // Spacer line prints as an empty line
    assert!(stdout.lines().any(|line| line.is_empty()));
    assert!(!stdout.contains('\u{00A0}'));
}

#[test]
fn exec_unknown_command_exits_1_with_message() {
    let (stdout, stderr, exit_code) = run_termfolio(&["exec", "foo"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("'foo' is not recognized as a command."));
}

#[test]
fn exec_without_command_shows_usage() {
    let (_stdout, stderr, exit_code) = run_termfolio(&["exec"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

// ============================================================================
// Catalog Override Tests
// ============================================================================

#[test]
fn list_prints_builtin_triggers_in_order() {
    let (stdout, _stderr, exit_code) = run_termfolio(&["list"]);

    assert_eq!(exit_code, 0);
    let triggers: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        triggers,
        vec![
            "run maleyha's_portfolio.exe",
            "about",
            "education",
            "skills",
            "help",
        ]
    );
}

#[test]
fn catalog_flag_replaces_builtin() {
    let (_dir, path) = write_temp_file("catalog.toml", crate::helpers::SMALL_CATALOG);
    let path = path.to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_termfolio(&["--catalog", path, "list"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "boot\nwhoami\n");

    let (stdout, _stderr, exit_code) = run_termfolio(&["--catalog", path, "exec", "WHOAMI"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "guest\n");

    let (_stdout, _stderr, exit_code) = run_termfolio(&["--catalog", path, "exec", "about"]);
    assert_eq!(exit_code, 1);
}

#[test]
fn empty_catalog_is_an_error() {
    let (_dir, path) = write_temp_file("empty.toml", "commands = []\n");

    let (_stdout, stderr, exit_code) = run_termfolio(&["--catalog", path.to_str().unwrap(), "list"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("at least one command"));
}

#[test]
fn missing_catalog_file_is_an_error() {
    let (_stdout, stderr, exit_code) =
        run_termfolio(&["--catalog", "/nonexistent/catalog.toml", "list"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"));
    assert!(stderr.contains("/nonexistent/catalog.toml"));
}

#[test]
fn catalog_path_from_config_is_used() {
    let (_catalog_dir, catalog) = write_temp_file("catalog.toml", crate::helpers::SMALL_CATALOG);
    let config_toml = format!("[catalog]\npath = {:?}\n", catalog.to_str().unwrap());
    let (_config_dir, config) = write_temp_file("config.toml", &config_toml);

    let (stdout, _stderr, exit_code) =
        run_termfolio(&["--config", config.to_str().unwrap(), "list"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "boot\nwhoami\n");
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_show_prints_effective_toml() {
    let (_dir, path) = write_temp_file(
        "config.toml",
        "[display]\ntheme = \"amber\"\n\n[timing]\nchar_delay_ms = 30\n",
    );

    let (stdout, stderr, exit_code) =
        run_termfolio(&["--config", path.to_str().unwrap(), "config", "show"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.contains("theme = \"amber\""));
    assert!(stdout.contains("char_delay_ms = 30"));
    // Unset values fall back to defaults
    assert!(stdout.contains("line_interval_ms = 400"));
}

#[test]
fn config_path_echoes_override() {
    let (_dir, path) = write_temp_file("config.toml", "");

    let (stdout, _stderr, exit_code) =
        run_termfolio(&["--config", path.to_str().unwrap(), "config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim_end(), path.to_str().unwrap());
}

#[test]
fn invalid_theme_in_config_is_an_error() {
    let (_dir, path) = write_temp_file("config.toml", "[display]\ntheme = \"neon\"\n");

    let (_stdout, stderr, exit_code) =
        run_termfolio(&["--config", path.to_str().unwrap(), "list"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("neon"));
}

#[test]
fn zero_char_delay_is_an_error() {
    let (_dir, path) = write_temp_file("config.toml", "[timing]\nchar_delay_ms = 0\n");

    let (_stdout, stderr, exit_code) =
        run_termfolio(&["--config", path.to_str().unwrap(), "config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("timing.char_delay_ms must be greater than zero"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let (_stdout, stderr, exit_code) =
        run_termfolio(&["--config", "/nonexistent/config.toml", "list"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Config file not found"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_for_bash_mention_subcommands() {
    let (stdout, _stderr, exit_code) = run_termfolio(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("termfolio"));
    assert!(stdout.contains("exec"));
}

#[test]
fn play_without_tty_fails_cleanly() {
    let (_stdout, stderr, exit_code) = run_termfolio(&["play"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("interactive terminal"));
}

// ============================================================================
// assert_cmd
// ============================================================================

mod assert_cmd_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn termfolio() -> Command {
        let mut cmd = Command::cargo_bin("termfolio").unwrap();
        cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn exec_education_prints_school() {
        termfolio()
            .args(["exec", "education"])
            .assert()
            .success()
            .stdout(predicate::str::contains("University of Guelph"))
            .stdout(predicate::str::contains("GPA: 74/100"));
    }

    #[test]
    fn exec_unknown_fails_with_message() {
        termfolio()
            .args(["exec", "rm", "everything"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "'rm everything' is not recognized as a command.",
            ));
    }

    #[test]
    fn version_flag_prints_name() {
        termfolio()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("termfolio "));
    }
}
