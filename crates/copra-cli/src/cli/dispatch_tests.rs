//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Output routing: `--stdout` clears the output directory
//! 3. Global flags: `-v`/`-q` are accepted after the subcommand

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{config_command, generate_command};

#[test]
fn generate_extracts_defaults() {
    let cmd = generate_command();
    let result = cmd.try_get_matches_from(["generate", "design.json"]);
    assert!(result.is_ok(), "generate should parse: {:?}", result.err());

    let m = result.unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.hierarchy, PathBuf::from("design.json"));
    assert_eq!(params.out_dir, Some(PathBuf::from(".")));
    assert_eq!(params.config, None);
    assert_eq!(params.root_class, None);
    assert_eq!(params.stub_filename, None);
}

#[test]
fn generate_extracts_overrides() {
    let cmd = generate_command();
    let m = cmd
        .try_get_matches_from([
            "generate",
            "design.json",
            "-o",
            "stubs",
            "--config",
            "copra.json",
            "--root-class",
            "Top",
            "--stub-filename",
            "top.pyi",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.out_dir, Some(PathBuf::from("stubs")));
    assert_eq!(params.config, Some(PathBuf::from("copra.json")));
    assert_eq!(params.root_class.as_deref(), Some("Top"));
    assert_eq!(params.stub_filename.as_deref(), Some("top.pyi"));
}

#[test]
fn generate_stdout_clears_out_dir() {
    let cmd = generate_command();
    let m = cmd
        .try_get_matches_from(["generate", "design.json", "--stdout"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.out_dir, None);
}

#[test]
fn generate_stdout_conflicts_with_out_dir() {
    let cmd = generate_command();
    let result = cmd.try_get_matches_from(["generate", "design.json", "--stdout", "-o", "stubs"]);
    assert!(result.is_err());
}

#[test]
fn generate_requires_hierarchy() {
    let cmd = generate_command();
    let result = cmd.try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn config_extracts_path() {
    let cmd = config_command();
    let m = cmd
        .try_get_matches_from(["config", "-c", "copra.json"])
        .unwrap();
    let params = ConfigParams::from_matches(&m);

    assert_eq!(params.config, Some(PathBuf::from("copra.json")));
}

#[test]
fn global_flags_after_subcommand() {
    let m = build_cli()
        .try_get_matches_from(["copra", "generate", "design.json", "-vv"])
        .unwrap();

    assert_eq!(m.get_count("verbose"), 2);
    assert!(!m.get_flag("quiet"));
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["copra"]);
    assert!(result.is_err());
}

#[test]
fn log_level_from_flags() {
    use tracing::Level;

    assert_eq!(log_level(0, false), Level::WARN);
    assert_eq!(log_level(1, false), Level::INFO);
    assert_eq!(log_level(2, false), Level::DEBUG);
    assert_eq!(log_level(5, false), Level::TRACE);
    assert_eq!(log_level(3, true), Level::ERROR);
}
