//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Hierarchy dump (positional).
pub fn hierarchy_path_arg() -> Arg {
    Arg::new("hierarchy")
        .value_name("HIERARCHY")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON hierarchy dump produced by design discovery")
}

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Directory to write the stub file into")
}

/// Configuration file (-c/--config).
pub fn config_file_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON configuration file (defaults apply to missing fields)")
}

/// Root class name override (--root-class).
pub fn root_class_arg() -> Arg {
    Arg::new("root_class")
        .long("root-class")
        .value_name("NAME")
        .help("Class name used when the hierarchy is empty")
}

/// Stub file name override (--stub-filename).
pub fn stub_filename_arg() -> Arg {
    Arg::new("stub_filename")
        .long("stub-filename")
        .value_name("NAME")
        .help("Name of the generated stub file")
}

/// Print instead of writing (--stdout).
pub fn stdout_arg() -> Arg {
    Arg::new("stdout")
        .long("stdout")
        .action(ArgAction::SetTrue)
        .conflicts_with("out_dir")
        .help("Print the stub to stdout instead of writing a file")
}

/// Increase log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
}

/// Errors only (-q/--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Only log errors")
}
