//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("copra")
        .about("Static type stubs for discovered HDL design hierarchies")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .arg(quiet_arg())
        .subcommand(generate_command())
        .subcommand(config_command())
}

/// Generate a stub file from a hierarchy dump.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate a type stub from a hierarchy dump")
        .override_usage(
            "\
  copra generate <HIERARCHY> [-o <DIR>]
  copra generate <HIERARCHY> --stdout",
        )
        .after_help(
            r#"EXAMPLES:
  copra generate hierarchy.json                   # writes ./copra_stubs.pyi
  copra generate hierarchy.json -o typings        # writes typings/copra_stubs.pyi
  copra generate hierarchy.json -c copra.json     # custom configuration
  copra generate hierarchy.json --stdout | less   # preview"#,
        )
        .arg(hierarchy_path_arg())
        .arg(out_dir_arg())
        .arg(config_file_arg())
        .arg(root_class_arg())
        .arg(stub_filename_arg())
        .arg(stdout_arg())
}

/// Print the effective configuration.
pub fn config_command() -> Command {
    Command::new("config")
        .about("Print the effective configuration as JSON")
        .after_help(
            r#"EXAMPLES:
  copra config > copra.json       # start a config file from the defaults
  copra config -c copra.json      # show a config file merged with defaults"#,
        )
        .arg(config_file_arg())
}
