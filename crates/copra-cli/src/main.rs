mod cli;
mod commands;

use cli::{ConfigParams, GenerateParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();

    tracing_subscriber::fmt()
        .with_max_level(log_level(matches.get_count("verbose"), matches.get_flag("quiet")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("config", m)) => {
            let params = ConfigParams::from_matches(m);
            commands::config::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
