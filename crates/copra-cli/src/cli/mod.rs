mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

use tracing::Level;

pub use commands::build_cli;
pub use dispatch::{ConfigParams, GenerateParams};

/// Log level from the global `-v`/`-q` flags. Warnings show by default.
pub fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
