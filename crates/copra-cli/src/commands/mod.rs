pub mod config;
pub mod generate;


use std::path::Path;

use copra_lib::StubConfig;
use tracing::debug;

/// Load a config file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> copra_lib::Result<StubConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            StubConfig::load(path)
        }
        None => Ok(StubConfig::default()),
    }
}
