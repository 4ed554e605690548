//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::config::ConfigArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub hierarchy: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub root_class: Option<String>,
    pub stub_filename: Option<String>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let out_dir = if m.get_flag("stdout") {
            None
        } else {
            m.get_one::<PathBuf>("out_dir").cloned()
        };

        Self {
            hierarchy: m
                .get_one::<PathBuf>("hierarchy")
                .cloned()
                .unwrap_or_default(),
            out_dir,
            config: m.get_one::<PathBuf>("config").cloned(),
            root_class: m.get_one::<String>("root_class").cloned(),
            stub_filename: m.get_one::<String>("stub_filename").cloned(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            hierarchy: p.hierarchy,
            out_dir: p.out_dir,
            config: p.config,
            root_class: p.root_class,
            stub_filename: p.stub_filename,
        }
    }
}

pub struct ConfigParams {
    pub config: Option<PathBuf>,
}

impl ConfigParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
        }
    }
}

impl From<ConfigParams> for ConfigArgs {
    fn from(p: ConfigParams) -> Self {
        Self { config: p.config }
    }
}
