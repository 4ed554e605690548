use std::io::{self, Write};
use std::path::PathBuf;

use copra_lib::{Hierarchy, StubConfig, StubGenerator};
use tracing::info;

use super::load_config;

pub struct GenerateArgs {
    pub hierarchy: PathBuf,
    /// `None` prints to stdout.
    pub out_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub root_class: Option<String>,
    pub stub_filename: Option<String>,
}

/// Where the rendered stub went.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Text(String),
}

pub fn run(args: GenerateArgs) {
    match execute(&args) {
        Ok(Output::File(path)) => eprintln!("wrote {}", path.display()),
        Ok(Output::Text(stub)) => {
            if let Err(e) = io::stdout().write_all(stub.as_bytes()) {
                eprintln!("error: failed to write stub: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn execute(args: &GenerateArgs) -> copra_lib::Result<Output> {
    let config = effective_config(args)?;
    let hierarchy = Hierarchy::from_path(&args.hierarchy)?;
    info!(
        path = %args.hierarchy.display(),
        nodes = hierarchy.nodes().len(),
        "Loaded hierarchy"
    );

    let generator = StubGenerator::new(&config);
    match &args.out_dir {
        Some(dir) => generator.generate(&hierarchy, dir).map(Output::File),
        None => Ok(Output::Text(generator.render(&hierarchy))),
    }
}

/// Config file values with command-line overrides applied.
fn effective_config(args: &GenerateArgs) -> copra_lib::Result<StubConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(name) = &args.root_class {
        config = config.root_class_name(name.as_str());
    }
    if let Some(name) = &args.stub_filename {
        config = config.stub_filename(name.as_str());
    }
    Ok(config)
}
