use std::path::PathBuf;

use super::load_config;

pub struct ConfigArgs {
    pub config: Option<PathBuf>,
}

pub fn run(args: ConfigArgs) {
    let json = load_config(args.config.as_deref()).and_then(|config| config.to_json());
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
