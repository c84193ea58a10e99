mod cli;

use std::process;

use clap::Parser;

use minecarbon::{config::Config, logging, storage::Storage};

fn main() {
    let cli = cli::Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    if let Err(e) = logging::init(config.log_level()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let root = config
        .data_dir
        .clone()
        .or_else(Storage::default_root)
        .unwrap_or_else(|| {
            eprintln!("Could not determine home directory.");
            process::exit(1);
        });

    let storage = match Storage::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(cli, &storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
