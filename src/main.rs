mod cli;

use std::{io, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cycles::config::Config;
use cycles::storage::{MemoryStore, Storage};

fn main() {
    init_tracing();

    // Parse first so `--help` and `--version` work even with a broken config file.
    let args = cli::Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = match open_storage() {
        Ok(storage) => cli::run(args, &config, &storage),
        Err(e) => {
            // Persistence is best effort: keep working, just don't save anything.
            tracing::warn!("storage unavailable, nothing will be saved: {e}");
            cli::run(args, &config, &MemoryStore::new())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn open_storage() -> Result<Storage, String> {
    let root = Storage::default_root().ok_or("could not determine home directory")?;
    Storage::new(root).map_err(|e| format!("failed to initialize storage: {e}"))
}

/// Diagnostics go to stderr, filtered by `CYCLES_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CYCLES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
