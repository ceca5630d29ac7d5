//! Silent Tracks - placeholder music generator

use clap::Parser;
use std::process;
use silent_tracks::{batch, init_logging, Args, Config, Result};

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.verbose {
        println!("{}", silent_tracks::banner());
        println!();
    }

    let config = Config::from_args(args)?;
    log::debug!("Root: {}, duration: {}s", config.root.display(), config.duration_seconds);

    batch::run_batch(&config.root, config.duration_seconds)?;
    batch::print_guidance();

    Ok(())
}
