//! Checks that every placeholder track exists and is a silent WAV file.

use clap::Parser;
use std::path::PathBuf;
use silent_tracks::{batch, init_logging};

#[derive(Parser, Debug)]
#[command(name = "check-tracks")]
#[command(about = "Verify the placeholder music files")]
struct Args {
    /// Directory containing assets/music
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.root.is_dir() {
        anyhow::bail!("Root directory does not exist: {}", args.root.display());
    }

    let statuses = batch::verify_tracks(&args.root);
    for (track, status) in &statuses {
        let mark = if status.is_valid() { "✅" } else { "❌" };
        println!("{} {} ({}): {}", mark, track.title, track.relative_path().display(), status);
    }

    let bad = statuses.iter().filter(|(_, status)| !status.is_valid()).count();
    if bad > 0 {
        anyhow::bail!("{} of {} placeholder tracks need attention", bad, statuses.len());
    }

    println!("\nAll {} placeholder tracks are valid.", statuses.len());
    Ok(())
}
