use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use devclean::cleaner::{clean, CleanOptions};
use devclean::format::human_size;
use devclean::scanner::collect_artifacts;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Clean build artifacts and dependency caches from project trees",
    long_about = None
)]
struct Args {
    /// Root directory to scan
    directory: PathBuf,

    /// Show what would be deleted without actually deleting
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.directory.is_dir() {
        bail!(
            "{} does not exist or is not a directory",
            args.directory.display()
        );
    }

    let start = Instant::now();

    println!("\nScanning {}...", args.directory.display());

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_message("Looking for artifact directories...");

    let artifacts = collect_artifacts(&args.directory);

    progress.finish_and_clear();
    log::debug!("collected {} artifact directories", artifacts.len());

    let summary = clean(
        &artifacts,
        &CleanOptions {
            dry_run: args.dry_run,
        },
    );

    let elapsed = start.elapsed();

    println!();
    println!("{}", "Summary:".bold());
    println!("Cleaned {} directories", summary.processed);
    println!("Freed up {}", human_size(summary.bytes).green());
    if summary.failed > 0 {
        println!(
            "{}",
            format!("Failed to remove {} directories", summary.failed).red()
        );
    }
    println!("Time taken: {:.2} seconds", elapsed.as_secs_f64());

    Ok(())
}
