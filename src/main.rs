// Fri Aug 28 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use mapsearch::{MappedFile, Pattern};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mapsearch")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Exact substring search over a memory-mapped file", long_about = None)]
struct Args {
    /// File to search
    file: PathBuf,

    /// Byte pattern to search for
    pattern: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if args.verbose { "debug" } else { "warn" },
    ))
    .init();

    if args.pattern.is_empty() {
        eprintln!("{} Empty pattern not allowed", "[!]".red());
        eprintln!("Usage: mapsearch <FILE> <PATTERN>");
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mapped = MappedFile::open(&args.file)
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    if mapped.is_empty() {
        println!("File is empty.");
        return Ok(());
    }

    let view = mapped
        .map()
        .with_context(|| format!("cannot map {}", args.file.display()))?;

    let pattern = Pattern::new(args.pattern.as_bytes())?;

    println!("Searching \"{}\" in file: {}", args.pattern, args.file.display());

    let mut matches = 0usize;
    for offset in pattern.matches_in(view.as_slice()) {
        println!("Match at byte offset: {}", offset);
        matches += 1;
    }

    if matches == 0 {
        println!("No matches found.");
    }

    log::debug!("scanned {} bytes, {} matches", view.len(), matches);

    Ok(())
}
