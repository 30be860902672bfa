use super::open_store;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sigforge_store::{ExportBundle, SignatureRepository, DEFAULT_EXPORT_FILE_NAME};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_EXPORT_FILE_NAME)]
    pub output: String,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let (_, repo) = open_store(cwd)?;
    let bundle = ExportBundle::new(repo.list().to_vec());
    let json = bundle.to_json_pretty()?;

    if args.stdout {
        println!("{json}");
        return Ok(());
    }

    let path = PathBuf::from(cwd).join(&args.output);
    fs::write(&path, json)?;
    println!(
        "{} Exported {} signatures to {}",
        "✓".green(),
        bundle.signatures.len(),
        args.output.bright_white()
    );

    Ok(())
}
