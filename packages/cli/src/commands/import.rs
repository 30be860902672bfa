use super::open_store;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sigforge_store::{ExportBundle, SignatureRepository};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// A file written by `sigforge export`
    pub file: String,
}

/// Replaces the whole store with the file's signatures.
pub fn import(args: ImportArgs, cwd: &str) -> Result<()> {
    let text = fs::read_to_string(PathBuf::from(cwd).join(&args.file))?;
    let bundle = ExportBundle::parse(&text)?;

    let (_, mut repo) = open_store(cwd)?;
    let count = bundle.signatures.len();
    repo.replace_all(bundle.signatures)?;

    println!("{} Data imported successfully. ({count} signatures)", "✓".green());
    Ok(())
}
