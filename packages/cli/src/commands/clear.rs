use super::open_store;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use sigforge_store::SignatureRepository;

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Confirm deleting every saved signature
    #[arg(long)]
    pub yes: bool,
}

pub fn clear(args: ClearArgs, cwd: &str) -> Result<()> {
    let (_, mut repo) = open_store(cwd)?;
    let count = repo.list().len();

    if !args.yes {
        bail!("This deletes all {count} signatures. Run again with --yes to confirm");
    }

    repo.replace_all(Vec::new())?;
    println!("{} All data cleared. ({count} signatures removed)", "✓".green());
    Ok(())
}
