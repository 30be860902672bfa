use super::{find_signature, open_store};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sigforge_store::SignatureRepository;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Signature name or id prefix
    pub signature: String,
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let (_, mut repo) = open_store(cwd)?;
    let id = find_signature(&repo, &args.signature)?.id;
    let removed = repo.remove(id)?;

    println!(
        "{} Removed {} {}",
        "✓".green(),
        removed.name.bright_white().bold(),
        removed.id.to_string().dimmed()
    );
    Ok(())
}
