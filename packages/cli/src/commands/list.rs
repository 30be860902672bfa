use super::{open_store, short_id};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sigforge_store::SignatureRepository;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print signatures as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn list(args: ListArgs, cwd: &str) -> Result<()> {
    let (_, repo) = open_store(cwd)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(repo.list())?);
        return Ok(());
    }

    if repo.list().is_empty() {
        println!("{}", "No signatures yet. Create one with `sigforge new`.".yellow());
        return Ok(());
    }

    for signature in repo.list() {
        println!(
            "{}  {}  {} {}",
            short_id(signature).dimmed(),
            signature.name.bright_white().bold(),
            signature.full_name,
            format!(
                "({}, {})",
                signature.branding.layout_preset_id, signature.branding.color_preset_id
            )
            .dimmed()
        );
    }

    Ok(())
}
