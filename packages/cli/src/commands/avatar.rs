use super::{find_signature, open_store};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sigforge_avatar::resize_image_file;
use sigforge_store::{SignaturePatch, SignatureRepository};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AvatarArgs {
    /// Image file (PNG, JPEG, GIF, WebP, ...)
    pub image: PathBuf,

    /// Attach the result to this signature instead of printing it
    #[arg(short, long)]
    pub signature: Option<String>,

    /// Longest side in pixels (overrides config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_size: Option<u32>,
}

pub fn avatar(args: AvatarArgs, cwd: &str) -> Result<()> {
    let (config, mut repo) = open_store(cwd)?;
    let max_size = args.max_size.unwrap_or(config.avatar_max_size);

    let resized = resize_image_file(PathBuf::from(cwd).join(&args.image), max_size)?;
    if let Some(warning) = resized.warning {
        eprintln!("{} {}", "⚠️".yellow(), warning.to_string().yellow());
    }

    let Some(query) = args.signature else {
        println!("{}", resized.data_url);
        return Ok(());
    };

    let id = find_signature(&repo, &query)?.id;
    let updated = repo.update(
        id,
        SignaturePatch {
            image_url: Some(resized.data_url),
            ..Default::default()
        },
    )?;

    println!(
        "{} Set a {}x{} photo on {}",
        "✓".green(),
        resized.width,
        resized.height,
        updated.name.bright_white().bold()
    );

    Ok(())
}
