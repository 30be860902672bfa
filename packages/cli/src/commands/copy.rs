use super::{find_signature, open_store};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sigforge_clipboard::{copy_html, SystemClipboard};
use sigforge_compiler_html::generate_signature_html;

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Signature id, id prefix or name
    pub signature: String,
}

pub fn copy(args: CopyArgs, cwd: &str) -> Result<()> {
    let (_, repo) = open_store(cwd)?;
    let signature = find_signature(&repo, &args.signature)?;
    let html = generate_signature_html(signature);

    if !copy_html(&mut SystemClipboard::new(), &html) {
        return Err(anyhow!("Failed to copy"));
    }

    println!(
        "{} Copied {} to the clipboard. Paste it into your email client's signature settings.",
        "✓".green(),
        signature.name.bright_white().bold()
    );

    Ok(())
}
