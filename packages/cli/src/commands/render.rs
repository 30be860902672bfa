use super::{find_signature, open_store};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sigforge_compiler_html::generate_signature_html;
use sigforge_schema::Signature;
use sigforge_store::SignatureRepository;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Signature id, id prefix or name
    pub signature: Option<String>,

    /// Render every saved signature
    #[arg(short, long)]
    pub all: bool,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let (config, repo) = open_store(cwd)?;

    let signatures: Vec<&Signature> = match (&args.signature, args.all) {
        (Some(query), false) => vec![find_signature(&repo, query)?],
        (None, true) => repo.list().iter().collect(),
        (Some(_), true) => return Err(anyhow!("Pass a signature or --all, not both")),
        (None, false) => return Err(anyhow!("Pass a signature to render, or --all")),
    };

    if args.stdout {
        for signature in signatures {
            println!("{}", generate_signature_html(signature));
        }
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };
    fs::create_dir_all(&out_dir)?;

    println!("{}", "🔨 Rendering signatures...".bright_blue().bold());

    for signature in &signatures {
        let html = generate_signature_html(signature);
        let path = out_dir.join(output_file_name(signature));
        fs::write(&path, html)?;
        println!(
            "  {} {} → {}",
            "✓".green(),
            signature.name,
            path.strip_prefix(cwd).unwrap_or(&path).display()
        );
    }

    println!();
    println!(
        "{} Rendered {} signatures",
        "✅".green(),
        signatures.len()
    );

    Ok(())
}

/// `{slug}-{short id}.html`, so signatures sharing a name do not collide.
pub(crate) fn output_file_name(signature: &Signature) -> String {
    let slug = signature
        .name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let id = &signature.id.to_string()[..8];
    if slug.is_empty() {
        format!("{id}.html")
    } else {
        format!("{slug}-{id}.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        let mut signature = Signature::new("Work  Email (2024)", "Jane");
        let id = signature.id.to_string()[..8].to_string();
        assert_eq!(output_file_name(&signature), format!("work-email-2024-{id}.html"));

        signature.name = "✨".into();
        assert_eq!(output_file_name(&signature), format!("{id}.html"));
    }
}
