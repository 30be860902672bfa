use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sigforge_schema::find_template;
use sigforge_store::ExportBundle;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Signature store file
    #[arg(short, long, default_value = "signatures.json")]
    pub store_path: String,

    /// Output directory for rendered HTML
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Template used by `sigforge new` when no details are given
    #[arg(short, long, default_value = "corporate-classic")]
    pub template: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    if find_template(&args.template).is_none() {
        return Err(anyhow!(
            "Unknown template: {}. Run `sigforge templates` to see the options",
            args.template
        ));
    }

    println!("{}", "📝 Initializing signature workspace...".bright_blue().bold());

    let config = Config {
        store_path: args.store_path,
        out_dir: args.out_dir,
        default_template: args.template,
        ..Config::default()
    };

    let store_path = config.get_store_path(cwd);
    if !store_path.exists() {
        if let Some(parent) = store_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&store_path, ExportBundle::default().to_json_pretty()?)?;
        println!("  {} Created {}", "✓".green(), config.store_path);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Workspace initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: sigforge new \"Work\" --full-name \"Your Name\"");
    println!("  2. Run: sigforge render \"Work\"");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
