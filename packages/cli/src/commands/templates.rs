use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sigforge_schema::SIGNATURE_TEMPLATES;

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Print templates as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn templates(args: TemplatesArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&SIGNATURE_TEMPLATES)?);
        return Ok(());
    }

    for template in &SIGNATURE_TEMPLATES {
        println!(
            "{} {}",
            template.id.bright_white().bold(),
            format!("({}, {})", template.data.layout, template.data.color_preset_id).dimmed()
        );
        println!("  {}", template.name);
        println!("  {}", template.description.dimmed());
        println!();
    }

    Ok(())
}
