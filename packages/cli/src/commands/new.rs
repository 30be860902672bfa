use super::open_store;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use sigforge_schema::{
    find_template, validate_create_input, Branding, CreateSignatureInput, CustomLink,
    LayoutPreset, SocialLink, SocialPlatform, CUSTOM_COLOR_PRESET_ID,
};
use sigforge_store::SignatureRepository;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Label for the new signature
    pub name: String,

    /// Start from a template (see `sigforge templates`)
    #[arg(short, long)]
    pub template: Option<String>,

    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub job_title: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    /// Photo URL or data URI (see `sigforge avatar`)
    #[arg(long)]
    pub image_url: Option<String>,

    /// Social link as platform=url, repeatable
    #[arg(long = "social", value_parser = parse_social)]
    pub social_links: Vec<SocialLink>,

    /// Custom link as label=url, repeatable
    #[arg(long = "link", value_parser = parse_custom)]
    pub custom_links: Vec<CustomLink>,

    /// Color preset id, or "custom" with --primary/--accent
    #[arg(long)]
    pub color: Option<String>,

    /// horizontal, stacked or compact
    #[arg(long)]
    pub layout: Option<String>,

    /// Custom primary color (#rgb or #rrggbb)
    #[arg(long)]
    pub primary: Option<String>,

    /// Custom accent color (#rgb or #rrggbb)
    #[arg(long)]
    pub accent: Option<String>,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let (config, mut repo) = open_store(cwd)?;

    // Without a template or a name to show, start from the configured default.
    let template_id = args
        .template
        .clone()
        .or_else(|| args.full_name.is_none().then(|| config.default_template.clone()));

    let base = match &template_id {
        Some(id) => find_template(id)
            .ok_or_else(|| anyhow!("Unknown template: {id}"))?
            .to_input(args.name.clone()),
        None => CreateSignatureInput::new(args.name.clone(), String::new()),
    };

    let input = build_input(base, args)?;
    validate_create_input(&input).map_err(|err| {
        anyhow!("Invalid signature:\n  {}", err.messages().join("\n  "))
    })?;

    let signature = input.into_signature();
    let id = signature.id;
    let name = signature.name.clone();
    repo.add(signature)?;

    println!(
        "{} Created {} {}",
        "✓".green(),
        name.bright_white().bold(),
        id.to_string().dimmed()
    );
    if let Some(template) = template_id {
        println!("  from template {}", template.bright_white());
    }

    Ok(())
}

fn build_input(mut input: CreateSignatureInput, args: NewArgs) -> Result<CreateSignatureInput> {
    if let Some(full_name) = args.full_name {
        input.full_name = full_name;
    }

    for (field, value) in [
        (&mut input.job_title, args.job_title),
        (&mut input.company, args.company),
        (&mut input.email, args.email),
        (&mut input.phone, args.phone),
        (&mut input.website, args.website),
        (&mut input.image_url, args.image_url),
    ] {
        if value.is_some() {
            *field = value;
        }
    }

    if !args.social_links.is_empty() {
        input.social_links = args.social_links;
    }
    if !args.custom_links.is_empty() {
        input.custom_links = args.custom_links;
    }

    let layout = match args.layout {
        Some(id) => LayoutPreset::from_id(&id)
            .with_context(|| format!("Unknown layout: {id}. Use horizontal, stacked or compact"))?,
        None => input.branding.layout().unwrap_or_default(),
    };

    input.branding = if args.primary.is_some() || args.accent.is_some() {
        Branding {
            color_preset_id: CUSTOM_COLOR_PRESET_ID.to_string(),
            layout_preset_id: layout.id().to_string(),
            custom_primary: args.primary,
            custom_accent: args.accent,
        }
    } else {
        let color = args
            .color
            .unwrap_or_else(|| input.branding.color_preset_id.clone());
        Branding {
            layout_preset_id: layout.id().to_string(),
            color_preset_id: color,
            ..input.branding
        }
    };

    Ok(input)
}

fn split_pair(value: &str) -> Result<(&str, &str), String> {
    value
        .split_once('=')
        .ok_or_else(|| format!("expected key=url, got {value:?}"))
}

pub(crate) fn parse_social(value: &str) -> Result<SocialLink, String> {
    let (platform, url) = split_pair(value)?;
    let platform = SocialPlatform::from_id(&platform.to_ascii_lowercase())
        .ok_or_else(|| format!("unknown platform {platform:?}"))?;
    Ok(SocialLink::new(platform, url))
}

pub(crate) fn parse_custom(value: &str) -> Result<CustomLink, String> {
    let (label, url) = split_pair(value)?;
    Ok(CustomLink::new(label, url))
}
