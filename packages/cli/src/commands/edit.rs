use super::new::{parse_custom, parse_social};
use super::{find_signature, open_store};
use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use colored::Colorize;
use sigforge_schema::{Branding, CustomLink, LayoutPreset, SocialLink, CUSTOM_COLOR_PRESET_ID};
use sigforge_store::{SignaturePatch, SignatureRepository, StoreError};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Signature name or id prefix
    pub signature: String,

    /// Rename the signature
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub full_name: Option<String>,

    /// Pass "" to clear
    #[arg(long)]
    pub job_title: Option<String>,

    /// Pass "" to clear
    #[arg(long)]
    pub company: Option<String>,

    /// Pass "" to clear
    #[arg(long)]
    pub email: Option<String>,

    /// Pass "" to clear
    #[arg(long)]
    pub phone: Option<String>,

    /// Pass "" to clear
    #[arg(long)]
    pub website: Option<String>,

    /// Photo URL or data URI. Pass "" to clear
    #[arg(long)]
    pub image_url: Option<String>,

    /// Replace the social links with platform=url, repeatable
    #[arg(long = "social", value_parser = parse_social, conflicts_with = "clear_social")]
    pub social_links: Vec<SocialLink>,

    /// Remove every social link
    #[arg(long)]
    pub clear_social: bool,

    /// Replace the custom links with label=url, repeatable
    #[arg(long = "link", value_parser = parse_custom, conflicts_with = "clear_links")]
    pub custom_links: Vec<CustomLink>,

    /// Remove every custom link
    #[arg(long)]
    pub clear_links: bool,

    /// Color preset id
    #[arg(long, conflicts_with_all = ["primary", "accent"])]
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

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let (_, mut repo) = open_store(cwd)?;
    let current = find_signature(&repo, &args.signature)?;
    let id = current.id;

    let patch = build_patch(args, &current.branding)?;
    if patch.is_empty() {
        bail!("Nothing to change. Pass at least one field flag");
    }

    let updated = repo.update(id, patch).map_err(|err| match err {
        StoreError::Validation(err) => {
            anyhow!("Invalid signature:\n  {}", err.messages().join("\n  "))
        }
        other => other.into(),
    })?;

    println!(
        "{} Updated {} {}",
        "✓".green(),
        updated.name.bright_white().bold(),
        updated.id.to_string().dimmed()
    );
    Ok(())
}

fn build_patch(args: EditArgs, current: &Branding) -> Result<SignaturePatch> {
    let branding = edit_branding(&args, current)?;

    let social_links = if args.clear_social {
        Some(Vec::new())
    } else {
        (!args.social_links.is_empty()).then_some(args.social_links)
    };
    let custom_links = if args.clear_links {
        Some(Vec::new())
    } else {
        (!args.custom_links.is_empty()).then_some(args.custom_links)
    };

    Ok(SignaturePatch {
        name: args.name,
        full_name: args.full_name,
        job_title: args.job_title,
        company: args.company,
        email: args.email,
        phone: args.phone,
        website: args.website,
        image_url: args.image_url,
        social_links,
        custom_links,
        branding,
    })
}

/// The branding after applying the color and layout flags, or `None` when
/// none were given.
fn edit_branding(args: &EditArgs, current: &Branding) -> Result<Option<Branding>> {
    if args.color.is_none()
        && args.layout.is_none()
        && args.primary.is_none()
        && args.accent.is_none()
    {
        return Ok(None);
    }

    let layout_preset_id = match &args.layout {
        Some(id) => LayoutPreset::from_id(id)
            .with_context(|| format!("Unknown layout: {id}. Use horizontal, stacked or compact"))?
            .id()
            .to_string(),
        None => current.layout_preset_id.clone(),
    };

    let branding = if args.primary.is_some() || args.accent.is_some() {
        Branding {
            color_preset_id: CUSTOM_COLOR_PRESET_ID.to_string(),
            layout_preset_id,
            custom_primary: args.primary.clone().or_else(|| current.custom_primary.clone()),
            custom_accent: args.accent.clone().or_else(|| current.custom_accent.clone()),
        }
    } else {
        Branding {
            color_preset_id: args
                .color
                .clone()
                .unwrap_or_else(|| current.color_preset_id.clone()),
            layout_preset_id,
            ..current.clone()
        }
    };

    Ok(Some(branding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use sigforge_schema::SocialPlatform;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: EditArgs,
    }

    fn parse(argv: &[&str]) -> EditArgs {
        TestCli::parse_from(std::iter::once("edit").chain(argv.iter().copied())).args
    }

    fn navy_horizontal() -> Branding {
        Branding::preset("navy", LayoutPreset::Horizontal)
    }

    #[test]
    fn test_no_flags_is_an_empty_patch() {
        let patch = build_patch(parse(&["Work"]), &navy_horizontal()).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_fields_and_clearing() {
        let args = parse(&["Work", "--company", "", "--phone", "555-0199"]);
        let patch = build_patch(args, &navy_horizontal()).unwrap();

        assert_eq!(patch.company.as_deref(), Some(""));
        assert_eq!(patch.phone.as_deref(), Some("555-0199"));
        assert_eq!(patch.email, None);
        assert_eq!(patch.branding, None);
    }

    #[test]
    fn test_links_replace_or_clear() {
        let args = parse(&[
            "Work",
            "--social",
            "github=https://github.com/jane",
            "--clear-links",
        ]);
        let patch = build_patch(args, &navy_horizontal()).unwrap();

        let social = patch.social_links.unwrap();
        assert_eq!(social.len(), 1);
        assert_eq!(social[0].platform, SocialPlatform::GitHub);
        assert_eq!(patch.custom_links, Some(Vec::new()));
    }

    #[test]
    fn test_layout_only_keeps_color() {
        let args = parse(&["Work", "--layout", "compact"]);
        let patch = build_patch(args, &navy_horizontal()).unwrap();
        assert_eq!(
            patch.branding,
            Some(Branding::preset("navy", LayoutPreset::Compact))
        );
    }

    #[test]
    fn test_accent_switches_to_custom_and_keeps_layout() {
        let args = parse(&["Work", "--accent", "#123456"]);
        let patch = build_patch(args, &navy_horizontal()).unwrap();
        let branding = patch.branding.unwrap();

        assert!(branding.is_custom());
        assert_eq!(branding.custom_accent.as_deref(), Some("#123456"));
        assert_eq!(branding.custom_primary, None);
        assert_eq!(branding.layout(), Some(LayoutPreset::Horizontal));
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        assert!(build_patch(parse(&["Work", "--layout", "grid"]), &navy_horizontal()).is_err());
    }
}
