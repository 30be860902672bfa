//! Curated starting points for new signatures.

use serde::Serialize;

use crate::platform::SocialPlatform;
use crate::preset::LayoutPreset;
use crate::signature::{Branding, CreateSignatureInput, CustomLink, Signature, SocialLink};

/// A curated signature template.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub data: TemplateData,
}

/// Sample values a template pre-fills.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub full_name: &'static str,
    pub job_title: Option<&'static str>,
    pub company: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub website: Option<&'static str>,
    pub social_links: &'static [(SocialPlatform, &'static str)],
    pub custom_links: &'static [(&'static str, &'static str)],
    pub color_preset_id: &'static str,
    pub layout: LayoutPreset,
}

impl SignatureTemplate {
    /// The template's data as creation input under the given signature name.
    pub fn to_input(&self, name: impl Into<String>) -> CreateSignatureInput {
        let data = &self.data;
        let owned = |value: Option<&'static str>| value.map(str::to_string);

        CreateSignatureInput {
            name: name.into(),
            full_name: data.full_name.to_string(),
            job_title: owned(data.job_title),
            company: owned(data.company),
            email: owned(data.email),
            phone: owned(data.phone),
            website: owned(data.website),
            image_url: None,
            social_links: data
                .social_links
                .iter()
                .map(|(platform, url)| SocialLink::new(*platform, *url))
                .collect(),
            custom_links: data
                .custom_links
                .iter()
                .map(|(label, url)| CustomLink::new(*label, *url))
                .collect(),
            branding: Branding::preset(data.color_preset_id, data.layout),
        }
    }

    /// A new signature with a fresh id built from this template.
    pub fn instantiate(&self, name: impl Into<String>) -> Signature {
        self.to_input(name).into_signature()
    }
}

/// Finds a template by id.
pub fn find_template(id: &str) -> Option<&'static SignatureTemplate> {
    SIGNATURE_TEMPLATES.iter().find(|template| template.id == id)
}

pub const SIGNATURE_TEMPLATES: [SignatureTemplate; 6] = [
    SignatureTemplate {
        id: "creative-professional",
        name: "Creative Professional",
        description: "A stacked, centered layout with ocean-blue tones for designers, photographers, and visual artists.",
        data: TemplateData {
            full_name: "Mia Laurent",
            job_title: Some("Creative Director"),
            company: Some("Studio Lumina"),
            email: Some("mia@studiolumina.co"),
            phone: Some("(415) 555-0192"),
            website: Some("https://studiolumina.co"),
            social_links: &[
                (SocialPlatform::Instagram, "https://instagram.com/studiolumina"),
                (SocialPlatform::Behance, "https://behance.net/mialaurent"),
            ],
            custom_links: &[],
            color_preset_id: "ocean",
            layout: LayoutPreset::Stacked,
        },
    },
    SignatureTemplate {
        id: "corporate-classic",
        name: "Corporate Classic",
        description: "A polished horizontal layout in navy for executives, consultants, and traditional business settings.",
        data: TemplateData {
            full_name: "James Henderson",
            job_title: Some("Senior Vice President"),
            company: Some("Meridian Partners"),
            email: Some("j.henderson@meridianpartners.com"),
            phone: Some("(212) 555-0147"),
            website: Some("https://meridianpartners.com"),
            social_links: &[(
                SocialPlatform::LinkedIn,
                "https://linkedin.com/in/jameshenderson",
            )],
            custom_links: &[],
            color_preset_id: "navy",
            layout: LayoutPreset::Horizontal,
        },
    },
    SignatureTemplate {
        id: "minimalist",
        name: "Minimalist",
        description: "A stripped-down compact layout in black. Just the essentials.",
        data: TemplateData {
            full_name: "Alex Kim",
            job_title: Some("Product Designer"),
            company: None,
            email: Some("alex@alexkim.design"),
            phone: None,
            website: None,
            social_links: &[],
            custom_links: &[],
            color_preset_id: "minimal",
            layout: LayoutPreset::Compact,
        },
    },
    SignatureTemplate {
        id: "bold-colorful",
        name: "Bold & Colorful",
        description: "A vibrant horizontal layout in burgundy with multiple social links for influencers and public figures.",
        data: TemplateData {
            full_name: "Sofia Reyes",
            job_title: Some("Brand Strategist"),
            company: Some("Reyes Creative"),
            email: Some("sofia@reyescreative.com"),
            phone: Some("(310) 555-0283"),
            website: Some("https://reyescreative.com"),
            social_links: &[
                (SocialPlatform::Instagram, "https://instagram.com/sofiareyes"),
                (SocialPlatform::LinkedIn, "https://linkedin.com/in/sofiareyes"),
                (SocialPlatform::Twitter, "https://twitter.com/sofiareyes"),
                (SocialPlatform::YouTube, "https://youtube.com/@sofiareyes"),
            ],
            custom_links: &[],
            color_preset_id: "wine",
            layout: LayoutPreset::Horizontal,
        },
    },
    SignatureTemplate {
        id: "tech-founder",
        name: "Tech Founder",
        description: "A modern stacked layout in dark midnight tones for startup founders and engineers.",
        data: TemplateData {
            full_name: "Daniel Park",
            job_title: Some("Co-Founder & CTO"),
            company: Some("NovaByte Labs"),
            email: Some("daniel@novabytelabs.io"),
            phone: None,
            website: Some("https://novabytelabs.io"),
            social_links: &[
                (SocialPlatform::GitHub, "https://github.com/danielpark"),
                (SocialPlatform::LinkedIn, "https://linkedin.com/in/danielpark"),
            ],
            custom_links: &[],
            color_preset_id: "midnight",
            layout: LayoutPreset::Stacked,
        },
    },
    SignatureTemplate {
        id: "freelancer",
        name: "Freelancer",
        description: "A compact, forest-green layout with portfolio links for independent creatives and contractors.",
        data: TemplateData {
            full_name: "Nina Torres",
            job_title: Some("Freelance Illustrator"),
            company: None,
            email: Some("nina@ninatorres.art"),
            phone: None,
            website: Some("https://ninatorres.art"),
            social_links: &[(SocialPlatform::Instagram, "https://instagram.com/ninatorresart")],
            custom_links: &[
                ("Portfolio", "https://ninatorres.art/portfolio"),
                ("Shop", "https://ninatorres.art/shop"),
            ],
            color_preset_id: "forest",
            layout: LayoutPreset::Compact,
        },
    },
];
