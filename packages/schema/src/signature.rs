use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::platform::SocialPlatform;
use crate::preset::{LayoutPreset, CUSTOM_COLOR_PRESET_ID};

/// Upper bound on `socialLinks` entries.
pub const MAX_SOCIAL_LINKS: usize = 10;

/// Upper bound on `customLinks` entries.
pub const MAX_CUSTOM_LINKS: usize = 5;

/// A persisted email signature configuration.
///
/// Serialized with camelCase field names. Optional text fields are omitted
/// from JSON when unset; an empty string is kept as-is and treated as absent
/// when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    /// Unique identifier
    pub id: Uuid,

    /// Label used to tell signatures apart; never rendered
    pub name: String,

    /// Full name displayed in the signature
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Photo URL or base64 data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    #[serde(default)]
    pub custom_links: Vec<CustomLink>,

    /// Colors and layout. Defaults to charcoal/horizontal for older records.
    #[serde(default)]
    pub branding: Branding,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Signature {
    /// Creates a signature with a fresh id, default branding and no optional
    /// fields set.
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        CreateSignatureInput::new(name, full_name).into_signature()
    }

    /// Sets `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: SocialPlatform, url: impl Into<String>) -> Self {
        Self {
            platform,
            url: url.into(),
        }
    }
}

/// A free-form labelled link, always rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLink {
    pub label: String,
    pub url: String,
}

impl CustomLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Color and layout selection.
///
/// Preset and layout ids are kept as strings so that records written by
/// other versions still load; validation reports ids it does not know and
/// the compiler falls back to charcoal/horizontal for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub color_preset_id: String,
    pub layout_preset_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_primary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_accent: Option<String>,
}

impl Branding {
    /// Branding using one of the built-in color presets.
    pub fn preset(color_preset_id: impl Into<String>, layout: LayoutPreset) -> Self {
        Self {
            color_preset_id: color_preset_id.into(),
            layout_preset_id: layout.id().to_string(),
            custom_primary: None,
            custom_accent: None,
        }
    }

    /// Branding with explicit hex colors.
    pub fn custom(
        primary: impl Into<String>,
        accent: impl Into<String>,
        layout: LayoutPreset,
    ) -> Self {
        Self {
            color_preset_id: CUSTOM_COLOR_PRESET_ID.to_string(),
            layout_preset_id: layout.id().to_string(),
            custom_primary: Some(primary.into()),
            custom_accent: Some(accent.into()),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.color_preset_id == CUSTOM_COLOR_PRESET_ID
    }

    /// The selected layout, or `None` when the id is not recognised.
    pub fn layout(&self) -> Option<LayoutPreset> {
        LayoutPreset::from_id(&self.layout_preset_id)
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self::preset("charcoal", LayoutPreset::Horizontal)
    }
}

/// Everything needed to create a signature; the id and timestamps are
/// generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignatureInput {
    pub name: String,
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    #[serde(default)]
    pub custom_links: Vec<CustomLink>,

    #[serde(default)]
    pub branding: Branding,
}

impl CreateSignatureInput {
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            job_title: None,
            company: None,
            email: None,
            phone: None,
            website: None,
            image_url: None,
            social_links: Vec::new(),
            custom_links: Vec::new(),
            branding: Branding::default(),
        }
    }

    /// Stamps the input with a new v4 id and the current time.
    pub fn into_signature(self) -> Signature {
        let now = Utc::now();
        Signature {
            id: Uuid::new_v4(),
            name: self.name,
            full_name: self.full_name,
            job_title: self.job_title,
            company: self.company,
            email: self.email,
            phone: self.phone,
            website: self.website,
            image_url: self.image_url,
            social_links: self.social_links,
            custom_links: self.custom_links,
            branding: self.branding,
            created_at: now,
            updated_at: now,
        }
    }
}
