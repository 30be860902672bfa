use serde::{Deserialize, Serialize};
use sigforge_schema::{Branding, CustomLink, Signature, SocialLink};

/// A partial update. Unset fields leave the stored value alone.
///
/// For the optional text fields an empty string clears the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignaturePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_links: Option<Vec<CustomLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,
}

impl SignaturePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `signature`. Timestamps are left to the caller.
    pub fn apply_to(self, signature: &mut Signature) {
        if let Some(name) = self.name {
            signature.name = name;
        }
        if let Some(full_name) = self.full_name {
            signature.full_name = full_name;
        }

        set_optional(&mut signature.job_title, self.job_title);
        set_optional(&mut signature.company, self.company);
        set_optional(&mut signature.email, self.email);
        set_optional(&mut signature.phone, self.phone);
        set_optional(&mut signature.website, self.website);
        set_optional(&mut signature.image_url, self.image_url);

        if let Some(links) = self.social_links {
            signature.social_links = links;
        }
        if let Some(links) = self.custom_links {
            signature.custom_links = links;
        }
        if let Some(branding) = self.branding {
            signature.branding = branding;
        }
    }
}

fn set_optional(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *field = (!value.is_empty()).then_some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigforge_schema::testing::mock_signature;
    use sigforge_schema::{LayoutPreset, SocialPlatform};

    #[test]
    fn empty_patch_changes_nothing() {
        let mut signature = mock_signature();
        let before = signature.clone();

        assert!(SignaturePatch::default().is_empty());
        SignaturePatch::default().apply_to(&mut signature);

        assert_eq!(signature, before);
    }

    #[test]
    fn set_fields_overwrite() {
        let mut signature = mock_signature();
        SignaturePatch {
            full_name: Some("Jane Q. Artist".into()),
            company: Some("Solo".into()),
            social_links: Some(vec![SocialLink::new(
                SocialPlatform::Dribbble,
                "https://dribbble.com/jane",
            )]),
            branding: Some(Branding::preset("wine", LayoutPreset::Stacked)),
            ..Default::default()
        }
        .apply_to(&mut signature);

        assert_eq!(signature.full_name, "Jane Q. Artist");
        assert_eq!(signature.company.as_deref(), Some("Solo"));
        assert_eq!(signature.job_title.as_deref(), Some("Illustrator"));
        assert_eq!(signature.social_links.len(), 1);
        assert_eq!(signature.branding.color_preset_id, "wine");
    }

    #[test]
    fn empty_string_clears_optional_field() {
        let mut signature = mock_signature();
        SignaturePatch {
            phone: Some(String::new()),
            ..Default::default()
        }
        .apply_to(&mut signature);

        assert_eq!(signature.phone, None);
    }

    #[test]
    fn deserializes_partial_json() {
        let patch: SignaturePatch =
            serde_json::from_str(r#"{"jobTitle":"Painter","customLinks":[]}"#).unwrap();
        assert_eq!(patch.job_title.as_deref(), Some("Painter"));
        assert_eq!(patch.custom_links, Some(vec![]));
        assert!(patch.name.is_none());
    }
}
