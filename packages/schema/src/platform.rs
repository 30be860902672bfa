use serde::{Deserialize, Serialize};
use std::fmt;

/// Social platforms a signature can link to.
///
/// The set is closed: records naming any other platform fail to deserialize.
/// Free-form platform strings coming from elsewhere can be mapped with
/// [`SocialPlatform::from_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    LinkedIn,
    Behance,
    Dribbble,
    Twitter,
    TikTok,
    YouTube,
    Facebook,
    GitHub,
    Pinterest,
    Vimeo,
    Etsy,
}

impl SocialPlatform {
    /// All platforms, in the order the editor offers them.
    pub const ALL: [SocialPlatform; 12] = [
        SocialPlatform::Instagram,
        SocialPlatform::LinkedIn,
        SocialPlatform::Behance,
        SocialPlatform::Dribbble,
        SocialPlatform::Twitter,
        SocialPlatform::TikTok,
        SocialPlatform::YouTube,
        SocialPlatform::Facebook,
        SocialPlatform::GitHub,
        SocialPlatform::Pinterest,
        SocialPlatform::Vimeo,
        SocialPlatform::Etsy,
    ];

    /// The lowercase identifier used in stored records.
    pub fn id(self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Behance => "behance",
            SocialPlatform::Dribbble => "dribbble",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::TikTok => "tiktok",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::GitHub => "github",
            SocialPlatform::Pinterest => "pinterest",
            SocialPlatform::Vimeo => "vimeo",
            SocialPlatform::Etsy => "etsy",
        }
    }

    /// Look up a platform by its exact identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| platform.id() == id)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
