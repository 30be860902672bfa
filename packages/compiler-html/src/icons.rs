//! Social platform icon assets and display names.

use sigforge_schema::SocialPlatform;

/// CDN icon for a platform. Vimeo and Etsy have no icon and are rendered as
/// text links instead.
pub fn platform_icon_url(platform: SocialPlatform) -> Option<&'static str> {
    match platform {
        SocialPlatform::Instagram => Some("https://s.magecdn.com/social/tc-instagram.svg"),
        SocialPlatform::LinkedIn => Some("https://s.magecdn.com/social/tc-linkedin.svg"),
        SocialPlatform::Behance => Some("https://s.magecdn.com/social/tc-behance.svg"),
        SocialPlatform::Dribbble => Some("https://s.magecdn.com/social/tc-dribbble.svg"),
        SocialPlatform::Twitter => Some("https://s.magecdn.com/social/tc-twitter.svg"),
        SocialPlatform::TikTok => Some("https://s.magecdn.com/social/tc-tiktok.svg"),
        SocialPlatform::YouTube => Some("https://s.magecdn.com/social/tc-youtube.svg"),
        SocialPlatform::Facebook => Some("https://s.magecdn.com/social/tc-facebook.svg"),
        SocialPlatform::GitHub => Some("https://s.magecdn.com/social/tc-github.svg"),
        SocialPlatform::Pinterest => Some("https://s.magecdn.com/social/tc-pinterest.svg"),
        SocialPlatform::Vimeo | SocialPlatform::Etsy => None,
    }
}

/// Icon lookup by platform id. Unknown ids have no icon.
pub fn icon_url(platform: &str) -> Option<&'static str> {
    SocialPlatform::from_id(platform).and_then(platform_icon_url)
}

/// Human-readable platform name.
pub fn platform_display_name(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Instagram => "Instagram",
        SocialPlatform::LinkedIn => "LinkedIn",
        SocialPlatform::Behance => "Behance",
        SocialPlatform::Dribbble => "Dribbble",
        SocialPlatform::Twitter => "Twitter",
        SocialPlatform::TikTok => "TikTok",
        SocialPlatform::YouTube => "YouTube",
        SocialPlatform::Facebook => "Facebook",
        SocialPlatform::GitHub => "GitHub",
        SocialPlatform::Pinterest => "Pinterest",
        SocialPlatform::Vimeo => "Vimeo",
        SocialPlatform::Etsy => "Etsy",
    }
}

/// Display name for any platform string. Known platforms use their fixed
/// spelling; anything else gets its first character uppercased.
pub fn format_platform_name(platform: &str) -> String {
    if let Some(known) = SocialPlatform::from_id(platform) {
        return platform_display_name(known).to_string();
    }

    let mut chars = platform.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
