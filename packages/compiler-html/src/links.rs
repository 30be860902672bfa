//! The link row shared by every layout.

use sigforge_schema::{CustomLink, SocialLink};

use crate::icons::{platform_display_name, platform_icon_url};
use crate::utils::{ensure_absolute_url, escape_html};

/// Rendered size of a social icon, in pixels.
pub const ICON_SIZE: u32 = 20;

const ICON_SEPARATOR: &str = "&nbsp;";
const TEXT_SEPARATOR: &str = " &nbsp;|&nbsp; ";

/// Markup for a signature's social and custom links.
///
/// Social links whose platform has an icon render as 20x20 icon anchors,
/// separated by `&nbsp;`. Social links without an icon, followed by every
/// custom link, render as accent-colored text anchors separated by a padded
/// pipe. The icon group comes first. Returns `""` when there are no links.
///
/// Link order is preserved within each group, duplicates included.
pub fn generate_links_markup(
    social_links: &[SocialLink],
    custom_links: &[CustomLink],
    accent_color: &str,
) -> String {
    let text_style = format!("color: {accent_color}; text-decoration: none; font-size: 12px;");

    let mut icon_tags = Vec::new();
    let mut text_tags = Vec::new();

    for link in social_links {
        let href = escape_html(&ensure_absolute_url(&link.url));
        let name = escape_html(platform_display_name(link.platform));

        match platform_icon_url(link.platform) {
            Some(icon) => icon_tags.push(format!(
                "<a href=\"{href}\" style=\"text-decoration: none;\"><img src=\"{icon}\" width=\"{ICON_SIZE}\" height=\"{ICON_SIZE}\" alt=\"{name}\" style=\"display: inline-block; vertical-align: middle; border: 0;\" /></a>",
                icon = escape_html(icon),
            )),
            None => text_tags.push(format!(
                "<a href=\"{href}\" style=\"{text_style}\">{name}</a>"
            )),
        }
    }

    text_tags.extend(custom_links.iter().map(|link| {
        format!(
            "<a href=\"{}\" style=\"{text_style}\">{}</a>",
            escape_html(&ensure_absolute_url(&link.url)),
            escape_html(&link.label),
        )
    }));

    let icon_group = icon_tags.join(ICON_SEPARATOR);
    let text_group = text_tags.join(TEXT_SEPARATOR);

    match (icon_group.is_empty(), text_group.is_empty()) {
        (false, false) => format!("{icon_group}{TEXT_SEPARATOR}{text_group}"),
        (false, true) => icon_group,
        (true, false) => text_group,
        (true, true) => String::new(),
    }
}
