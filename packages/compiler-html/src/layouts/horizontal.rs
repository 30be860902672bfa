use sigforge_schema::Signature;

use super::{info_rows, outer_table, photo_tag};
use crate::colors::LayoutColors;
use crate::utils::{generate_initials_avatar_html, AVATAR_SIZE};

const AVATAR_CELL_STYLE: &str = "vertical-align: top; padding-right: 16px;";

/// Photo (or initials badge) on the left, details on the right.
///
/// The avatar cell is left out entirely when there is neither a photo nor a
/// name to draw initials from.
pub fn generate_horizontal_html(signature: &Signature, colors: &LayoutColors) -> String {
    let mut cells = String::new();

    let avatar = photo_tag(signature, "").or_else(|| {
        (!signature.full_name.is_empty()).then(|| {
            generate_initials_avatar_html(&signature.full_name, &colors.primary, AVATAR_SIZE)
        })
    });
    if let Some(avatar) = avatar {
        cells.push_str(&format!("<td style=\"{AVATAR_CELL_STYLE}\">{avatar}</td>"));
    }

    let info = info_rows(signature, colors, "").into_table();
    cells.push_str(&format!("<td style=\"vertical-align: top;\">{info}</td>"));

    outer_table(&colors.primary, &format!("<tr>{cells}</tr>"))
}
