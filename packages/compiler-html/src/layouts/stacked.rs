use sigforge_schema::Signature;

use super::{info_rows, outer_table, photo_tag, Rows};
use crate::colors::LayoutColors;
use crate::utils::{generate_initials_avatar_html, AVATAR_SIZE};

const CENTER: &str = "text-align: center; ";

/// Single centered column with the avatar above the name.
pub fn generate_stacked_html(signature: &Signature, colors: &LayoutColors) -> String {
    let mut rows = Rows::new();

    let avatar = photo_tag(signature, " margin: 0 auto;").or_else(|| {
        (!signature.full_name.is_empty()).then(|| {
            format!(
                "<div style=\"display: inline-block;\">{}</div>",
                generate_initials_avatar_html(&signature.full_name, &colors.primary, AVATAR_SIZE)
            )
        })
    });
    rows.add_if(&format!("{CENTER}padding-bottom: 12px;"), avatar);

    let mut output = rows.get_output();
    output.push_str(&info_rows(signature, colors, CENTER).get_output());

    outer_table(&colors.primary, &output)
}
