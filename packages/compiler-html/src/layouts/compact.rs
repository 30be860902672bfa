use sigforge_schema::Signature;

use super::{contact_parts, join_parts, links_row, outer_table, title_parts, website_anchor, Rows};
use crate::colors::LayoutColors;
use crate::utils::{escape_html, present};

/// Dense text-only block: one bold identity line, one contact line and the
/// link row. Never renders a photo.
pub fn generate_compact_html(signature: &Signature, colors: &LayoutColors) -> String {
    let LayoutColors { primary, accent } = colors;
    let mut rows = Rows::new();

    let mut identity: Vec<String> = (!signature.full_name.is_empty())
        .then(|| escape_html(&signature.full_name))
        .into_iter()
        .collect();
    identity.extend(title_parts(signature));
    rows.add_if(
        &format!("font-size: 14px; font-weight: bold; color: {primary}; padding-bottom: 2px;"),
        join_parts(identity),
    );

    let mut contact = contact_parts(signature, accent);
    if let Some(website) = present(&signature.website) {
        contact.push(website_anchor(website, accent));
    }
    rows.add_if(
        &format!("font-size: 12px; color: {primary}; padding-bottom: 2px;"),
        join_parts(contact),
    );

    rows.add_if("padding-bottom: 0;", links_row(signature, accent));

    outer_table(primary, &rows.get_output())
}
