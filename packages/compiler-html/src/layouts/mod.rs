//! Table-based renderings of a signature.
//!
//! Every layout emits a single self-contained `<table>` fragment with all
//! styling inline. User text is escaped before it reaches any of the
//! builders in this module.

mod compact;
mod horizontal;
mod stacked;

pub use compact::generate_compact_html;
pub use horizontal::generate_horizontal_html;
pub use stacked::generate_stacked_html;

use sigforge_schema::Signature;

use crate::colors::LayoutColors;
use crate::links::generate_links_markup;
use crate::utils::{escape_html, present, strip_protocol, AVATAR_SIZE, FIELD_SEPARATOR};

const TABLE_OPEN: &str = "<table cellpadding=\"0\" cellspacing=\"0\" border=\"0\"";

/// Accumulates `<tr><td>` rows for one table.
struct Rows {
    buffer: String,
}

impl Rows {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn add(&mut self, style: &str, content: &str) {
        self.buffer.push_str("<tr><td style=\"");
        self.buffer.push_str(style);
        self.buffer.push_str("\">");
        self.buffer.push_str(content);
        self.buffer.push_str("</td></tr>");
    }

    fn add_if(&mut self, style: &str, content: Option<String>) {
        if let Some(content) = content {
            self.add(style, &content);
        }
    }

    /// The rows in a bare table, for nesting inside another cell.
    fn into_table(self) -> String {
        format!("{TABLE_OPEN}>{}</table>", self.buffer)
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Outer table carrying the base font and text color.
fn outer_table(primary: &str, inner: &str) -> String {
    format!(
        "{TABLE_OPEN} style=\"font-family: Arial, Helvetica, sans-serif; font-size: 14px; color: {primary};\">{inner}</table>"
    )
}

/// Present values joined with the field separator, or `None` when every
/// part is absent.
fn join_parts(parts: Vec<String>) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(FIELD_SEPARATOR))
    }
}

fn title_parts(signature: &Signature) -> Vec<String> {
    [&signature.job_title, &signature.company]
        .into_iter()
        .filter_map(present)
        .map(escape_html)
        .collect()
}

fn contact_parts(signature: &Signature, accent: &str) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(email) = present(&signature.email) {
        let email = escape_html(email);
        parts.push(format!(
            "<a href=\"mailto:{email}\" style=\"color: {accent}; text-decoration: none;\">{email}</a>"
        ));
    }
    if let Some(phone) = present(&signature.phone) {
        parts.push(escape_html(phone));
    }
    parts
}

/// The website as a link to the stored URL, labelled without its protocol.
fn website_anchor(website: &str, accent: &str) -> String {
    format!(
        "<a href=\"{}\" style=\"color: {accent}; text-decoration: none;\">{}</a>",
        escape_html(website),
        escape_html(strip_protocol(website)),
    )
}

/// The photo when one is set. Returns `None` when the initials badge should
/// be shown instead.
fn photo_tag(signature: &Signature, extra_style: &str) -> Option<String> {
    present(&signature.image_url).map(|src| {
        format!(
            "<img src=\"{}\" width=\"{size}\" height=\"{size}\" style=\"border-radius: 50%; display: block;{extra_style}\" alt=\"{}\" />",
            escape_html(src),
            escape_html(&signature.full_name),
            size = AVATAR_SIZE,
        )
    })
}

/// Name, title, contact, website and link rows shared by the horizontal and
/// stacked layouts. `align` is prepended to every cell style.
fn info_rows(signature: &Signature, colors: &LayoutColors, align: &str) -> Rows {
    let LayoutColors { primary, accent } = colors;
    let mut rows = Rows::new();

    rows.add(
        &format!("{align}font-size: 16px; font-weight: bold; color: {primary}; padding-bottom: 2px;"),
        &escape_html(&signature.full_name),
    );
    rows.add_if(
        &format!("{align}font-size: 13px; color: {accent}; padding-bottom: 6px;"),
        join_parts(title_parts(signature)),
    );
    rows.add_if(
        &format!("{align}font-size: 13px; color: {primary}; padding-bottom: 4px;"),
        join_parts(contact_parts(signature, accent)),
    );
    rows.add_if(
        &format!("{align}font-size: 13px; padding-bottom: 6px;"),
        present(&signature.website).map(|website| website_anchor(website, accent)),
    );
    rows.add_if(
        &format!("{align}padding-bottom: 0;"),
        links_row(signature, accent),
    );

    rows
}

fn links_row(signature: &Signature, accent: &str) -> Option<String> {
    let links = generate_links_markup(&signature.social_links, &signature.custom_links, accent);
    (!links.is_empty()).then_some(links)
}
