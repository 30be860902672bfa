//! HTML generation for email signatures.
//!
//! [`generate_signature_html`] is the entry point. The layout generators,
//! color resolution and the link row are exposed for callers that need a
//! single piece.

pub mod colors;
pub mod compiler;
pub mod icons;
pub mod layouts;
pub mod links;
pub mod utils;

pub use colors::{resolve_colors, resolve_preset, LayoutColors};
pub use compiler::generate_signature_html;
pub use icons::{format_platform_name, icon_url, platform_display_name, platform_icon_url};
pub use layouts::{generate_compact_html, generate_horizontal_html, generate_stacked_html};
pub use links::generate_links_markup;
pub use utils::{
    ensure_absolute_url, escape_html, generate_initials_avatar_html, get_initials, strip_protocol,
};
