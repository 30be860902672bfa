use sigforge_schema::{LayoutPreset, Signature};

use crate::colors::resolve_colors;
use crate::layouts::{generate_compact_html, generate_horizontal_html, generate_stacked_html};

/// Render a signature to a copy-ready HTML fragment.
///
/// Colors come from the signature's branding and the layout is chosen by
/// `branding.layoutPresetId`. Unknown preset or layout ids fall back to
/// charcoal and horizontal, so this never fails. The output depends only on
/// the input: rendering the same signature twice yields identical bytes.
pub fn generate_signature_html(signature: &Signature) -> String {
    let colors = resolve_colors(&signature.branding);
    let layout = signature.branding.layout().unwrap_or_else(|| {
        tracing::debug!(
            layout = %signature.branding.layout_preset_id,
            "unknown layout, using horizontal"
        );
        LayoutPreset::Horizontal
    });

    tracing::debug!(id = %signature.id, %layout, "generating signature html");

    match layout {
        LayoutPreset::Horizontal => generate_horizontal_html(signature, &colors),
        LayoutPreset::Stacked => generate_stacked_html(signature, &colors),
        LayoutPreset::Compact => generate_compact_html(signature, &colors),
    }
}
