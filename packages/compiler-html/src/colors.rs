use sigforge_schema::{Branding, ColorPreset};

/// The concrete color pair a layout renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutColors {
    pub primary: String,
    pub accent: String,
}

impl LayoutColors {
    pub fn new(primary: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            accent: accent.into(),
        }
    }
}

impl From<&ColorPreset> for LayoutColors {
    fn from(preset: &ColorPreset) -> Self {
        Self::new(preset.primary, preset.accent)
    }
}

/// Resolve a color preset by id, falling back to charcoal for anything
/// unknown (including `""` and `"custom"`).
pub fn resolve_preset(id: &str) -> &'static ColorPreset {
    ColorPreset::find(id).unwrap_or_else(ColorPreset::charcoal)
}

/// Resolve the colors a signature's branding asks for.
///
/// Custom branding uses its own colors; a missing custom color falls back to
/// charcoal's value for that slot only.
pub fn resolve_colors(branding: &Branding) -> LayoutColors {
    if branding.is_custom() {
        let fallback = ColorPreset::charcoal();
        LayoutColors::new(
            branding.custom_primary.as_deref().unwrap_or(fallback.primary),
            branding.custom_accent.as_deref().unwrap_or(fallback.accent),
        )
    } else {
        resolve_preset(&branding.color_preset_id).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigforge_schema::{LayoutPreset, COLOR_PRESETS};

    #[test]
    fn known_preset_resolves() {
        let preset = resolve_preset("navy");
        assert_eq!(preset.id, "navy");
        assert_eq!(preset.primary, "#1a365d");
        assert_eq!(preset.accent, "#2b6cb0");
    }

    #[test]
    fn every_preset_resolves_to_itself() {
        for preset in &COLOR_PRESETS {
            assert_eq!(resolve_preset(preset.id), preset);
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_charcoal() {
        for id in ["nonexistent", "", "custom", "NAVY", " navy"] {
            let preset = resolve_preset(id);
            assert_eq!(preset.id, "charcoal", "id {id:?}");
            assert_eq!(preset.primary, "#333333");
            assert_eq!(preset.accent, "#666666");
        }
    }

    #[test]
    fn preset_branding_uses_preset_colors() {
        let colors = resolve_colors(&Branding::preset("forest", LayoutPreset::Stacked));
        assert_eq!(colors, LayoutColors::new("#22543d", "#38a169"));
    }

    #[test]
    fn custom_branding_uses_custom_colors() {
        let colors = resolve_colors(&Branding::custom("#abcdef", "#123456", LayoutPreset::Compact));
        assert_eq!(colors, LayoutColors::new("#abcdef", "#123456"));
    }

    #[test]
    fn custom_colors_fall_back_independently() {
        let mut branding = Branding::custom("#abcdef", "#123456", LayoutPreset::Horizontal);
        branding.custom_accent = None;
        assert_eq!(
            resolve_colors(&branding),
            LayoutColors::new("#abcdef", "#666666")
        );

        branding.custom_primary = None;
        branding.custom_accent = Some("#fedcba".into());
        assert_eq!(
            resolve_colors(&branding),
            LayoutColors::new("#333333", "#fedcba")
        );
    }

    #[test]
    fn custom_colors_are_ignored_for_presets() {
        let mut branding = Branding::preset("wine", LayoutPreset::Horizontal);
        branding.custom_primary = Some("#000000".into());
        assert_eq!(resolve_colors(&branding).primary, "#742a2a");
    }
}
