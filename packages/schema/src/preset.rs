use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel color preset id selecting the branding's own custom colors.
pub const CUSTOM_COLOR_PRESET_ID: &str = "custom";

/// A named, fixed primary/accent color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPreset {
    pub id: &'static str,
    pub label: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
}

/// Built-in color presets. Charcoal comes first and is the fallback for
/// anything that does not match.
pub const COLOR_PRESETS: [ColorPreset; 8] = [
    ColorPreset {
        id: "charcoal",
        label: "Charcoal",
        primary: "#333333",
        accent: "#666666",
    },
    ColorPreset {
        id: "navy",
        label: "Navy",
        primary: "#1a365d",
        accent: "#2b6cb0",
    },
    ColorPreset {
        id: "ocean",
        label: "Ocean",
        primary: "#2a4365",
        accent: "#3182ce",
    },
    ColorPreset {
        id: "forest",
        label: "Forest",
        primary: "#22543d",
        accent: "#38a169",
    },
    ColorPreset {
        id: "wine",
        label: "Wine",
        primary: "#742a2a",
        accent: "#c53030",
    },
    ColorPreset {
        id: "midnight",
        label: "Midnight",
        primary: "#1a202c",
        accent: "#4a5568",
    },
    ColorPreset {
        id: "minimal",
        label: "Minimal",
        primary: "#000000",
        accent: "#555555",
    },
    ColorPreset {
        id: "plum",
        label: "Plum",
        primary: "#44337a",
        accent: "#805ad5",
    },
];

impl ColorPreset {
    /// The charcoal preset.
    pub fn charcoal() -> &'static ColorPreset {
        &COLOR_PRESETS[0]
    }

    /// Exact-match lookup. Returns `None` for unknown ids and for `"custom"`.
    pub fn find(id: &str) -> Option<&'static ColorPreset> {
        COLOR_PRESETS.iter().find(|preset| preset.id == id)
    }
}

/// Structural arrangement of a rendered signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreset {
    /// Photo left, details right
    #[default]
    Horizontal,
    /// Photo on top, everything centered
    Stacked,
    /// Text only, tight spacing
    Compact,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 3] = [
        LayoutPreset::Horizontal,
        LayoutPreset::Stacked,
        LayoutPreset::Compact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LayoutPreset::Horizontal => "horizontal",
            LayoutPreset::Stacked => "stacked",
            LayoutPreset::Compact => "compact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layout| layout.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutPreset::Horizontal => "Horizontal",
            LayoutPreset::Stacked => "Stacked",
            LayoutPreset::Compact => "Compact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LayoutPreset::Horizontal => "Side by side layout",
            LayoutPreset::Stacked => "Vertically stacked",
            LayoutPreset::Compact => "Minimal and tight",
        }
    }
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn charcoal_is_first() {
        let charcoal = ColorPreset::charcoal();
        assert_eq!(charcoal.id, "charcoal");
        assert_eq!(charcoal.primary, "#333333");
        assert_eq!(charcoal.accent, "#666666");
    }

    #[test]
    fn preset_ids_are_unique_and_never_custom() {
        let ids: HashSet<_> = COLOR_PRESETS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), COLOR_PRESETS.len());
        assert!(!ids.contains(CUSTOM_COLOR_PRESET_ID));
    }

    #[test]
    fn find_matches_exactly() {
        assert_eq!(ColorPreset::find("navy").unwrap().primary, "#1a365d");
        assert!(ColorPreset::find("Navy").is_none());
        assert!(ColorPreset::find("custom").is_none());
        assert!(ColorPreset::find("").is_none());
    }

    #[test]
    fn layout_ids_parse() {
        assert_eq!(LayoutPreset::from_id("stacked"), Some(LayoutPreset::Stacked));
        assert_eq!(LayoutPreset::from_id("grid"), None);
        assert_eq!(LayoutPreset::default(), LayoutPreset::Horizontal);
    }
}
