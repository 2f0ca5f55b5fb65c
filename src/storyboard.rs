// Storyboard Core — Data Model

use serde::Serialize;

/// Style directive applied when the caller does not supply one.
pub const DEFAULT_STYLE: &str = "cinematic";

/// One completed scene: its text, inferred emotion, and rendered image.
///
/// Constructed only when image synthesis succeeded — an entry never carries
/// a missing image.
#[derive(Debug, Clone, Serialize)]
pub struct StoryboardEntry {
    pub scene: String,
    pub emotion: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Ordered list of successfully completed scene entries, in script order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Storyboard {
    pub entries: Vec<StoryboardEntry>,
}

impl Storyboard {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A visual style preset offered to clients.
#[derive(Debug, Clone, Serialize)]
pub struct StylePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The preset catalog served by `GET /api/styles`. Any other string is still
/// accepted as a style directive; these are suggestions, not an enum.
pub const STYLE_PRESETS: &[StylePreset] = &[
    StylePreset {
        id: "cinematic",
        name: "Cinematic",
        description: "Hollywood-style realistic visuals",
    },
    StylePreset {
        id: "anime",
        name: "Anime",
        description: "Japanese animation style",
    },
    StylePreset {
        id: "noir",
        name: "Film Noir",
        description: "High contrast black and white",
    },
    StylePreset {
        id: "watercolor",
        name: "Watercolor",
        description: "Artistic watercolor painting style",
    },
];
