use std::sync::Arc;

use serde::Deserialize;

/// One playable immersive unit: an ordered panorama sequence with optional
/// narration and positioned interaction points.
#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
    pub id: Arc<str>,
    pub title: String,
    pub description: String,
    pub monument: Monument,
    pub kind: ExperienceKind,
    pub frames: Vec<String>,
    #[serde(default)]
    pub thumbnails: Vec<String>,
    #[serde(default)]
    pub audio_track: Option<String>,
    #[serde(default)]
    pub interactions: Vec<Hotspot>,
    pub duration_minutes: u32,
    pub device_requirement: DeviceRequirement,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "serde_true")]
    pub is_public: bool,
}

impl Experience {
    /// A record with no panoramic frames or a zero duration cannot be played.
    pub fn is_playable(&self) -> bool {
        !self.frames.is_empty() && self.duration_minutes > 0
    }

    pub fn has_audio_guide(&self) -> bool {
        self.audio_track.is_some()
    }

    pub fn thumbnail<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.thumbnails
            .first()
            .map(String::as_str)
            .unwrap_or(placeholder)
    }
}

/// The physical site an experience belongs to.  Owned by the catalog, never
/// mutated by the viewer.
#[derive(Clone, Debug, Deserialize)]
pub struct Monument {
    pub name: String,
    pub location: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceKind {
    PanoramaTour,
    ArOverlay,
    VrImmersive,
    GuidedNarration,
}

impl ExperienceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PanoramaTour => "panorama tour",
            Self::ArOverlay => "AR overlay",
            Self::VrImmersive => "VR immersive",
            Self::GuidedNarration => "guided narration",
        }
    }
}

/// Advisory device hint shown on gallery cards.  Does not block playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRequirement {
    Mobile,
    Desktop,
    VrHeadset,
}

impl DeviceRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::VrHeadset => "VR headset",
        }
    }
}

/// An interactive annotation bound to the frame's coordinate space.
#[derive(Clone, Debug, Deserialize)]
pub struct Hotspot {
    pub id: Arc<str>,
    #[serde(default)]
    pub kind: HotspotKind,
    pub position: Position,
    pub content: Arc<str>,
    #[serde(default)]
    pub media: Option<Arc<str>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotKind {
    Hotspot,
    Annotation,
    Quiz,
    Story,
}

impl Default for HotspotKind {
    fn default() -> Self {
        Self::Hotspot
    }
}

/// Normalized position in percent of the rendered frame's bounding box.
/// `z` is carried for future depth use but not interpreted yet.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Position {
    /// Out-of-range coordinates are a data error, not a crash.  Clamp before
    /// any projection.
    pub fn clamped(&self) -> (f64, f64) {
        (self.x.clamp(0.0, 100.0), self.y.clamp(0.0, 100.0))
    }
}

pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

fn serde_true() -> bool {
    true
}
