//! Thin projection layer for interactive hotspots.  Holds no display state;
//! activation only hands the hotspot's payload back to the caller.

use std::sync::Arc;

use crate::experience::Hotspot;

/// Pixel bounding box of the rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A hotspot resolved to absolute pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedHotspot {
    pub id: Arc<str>,
    pub x: f64,
    pub y: f64,
}

/// Payload surfaced to the embedder when a hotspot is activated.
#[derive(Clone, Debug, PartialEq)]
pub struct HotspotActivation {
    pub content: Arc<str>,
    pub media: Option<Arc<str>>,
}

pub fn project(hotspots: &[Hotspot], bounds: &FrameBounds) -> Vec<ProjectedHotspot> {
    hotspots
        .iter()
        .map(|spot| {
            let (x, y) = spot.position.clamped();
            ProjectedHotspot {
                id: spot.id.clone(),
                x: bounds.left + bounds.width * x / 100.0,
                y: bounds.top + bounds.height * y / 100.0,
            }
        })
        .collect()
}

pub fn activate(hotspots: &[Hotspot], id: &str) -> Option<HotspotActivation> {
    hotspots
        .iter()
        .find(|spot| &*spot.id == id)
        .map(|spot| HotspotActivation {
            content: spot.content.clone(),
            media: spot.media.clone(),
        })
}
