use std::{collections::HashSet, sync::Arc};

use crate::{device::DeviceClass, experience::Experience};

use super::navigator::Navigator;

/// Ephemeral per-visit state.  Created by the shell on "start experience"
/// and discarded on exit; re-entering the same experience starts fresh at
/// frame 0.
pub struct ViewerSession {
    experience: Arc<Experience>,
    navigator: Navigator,
    audio_playing: bool,
    fullscreen: bool,
    vr_active: bool,
    controls_visible: bool,
    failed_frames: HashSet<usize>,
}

impl ViewerSession {
    pub fn new(experience: Arc<Experience>) -> Self {
        let navigator = Navigator::new(experience.frames.len());
        Self {
            experience,
            navigator,
            audio_playing: false,
            fullscreen: false,
            vr_active: false,
            controls_visible: true,
            failed_frames: HashSet::new(),
        }
    }

    pub fn experience(&self) -> &Arc<Experience> {
        &self.experience
    }

    pub fn frame_index(&self) -> usize {
        self.navigator.position()
    }

    /// Asset reference for the current frame, substituting the placeholder
    /// for frames whose asset failed to load.  Never touches the position.
    pub fn frame_src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        let index = self.navigator.position();
        if self.failed_frames.contains(&index) {
            placeholder
        } else {
            self.experience.frames[index].as_str()
        }
    }

    pub fn audio_playing(&self) -> bool {
        self.audio_playing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn vr_active(&self) -> bool {
        self.vr_active
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Controls surfaced for this session on the given device.  The kind
    /// and catalog data gate affordances only, never the navigation or
    /// hotspot contracts.
    pub fn control_set(&self, device_class: DeviceClass) -> ControlSet {
        ControlSet {
            audio: self.experience.has_audio_guide(),
            fullscreen: true,
            vr: device_class == DeviceClass::Mobile,
        }
    }

    pub(super) fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Returns `false` when the session was already in the requested state,
    /// keeping play/pause idempotent-safe.
    pub(super) fn set_audio(&mut self, playing: bool) -> bool {
        if self.audio_playing == playing {
            false
        } else {
            self.audio_playing = playing;
            true
        }
    }

    pub(super) fn set_fullscreen(&mut self, held: bool) {
        self.fullscreen = held;
    }

    pub(super) fn set_vr_active(&mut self, active: bool) {
        self.vr_active = active;
    }

    pub(super) fn toggle_controls(&mut self) -> bool {
        self.controls_visible = !self.controls_visible;
        self.controls_visible
    }

    pub(super) fn mark_frame_failed(&mut self, index: usize) {
        if index < self.navigator.frame_count() {
            self.failed_frames.insert(index);
        }
    }
}

/// Which controls the embedder should render for the active session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSet {
    pub audio: bool,
    pub fullscreen: bool,
    pub vr: bool,
}
