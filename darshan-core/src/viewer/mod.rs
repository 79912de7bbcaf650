pub mod navigator;
pub mod overlay;
mod session;

pub use session::{ControlSet, ViewerSession};

use std::{mem, sync::Arc, thread};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::{
    catalog::{CatalogHandle, CatalogState},
    device::DeviceClass,
    error::Error,
    experience::Experience,
    host::{AudioGuide, FullscreenHost, XrHost},
};

use self::overlay::{FrameBounds, HotspotActivation, ProjectedHotspot};

#[derive(Clone)]
pub struct ViewerConfig {
    pub placeholder_frame: String,
    pub placeholder_thumbnail: String,
    /// Surfaced here as an explicit flag instead of ambient page state, so
    /// the shell stays testable in isolation.
    pub show_assistant_button: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            placeholder_frame: "/placeholder-360.jpg".into(),
            placeholder_thumbnail: "/placeholder-vr.jpg".into(),
            show_assistant_button: false,
        }
    }
}

/// The viewer shell.  Owns the catalog state and the active session, and
/// routes every intent to the navigator, the overlay, or one of the host
/// capabilities.  All mutation happens inside `handle`, on the caller's
/// event loop.
pub struct Viewer {
    state: ShellState,
    catalog: CatalogState,
    service: CatalogHandle,
    device_class: DeviceClass,
    config: ViewerConfig,
    audio: Box<dyn AudioGuide>,
    fullscreen: Box<dyn FullscreenHost>,
    xr: Box<dyn XrHost>,
    sender: Sender<ViewerEvent>,
    receiver: Receiver<ViewerEvent>,
}

impl Viewer {
    pub fn new(
        service: CatalogHandle,
        device_class: DeviceClass,
        config: ViewerConfig,
        audio: Box<dyn AudioGuide>,
        fullscreen: Box<dyn FullscreenHost>,
        xr: Box<dyn XrHost>,
    ) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            state: ShellState::Gallery,
            catalog: CatalogState::default(),
            service,
            device_class,
            config,
            audio,
            fullscreen,
            xr,
            sender,
            receiver,
        }
    }

    pub fn sender(&self) -> Sender<ViewerEvent> {
        self.sender.clone()
    }

    pub fn receiver(&self) -> Receiver<ViewerEvent> {
        self.receiver.clone()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Experiences to render as gallery cards; empty while loading or after
    /// a failed load.
    pub fn gallery(&self) -> &[Experience] {
        self.catalog.experiences()
    }

    pub fn in_gallery(&self) -> bool {
        matches!(self.state, ShellState::Gallery)
    }

    pub fn session(&self) -> Option<&ViewerSession> {
        match &self.state {
            ShellState::Viewing(session) => Some(session),
            ShellState::Gallery => None,
        }
    }

    pub fn control_set(&self) -> Option<ControlSet> {
        self.session()
            .map(|session| session.control_set(self.device_class))
    }

    pub fn current_frame(&self) -> Option<&str> {
        self.session()
            .map(|session| session.frame_src(&self.config.placeholder_frame))
    }

    /// Hotspots of the active experience projected into the given pixel box.
    pub fn projected_hotspots(&self, bounds: &FrameBounds) -> Vec<ProjectedHotspot> {
        self.session()
            .map(|session| overlay::project(&session.experience().interactions, bounds))
            .unwrap_or_default()
    }

    pub fn handle(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Command(cmd) => {
                self.handle_command(cmd);
            }
            ViewerEvent::CatalogLoaded { result } => {
                self.handle_catalog_loaded(result);
            }
            ViewerEvent::FrameLoadFailed { index } => {
                self.handle_frame_failed(index);
            }
            ViewerEvent::CatalogLoading
            | ViewerEvent::SessionStarted { .. }
            | ViewerEvent::SessionEnded
            | ViewerEvent::FrameChanged { .. }
            | ViewerEvent::AudioPlaying
            | ViewerEvent::AudioStopped
            | ViewerEvent::FullscreenEntered
            | ViewerEvent::FullscreenExited
            | ViewerEvent::ControlsToggled { .. }
            | ViewerEvent::VrStarted
            | ViewerEvent::VrUnavailable { .. }
            | ViewerEvent::HotspotActivated { .. }
            | ViewerEvent::Shutdown => {}
        };
    }

    fn handle_command(&mut self, cmd: ViewerCommand) {
        match cmd {
            ViewerCommand::LoadCatalog => self.load_catalog(),
            ViewerCommand::StartExperience { id } => self.start_experience(&id),
            ViewerCommand::ExitViewer => self.exit_viewer(),
            ViewerCommand::NextFrame => self.next_frame(),
            ViewerCommand::PreviousFrame => self.previous_frame(),
            ViewerCommand::JumpToFrame { index } => self.jump_to_frame(index),
            ViewerCommand::PlayAudio => self.play_audio(),
            ViewerCommand::PauseAudio => self.pause_audio(),
            ViewerCommand::ToggleAudio => self.toggle_audio(),
            ViewerCommand::ToggleFullscreen => self.toggle_fullscreen(),
            ViewerCommand::ToggleControls => self.toggle_controls(),
            ViewerCommand::LaunchVr => self.launch_vr(),
            ViewerCommand::ActivateHotspot { id } => self.activate_hotspot(&id),
            ViewerCommand::Quit => self.quit(),
        }
    }

    fn load_catalog(&mut self) {
        if !self.catalog.is_empty() {
            log::warn!("catalog load already requested, ignoring");
            return;
        }
        self.catalog = CatalogState::Loading;
        self.sender.send(ViewerEvent::CatalogLoading).unwrap();
        thread::spawn({
            let sender = self.sender.clone();
            let service = self.service.clone();
            move || {
                let result = service.fetch_experiences();
                sender.send(ViewerEvent::CatalogLoaded { result }).unwrap();
            }
        });
    }

    fn handle_catalog_loaded(&mut self, result: Result<Vec<Experience>, Error>) {
        if !self.catalog.is_loading() {
            log::info!("stale catalog result received, ignoring");
            return;
        }
        match result {
            Ok(list) => {
                log::info!("catalog ready with {} experiences", list.len());
                self.catalog.resolve(list);
            }
            Err(err) => {
                log::error!("catalog load failed: {}", err);
                self.catalog.reject(err.to_string());
            }
        }
    }

    fn start_experience(&mut self, id: &str) {
        if !matches!(self.state, ShellState::Gallery) {
            log::warn!("already in viewer mode, ignoring start request");
            return;
        }
        if self.catalog.is_loading() {
            log::warn!("catalog still loading, ignoring start request");
            return;
        }
        let Some(experience) = self.catalog.find(id) else {
            log::warn!("unknown experience {}, ignoring", id);
            return;
        };
        self.state = ShellState::Viewing(ViewerSession::new(Arc::new(experience)));
        self.sender
            .send(ViewerEvent::SessionStarted { id: id.into() })
            .unwrap();
    }

    fn exit_viewer(&mut self) {
        match mem::replace(&mut self.state, ShellState::Gallery) {
            ShellState::Viewing(session) => self.teardown(session),
            ShellState::Gallery => {
                log::warn!("not in viewer mode, ignoring exit");
            }
        }
    }

    /// Audio must never keep playing after exit, and held fullscreen or XR
    /// sessions are released synchronously.
    fn teardown(&mut self, session: ViewerSession) {
        if session.audio_playing() {
            self.audio.stop();
            self.sender.send(ViewerEvent::AudioStopped).unwrap();
        }
        if session.is_fullscreen() {
            self.fullscreen.leave();
            self.sender.send(ViewerEvent::FullscreenExited).unwrap();
        }
        if session.vr_active() {
            self.xr.end();
        }
        self.sender.send(ViewerEvent::SessionEnded).unwrap();
    }

    fn next_frame(&mut self) {
        let Some(session) = self.session_mut() else {
            return;
        };
        session.navigator_mut().skip_to_next();
        let index = session.frame_index();
        self.sender.send(ViewerEvent::FrameChanged { index }).unwrap();
    }

    fn previous_frame(&mut self) {
        let Some(session) = self.session_mut() else {
            return;
        };
        session.navigator_mut().skip_to_previous();
        let index = session.frame_index();
        self.sender.send(ViewerEvent::FrameChanged { index }).unwrap();
    }

    fn jump_to_frame(&mut self, index: usize) {
        let Some(session) = self.session_mut() else {
            return;
        };
        if session.navigator_mut().jump_to(index) {
            self.sender.send(ViewerEvent::FrameChanged { index }).unwrap();
        } else {
            log::warn!("frame index {} out of range, ignoring", index);
        }
    }

    fn play_audio(&mut self) {
        let Some(session) = self.session_mut() else {
            return;
        };
        let Some(track) = session.experience().audio_track.clone() else {
            log::info!("experience has no audio guide");
            return;
        };
        if !session.set_audio(true) {
            // Already playing.
            return;
        }
        self.audio.play(&track);
        self.sender.send(ViewerEvent::AudioPlaying).unwrap();
    }

    fn pause_audio(&mut self) {
        let Some(session) = self.session_mut() else {
            return;
        };
        if !session.set_audio(false) {
            // Already stopped.
            return;
        }
        self.audio.pause();
        self.sender.send(ViewerEvent::AudioStopped).unwrap();
    }

    fn toggle_audio(&mut self) {
        match &self.state {
            ShellState::Viewing(session) if session.audio_playing() => self.pause_audio(),
            ShellState::Viewing(_) => self.play_audio(),
            ShellState::Gallery => {
                log::warn!("intent requires viewer mode, ignoring");
            }
        }
    }

    fn toggle_fullscreen(&mut self) {
        let held = match &self.state {
            ShellState::Viewing(session) => session.is_fullscreen(),
            ShellState::Gallery => {
                log::warn!("intent requires viewer mode, ignoring");
                return;
            }
        };
        if held {
            self.fullscreen.leave();
            if let ShellState::Viewing(session) = &mut self.state {
                session.set_fullscreen(false);
            }
            self.sender.send(ViewerEvent::FullscreenExited).unwrap();
        } else if self.fullscreen.enter() {
            if let ShellState::Viewing(session) = &mut self.state {
                session.set_fullscreen(true);
            }
            self.sender.send(ViewerEvent::FullscreenEntered).unwrap();
        } else {
            // Best-effort: the host refused, stay in normal mode without
            // surfacing an error.
            log::info!("fullscreen request refused by host");
        }
    }

    fn toggle_controls(&mut self) {
        let Some(session) = self.session_mut() else {
            return;
        };
        let visible = session.toggle_controls();
        self.sender
            .send(ViewerEvent::ControlsToggled { visible })
            .unwrap();
    }

    fn launch_vr(&mut self) {
        if !matches!(self.state, ShellState::Viewing(_)) {
            log::warn!("intent requires viewer mode, ignoring");
            return;
        }
        if self.device_class != DeviceClass::Mobile {
            log::warn!("vr launch is only offered on mobile, ignoring");
            return;
        }
        if !self.xr.probe() {
            self.sender
                .send(ViewerEvent::VrUnavailable {
                    reason: "VR is not supported on this device. Please use a VR-capable browser."
                        .to_string(),
                })
                .unwrap();
            return;
        }
        match self.xr.launch() {
            Ok(()) => {
                if let ShellState::Viewing(session) = &mut self.state {
                    session.set_vr_active(true);
                }
                self.sender.send(ViewerEvent::VrStarted).unwrap();
            }
            Err(err) => {
                self.sender
                    .send(ViewerEvent::VrUnavailable {
                        reason: err.to_string(),
                    })
                    .unwrap();
            }
        }
    }

    fn activate_hotspot(&mut self, id: &str) {
        let activation = match &self.state {
            ShellState::Viewing(session) => {
                overlay::activate(&session.experience().interactions, id)
            }
            ShellState::Gallery => {
                log::warn!("intent requires viewer mode, ignoring");
                return;
            }
        };
        match activation {
            Some(HotspotActivation { content, media }) => {
                self.sender
                    .send(ViewerEvent::HotspotActivated { content, media })
                    .unwrap();
            }
            None => {
                log::warn!("unknown hotspot {}, ignoring", id);
            }
        }
    }

    fn handle_frame_failed(&mut self, index: usize) {
        if let ShellState::Viewing(session) = &mut self.state {
            log::warn!("frame {} failed to load, substituting placeholder", index);
            session.mark_frame_failed(index);
        }
    }

    fn quit(&mut self) {
        if matches!(self.state, ShellState::Viewing(_)) {
            self.exit_viewer();
        }
        self.sender.send(ViewerEvent::Shutdown).unwrap();
    }

    fn session_mut(&mut self) -> Option<&mut ViewerSession> {
        match &mut self.state {
            ShellState::Viewing(session) => Some(session),
            ShellState::Gallery => {
                log::warn!("intent requires viewer mode, ignoring");
                None
            }
        }
    }
}

pub enum ViewerCommand {
    LoadCatalog,
    StartExperience { id: String },
    ExitViewer,
    NextFrame,
    PreviousFrame,
    JumpToFrame { index: usize },
    PlayAudio,
    PauseAudio,
    ToggleAudio,
    ToggleFullscreen,
    /// Controls visibility is independent of playback state.
    ToggleControls,
    LaunchVr,
    ActivateHotspot { id: String },
    Quit,
}

pub enum ViewerEvent {
    Command(ViewerCommand),
    /// Catalog fetch has started.  `CatalogLoaded` follows.
    CatalogLoading,
    /// Catalog fetch either succeeded or failed.  Failure leaves the shell
    /// interactive with an empty gallery.
    CatalogLoaded {
        result: Result<Vec<Experience>, Error>,
    },
    /// The embedder reports that the asset of a frame failed to load; the
    /// placeholder is substituted without changing the position.
    FrameLoadFailed {
        index: usize,
    },
    SessionStarted {
        id: Arc<str>,
    },
    SessionEnded,
    FrameChanged {
        index: usize,
    },
    AudioPlaying,
    AudioStopped,
    FullscreenEntered,
    FullscreenExited,
    ControlsToggled {
        visible: bool,
    },
    VrStarted,
    /// The one capability failure that is surfaced to the user explicitly.
    VrUnavailable {
        reason: String,
    },
    HotspotActivated {
        content: Arc<str>,
        media: Option<Arc<str>>,
    },
    Shutdown,
}

enum ShellState {
    Gallery,
    Viewing(ViewerSession),
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use super::*;
    use crate::{
        catalog::Catalog,
        host::{NoAudio, NoFullscreen, NoXr},
    };

    #[derive(Clone, Default)]
    struct RecordingAudio {
        playing: Arc<AtomicBool>,
    }

    impl AudioGuide for RecordingAudio {
        fn play(&mut self, _track: &str) {
            self.playing.store(true, Ordering::SeqCst);
        }

        fn pause(&mut self) {
            self.playing.store(false, Ordering::SeqCst);
        }

        fn stop(&mut self) {
            self.playing.store(false, Ordering::SeqCst);
        }
    }

    struct GrantingFullscreen;

    impl FullscreenHost for GrantingFullscreen {
        fn enter(&mut self) -> bool {
            true
        }

        fn leave(&mut self) {}
    }

    fn experiences() -> Vec<Experience> {
        serde_json::from_value(serde_json::json!([{
            "id": "exp-1",
            "title": "Konark Sun Temple",
            "description": "The stone chariot of Surya.",
            "monument": { "name": "Konark", "location": "Odisha" },
            "kind": "panorama_tour",
            "frames": [
                "/frames/konark-0.jpg",
                "/frames/konark-1.jpg",
                "/frames/konark-2.jpg",
                "/frames/konark-3.jpg"
            ],
            "audio_track": "/audio/konark.ogg",
            "interactions": [{
                "id": "wheel",
                "position": { "x": 50.0, "y": 50.0 },
                "content": "One of the 24 carved wheels."
            }],
            "duration_minutes": 30,
            "device_requirement": "desktop"
        }]))
        .unwrap()
    }

    fn viewer_with_hosts(
        device_class: DeviceClass,
        audio: Box<dyn AudioGuide>,
        fullscreen: Box<dyn FullscreenHost>,
        xr: Box<dyn XrHost>,
    ) -> Viewer {
        let service = Catalog::new("http://localhost/api/", None).unwrap();
        let mut viewer = Viewer::new(
            service,
            device_class,
            ViewerConfig::default(),
            audio,
            fullscreen,
            xr,
        );
        viewer.catalog = CatalogState::Loading;
        viewer.handle(ViewerEvent::CatalogLoaded {
            result: Ok(experiences()),
        });
        viewer
    }

    fn viewer() -> Viewer {
        viewer_with_hosts(
            DeviceClass::Desktop,
            Box::new(NoAudio),
            Box::new(NoFullscreen),
            Box::new(NoXr),
        )
    }

    fn start(viewer: &mut Viewer) {
        viewer.handle(ViewerEvent::Command(ViewerCommand::StartExperience {
            id: "exp-1".to_string(),
        }));
    }

    fn drain(viewer: &Viewer) -> Vec<ViewerEvent> {
        viewer.receiver().try_iter().collect()
    }

    #[test]
    fn start_creates_fresh_session_at_frame_zero() {
        let mut viewer = viewer();
        start(&mut viewer);
        let session = viewer.session().unwrap();
        assert_eq!(session.frame_index(), 0);
        assert!(!session.audio_playing());
        assert!(session.controls_visible());
    }

    #[test]
    fn reentry_starts_over_from_frame_zero() {
        let mut viewer = viewer();
        start(&mut viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::JumpToFrame { index: 3 }));
        viewer.handle(ViewerEvent::Command(ViewerCommand::ExitViewer));
        assert!(viewer.in_gallery());
        start(&mut viewer);
        assert_eq!(viewer.session().unwrap().frame_index(), 0);
    }

    #[test]
    fn exit_always_stops_audio() {
        let audio = RecordingAudio::default();
        let playing = audio.playing.clone();
        let mut viewer = viewer_with_hosts(
            DeviceClass::Desktop,
            Box::new(audio),
            Box::new(NoFullscreen),
            Box::new(NoXr),
        );
        start(&mut viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::PlayAudio));
        assert!(playing.load(Ordering::SeqCst));
        viewer.handle(ViewerEvent::Command(ViewerCommand::ExitViewer));
        assert!(!playing.load(Ordering::SeqCst));
        assert!(viewer.session().is_none());
    }

    #[test]
    fn audio_play_is_idempotent() {
        let mut viewer = viewer();
        start(&mut viewer);
        drain(&viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::PlayAudio));
        viewer.handle(ViewerEvent::Command(ViewerCommand::PlayAudio));
        let events = drain(&viewer);
        let played = events
            .iter()
            .filter(|event| matches!(event, ViewerEvent::AudioPlaying))
            .count();
        assert_eq!(played, 1);
    }

    #[test]
    fn navigation_intents_in_gallery_are_dropped() {
        let mut viewer = viewer();
        drain(&viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::NextFrame));
        viewer.handle(ViewerEvent::Command(ViewerCommand::JumpToFrame { index: 1 }));
        assert!(viewer.in_gallery());
        assert!(drain(&viewer).is_empty());
    }

    #[test]
    fn start_is_ignored_while_catalog_loads() {
        let service = Catalog::new("http://localhost/api/", None).unwrap();
        let mut viewer = Viewer::new(
            service,
            DeviceClass::Desktop,
            ViewerConfig::default(),
            Box::new(NoAudio),
            Box::new(NoFullscreen),
            Box::new(NoXr),
        );
        viewer.catalog = CatalogState::Loading;
        start(&mut viewer);
        assert!(viewer.in_gallery());
    }

    #[test]
    fn catalog_failure_leaves_shell_interactive() {
        let service = Catalog::new("http://localhost/api/", None).unwrap();
        let mut viewer = Viewer::new(
            service,
            DeviceClass::Desktop,
            ViewerConfig::default(),
            Box::new(NoAudio),
            Box::new(NoFullscreen),
            Box::new(NoXr),
        );
        viewer.catalog = CatalogState::Loading;
        viewer.handle(ViewerEvent::CatalogLoaded {
            result: Err(Error::CatalogUnavailable),
        });
        assert!(viewer.catalog().is_failed());
        assert!(viewer.gallery().is_empty());
        // Still navigable: intents are dropped, nothing panics.
        start(&mut viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::NextFrame));
        assert!(viewer.in_gallery());
    }

    #[test]
    fn fullscreen_denial_mutates_nothing() {
        let mut viewer = viewer();
        start(&mut viewer);
        drain(&viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::ToggleFullscreen));
        let session = viewer.session().unwrap();
        assert!(!session.is_fullscreen());
        assert!(!session.audio_playing());
        assert_eq!(session.frame_index(), 0);
        assert!(drain(&viewer).is_empty());
    }

    #[test]
    fn granted_fullscreen_is_released_on_exit() {
        let mut viewer = viewer_with_hosts(
            DeviceClass::Desktop,
            Box::new(NoAudio),
            Box::new(GrantingFullscreen),
            Box::new(NoXr),
        );
        start(&mut viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::ToggleFullscreen));
        assert!(viewer.session().unwrap().is_fullscreen());
        drain(&viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::ExitViewer));
        let events = drain(&viewer);
        assert!(events
            .iter()
            .any(|event| matches!(event, ViewerEvent::FullscreenExited)));
    }

    #[test]
    fn vr_control_is_gated_by_device_class() {
        let mut desktop = viewer();
        start(&mut desktop);
        assert!(!desktop.control_set().unwrap().vr);

        let mut mobile = viewer_with_hosts(
            DeviceClass::Mobile,
            Box::new(NoAudio),
            Box::new(NoFullscreen),
            Box::new(NoXr),
        );
        start(&mut mobile);
        assert!(mobile.control_set().unwrap().vr);
    }

    #[test]
    fn vr_launch_on_desktop_is_dropped() {
        let mut viewer = viewer();
        start(&mut viewer);
        drain(&viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::LaunchVr));
        assert!(drain(&viewer).is_empty());
    }

    #[test]
    fn vr_absence_surfaces_a_fallback_notice() {
        let mut viewer = viewer_with_hosts(
            DeviceClass::Mobile,
            Box::new(NoAudio),
            Box::new(NoFullscreen),
            Box::new(NoXr),
        );
        start(&mut viewer);
        drain(&viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::LaunchVr));
        let events = drain(&viewer);
        assert!(events
            .iter()
            .any(|event| matches!(event, ViewerEvent::VrUnavailable { .. })));
        // The session stays up in viewer mode.
        assert!(viewer.session().is_some());
    }

    #[test]
    fn controls_toggle_is_independent_of_playback() {
        let mut viewer = viewer();
        start(&mut viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::ToggleControls));
        let session = viewer.session().unwrap();
        assert!(!session.controls_visible());
        assert!(!session.audio_playing());
        assert_eq!(session.frame_index(), 0);
    }

    #[test]
    fn failed_frame_falls_back_to_placeholder() {
        let mut viewer = viewer();
        start(&mut viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::NextFrame));
        viewer.handle(ViewerEvent::FrameLoadFailed { index: 1 });
        assert_eq!(viewer.current_frame(), Some("/placeholder-360.jpg"));
        assert_eq!(viewer.session().unwrap().frame_index(), 1);
        viewer.handle(ViewerEvent::Command(ViewerCommand::NextFrame));
        assert_eq!(viewer.current_frame(), Some("/frames/konark-2.jpg"));
    }

    #[test]
    fn hotspot_activation_reaches_the_embedder() {
        let mut viewer = viewer();
        start(&mut viewer);
        drain(&viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::ActivateHotspot {
            id: "wheel".to_string(),
        }));
        let events = drain(&viewer);
        assert!(events.iter().any(|event| matches!(
            event,
            ViewerEvent::HotspotActivated { content, .. } if &**content == "One of the 24 carved wheels."
        )));
    }

    #[test]
    fn projected_hotspots_use_the_frame_box() {
        let mut viewer = viewer();
        start(&mut viewer);
        let bounds = FrameBounds {
            left: 10.0,
            top: 20.0,
            width: 400.0,
            height: 200.0,
        };
        let projected = viewer.projected_hotspots(&bounds);
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].x, 210.0);
        assert_eq!(projected[0].y, 120.0);
    }

    #[test]
    fn quit_tears_down_and_signals_shutdown() {
        let audio = RecordingAudio::default();
        let playing = audio.playing.clone();
        let mut viewer = viewer_with_hosts(
            DeviceClass::Desktop,
            Box::new(audio),
            Box::new(NoFullscreen),
            Box::new(NoXr),
        );
        start(&mut viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::PlayAudio));
        drain(&viewer);
        viewer.handle(ViewerEvent::Command(ViewerCommand::Quit));
        assert!(!playing.load(Ordering::SeqCst));
        assert!(viewer.in_gallery());
        let events = drain(&viewer);
        assert!(events
            .iter()
            .any(|event| matches!(event, ViewerEvent::Shutdown)));
    }
}
