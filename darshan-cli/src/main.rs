use darshan_core::{
    catalog::Catalog,
    device::DeviceClass,
    error::Error,
    experience::format_duration,
    host::{AudioGuide, FullscreenHost, NoXr},
    viewer::{Viewer, ViewerCommand, ViewerConfig, ViewerEvent},
};
use std::{env, io, io::BufRead, thread};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let catalog_url = args
        .get(1)
        .expect("Expected <catalog_url> in the first parameter");
    let user_agent = env::var("DARSHAN_USER_AGENT").unwrap_or_default();
    let device_class = DeviceClass::detect(&user_agent);

    start(catalog_url, device_class).unwrap();
}

fn start(catalog_url: &str, device_class: DeviceClass) -> Result<(), Error> {
    let catalog = Catalog::new(catalog_url, None)?;
    let mut viewer = Viewer::new(
        catalog,
        device_class,
        ViewerConfig::default(),
        Box::new(TerminalAudio),
        Box::new(TerminalFullscreen),
        Box::new(NoXr),
    );

    let _input_thread = thread::spawn({
        let viewer_sender = viewer.sender();

        viewer_sender
            .send(ViewerEvent::Command(ViewerCommand::LoadCatalog))
            .unwrap();

        move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };
                match parse_command(line.trim()) {
                    Some(cmd) => {
                        let quit = matches!(cmd, ViewerCommand::Quit);
                        viewer_sender.send(ViewerEvent::Command(cmd)).unwrap();
                        if quit {
                            break;
                        }
                    }
                    None => log::warn!("unknown command"),
                }
            }
        }
    });

    for event in viewer.receiver() {
        let quit = matches!(event, ViewerEvent::Shutdown);
        match &event {
            ViewerEvent::VrUnavailable { reason } => println!("{reason}"),
            ViewerEvent::HotspotActivated { content, media } => {
                println!("{content}");
                if let Some(media) = media {
                    println!("see also: {media}");
                }
            }
            _ => {}
        }
        let refresh = matches!(
            &event,
            ViewerEvent::CatalogLoaded { .. }
                | ViewerEvent::SessionStarted { .. }
                | ViewerEvent::SessionEnded
                | ViewerEvent::FrameChanged { .. }
        );
        viewer.handle(event);
        if refresh {
            report(&viewer);
        }
        if quit {
            break;
        }
    }

    Ok(())
}

fn parse_command(line: &str) -> Option<ViewerCommand> {
    let (cmd, arg) = match line.split_once(' ') {
        Some((cmd, arg)) => (cmd, Some(arg)),
        None => (line, None),
    };
    match cmd {
        ">" | "n" => Some(ViewerCommand::NextFrame),
        "<" | "b" => Some(ViewerCommand::PreviousFrame),
        "j" => arg?
            .parse()
            .ok()
            .map(|index| ViewerCommand::JumpToFrame { index }),
        "s" => arg.map(|id| ViewerCommand::StartExperience { id: id.to_string() }),
        "x" => Some(ViewerCommand::ExitViewer),
        "a" => Some(ViewerCommand::ToggleAudio),
        "f" => Some(ViewerCommand::ToggleFullscreen),
        "c" => Some(ViewerCommand::ToggleControls),
        "v" => Some(ViewerCommand::LaunchVr),
        "h" => arg.map(|id| ViewerCommand::ActivateHotspot { id: id.to_string() }),
        "q" => Some(ViewerCommand::Quit),
        _ => None,
    }
}

/// Prints the state relevant to the last handled event: the gallery while
/// browsing, the current frame while viewing.
fn report(viewer: &Viewer) {
    if let Some(session) = viewer.session() {
        let experience = session.experience();
        println!(
            "[{}] frame {}/{} {}",
            experience.title,
            session.frame_index() + 1,
            experience.frames.len(),
            viewer.current_frame().unwrap_or_default(),
        );
        return;
    }
    let catalog = viewer.catalog();
    if catalog.is_failed() {
        println!("catalog unavailable, nothing to show");
        return;
    }
    for experience in viewer.gallery() {
        println!(
            "{}  {} ({}, {}, {})",
            experience.id,
            experience.title,
            experience.kind.label(),
            format_duration(experience.duration_minutes),
            experience.device_requirement.label(),
        );
    }
}

/// Pretends to drive narration playback by logging it.
struct TerminalAudio;

impl AudioGuide for TerminalAudio {
    fn play(&mut self, track: &str) {
        log::info!("audio guide playing: {}", track);
    }

    fn pause(&mut self) {
        log::info!("audio guide paused");
    }

    fn stop(&mut self) {
        log::info!("audio guide stopped");
    }
}

/// Terminals have no fullscreen notion; accept the request and log it so
/// the toggle stays observable.
struct TerminalFullscreen;

impl FullscreenHost for TerminalFullscreen {
    fn enter(&mut self) -> bool {
        log::info!("entering fullscreen");
        true
    }

    fn leave(&mut self) {
        log::info!("leaving fullscreen");
    }
}
