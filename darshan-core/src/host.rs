//! Capability seams to the embedding host.  The shell drives audio,
//! fullscreen, and immersive sessions only through these traits and treats
//! their outcome as best-effort results, never as exceptions.

use crate::error::Error;

/// Ambient narration playback.  Experience-scoped, independent of frame
/// navigation.
pub trait AudioGuide {
    fn play(&mut self, track: &str);
    fn pause(&mut self);
    fn stop(&mut self);
}

/// Fullscreen capability of the embedding host.
pub trait FullscreenHost {
    /// Returns `false` when the host refuses or lacks the capability.  The
    /// refusal is absorbed silently by the shell.
    fn enter(&mut self) -> bool;
    fn leave(&mut self);
}

/// Immersive (XR) session capability of the embedding host.
pub trait XrHost {
    fn probe(&mut self) -> bool;
    fn launch(&mut self) -> Result<(), Error>;
    fn end(&mut self);
}

/// Host without narration support.
pub struct NoAudio;

impl AudioGuide for NoAudio {
    fn play(&mut self, _track: &str) {}
    fn pause(&mut self) {}
    fn stop(&mut self) {}
}

/// Host without a fullscreen notion; every request is refused.
pub struct NoFullscreen;

impl FullscreenHost for NoFullscreen {
    fn enter(&mut self) -> bool {
        false
    }

    fn leave(&mut self) {}
}

/// Host without immersive session support.
pub struct NoXr;

impl XrHost for NoXr {
    fn probe(&mut self) -> bool {
        false
    }

    fn launch(&mut self) -> Result<(), Error> {
        Err(Error::XrUnsupported)
    }

    fn end(&mut self) {}
}
