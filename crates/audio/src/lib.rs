//! Background music using Kira: one looping track with a play/pause toggle.
//!
//! The slideshow only ever asks "play" or "pause". When there is no audio
//! device or the track cannot be decoded, the toggle still flips its state
//! so the UI stays consistent, but nothing is heard.

use anyhow::Result;
use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::{
        static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
        PlaybackState,
    },
    tween::Tween,
};
use std::path::Path;

/// Owns the audio device and the single background track.
pub struct BackgroundMusic {
    manager: Option<AudioManager>,
    track: Option<StaticSoundData>,
    handle: Option<StaticSoundHandle>,
    playing: bool,
}

impl BackgroundMusic {
    /// Open the default output device and decode the looping track at `path`.
    /// Failures are logged and leave the player silent.
    pub fn new(path: Option<&Path>, volume: f64) -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!("No audio output available: {}", e);
                None
            }
        };

        let track = match path {
            Some(path) => match load_looping(path, volume) {
                Ok(data) => Some(data),
                Err(e) => {
                    log::warn!("Could not load music from {:?}: {}", path, e);
                    None
                }
            },
            None => None,
        };

        Self {
            manager,
            track,
            handle: None,
            playing: false,
        }
    }

    /// A player that never makes a sound.
    pub fn silent() -> Self {
        Self {
            manager: None,
            track: None,
            handle: None,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether toggling will actually be audible.
    pub fn is_audible(&self) -> bool {
        self.manager.is_some() && self.track.is_some()
    }

    /// Flip between playing and paused. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        let want = !self.playing;
        if let Err(e) = self.apply(want) {
            log::warn!("Music toggle failed: {}", e);
        }
        self.playing = want;
        self.playing
    }

    fn apply(&mut self, play: bool) -> Result<()> {
        if !play {
            if let Some(handle) = &mut self.handle {
                let _ = handle.pause(Tween::default());
            }
            return Ok(());
        }

        // Resume the paused instance so the loop continues where it left off.
        if let Some(handle) = &mut self.handle {
            if handle.state() != PlaybackState::Stopped {
                let _ = handle.resume(Tween::default());
                return Ok(());
            }
        }

        if let (Some(manager), Some(track)) = (&mut self.manager, &self.track) {
            self.handle = Some(manager.play(track.clone())?);
        }
        Ok(())
    }

    /// Stop playback for good (teardown).
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            let _ = handle.stop(Tween::default());
        }
        self.playing = false;
    }
}

impl Drop for BackgroundMusic {
    fn drop(&mut self) {
        self.stop();
    }
}

fn load_looping(path: &Path, volume: f64) -> Result<StaticSoundData> {
    let settings = StaticSoundSettings::new().volume(volume).loop_region(..);
    Ok(StaticSoundData::from_file(path)?.with_settings(settings))
}

// Re-export for convenience
pub use kira;
