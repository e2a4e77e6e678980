//! Background Music
//!
//! Owns the single looping music stream. The player is created lazily on
//! the first [`BackgroundMusic::start`], start is idempotent, and
//! [`BackgroundMusic::stop`] releases everything so a later start fully
//! reinitialises.
//!
//! While started, the controller holds one lifecycle observer and pauses
//! or resumes playback as the app moves to the background or foreground.
//!
//! Nothing here ever returns an error to the caller: music is a nicety,
//! and a failure to play it is logged and otherwise ignored.

use std::path::PathBuf;

use thiserror::Error;

use crate::lifecycle::{AppLifecycle, LifecycleObserver, LifecycleState};

/// Default playback volume
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Errors raised by audio backends
#[derive(Debug, Error)]
pub enum AudioError {
    /// No output device could be opened
    #[error("No audio output device available: {0}")]
    DeviceUnavailable(String),

    /// The music file could not be opened
    #[error("Failed to open music file at {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The music file could not be decoded
    #[error("Failed to decode music: {0}")]
    Decode(String),

    /// This build has no audio support
    #[error("Audio playback is not supported in this build")]
    Unsupported,

    /// The player rejected a command
    #[error("Audio player error: {0}")]
    Player(String),
}

/// What to play and how
#[derive(Clone, Debug, PartialEq)]
pub struct MusicSettings {
    /// Music file
    pub path: PathBuf,
    /// Volume (0.0 to 1.0)
    pub volume: f32,
    /// Loop forever
    pub looping: bool,
    /// Never start playback
    pub muted: bool,
}

impl Default for MusicSettings {
    fn default() -> Self {
        Self {
            path: crate::config::default_music_path(),
            volume: DEFAULT_VOLUME,
            looping: true,
            muted: false,
        }
    }
}

/// A live playback session
pub trait AudioPlayer {
    fn play(&mut self) -> Result<(), AudioError>;

    fn pause(&mut self) -> Result<(), AudioError>;

    /// Free the underlying stream
    fn release(self: Box<Self>) -> Result<(), AudioError>;
}

/// Factory for playback sessions
pub trait AudioBackend {
    /// Create a player configured with `settings` (volume, looping)
    fn create_player(&mut self, settings: &MusicSettings)
        -> Result<Box<dyn AudioPlayer>, AudioError>;
}

/// Backend for builds without audio output
#[derive(Debug, Default)]
pub struct UnavailableBackend;

impl AudioBackend for UnavailableBackend {
    fn create_player(
        &mut self,
        _settings: &MusicSettings,
    ) -> Result<Box<dyn AudioPlayer>, AudioError> {
        Err(AudioError::Unsupported)
    }
}

/// Process-wide background music controller
pub struct BackgroundMusic {
    backend: Box<dyn AudioBackend>,
    settings: MusicSettings,
    player: Option<Box<dyn AudioPlayer>>,
    started: bool,
    paused: bool,
    observer: Option<LifecycleObserver>,
}

impl BackgroundMusic {
    pub fn new(backend: Box<dyn AudioBackend>, settings: MusicSettings) -> Self {
        Self {
            backend,
            settings,
            player: None,
            started: false,
            paused: false,
            observer: None,
        }
    }

    /// Start playback. A no-op while already started.
    pub fn start(&mut self, lifecycle: &AppLifecycle) {
        if self.started {
            return;
        }
        if self.settings.muted {
            tracing::debug!("Background music muted");
            return;
        }

        match self.try_start(lifecycle) {
            Ok(()) => tracing::info!(path = ?self.settings.path, "Background music started"),
            Err(e) => tracing::warn!("Error playing background music: {}", e),
        }
    }

    fn try_start(&mut self, lifecycle: &AppLifecycle) -> Result<(), AudioError> {
        let mut player = self.backend.create_player(&self.settings)?;

        if let Err(e) = player.play() {
            if let Err(release_err) = player.release() {
                tracing::debug!("Release after failed play also failed: {}", release_err);
            }
            return Err(e);
        }

        self.player = Some(player);
        self.started = true;
        self.paused = false;
        self.observer = Some(lifecycle.subscribe());

        if lifecycle.state() == LifecycleState::Background {
            self.apply_lifecycle(LifecycleState::Background);
        }

        Ok(())
    }

    /// Stop playback and release the player. A no-op when not started.
    pub fn stop(&mut self) {
        let Some(mut player) = self.player.take() else {
            return;
        };

        self.started = false;
        self.paused = false;
        self.observer = None;

        if let Err(e) = player.pause() {
            tracing::warn!("Error stopping background music: {}", e);
        }
        if let Err(e) = player.release() {
            tracing::warn!("Error releasing background music: {}", e);
        }
        tracing::info!("Background music stopped");
    }

    /// Apply any pending foreground/background transition
    pub fn poll_lifecycle(&mut self) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        if let Some(state) = observer.poll() {
            self.apply_lifecycle(state);
        }
    }

    fn apply_lifecycle(&mut self, state: LifecycleState) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        let result = match state {
            LifecycleState::Background => player.pause(),
            LifecycleState::Active => player.play(),
        };

        match result {
            Ok(()) => self.paused = state == LifecycleState::Background,
            Err(e) => tracing::warn!(?state, "Error updating background music: {}", e),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Started and not paused by a background transition
    pub fn is_playing(&self) -> bool {
        self.started && !self.paused
    }

    pub fn settings(&self) -> &MusicSettings {
        &self.settings
    }
}

impl Drop for BackgroundMusic {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_backend_never_starts() {
        let lifecycle = AppLifecycle::new();
        let mut music = BackgroundMusic::new(Box::new(UnavailableBackend), MusicSettings::default());
        music.start(&lifecycle);
        assert!(!music.is_started());
        assert_eq!(lifecycle.observer_count(), 0);
    }

    #[test]
    fn test_muted_never_creates_player() {
        let lifecycle = AppLifecycle::new();
        let settings = MusicSettings {
            muted: true,
            ..MusicSettings::default()
        };
        let mut music = BackgroundMusic::new(Box::new(UnavailableBackend), settings);
        music.start(&lifecycle);
        assert!(!music.is_started());
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let mut music = BackgroundMusic::new(Box::new(UnavailableBackend), MusicSettings::default());
        music.stop();
        assert!(!music.is_started());
    }

    #[test]
    fn test_default_settings() {
        let settings = MusicSettings::default();
        assert_eq!(settings.volume, DEFAULT_VOLUME);
        assert!(settings.looping);
        assert!(!settings.muted);
    }
}
