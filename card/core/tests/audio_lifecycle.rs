//! Background Music Lifecycle Tests
//!
//! Uses a scripted backend that counts sessions so idempotent start,
//! full release on stop and observer bookkeeping can be checked without
//! an audio device.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use card_core::{
    AppLifecycle, AudioBackend, AudioError, AudioPlayer, BackgroundMusic, LifecycleState,
    MusicSettings,
};

// =============================================================================
// Scripted Backend
// =============================================================================

#[derive(Debug, Default)]
struct Ledger {
    created: usize,
    released: usize,
    plays: usize,
    pauses: usize,
    last_volume: Option<f32>,
}

impl Ledger {
    fn live_sessions(&self) -> usize {
        self.created - self.released
    }
}

#[derive(Clone, Copy, Default)]
struct Faults {
    create: bool,
    play: bool,
}

struct ScriptedBackend {
    ledger: Rc<RefCell<Ledger>>,
    faults: Faults,
}

struct ScriptedPlayer {
    ledger: Rc<RefCell<Ledger>>,
    fail_play: bool,
}

impl AudioBackend for ScriptedBackend {
    fn create_player(
        &mut self,
        settings: &MusicSettings,
    ) -> Result<Box<dyn AudioPlayer>, AudioError> {
        if self.faults.create {
            return Err(AudioError::DeviceUnavailable("scripted".into()));
        }
        let mut ledger = self.ledger.borrow_mut();
        ledger.created += 1;
        ledger.last_volume = Some(settings.volume);
        Ok(Box::new(ScriptedPlayer {
            ledger: Rc::clone(&self.ledger),
            fail_play: self.faults.play,
        }))
    }
}

impl AudioPlayer for ScriptedPlayer {
    fn play(&mut self) -> Result<(), AudioError> {
        if self.fail_play {
            return Err(AudioError::Player("scripted".into()));
        }
        self.ledger.borrow_mut().plays += 1;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        self.ledger.borrow_mut().pauses += 1;
        Ok(())
    }

    fn release(self: Box<Self>) -> Result<(), AudioError> {
        self.ledger.borrow_mut().released += 1;
        Ok(())
    }
}

fn music_with(faults: Faults) -> (BackgroundMusic, Rc<RefCell<Ledger>>) {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let backend = ScriptedBackend {
        ledger: Rc::clone(&ledger),
        faults,
    };
    (
        BackgroundMusic::new(Box::new(backend), MusicSettings::default()),
        ledger,
    )
}

fn music() -> (BackgroundMusic, Rc<RefCell<Ledger>>) {
    music_with(Faults::default())
}

// =============================================================================
// Start / Stop
// =============================================================================

#[test]
fn test_player_created_lazily() {
    let (_music, ledger) = music();
    assert_eq!(ledger.borrow().created, 0);
}

#[test]
fn test_double_start_is_one_session() {
    let lifecycle = AppLifecycle::new();
    let (mut music, ledger) = music();

    music.start(&lifecycle);
    music.start(&lifecycle);

    assert!(music.is_playing());
    assert_eq!(ledger.borrow().created, 1);
    assert_eq!(ledger.borrow().plays, 1);
    assert_eq!(ledger.borrow().live_sessions(), 1);
    assert_eq!(lifecycle.observer_count(), 1);
    assert_eq!(ledger.borrow().last_volume, Some(card_core::DEFAULT_VOLUME));
}

#[test]
fn test_stop_releases_and_restart_reinitialises() {
    let lifecycle = AppLifecycle::new();
    let (mut music, ledger) = music();

    music.start(&lifecycle);
    music.stop();
    assert!(!music.is_started());
    assert_eq!(ledger.borrow().live_sessions(), 0);

    music.start(&lifecycle);
    assert!(music.is_started());
    assert_eq!(ledger.borrow().created, 2);
    assert_eq!(ledger.borrow().live_sessions(), 1);
}

#[test]
fn test_no_observer_leak_across_cycles() {
    let lifecycle = AppLifecycle::new();
    let (mut music, _ledger) = music();

    for _ in 0..10 {
        music.start(&lifecycle);
        assert_eq!(lifecycle.observer_count(), 1);
        music.stop();
        assert_eq!(lifecycle.observer_count(), 0);
    }
}

#[test]
fn test_drop_releases_session() {
    let lifecycle = AppLifecycle::new();
    let (mut music, ledger) = music();
    music.start(&lifecycle);
    drop(music);
    assert_eq!(ledger.borrow().live_sessions(), 0);
    assert_eq!(lifecycle.observer_count(), 0);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_background_pauses_and_foreground_resumes() {
    let lifecycle = AppLifecycle::new();
    let (mut music, ledger) = music();
    music.start(&lifecycle);

    lifecycle.set_state(LifecycleState::Background);
    music.poll_lifecycle();
    assert!(!music.is_playing());
    assert!(music.is_started());
    assert_eq!(ledger.borrow().pauses, 1);

    lifecycle.set_state(LifecycleState::Active);
    music.poll_lifecycle();
    assert!(music.is_playing());
    assert_eq!(ledger.borrow().plays, 2);
}

#[test]
fn test_start_while_backgrounded_stays_paused() {
    let lifecycle = AppLifecycle::new();
    lifecycle.set_state(LifecycleState::Background);
    let (mut music, ledger) = music();

    music.start(&lifecycle);
    assert!(music.is_started());
    assert!(!music.is_playing());
    assert_eq!(ledger.borrow().pauses, 1);
}

#[test]
fn test_lifecycle_ignored_after_stop() {
    let lifecycle = AppLifecycle::new();
    let (mut music, ledger) = music();
    music.start(&lifecycle);
    music.stop();
    let pauses = ledger.borrow().pauses;

    lifecycle.set_state(LifecycleState::Background);
    music.poll_lifecycle();
    assert_eq!(ledger.borrow().pauses, pauses);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_create_failure_is_swallowed() {
    let lifecycle = AppLifecycle::new();
    let (mut music, ledger) = music_with(Faults {
        create: true,
        ..Faults::default()
    });

    music.start(&lifecycle);
    assert!(!music.is_started());
    assert_eq!(ledger.borrow().created, 0);
    assert_eq!(lifecycle.observer_count(), 0);

    // Stop after a failed start is harmless
    music.stop();
}

#[test]
fn test_play_failure_releases_player() {
    let lifecycle = AppLifecycle::new();
    let (mut music, ledger) = music_with(Faults {
        play: true,
        ..Faults::default()
    });

    music.start(&lifecycle);
    assert!(!music.is_started());
    assert_eq!(ledger.borrow().live_sessions(), 0);
    assert_eq!(lifecycle.observer_count(), 0);
}
