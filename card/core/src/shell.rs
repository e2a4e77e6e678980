//! App Shell
//!
//! Headless composition of the whole card: the stage sequencer, the
//! splash and welcome screens, the two main tabs, the memories carousel
//! and the background music. Surfaces forward input and time here and
//! read state back for rendering.
//!
//! ```text
//!  input ──► Shell ──► StageSequencer ──► Splash │ Welcome │ Main
//!  time  ──►   │                                              │
//!              │                                   TabBar ────┤
//!              │                                     ├─ HomeController ─► music request
//!              │                                     └─ Carousel ──► DisplayHost
//!              └─► AppLifecycle ──► BackgroundMusic
//! ```

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::BackgroundMusic;
use crate::carousel::{Carousel, CarouselTiming, DisplayHost};
use crate::content::{ContentError, ContentStore};
use crate::lifecycle::{AppLifecycle, LifecycleState};
use crate::screens::{
    HomeController, HomeEvent, SplashController, SplashEvent, WelcomeController, WelcomeEvent,
};
use crate::slides::LoopedSlides;
use crate::stage::{AppStage, StageSequencer};
use crate::tabs::{Tab, TabBar, TabChange};

/// Changes surfaces may want to react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    StageChanged(AppStage),
    TabChanged(Tab),
}

pub struct Shell {
    content: ContentStore,
    sequencer: StageSequencer,
    splash: SplashController,
    welcome: WelcomeController,
    tabs: TabBar,
    home: HomeController,
    carousel: Carousel,
    lifecycle: AppLifecycle,
    music: BackgroundMusic,
    rng: StdRng,
    events: Vec<ShellEvent>,
}

impl Shell {
    /// Build the shell from content
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NoSlides`] when there is nothing to show in
    /// the memories tab.
    pub fn new(content: ContentStore, music: BackgroundMusic) -> Result<Self, ContentError> {
        Self::with_timing(content, music, CarouselTiming::default())
    }

    pub fn with_timing(
        content: ContentStore,
        music: BackgroundMusic,
        timing: CarouselTiming,
    ) -> Result<Self, ContentError> {
        let slides = LoopedSlides::new(content.slides()).ok_or(ContentError::NoSlides)?;

        Ok(Self {
            content,
            sequencer: StageSequencer::new(),
            splash: SplashController::new(),
            welcome: WelcomeController::new(),
            tabs: TabBar::new(),
            home: HomeController::new(),
            carousel: Carousel::new(slides, timing),
            lifecycle: AppLifecycle::new(),
            music,
            rng: StdRng::from_entropy(),
            events: Vec::new(),
        })
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Fonts and images are available. Gates every animation.
    pub fn assets_ready(&mut self) {
        self.splash.set_assets_ready();
        self.welcome.set_assets_ready();
        self.carousel.set_assets_ready();
    }

    /// Advance time and return what changed
    pub fn tick(&mut self, delta: Duration, host: &mut dyn DisplayHost) -> Vec<ShellEvent> {
        self.music.poll_lifecycle();

        match self.sequencer.stage() {
            AppStage::Splash => {
                if let Some(SplashEvent::Completed) = self.splash.update(delta) {
                    if self.sequencer.splash_completed() {
                        self.events.push(ShellEvent::StageChanged(AppStage::Welcome));
                    }
                }
            }
            AppStage::Welcome => self.welcome.update(delta),
            AppStage::Main => {
                self.home.update(delta);
                self.carousel.tick(delta, host);
            }
        }

        std::mem::take(&mut self.events)
    }

    pub fn press_in(&mut self) {
        if self.stage() == AppStage::Welcome {
            self.welcome.press_in();
        }
    }

    pub fn press_out(&mut self) {
        if self.stage() == AppStage::Welcome {
            self.welcome.press_out();
        }
    }

    /// Welcome button activated
    pub fn open_gift(&mut self) {
        if self.stage() != AppStage::Welcome {
            return;
        }
        if let Some(WelcomeEvent::OpenGift) = self.welcome.activate() {
            if self.sequencer.open_gift() {
                self.enter_main();
            }
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.stage() != AppStage::Main {
            return;
        }
        if let Some(change) = self.tabs.select(tab) {
            self.apply_tab_change(change);
        }
    }

    pub fn cycle_tab(&mut self) {
        if self.stage() != AppStage::Main {
            return;
        }
        if let Some(change) = self.tabs.cycle() {
            self.apply_tab_change(change);
        }
    }

    /// The user started dragging the memories pager
    pub fn drag_started(&mut self) {
        if self.is_memories_visible() {
            self.carousel.drag_started();
        }
    }

    /// A user drag on the memories pager came to rest on `index`
    ///
    /// Accepted even after the tab lost focus: the pager still ends on
    /// that page, and the carousel stays idle until refocused.
    pub fn settle_on_index(&mut self, index: usize, host: &mut dyn DisplayHost) {
        if self.stage() == AppStage::Main {
            self.carousel.settle_on_index(index, host);
        }
    }

    /// A user drag came to rest at a pixel offset
    pub fn momentum_settled(&mut self, offset: f32, page_width: f32, host: &mut dyn DisplayHost) {
        if self.stage() == AppStage::Main {
            self.carousel.momentum_settled(offset, page_width, host);
        }
    }

    /// Foreground/background transition from the platform
    pub fn set_lifecycle(&mut self, state: LifecycleState) {
        self.lifecycle.set_state(state);
        self.music.poll_lifecycle();
    }

    /// Release the music stream before exit
    pub fn shutdown(&mut self) {
        self.music.stop();
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    fn enter_main(&mut self) {
        self.events.push(ShellEvent::StageChanged(AppStage::Main));
        self.home.mount(&mut self.rng);
        let home = self.tabs.is_focused(Tab::Home);
        self.focus_home(home);
        self.carousel.set_focus(self.tabs.is_focused(Tab::Memories));
    }

    fn apply_tab_change(&mut self, change: TabChange) {
        self.focus_home(change.focused == Tab::Home);
        self.carousel.set_focus(change.focused == Tab::Memories);
        self.events.push(ShellEvent::TabChanged(change.focused));
    }

    fn focus_home(&mut self, focused: bool) {
        if let Some(HomeEvent::PlayMusic) = self.home.set_focus(focused) {
            self.music.start(&self.lifecycle);
        }
    }

    fn is_memories_visible(&self) -> bool {
        self.stage() == AppStage::Main && self.tabs.is_focused(Tab::Memories)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn stage(&self) -> AppStage {
        self.sequencer.stage()
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn splash(&self) -> &SplashController {
        &self.splash
    }

    pub fn welcome(&self) -> &WelcomeController {
        &self.welcome
    }

    pub fn tabs(&self) -> &TabBar {
        &self.tabs
    }

    pub fn home(&self) -> &HomeController {
        &self.home
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn music(&self) -> &BackgroundMusic {
        &self.music
    }

    pub fn lifecycle(&self) -> &AppLifecycle {
        &self.lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{MusicSettings, UnavailableBackend};
    use crate::carousel::CarouselState;
    use crate::screens::SPLASH_DURATION;

    struct NullHost;

    impl DisplayHost for NullHost {
        fn scroll_to_index(&mut self, _index: usize, _animated: bool) {}
    }

    fn shell() -> Shell {
        let content = ContentStore::load().unwrap();
        let music = BackgroundMusic::new(Box::new(UnavailableBackend), MusicSettings::default());
        Shell::new(content, music).unwrap()
    }

    #[test]
    fn test_splash_waits_for_assets() {
        let mut shell = shell();
        let events = shell.tick(SPLASH_DURATION * 2, &mut NullHost);
        assert!(events.is_empty());
        assert_eq!(shell.stage(), AppStage::Splash);
    }

    #[test]
    fn test_splash_then_welcome() {
        let mut shell = shell();
        shell.assets_ready();
        let events = shell.tick(SPLASH_DURATION, &mut NullHost);
        assert_eq!(events, vec![ShellEvent::StageChanged(AppStage::Welcome)]);
        assert!(shell.tick(SPLASH_DURATION, &mut NullHost).is_empty());
    }

    #[test]
    fn test_gift_ignored_during_splash() {
        let mut shell = shell();
        shell.assets_ready();
        shell.open_gift();
        assert_eq!(shell.stage(), AppStage::Splash);
    }

    #[test]
    fn test_main_focuses_home_not_carousel() {
        let mut shell = shell();
        shell.assets_ready();
        shell.tick(SPLASH_DURATION, &mut NullHost);
        shell.open_gift();

        assert_eq!(shell.stage(), AppStage::Main);
        assert!(shell.home().is_focused());
        assert!(shell.home().is_mounted());
        assert_eq!(shell.carousel().state(), CarouselState::Idle);
    }

    #[test]
    fn test_tabs_ignored_before_main() {
        let mut shell = shell();
        shell.select_tab(Tab::Memories);
        assert_eq!(shell.tabs().selected(), Tab::Home);
    }
}
