//! Main Application
//!
//! The App is a thin display client over the card core's [`Shell`]:
//! 1. Converts terminal events into shell inputs
//! 2. Advances the shell and the carousel view once per frame
//! 3. Renders the current stage through the layered compositor

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::time::MissedTickBehavior;

use card_core::{AppStage, CardConfig, LifecycleState, Shell, ShellEvent, Tab};

use crate::art::Gallery;
use crate::carousel_view::CarouselView;
use crate::compositor::{Blend, Compositor, LayerId};
use crate::screens::{
    render_confetti, render_home, render_memories, render_splash, render_tab_bar, render_welcome,
    tab_at, TAB_BAR_HEIGHT,
};

/// How long a keyboard "press" holds the welcome button down
const KEY_PRESS_HOLD: Duration = Duration::from_millis(120);

pub struct App {
    // === Core State ===
    running: bool,
    shell: Shell,

    // === UI Components ===
    view: CarouselView,
    gallery: Gallery,
    compositor: Compositor,
    layers: AppLayers,

    // === Input State ===
    /// Time left before a keyboard press releases the welcome button
    key_press: Option<Duration>,

    // === Misc State ===
    frame_interval: Duration,
    last_frame: Instant,
    size: (u16, u16),
}

/// Layer IDs for UI regions
struct AppLayers {
    scene: LayerId,
    confetti: LayerId,
    tabs: LayerId,
}

impl App {
    pub fn new(shell: Shell, config: &CardConfig, area: Rect) -> Self {
        let mut compositor = Compositor::new(area);
        let layers = AppLayers {
            scene: compositor.create_layer(area, 0, Blend::Opaque),
            confetti: compositor.create_layer(area, 20, Blend::Overlay),
            tabs: compositor.create_layer(Rect::default(), 30, Blend::Opaque),
        };

        let view = CarouselView::new(shell.carousel().slides().len());

        let mut app = Self {
            running: true,
            shell,
            view,
            gallery: Gallery::new(),
            compositor,
            layers,
            key_press: None,
            frame_interval: config.frame_interval(),
            last_frame: Instant::now(),
            size: (area.width, area.height),
        };
        app.layout();
        app
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // First frame shows the blank background; everything is in memory
        // after that, so the screens may start animating
        terminal.draw(|frame| self.draw(frame))?;
        self.assets_ready();
        self.last_frame = Instant::now();

        while self.running {
            tokio::select! {
                biased;

                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                    None => self.running = false,
                },

                _ = ticker.tick() => {
                    let now = Instant::now();
                    let delta = now - self.last_frame;
                    self.last_frame = now;

                    self.update(delta);
                    terminal.draw(|frame| self.draw(frame))?;
                }
            }
        }

        self.shell.shutdown();
        Ok(())
    }

    pub fn assets_ready(&mut self) {
        self.shell.assets_ready();
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.handle_resize(w, h),
            Event::FocusGained => self.shell.set_lifecycle(LifecycleState::Active),
            Event::FocusLost => self.shell.set_lifecycle(LifecycleState::Background),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            _ => {}
        }

        match self.shell.stage() {
            AppStage::Splash => {}
            AppStage::Welcome => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) && self.key_press.is_none()
                {
                    self.shell.press_in();
                    self.key_press = Some(KEY_PRESS_HOLD);
                }
            }
            AppStage::Main => match key.code {
                KeyCode::Tab | KeyCode::BackTab => self.shell.cycle_tab(),
                KeyCode::Char('1') => self.shell.select_tab(Tab::Home),
                KeyCode::Char('2') => self.shell.select_tab(Tab::Memories),
                KeyCode::Left => self.page(-1),
                KeyCode::Right => self.page(1),
                _ => {}
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match (self.shell.stage(), mouse.kind) {
            (AppStage::Welcome, MouseEventKind::Down(MouseButton::Left)) => self.shell.press_in(),
            (AppStage::Welcome, MouseEventKind::Up(MouseButton::Left)) => {
                self.shell.press_out();
                self.shell.open_gift();
            }

            (AppStage::Main, MouseEventKind::Down(MouseButton::Left)) => {
                if self.compositor.layer_at(mouse.column, mouse.row) == Some(self.layers.tabs) {
                    if let Some(tab) = tab_at(self.tab_bar_area(), mouse.column) {
                        self.shell.select_tab(tab);
                    }
                } else if self.is_memories() {
                    self.view.begin_drag(mouse.column);
                }
            }
            (AppStage::Main, MouseEventKind::Drag(MouseButton::Left)) => {
                if self.view.drag_to(mouse.column) {
                    self.shell.drag_started();
                }
            }
            (AppStage::Main, MouseEventKind::Up(MouseButton::Left)) => self.view.end_drag(),
            _ => {}
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.compositor.resize(Rect::new(0, 0, width, height));
        self.layout();
    }

    /// Manual paging on the memories tab
    fn page(&mut self, direction: i32) {
        if !self.is_memories() {
            return;
        }
        self.shell.drag_started();
        self.view.page(direction);
    }

    fn quit(&mut self) {
        self.shell.shutdown();
        self.running = false;
    }

    // ========================================================================
    // Time
    // ========================================================================

    pub fn update(&mut self, delta: Duration) {
        if let Some(left) = self.key_press {
            if delta >= left {
                self.key_press = None;
                self.shell.press_out();
                self.shell.open_gift();
            } else {
                self.key_press = Some(left - delta);
            }
        }

        if let Some(settled) = self.view.update(delta) {
            self.shell
                .momentum_settled(settled.offset, settled.page_width, &mut self.view);
        }

        for event in self.shell.tick(delta, &mut self.view) {
            match event {
                ShellEvent::StageChanged(stage) => {
                    tracing::debug!(stage = stage.description(), "Relayout for stage");
                    self.layout();
                }
                ShellEvent::TabChanged(tab) => {
                    tracing::debug!(tab = tab.label(), "Tab shown");
                    self.layout();
                }
            }
        }
    }

    // ========================================================================
    // Layout & Rendering
    // ========================================================================

    fn layout(&mut self) {
        let (width, height) = self.size;
        let main = self.shell.stage() == AppStage::Main;
        let bar = if main { TAB_BAR_HEIGHT.min(height) } else { 0 };

        let scene = Rect::new(0, 0, width, height - bar);
        self.compositor.set_bounds(self.layers.scene, scene);
        self.compositor.set_bounds(self.layers.confetti, scene);
        self.compositor
            .set_bounds(self.layers.tabs, Rect::new(0, height - bar, width, bar));
        self.compositor.set_visible(self.layers.tabs, main);
        self.compositor.set_visible(
            self.layers.confetti,
            main && self.shell.tabs().is_focused(Tab::Home),
        );

        self.view.set_page_width(width);
    }

    fn tab_bar_area(&self) -> Rect {
        let (width, height) = self.size;
        let bar = TAB_BAR_HEIGHT.min(height);
        Rect::new(0, height - bar, width, bar)
    }

    fn is_memories(&self) -> bool {
        self.shell.stage() == AppStage::Main && self.shell.tabs().is_focused(Tab::Memories)
    }

    fn render_layers(&mut self) {
        let shell = &self.shell;
        let content = shell.content();

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.scene) {
            let area = buf.area;
            match shell.stage() {
                AppStage::Splash => {
                    render_splash(buf, area, shell.splash(), content.splash(), &self.gallery)
                }
                AppStage::Welcome => {
                    render_welcome(buf, area, shell.welcome(), content.welcome(), &self.gallery)
                }
                AppStage::Main => match shell.tabs().selected() {
                    Tab::Home => {
                        render_home(buf, area, shell.home(), content.home(), &self.gallery)
                    }
                    Tab::Memories => {
                        render_memories(buf, area, shell.carousel(), &self.view, &self.gallery)
                    }
                },
            }
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.confetti) {
            let area = buf.area;
            render_confetti(buf, area, &shell.home().confetti());
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.tabs) {
            let area = buf.area;
            render_tab_bar(buf, area, shell.tabs().selected());
        }
    }

    /// Render into a ratatui frame
    pub fn draw(&mut self, frame: &mut Frame) {
        self.render_layers();

        let output = self.compositor.composite();
        let area = frame.area();
        let buf = frame.buffer_mut();

        for y in 0..area.height.min(output.area.height) {
            for x in 0..area.width.min(output.area.width) {
                if let (Some(src), Some(dst)) = (output.cell((x, y)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn view(&self) -> &CarouselView {
        &self.view
    }

    /// Parting line once the gift was opened
    pub fn goodbye(&self) -> Option<String> {
        (self.shell.stage() == AppStage::Main)
            .then(|| format!("Happy birthday, {}!", self.shell.content().welcome().name))
    }
}
