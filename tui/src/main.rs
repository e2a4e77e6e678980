//! Birthday Card TUI Entry Point
//!
//! Launches the terminal birthday card.
//!
//! Usage:
//!   card-tui
//!
//! Environment:
//!   CARD_CONFIG   Config file path (default: ~/.config/birthday-card/card.toml)
//!   CARD_MUSIC    Music file to loop in the background
//!                 (default: ~/.local/share/birthday-card/background.mp3)
//!   CARD_MUTED    Set to 1 to disable music
//!   CARD_FPS      Frames per second
//!   RUST_LOG      Log filter (logs go to a file, never the screen)

use std::fs::{self, OpenOptions};
use std::io;
use std::panic;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use card_core::{load_config, BackgroundMusic, CardConfig, ContentStore, Shell};
use card_tui::{audio, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (CardConfig::default(), Some(e)),
    };

    // Set up logging; the terminal belongs to the card
    if let Err(e) = init_logging(&config.log_path()) {
        eprintln!("Warning: logging disabled: {e}");
    }
    if let Some(e) = config_error {
        tracing::warn!("Using default configuration: {}", e);
    }
    tracing::info!(source = %config.source(), "Configuration loaded");
    if let Some(path) = config.missing_music() {
        tracing::warn!(
            "No music file at {}; set [audio] music_path or CARD_MUSIC to play one",
            path.display()
        );
    }

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: card-tui requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  • SSH without -t flag");
        eprintln!("  • Piped stdin/stdout");
        std::process::exit(1);
    }

    let content = ContentStore::load().context("Failed to load card content")?;
    let music = BackgroundMusic::new(audio::default_backend(), config.music.clone());
    let shell = Shell::new(content, music).context("Failed to build the card")?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, shell, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    match result {
        Ok(Some(goodbye)) => {
            println!("\n\x1b[35m♥\x1b[0m {}\n", goodbye);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => Err(e),
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shell: Shell,
    config: &CardConfig,
) -> anyhow::Result<Option<String>> {
    let size = terminal.size()?;
    let mut app = App::new(shell, config, Rect::new(0, 0, size.width, size.height));
    app.run(terminal).await?;
    Ok(app.goodbye())
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    Ok(())
}
