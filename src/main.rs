//! Chrononeon - neon clock, stopwatch, and countdown timer for the terminal
//!
//! One card, three tabs, five accent colors. Keyboard and mouse driven.

mod config;
mod core;
mod data;
mod frontend;
mod theme;
mod widgets;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use data::ui_state::Tab;
use frontend::Frontend;
use std::path::PathBuf;
use theme::ThemeColor;

#[derive(ClapParser)]
#[command(name = "chrononeon")]
#[command(about = "Neon terminal clock, stopwatch, and countdown timer", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.chrononeon)
    /// Can also be set via CHRONONEON_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Tab to open on startup
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Accent color
    #[arg(long, value_enum)]
    theme: Option<ThemeColor>,

    /// Countdown duration in seconds
    #[arg(short, long, value_name = "SECS")]
    duration: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Must happen before anything resolves the data directory
    if let Some(ref dir) = cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, dir);
    }

    init_logging()?;
    tracing::info!("Starting chrononeon {}", env!("CARGO_PKG_VERSION"));

    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(tab) = cli.tab {
        config.ui.start_tab = tab;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    if let Some(secs) = cli.duration {
        config.timer.default_duration_secs = secs;
    }
    config.validate().context("Invalid command line options")?;

    run_tui(config)
}

/// Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
/// TUI apps can't log to stdout, so we write to a file in the data directory
fn init_logging() -> Result<()> {
    let base_dir = config::Config::base_dir()?;
    std::fs::create_dir_all(&base_dir)
        .with_context(|| format!("Failed to create data directory {}", base_dir.display()))?;

    let log_path = config::Config::log_path()?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    Ok(())
}

/// Run TUI frontend
fn run_tui(config: config::Config) -> Result<()> {
    // Every state change happens on this one thread; tick tasks only send
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    runtime.block_on(async_run_tui(config))
}

/// What woke the main loop
enum LoopEvent {
    Input(frontend::FrontendEvent),
    Tick(core::Tick),
}

/// Async TUI main loop: terminal input and timer ticks, one at a time
async fn async_run_tui(config: config::Config) -> Result<()> {
    use crate::core::{input_router, Action, AppCore, TickScheduler};
    use frontend::{FrontendEvent, TuiFrontend};
    use tokio::sync::mpsc;

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<core::Tick>();

    let mut app_core = AppCore::new(config);
    let mut scheduler = TickScheduler::new(tick_tx);
    let mut frontend = TuiFrontend::new()?;

    let (width, height) = frontend.size();
    tracing::info!(width, height, "Terminal ready");

    scheduler.sync(&app_core);

    // Main event loop
    while app_core.running {
        if app_core.needs_render {
            frontend.render(&app_core)?;
            app_core.needs_render = false;
        }

        let event = tokio::select! {
            input = frontend.next_event() => LoopEvent::Input(input?),
            Some(tick) = tick_rx.recv() => LoopEvent::Tick(tick),
        };

        match event {
            LoopEvent::Input(FrontendEvent::Key { code, modifiers }) => {
                if let Some(action) = input_router::route_key(code, modifiers, &app_core) {
                    app_core.apply(action);
                }
            }
            LoopEvent::Input(FrontendEvent::Click { x, y }) => {
                if let Some(action) = frontend.action_at(x, y) {
                    app_core.apply(action);
                }
            }
            LoopEvent::Input(FrontendEvent::Resize { width, height }) => {
                tracing::debug!(width, height, "Terminal resized");
                app_core.needs_render = true;
            }
            LoopEvent::Input(FrontendEvent::Quit) => {
                tracing::info!("Input stream closed");
                app_core.apply(Action::Quit);
            }
            LoopEvent::Tick(tick) => {
                if scheduler.accepts(&tick) {
                    app_core.tick(tick.source);
                } else {
                    tracing::trace!(?tick, "Dropping tick from cancelled task");
                }
            }
        }

        scheduler.sync(&app_core);

        if app_core.take_bell() {
            if let Err(e) = frontend.ring_bell() {
                tracing::warn!("Failed to ring bell: {}", e);
            }
        }
    }

    scheduler.shutdown();
    frontend.cleanup()?;
    tracing::info!("Exiting");

    Ok(())
}
