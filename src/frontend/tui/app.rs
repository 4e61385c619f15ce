use super::card;
use super::hit_map::HitMap;
use crate::core::{Action, AppCore};
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};

/// TUI Frontend using ratatui
///
/// This frontend renders the widget using ratatui (terminal UI library)
/// and reads input from the async crossterm event stream.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    events: EventStream,
    /// Clickable regions from the last frame
    hit_map: HitMap,
    restored: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture, and enters alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            events: EventStream::new(),
            hit_map: HitMap::new(),
            restored: false,
        })
    }
}

impl Frontend for TuiFrontend {
    async fn next_event(&mut self) -> Result<FrontendEvent> {
        loop {
            match self.events.next().await {
                Some(Ok(event)) => {
                    if let Some(frontend_event) = FrontendEvent::from_crossterm(event) {
                        return Ok(frontend_event);
                    }
                }
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => return Ok(FrontendEvent::Quit),
            }
        }
    }

    fn render(&mut self, core: &AppCore) -> Result<()> {
        let hits = &mut self.hit_map;
        hits.clear();

        self.terminal
            .draw(|f| {
                let area = f.area();
                card::render(core, area, f.buffer_mut(), hits);
            })
            .context("Failed to draw frame")?;

        Ok(())
    }

    fn action_at(&self, x: u16, y: u16) -> Option<Action> {
        self.hit_map.action_at(x, y)
    }

    fn ring_bell(&mut self) -> Result<()> {
        let backend = self.terminal.backend_mut();
        backend.write_all(b"\x07")?;
        backend.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

