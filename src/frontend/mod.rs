//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the terminal frontend implements.
//! It provides a unified interface for event reading, rendering, and cleanup.

pub mod events;
pub mod tui;

use crate::core::{Action, AppCore};
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait
///
/// The Frontend trait separates rendering concerns from widget logic.
/// The core never calls into the frontend; the main loop feeds frontend
/// events to the core and hands the core back to the frontend to draw.
#[allow(async_fn_in_trait)]
pub trait Frontend {
    /// Wait for the next user input event
    ///
    /// Native events with no counterpart in `FrontendEvent` are skipped.
    /// Must be cancel safe: it is raced against tick delivery.
    ///
    /// # Returns
    /// - `Ok(event)` - Next event (`FrontendEvent::Quit` once input is exhausted)
    /// - `Err(...)` - If reading input failed
    async fn next_event(&mut self) -> Result<FrontendEvent>;

    /// Render the current application state
    ///
    /// Called whenever the core reports a visible change.
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Action bound to the screen cell at (x, y) in the last rendered frame
    fn action_at(&self, x: u16, y: u16) -> Option<Action>;

    /// Audible alert (countdown finished)
    fn ring_bell(&mut self) -> Result<()>;

    /// Cleanup and shutdown the frontend
    ///
    /// Restores the terminal before the application exits.
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal size as `(width, height)`
    fn size(&self) -> (u16, u16);
}
