//! TUI Frontend (ratatui-based)
//!
//! This module implements the Frontend trait using ratatui for terminal rendering.
//! It wraps crossterm for event handling and terminal management.

pub mod app;
mod big_text;
mod button;
mod card;
mod clock_view;
mod countdown;
mod hit_map;
mod progress_ring;
mod settings_panel;
mod stopwatch_view;
mod tab_bar;

pub use app::TuiFrontend;
