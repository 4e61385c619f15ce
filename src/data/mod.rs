//! Data layer - Pure state without UI coupling
//!
//! This module contains the UI selection state as pure data structures.
//! NO imports from frontend/ or any rendering code.

pub mod ui_state;

pub use ui_state::*;
