//! Core logic layer
//!
//! This module contains all widget state management and tick scheduling.
//! NO imports from frontend/ or rendering code.
//! Core updates state in response to actions and ticks, frontends read and render.

pub mod action;
pub mod app_core;
pub mod input_router;
pub mod ticker;

pub use action::Action;
pub use app_core::AppCore;
pub use ticker::{Tick, TickScheduler, TickSource};
