//! Clickable regions recorded while drawing a frame.
//!
//! Each frame starts from an empty map; widgets register the area they drew
//! together with the action a left click there should trigger.

use crate::core::Action;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, action: Action) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, action));
        }
    }

    /// Action under a cell. Later registrations are drawn on top and win.
    pub fn action_at(&self, x: u16, y: u16) -> Option<Action> {
        let position = Position { x, y };
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
