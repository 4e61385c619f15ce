//! UI State - tab, theme, and settings panel selection
//!
//! This module contains UI state that is independent of rendering and of the
//! timers themselves. Changing anything here never touches timer values.

use crate::theme::ThemeColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three views is on screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Clock,
    Stopwatch,
    Timer,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Clock, Tab::Stopwatch, Tab::Timer];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Clock => "Clock",
            Tab::Stopwatch => "Stopwatch",
            Tab::Timer => "Timer",
        }
    }

    pub fn icon(self) -> char {
        match self {
            Tab::Clock => '◷',
            Tab::Stopwatch => '◴',
            Tab::Timer => '◔',
        }
    }

    fn index(self) -> usize {
        match self {
            Tab::Clock => 0,
            Tab::Stopwatch => 1,
            Tab::Timer => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Application UI state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Currently displayed view
    pub active_tab: Tab,

    /// Accent color for every themed element
    pub theme: ThemeColor,

    /// Whether the color swatch panel is expanded
    pub show_settings: bool,
}

impl UiState {
    pub fn new(active_tab: Tab, theme: ThemeColor) -> Self {
        Self {
            active_tab,
            theme,
            show_settings: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Clock.next(), Tab::Stopwatch);
        assert_eq!(Tab::Timer.next(), Tab::Clock);
        assert_eq!(Tab::Clock.prev(), Tab::Timer);
        assert_eq!(Tab::Stopwatch.prev(), Tab::Clock);
    }

    #[test]
    fn test_defaults() {
        let state = UiState::default();
        assert_eq!(state.active_tab, Tab::Clock);
        assert_eq!(state.theme, ThemeColor::Cyan);
        assert!(!state.show_settings);
    }

    #[test]
    fn test_tab_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            tab: Tab,
        }
        let parsed: Wrapper = toml::from_str("tab = \"stopwatch\"").unwrap();
        assert_eq!(parsed.tab, Tab::Stopwatch);
    }
}
