//! Unified enum describing what a user interaction asks the widget to do.
//!
//! Keyboard and mouse input both resolve to an `Action`; `AppCore::apply`
//! is the only place that turns one into a state change.

use crate::data::ui_state::Tab;
use crate::theme::ThemeColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show a specific view
    SelectTab(Tab),
    NextTab,
    PrevTab,

    /// Expand or collapse the color swatches
    ToggleSettings,
    CloseSettings,

    /// Apply an accent color from the palette
    SelectTheme(ThemeColor),
    NextTheme,
    PrevTheme,

    /// Start/pause and reset of the stopwatch
    ToggleStopwatch,
    ResetStopwatch,

    /// Start/pause and reset of the countdown
    ToggleCountdown,
    ResetCountdown,

    /// Set the countdown duration (seconds); ignored while it runs
    SelectPreset(u32),

    /// Leave the application
    Quit,
}
