//! Input routing for the widget
//!
//! Routes keyboard input to an [`Action`] based on:
//! - The active tab (start/pause/reset/presets apply to the visible timer)
//! - Whether the settings panel is open (arrow keys pick a swatch)
//! - The configured countdown presets

use crate::core::action::Action;
use crate::core::AppCore;
use crate::data::ui_state::Tab;
use crossterm::event::{KeyCode, KeyModifiers};

/// Route a key press to an Action based on current context
pub fn route_key(code: KeyCode, modifiers: KeyModifiers, core: &AppCore) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    if core.show_settings() {
        match code {
            KeyCode::Left | KeyCode::Char('h') => return Some(Action::PrevTheme),
            KeyCode::Right | KeyCode::Char('l') => return Some(Action::NextTheme),
            KeyCode::Esc => return Some(Action::CloseSettings),
            _ => {}
        }
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Char('c') => Some(Action::SelectTab(Tab::Clock)),
        KeyCode::Char('w') => Some(Action::SelectTab(Tab::Stopwatch)),
        KeyCode::Char('t') => Some(Action::SelectTab(Tab::Timer)),
        KeyCode::Char('s') => Some(Action::ToggleSettings),
        KeyCode::Char(' ') | KeyCode::Enter => toggle_for(core.active_tab()),
        KeyCode::Char('r') => reset_for(core.active_tab()),
        KeyCode::Char(c @ '1'..='9') if core.active_tab() == Tab::Timer => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            core.presets().get(index).map(|&secs| Action::SelectPreset(secs))
        }
        _ => None,
    }
}

/// Start/pause action for the timer shown on `tab`
pub fn toggle_for(tab: Tab) -> Option<Action> {
    match tab {
        Tab::Clock => None,
        Tab::Stopwatch => Some(Action::ToggleStopwatch),
        Tab::Timer => Some(Action::ToggleCountdown),
    }
}

/// Reset action for the timer shown on `tab`
pub fn reset_for(tab: Tab) -> Option<Action> {
    match tab {
        Tab::Clock => None,
        Tab::Stopwatch => Some(Action::ResetStopwatch),
        Tab::Timer => Some(Action::ResetCountdown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(core: &AppCore, code: KeyCode) -> Option<Action> {
        route_key(code, KeyModifiers::NONE, core)
    }

    #[test]
    fn test_tab_keys() {
        let core = AppCore::new(Config::default());
        assert_eq!(key(&core, KeyCode::Tab), Some(Action::NextTab));
        assert_eq!(key(&core, KeyCode::BackTab), Some(Action::PrevTab));
        assert_eq!(key(&core, KeyCode::Char('w')), Some(Action::SelectTab(Tab::Stopwatch)));
        assert_eq!(key(&core, KeyCode::Char('t')), Some(Action::SelectTab(Tab::Timer)));
    }

    #[test]
    fn test_start_and_reset_follow_active_tab() {
        let mut core = AppCore::new(Config::default());
        assert_eq!(key(&core, KeyCode::Char(' ')), None);
        assert_eq!(key(&core, KeyCode::Char('r')), None);

        core.apply(Action::SelectTab(Tab::Stopwatch));
        assert_eq!(key(&core, KeyCode::Char(' ')), Some(Action::ToggleStopwatch));
        assert_eq!(key(&core, KeyCode::Char('r')), Some(Action::ResetStopwatch));

        core.apply(Action::SelectTab(Tab::Timer));
        assert_eq!(key(&core, KeyCode::Enter), Some(Action::ToggleCountdown));
        assert_eq!(key(&core, KeyCode::Char('r')), Some(Action::ResetCountdown));
    }

    #[test]
    fn test_preset_keys_only_on_timer_tab() {
        let mut core = AppCore::new(Config::default());
        assert_eq!(key(&core, KeyCode::Char('2')), None);

        core.apply(Action::SelectTab(Tab::Timer));
        assert_eq!(key(&core, KeyCode::Char('1')), Some(Action::SelectPreset(300)));
        assert_eq!(key(&core, KeyCode::Char('2')), Some(Action::SelectPreset(1500)));
        assert_eq!(key(&core, KeyCode::Char('3')), None);
    }

    #[test]
    fn test_settings_navigation() {
        let mut core = AppCore::new(Config::default());
        assert_eq!(key(&core, KeyCode::Right), None);
        assert_eq!(key(&core, KeyCode::Esc), Some(Action::Quit));

        core.apply(Action::ToggleSettings);
        assert_eq!(key(&core, KeyCode::Right), Some(Action::NextTheme));
        assert_eq!(key(&core, KeyCode::Char('h')), Some(Action::PrevTheme));
        assert_eq!(key(&core, KeyCode::Esc), Some(Action::CloseSettings));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let core = AppCore::new(Config::default());
        assert_eq!(
            route_key(KeyCode::Char('c'), KeyModifiers::CONTROL, &core),
            Some(Action::Quit)
        );
        assert_eq!(route_key(KeyCode::Char('x'), KeyModifiers::CONTROL, &core), None);
    }
}
