use crate::config::Config;
use crate::core::action::Action;
use crate::core::ticker::TickSource;
use crate::data::ui_state::{Tab, UiState};
use crate::theme::{AppTheme, ThemeColor};
use crate::widgets::{ClockState, CountdownState, StopwatchState, TickOutcome};

/// Core application state (frontend-agnostic)
///
/// AppCore is the single owner of everything the widget shows: the three
/// timers, the tab/theme selection, and the run flag. User input arrives as
/// [`Action`]s through [`AppCore::apply`], periodic sources arrive through
/// [`AppCore::tick`]; both are plain state transitions and never block.
/// Frontends only read from it.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Tab, theme, and settings panel state
    pub ui_state: UiState,

    /// Wall clock
    pub clock: ClockState,

    /// Stopwatch
    pub stopwatch: StopwatchState,

    /// Countdown timer
    pub countdown: CountdownState,

    /// Application running flag
    pub running: bool,

    /// Set by any visible change; cleared by the frontend after drawing
    pub needs_render: bool,

    /// Countdown ran out since the frontend last checked
    bell_pending: bool,
}

impl AppCore {
    pub fn new(config: Config) -> Self {
        let ui_state = UiState::new(config.ui.start_tab, config.ui.theme);
        let countdown = CountdownState::new(config.timer.default_duration_secs);

        Self {
            config,
            ui_state,
            clock: ClockState::new(),
            stopwatch: StopwatchState::new(),
            countdown,
            running: true,
            needs_render: true,
            bell_pending: false,
        }
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: Action) {
        tracing::debug!(?action, "Applying action");

        match action {
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::NextTab => self.select_tab(self.ui_state.active_tab.next()),
            Action::PrevTab => self.select_tab(self.ui_state.active_tab.prev()),
            Action::ToggleSettings => {
                self.ui_state.show_settings = !self.ui_state.show_settings;
            }
            Action::CloseSettings => {
                self.ui_state.show_settings = false;
            }
            Action::SelectTheme(color) => self.select_theme(color),
            Action::NextTheme => self.select_theme(self.ui_state.theme.next()),
            Action::PrevTheme => self.select_theme(self.ui_state.theme.prev()),
            Action::ToggleStopwatch => {
                self.stopwatch.toggle();
                tracing::info!(phase = ?self.stopwatch.phase(), "Stopwatch toggled");
            }
            Action::ResetStopwatch => {
                self.stopwatch.reset();
                tracing::info!("Stopwatch reset");
            }
            Action::ToggleCountdown => {
                self.countdown.toggle();
                tracing::info!(
                    phase = ?self.countdown.phase(),
                    remaining = self.countdown.remaining_secs(),
                    "Countdown toggled"
                );
            }
            Action::ResetCountdown => {
                self.countdown.reset();
                tracing::info!(
                    remaining = self.countdown.remaining_secs(),
                    "Countdown reset"
                );
            }
            Action::SelectPreset(secs) => {
                if self.countdown.set_preset(secs) {
                    tracing::info!(secs, "Countdown preset selected");
                } else {
                    tracing::debug!(secs, "Ignoring preset while countdown is running");
                }
            }
            Action::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
        }

        self.needs_render = true;
    }

    /// Apply one tick from a periodic source.
    pub fn tick(&mut self, source: TickSource) {
        tracing::trace!(?source, "Tick");

        match source {
            TickSource::Clock => {
                self.clock.tick();
                self.needs_render = true;
            }
            TickSource::Stopwatch => {
                if self.stopwatch.tick() {
                    self.needs_render = true;
                }
            }
            TickSource::Countdown => match self.countdown.tick() {
                TickOutcome::Ignored => {}
                TickOutcome::Counting => self.needs_render = true,
                TickOutcome::Finished => {
                    tracing::info!("Countdown finished");
                    self.bell_pending = self.config.ui.bell_on_finish;
                    self.needs_render = true;
                }
            },
        }
    }

    /// Whether a periodic source should currently be running.
    ///
    /// The clock always ticks; the stopwatch only while running; the countdown
    /// only while running with time left.
    pub fn wants_ticks(&self, source: TickSource) -> bool {
        match source {
            TickSource::Clock => self.running,
            TickSource::Stopwatch => self.running && self.stopwatch.is_running(),
            TickSource::Countdown => {
                self.running && self.countdown.is_running() && self.countdown.remaining_secs() > 0
            }
        }
    }

    /// Returns true once per countdown completion when the bell is enabled.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    fn select_tab(&mut self, tab: Tab) {
        if self.ui_state.active_tab != tab {
            tracing::debug!(from = ?self.ui_state.active_tab, to = ?tab, "Switching tab");
        }
        self.ui_state.active_tab = tab;
    }

    fn select_theme(&mut self, color: ThemeColor) {
        if self.ui_state.theme != color {
            tracing::info!("Switched to theme: {}", color);
        }
        self.ui_state.theme = color;
    }

    // Read-only view for frontends

    pub fn active_tab(&self) -> Tab {
        self.ui_state.active_tab
    }

    pub fn theme_color(&self) -> ThemeColor {
        self.ui_state.theme
    }

    pub fn theme(&self) -> AppTheme {
        AppTheme::from_accent(self.ui_state.theme)
    }

    pub fn show_settings(&self) -> bool {
        self.ui_state.show_settings
    }

    pub fn clock_time(&self) -> String {
        self.clock.time_string()
    }

    pub fn clock_date(&self) -> String {
        self.clock.date_string()
    }

    pub fn stopwatch_display(&self) -> String {
        self.stopwatch.display()
    }

    pub fn countdown_display(&self) -> String {
        self.countdown.display()
    }

    /// Remaining share of the countdown for the progress ring.
    pub fn countdown_fraction(&self) -> f64 {
        self.countdown.fraction()
    }

    pub fn presets(&self) -> &[u32] {
        &self.config.timer.presets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::TimerPhase;

    fn core_with_duration(secs: u32) -> AppCore {
        let mut config = Config::default();
        config.timer.default_duration_secs = secs;
        AppCore::new(config)
    }

    #[test]
    fn test_initial_state_follows_config() {
        let mut config = Config::default();
        config.ui.start_tab = Tab::Timer;
        config.ui.theme = ThemeColor::Gold;
        let core = AppCore::new(config);
        assert_eq!(core.active_tab(), Tab::Timer);
        assert_eq!(core.theme_color(), ThemeColor::Gold);
        assert_eq!(core.countdown.configured_secs(), 300);
        assert!(!core.show_settings());
        assert!(core.running);
    }

    #[test]
    fn test_tab_switch_does_not_touch_timers() {
        let mut core = core_with_duration(10);
        core.apply(Action::ToggleStopwatch);
        core.apply(Action::ToggleCountdown);
        core.tick(TickSource::Stopwatch);
        core.tick(TickSource::Countdown);

        core.apply(Action::SelectTab(Tab::Clock));
        for _ in 0..3 {
            core.tick(TickSource::Countdown);
        }
        core.apply(Action::NextTab);
        core.apply(Action::NextTab);

        assert_eq!(core.active_tab(), Tab::Timer);
        assert_eq!(core.countdown.remaining_secs(), 6);
        assert!(core.countdown.is_running());
        assert!(core.stopwatch.is_running());
        assert_eq!(core.stopwatch.elapsed_ms(), 10);
    }

    #[test]
    fn test_theme_change_does_not_touch_timers() {
        let mut core = core_with_duration(10);
        core.apply(Action::ToggleCountdown);
        core.tick(TickSource::Countdown);
        let countdown = core.countdown.clone();
        let stopwatch = core.stopwatch.clone();

        core.apply(Action::ToggleSettings);
        core.apply(Action::SelectTheme(ThemeColor::Purple));
        core.apply(Action::NextTheme);
        core.apply(Action::PrevTheme);
        core.apply(Action::PrevTheme);

        assert_eq!(core.theme_color(), ThemeColor::Gold);
        assert_eq!(core.countdown, countdown);
        assert_eq!(core.stopwatch, stopwatch);
    }

    #[test]
    fn test_countdown_finish_rings_bell_once() {
        let mut core = core_with_duration(2);
        core.apply(Action::ToggleCountdown);
        core.tick(TickSource::Countdown);
        assert!(!core.take_bell());
        core.tick(TickSource::Countdown);
        assert!(core.countdown.is_finished());
        assert!(core.take_bell());
        assert!(!core.take_bell());
        assert!(!core.wants_ticks(TickSource::Countdown));
    }

    #[test]
    fn test_bell_respects_config() {
        let mut config = Config::default();
        config.timer.default_duration_secs = 1;
        config.ui.bell_on_finish = false;
        let mut core = AppCore::new(config);
        core.apply(Action::ToggleCountdown);
        core.tick(TickSource::Countdown);
        assert!(core.countdown.is_finished());
        assert!(!core.take_bell());
    }

    #[test]
    fn test_reset_restores_baselines() {
        let mut core = core_with_duration(30);
        core.apply(Action::ToggleStopwatch);
        core.apply(Action::ToggleCountdown);
        for _ in 0..5 {
            core.tick(TickSource::Stopwatch);
            core.tick(TickSource::Countdown);
        }

        core.apply(Action::ResetStopwatch);
        core.apply(Action::ResetCountdown);
        assert_eq!(core.stopwatch.elapsed_ms(), 0);
        assert_eq!(core.stopwatch.phase(), TimerPhase::Idle);
        assert_eq!(core.countdown.remaining_secs(), 30);
        assert_eq!(core.countdown.phase(), TimerPhase::Idle);
        assert!(!core.wants_ticks(TickSource::Stopwatch));
        assert!(!core.wants_ticks(TickSource::Countdown));
    }

    #[test]
    fn test_preset_only_when_not_running() {
        let mut core = AppCore::new(Config::default());
        core.apply(Action::ToggleCountdown);
        core.apply(Action::SelectPreset(1500));
        assert_eq!(core.countdown.configured_secs(), 300);

        core.apply(Action::ToggleCountdown);
        core.apply(Action::SelectPreset(1500));
        assert_eq!(core.countdown.configured_secs(), 1500);
        assert_eq!(core.countdown_display(), "25:00");
        assert_eq!(core.countdown_fraction(), 1.0);
    }

    #[test]
    fn test_quit_stops_all_sources() {
        let mut core = AppCore::new(Config::default());
        core.apply(Action::ToggleStopwatch);
        assert!(core.wants_ticks(TickSource::Clock));
        assert!(core.wants_ticks(TickSource::Stopwatch));
        core.apply(Action::Quit);
        assert!(!core.running);
        for source in TickSource::ALL {
            assert!(!core.wants_ticks(source));
        }
    }
}
