//! Stopwatch state
//!
//! Elapsed time advances by a fixed step per tick instead of measuring the
//! wall clock, so the displayed value is always `ticks * STOPWATCH_TICK_MS`.

use super::TimerPhase;

/// Milliseconds added per stopwatch tick (and the tick period).
pub const STOPWATCH_TICK_MS: u64 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchState {
    elapsed_ms: u64,
    phase: TimerPhase,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Start if paused/idle, pause if running.
    pub fn toggle(&mut self) {
        self.phase = match self.phase {
            TimerPhase::Running => TimerPhase::Stopped,
            TimerPhase::Idle | TimerPhase::Stopped => TimerPhase::Running,
        };
    }

    /// Stop and zero the elapsed time.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.phase = TimerPhase::Idle;
    }

    /// Advance one tick. Returns false (and changes nothing) when not running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(STOPWATCH_TICK_MS);
        true
    }

    pub fn display(&self) -> String {
        format_stopwatch(self.elapsed_ms)
    }
}

/// Format elapsed milliseconds as `MM:SS.CC`.
///
/// Minutes wrap at 60, so an hour reads as `00:00.00` again.
pub fn format_stopwatch(ms: u64) -> String {
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1_000) % 60;
    let centis = (ms / 10) % 100;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}
