use super::TimerPhase;

/// Default countdown length (5 minutes).
pub const DEFAULT_DURATION_SECS: u32 = 300;

/// Result of feeding one tick to a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Ignored,
    /// Decremented and still running
    Counting,
    /// Reached zero on this tick and stopped itself
    Finished,
}

/// Countdown timer state (rendering-agnostic)
///
/// Holds the configured duration and the remaining whole seconds.
/// Remaining never drops below zero; the countdown stops itself on reaching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    /// Length restored on reset, always > 0
    configured_secs: u32,

    /// Seconds left, 0..=configured_secs
    remaining_secs: u32,

    phase: TimerPhase,

    /// Set when the countdown ran out; cleared by start, reset, or preset
    finished: bool,
}

impl CountdownState {
    /// Create an idle countdown. A zero duration is bumped to one second.
    pub fn new(duration_secs: u32) -> Self {
        let duration_secs = duration_secs.max(1);
        Self {
            configured_secs: duration_secs,
            remaining_secs: duration_secs,
            phase: TimerPhase::Idle,
            finished: false,
        }
    }

    pub fn configured_secs(&self) -> u32 {
        self.configured_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start or pause.
    ///
    /// Starting with nothing left stops again immediately, so a spent
    /// countdown has to be reset (or given a preset) before it can run.
    pub fn toggle(&mut self) {
        match self.phase {
            TimerPhase::Running => self.phase = TimerPhase::Stopped,
            TimerPhase::Idle | TimerPhase::Stopped => {
                if self.remaining_secs == 0 {
                    self.phase = TimerPhase::Stopped;
                } else {
                    self.phase = TimerPhase::Running;
                    self.finished = false;
                }
            }
        }
    }

    /// Stop and restore the last configured duration.
    pub fn reset(&mut self) {
        self.remaining_secs = self.configured_secs;
        self.phase = TimerPhase::Idle;
        self.finished = false;
    }

    /// Replace the configured duration. Ignored while running.
    ///
    /// Returns whether the preset was applied.
    pub fn set_preset(&mut self, duration_secs: u32) -> bool {
        if self.is_running() || duration_secs == 0 {
            return false;
        }
        self.configured_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.phase = TimerPhase::Idle;
        self.finished = false;
        true
    }

    /// Advance one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.phase = TimerPhase::Stopped;
            self.finished = true;
            TickOutcome::Finished
        } else {
            TickOutcome::Counting
        }
    }

    /// Remaining share of the configured duration, 1.0 = full, 0.0 = empty.
    pub fn fraction(&self) -> f64 {
        if self.configured_secs == 0 {
            return 0.0;
        }
        (self.remaining_secs as f64 / self.configured_secs as f64).clamp(0.0, 1.0)
    }

    pub fn display(&self) -> String {
        format_timer(self.remaining_secs)
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

/// Format whole seconds as `MM:SS`. Minutes are not wrapped.
pub fn format_timer(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
