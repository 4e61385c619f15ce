//! Widget state structs (rendering-agnostic)
//!
//! This module contains state-only structures for the three timers and the
//! countdown's progress ring. These structs hold data and provide methods for
//! state manipulation and formatting, but contain no rendering logic.

pub mod clock;
pub mod countdown;
pub mod progress_ring;
pub mod stopwatch;

pub use clock::ClockState;
pub use countdown::{format_timer, CountdownState, TickOutcome};
pub use progress_ring::RingGeometry;
pub use stopwatch::{format_stopwatch, StopwatchState};

/// Lifecycle shared by the stopwatch and the countdown.
///
/// `Idle` means the counter sits at its baseline (zero elapsed, or the full
/// configured duration). `Stopped` means it was paused or ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
    Stopped,
}
