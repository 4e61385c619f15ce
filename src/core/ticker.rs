//! Repeating tick sources and their lifecycle.
//!
//! Every periodic counter is driven by a [`RepeatingTask`]: a spawned task that
//! sends a [`Tick`] into the main loop's channel once per period. The
//! [`TickScheduler`] owns one optional task per [`TickSource`] and, after every
//! state change, starts or cancels tasks so that exactly the sources the state
//! asks for are alive. Ticks are applied on the main loop only, so state is
//! never touched from more than one place.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::AppCore;
use crate::widgets::stopwatch::STOPWATCH_TICK_MS;

/// Which counter a tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSource {
    Clock,
    Stopwatch,
    Countdown,
}

impl TickSource {
    pub const ALL: [TickSource; 3] = [
        TickSource::Clock,
        TickSource::Stopwatch,
        TickSource::Countdown,
    ];

    pub fn period(self) -> Duration {
        match self {
            TickSource::Clock => Duration::from_millis(1000),
            TickSource::Stopwatch => Duration::from_millis(STOPWATCH_TICK_MS),
            TickSource::Countdown => Duration::from_millis(1000),
        }
    }

    fn slot(self) -> usize {
        match self {
            TickSource::Clock => 0,
            TickSource::Stopwatch => 1,
            TickSource::Countdown => 2,
        }
    }
}

/// One firing of a periodic source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub source: TickSource,
    /// Identifies the task that produced this tick
    pub generation: u64,
}

/// Handle to a running periodic task. Dropping the handle cancels the task.
#[derive(Debug)]
pub struct RepeatingTask {
    source: TickSource,
    generation: u64,
    handle: JoinHandle<()>,
}

impl RepeatingTask {
    /// Spawn a task that ticks every `period`, first firing one full period
    /// from now. Must be called from within a tokio runtime.
    pub fn spawn(
        source: TickSource,
        generation: u64,
        period: Duration,
        tx: UnboundedSender<Tick>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(Tick { source, generation }).is_err() {
                    // Receiver gone, main loop has exited
                    break;
                }
            }
        });

        Self {
            source,
            generation,
            handle,
        }
    }

    pub fn source(&self) -> TickSource {
        self.source
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop the task. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Keeps the set of live tick tasks in line with the widget state.
pub struct TickScheduler {
    tx: UnboundedSender<Tick>,
    tasks: [Option<RepeatingTask>; 3],
    next_generation: u64,
}

impl TickScheduler {
    pub fn new(tx: UnboundedSender<Tick>) -> Self {
        Self {
            tx,
            tasks: [None, None, None],
            next_generation: 1,
        }
    }

    /// Start every source the state wants and cancel every source it no
    /// longer wants. Sources whose condition did not change are left alone.
    pub fn sync(&mut self, core: &AppCore) {
        for source in TickSource::ALL {
            let wanted = core.wants_ticks(source);
            let slot = &mut self.tasks[source.slot()];
            match (wanted, slot.is_some()) {
                (true, false) => {
                    let generation = self.next_generation;
                    self.next_generation += 1;
                    tracing::debug!(?source, generation, "Starting tick source");
                    *slot = Some(RepeatingTask::spawn(
                        source,
                        generation,
                        source.period(),
                        self.tx.clone(),
                    ));
                }
                (false, true) => {
                    if let Some(task) = slot.take() {
                        tracing::debug!(
                            ?source,
                            generation = task.generation(),
                            "Cancelling tick source"
                        );
                        task.cancel();
                    }
                }
                _ => {}
            }
        }
    }

    /// Whether a received tick comes from a task that is still current.
    ///
    /// Ticks queued by a task that has since been cancelled are stale and must
    /// not be applied.
    pub fn accepts(&self, tick: &Tick) -> bool {
        self.tasks[tick.source.slot()]
            .as_ref()
            .is_some_and(|task| task.generation() == tick.generation)
    }

    pub fn is_active(&self, source: TickSource) -> bool {
        self.tasks[source.slot()].is_some()
    }

    /// Cancel every task (widget teardown).
    pub fn shutdown(&mut self) {
        for slot in self.tasks.iter_mut() {
            if let Some(task) = slot.take() {
                tracing::debug!(source = ?task.source(), "Shutting down tick source");
                task.cancel();
            }
        }
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
