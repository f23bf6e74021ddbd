//! Scoped timer handles for the UI event loop
//!
//! Timer tasks run on the tokio runtime and only ever report back through an
//! mpsc channel. The UI loop drains that channel every frame, so application
//! state keeps a single writer.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Events produced by scheduled timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The loading screen interval has elapsed
    LoadingElapsed,
    /// One period of the status message cycle
    MessageTick,
    /// The simulated submission has finished
    ProcessingElapsed,
}

/// Handle to a scheduled timer task.
///
/// The task is aborted when the handle is cancelled or dropped, so a timer
/// never outlives the state that owns it.
#[derive(Debug, Default)]
pub struct TimerHandle {
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Wrap a spawned timer task
    pub fn from_task(task: JoinHandle<()>) -> Self {
        Self { task: Some(task) }
    }

    /// A handle with no task behind it (used by test schedulers)
    #[cfg(test)]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Abort the timer task. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether the timer task is still pending
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Source of timers for the view-state controller, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler: Send + Sync {
    /// Deliver `event` once after `delay`
    fn once(&self, delay: Duration, event: TimerEvent) -> TimerHandle;

    /// Deliver `event` every `period`, first after one full period
    fn every(&self, period: Duration, event: TimerEvent) -> TimerHandle;
}

/// Scheduler backed by tokio tasks
pub struct TokioScheduler {
    tx: UnboundedSender<TimerEvent>,
}

impl TokioScheduler {
    pub fn new(tx: UnboundedSender<TimerEvent>) -> Self {
        Self { tx }
    }
}

impl Scheduler for TokioScheduler {
    fn once(&self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let tx = self.tx.clone();
        TimerHandle::from_task(tokio::spawn(async move {
            time::sleep(delay).await;
            if tx.send(event).is_err() {
                tracing::trace!("Timer {event:?} fired after the UI loop closed");
            }
        }))
    }

    fn every(&self, period: Duration, event: TimerEvent) -> TimerHandle {
        let tx = self.tx.clone();
        TimerHandle::from_task(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(event).is_err() {
                    break;
                }
            }
        }))
    }
}
