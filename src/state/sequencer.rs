//! Simulated submission processing
//!
//! Message progression and completion run on two independent timers: the
//! interval only moves the status text forward, and the completion timer
//! alone decides when processing ends.

use crate::timer::{Scheduler, TimerEvent, TimerHandle};
use std::time::Duration;
use tokio::time::Instant;

/// Status lines shown while processing, in display order
pub const STATUS_MESSAGES: [&str; 3] = [
    "Analyzing Identity...",
    "Verifying GitHub Link...",
    "Syncing with Enigma Database...",
];

/// Time between status lines
pub const MESSAGE_INTERVAL: Duration = Duration::from_millis(800);

/// Total processing time before success
pub const PROCESSING_DURATION: Duration = Duration::from_millis(2500);

/// Running submission sequence. Dropping it cancels both timers.
#[derive(Debug)]
pub struct Sequencer {
    message_index: usize,
    started_at: Instant,
    interval: TimerHandle,
    completion: TimerHandle,
}

impl Sequencer {
    /// Start the sequence. The first status line is current immediately; the
    /// scheduler delivers [`TimerEvent::MessageTick`] per interval and
    /// [`TimerEvent::ProcessingElapsed`] once at completion.
    pub fn run(scheduler: &dyn Scheduler) -> Self {
        Self {
            message_index: 0,
            started_at: Instant::now(),
            interval: scheduler.every(MESSAGE_INTERVAL, TimerEvent::MessageTick),
            completion: scheduler.once(PROCESSING_DURATION, TimerEvent::ProcessingElapsed),
        }
    }

    /// Current status line
    pub fn message(&self) -> &'static str {
        STATUS_MESSAGES[self.message_index]
    }

    /// Handle one interval tick. Returns the new line if it changed.
    pub fn advance(&mut self) -> Option<&'static str> {
        if self.message_index + 1 < STATUS_MESSAGES.len() {
            self.message_index += 1;
            Some(self.message())
        } else {
            None
        }
    }

    /// Fraction of the processing time elapsed, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        let elapsed = self.started_at.elapsed().as_secs_f64();
        (elapsed / PROCESSING_DURATION.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Stop both timers
    pub fn cancel(&mut self) {
        self.interval.cancel();
        self.completion.cancel();
    }
}
