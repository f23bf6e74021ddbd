//! Loading screen animation state

use std::time::{Duration, Instant};

/// Cycling captions of the loader, independent of the processing messages
pub const LOADER_MESSAGES: [&str; 4] = [
    "INITIALIZING HANDSHAKE...",
    "BYPASSING FIREWALL...",
    "ACCESSING SECURE SERVER...",
    "GRANTING ACCESS",
];

/// Loading screen animation state
#[derive(Debug)]
pub struct LoaderState {
    /// When the loader appeared
    pub start_time: Instant,
    /// Current speed multiplier (1x to 5x)
    pub speed: f32,
    /// Distance travelled by the speeder, in speed-weighted seconds
    pub distance: f32,
    /// Index into [`LOADER_MESSAGES`]
    pub text_index: usize,
}

impl LoaderState {
    /// Time for the speed to ramp from 1x to 5x
    const RAMP_DURATION: Duration = Duration::from_millis(3500);
    /// Time between caption changes
    const TEXT_INTERVAL: Duration = Duration::from_millis(800);
    /// Speed gained across the full ramp
    const MAX_BOOST: f32 = 4.0;

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            speed: 1.0,
            distance: 0.0,
            text_index: 0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        self.update_at(self.start_time.elapsed());
    }

    /// Update animation state for a given elapsed time
    pub fn update_at(&mut self, elapsed: Duration) {
        let t = elapsed.as_secs_f32();
        let ramp = Self::RAMP_DURATION.as_secs_f32();
        let progress = (t / ramp).min(1.0);

        // Accelerate slowly then fast
        self.speed = 1.0 + simple_easing::quad_in(progress) * Self::MAX_BOOST;

        // Integral of 1 + 4(t/T)^2 while ramping, then constant top speed
        self.distance = if t < ramp {
            t + Self::MAX_BOOST * t.powi(3) / (3.0 * ramp * ramp)
        } else {
            ramp + Self::MAX_BOOST * ramp / 3.0 + (t - ramp) * (1.0 + Self::MAX_BOOST)
        };

        let ticks = (elapsed.as_millis() / Self::TEXT_INTERVAL.as_millis()) as usize;
        self.text_index = ticks % LOADER_MESSAGES.len();
    }

    /// Caption currently shown
    pub fn message(&self) -> &'static str {
        LOADER_MESSAGES[self.text_index]
    }
}

impl Default for LoaderState {
    fn default() -> Self {
        Self::new()
    }
}
