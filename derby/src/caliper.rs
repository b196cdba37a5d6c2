//! Stage timing
//!
//! A [`Caliper`] brackets the processing stages. It has no effect on the
//! image; it only reports how long the stages took.

use std::time::{Duration, Instant};
use tracing::info;

/// Wall-clock timer for a labelled span of work.
#[derive(Debug)]
pub struct Caliper {
    label: &'static str,
    started: Instant,
}

impl Caliper {
    /// Start timing.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
        }
    }

    /// Time elapsed since [`Caliper::start`].
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop timing and log the elapsed time.
    pub fn end(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            label = self.label,
            elapsed_us = elapsed.as_micros() as u64,
            "caliper"
        );
        elapsed
    }
}
