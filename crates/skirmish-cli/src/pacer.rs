//! Best-effort frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed frame rate.
///
/// Sleeps away whatever is left of the frame budget. A frame that ran long is
/// not made up for later.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    /// Pacer for `fps` frames per second.
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            last: None,
        }
    }

    /// Blocks until at least one interval has passed since the previous call.
    pub fn wait(&mut self) {
        if let Some(last) = self.last {
            if let Some(rest) = remaining(self.interval, last.elapsed()) {
                thread::sleep(rest);
            }
        }
        self.last = Some(Instant::now());
    }

    /// Target time between frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Time left in the frame budget, or `None` when already behind.
fn remaining(interval: Duration, elapsed: Duration) -> Option<Duration> {
    interval.checked_sub(elapsed).filter(|rest| !rest.is_zero())
}
