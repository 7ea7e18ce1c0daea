//! Render sink for headless runs.

use skirmish_core::{FrameSnapshot, RenderError, RenderSink};
use tracing::{debug, trace};

/// Writes frames to the log instead of a window.
///
/// Every frame goes out at trace level; score changes at debug level.
#[derive(Debug, Default)]
pub struct LogSink {
    scores: Vec<u32>,
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
        trace!(tick = frame.tick, actors = ?frame.actors, "frame");

        let scores = frame.scores();
        if scores != self.scores {
            debug!(tick = frame.tick, ?scores, "score changed");
            self.scores = scores;
        }
        Ok(())
    }
}
