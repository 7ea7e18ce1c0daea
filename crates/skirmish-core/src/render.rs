//! Render surface: what the shell gets to see after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::actor::{Actor, Rgb};
use crate::arena::Arena;
use crate::error::RenderError;

/// Everything needed to draw one actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorFrame {
    /// Body centre.
    pub position: Vec2,
    /// Half the side of the square body.
    pub half_size: f32,
    /// Sprite colour.
    pub color: Rgb,
    /// Unit vector from the body towards the crosshair, zero if they coincide.
    pub aim: Vec2,
    /// Crosshair position.
    pub crosshair: Vec2,
    /// Projectile position while it is in flight.
    pub projectile: Option<Vec2>,
    /// Current score.
    pub score: u32,
}

impl From<&Actor> for ActorFrame {
    fn from(actor: &Actor) -> Self {
        let projectile = actor.projectile();
        Self {
            position: actor.position(),
            half_size: actor.half_size(),
            color: actor.color(),
            aim: actor.aim(),
            crosshair: actor.crosshair(),
            projectile: projectile.is_live().then(|| projectile.position()),
            score: actor.score(),
        }
    }
}

/// Immutable picture of the arena after a completed tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Number of ticks completed.
    pub tick: u64,
    /// Arena width.
    pub width: f32,
    /// Arena height.
    pub height: f32,
    /// One entry per actor, in index order.
    pub actors: Vec<ActorFrame>,
}

impl FrameSnapshot {
    /// Captures the current state of `arena`.
    #[must_use]
    pub fn capture(arena: &Arena) -> Self {
        Self {
            tick: arena.current_tick(),
            width: arena.width(),
            height: arena.height(),
            actors: arena.actors().iter().map(ActorFrame::from).collect(),
        }
    }

    /// Scores in actor order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.actors.iter().map(|a| a.score).collect()
    }
}

/// Consumer of frames, called once per completed tick.
pub trait RenderSink {
    /// Draws and presents a frame.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the frame could not be presented. The
    /// simulation stops on the first failure.
    fn present(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError>;
}

/// Sink that discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _frame: &FrameSnapshot) -> Result<(), RenderError> {
        Ok(())
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn present(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
        (**self).present(frame)
    }
}
