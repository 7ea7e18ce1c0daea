//! Test helpers: scripted controllers, recording sinks and arena setup.

use std::collections::VecDeque;

use glam::Vec2;

use crate::actions::Actions;
use crate::actor::Actor;
use crate::arena::Arena;
use crate::error::RenderError;
use crate::input::{Idle, InputContext, InputSource};
use crate::render::{FrameSnapshot, RenderSink};
use crate::simulation::Simulation;

// =============================================================================
// Input sources
// =============================================================================

/// Plays back a fixed list of actions, one per tick, then idles.
pub struct Scripted {
    script: VecDeque<Actions>,
}

impl Scripted {
    /// Creates a script from actions in tick order.
    pub fn new(script: impl IntoIterator<Item = Actions>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// One tick of `actions`, idle afterwards.
    pub fn once(actions: Actions) -> Self {
        Self::new([actions])
    }
}

impl InputSource for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn decide(&mut self, _ctx: &InputContext<'_>, _arena: &Arena) -> Actions {
        self.script.pop_front().unwrap_or(Actions::IDLE)
    }
}

/// Actions that snap the crosshair to `target` and shoot.
pub fn shoot_at(target: Vec2) -> Actions {
    Actions {
        shoot: true,
        ch_mouse: true,
        pointer: target,
        ..Actions::IDLE
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Keeps every frame it is given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Frames in presentation order.
    pub frames: Vec<FrameSnapshot>,
}

impl RenderSink for RecordingSink {
    fn present(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

// =============================================================================
// Setup
// =============================================================================

/// A 1600x800 arena holding two default-sized actors at rest.
pub fn two_actor_arena(a: Vec2, b: Vec2) -> Arena {
    let mut arena = Arena::new(1600.0, 800.0);
    arena.add_actor(Actor::new(a, 25.0)).unwrap();
    arena.add_actor(Actor::new(b, 25.0)).unwrap();
    arena
}

/// Simulation over `arena` with the given sources and a target of 10.
pub fn simulation(arena: Arena, sources: Vec<Box<dyn InputSource>>) -> Simulation {
    Simulation::new(arena, sources, 10).unwrap()
}

/// Simulation over `arena` where both actors idle.
pub fn idle_simulation(arena: Arena) -> Simulation {
    simulation(arena, vec![Box::new(Idle), Box::new(Idle)])
}

/// Returns true if `a` and `b` agree to within `eps` on both axes.
pub fn approx_eq(a: Vec2, b: Vec2, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}
