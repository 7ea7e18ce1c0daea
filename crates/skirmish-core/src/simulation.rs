//! Simulation module: the fixed-timestep match loop.
//!
//! A [`Simulation`] owns the [`Arena`] and one [`InputSource`] per actor.
//! Each call to [`Simulation::step`] runs one tick:
//!
//! 1. For each actor in index order: ask its input source for actions, then
//!    [`Arena::advance_actor`]. The second actor's source already sees the
//!    first actor's post-update state.
//! 2. Resolve the actor/actor collision.
//! 3. Advance the tick counter.
//!
//! The match is over once any actor's score reaches the target.
//!
//! # Example
//!
//! ```
//! use skirmish_core::config::MatchConfig;
//! use skirmish_core::input::{ControllerKind, DeviceState};
//! use skirmish_core::simulation::Simulation;
//!
//! let config = MatchConfig::default();
//! let mut sim = Simulation::from_controllers(
//!     &config,
//!     [ControllerKind::Random, ControllerKind::Heuristic],
//! )
//! .unwrap();
//!
//! let devices = DeviceState::default();
//! for _ in 0..10 {
//!     sim.step(&devices).unwrap();
//! }
//!
//! assert_eq!(sim.tick(), 10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::actor::Actor;
use crate::arena::{ActorId, Arena};
use crate::config::MatchConfig;
use crate::error::SimulationError;
use crate::event::ArenaEvent;
use crate::input::{ControllerKind, DeviceState, InputContext, InputSource};
use crate::render::{FrameSnapshot, RenderSink};

/// Length of one tick in seconds.
pub const FIXED_DT: f32 = 1.0 / 60.0;

// =============================================================================
// Reports
// =============================================================================

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// The tick that was simulated.
    pub tick: u64,
    /// Events in the order they happened.
    pub events: Vec<ArenaEvent>,
}

/// Final state of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Ticks simulated.
    pub ticks: u64,
    /// Scores in actor order.
    pub scores: Vec<u32>,
    /// The actor that reached the target score, if any did.
    pub winner: Option<ActorId>,
}

// =============================================================================
// Simulation
// =============================================================================

/// Drives a match tick by tick.
pub struct Simulation {
    arena: Arena,
    sources: Vec<Box<dyn InputSource>>,
    target_score: u32,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("Simulation")
            .field("arena", &self.arena)
            .field("sources", &names)
            .field("target_score", &self.target_score)
            .finish()
    }
}

impl Simulation {
    /// Creates a simulation over an existing arena.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InputSourceCount`] unless there is exactly
    /// one input source per actor.
    pub fn new(
        arena: Arena,
        sources: Vec<Box<dyn InputSource>>,
        target_score: u32,
    ) -> Result<Self, SimulationError> {
        if sources.len() != arena.actor_count() {
            return Err(SimulationError::InputSourceCount {
                actors: arena.actor_count(),
                sources: sources.len(),
            });
        }
        Ok(Self {
            arena,
            sources,
            target_score,
        })
    }

    /// Creates a simulation from a configuration and explicit input sources.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if the configuration is invalid,
    /// or [`SimulationError::InputSourceCount`] for the wrong number of sources.
    pub fn from_config(
        config: &MatchConfig,
        sources: Vec<Box<dyn InputSource>>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        Self::new(Arena::from_config(config), sources, config.target_score)
    }

    /// Creates a simulation whose actors are driven by built-in controllers.
    ///
    /// Each controller is seeded with `config.seed` plus its actor index.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if the configuration is invalid.
    pub fn from_controllers(
        config: &MatchConfig,
        controllers: [ControllerKind; 2],
    ) -> Result<Self, SimulationError> {
        let sources = controllers
            .into_iter()
            .zip(0u64..)
            .map(|(kind, index)| {
                kind.build(config.flip_probability, config.seed.wrapping_add(index))
            })
            .collect();
        Self::from_config(config, sources)
    }

    /// Runs one tick and reports what happened.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InputSourceCount`] if the actors and input
    /// sources are no longer paired one to one. The arena is left untouched.
    pub fn step(&mut self, devices: &DeviceState) -> Result<TickReport, SimulationError> {
        if self.sources.len() != self.arena.actor_count() {
            return Err(SimulationError::InputSourceCount {
                actors: self.arena.actor_count(),
                sources: self.sources.len(),
            });
        }

        let tick = self.arena.current_tick();
        let mut events = Vec::new();

        for (index, source) in self.sources.iter_mut().enumerate() {
            let id = ActorId::new(index);
            let ctx = InputContext {
                actor: id,
                tick,
                devices,
            };
            let actions = source.decide(&ctx, &self.arena);
            self.arena.advance_actor(id, &actions, FIXED_DT, &mut events)?;
        }

        if let Some(collision) = self.arena.resolve_actor_collision() {
            events.push(collision.into());
        }

        self.arena.advance_tick();
        trace!(tick, events = events.len(), "tick complete");
        Ok(TickReport { tick, events })
    }

    /// The actor that reached the target score, if any.
    ///
    /// When both reached it on the same tick the lower index wins.
    #[must_use]
    pub fn winner(&self) -> Option<ActorId> {
        self.arena
            .actor_ids()
            .zip(self.arena.actors())
            .find(|(_, actor)| actor.score() >= self.target_score)
            .map(|(id, _)| id)
    }

    /// Returns true once any actor has reached the target score.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Captures the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.arena)
    }

    /// Current scores and winner.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            ticks: self.arena.current_tick(),
            scores: self.arena.actors().iter().map(|a| a.score()).collect(),
            winner: self.winner(),
        }
    }

    /// Steps until the match is finished or `max_ticks` ticks have run.
    ///
    /// After every tick the new frame goes to `sink`, then `pace` is called
    /// with the tick just simulated so the shell can throttle.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Render`] on the first frame the sink fails
    /// to present, or any error from [`Simulation::step`].
    pub fn run_until_finished<S, P>(
        &mut self,
        sink: &mut S,
        devices: &DeviceState,
        max_ticks: Option<u64>,
        mut pace: P,
    ) -> Result<MatchSummary, SimulationError>
    where
        S: RenderSink + ?Sized,
        P: FnMut(u64),
    {
        while !self.is_finished() && max_ticks.map_or(true, |max| self.tick() < max) {
            let report = self.step(devices)?;
            sink.present(&self.snapshot())?;
            pace(report.tick);
        }

        let summary = self.summary();
        match summary.winner {
            Some(winner) => info!(
                %winner,
                scores = ?summary.scores,
                ticks = summary.ticks,
                "match finished"
            ),
            None => info!(
                scores = ?summary.scores,
                ticks = summary.ticks,
                "match stopped at tick limit"
            ),
        }
        Ok(summary)
    }

    /// Number of ticks simulated.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.arena.current_tick()
    }

    /// Score that ends the match.
    #[must_use]
    pub const fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Returns a reference to the arena.
    #[must_use]
    pub const fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Returns the actor with the given id mutably.
    ///
    /// The arena itself is never handed out mutably, so actors cannot be
    /// added behind the input sources' back.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.arena.get_mut(id)
    }
}

// =============================================================================
// Tests
// =============================================================================
