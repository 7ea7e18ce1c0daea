//! # Skirmish Core
//!
//! Physics and collision core for a two-player top-down move-and-shoot arena.
//!
//! Each actor moves under a simple thrust/drag model, aims a crosshair and
//! fires a single reusable projectile. Actors bounce off the arena walls with
//! energy loss and off each other elastically, with the contact moment found
//! by time-of-impact backtracking. First to the target score wins.
//!
//! ## Layout
//!
//! - [`projectile`]: the reusable bullet
//! - [`actor`]: motion integration, crosshair and firing
//! - [`collision`]: wall constraints and actor/actor resolution
//! - [`arena`]: the playing field and the per-actor pass
//! - [`input`]: where each tick's [`Actions`] come from
//! - [`simulation`]: the fixed-timestep loop
//! - [`render`]: frame snapshots for the shell
//!
//! Window handling, asset loading and event plumbing stay outside this crate.
//! The shell passes keyboard and pointer state in as a [`DeviceState`] and
//! receives a [`FrameSnapshot`] after every tick.
//!
//! ## Usage
//!
//! ```
//! use skirmish_core::{ControllerKind, DeviceState, MatchConfig, NullSink, Simulation};
//!
//! let config = MatchConfig { target_score: 1, ..MatchConfig::default() };
//! let mut sim = Simulation::from_controllers(
//!     &config,
//!     [ControllerKind::Heuristic, ControllerKind::Heuristic],
//! )?;
//!
//! let devices = DeviceState::default();
//! let summary = sim.run_until_finished(&mut NullSink, &devices, Some(600), |_| {})?;
//! assert!(summary.ticks <= 600);
//! # Ok::<(), skirmish_core::SimulationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actions;
pub mod actor;
pub mod arena;
pub mod collision;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod projectile;
pub mod render;
pub mod simulation;

pub use actions::Actions;
pub use actor::Actor;
pub use arena::{ActorId, Arena};
pub use config::MatchConfig;
pub use error::{ArenaError, ConfigError, FireError, RenderError, SimulationError};
pub use event::ArenaEvent;
pub use input::{
    ControllerKind, DeviceState, HeuristicInput, HumanInput, Idle, InputContext, InputSource,
    KeyBinding, Keys, RandomInput,
};
pub use projectile::Projectile;
pub use render::{FrameSnapshot, NullSink, RenderSink};
pub use simulation::{MatchSummary, Simulation, TickReport, FIXED_DT};

#[cfg(test)]
mod tests;
