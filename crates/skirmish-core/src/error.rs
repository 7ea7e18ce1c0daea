//! Error types for the skirmish core.
//!
//! The simulation arithmetic itself never fails. Errors here describe
//! collaborator contract violations (too many actors, a missing input source,
//! an invalid configuration) and failures reported by a render sink.

use thiserror::Error;

use crate::arena::ActorId;

/// Errors raised by [`Arena`](crate::arena::Arena) bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The arena already holds the maximum number of actors.
    #[error("arena is full: at most {max} actors per match")]
    TooManyActors {
        /// Maximum number of actors an arena accepts.
        max: usize,
    },
    /// No actor exists at the given index.
    #[error("no actor with id {0}")]
    UnknownActor(ActorId),
}

/// Reasons a projectile refused to fire.
///
/// Neither case is fatal: the owning actor simply does not shoot this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FireError {
    /// The projectile is still in flight.
    #[error("projectile is already live")]
    AlreadyLive,
    /// Target and origin coincide, so there is no direction to fire in.
    #[error("target coincides with origin; firing direction is undefined")]
    DegenerateDirection,
}

/// Invalid values in a [`MatchConfig`](crate::config::MatchConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Arena width or height is zero.
    #[error("arena must have a positive size, got {width}x{height}")]
    NonPositiveArena {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// A sprite size is zero, negative or not finite.
    #[error("{what} size must be positive and finite, got {value}")]
    NonPositiveSize {
        /// Which sprite the size belongs to.
        what: &'static str,
        /// The offending value.
        value: f32,
    },
    /// A sprite that cannot fit inside the arena.
    #[error("{what} size {size} must be smaller than the arena's shorter side ({limit})")]
    SpriteLargerThanArena {
        /// Which sprite the size belongs to.
        what: &'static str,
        /// The offending size.
        size: f32,
        /// The arena's shorter side.
        limit: f32,
    },
    /// A flip probability outside `[0, 1]`.
    #[error("flip probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
    /// A match that can never be won.
    #[error("target score must be at least 1")]
    ZeroTargetScore,
}

/// A controller name that does not match any [`ControllerKind`](crate::input::ControllerKind).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown controller {0:?}; expected one of: idle, random, heuristic")]
pub struct ParseControllerError(pub String);

/// Failure reported by a [`RenderSink`](crate::render::RenderSink).
#[derive(Debug, Error)]
#[error("render sink failed: {message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    /// Creates a render error with a human readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors raised while building or driving a [`Simulation`](crate::simulation::Simulation).
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Every actor needs exactly one input source.
    #[error("{actors} actors but {sources} input sources")]
    InputSourceCount {
        /// Number of actors in the arena.
        actors: usize,
        /// Number of input sources supplied.
        sources: usize,
    },
    /// Arena bookkeeping failed.
    #[error(transparent)]
    Arena(#[from] ArenaError),
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The render sink failed to present a frame.
    #[error(transparent)]
    Render(#[from] RenderError),
}
