//! Arena module: the bounded playing field and the actors inside it.
//!
//! The Arena owns at most two [`Actor`]s by value. Order matters: an actor's
//! opponent is found by index ([`ActorId::opponent`]) rather than by a stored
//! reference, and actor/actor collisions always pair index 0 with index 1.
//!
//! # Per-actor pass
//!
//! [`Arena::advance_actor`] runs everything that concerns a single actor for
//! one tick:
//!
//! 1. `Actor::update` with the supplied actions
//! 2. crosshair clamped into the arena
//! 3. wall collision (position clamp, velocity inverted and damped)
//! 4. live projectile fully outside the arena is parked
//! 5. live projectile touching the opponent scores and is parked
//!
//! Once every actor has been advanced, [`Arena::resolve_actor_collision`]
//! handles contact between the two bodies.
//!
//! # Example
//!
//! ```
//! use skirmish_core::arena::Arena;
//! use skirmish_core::actor::Actor;
//! use skirmish_core::actions::Actions;
//! use skirmish_core::simulation::FIXED_DT;
//! use glam::Vec2;
//!
//! let mut arena = Arena::new(1600.0, 800.0);
//! let id = arena.add_actor(Actor::new(Vec2::new(100.0, 100.0), 25.0)).unwrap();
//!
//! let mut events = Vec::new();
//! arena.advance_actor(id, &Actions::IDLE, FIXED_DT, &mut events).unwrap();
//!
//! assert_eq!(arena.get(id).unwrap().position(), Vec2::new(100.0, 100.0));
//! assert!(events.is_empty());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::actions::Actions;
use crate::actor::Actor;
use crate::collision::{clamp_to_arena, constrain_to_walls, resolve_actor_collision, ActorCollision};
use crate::config::MatchConfig;
use crate::error::ArenaError;
use crate::event::ArenaEvent;
use crate::projectile::Projectile;

/// Maximum number of actors in one arena.
pub const MAX_ACTORS: usize = 2;

// =============================================================================
// ActorId
// =============================================================================

/// Index of an actor inside its arena.
///
/// # Example
///
/// ```
/// use skirmish_core::arena::ActorId;
///
/// let first = ActorId::new(0);
/// assert_eq!(first.opponent(), ActorId::new(1));
/// assert_eq!(first.opponent().opponent(), first);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(usize);

impl ActorId {
    /// Creates an id from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The other actor in a two-actor arena.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0 % MAX_ACTORS)
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Arena
// =============================================================================

/// The playing field: its size, its actors and the tick counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
    actors: Vec<Actor>,
    tick: u64,
}

impl Arena {
    /// Creates an empty arena of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            actors: Vec::with_capacity(MAX_ACTORS),
            tick: 0,
        }
    }

    /// Creates an arena with both actors placed as the configuration says.
    ///
    /// The configuration is assumed to be valid; see [`MatchConfig::validate`].
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        let mut arena = Self::new(config.width(), config.height());
        arena.actors = config
            .spawns
            .iter()
            .zip(config.colors)
            .map(|(&spawn, color)| {
                Actor::new(spawn, config.actor_size / 2.0)
                    .with_color(color)
                    .with_projectile(Projectile::with_half_size(config.projectile_size / 2.0))
            })
            .collect();
        arena
    }

    /// Adds an actor and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::TooManyActors`] if the arena is full.
    pub fn add_actor(&mut self, actor: Actor) -> Result<ActorId, ArenaError> {
        if self.actors.len() >= MAX_ACTORS {
            return Err(ArenaError::TooManyActors { max: MAX_ACTORS });
        }
        let id = ActorId::new(self.actors.len());
        self.actors.push(actor);
        Ok(id)
    }

    /// Returns the actor with the given id.
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.index())
    }

    /// Returns the actor with the given id mutably.
    #[must_use]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.index())
    }

    /// The opponent of `id`, if there is one.
    #[must_use]
    pub fn opponent_of(&self, id: ActorId) -> Option<&Actor> {
        if id.index() >= self.actors.len() {
            return None;
        }
        self.get(id.opponent())
    }

    /// All actors in index order.
    #[must_use]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Ids of all actors in index order.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        (0..self.actors.len()).map(ActorId::new)
    }

    /// Number of actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Arena width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Arena height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Returns the current simulation tick.
    #[must_use]
    pub const fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advances the simulation tick counter.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }

    /// Runs one tick for a single actor and applies every per-actor constraint.
    ///
    /// Events are appended to `events` in the order they happen.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::UnknownActor`] if `id` is not in the arena.
    pub fn advance_actor(
        &mut self,
        id: ActorId,
        actions: &Actions,
        dt: f32,
        events: &mut Vec<ArenaEvent>,
    ) -> Result<(), ArenaError> {
        let (width, height) = (self.width, self.height);
        let actor = self
            .actors
            .get_mut(id.index())
            .ok_or(ArenaError::UnknownActor(id))?;

        if actor.update(actions, dt) {
            debug!(actor = %id, crosshair = ?actor.crosshair, "shot fired");
            events.push(ArenaEvent::ShotFired { actor: id });
        }

        actor.crosshair = clamp_to_arena(actor.crosshair, width, height);

        let walls = constrain_to_walls(actor, width, height);
        if !walls.is_empty() {
            events.push(ArenaEvent::WallBounce { actor: id, walls });
        }

        let projectile = actor.projectile_mut();
        if projectile.is_live() && projectile.bounds().is_outside(width, height) {
            projectile.reset();
            events.push(ArenaEvent::ProjectileExpired { actor: id });
        }

        if let Some(event) = self.check_hit(id) {
            events.push(event);
        }
        Ok(())
    }

    /// Scores a hit if `shooter`'s live projectile touches the opponent.
    fn check_hit(&mut self, shooter: ActorId) -> Option<ArenaEvent> {
        let target = shooter.opponent();
        let target_bounds = self.opponent_of(shooter)?.bounds();

        let actor = self.actors.get_mut(shooter.index())?;
        let projectile = actor.projectile();
        if !projectile.is_live() || !projectile.bounds().intersects(&target_bounds) {
            return None;
        }

        actor.projectile_mut().reset();
        actor.add_point();
        let score = actor.score();
        info!(shooter = %shooter, target = %target, score, "hit");
        Some(ArenaEvent::Hit {
            shooter,
            target,
            score,
        })
    }

    /// Resolves contact between the two actors, if their bodies intersect.
    ///
    /// Does nothing unless the arena holds exactly two actors.
    pub fn resolve_actor_collision(&mut self) -> Option<ActorCollision> {
        let [first, second] = self.actors.as_mut_slice() else {
            return None;
        };
        let collision = resolve_actor_collision(first, second)?;
        debug!(axes = ?collision.axes, separated = collision.separated, "actors collided");
        Some(collision)
    }
}

// =============================================================================
// Tests
// =============================================================================
