//! Events emitted while the arena resolves a tick.
//!
//! Events describe what happened; they never feed back into the simulation.
//! The shell can use them for sound cues, logging or statistics.

use serde::{Deserialize, Serialize};

use crate::arena::ActorId;
use crate::collision::ActorCollision;
use crate::geometry::{CollisionAxes, WallContact};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaEvent {
    /// An actor launched its projectile.
    ShotFired {
        /// Actor that fired.
        actor: ActorId,
    },
    /// A projectile left the arena and was parked.
    ProjectileExpired {
        /// Owner of the projectile.
        actor: ActorId,
    },
    /// A projectile struck the opponent.
    Hit {
        /// Owner of the projectile, who scores.
        shooter: ActorId,
        /// Actor that was struck.
        target: ActorId,
        /// Shooter's score after the hit.
        score: u32,
    },
    /// An actor bounced off one or more walls.
    WallBounce {
        /// Actor that bounced.
        actor: ActorId,
        /// Walls touched.
        walls: WallContact,
    },
    /// The two actors collided.
    ActorCollision {
        /// Axes along which velocities were exchanged.
        axes: CollisionAxes,
        /// True when the actors were pushed apart without exchanging velocity.
        separated: bool,
    },
}

impl From<ActorCollision> for ArenaEvent {
    fn from(collision: ActorCollision) -> Self {
        Self::ActorCollision {
            axes: collision.axes,
            separated: collision.separated,
        }
    }
}
