//! Collision resolution: arena walls and actor-vs-actor contact.
//!
//! # Actor collisions
//!
//! Two actors whose boxes intersect are rolled back to the estimated moment
//! of first contact and then exchange velocity along the contact axis. The
//! estimate assumes both velocities were constant since the previous tick,
//! equal masses and a perfectly elastic impact:
//!
//! - penetration per axis: `delta = (h1 + h2) - |p1 - p2|`
//! - closing speed per axis: `v = |v1 - v2|`
//! - time since the boundary was crossed: `dt = delta / v` (infinite if `v == 0`)
//!
//! The axis with the smaller `dt` penetrated last, so it is the side that
//! just made contact. Equal times mean a corner hit and both axes exchange.
//! Acceleration during the backtrack window is ignored; at 60 Hz the error is
//! negligible.
//!
//! When both times are infinite the boxes overlap with no relative motion.
//! There is nothing to roll back and nothing to exchange, so the bodies are
//! pushed apart along the axis of least penetration until they just touch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::geometry::{CollisionAxes, WallContact};

/// Fraction of the perpendicular speed kept after bouncing off a wall.
pub const WALL_RESTITUTION: f32 = 0.8;

// =============================================================================
// Walls
// =============================================================================

/// Keeps an actor's box inside `[0,width] x [0,height]`.
///
/// Each axis is handled independently: a box that crosses a wall is moved
/// back flush against it and the velocity component perpendicular to that
/// wall is inverted and damped by [`WALL_RESTITUTION`]. Returns the walls that
/// were hit, which is empty when the actor was already inside.
pub fn constrain_to_walls(actor: &mut Actor, width: f32, height: f32) -> WallContact {
    let bounds = actor.bounds();
    let half = actor.half_size();
    let mut contact = WallContact::empty();

    if bounds.left() < 0.0 {
        actor.position.x = half;
        actor.velocity.x = -actor.velocity.x * WALL_RESTITUTION;
        contact |= WallContact::LEFT;
    } else if bounds.right() > width {
        actor.position.x = width - half;
        actor.velocity.x = -actor.velocity.x * WALL_RESTITUTION;
        contact |= WallContact::RIGHT;
    }

    if bounds.top() < 0.0 {
        actor.position.y = half;
        actor.velocity.y = -actor.velocity.y * WALL_RESTITUTION;
        contact |= WallContact::TOP;
    } else if bounds.bottom() > height {
        actor.position.y = height - half;
        actor.velocity.y = -actor.velocity.y * WALL_RESTITUTION;
        contact |= WallContact::BOTTOM;
    }

    contact
}

/// Clamps a point into `[0,width] x [0,height]`.
#[must_use]
pub fn clamp_to_arena(point: Vec2, width: f32, height: f32) -> Vec2 {
    point.clamp(Vec2::ZERO, Vec2::new(width, height))
}

// =============================================================================
// Actor vs actor
// =============================================================================

/// Time-of-impact estimate for two intersecting actors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Axes that made contact. Empty when there is no relative motion.
    pub axes: CollisionAxes,
    /// How far back in time contact happened. Infinite when `axes` is empty.
    pub time_back: f32,
    /// Penetration depth per axis.
    pub penetration: Vec2,
}

/// Outcome of resolving an actor/actor collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorCollision {
    /// Axes along which velocities were exchanged.
    pub axes: CollisionAxes,
    /// True when the bodies had no relative motion and were pushed apart instead.
    pub separated: bool,
}

/// Estimates when and along which axis two actors made contact.
///
/// Returns `None` if their boxes do not intersect.
#[must_use]
pub fn time_of_impact(a: &Actor, b: &Actor) -> Option<Impact> {
    if !a.bounds().intersects(&b.bounds()) {
        return None;
    }

    let contact = a.half_size() + b.half_size();
    let penetration = Vec2::splat(contact) - (a.position - b.position).abs();
    let closing = (a.velocity - b.velocity).abs();

    let dtx = elapsed(penetration.x, closing.x);
    let dty = elapsed(penetration.y, closing.y);

    let axes = if dtx.is_infinite() && dty.is_infinite() {
        CollisionAxes::empty()
    } else if dtx < dty {
        CollisionAxes::X
    } else if dty < dtx {
        CollisionAxes::Y
    } else {
        CollisionAxes::X | CollisionAxes::Y
    };

    Some(Impact {
        axes,
        time_back: dtx.min(dty),
        penetration,
    })
}

fn elapsed(penetration: f32, closing_speed: f32) -> f32 {
    if closing_speed > 0.0 {
        penetration / closing_speed
    } else {
        f32::INFINITY
    }
}

/// Resolves a collision between two actors, if their boxes intersect.
///
/// See the module documentation for the model.
pub fn resolve_actor_collision(a: &mut Actor, b: &mut Actor) -> Option<ActorCollision> {
    let impact = time_of_impact(a, b)?;

    if impact.axes.is_empty() {
        separate(a, b, impact.penetration);
        return Some(ActorCollision {
            axes: impact.axes,
            separated: true,
        });
    }

    a.position -= a.velocity * impact.time_back;
    b.position -= b.velocity * impact.time_back;

    if impact.axes.contains(CollisionAxes::X) {
        std::mem::swap(&mut a.velocity.x, &mut b.velocity.x);
    }
    if impact.axes.contains(CollisionAxes::Y) {
        std::mem::swap(&mut a.velocity.y, &mut b.velocity.y);
    }

    Some(ActorCollision {
        axes: impact.axes,
        separated: false,
    })
}

/// Pushes two overlapping bodies apart symmetrically along the shallower axis.
fn separate(a: &mut Actor, b: &mut Actor, penetration: Vec2) {
    let half_push = penetration.min_element() / 2.0;
    if penetration.x <= penetration.y {
        let dir = away(a.position.x, b.position.x);
        a.position.x += dir * half_push;
        b.position.x -= dir * half_push;
    } else {
        let dir = away(a.position.y, b.position.y);
        a.position.y += dir * half_push;
        b.position.y -= dir * half_push;
    }
}

/// Direction in which `a` should move to get away from `b`; negative on a tie.
fn away(a: f32, b: f32) -> f32 {
    if a > b {
        1.0
    } else {
        -1.0
    }
}
