//! The single reusable projectile each actor carries.
//!
//! A projectile is never destroyed. While not live it is parked at
//! [`PARKING_POSITION`], outside every arena, and ignores updates. Firing
//! re-arms it; leaving the arena or hitting the opponent parks it again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::FireError;
use crate::geometry::Bounds;

/// Where a projectile waits while it is not in flight.
pub const PARKING_POSITION: Vec2 = Vec2::new(-100.0, -100.0);

/// Half side of the square projectile sprite (20x20).
pub const PROJECTILE_HALF_SIZE: f32 = 10.0;

/// Position/velocity state for one bullet.
///
/// # Example
///
/// ```
/// use skirmish_core::projectile::Projectile;
/// use glam::Vec2;
///
/// let mut bullet = Projectile::new();
/// bullet.fire(Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0), 3000.0).unwrap();
///
/// assert!(bullet.is_live());
/// assert_eq!(bullet.velocity(), Vec2::new(3000.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    position: Vec2,
    velocity: Vec2,
    is_live: bool,
    half_size: f32,
}

impl Projectile {
    /// Creates a parked projectile with the default sprite size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_half_size(PROJECTILE_HALF_SIZE)
    }

    /// Creates a parked projectile with a custom sprite size.
    #[must_use]
    pub fn with_half_size(half_size: f32) -> Self {
        Self {
            position: PARKING_POSITION,
            velocity: Vec2::ZERO,
            is_live: false,
            half_size,
        }
    }

    /// Parks the projectile and marks it as not live.
    pub fn reset(&mut self) {
        self.position = PARKING_POSITION;
        self.velocity = Vec2::ZERO;
        self.is_live = false;
    }

    /// Advances a live projectile by explicit Euler; no-op when parked.
    pub fn update(&mut self, dt: f32) {
        if self.is_live {
            self.position += self.velocity * dt;
        }
    }

    /// Launches the projectile from `origin` towards `target` at `speed`.
    ///
    /// # Errors
    ///
    /// Returns [`FireError::AlreadyLive`] while the projectile is in flight and
    /// [`FireError::DegenerateDirection`] when `target` equals `origin`. The
    /// projectile is left untouched in both cases.
    pub fn fire(&mut self, origin: Vec2, target: Vec2, speed: f32) -> Result<(), FireError> {
        if self.is_live {
            return Err(FireError::AlreadyLive);
        }
        let direction = (target - origin)
            .try_normalize()
            .ok_or(FireError::DegenerateDirection)?;

        self.position = origin;
        self.velocity = direction * speed;
        self.is_live = true;
        Ok(())
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity. Meaningless while the projectile is parked.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Whether the projectile is in flight.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.is_live
    }

    /// Half side of the square sprite.
    #[must_use]
    pub const fn half_size(&self) -> f32 {
        self.half_size
    }

    /// Collision box centred on the projectile.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::square(self.position, self.half_size)
    }

    /// Places a live projectile at an explicit state, bypassing the firing guards.
    #[cfg(test)]
    pub(crate) fn launch_at(&mut self, position: Vec2, velocity: Vec2) {
        self.position = position;
        self.velocity = velocity;
        self.is_live = true;
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod reset_tests {
        use super::*;

        #[test]
        fn new_projectile_is_parked() {
            let p = Projectile::new();
            assert!(!p.is_live());
            assert_eq!(p.position(), PARKING_POSITION);
            assert_eq!(p.velocity(), Vec2::ZERO);
        }

        #[test]
        fn reset_parks_live_projectile() {
            let mut p = Projectile::new();
            p.launch_at(Vec2::new(500.0, 300.0), Vec2::new(10.0, 20.0));

            p.reset();

            assert!(!p.is_live());
            assert_eq!(p.position(), PARKING_POSITION);
            assert_eq!(p.velocity(), Vec2::ZERO);
        }

        #[test]
        fn reset_is_idempotent() {
            let mut once = Projectile::new();
            once.launch_at(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
            let mut twice = once.clone();

            once.reset();
            twice.reset();
            twice.reset();

            assert_eq!(once, twice);
        }

        #[test]
        fn parked_projectile_is_outside_any_arena() {
            let p = Projectile::new();
            assert!(p.bounds().is_outside(1600.0, 800.0));
        }
    }

    mod update_tests {
        use super::*;

        #[test]
        fn live_projectile_moves() {
            let mut p = Projectile::new();
            p.launch_at(Vec2::new(0.0, 0.0), Vec2::new(60.0, -30.0));

            p.update(0.5);

            assert_eq!(p.position(), Vec2::new(30.0, -15.0));
        }

        #[test]
        fn parked_projectile_does_not_move() {
            let mut p = Projectile::new();
            p.update(1.0);
            assert_eq!(p.position(), PARKING_POSITION);
        }
    }

    mod fire_tests {
        use super::*;

        #[test]
        fn fire_normalizes_direction() {
            let mut p = Projectile::new();
            p.fire(Vec2::new(100.0, 100.0), Vec2::new(100.0, 400.0), 3000.0)
                .unwrap();

            assert!(p.is_live());
            assert_eq!(p.position(), Vec2::new(100.0, 100.0));
            assert_eq!(p.velocity(), Vec2::new(0.0, 3000.0));
        }

        #[test]
        fn fire_diagonal_has_requested_speed() {
            let mut p = Projectile::new();
            p.fire(Vec2::ZERO, Vec2::new(3.0, 4.0), 3000.0).unwrap();

            assert!((p.velocity().length() - 3000.0).abs() < 0.01);
            assert!((p.velocity().x - 1800.0).abs() < 0.01);
            assert!((p.velocity().y - 2400.0).abs() < 0.01);
        }

        #[test]
        fn fire_while_live_is_rejected() {
            let mut p = Projectile::new();
            p.fire(Vec2::ZERO, Vec2::X, 10.0).unwrap();
            let before = p.clone();

            let result = p.fire(Vec2::new(50.0, 50.0), Vec2::ZERO, 10.0);

            assert_eq!(result, Err(FireError::AlreadyLive));
            assert_eq!(p, before);
        }

        #[test]
        fn fire_at_own_position_is_rejected() {
            let mut p = Projectile::new();
            let origin = Vec2::new(100.0, 100.0);

            let result = p.fire(origin, origin, 3000.0);

            assert_eq!(result, Err(FireError::DegenerateDirection));
            assert!(!p.is_live());
            assert_eq!(p.position(), PARKING_POSITION);
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let mut p = Projectile::new();
        p.launch_at(Vec2::new(10.0, 20.0), Vec2::new(1.0, 2.0));

        let json = serde_json::to_string(&p).unwrap();
        let back: Projectile = serde_json::from_str(&json).unwrap();

        assert_eq!(back, p);
    }
}
