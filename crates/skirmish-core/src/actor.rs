//! Player-controlled ship: motion integrator, crosshair and firing.
//!
//! Actors move under a discretized constant-acceleration (CA) model. The
//! action taken at tick `i` sets the acceleration used at tick `i + 1`, so
//! input always takes effect with a one-tick lag.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::Actions;
use crate::error::FireError;
use crate::geometry::Bounds;
use crate::projectile::Projectile;

/// Maximum actor speed in units per second.
pub const MAX_SPEED: f32 = 1500.0;

/// Projectile launch speed in units per second.
pub const SHOOT_SPEED: f32 = 3000.0;

/// Thrust acceleration magnitude in units per second squared.
pub const ACCEL_MAGNITUDE: f32 = 20000.0;

/// Drag deceleration magnitude in units per second squared.
pub const DRAG_MAGNITUDE: f32 = 3000.0;

/// Speeds below this snap to zero.
pub const STOP_THRESHOLD: f32 = 30.0;

/// Drag is only applied above this speed.
pub const DRAG_THRESHOLD: f32 = 0.1;

/// Crosshair displacement per tick and per active crosshair flag.
pub const CROSSHAIR_STEP: f32 = 30.0;

/// Where a fresh actor's crosshair starts.
pub const INITIAL_CROSSHAIR: Vec2 = Vec2::new(200.0, 200.0);

/// An RGB colour used by render sinks to tint the sprite and crosshair.
pub type Rgb = [u8; 3];

/// A ship in the arena.
///
/// # Example
///
/// ```
/// use skirmish_core::actor::Actor;
/// use skirmish_core::actions::Actions;
/// use glam::Vec2;
///
/// let mut actor = Actor::new(Vec2::new(100.0, 100.0), 25.0);
/// let thrust_right = Actions { right: true, ..Actions::default() };
///
/// // The first tick only records the new acceleration.
/// actor.update(&thrust_right, 1.0 / 60.0);
/// assert_eq!(actor.position(), Vec2::new(100.0, 100.0));
/// assert_eq!(actor.acceleration(), Vec2::new(20000.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Centre of the body.
    pub position: Vec2,
    /// Velocity in units per second.
    pub velocity: Vec2,
    /// Acceleration applied during the next update.
    pub acceleration: Vec2,
    /// Aim point in arena coordinates.
    pub crosshair: Vec2,
    score: u32,
    projectile: Projectile,
    half_size: f32,
    color: Rgb,
}

impl Actor {
    /// Creates an actor at rest with a square body of side `2 * half_size`.
    #[must_use]
    pub fn new(position: Vec2, half_size: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            crosshair: INITIAL_CROSSHAIR,
            score: 0,
            projectile: Projectile::new(),
            half_size,
            color: [255, 255, 255],
        }
    }

    /// Sets the render colour.
    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Replaces the projectile, e.g. to use a different bullet size.
    #[must_use]
    pub fn with_projectile(mut self, projectile: Projectile) -> Self {
        self.projectile = projectile;
        self
    }

    /// Advances the actor by one tick.
    ///
    /// Returns true if the projectile was fired during this tick.
    pub fn update(&mut self, actions: &Actions, dt: f32) -> bool {
        // CA model using last tick's acceleration.
        self.position += self.velocity * dt + self.acceleration * (dt * dt) / 2.0;
        self.velocity += self.acceleration * dt;

        self.acceleration = actions
            .thrust()
            .try_normalize()
            .map_or(Vec2::ZERO, |dir| dir * ACCEL_MAGNITUDE);

        let speed = self.velocity.length();
        if speed > MAX_SPEED {
            self.velocity *= MAX_SPEED / speed;
        }
        if speed < STOP_THRESHOLD {
            self.velocity = Vec2::ZERO;
        }

        // Drag lands in the acceleration, so it bites next tick.
        let speed = self.velocity.length();
        if speed > DRAG_THRESHOLD {
            self.acceleration -= self.velocity / speed * DRAG_MAGNITUDE;
        }

        if actions.ch_mouse {
            self.crosshair = actions.pointer;
        } else {
            self.crosshair += actions.crosshair_step() * CROSSHAIR_STEP;
        }

        let fired = actions.shoot && !self.projectile.is_live() && self.try_fire();

        self.projectile.update(dt);
        fired
    }

    fn try_fire(&mut self) -> bool {
        match self
            .projectile
            .fire(self.position, self.crosshair, SHOOT_SPEED)
        {
            Ok(()) => true,
            Err(FireError::DegenerateDirection) => {
                debug!(position = ?self.position, "crosshair on actor, shot skipped");
                false
            }
            Err(FireError::AlreadyLive) => false,
        }
    }

    /// Collision box centred on the actor.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::square(self.position, self.half_size)
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Acceleration that the next update will integrate.
    #[must_use]
    pub const fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Current aim point.
    #[must_use]
    pub const fn crosshair(&self) -> Vec2 {
        self.crosshair
    }

    /// Points scored so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Records a hit on the opponent.
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    /// Half side of the square body.
    #[must_use]
    pub const fn half_size(&self) -> f32 {
        self.half_size
    }

    /// Render colour.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// The actor's projectile.
    #[must_use]
    pub const fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    /// Mutable access to the actor's projectile.
    pub fn projectile_mut(&mut self) -> &mut Projectile {
        &mut self.projectile
    }

    /// Unit vector from the body towards the crosshair, or zero when they coincide.
    #[must_use]
    pub fn aim(&self) -> Vec2 {
        (self.crosshair - self.position).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::FIXED_DT;

    const EPS: f32 = 1e-3;

    fn actor_at(x: f32, y: f32) -> Actor {
        Actor::new(Vec2::new(x, y), 25.0)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    mod integration_tests {
        use super::*;

        #[test]
        fn at_rest_without_input_stays_put() {
            let mut actor = actor_at(100.0, 100.0);

            actor.update(&Actions::IDLE, FIXED_DT);

            assert_eq!(actor.position(), Vec2::new(100.0, 100.0));
            assert_eq!(actor.velocity(), Vec2::ZERO);
            assert_eq!(actor.acceleration(), Vec2::ZERO);
        }

        #[test]
        fn thrust_takes_effect_one_tick_later() {
            let mut actor = actor_at(100.0, 100.0);
            let right = Actions {
                right: true,
                ..Actions::default()
            };

            actor.update(&right, FIXED_DT);
            assert_eq!(actor.velocity(), Vec2::ZERO);
            assert_eq!(actor.acceleration(), Vec2::new(ACCEL_MAGNITUDE, 0.0));

            actor.update(&right, FIXED_DT);
            // v = a * dt = 20000 / 60
            assert!((actor.velocity().x - ACCEL_MAGNITUDE * FIXED_DT).abs() < EPS);
            // x += a * dt^2 / 2
            let expected_x = 100.0 + ACCEL_MAGNITUDE * FIXED_DT * FIXED_DT / 2.0;
            assert!((actor.position().x - expected_x).abs() < EPS);
        }

        #[test]
        fn diagonal_thrust_is_normalized() {
            let mut actor = actor_at(0.0, 0.0);
            let actions = Actions {
                right: true,
                down: true,
                ..Actions::default()
            };

            actor.update(&actions, FIXED_DT);

            assert!((actor.acceleration().length() - ACCEL_MAGNITUDE).abs() < 0.1);
            assert!((actor.acceleration().x - actor.acceleration().y).abs() < EPS);
        }

        #[test]
        fn drag_opposes_motion_after_update() {
            let mut actor = actor_at(500.0, 500.0);
            actor.velocity = Vec2::new(0.0, -600.0);

            actor.update(&Actions::IDLE, FIXED_DT);

            assert_eq!(actor.velocity(), Vec2::new(0.0, -600.0));
            assert!(approx(actor.acceleration(), Vec2::new(0.0, DRAG_MAGNITUDE)));
        }

        #[test]
        fn drag_adds_to_thrust() {
            let mut actor = actor_at(500.0, 500.0);
            actor.velocity = Vec2::new(600.0, 0.0);
            let actions = Actions {
                right: true,
                ..Actions::default()
            };

            actor.update(&actions, FIXED_DT);

            assert!(approx(
                actor.acceleration(),
                Vec2::new(ACCEL_MAGNITUDE - DRAG_MAGNITUDE, 0.0)
            ));
        }
    }

    mod speed_limit_tests {
        use super::*;

        #[test]
        fn speed_is_clamped_to_max() {
            let mut actor = actor_at(500.0, 500.0);
            actor.velocity = Vec2::new(2000.0, 0.0);

            actor.update(&Actions::IDLE, FIXED_DT);

            assert!((actor.velocity().length() - MAX_SPEED).abs() < EPS);
            assert!(actor.velocity().x > 0.0);
            assert!(actor.velocity().y.abs() < EPS);
        }

        #[test]
        fn clamp_preserves_direction() {
            let mut actor = actor_at(500.0, 500.0);
            actor.velocity = Vec2::new(-1800.0, 2400.0);

            actor.update(&Actions::IDLE, FIXED_DT);

            assert!((actor.velocity().length() - MAX_SPEED).abs() < EPS);
            assert!(approx(actor.velocity(), Vec2::new(-900.0, 1200.0)));
        }

        #[test]
        fn clamped_velocity_gets_full_drag() {
            let mut actor = actor_at(500.0, 500.0);
            actor.velocity = Vec2::new(2000.0, 0.0);

            actor.update(&Actions::IDLE, FIXED_DT);

            assert!(approx(actor.acceleration(), Vec2::new(-DRAG_MAGNITUDE, 0.0)));
        }

        #[test]
        fn slow_velocity_snaps_to_zero() {
            let mut actor = actor_at(500.0, 500.0);
            actor.velocity = Vec2::new(20.0, -15.0);

            actor.update(&Actions::IDLE, FIXED_DT);

            assert_eq!(actor.velocity(), Vec2::ZERO);
            assert_eq!(actor.acceleration(), Vec2::ZERO);
        }

        #[test]
        fn drag_eventually_stops_actor() {
            let mut actor = actor_at(800.0, 400.0);
            actor.velocity = Vec2::new(900.0, 0.0);

            for _ in 0..60 {
                actor.update(&Actions::IDLE, FIXED_DT);
            }

            assert_eq!(actor.velocity(), Vec2::ZERO);
        }
    }

    mod crosshair_tests {
        use super::*;

        #[test]
        fn flags_nudge_crosshair() {
            let mut actor = actor_at(0.0, 0.0);
            let actions = Actions {
                ch_right: true,
                ch_up: true,
                ..Actions::default()
            };

            actor.update(&actions, FIXED_DT);

            assert_eq!(
                actor.crosshair(),
                INITIAL_CROSSHAIR + Vec2::new(CROSSHAIR_STEP, -CROSSHAIR_STEP)
            );
        }

        #[test]
        fn mouse_overrides_flags() {
            let mut actor = actor_at(0.0, 0.0);
            let actions = Actions {
                ch_right: true,
                ch_down: true,
                ch_mouse: true,
                pointer: Vec2::new(640.0, 320.0),
                ..Actions::default()
            };

            actor.update(&actions, FIXED_DT);

            assert_eq!(actor.crosshair(), Vec2::new(640.0, 320.0));
        }

        #[test]
        fn aim_points_at_crosshair() {
            let mut actor = actor_at(100.0, 100.0);
            actor.crosshair = Vec2::new(100.0, 50.0);
            assert_eq!(actor.aim(), Vec2::new(0.0, -1.0));

            actor.crosshair = actor.position;
            assert_eq!(actor.aim(), Vec2::ZERO);
        }
    }

    mod firing_tests {
        use super::*;

        fn shoot_at(pointer: Vec2) -> Actions {
            Actions {
                shoot: true,
                ch_mouse: true,
                pointer,
                ..Actions::default()
            }
        }

        #[test]
        fn fires_towards_crosshair() {
            let mut actor = actor_at(100.0, 100.0);

            let fired = actor.update(&shoot_at(Vec2::new(300.0, 100.0)), FIXED_DT);

            assert!(fired);
            let bullet = actor.projectile();
            assert!(bullet.is_live());
            assert!(approx(bullet.velocity(), Vec2::new(SHOOT_SPEED, 0.0)));
            // Launched from the body, then advanced once.
            assert!(approx(bullet.position(), Vec2::new(150.0, 100.0)));
        }

        #[test]
        fn does_not_refire_while_live() {
            let mut actor = actor_at(100.0, 100.0);
            actor.update(&shoot_at(Vec2::new(300.0, 100.0)), FIXED_DT);

            let fired = actor.update(&shoot_at(Vec2::new(100.0, 300.0)), FIXED_DT);

            assert!(!fired);
            assert!(approx(
                actor.projectile().velocity(),
                Vec2::new(SHOOT_SPEED, 0.0)
            ));
        }

        #[test]
        fn crosshair_on_body_skips_shot() {
            let mut actor = actor_at(100.0, 100.0);

            let fired = actor.update(&shoot_at(Vec2::new(100.0, 100.0)), FIXED_DT);

            assert!(!fired);
            assert!(!actor.projectile().is_live());
        }

        #[test]
        fn no_shoot_flag_no_shot() {
            let mut actor = actor_at(100.0, 100.0);
            let actions = Actions {
                ch_mouse: true,
                pointer: Vec2::new(300.0, 100.0),
                ..Actions::default()
            };

            assert!(!actor.update(&actions, FIXED_DT));
            assert!(!actor.projectile().is_live());
        }
    }

    #[test]
    fn score_counts_points() {
        let mut actor = actor_at(0.0, 0.0);
        actor.add_point();
        actor.add_point();
        assert_eq!(actor.score(), 2);
    }

    #[test]
    fn bounds_are_square() {
        let actor = actor_at(100.0, 200.0);
        let b = actor.bounds();
        assert_eq!(b.left(), 75.0);
        assert_eq!(b.bottom(), 225.0);
    }
}
