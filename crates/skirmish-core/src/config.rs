//! Match configuration.
//!
//! Defaults reproduce the classic setup: a 1600x800 arena, a teal player in
//! the top-left corner against a yellow opponent spawned in the bottom-right
//! corner (the first wall pass pulls it inside), first to 10 points.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::actor::Rgb;
use crate::error::ConfigError;

/// Teal, the first actor's default colour.
pub const TEAL: Rgb = [0, 188, 212];

/// Yellow, the second actor's default colour.
pub const YELLOW: Rgb = [255, 235, 59];

/// Everything needed to set up a match.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Example
///
/// ```
/// use skirmish_core::config::MatchConfig;
///
/// let config: MatchConfig = serde_json::from_str(r#"{ "target_score": 3 }"#).unwrap();
/// assert_eq!(config.target_score, 3);
/// assert_eq!(config.arena_width, 1600);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Arena width in units.
    pub arena_width: u32,
    /// Arena height in units.
    pub arena_height: u32,
    /// Side length of an actor's square body.
    pub actor_size: f32,
    /// Side length of a projectile's square body.
    pub projectile_size: f32,
    /// Spawn positions, first actor then second.
    pub spawns: [Vec2; 2],
    /// Render colours, first actor then second.
    pub colors: [Rgb; 2],
    /// Score that ends the match.
    pub target_score: u32,
    /// Per-tick flip probability for random and heuristic controllers.
    pub flip_probability: f64,
    /// Seed for the controllers' random number generators.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: 1600,
            arena_height: 800,
            actor_size: 50.0,
            projectile_size: 20.0,
            spawns: [Vec2::new(100.0, 100.0), Vec2::new(1600.0, 800.0)],
            colors: [TEAL, YELLOW],
            target_score: 10,
            flip_probability: 0.05,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Checks that the configuration describes a playable match.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width == 0 || self.arena_height == 0 {
            return Err(ConfigError::NonPositiveArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        let limit = self.width().min(self.height());
        check_size("actor", self.actor_size, limit)?;
        check_size("projectile", self.projectile_size, limit)?;
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(ConfigError::InvalidProbability(self.flip_probability));
        }
        if self.target_score == 0 {
            return Err(ConfigError::ZeroTargetScore);
        }
        Ok(())
    }

    /// Arena width as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn width(&self) -> f32 {
        self.arena_width as f32
    }

    /// Arena height as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn height(&self) -> f32 {
        self.arena_height as f32
    }
}

fn check_size(what: &'static str, value: f32, limit: f32) -> Result<(), ConfigError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ConfigError::NonPositiveSize { what, value });
    }
    if value >= limit {
        return Err(ConfigError::SpriteLargerThanArena {
            what,
            size: value,
            limit,
        });
    }
    Ok(())
}
