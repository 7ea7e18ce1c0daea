//! The per-tick command set an input source produces for one actor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Boolean commands for a single tick.
///
/// Movement flags set the thrust direction, `ch_*` flags nudge the crosshair,
/// and `shoot` fires the projectile if it is available. When `ch_mouse` is set
/// the four directional crosshair flags are ignored and the crosshair jumps to
/// `pointer`, an absolute arena position supplied by the input source.
///
/// # Example
///
/// ```
/// use skirmish_core::actions::Actions;
/// use glam::Vec2;
///
/// let actions = Actions { right: true, up: true, ..Actions::default() };
/// assert_eq!(actions.thrust(), Vec2::new(1.0, -1.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Actions {
    /// Thrust towards negative y.
    pub up: bool,
    /// Thrust towards positive y.
    pub down: bool,
    /// Thrust towards negative x.
    pub left: bool,
    /// Thrust towards positive x.
    pub right: bool,
    /// Fire the projectile at the crosshair.
    pub shoot: bool,
    /// Move the crosshair up.
    pub ch_up: bool,
    /// Move the crosshair down.
    pub ch_down: bool,
    /// Move the crosshair left.
    pub ch_left: bool,
    /// Move the crosshair right.
    pub ch_right: bool,
    /// Snap the crosshair to `pointer`.
    pub ch_mouse: bool,
    /// Absolute pointer position, read only when `ch_mouse` is set.
    pub pointer: Vec2,
}

impl Actions {
    /// No action at all.
    pub const IDLE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
        shoot: false,
        ch_up: false,
        ch_down: false,
        ch_left: false,
        ch_right: false,
        ch_mouse: false,
        pointer: Vec2::ZERO,
    };

    /// Raw thrust vector `(right - left, down - up)`, not normalized.
    #[must_use]
    pub fn thrust(&self) -> Vec2 {
        axis_pair(self.left, self.right, self.up, self.down)
    }

    /// Crosshair step direction `(ch_right - ch_left, ch_down - ch_up)`.
    #[must_use]
    pub fn crosshair_step(&self) -> Vec2 {
        axis_pair(self.ch_left, self.ch_right, self.ch_up, self.ch_down)
    }
}

fn axis_pair(negative_x: bool, positive_x: bool, negative_y: bool, positive_y: bool) -> Vec2 {
    Vec2::new(
        f32::from(u8::from(positive_x)) - f32::from(u8::from(negative_x)),
        f32::from(u8::from(positive_y)) - f32::from(u8::from(negative_y)),
    )
}
