//! Axis-aligned boxes and the flag sets used by collision reporting.
//!
//! Every body in the arena is a square sprite, so collision shapes are
//! axis-aligned boxes centred on the body's position. Screen coordinates are
//! used throughout: x grows to the right and y grows downwards, so `top` is
//! the smaller y value.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// =============================================================================
// Bounds
// =============================================================================

/// An axis-aligned box described by its centre and half extents.
///
/// # Example
///
/// ```
/// use skirmish_core::geometry::Bounds;
/// use glam::Vec2;
///
/// let a = Bounds::square(Vec2::new(100.0, 100.0), 25.0);
/// let b = Bounds::square(Vec2::new(140.0, 100.0), 25.0);
///
/// assert_eq!(a.left(), 75.0);
/// assert!(a.intersects(&b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Centre of the box.
    pub center: Vec2,
    /// Half width and half height.
    pub half_extents: Vec2,
}

impl Bounds {
    /// Creates a box from its centre and half extents.
    #[must_use]
    pub const fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Creates a square box with the given half side length.
    #[must_use]
    pub fn square(center: Vec2, half_size: f32) -> Self {
        Self::new(center, Vec2::splat(half_size))
    }

    /// Smallest x covered by the box.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    /// Largest x covered by the box.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    /// Smallest y covered by the box.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    /// Largest y covered by the box.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Full width and height.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Returns true if the two boxes overlap with a positive area.
    ///
    /// Boxes that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Returns true if no part of the box lies inside `[0,width] x [0,height]`.
    #[must_use]
    pub fn is_outside(&self, width: f32, height: f32) -> bool {
        self.right() < 0.0 || self.bottom() < 0.0 || self.left() > width || self.top() > height
    }
}

// =============================================================================
// Flag sets
// =============================================================================

bitflags! {
    /// Arena walls touched by a body during a single constraint pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct WallContact: u8 {
        /// The wall at `x = 0`.
        const LEFT = 1 << 0;
        /// The wall at `y = 0`.
        const TOP = 1 << 1;
        /// The wall at `x = width`.
        const RIGHT = 1 << 2;
        /// The wall at `y = height`.
        const BOTTOM = 1 << 3;
    }
}

bitflags! {
    /// Axes along which an actor/actor collision exchanged velocity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct CollisionAxes: u8 {
        /// Horizontal axis.
        const X = 1 << 0;
        /// Vertical axis.
        const Y = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod bounds_tests {
        use super::*;

        #[test]
        fn edges_follow_center_and_extents() {
            let b = Bounds::new(Vec2::new(10.0, 20.0), Vec2::new(3.0, 4.0));
            assert_eq!(b.left(), 7.0);
            assert_eq!(b.right(), 13.0);
            assert_eq!(b.top(), 16.0);
            assert_eq!(b.bottom(), 24.0);
            assert_eq!(b.size(), Vec2::new(6.0, 8.0));
        }

        #[test]
        fn overlapping_boxes_intersect() {
            let a = Bounds::square(Vec2::ZERO, 10.0);
            let b = Bounds::square(Vec2::new(15.0, 5.0), 10.0);
            assert!(a.intersects(&b));
            assert!(b.intersects(&a));
        }

        #[test]
        fn touching_edges_do_not_intersect() {
            let a = Bounds::square(Vec2::ZERO, 10.0);
            let b = Bounds::square(Vec2::new(20.0, 0.0), 10.0);
            assert!(!a.intersects(&b));
        }

        #[test]
        fn separated_on_one_axis_does_not_intersect() {
            let a = Bounds::square(Vec2::ZERO, 10.0);
            let b = Bounds::square(Vec2::new(5.0, 50.0), 10.0);
            assert!(!a.intersects(&b));
        }

        #[test]
        fn outside_checks_every_edge() {
            let (w, h) = (1600.0, 800.0);
            assert!(Bounds::square(Vec2::new(-11.0, 400.0), 10.0).is_outside(w, h));
            assert!(Bounds::square(Vec2::new(400.0, -11.0), 10.0).is_outside(w, h));
            assert!(Bounds::square(Vec2::new(1611.0, 400.0), 10.0).is_outside(w, h));
            assert!(Bounds::square(Vec2::new(400.0, 811.0), 10.0).is_outside(w, h));
        }

        #[test]
        fn partially_inside_is_not_outside() {
            let b = Bounds::square(Vec2::new(-5.0, 400.0), 10.0);
            assert!(!b.is_outside(1600.0, 800.0));
        }
    }

    mod flag_tests {
        use super::*;

        #[test]
        fn corner_contact_combines_walls() {
            let corner = WallContact::LEFT | WallContact::TOP;
            assert!(corner.contains(WallContact::LEFT));
            assert!(corner.contains(WallContact::TOP));
            assert!(!corner.contains(WallContact::RIGHT));
        }

        #[test]
        fn default_axes_are_empty() {
            assert!(CollisionAxes::default().is_empty());
            assert_eq!(CollisionAxes::all(), CollisionAxes::X | CollisionAxes::Y);
        }
    }
}
