//! Input sources: where each actor's per-tick [`Actions`] come from.
//!
//! An [`InputSource`] is consulted once per tick per actor. It reads a
//! read-only view of the [`Arena`] plus an [`InputContext`] carrying the
//! actor's id and the shell's [`DeviceState`], and returns an action vector.
//!
//! # Variants
//!
//! - [`Idle`]: never acts.
//! - [`HumanInput`]: bound to keyboard and pointer state.
//! - [`RandomInput`]: every flag flips with a small probability each tick.
//! - [`HeuristicInput`]: random movement and shooting, crosshair steered
//!   towards the opponent.
//!
//! The stateful variants keep the previous tick's actions in a field and are
//! seeded explicitly, so two sources built with the same seed behave
//! identically.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::actions::Actions;
use crate::arena::{ActorId, Arena};
use crate::error::ParseControllerError;

/// Flip probability used by the random and heuristic controllers by default.
pub const DEFAULT_FLIP_PROBABILITY: f64 = 0.05;

// =============================================================================
// Device state
// =============================================================================

bitflags! {
    /// Keys and buttons the shell tracks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Keys: u16 {
        /// Arrow up.
        const UP = 1 << 0;
        /// Arrow down.
        const DOWN = 1 << 1;
        /// Arrow left.
        const LEFT = 1 << 2;
        /// Arrow right.
        const RIGHT = 1 << 3;
        /// W key.
        const W = 1 << 4;
        /// A key.
        const A = 1 << 5;
        /// S key.
        const S = 1 << 6;
        /// D key.
        const D = 1 << 7;
        /// Space bar.
        const SPACE = 1 << 8;
        /// Left mouse button.
        const MOUSE_LEFT = 1 << 9;
    }
}

/// Keyboard and pointer state owned by the shell.
///
/// The shell updates this from its event queue between ticks and passes it
/// to [`Simulation::step`](crate::simulation::Simulation::step).
///
/// # Example
///
/// ```
/// use skirmish_core::input::{DeviceState, Keys};
/// use glam::Vec2;
///
/// let mut devices = DeviceState::default();
/// devices.press(Keys::UP | Keys::MOUSE_LEFT);
/// devices.release(Keys::UP);
/// devices.pointer = Vec2::new(320.0, 240.0);
///
/// assert!(devices.is_pressed(Keys::MOUSE_LEFT));
/// assert!(!devices.is_pressed(Keys::UP));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Currently held keys and buttons.
    pub keys: Keys,
    /// Pointer position in arena coordinates.
    pub pointer: Vec2,
}

impl DeviceState {
    /// Marks keys as held.
    pub fn press(&mut self, keys: Keys) {
        self.keys.insert(keys);
    }

    /// Marks keys as released.
    pub fn release(&mut self, keys: Keys) {
        self.keys.remove(keys);
    }

    /// Returns true if every key in `keys` is held.
    #[must_use]
    pub fn is_pressed(&self, keys: Keys) -> bool {
        self.keys.contains(keys)
    }
}

// =============================================================================
// InputSource
// =============================================================================

/// Per-call context handed to an [`InputSource`].
#[derive(Debug, Clone, Copy)]
pub struct InputContext<'a> {
    /// The actor being controlled.
    pub actor: ActorId,
    /// Tick being simulated.
    pub tick: u64,
    /// Keyboard and pointer state.
    pub devices: &'a DeviceState,
}

/// Strategy that decides an actor's actions each tick.
pub trait InputSource: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Decides this tick's actions for `ctx.actor`.
    fn decide(&mut self, ctx: &InputContext<'_>, arena: &Arena) -> Actions;
}

/// Controller that never acts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl InputSource for Idle {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn decide(&mut self, _ctx: &InputContext<'_>, _arena: &Arena) -> Actions {
        Actions::IDLE
    }
}

// =============================================================================
// Human
// =============================================================================

/// Which keys drive a human-controlled actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyBinding {
    /// Arrow keys to move, left mouse button to shoot.
    #[default]
    Arrows,
    /// WASD to move, space to shoot.
    Wasd,
}

/// Controller bound to the shell's keyboard and pointer.
///
/// The crosshair always follows the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanInput {
    binding: KeyBinding,
}

impl HumanInput {
    /// Creates a human controller with the given key binding.
    #[must_use]
    pub const fn new(binding: KeyBinding) -> Self {
        Self { binding }
    }
}

impl InputSource for HumanInput {
    fn name(&self) -> &'static str {
        "human"
    }

    fn decide(&mut self, ctx: &InputContext<'_>, _arena: &Arena) -> Actions {
        let [up, down, left, right, shoot] = match self.binding {
            KeyBinding::Arrows => [Keys::UP, Keys::DOWN, Keys::LEFT, Keys::RIGHT, Keys::MOUSE_LEFT],
            KeyBinding::Wasd => [Keys::W, Keys::S, Keys::A, Keys::D, Keys::SPACE],
        };
        let held = |key| ctx.devices.is_pressed(key);

        Actions {
            up: held(up),
            down: held(down),
            left: held(left),
            right: held(right),
            shoot: held(shoot),
            ch_mouse: true,
            pointer: ctx.devices.pointer,
            ..Actions::default()
        }
    }
}

// =============================================================================
// Random
// =============================================================================

/// Returns `previous` negated with probability `p`.
fn maybe_flip(rng: &mut ChaCha8Rng, previous: bool, p: f64) -> bool {
    if rng.gen::<f64>() < p {
        !previous
    } else {
        previous
    }
}

/// Controller whose flags each flip with probability `p` every tick.
///
/// Never uses the pointer.
#[derive(Debug, Clone)]
pub struct RandomInput {
    flip_probability: f64,
    rng: ChaCha8Rng,
    previous: Actions,
}

impl RandomInput {
    /// Creates a random controller.
    #[must_use]
    pub fn new(flip_probability: f64, seed: u64) -> Self {
        debug_assert!((0.0..=1.0).contains(&flip_probability));
        Self {
            flip_probability,
            rng: ChaCha8Rng::seed_from_u64(seed),
            previous: Actions::IDLE,
        }
    }

    /// Actions produced on the previous call.
    #[must_use]
    pub const fn previous(&self) -> &Actions {
        &self.previous
    }
}

impl InputSource for RandomInput {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&mut self, _ctx: &InputContext<'_>, _arena: &Arena) -> Actions {
        let p = self.flip_probability;
        let prev = self.previous;
        let rng = &mut self.rng;

        let actions = Actions {
            up: maybe_flip(rng, prev.up, p),
            down: maybe_flip(rng, prev.down, p),
            left: maybe_flip(rng, prev.left, p),
            right: maybe_flip(rng, prev.right, p),
            shoot: maybe_flip(rng, prev.shoot, p),
            ch_up: maybe_flip(rng, prev.ch_up, p),
            ch_down: maybe_flip(rng, prev.ch_down, p),
            ch_left: maybe_flip(rng, prev.ch_left, p),
            ch_right: maybe_flip(rng, prev.ch_right, p),
            ch_mouse: false,
            pointer: Vec2::ZERO,
        };
        self.previous = actions;
        actions
    }
}

// =============================================================================
// Heuristic
// =============================================================================

/// Controller with random movement and shooting whose crosshair hunts the opponent.
///
/// Each tick the crosshair moves one step towards the opponent's position on
/// every axis where they differ.
#[derive(Debug, Clone)]
pub struct HeuristicInput {
    flip_probability: f64,
    rng: ChaCha8Rng,
    previous: Actions,
}

impl HeuristicInput {
    /// Creates a heuristic controller.
    #[must_use]
    pub fn new(flip_probability: f64, seed: u64) -> Self {
        debug_assert!((0.0..=1.0).contains(&flip_probability));
        Self {
            flip_probability,
            rng: ChaCha8Rng::seed_from_u64(seed),
            previous: Actions::IDLE,
        }
    }

    /// Actions produced on the previous call.
    #[must_use]
    pub const fn previous(&self) -> &Actions {
        &self.previous
    }
}

impl InputSource for HeuristicInput {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn decide(&mut self, ctx: &InputContext<'_>, arena: &Arena) -> Actions {
        let p = self.flip_probability;
        let prev = self.previous;
        let rng = &mut self.rng;

        let mut actions = Actions {
            up: maybe_flip(rng, prev.up, p),
            down: maybe_flip(rng, prev.down, p),
            left: maybe_flip(rng, prev.left, p),
            right: maybe_flip(rng, prev.right, p),
            shoot: maybe_flip(rng, prev.shoot, p),
            ..Actions::IDLE
        };

        if let (Some(me), Some(target)) = (arena.get(ctx.actor), arena.opponent_of(ctx.actor)) {
            let crosshair = me.crosshair();
            let goal = target.position();
            actions.ch_left = goal.x < crosshair.x;
            actions.ch_right = goal.x > crosshair.x;
            actions.ch_up = goal.y < crosshair.y;
            actions.ch_down = goal.y > crosshair.y;
        }

        self.previous = actions;
        actions
    }
}

// =============================================================================
// ControllerKind
// =============================================================================

/// Controllers that can be built without a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    /// [`Idle`].
    Idle,
    /// [`RandomInput`].
    Random,
    /// [`HeuristicInput`].
    Heuristic,
}

impl ControllerKind {
    /// Builds the controller.
    #[must_use]
    pub fn build(self, flip_probability: f64, seed: u64) -> Box<dyn InputSource> {
        match self {
            Self::Idle => Box::new(Idle),
            Self::Random => Box::new(RandomInput::new(flip_probability, seed)),
            Self::Heuristic => Box::new(HeuristicInput::new(flip_probability, seed)),
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Random => write!(f, "random"),
            Self::Heuristic => write!(f, "heuristic"),
        }
    }
}

impl FromStr for ControllerKind {
    type Err = ParseControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "idle" => Ok(Self::Idle),
            "random" => Ok(Self::Random),
            "heuristic" | "ai" => Ok(Self::Heuristic),
            _ => Err(ParseControllerError(s.to_owned())),
        }
    }
}
