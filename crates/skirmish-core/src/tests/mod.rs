//! Scenario, determinism and property tests for the match loop.
//!
//! # Test Structure
//!
//! - `scenarios.rs`: hand-checked matches driven through [`Simulation::step`]
//! - `determinism.rs`: identical seeds give identical matches
//! - `properties.rs`: `proptest` properties of the physics primitives
//! - `helpers.rs`: scripted input sources, recording sinks, arena setup
//!
//! [`Simulation::step`]: crate::simulation::Simulation::step

mod helpers;

pub use helpers::*;
