//! Interactive N-body gravity engine
//!
//! The crate holds the simulation and object-management core of the gravity
//! sandbox:
//! - a registry of celestial bodies with stable handles
//! - an exact pairwise Newtonian force sum with a fixed-step semi-implicit
//!   Euler integrator
//! - bounded position trails for path rendering
//!
//! Rendering is not done here. A host reads [`BodySnapshot`]s every frame and
//! drains [`VisualChange`]s through the [`RenderBridge`] trait.

pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod gravity;
pub mod presets;
pub mod render;
pub mod trail;
pub mod vector;

pub use body::{Body, BodyField, BodyId, BodyKind, BodyParams, Color};
pub use config::SimulationConfig;
pub use engine::{SimulationEngine, StepOutcome};
pub use error::{Result, SimError};
pub use presets::Preset;
pub use render::{BodySnapshot, RenderBridge, VisualChange};
pub use trail::Trail;
pub use vector::Vector3;

#[cfg(test)]
mod gravity_test;
#[cfg(test)]
mod trail_test;
#[cfg(test)]
mod vector_test;
