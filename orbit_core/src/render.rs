//! Data handed to whatever draws the scene
//!
//! The engine never talks to a renderer directly. A host implements
//! [`RenderBridge`] and calls [`SimulationEngine::present`] once per frame;
//! the bridge receives queued [`VisualChange`]s followed by a fresh
//! [`BodySnapshot`] of every body.
//!
//! [`SimulationEngine::present`]: crate::SimulationEngine::present

use crate::body::{Body, BodyId, BodyKind, Color};
use crate::vector::Vector3;

/// Read-only view of one body and its trail for a single frame
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    /// Colour of both the sphere and the trail line
    pub color: Color,
    pub radius: f64,
    pub position: Vector3,
    /// Trail points, oldest first
    pub trail: Vec<Vector3>,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id(),
            name: body.name.clone(),
            kind: body.kind,
            color: body.color,
            radius: body.radius,
            position: body.position,
            trail: body.trail().snapshot(),
        }
    }
}

/// Changes a renderer has to act on beyond re-reading positions
#[derive(Debug, Clone, PartialEq)]
pub enum VisualChange {
    /// A body was added; build its sphere and trail line
    Created { id: BodyId },
    /// A body and its trail are gone; drop their visuals
    Removed { id: BodyId },
    /// Recolour both the sphere and the trail line
    ColorChanged { id: BodyId, color: Color },
    /// Sphere geometry built for the old radius is stale
    GeometryInvalidated { id: BodyId, radius: f64 },
}

impl VisualChange {
    pub fn id(&self) -> BodyId {
        match self {
            VisualChange::Created { id }
            | VisualChange::Removed { id }
            | VisualChange::ColorChanged { id, .. }
            | VisualChange::GeometryInvalidated { id, .. } => *id,
        }
    }
}

/// Presentation layer fed by the engine
pub trait RenderBridge {
    /// Called once per pending change, in the order they happened
    fn apply(&mut self, change: &VisualChange);

    /// Called once per frame with every body in registry order
    fn draw(&mut self, bodies: &[BodySnapshot]);
}
