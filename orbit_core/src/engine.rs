//! Body registry and fixed-step integrator

use log::{debug, trace, warn};

use crate::body::{Body, BodyField, BodyId, BodyParams};
use crate::config::SimulationConfig;
use crate::error::{ensure_positive, Result, SimError};
use crate::gravity::{pairwise_accelerations, potential_energy};
use crate::render::{BodySnapshot, RenderBridge, VisualChange};
use crate::trail::Trail;
use crate::vector::{is_finite_vector, Vector3};

/// What a call to [`SimulationEngine::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The simulation is paused; nothing changed
    Paused,
    /// Every body was advanced by one time step
    Advanced,
}

/// Owns every body and advances them under mutual gravity
///
/// Bodies are kept in insertion order. External callers refer to them by
/// [`BodyId`]; index-based views exist for list-style UIs, and an index is only
/// meaningful until the next removal shifts the bodies after it.
///
/// The engine is single-threaded. A host that shares it between threads
/// should hold one exclusive lock around `step` and every mutating call.
pub struct SimulationEngine {
    config: SimulationConfig,
    bodies: Vec<Body>,
    running: bool,
    next_id: u64,
    steps_taken: u64,
    elapsed: f64,
    pending: Vec<VisualChange>,
}

impl SimulationEngine {
    /// Creates a paused engine with an empty registry
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_validated(config))
    }

    fn with_validated(config: SimulationConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            running: false,
            next_id: 0,
            steps_taken: 0,
            elapsed: 0.0,
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    // ---- registry -------------------------------------------------------

    /// Adds a body with a fresh, empty trail and returns its handle
    ///
    /// Radius and mass must be positive and finite. The name is free-form and
    /// may repeat.
    pub fn create(&mut self, params: BodyParams) -> Result<BodyId> {
        ensure_positive("radius", params.radius)?;
        ensure_positive("mass", params.mass)?;
        let trail = Trail::new(self.config.trail_capacity)?;

        let id = BodyId(self.next_id);
        self.next_id += 1;

        debug!(
            "{} named {:?} added as {} (mass {}, radius {})",
            params.kind, params.name, id, params.mass, params.radius
        );
        self.bodies.push(Body::from_params(id, params, trail));
        self.pending.push(VisualChange::Created { id });
        Ok(id)
    }

    /// Changes exactly one field of a body
    ///
    /// Values are taken as given: mass and radius are not re-validated here,
    /// so a zero mass set this way shows up later as a
    /// [`SimError::NumericDivergence`] from `step`.
    pub fn update(&mut self, id: BodyId, field: BodyField) -> Result<()> {
        let Some(index) = self.index_of(id) else {
            warn!("update of {}: selected object not found", id);
            return Err(SimError::NotFound(id));
        };

        match &field {
            BodyField::Mass(v) | BodyField::Radius(v) if !(v.is_finite() && *v > 0.0) => {
                warn!("{} of {} set to {}; step results may not be finite", field.key(), id, v);
            }
            _ => trace!("{} of {} updated", field.key(), id),
        }

        let body = &mut self.bodies[index];
        body.apply(&field);

        match field {
            BodyField::Color(color) => self.pending.push(VisualChange::ColorChanged { id, color }),
            BodyField::Radius(radius) => {
                self.pending.push(VisualChange::GeometryInvalidated { id, radius })
            }
            _ => {}
        }
        Ok(())
    }

    /// Deletes a body together with its trail
    ///
    /// Bodies after it move down one index.
    pub fn remove(&mut self, id: BodyId) -> Result<Body> {
        let Some(index) = self.index_of(id) else {
            warn!("removal of {}: selected object not found", id);
            return Err(SimError::NotFound(id));
        };

        let body = self.bodies.remove(index);
        debug!("{} {} removed from index {}", body.kind, id, index);
        self.pending.push(VisualChange::Removed { id });
        Ok(body)
    }

    /// Removes every body
    pub fn clear(&mut self) {
        for body in self.bodies.drain(..) {
            self.pending.push(VisualChange::Removed { id: body.id });
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// All bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_at(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn id_at(&self, index: usize) -> Option<BodyId> {
        self.bodies.get(index).map(Body::id)
    }

    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    // ---- run state ------------------------------------------------------

    /// Flips between running and paused, returning the new state
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        debug!("simulation {}", if self.running { "running" } else { "paused" });
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ---- integration ----------------------------------------------------

    /// Advances by the configured time step
    pub fn step(&mut self) -> Result<StepOutcome> {
        self.step_by(self.config.time_step)
    }

    /// Advances by an explicit `dt` supplied by the host loop
    ///
    /// Semi-implicit Euler: all accelerations come from the positions at the
    /// start of the step, then each body's velocity is kicked and its position
    /// drifted with the new velocity, and the new position is appended to its
    /// trail.
    ///
    /// Nothing happens while paused. If any body ends the step with a
    /// non-finite position or velocity the step is still applied and
    /// [`SimError::NumericDivergence`] names the affected bodies.
    pub fn step_by(&mut self, dt: f64) -> Result<StepOutcome> {
        ensure_positive("time step", dt)?;
        if !self.running {
            return Ok(StepOutcome::Paused);
        }

        let positions: Vec<Vector3> = self.bodies.iter().map(|b| b.position).collect();
        let masses: Vec<f64> = self.bodies.iter().map(|b| b.mass).collect();
        let accelerations =
            pairwise_accelerations(&positions, &masses, self.config.gravitational_constant);

        let record_trails = self.config.record_trails;
        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            body.velocity += acceleration * dt;
            body.position += body.velocity * dt;
            if record_trails {
                body.trail.push(body.position);
            }
        }

        self.steps_taken += 1;
        self.elapsed += dt;
        trace!("step {} advanced {} bodies by {}", self.steps_taken, self.bodies.len(), dt);

        let diverged: Vec<BodyId> = self
            .bodies
            .iter()
            .filter(|b| !(is_finite_vector(b.position) && is_finite_vector(b.velocity)))
            .map(Body::id)
            .collect();
        if !diverged.is_empty() {
            warn!("step {}: non-finite state in {:?}", self.steps_taken, diverged);
            return Err(SimError::NumericDivergence { bodies: diverged });
        }

        Ok(StepOutcome::Advanced)
    }

    /// Number of steps applied while running
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Simulated time accumulated over all applied steps
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    // ---- diagnostics ----------------------------------------------------

    pub fn center_of_mass(&self) -> Vector3 {
        let mut total_mass = 0.0;
        let mut com = Vector3::ZERO;

        for body in &self.bodies {
            com += body.position * body.mass;
            total_mass += body.mass;
        }

        if total_mass > 0.0 {
            com / total_mass
        } else {
            Vector3::ZERO
        }
    }

    pub fn total_momentum(&self) -> Vector3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Kinetic plus gravitational potential energy
    pub fn total_energy(&self) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(Body::kinetic_energy).sum();
        let positions: Vec<Vector3> = self.bodies.iter().map(|b| b.position).collect();
        let masses: Vec<f64> = self.bodies.iter().map(|b| b.mass).collect();
        kinetic + potential_energy(&positions, &masses, self.config.gravitational_constant)
    }

    // ---- render bridge --------------------------------------------------

    /// Snapshot of every body in registry order
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(BodySnapshot::from).collect()
    }

    /// Takes the visual changes queued since the last call
    pub fn drain_visual_changes(&mut self) -> Vec<VisualChange> {
        std::mem::take(&mut self.pending)
    }

    /// Feeds pending changes and the current frame to a renderer
    pub fn present(&mut self, bridge: &mut dyn RenderBridge) {
        for change in self.drain_visual_changes() {
            bridge.apply(&change);
        }
        bridge.draw(&self.snapshot());
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::with_validated(SimulationConfig::default())
    }
}
