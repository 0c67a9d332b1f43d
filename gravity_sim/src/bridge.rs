//! Headless stand-in for the GPU renderer
//!
//! Builds the same per-frame instance and trail vertex arrays a wgpu renderer
//! would upload, without a window. Sphere meshes are tracked per body so the
//! engine's visual change notifications have something real to act on.

use std::collections::HashMap;

use log::{debug, trace};
use orbit_core::{BodyId, BodySnapshot, Color, RenderBridge, VisualChange};

/// Segments per sphere axis, matching the interactive view
const SPHERE_SEGMENTS: u32 = 32;

/// Instance data for one body sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

/// Trail vertex with alpha fading toward the oldest point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Sphere geometry built for a body
#[derive(Debug, Clone, PartialEq)]
struct SphereMesh {
    radius: f64,
    color: Color,
    /// Set once the first snapshot has filled in radius and colour
    built: bool,
    /// Times the geometry was rebuilt after a radius change
    rebuilds: u32,
}

#[derive(Default)]
pub struct HeadlessRenderer {
    meshes: HashMap<BodyId, SphereMesh>,
    instances: Vec<ParticleInstance>,
    trail_vertices: Vec<TrailVertex>,
    trail_ranges: Vec<(u32, u32)>,
    frames: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn trail_vertex_count(&self) -> usize {
        self.trail_vertices.len()
    }

    /// `(first vertex, vertex count)` of every trail line drawn last frame
    pub fn trail_ranges(&self) -> &[(u32, u32)] {
        &self.trail_ranges
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBridge for HeadlessRenderer {
    fn apply(&mut self, change: &VisualChange) {
        match change {
            VisualChange::Created { id } => {
                // Radius and colour arrive with the first snapshot
                self.meshes.insert(
                    *id,
                    SphereMesh {
                        radius: 0.0,
                        color: Color::default(),
                        built: false,
                        rebuilds: 0,
                    },
                );
                debug!("{}x{} sphere mesh created for {}", SPHERE_SEGMENTS, SPHERE_SEGMENTS, id);
            }
            VisualChange::Removed { id } => {
                self.meshes.remove(id);
                debug!("mesh and trail for {} removed from scene", id);
            }
            VisualChange::ColorChanged { id, color } => {
                if let Some(mesh) = self.meshes.get_mut(id) {
                    mesh.color = *color;
                    debug!("material and trail of {} set to {}", id, color);
                }
            }
            VisualChange::GeometryInvalidated { id, radius } => {
                if let Some(mesh) = self.meshes.get_mut(id) {
                    mesh.radius = *radius;
                    mesh.rebuilds += 1;
                    debug!("sphere geometry of {} rebuilt for radius {}", id, radius);
                }
            }
        }
    }

    fn draw(&mut self, bodies: &[BodySnapshot]) {
        self.instances.clear();
        self.trail_vertices.clear();
        self.trail_ranges.clear();

        for body in bodies {
            // Later edits reach the mesh only through `apply`
            if let Some(mesh) = self.meshes.get_mut(&body.id) {
                if !mesh.built {
                    mesh.radius = body.radius;
                    mesh.color = body.color;
                    mesh.built = true;
                }
            }

            let color = body.color.to_rgba();
            self.instances.push(ParticleInstance {
                position: body.position.as_vec3().to_array(),
                radius: body.radius as f32,
                color,
            });

            if body.trail.len() < 2 {
                continue;
            }
            let start = self.trail_vertices.len() as u32;
            let trail_len = body.trail.len();
            for (i, point) in body.trail.iter().enumerate() {
                let alpha = (i as f32 / trail_len as f32) * 0.6;
                self.trail_vertices.push(TrailVertex {
                    position: point.as_vec3().to_array(),
                    color: [color[0], color[1], color[2], alpha],
                });
            }
            self.trail_ranges.push((start, trail_len as u32));
        }

        self.frames += 1;
        trace!(
            "frame {}: {} instances, {} trail vertices",
            self.frames,
            self.instances.len(),
            self.trail_vertices.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::{BodyField, BodyParams, SimulationEngine, Vector3};

    #[test]
    fn test_meshes_follow_registry() {
        let mut engine = SimulationEngine::default();
        let mut renderer = HeadlessRenderer::new();
        let a = engine.create(BodyParams::default()).unwrap();
        let b = engine.create(BodyParams::default()).unwrap();
        engine.present(&mut renderer);
        assert_eq!(renderer.mesh_count(), 2);
        assert_eq!(renderer.instances().len(), 2);

        engine.remove(a).unwrap();
        engine.update(b, BodyField::Radius(2.5)).unwrap();
        engine.present(&mut renderer);

        assert_eq!(renderer.mesh_count(), 1);
        assert_eq!(renderer.meshes[&b].rebuilds, 1);
        assert_eq!(renderer.instances()[0].radius, 2.5);
        assert_eq!(renderer.frames(), 2);
    }

    #[test]
    fn test_trail_vertices_fade_and_share_body_color() {
        let mut engine = SimulationEngine::default();
        let mut renderer = HeadlessRenderer::new();
        let id = engine
            .create(BodyParams::default().moving(Vector3::new(1.0, 0.0, 0.0)))
            .unwrap();
        engine.toggle_running();
        for _ in 0..4 {
            engine.step().unwrap();
        }
        engine.update(id, BodyField::Color(Color::WHITE)).unwrap();
        engine.present(&mut renderer);

        assert_eq!(renderer.trail_ranges(), &[(0, 4)]);
        assert_eq!(renderer.trail_vertex_count(), 4);
        let first = renderer.trail_vertices[0];
        let last = renderer.trail_vertices[3];
        assert_eq!(first.color[3], 0.0);
        assert!(last.color[3] > first.color[3]);
        assert_eq!(&last.color[..3], &[1.0, 1.0, 1.0]);
        assert_eq!(renderer.meshes[&id].color, Color::WHITE);
    }

    #[test]
    fn test_mesh_changes_only_through_visual_changes() {
        let mut engine = SimulationEngine::default();
        let mut renderer = HeadlessRenderer::new();
        let id = engine
            .create(BodyParams::default().with_radius(1.5).with_color(Color::WHITE))
            .unwrap();
        engine.present(&mut renderer);
        assert_eq!(renderer.meshes[&id].radius, 1.5);
        assert_eq!(renderer.meshes[&id].color, Color::WHITE);

        // A frame drawn from a snapshot alone leaves the built mesh untouched
        let mut snapshot = engine.snapshot();
        snapshot[0].radius = 9.0;
        snapshot[0].color = Color::RED;
        renderer.draw(&snapshot);
        assert_eq!(renderer.meshes[&id].radius, 1.5);
        assert_eq!(renderer.meshes[&id].color, Color::WHITE);
        assert_eq!(renderer.meshes[&id].rebuilds, 0);

        engine.update(id, BodyField::Radius(4.0)).unwrap();
        engine.update(id, BodyField::Color(Color::RED)).unwrap();
        engine.present(&mut renderer);
        assert_eq!(renderer.meshes[&id].radius, 4.0);
        assert_eq!(renderer.meshes[&id].color, Color::RED);
        assert_eq!(renderer.meshes[&id].rebuilds, 1);
    }
}
