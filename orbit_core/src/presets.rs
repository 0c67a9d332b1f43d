//! Ready-made scenes built through the public `create` path

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body::{BodyId, BodyParams, Color};
use crate::engine::SimulationEngine;
use crate::error::Result;
use crate::vector::Vector3;

/// Scenes a host can load by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Nothing; bodies are added by hand
    Empty,
    BinaryStar,
    #[default]
    SolarSystem,
}

impl Preset {
    /// Clears the engine and loads this scene
    pub fn load(self, engine: &mut SimulationEngine, seed: u64) -> Result<Vec<BodyId>> {
        engine.clear();
        match self {
            Preset::Empty => Ok(Vec::new()),
            Preset::BinaryStar => binary_star(engine),
            Preset::SolarSystem => solar_system(engine, seed),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Empty => f.write_str("empty"),
            Preset::BinaryStar => f.write_str("binary"),
            Preset::SolarSystem => f.write_str("solar"),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Preset::Empty),
            "binary" | "binary-star" => Ok(Preset::BinaryStar),
            "solar" | "solar-system" => Ok(Preset::SolarSystem),
            other => Err(format!("unknown preset {other:?} (expected empty, binary or solar)")),
        }
    }
}

/// Speed of a circular orbit of radius `distance` around `central_mass`
pub fn circular_orbit_speed(g: f64, central_mass: f64, distance: f64) -> f64 {
    (g * central_mass / distance).sqrt()
}

/// Two equal stars circling their common centre of mass in the XZ plane
pub fn binary_star(engine: &mut SimulationEngine) -> Result<Vec<BodyId>> {
    let g = engine.config().gravitational_constant;
    let mass = 1000.0;
    let separation = 10.0;
    // Each star orbits the barycentre at half the separation, pulled by the other
    let speed = (g * mass / (2.0 * separation)).sqrt();

    let a = engine.create(
        BodyParams::star(mass, 1.0)
            .with_name("Alpha")
            .with_color(Color::rgb(0xff, 0xe0, 0x80))
            .at(Vector3::new(-separation / 2.0, 0.0, 0.0))
            .moving(Vector3::new(0.0, 0.0, -speed)),
    )?;
    let b = engine.create(
        BodyParams::star(mass, 1.0)
            .with_name("Beta")
            .with_color(Color::rgb(0x80, 0xc0, 0xff))
            .at(Vector3::new(separation / 2.0, 0.0, 0.0))
            .moving(Vector3::new(0.0, 0.0, speed)),
    )?;
    Ok(vec![a, b])
}

/// A central star with six planets at seeded random phase angles
///
/// The same seed always yields the same scene.
pub fn solar_system(engine: &mut SimulationEngine, seed: u64) -> Result<Vec<BodyId>> {
    let g = engine.config().gravitational_constant;
    let sun_mass = 10000.0;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ids = Vec::with_capacity(7);

    ids.push(engine.create(
        BodyParams::star(sun_mass, 2.0)
            .with_name("Sun")
            .with_color(Color::rgb(0xff, 0xe6, 0x99)),
    )?);

    let planet_data = [
        (8.0, 1.0, 0.3, Color::rgb(0x99, 0x99, 0x99), "Mercury"),
        (12.0, 2.5, 0.5, Color::rgb(0xe6, 0xb3, 0x80), "Venus"),
        (16.0, 3.0, 0.5, Color::rgb(0x33, 0x66, 0xcc), "Earth"),
        (22.0, 1.5, 0.4, Color::rgb(0xcc, 0x4d, 0x33), "Mars"),
        (35.0, 30.0, 1.2, Color::rgb(0xe6, 0xb3, 0x80), "Jupiter"),
        (50.0, 20.0, 1.0, Color::rgb(0xe6, 0xcc, 0x99), "Saturn"),
    ];

    for (distance, mass, radius, color, name) in planet_data {
        let angle: f64 = rng.gen::<f64>() * TAU;
        let speed = circular_orbit_speed(g, sun_mass, distance);

        let position = Vector3::new(angle.cos() * distance, 0.0, angle.sin() * distance);
        let velocity = Vector3::new(-angle.sin() * speed, 0.0, angle.cos() * speed);

        ids.push(engine.create(
            BodyParams::planet(mass, radius)
                .with_name(name)
                .with_color(color)
                .at(position)
                .moving(velocity),
        )?);
    }

    Ok(ids)
}
