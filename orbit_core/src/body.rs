//! Celestial bodies: identity, physical state and trail

use std::fmt;
use std::str::FromStr;

use crate::error::SimError;
use crate::trail::Trail;
use crate::vector::Vector3;

/// Stable handle for a body in the engine registry
///
/// Ids are handed out in increasing order and never reused, so a handle held
/// across a removal either still names the same body or reports `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Celestial body types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BodyKind {
    #[default]
    Planet,
    Star,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Planet => f.write_str("planet"),
            BodyKind::Star => f.write_str("star"),
        }
    }
}

impl FromStr for BodyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planet" => Ok(BodyKind::Planet),
            "star" => Ok(BodyKind::Star),
            other => Err(format!("unknown body kind {other:?}")),
        }
    }
}

/// 8-bit RGB colour shared by a body's sphere and its trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand; the leading `#` is optional
    pub fn from_hex(hex: &str) -> Result<Self, SimError> {
        let invalid = || SimError::InvalidColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear 0..1 RGBA with full opacity, the layout GPU instance buffers use
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

/// Everything needed to create a body
///
/// Defaults match the creation form of the sandbox: a red planet of radius 1
/// and mass 100, unnamed, at rest at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParams {
    pub kind: BodyKind,
    pub color: Color,
    pub radius: f64,
    pub mass: f64,
    pub name: String,
    pub position: Vector3,
    pub velocity: Vector3,
}

impl BodyParams {
    pub fn new(kind: BodyKind, mass: f64, radius: f64) -> Self {
        Self {
            kind,
            mass,
            radius,
            ..Self::default()
        }
    }

    pub fn planet(mass: f64, radius: f64) -> Self {
        Self::new(BodyKind::Planet, mass, radius)
    }

    pub fn star(mass: f64, radius: f64) -> Self {
        Self::new(BodyKind::Star, mass, radius)
    }

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn at(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn moving(mut self, velocity: Vector3) -> Self {
        self.velocity = velocity;
        self
    }
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            kind: BodyKind::Planet,
            color: Color::RED,
            radius: 1.0,
            mass: 100.0,
            name: String::new(),
            position: Vector3::ZERO,
            velocity: Vector3::ZERO,
        }
    }
}

/// A simulated body with its owned trail
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    pub color: Color,
    pub position: Vector3,
    pub velocity: Vector3,
    pub mass: f64,
    pub radius: f64,
    pub(crate) trail: Trail,
}

impl Body {
    pub(crate) fn from_params(id: BodyId, params: BodyParams, trail: Trail) -> Self {
        Self {
            id,
            name: params.name,
            kind: params.kind,
            color: params.color,
            position: params.position,
            velocity: params.velocity,
            mass: params.mass,
            radius: params.radius,
            trail,
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Name for display, falling back the way the object list does
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed Object"
        } else {
            &self.name
        }
    }

    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).length()
    }

    pub(crate) fn apply(&mut self, field: &BodyField) {
        match field {
            BodyField::Color(color) => self.color = *color,
            BodyField::Radius(radius) => self.radius = *radius,
            BodyField::Mass(mass) => self.mass = *mass,
            BodyField::Name(name) => self.name.clone_from(name),
            BodyField::PositionX(v) => self.position.x = *v,
            BodyField::PositionY(v) => self.position.y = *v,
            BodyField::PositionZ(v) => self.position.z = *v,
            BodyField::VelocityX(v) => self.velocity.x = *v,
            BodyField::VelocityY(v) => self.velocity.y = *v,
            BodyField::VelocityZ(v) => self.velocity.z = *v,
        }
    }
}

/// A single-field edit coming from the properties panel
#[derive(Debug, Clone, PartialEq)]
pub enum BodyField {
    Color(Color),
    Radius(f64),
    Mass(f64),
    Name(String),
    PositionX(f64),
    PositionY(f64),
    PositionZ(f64),
    VelocityX(f64),
    VelocityY(f64),
    VelocityZ(f64),
}

impl BodyField {
    /// Field name as used in log output
    pub fn key(&self) -> &'static str {
        match self {
            BodyField::Color(_) => "color",
            BodyField::Radius(_) => "radius",
            BodyField::Mass(_) => "mass",
            BodyField::Name(_) => "name",
            BodyField::PositionX(_) => "positionX",
            BodyField::PositionY(_) => "positionY",
            BodyField::PositionZ(_) => "positionZ",
            BodyField::VelocityX(_) => "velocityX",
            BodyField::VelocityY(_) => "velocityY",
            BodyField::VelocityZ(_) => "velocityZ",
        }
    }
}
