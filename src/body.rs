use nalgebra::{Point2, Vector2};

use crate::config::PhysicsConfig;
use crate::error::{SimError, SimResult};
use crate::trails::Trail;
use crate::{tools, Float};

/// The primary is the body other bodies measure their distance to, and the
/// one whose trail is never drawn. Physically it is just another mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Orbiting,
}

#[derive(new, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    pub position: Point2<Float>,
    pub velocity: Vector2<Float>,
    mass: Float,
    pub radius: f64,    // Pixels. Not tied to mass
    pub color: Rgb,
    role: Role,
    trail: Trail,
    distance_to_primary: Float,
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        position: Point2<Float>,
        velocity: Vector2<Float>,
        mass: Float,
        radius: f64,
        color: Rgb,
        role: Role,
    ) -> SimResult<Body> {
        let name = name.into();
        // Also rejects NaN
        if !(mass > 0.0) {
            return Err(SimError::NonPositiveMass { name, mass });
        }

        Ok(Body {
            name,
            position,
            velocity,
            mass,
            radius,
            color,
            role,
            trail: Trail::unbounded(),
            distance_to_primary: 0.0,
        })
    }

    pub fn with_trail(mut self, trail: Trail) -> Self {
        self.trail = trail;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn mass(&self) -> Float {
        self.mass
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.role == Role::Primary
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Distance to the primary as of the last force evaluation against it.
    /// Zero until then, and forever zero if there is no primary.
    #[inline]
    pub fn distance_to_primary(&self) -> Float {
        self.distance_to_primary
    }

    /// Gravitational pull of `other` on `self`, pointing from `self` towards
    /// `other`. Records the separation if `other` is the primary.
    ///
    /// Coincident positions give an infinite magnitude and a NaN component,
    /// which then poisons velocity and position. That is left to propagate.
    pub fn attraction(&mut self, other: &Body, physics: &PhysicsConfig) -> Vector2<Float> {
        let r = other.position - self.position;
        let distance = r.norm();

        if other.is_primary() {
            self.distance_to_primary = distance;
        }

        // F = GmM/r^2
        let force = physics.grav_const * self.mass * other.mass / (distance * distance);
        tools::get_components(force, tools::get_angle(&r))
    }

    /// Advances this body by one timestep against every body in `others`.
    /// `others` must not contain `self`.
    ///
    /// Semi-implicit Euler: the velocity is kicked first, then the position
    /// is drifted with the new velocity.
    pub fn update<'a>(&mut self, others: impl IntoIterator<Item = &'a Body>, physics: &PhysicsConfig) {
        let mut resultant_force = Vector2::zeros();
        for other in others {
            resultant_force += self.attraction(other, physics);
        }

        self.apply_force(&resultant_force, physics.timestep);
        self.update_position(physics.timestep);
        self.trail.push(self.position);
    }

    #[inline]
    fn apply_force(&mut self, force: &Vector2<Float>, dt: Float) {
        // dv = F dt/m
        self.velocity += force * (dt / self.mass);
    }

    #[inline]
    fn update_position(&mut self, dt: Float) {
        self.position += self.velocity * dt;
    }
}

/// Updates `bodies[index]` against every other body in the slice, as they
/// currently are. Earlier bodies that were already stepped this tick are seen
/// at their new positions.
pub fn step(bodies: &mut [Body], index: usize, physics: &PhysicsConfig) {
    if index >= bodies.len() {
        return
    }
    let (before, rest) = bodies.split_at_mut(index);
    if let Some((body, after)) = rest.split_first_mut() {
        body.update(before.iter().chain(after.iter()), physics);
    }
}
