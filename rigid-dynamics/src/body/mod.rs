// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Rigid bodies
//!
//! A [`Body`] owns the kinematic state (position, velocity, acceleration) and
//! dynamic state (mass, accumulated force, material) of a single sphere. It
//! knows how to accumulate forces, take impulses and advance itself by one
//! timestep; everything involving more than one body lives in the world.
//!
//! # Immovable bodies
//!
//! Immovability has a single source of truth: the inverse mass. It is derived
//! whenever mass or kind changes and is zero for static bodies and for any
//! body whose mass is not a positive finite number. [`Body::is_static`] reads
//! it, so a "dynamic" body with zero mass is treated exactly like a static one.

mod handle;
mod material;

pub use handle::BodyHandle;
pub use material::{Material, DEFAULT_DENSITY};

pub(crate) use material::clamp_unit;

use crate::vector::Vec3;

/// Default sphere radius for new bodies (meters)
pub const DEFAULT_RADIUS: f64 = 0.5;

/// Default per-step velocity retention factor
pub const DEFAULT_DAMPING: f64 = 0.98;

/// Whether a body takes part in integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    /// Integrated, affected by gravity, forces and impulses
    #[default]
    Dynamic,
    /// Never moves on its own; can still be repositioned manually
    Static,
}

/// A single rigid sphere
///
/// # Examples
///
/// ```
/// use rigid_dynamics::{Body, Vec3};
///
/// let mut body = Body::new(Vec3::new(0.0, 10.0, 0.0), 2.0, false);
/// assert_eq!(body.inverse_mass(), 0.5);
///
/// body.apply_force(Vec3::new(0.0, -19.62, 0.0));
/// body.update(1.0 / 60.0);
/// assert!(body.velocity().y < 0.0);
/// assert_eq!(body.accumulated_force(), Vec3::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    accumulated_force: Vec3,
    mass: f64,
    inverse_mass: f64,
    kind: BodyKind,
    material: Material,
    radius: f64,
    damping: f64,
}

impl Body {
    /// Create a body at `position` with the given mass
    ///
    /// A non-positive or non-finite mass is accepted and makes the body
    /// immovable, as does `is_static = true`.
    pub fn new(position: Vec3, mass: f64, is_static: bool) -> Self {
        let mut body = Body {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            accumulated_force: Vec3::ZERO,
            mass: sanitize_mass(mass),
            inverse_mass: 0.0,
            kind: if is_static { BodyKind::Static } else { BodyKind::Dynamic },
            material: Material::default(),
            radius: DEFAULT_RADIUS,
            damping: DEFAULT_DAMPING,
        };
        body.refresh_inverse_mass();
        body
    }

    /// Create a static body at `position`
    pub fn new_static(position: Vec3) -> Self {
        Self::new(position, 0.0, true)
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the sphere radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.set_radius(radius);
        self
    }

    /// Copy restitution, friction and density from a material
    pub fn with_material(mut self, material: Material) -> Self {
        self.apply_material(material);
        self
    }

    /// Set the per-step velocity retention factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.set_damping(damping);
        self
    }

    fn refresh_inverse_mass(&mut self) {
        self.inverse_mass = match self.kind {
            BodyKind::Dynamic if self.mass > 0.0 => 1.0 / self.mass,
            _ => 0.0,
        };
    }

    /// Accumulate a force to be applied on the next [`Body::update`]
    ///
    /// No-op for immovable bodies.
    pub fn apply_force(&mut self, force: Vec3) {
        if self.is_static() {
            return;
        }
        self.accumulated_force += force;
    }

    /// Apply an instantaneous change in momentum
    ///
    /// No-op for immovable bodies.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if self.is_static() {
            return;
        }
        self.velocity += impulse * self.inverse_mass;
    }

    /// Advance the body by `dt` seconds using semi-implicit Euler
    ///
    /// Velocity is damped, then updated from the accumulated force, then used
    /// to move the position. The accumulated force is cleared afterwards.
    pub fn update(&mut self, dt: f64) {
        if self.is_static() {
            return;
        }

        self.velocity *= self.damping;
        self.acceleration = self.accumulated_force * self.inverse_mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.accumulated_force = Vec3::ZERO;
    }

    /// Discard any force accumulated since the last update
    pub fn clear_forces(&mut self) {
        self.accumulated_force = Vec3::ZERO;
    }

    /// Kinetic energy `½ m |v|²`, zero for immovable bodies
    pub fn kinetic_energy(&self) -> f64 {
        if self.is_static() {
            return 0.0;
        }
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Linear momentum `m v`, zero for immovable bodies
    pub fn momentum(&self) -> Vec3 {
        if self.is_static() {
            return Vec3::ZERO;
        }
        self.velocity * self.mass
    }

    /// Check that position, velocity and accumulated force are all finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid() && self.accumulated_force.is_valid()
    }

    /// Get the position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Get the velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Set the velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Acceleration computed during the last update
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Force accumulated since the last update
    pub fn accumulated_force(&self) -> Vec3 {
        self.accumulated_force
    }

    /// Get the mass
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Set the mass and recompute the inverse mass
    ///
    /// Non-positive or non-finite values make the body immovable.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = sanitize_mass(mass);
        self.refresh_inverse_mass();
    }

    /// Get the inverse mass, zero for immovable bodies
    pub fn inverse_mass(&self) -> f64 {
        self.inverse_mass
    }

    /// Get the declared body kind
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Whether the body is immovable (static, or degenerate mass)
    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Mark the body static or dynamic
    ///
    /// Turning a body static also drops its velocity and pending forces.
    pub fn set_static(&mut self, is_static: bool) {
        self.kind = if is_static { BodyKind::Static } else { BodyKind::Dynamic };
        self.refresh_inverse_mass();
        if is_static {
            self.velocity = Vec3::ZERO;
            self.acceleration = Vec3::ZERO;
            self.accumulated_force = Vec3::ZERO;
        }
    }

    /// Get the restitution coefficient
    pub fn restitution(&self) -> f64 {
        self.material.restitution
    }

    /// Set the restitution coefficient, clamped into `[0, 1]`
    pub fn set_restitution(&mut self, restitution: f64) {
        self.material.restitution = clamp_unit(restitution);
    }

    /// Get the friction coefficient
    pub fn friction(&self) -> f64 {
        self.material.friction
    }

    /// Set the friction coefficient, clamped into `[0, 1]`
    pub fn set_friction(&mut self, friction: f64) {
        self.material.friction = clamp_unit(friction);
    }

    /// Current surface material
    pub fn material(&self) -> Material {
        self.material
    }

    /// Copy restitution, friction and density from a material
    ///
    /// The mass is left alone; use [`Material::sphere_mass`] to derive one.
    pub fn apply_material(&mut self, material: Material) {
        self.material = material.sanitized();
    }

    /// Get the sphere radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the sphere radius; negative or non-finite values become zero
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = sanitize_radius(radius);
    }

    /// Get the per-step velocity retention factor
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Set the per-step velocity retention factor, clamped into `[0, 1]`
    ///
    /// `1.0` disables damping entirely.
    pub fn set_damping(&mut self, damping: f64) {
        self.damping = clamp_unit(damping);
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::new(Vec3::ZERO, 1.0, false)
    }
}

/// Clamp a sphere radius to a finite non-negative value
///
/// Zero-radius bodies never overlap anything, so a bad radius turns contact
/// into a no-op instead of producing infinite penetration.
pub(crate) fn sanitize_radius(radius: f64) -> f64 {
    if radius.is_finite() {
        radius.max(0.0)
    } else {
        0.0
    }
}

fn sanitize_mass(mass: f64) -> f64 {
    if mass.is_finite() && mass > 0.0 {
        mass
    } else {
        0.0
    }
}
