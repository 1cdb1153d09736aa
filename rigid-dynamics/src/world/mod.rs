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
//! Simulation world
//!
//! The [`World`] exclusively owns every body and advances them together.
//! Each call to [`World::update`] runs, per sub-step:
//!
//! 1. **Gravity**: every movable body accumulates `gravity * mass`.
//! 2. **Integration**: every body advances with semi-implicit Euler.
//! 3. **Ground contact**: bodies below the ground plane are clamped and bounced.
//! 4. **Pairwise contact**: all pairs `(i, j)` with `i < j` in registration
//!    order are tested and resolved.
//!
//! Steps 1 and 2 touch each body independently and run on Rayon's thread
//! pool when the `parallel` feature is enabled. Steps 3 and 4 are always
//! sequential, so resolution order only depends on registration order.
//!
//! # Handles
//!
//! Bodies are addressed by [`BodyHandle`]s. A handle stops resolving as soon
//! as its body is destroyed or the world is cleared; accessors then return
//! `None` or `false` rather than touching another body.

pub mod collision;
mod config;
mod storage;

pub use config::{WorldConfig, STANDARD_GRAVITY};

use crate::body::{Body, BodyHandle, Material};
use crate::error::StepError;
use crate::vector::Vec3;
use storage::BodyArena;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counters describing what a single [`World::update`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Number of sub-steps executed
    pub sub_steps: u32,
    /// Body integrations performed, summed over sub-steps
    pub integrated: usize,
    /// Ground contacts resolved, summed over sub-steps
    pub ground_contacts: usize,
    /// Overlapping body pairs found, summed over sub-steps
    pub pair_contacts: usize,
    /// Pair contacts that received a non-zero normal impulse
    pub impulses: usize,
    /// Bodies holding non-finite state after the step
    pub invalid_bodies: usize,
}

/// Container and stepper for rigid bodies
///
/// # Example
///
/// ```
/// use rigid_dynamics::{Vec3, World};
///
/// let mut world = World::new();
/// let ball = world.create_body(Vec3::new(0.0, 10.0, 0.0), 1.0, false);
/// let floor = world.create_body(Vec3::ZERO, 0.0, true);
///
/// for _ in 0..60 {
///     world.update(1.0 / 60.0).unwrap();
/// }
///
/// assert!(world.position(ball).unwrap().y < 10.0);
/// assert_eq!(world.position(floor), Some(Vec3::ZERO));
/// ```
#[derive(Debug, Clone)]
pub struct World {
    bodies: BodyArena,
    config: WorldConfig,
    enabled: bool,
}

impl World {
    /// Create a world with default configuration (Earth gravity, ground at y = 0)
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Create a world with the given gravity and otherwise default configuration
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self::with_config(WorldConfig::new(gravity))
    }

    /// Create a world with a custom configuration
    pub fn with_config(config: WorldConfig) -> Self {
        log::debug!(
            "world created: gravity=({}, {}, {}), sub_steps={}",
            config.gravity.x,
            config.gravity.y,
            config.gravity.z,
            config.sub_steps
        );
        World {
            bodies: BodyArena::new(),
            config,
            enabled: true,
        }
    }

    /// Create and register a body, returning its handle
    ///
    /// Radius, damping and material come from the world configuration. A
    /// non-positive mass yields an immovable body.
    pub fn create_body(&mut self, position: Vec3, mass: f64, is_static: bool) -> BodyHandle {
        let material = self.config.default_material;
        self.create_body_with_material(position, mass, is_static, material)
    }

    /// Create and register a body with an explicit surface material
    pub fn create_body_with_material(
        &mut self,
        position: Vec3,
        mass: f64,
        is_static: bool,
        material: Material,
    ) -> BodyHandle {
        let body = Body::new(position, mass, is_static)
            .with_radius(self.config.default_radius)
            .with_damping(self.config.damping)
            .with_material(material);
        self.add_body(body)
    }

    /// Create a dynamic solid sphere whose mass follows from its material
    ///
    /// The mass is `4/3 π r³ ρ` with `ρ = material.density`. A degenerate
    /// radius or density gives zero mass, so the sphere is immovable.
    ///
    /// ```
    /// use rigid_dynamics::{Material, Vec3, World};
    ///
    /// let mut world = World::new();
    /// let ball = world.create_sphere(Vec3::new(0.0, 2.0, 0.0), 0.1, Material::STEEL);
    ///
    /// let body = world.body(ball).unwrap();
    /// assert_eq!(body.radius(), 0.1);
    /// assert!((body.mass() - Material::STEEL.sphere_mass(0.1)).abs() < 1e-12);
    /// ```
    pub fn create_sphere(&mut self, position: Vec3, radius: f64, material: Material) -> BodyHandle {
        let body = Body::new(position, material.sphere_mass(radius), false)
            .with_radius(radius)
            .with_damping(self.config.damping)
            .with_material(material);
        self.add_body(body)
    }

    /// Register a fully configured body, returning its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let mass = body.mass();
        let is_static = body.is_static();
        let handle = self.bodies.insert(body);
        log::debug!("{} created: mass={}, static={}", handle, mass, is_static);
        handle
    }

    /// Remove a body
    ///
    /// Returns `false` if the handle is stale or unknown.
    pub fn destroy_body(&mut self, handle: BodyHandle) -> bool {
        let removed = self.bodies.remove(handle).is_some();
        if removed {
            log::debug!("{} destroyed", handle);
        }
        removed
    }

    /// Remove every body; all outstanding handles become invalid
    pub fn clear(&mut self) {
        let count = self.bodies.len();
        self.bodies.clear();
        log::debug!("world cleared ({} bodies removed)", count);
    }

    /// Check whether a handle still refers to a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    /// Borrow a body
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    /// Mutably borrow a body
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Accumulate a force on a body for the next update
    ///
    /// Returns `false` for an invalid handle. Forces on immovable bodies are
    /// accepted and ignored.
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec3) -> bool {
        self.with_body(handle, |body| body.apply_force(force))
    }

    /// Apply an impulse to a body
    ///
    /// Returns `false` for an invalid handle.
    pub fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec3) -> bool {
        self.with_body(handle, |body| body.apply_impulse(impulse))
    }

    /// Get a body's position
    pub fn position(&self, handle: BodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(Body::position)
    }

    /// Set a body's position
    pub fn set_position(&mut self, handle: BodyHandle, position: Vec3) -> bool {
        self.with_body(handle, |body| body.set_position(position))
    }

    /// Get a body's velocity
    pub fn velocity(&self, handle: BodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(Body::velocity)
    }

    /// Set a body's velocity
    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec3) -> bool {
        self.with_body(handle, |body| body.set_velocity(velocity))
    }

    fn with_body(&mut self, handle: BodyHandle, f: impl FnOnce(&mut Body)) -> bool {
        match self.bodies.get_mut(handle) {
            Some(body) => {
                f(body);
                true
            }
            None => false,
        }
    }

    /// Get the gravity vector
    pub fn gravity(&self) -> Vec3 {
        self.config.gravity
    }

    /// Set the gravity vector
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.config.gravity = gravity;
    }

    /// Whether [`World::update`] does anything
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable stepping
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Get the configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Mutably borrow the configuration
    pub fn config_mut(&mut self) -> &mut WorldConfig {
        &mut self.config
    }

    /// Number of live bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the world holds no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over live bodies in registration order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies
            .handles()
            .iter()
            .copied()
            .zip(self.bodies.bodies().iter())
    }

    /// Handles of live bodies in registration order
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.bodies.handles().iter().copied()
    }

    /// Sum of kinetic energy over all bodies
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.bodies().iter().map(Body::kinetic_energy).sum()
    }

    /// Sum of linear momentum over all bodies
    pub fn total_momentum(&self) -> Vec3 {
        self.bodies
            .bodies()
            .iter()
            .fold(Vec3::ZERO, |acc, body| acc + body.momentum())
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// A disabled world returns empty stats without touching any body. A
    /// zero, negative or non-finite `dt` is rejected with
    /// [`StepError::InvalidTimestep`] and leaves the world unchanged.
    pub fn update(&mut self, dt: f64) -> Result<StepStats, StepError> {
        if !(dt > 0.0 && dt.is_finite()) {
            if self.config.warn_on_invalid {
                log::warn!("rejected timestep {}", dt);
            }
            return Err(StepError::InvalidTimestep(dt));
        }

        if !self.enabled {
            return Ok(StepStats::default());
        }

        if dt > self.config.max_timestep_warning && self.config.warn_on_invalid {
            log::warn!(
                "timestep {:.4}s exceeds {:.4}s and may be unstable",
                dt,
                self.config.max_timestep_warning
            );
        }

        let sub_steps = self.config.sub_steps.max(1);
        let sub_dt = dt / f64::from(sub_steps);
        let mut stats = StepStats {
            sub_steps,
            ..Default::default()
        };

        for _ in 0..sub_steps {
            self.apply_gravity();
            stats.integrated += self.integrate(sub_dt);
            if self.config.ground_enabled {
                stats.ground_contacts += self.resolve_ground_contacts();
            }
            self.resolve_pair_contacts(&mut stats);
        }

        stats.invalid_bodies = self.report_invalid_bodies();

        log::trace!(
            "step dt={} bodies={} ground={} pairs={} impulses={}",
            dt,
            self.bodies.len(),
            stats.ground_contacts,
            stats.pair_contacts,
            stats.impulses
        );

        Ok(stats)
    }

    fn apply_gravity(&mut self) {
        let gravity = self.config.gravity;
        let apply = move |body: &mut Body| {
            if !body.is_static() {
                body.apply_force(gravity * body.mass());
            }
        };

        #[cfg(feature = "parallel")]
        {
            self.bodies.bodies_mut().par_iter_mut().for_each(apply);
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.bodies.bodies_mut().iter_mut().for_each(apply);
        }
    }

    fn integrate(&mut self, dt: f64) -> usize {
        let step = move |body: &mut Body| -> usize {
            if body.is_static() {
                0
            } else {
                body.update(dt);
                1
            }
        };

        #[cfg(feature = "parallel")]
        {
            self.bodies.bodies_mut().par_iter_mut().map(step).sum()
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.bodies.bodies_mut().iter_mut().map(step).sum()
        }
    }

    fn resolve_ground_contacts(&mut self) -> usize {
        let ground = self.config.ground_height;
        self.bodies
            .bodies_mut()
            .iter_mut()
            .map(|body| collision::resolve_ground(body, ground))
            .filter(|clamped| *clamped)
            .count()
    }

    fn resolve_pair_contacts(&mut self, stats: &mut StepStats) {
        let count = self.bodies.len();
        let contact_friction = self.config.contact_friction;

        for i in 0..count {
            for j in (i + 1)..count {
                let (a, b) = self.bodies.pair_mut(i, j);
                let contact = match collision::detect(a, b) {
                    Some(contact) => contact,
                    None => continue,
                };

                stats.pair_contacts += 1;
                let resolution = collision::resolve(a, b, &contact, contact_friction);
                if resolution.normal_impulse != 0.0 {
                    stats.impulses += 1;
                }
            }
        }
    }

    fn report_invalid_bodies(&self) -> usize {
        let mut invalid = 0;
        for (handle, body) in self.bodies() {
            if !body.is_valid() {
                invalid += 1;
                if self.config.warn_on_invalid {
                    // Debug formatting keeps non-finite values readable
                    log::warn!("{} holds non-finite state: {:?}", handle, body.position());
                }
            }
        }
        invalid
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
