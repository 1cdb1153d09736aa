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
//! World configuration

use crate::body::{clamp_unit, sanitize_radius, Material, DEFAULT_DAMPING, DEFAULT_RADIUS};
use crate::vector::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard gravity at the Earth's surface (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Configuration for world stepping and body defaults
///
/// The `default_*` fields and `damping` seed bodies created through the
/// world; changing them later does not touch existing bodies.
///
/// # Example
///
/// ```
/// use rigid_dynamics::{Vec3, WorldConfig};
///
/// let config = WorldConfig::default()
///     .with_gravity(Vec3::new(0.0, -1.62, 0.0))
///     .with_sub_steps(4)
///     .with_contact_friction(true);
/// assert_eq!(config.sub_steps, 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Global gravitational acceleration
    pub gravity: Vec3,
    /// Velocity retention factor for new bodies, in `[0, 1]`
    pub damping: f64,
    /// Sphere radius for new bodies
    pub default_radius: f64,
    /// Surface material for new bodies
    pub default_material: Material,
    /// Whether the ground plane exists
    pub ground_enabled: bool,
    /// Height of the ground plane along Y
    pub ground_height: f64,
    /// Number of equal slices each `update` is split into
    pub sub_steps: u32,
    /// Whether body-body contacts also apply a tangential friction impulse
    pub contact_friction: bool,
    /// Whether to log warnings for invalid state and rejected timesteps
    pub warn_on_invalid: bool,
    /// Timesteps above this many seconds log a stability warning
    pub max_timestep_warning: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            gravity: Vec3::new(0.0, -STANDARD_GRAVITY, 0.0),
            damping: DEFAULT_DAMPING,
            default_radius: DEFAULT_RADIUS,
            default_material: Material::default(),
            ground_enabled: true,
            ground_height: 0.0,
            sub_steps: 1,
            contact_friction: false,
            warn_on_invalid: true,
            max_timestep_warning: 0.1,
        }
    }
}

impl WorldConfig {
    /// Create a configuration with the given gravity and default settings
    pub fn new(gravity: Vec3) -> Self {
        WorldConfig {
            gravity,
            ..Default::default()
        }
    }

    /// Set the gravity vector
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor for new bodies (clamped into `[0, 1]`)
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = clamp_unit(damping);
        self
    }

    /// Set the radius for new bodies; negative or non-finite values become zero
    pub fn with_default_radius(mut self, radius: f64) -> Self {
        self.default_radius = sanitize_radius(radius);
        self
    }

    /// Set the material for new bodies
    pub fn with_default_material(mut self, material: Material) -> Self {
        self.default_material = material.sanitized();
        self
    }

    /// Place the ground plane at `height`
    pub fn with_ground(mut self, height: f64) -> Self {
        self.ground_enabled = true;
        self.ground_height = height;
        self
    }

    /// Remove the ground plane
    pub fn without_ground(mut self) -> Self {
        self.ground_enabled = false;
        self
    }

    /// Split each update into `sub_steps` equal slices
    ///
    /// # Panics
    ///
    /// Panics if `sub_steps` is zero.
    pub fn with_sub_steps(mut self, sub_steps: u32) -> Self {
        assert!(sub_steps > 0, "Sub-step count must be at least 1");
        self.sub_steps = sub_steps;
        self
    }

    /// Enable or disable tangential friction on body-body contacts
    pub fn with_contact_friction(mut self, enabled: bool) -> Self {
        self.contact_friction = enabled;
        self
    }

    /// Enable or disable warning logs
    pub fn with_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_invalid = enabled;
        self
    }
}
