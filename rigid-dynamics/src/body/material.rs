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
//! Surface materials
//!
//! A material is a named restitution/friction pair plus a density. Bodies
//! copy the values out of a material when it is applied; there is no shared
//! material state. Density only matters when a body's mass is derived from
//! its volume, see [`Material::sphere_mass`].

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Restitution and friction coefficients for a body surface
///
/// Both coefficients are clamped into `[0, 1]` on construction. Density is in
/// kg/m³ and defaults to that of water.
///
/// # Examples
///
/// ```
/// use rigid_dynamics::Material;
///
/// let rubber = Material::RUBBER;
/// assert!(rubber.restitution > Material::CONCRETE.restitution);
///
/// let custom = Material::new(1.5, -0.2);
/// assert_eq!(custom.restitution, 1.0);
/// assert_eq!(custom.friction, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Material {
    /// Bounce coefficient: 0 is fully inelastic, 1 fully elastic
    pub restitution: f64,
    /// Tangential velocity damping on contact
    pub friction: f64,
    /// Mass per unit volume (kg/m³)
    pub density: f64,
}

/// Density used when none is given (water, kg/m³)
pub const DEFAULT_DENSITY: f64 = 1000.0;

impl Material {
    /// Air
    pub const AIR: Material = Material::preset(0.99, 0.01, 1.2);
    /// Water
    pub const WATER: Material = Material::preset(0.1, 0.1, 1000.0);
    /// Wood
    pub const WOOD: Material = Material::preset(0.3, 0.6, 700.0);
    /// Steel
    pub const STEEL: Material = Material::preset(0.3, 0.4, 7850.0);
    /// Rubber
    pub const RUBBER: Material = Material::preset(0.85, 0.8, 1100.0);
    /// Concrete
    pub const CONCRETE: Material = Material::preset(0.1, 0.8, 2400.0);
    /// Ice
    pub const ICE: Material = Material::preset(0.2, 0.1, 917.0);
    /// Sand
    pub const SAND: Material = Material::preset(0.1, 0.8, 1600.0);

    const fn preset(restitution: f64, friction: f64, density: f64) -> Self {
        Material {
            restitution,
            friction,
            density,
        }
    }

    /// Create a material, clamping both coefficients into `[0, 1]`
    ///
    /// NaN coefficients are treated as 0. The density is [`DEFAULT_DENSITY`].
    pub fn new(restitution: f64, friction: f64) -> Self {
        Material {
            restitution: clamp_unit(restitution),
            friction: clamp_unit(friction),
            density: DEFAULT_DENSITY,
        }
    }

    /// Replace the density; non-positive or non-finite values become 0
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = sanitize_density(density);
        self
    }

    /// Mass of a solid sphere of this material, `4/3 π r³ ρ`
    ///
    /// Degenerate radii or densities give a mass of 0, which makes the
    /// resulting body immovable.
    ///
    /// ```
    /// use rigid_dynamics::Material;
    ///
    /// let mass = Material::WATER.sphere_mass(0.5);
    /// assert!((mass - 523.598_775_598_298_8).abs() < 1e-9);
    /// ```
    pub fn sphere_mass(&self, radius: f64) -> f64 {
        let radius = super::sanitize_radius(radius);
        let mass = 4.0 / 3.0 * PI * radius.powi(3) * sanitize_density(self.density);
        if mass.is_finite() {
            mass
        } else {
            0.0
        }
    }

    /// Copy with every field forced into its valid range
    pub(crate) fn sanitized(self) -> Self {
        Material::new(self.restitution, self.friction).with_density(self.density)
    }

    /// Look up a preset by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Material> {
        PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|(_, material)| *material)
    }

    /// Names of all built-in presets
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(name, _)| *name)
    }
}

static PRESETS: [(&str, Material); 8] = [
    ("air", Material::AIR),
    ("water", Material::WATER),
    ("wood", Material::WOOD),
    ("steel", Material::STEEL),
    ("rubber", Material::RUBBER),
    ("concrete", Material::CONCRETE),
    ("ice", Material::ICE),
    ("sand", Material::SAND),
];

impl Default for Material {
    fn default() -> Self {
        Material::new(0.3, 0.5)
    }
}

fn sanitize_density(density: f64) -> f64 {
    if density.is_finite() && density > 0.0 {
        density
    } else {
        0.0
    }
}

/// Clamp a coefficient into `[0, 1]`, mapping NaN to 0
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
