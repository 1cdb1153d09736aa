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
//! # Rigid Dynamics
//!
//! A small rigid-body dynamics core: bodies integrate under gravity, bounce
//! off a ground plane and collide with each other as spheres, with
//! impulse-based response using restitution and friction.
//!
//! ## Features
//!
//! - **Semi-implicit Euler**: stable integration at frame-rate timesteps
//! - **Impulse Resolution**: momentum-conserving sphere contacts with positional correction
//! - **Generational Handles**: destroyed bodies can never be reached through a stale handle
//! - **Materials**: restitution/friction/density presets, per-body radius and damping
//! - **Parallelization**: optional Rayon integration for per-body phases
//!
//! ## Example
//!
//! ```rust
//! use rigid_dynamics::{Vec3, World};
//!
//! let mut world = World::with_gravity(Vec3::new(0.0, -9.81, 0.0));
//! let ball = world.create_body(Vec3::new(0.0, 10.0, 0.0), 1.0, false);
//!
//! for _ in 0..300 {
//!     world.update(1.0 / 60.0).expect("positive timestep");
//! }
//!
//! let position = world.position(ball).unwrap();
//! assert!(position.y.abs() < 0.05);
//! ```

#![warn(missing_docs)]

/// Rigid bodies, handles and materials
pub mod body;

/// Error types
pub mod error;

/// Three-component vector primitive
pub mod vector;

/// Simulation world, configuration and contact resolution
pub mod world;

pub use body::{
    Body, BodyHandle, BodyKind, Material, DEFAULT_DAMPING, DEFAULT_DENSITY, DEFAULT_RADIUS,
};
pub use error::StepError;
pub use vector::Vec3;
pub use world::{StepStats, World, WorldConfig, STANDARD_GRAVITY};
