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
//! Edge case tests for world stepping
//!
//! Tests boundary conditions, extreme values, and unusual scenarios

use rigid_dynamics::{Material, StepError, Vec3, World, WorldConfig};

const DT: f64 = 1.0 / 60.0;

fn quiet_world(config: WorldConfig) -> World {
    World::with_config(config.with_warnings(false))
}

#[test]
fn test_invalid_timesteps_leave_world_unchanged() {
    let mut world = quiet_world(WorldConfig::default());
    let ball = world.create_body(Vec3::new(0.0, 3.0, 0.0), 1.0, false);
    world.set_velocity(ball, Vec3::new(1.0, 0.0, 0.0));

    for dt in [0.0, -0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = world.update(dt).unwrap_err();
        assert!(matches!(err, StepError::InvalidTimestep(_)));
        assert!(err.to_string().contains("must be positive and finite"));
    }

    assert_eq!(world.position(ball), Some(Vec3::new(0.0, 3.0, 0.0)));
    assert_eq!(world.velocity(ball), Some(Vec3::new(1.0, 0.0, 0.0)));
}

#[test]
fn test_reused_slot_does_not_revive_old_handle() {
    let mut world = World::new();
    let old = world.create_body(Vec3::new(0.0, 1.0, 0.0), 1.0, false);
    assert!(world.destroy_body(old));
    assert!(!world.destroy_body(old));

    let new = world.create_body(Vec3::new(0.0, 2.0, 0.0), 1.0, false);
    assert_eq!(new.index(), old.index());

    assert!(!world.contains(old));
    assert!(world.body(old).is_none());
    assert!(!world.apply_force(old, Vec3::UP));
    assert!(!world.apply_impulse(old, Vec3::UP));
    assert!(!world.set_position(old, Vec3::ZERO));
    assert!(!world.set_velocity(old, Vec3::ZERO));

    assert_eq!(world.position(new), Some(Vec3::new(0.0, 2.0, 0.0)));
    assert_eq!(world.body_count(), 1);
}

#[test]
fn test_clear_then_reuse() {
    let mut world = World::new();
    let handles: Vec<_> = (0..5)
        .map(|i| world.create_body(Vec3::new(i as f64 * 2.0, 1.0, 0.0), 1.0, false))
        .collect();

    world.clear();
    assert!(world.is_empty());
    assert!(handles.iter().all(|h| !world.contains(*h)));

    let fresh = world.create_body(Vec3::new(0.0, 1.0, 0.0), 1.0, false);
    assert!(world.contains(fresh));
    assert!(handles.iter().all(|h| !world.contains(*h)));
    assert!(world.update(DT).is_ok());
}

#[test]
fn test_zero_mass_dynamic_body_never_moves() {
    let mut world = World::new();
    let start = Vec3::new(0.0, 2.0, 0.0);
    let massless = world.create_body(start, 0.0, false);
    let ball = world.create_body(Vec3::new(0.0, 2.6, 0.0), 1.0, false);
    world.set_velocity(ball, Vec3::new(0.0, -5.0, 0.0));

    for _ in 0..60 {
        world.update(DT).unwrap();
    }

    let body = world.body(massless).unwrap();
    assert!(body.is_static());
    assert_eq!(body.position(), start);
    assert_eq!(body.velocity(), Vec3::ZERO);
}

#[test]
fn test_overlapping_static_bodies_ignored() {
    let mut world = World::new();
    let a = world.create_body(Vec3::new(0.0, 1.0, 0.0), 1.0, true);
    let b = world.create_body(Vec3::new(0.1, 1.0, 0.0), 1.0, true);

    let stats = world.update(DT).unwrap();

    assert_eq!(stats.pair_contacts, 0);
    assert_eq!(stats.integrated, 0);
    assert_eq!(world.position(a), Some(Vec3::new(0.0, 1.0, 0.0)));
    assert_eq!(world.position(b), Some(Vec3::new(0.1, 1.0, 0.0)));
}

#[test]
fn test_huge_timestep_stays_finite() {
    let mut world = quiet_world(WorldConfig::default());
    let a = world.create_body(Vec3::new(0.0, 10.0, 0.0), 1.0, false);
    let b = world.create_body(Vec3::new(0.3, 10.0, 0.0), 2.0, false);

    let stats = world.update(10.0).unwrap();
    assert_eq!(stats.invalid_bodies, 0);

    for handle in [a, b] {
        let body = world.body(handle).unwrap();
        assert!(body.is_valid());
        assert!(body.position().y >= 0.0);
    }
}

#[test]
fn test_non_finite_body_is_reported_not_fatal() {
    let mut world = quiet_world(WorldConfig::default());
    let broken = world.create_body(Vec3::new(0.0, 5.0, 0.0), 1.0, false);
    let healthy = world.create_body(Vec3::new(10.0, 5.0, 0.0), 1.0, false);
    world.set_position(broken, Vec3::new(f64::NAN, 5.0, 0.0));

    let stats = world.update(DT).unwrap();

    assert_eq!(stats.invalid_bodies, 1);
    assert!(!world.body(broken).unwrap().is_valid());
    assert!(world.body(healthy).unwrap().is_valid());
    assert!(world.position(healthy).unwrap().y < 5.0);
}

fn sliding_pair(contact_friction: bool) -> f64 {
    let mut world = World::with_config(
        WorldConfig::new(Vec3::ZERO)
            .without_ground()
            .with_damping(1.0)
            .with_contact_friction(contact_friction),
    );
    let material = Material::new(0.5, 0.5);
    let a = world.create_body_with_material(Vec3::new(-0.45, 0.0, 0.0), 1.0, false, material);
    let b = world.create_body_with_material(Vec3::new(0.45, 0.0, 0.0), 1.0, false, material);
    world.set_velocity(a, Vec3::new(1.0, 1.0, 0.0));
    world.set_velocity(b, Vec3::new(-1.0, -1.0, 0.0));

    let stats = world.update(DT).unwrap();
    assert_eq!(stats.impulses, 1);

    (world.velocity(b).unwrap() - world.velocity(a).unwrap()).y
}

#[test]
fn test_contact_friction_damps_sliding() {
    let frictionless = sliding_pair(false);
    let rough = sliding_pair(true);

    assert!(frictionless < -1.9, "frictionless = {}", frictionless);
    assert!(rough.abs() < frictionless.abs(), "{} vs {}", rough, frictionless);
}

fn bullet(sub_steps: u32) -> (World, rigid_dynamics::BodyHandle, usize) {
    let mut world = World::with_config(
        WorldConfig::new(Vec3::ZERO)
            .without_ground()
            .with_damping(1.0)
            .with_sub_steps(sub_steps),
    );
    world.create_body(Vec3::new(1.5, 0.0, 0.0), 1.0, true);
    let ball = world.create_body(Vec3::ZERO, 1.0, false);
    world.set_velocity(ball, Vec3::new(150.0, 0.0, 0.0));

    let stats = world.update(DT).unwrap();
    assert_eq!(stats.sub_steps, sub_steps);
    (world, ball, stats.pair_contacts)
}

#[test]
fn test_sub_steps_catch_fast_bodies() {
    let (single, ball, contacts) = bullet(1);
    assert_eq!(contacts, 0);
    assert!(single.velocity(ball).unwrap().x > 0.0);

    let (stepped, ball, contacts) = bullet(8);
    assert!(contacts >= 1);
    assert!(stepped.velocity(ball).unwrap().x < 0.0);
}

#[test]
fn test_custom_ground_height() {
    let mut world = World::with_config(WorldConfig::default().with_ground(-2.0));
    let ball = world.create_body(Vec3::new(0.0, 1.0, 0.0), 1.0, false);

    for _ in 0..300 {
        world.update(DT).unwrap();
    }

    let y = world.position(ball).unwrap().y;
    assert!((y + 2.0).abs() < 0.05, "y = {}", y);
}

#[test]
fn test_freezing_a_moving_body() {
    let mut world = World::new();
    let ball = world.create_body(Vec3::new(0.0, 5.0, 0.0), 1.0, false);
    world.set_velocity(ball, Vec3::new(3.0, -2.0, 0.0));
    world.update(DT).unwrap();

    world.body_mut(ball).unwrap().set_static(true);
    let frozen = world.position(ball).unwrap();

    for _ in 0..10 {
        world.update(DT).unwrap();
    }

    assert_eq!(world.position(ball), Some(frozen));
    assert_eq!(world.velocity(ball), Some(Vec3::ZERO));
}

#[test]
fn test_empty_world_steps() {
    let mut world = World::new();
    let stats = world.update(DT).unwrap();
    assert_eq!(stats.integrated, 0);
    assert_eq!(stats.sub_steps, 1);
    assert_eq!(world.total_kinetic_energy(), 0.0);
}

#[test]
fn test_infinite_radius_does_not_poison_neighbours() {
    let mut world = quiet_world(WorldConfig::new(Vec3::ZERO).without_ground());
    let a = world.create_body(Vec3::ZERO, 1.0, false);
    let b = world.create_body(Vec3::new(3.0, 0.0, 0.0), 1.0, false);
    world.body_mut(a).unwrap().set_radius(f64::INFINITY);

    let stats = world.update(DT).unwrap();

    assert_eq!(stats.invalid_bodies, 0);
    assert_eq!(stats.pair_contacts, 0);
    assert_eq!(world.position(a), Some(Vec3::ZERO));
    assert_eq!(world.position(b), Some(Vec3::new(3.0, 0.0, 0.0)));
}

#[test]
fn test_infinite_default_radius_is_rejected() {
    let config = WorldConfig::new(Vec3::ZERO)
        .without_ground()
        .with_default_radius(f64::INFINITY);
    let mut world = quiet_world(config);
    let a = world.create_body(Vec3::ZERO, 1.0, false);
    world.create_body(Vec3::new(3.0, 0.0, 0.0), 1.0, false);

    let stats = world.update(DT).unwrap();
    assert_eq!(world.body(a).unwrap().radius(), 0.0);
    assert_eq!(stats.invalid_bodies, 0);
}
