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
//! Bouncing balls example
//!
//! Drops a handful of balls made of different materials onto the ground
//! and onto each other, printing their state once per simulated second.

use rigid_dynamics::{Material, StepStats, Vec3, World, WorldConfig};

fn main() {
    println!("Rigid Dynamics - Bouncing Balls Example");
    println!("=======================================\n");

    let config = WorldConfig::default().with_contact_friction(true);
    let mut world = World::with_config(config);

    // A heavy immovable boulder in the middle of the floor
    let boulder = world.create_body_with_material(
        Vec3::new(0.0, 0.5, 0.0),
        0.0,
        true,
        Material::CONCRETE,
    );
    if let Some(body) = world.body_mut(boulder) {
        body.set_radius(1.0);
    }

    let mut balls = Vec::new();
    for (i, name) in ["rubber", "steel", "wood", "ice"].iter().enumerate() {
        let material = match Material::by_name(name) {
            Some(material) => material,
            None => continue,
        };
        let position = Vec3::new(-0.6 + i as f64 * 0.4, 4.0 + i as f64 * 1.5, 0.0);
        let handle = world.create_sphere(position, 0.25, material);
        balls.push((*name, handle));
    }

    println!("Created {} bodies:", world.body_count());
    for (handle, body) in world.bodies() {
        println!(
            "  - {} mass={:.1} radius={:.2} restitution={:.2} friction={:.2} density={:.0}",
            handle,
            body.mass(),
            body.radius(),
            body.restitution(),
            body.friction(),
            body.material().density
        );
    }

    let dt = 1.0 / 60.0;
    let mut totals = StepStats::default();

    for step in 1..=300 {
        let stats = match world.update(dt) {
            Ok(stats) => stats,
            Err(err) => {
                eprintln!("step {} failed: {}", step, err);
                return;
            }
        };
        totals.ground_contacts += stats.ground_contacts;
        totals.pair_contacts += stats.pair_contacts;
        totals.impulses += stats.impulses;

        if step % 60 == 0 {
            println!("\nt = {:.1}s", step as f64 * dt);
            for (name, handle) in &balls {
                if let (Some(p), Some(v)) = (world.position(*handle), world.velocity(*handle)) {
                    println!(
                        "  {:<7} pos=({:>6.2}, {:>6.2}, {:>6.2}) vel=({:>6.2}, {:>6.2}, {:>6.2})",
                        name, p.x, p.y, p.z, v.x, v.y, v.z
                    );
                }
            }
            println!("  kinetic energy: {:.3} J", world.total_kinetic_energy());
        }
    }

    println!("\nSummary:");
    println!("  Ground contacts: {}", totals.ground_contacts);
    println!("  Pair contacts:   {}", totals.pair_contacts);
    println!("  Impulses:        {}", totals.impulses);
}
