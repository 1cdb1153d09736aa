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
//! Contact detection and impulse-based resolution
//!
//! Every body is treated as a sphere of its own radius. Two kinds of contact
//! are handled:
//!
//! - **Ground**: a horizontal plane at a fixed height. Bodies whose center
//!   drops below it are clamped back onto it and bounce.
//! - **Pairwise**: two overlapping spheres. The overlap is removed by moving
//!   the bodies apart along the contact normal, then an impulse along the
//!   normal cancels (or reflects) their approaching velocity.
//!
//! # Impulse resolution
//!
//! For relative velocity `v_rel = v_b - v_a` and contact normal `n` pointing
//! from A to B:
//!
//! ```text
//! v_n = v_rel · n
//! j   = -(1 + e) * v_n / (1/m_a + 1/m_b)
//! v_a -= j * n / m_a
//! v_b += j * n / m_b
//! ```
//!
//! with `e = min(e_a, e_b)`. Equal and opposite impulses conserve linear
//! momentum; `e ≤ 1` guarantees kinetic energy does not increase.
//!
//! # Degenerate cases
//!
//! Coincident centers give no usable normal and a pair of immovable bodies
//! has zero combined inverse mass. Both are skipped silently.

use crate::body::Body;
use crate::vector::Vec3;

/// Overlap between two spheres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the first body toward the second
    pub normal: Vec3,
    /// Overlap depth along the normal
    pub penetration: f64,
}

/// Outcome of resolving a single contact
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resolution {
    /// Magnitude of the normal impulse, zero when the bodies were separating
    pub normal_impulse: f64,
    /// Signed magnitude of the tangential friction impulse
    pub friction_impulse: f64,
}

/// Test two bodies for sphere overlap
///
/// Returns `None` when the spheres do not overlap, when both bodies are
/// immovable, or when their centers coincide.
pub fn detect(a: &Body, b: &Body) -> Option<Contact> {
    if a.is_static() && b.is_static() {
        return None;
    }

    let diff = b.position() - a.position();
    let dist_sq = diff.length_squared();
    let min_dist = a.radius() + b.radius();

    if !(dist_sq < min_dist * min_dist) {
        return None;
    }

    let distance = dist_sq.sqrt();
    if distance == 0.0 {
        return None;
    }

    Some(Contact {
        normal: diff / distance,
        penetration: min_dist - distance,
    })
}

/// Separate two overlapping bodies and exchange impulses
///
/// Positional correction is always applied. Each dynamic body is pushed by
/// the other body's share of the combined inverse mass; if one body is
/// immovable the other takes the whole correction. The normal impulse is
/// only applied when the bodies are approaching.
///
/// When `contact_friction` is set, a tangential impulse scaled by
/// `sqrt(friction_a * friction_b)` follows the normal impulse.
pub fn resolve(
    a: &mut Body,
    b: &mut Body,
    contact: &Contact,
    contact_friction: bool,
) -> Resolution {
    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum == 0.0 {
        return Resolution::default();
    }

    let normal = contact.normal;
    let correction = normal * contact.penetration;

    if a.is_static() {
        b.set_position(b.position() + correction);
    } else if b.is_static() {
        a.set_position(a.position() - correction);
    } else {
        a.set_position(a.position() - correction * (inv_b / inv_sum));
        b.set_position(b.position() + correction * (inv_a / inv_sum));
    }

    let rel_vel = b.velocity() - a.velocity();
    let vel_along_normal = rel_vel.dot(normal);
    if vel_along_normal > 0.0 {
        return Resolution::default();
    }

    let e = a.restitution().min(b.restitution());
    let j = -(1.0 + e) * vel_along_normal / inv_sum;
    let impulse = normal * j;
    a.apply_impulse(-impulse);
    b.apply_impulse(impulse);

    let friction_impulse = if contact_friction {
        apply_contact_friction(a, b, normal, inv_sum)
    } else {
        0.0
    };

    Resolution {
        normal_impulse: j,
        friction_impulse,
    }
}

fn apply_contact_friction(a: &mut Body, b: &mut Body, normal: Vec3, inv_sum: f64) -> f64 {
    let rel_vel = b.velocity() - a.velocity();
    let tangent = match (rel_vel - normal * rel_vel.dot(normal)).try_normalize() {
        Some(t) => t,
        None => return 0.0,
    };

    let coefficient = (a.friction() * b.friction()).sqrt();
    let jt = -rel_vel.dot(tangent) / inv_sum * coefficient;
    let impulse = tangent * jt;
    a.apply_impulse(-impulse);
    b.apply_impulse(impulse);
    jt
}

/// Clamp a body onto the ground plane and bounce it
///
/// Returns `true` if the body was below the plane. On an approaching contact
/// the vertical velocity is reflected and scaled by `1 - restitution`, and
/// the horizontal velocity is scaled by `1 - friction`.
pub fn resolve_ground(body: &mut Body, ground_height: f64) -> bool {
    if body.is_static() {
        return false;
    }

    let mut position = body.position();
    if !(position.y < ground_height) {
        return false;
    }
    position.y = ground_height;
    body.set_position(position);

    let mut velocity = body.velocity();
    if velocity.y < 0.0 {
        let slide = 1.0 - body.friction();
        velocity.y = -velocity.y * (1.0 - body.restitution());
        velocity.x *= slide;
        velocity.z *= slide;
        body.set_velocity(velocity);
    }

    true
}
