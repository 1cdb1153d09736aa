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
//! Generational body arena
//!
//! Bodies are stored densely in registration order so the stepping phases
//! can walk a contiguous slice and pair enumeration order is stable. A
//! sparse slot table maps each handle's index to its dense position and
//! records the slot's current generation.
//!
//! # Memory Layout
//!
//! ```text
//! slots:   [ {gen 0, dense 0}, {gen 1, free}, {gen 0, dense 1} ]
//! bodies:  [ Body(slot 0), Body(slot 2) ]
//! handles: [ (0, gen 0),   (2, gen 0)   ]
//! ```
//!
//! Removal shifts later bodies down by one instead of swap-removing, which
//! keeps the relative order of surviving bodies intact.

use crate::body::{Body, BodyHandle};

#[derive(Debug, Clone, Copy)]
struct Slot {
    generation: u32,
    dense: Option<usize>,
}

/// Ordered arena of bodies addressed by generational handles
#[derive(Debug, Clone, Default)]
pub(crate) struct BodyArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    bodies: Vec<Body>,
    handles: Vec<BodyHandle>,
}

impl BodyArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store a body and return its handle
    ///
    /// Freed slots are reused; their generation was bumped on removal so
    /// older handles to the same slot stay invalid.
    pub(crate) fn insert(&mut self, body: Body) -> BodyHandle {
        let dense = self.bodies.len();
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.dense = Some(dense);
                BodyHandle::new(index, slot.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    dense: Some(dense),
                });
                BodyHandle::new(index, 0)
            }
        };

        self.bodies.push(body);
        self.handles.push(handle);

        debug_assert_eq!(self.bodies.len(), self.handles.len());
        handle
    }

    /// Remove a body, invalidating its handle
    pub(crate) fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let dense = self.dense_index(handle)?;

        let body = self.bodies.remove(dense);
        self.handles.remove(dense);

        // Everything after the removed body moved down one place
        for moved in &self.handles[dense..] {
            if let Some(d) = self.slots[moved.index() as usize].dense.as_mut() {
                *d -= 1;
            }
        }

        let slot = &mut self.slots[handle.index() as usize];
        slot.dense = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index());

        debug_assert_eq!(self.bodies.len(), self.handles.len());
        Some(body)
    }

    /// Remove every body, invalidating all outstanding handles
    pub(crate) fn clear(&mut self) {
        for handle in self.handles.drain(..) {
            let slot = &mut self.slots[handle.index() as usize];
            slot.dense = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(handle.index());
        }
        self.bodies.clear();
    }

    /// Dense position of a live handle
    pub(crate) fn dense_index(&self, handle: BodyHandle) -> Option<usize> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.dense
    }

    pub(crate) fn contains(&self, handle: BodyHandle) -> bool {
        self.dense_index(handle).is_some()
    }

    pub(crate) fn get(&self, handle: BodyHandle) -> Option<&Body> {
        let dense = self.dense_index(handle)?;
        Some(&self.bodies[dense])
    }

    pub(crate) fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let dense = self.dense_index(handle)?;
        Some(&mut self.bodies[dense])
    }

    pub(crate) fn len(&self) -> usize {
        self.bodies.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies in registration order
    pub(crate) fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable bodies in registration order
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Handles in registration order, parallel to [`BodyArena::bodies`]
    pub(crate) fn handles(&self) -> &[BodyHandle] {
        &self.handles
    }

    /// Mutable access to two distinct bodies by dense index, `i < j`
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        debug_assert!(i < j);
        let (head, tail) = self.bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }
}
