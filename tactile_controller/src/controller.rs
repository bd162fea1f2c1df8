// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture controller: pointer events in, scene mutations out.
//!
//! [`Controller::handle`] is a plain synchronous dispatch over
//! `(controller state, event)`: it owns every piece of gesture state, reads
//! the scene through [`SceneView`], and returns the commands the host should
//! apply. Events for a pointer sequence must be delivered in arrival order;
//! the controller never reorders or coalesces them.
//!
//! ## Session rules
//!
//! - The first pointer down resolves a manipulation container and opens a
//!   drag session on it. No container means no session; later moves are
//!   no-ops by design.
//! - A second pointer opens a pinch session (resolved from either touch
//!   point) and suspends drag handling until the pointer count returns to
//!   one, at which point the drag re-anchors to the surviving pointer.
//! - Third and later pointers are ignored.
//! - A session ends when its pointer lifts or is cancelled. No inertia.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tactile_controller::controller::{Command, Controller, PointerEvent, PointerId};
//! # use tactile_controller::scene::SceneView;
//! # use tactile_gesture::pinch::Scale3;
//! # use tactile_gesture::rotate::Euler;
//! # struct Scene;
//! # impl SceneView for Scene {
//! #     type NodeId = u32;
//! #     fn parent(&self, _node: u32) -> Option<u32> { None }
//! #     fn is_container(&self, node: u32) -> bool { node == 7 }
//! #     fn orientation(&self, _node: u32) -> Option<Euler> { Some(Euler::ZERO) }
//! #     fn scale(&self, _node: u32) -> Option<Scale3> { None }
//! # }
//! let mut controller = Controller::default();
//! let p = PointerId(1);
//!
//! // Down on node 7 (a container), then drag 10px right and 4px down.
//! controller.handle(&Scene, PointerEvent::Down { pointer: p, pos: Point::new(0.0, 0.0), hit: Some(7) });
//! let commands = controller.handle(&Scene, PointerEvent::Move { pointer: p, pos: Point::new(10.0, 4.0) });
//! assert_eq!(
//!     commands,
//!     vec![Command::SetOrientation { node: 7, orientation: Euler::new(2.0, 5.0, 0.0) }]
//! );
//!
//! // Lifting the pointer ends the session; further moves are no-ops.
//! controller.handle(&Scene, PointerEvent::Up { pointer: p, time_ms: 100 });
//! assert!(controller.handle(&Scene, PointerEvent::Move { pointer: p, pos: Point::new(50.0, 50.0) }).is_empty());
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

use tactile_gesture::pinch::{PinchConfig, PinchState, Scale3};
use tactile_gesture::rotate::{Euler, RotateConfig, RotateState};
use tactile_gesture::tap::{TapConfig, TapCounter};

use crate::deferred::{DeferredQueue, DeferredReset, ResetValue};
use crate::scene::{SceneView, containing_target};

/// Host-assigned pointer identity, stable for one down→up bracket.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PointerId(
    /// The host's raw pointer identifier.
    pub u64,
);

/// A pointer lifecycle event delivered by the host, in arrival order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<K> {
    /// A pointer landed.
    Down {
        /// The pointer that landed.
        pointer: PointerId,
        /// Screen position of the pointer.
        pos: Point,
        /// The scene node under the pointer, if any.
        hit: Option<K>,
    },
    /// A pointer moved while down.
    Move {
        /// The pointer that moved.
        pointer: PointerId,
        /// New screen position.
        pos: Point,
    },
    /// A pointer lifted normally.
    Up {
        /// The pointer that lifted.
        pointer: PointerId,
        /// Host timestamp in milliseconds, used for tap counting.
        time_ms: u64,
    },
    /// A pointer was lost (focus loss, host cancellation).
    Cancel {
        /// The pointer that was lost.
        pointer: PointerId,
    },
}

/// A mutation the host should apply to its scene graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command<K> {
    /// Write this orientation to the node.
    SetOrientation {
        /// The manipulation container to rotate.
        node: K,
        /// The new orientation, in degrees.
        orientation: Euler,
    },
    /// Write this per-axis scale to the node.
    SetScale {
        /// The manipulation container to scale.
        node: K,
        /// The new per-axis scale.
        scale: Scale3,
    },
    /// The rapid re-activation detector fired; flip whatever it controls.
    Toggle,
}

/// Configuration for all gesture machinery owned by the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ControllerConfig {
    /// Drag-to-rotate mapping.
    pub rotate: RotateConfig,
    /// Pinch-to-zoom mapping.
    pub pinch: PinchConfig,
    /// Rapid re-activation detection.
    pub tap: TapConfig,
}

#[derive(Copy, Clone, Debug)]
struct ActivePointer<K> {
    id: PointerId,
    pos: Point,
    hit: Option<K>,
}

#[derive(Copy, Clone, Debug)]
struct DragSession<K> {
    target: K,
    pointer: PointerId,
    rotate: RotateState,
}

#[derive(Copy, Clone, Debug)]
struct PinchSession<K> {
    target: K,
    pointers: [PointerId; 2],
    pinch: PinchState,
}

/// Owns all gesture state and turns pointer events into commands.
#[derive(Clone, Debug)]
pub struct Controller<K> {
    config: ControllerConfig,
    pointers: SmallVec<[ActivePointer<K>; 2]>,
    drag: Option<DragSession<K>>,
    pinch: Option<PinchSession<K>>,
    taps: TapCounter,
    generations: HashMap<K, u64>,
    deferred: DeferredQueue<K>,
}

impl<K: Copy + Eq + Hash> Controller<K> {
    /// Creates an idle controller with the given configuration.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            pointers: SmallVec::new(),
            drag: None,
            pinch: None,
            taps: TapCounter::new(config.tap),
            generations: HashMap::new(),
            deferred: DeferredQueue::new(),
        }
    }

    /// Processes one pointer event and returns the mutations to apply.
    pub fn handle<S: SceneView<NodeId = K>>(
        &mut self,
        scene: &S,
        event: PointerEvent<K>,
    ) -> Vec<Command<K>> {
        match event {
            PointerEvent::Down { pointer, pos, hit } => {
                self.on_down(scene, pointer, pos, hit);
                Vec::new()
            }
            PointerEvent::Move { pointer, pos } => self.on_move(scene, pointer, pos),
            PointerEvent::Up { pointer, time_ms } => {
                let mut out = Vec::new();
                if self.on_lift(pointer) && self.taps.record(time_ms) {
                    out.push(Command::Toggle);
                }
                out
            }
            PointerEvent::Cancel { pointer } => {
                self.on_lift(pointer);
                Vec::new()
            }
        }
    }

    fn on_down<S: SceneView<NodeId = K>>(
        &mut self,
        scene: &S,
        pointer: PointerId,
        pos: Point,
        hit: Option<K>,
    ) {
        if let Some(known) = self.pointers.iter_mut().find(|p| p.id == pointer) {
            // A repeated down for a live pointer just refreshes it.
            known.pos = pos;
            known.hit = hit;
            return;
        }
        self.pointers.push(ActivePointer {
            id: pointer,
            pos,
            hit,
        });
        match self.pointers.len() {
            1 => {
                // First pointer: resolve the container and open a drag
                // session. No container is a deliberate no-op.
                if let Some(target) = hit.and_then(|node| containing_target(scene, node)) {
                    self.bump_generation(target);
                    let mut rotate = RotateState::new(self.config.rotate);
                    rotate.start(pos);
                    self.drag = Some(DragSession {
                        target,
                        pointer,
                        rotate,
                    });
                }
            }
            2 => {
                // Second pointer: open a pinch, suspending drag handling.
                // The target resolves from either touch point.
                let target = self
                    .pointers
                    .iter()
                    .find_map(|p| p.hit.and_then(|node| containing_target(scene, node)));
                if let Some(target) = target {
                    self.bump_generation(target);
                    let mut pinch = PinchState::new(self.config.pinch);
                    pinch.begin(self.pointers[0].pos, self.pointers[1].pos, scene.scale(target));
                    self.pinch = Some(PinchSession {
                        target,
                        pointers: [self.pointers[0].id, self.pointers[1].id],
                        pinch,
                    });
                }
            }
            // Third and later pointers are tracked but drive no gesture.
            _ => {}
        }
    }

    fn on_move<S: SceneView<NodeId = K>>(
        &mut self,
        scene: &S,
        pointer: PointerId,
        pos: Point,
    ) -> Vec<Command<K>> {
        let mut out = Vec::new();
        let Some(known) = self.pointers.iter_mut().find(|p| p.id == pointer) else {
            // Moves outside a down→up bracket are no-ops.
            return out;
        };
        known.pos = pos;

        if let Some(pinch) = self.pinch.as_mut() {
            // A live pinch suspends rotation handling entirely.
            if pinch.pointers.contains(&pointer) {
                let first = self.pointers.iter().find(|p| p.id == pinch.pointers[0]);
                let second = self.pointers.iter().find(|p| p.id == pinch.pointers[1]);
                if let (Some(a), Some(b)) = (first, second) {
                    if let Some(scale) = pinch.pinch.update(a.pos, b.pos) {
                        out.push(Command::SetScale {
                            node: pinch.target,
                            scale,
                        });
                    }
                }
            }
            return out;
        }

        if self.pointers.len() == 1 {
            if let Some(drag) = self.drag.as_mut() {
                if drag.pointer == pointer {
                    let current = scene.orientation(drag.target).unwrap_or(Euler::ZERO);
                    if let Some(orientation) = drag.rotate.update(pos, current) {
                        out.push(Command::SetOrientation {
                            node: drag.target,
                            orientation,
                        });
                    }
                }
            }
        }
        out
    }

    /// Removes a pointer and tears down the sessions it carried.
    ///
    /// Returns `true` if the pointer was live.
    fn on_lift(&mut self, pointer: PointerId) -> bool {
        let Some(idx) = self.pointers.iter().position(|p| p.id == pointer) else {
            return false;
        };
        self.pointers.remove(idx);

        if let Some(pinch) = self.pinch.as_ref() {
            if pinch.pointers.contains(&pointer) {
                // Either pinch pointer lifting ends the pinch.
                self.pinch = None;
            }
        }
        if let Some(drag) = self.drag.as_mut() {
            if drag.pointer == pointer {
                self.drag = None;
            } else if self.pinch.is_none() && self.pointers.len() == 1 {
                // The pinch ended with the drag pointer still down:
                // re-anchor so rotation resumes without a jump.
                if let Some(survivor) = self.pointers.first() {
                    if survivor.id == drag.pointer {
                        drag.rotate.start(survivor.pos);
                    }
                }
            }
        }
        true
    }

    /// Schedules `value` to be restored on `node` at `due_ms`.
    ///
    /// The entry captures the node's current generation; if a newer session
    /// claims the node before the reset fires, the entry is silently dropped
    /// by [`advance`](Self::advance).
    pub fn schedule_reset(&mut self, node: K, value: ResetValue, due_ms: u64) {
        let generation = self.generation(node);
        self.deferred.push(DeferredReset {
            node,
            generation,
            due_ms,
            value,
        });
    }

    /// Advances host time, draining due resets and expiring the tap window.
    ///
    /// Returns the reset commands whose targets have not started a newer
    /// session since scheduling; stale entries are dropped without effect.
    pub fn advance(&mut self, now_ms: u64) -> Vec<Command<K>> {
        self.taps.expire(now_ms);
        let mut out = Vec::new();
        for entry in self.deferred.drain_due(now_ms) {
            if self.generation(entry.node) != entry.generation {
                continue;
            }
            out.push(match entry.value {
                ResetValue::Orientation(orientation) => Command::SetOrientation {
                    node: entry.node,
                    orientation,
                },
                ResetValue::Scale(scale) => Command::SetScale {
                    node: entry.node,
                    scale,
                },
            });
        }
        out
    }

    /// Returns the node's session generation (zero before its first session).
    #[must_use]
    pub fn generation(&self, node: K) -> u64 {
        self.generations.get(&node).copied().unwrap_or(0)
    }

    fn bump_generation(&mut self, node: K) {
        *self.generations.entry(node).or_insert(0) += 1;
    }

    /// Returns the number of live pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns the drag session's target, if a drag is live.
    #[must_use]
    pub fn drag_target(&self) -> Option<K> {
        self.drag.as_ref().map(|d| d.target)
    }

    /// Returns the pinch session's target, if a pinch is live.
    #[must_use]
    pub fn pinch_target(&self) -> Option<K> {
        self.pinch.as_ref().map(|p| p.target)
    }
}

impl<K: Copy + Eq + Hash> Default for Controller<K> {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
