// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_controller --heading-base-level=0

//! Tactile Controller: a deterministic gesture controller for scene graphs.
//!
//! ## Overview
//!
//! This crate composes the state machines from `tactile_gesture` into a
//! single controller that owns all gesture state. The host feeds it pointer
//! lifecycle events; the controller resolves which manipulation container
//! each gesture targets, advances the appropriate session, and returns the
//! orientation/scale mutations the host should apply. It performs no side
//! effects of its own.
//!
//! ## Inputs
//!
//! Provide [`PointerEvent`](crate::controller::PointerEvent) values carrying
//! screen positions, the node the pointer landed on at pointer-down, and
//! host timestamps in milliseconds at pointer-up (used for tap counting).
//! The scene is consulted through the
//! read-only [`SceneView`](crate::scene::SceneView) trait: parent links,
//! container tags, and the current orientation/scale attributes.
//!
//! ## Target resolution
//!
//! On pointer-down the controller walks the originating node's ancestor chain
//! until it finds a node tagged as a manipulation container. Finding none is
//! a deliberate no-op: no session starts and subsequent moves produce no
//! commands. The container captured at down-time receives every update for
//! that session, regardless of where the pointer travels afterwards.
//!
//! ## Sessions
//!
//! At most one single-pointer drag session and one two-pointer pinch session
//! are live at a time. A second pointer landing opens a pinch and suspends
//! drag handling; when the pointer count returns to one, the surviving drag
//! session is re-anchored so rotation resumes without a jump. Sessions never
//! outlive their down→up bracket and there is no inertia.
//!
//! ## Deferred resets
//!
//! Cosmetic effects that restore an attribute after a delay are scheduled
//! through the controller so they can be generation-guarded: every session
//! start bumps the target's generation, and a reset fires only if no newer
//! session has claimed the target since it was scheduled. See
//! [`controller::Controller::schedule_reset`] and
//! [`controller::Controller::advance`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tactile_controller::controller::{Command, Controller, PointerEvent, PointerId};
//! use tactile_controller::scene::SceneView;
//! use tactile_gesture::pinch::Scale3;
//! use tactile_gesture::rotate::Euler;
//!
//! // A one-node scene whose single node is a manipulation container.
//! struct Scene;
//! impl SceneView for Scene {
//!     type NodeId = u32;
//!     fn parent(&self, _node: u32) -> Option<u32> { None }
//!     fn is_container(&self, node: u32) -> bool { node == 7 }
//!     fn orientation(&self, _node: u32) -> Option<Euler> { Some(Euler::ZERO) }
//!     fn scale(&self, _node: u32) -> Option<Scale3> { None }
//! }
//!
//! let mut controller = Controller::default();
//! let p = PointerId(1);
//!
//! controller.handle(&Scene, PointerEvent::Down { pointer: p, pos: Point::new(0.0, 0.0), hit: Some(7) });
//! let commands = controller.handle(&Scene, PointerEvent::Move { pointer: p, pos: Point::new(10.0, 4.0) });
//!
//! assert_eq!(
//!     commands,
//!     vec![Command::SetOrientation { node: 7, orientation: Euler::new(2.0, 5.0, 0.0) }]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod deferred;
pub mod scene;
