// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_gesture --heading-base-level=0

//! Tactile Gesture: state machines for pointer-driven object manipulation.
//!
//! This crate provides small, focused state machines for the gestures used to
//! manipulate objects in a scene graph. Each module handles a specific
//! interaction pattern:
//!
//! - [`rotate`]: Map single-pointer drags onto orientation changes (pitch/yaw)
//! - [`pinch`]: Map two-pointer distance changes onto clamped per-axis scale
//! - [`tap`]: Detect rapid repeated activations within a rolling time window
//!
//! ## Design Philosophy
//!
//! Each state machine is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific gesture
//! - **Stateful but simple**: Track just enough to compute the next mutation
//! - **Integration-friendly**: Accept raw pointer positions and timestamps,
//!   produce plain values the host applies to its scene graph
//!
//! The crate does not assume any particular windowing system, event source, or
//! scene graph structure. Positions arrive as [`kurbo::Point`] values,
//! timestamps as host-supplied milliseconds, and results come back as
//! orientation/scale values rather than side effects.
//!
//! ## Usage Patterns
//!
//! ### Drag-to-Rotate
//!
//! Use [`rotate::RotateState`] to turn pointer motion into orientation
//! updates. Vertical motion maps to pitch, horizontal motion to yaw, and roll
//! is left untouched:
//!
//! ```rust
//! # #[cfg(feature = "rotate")]
//! # fn example() {
//! use kurbo::Point;
//! use tactile_gesture::rotate::{Euler, RotateState};
//!
//! let mut rotate = RotateState::default();
//!
//! // Pointer down at (100, 100).
//! rotate.start(Point::new(100.0, 100.0));
//!
//! // Pointer moves 10px right and 4px down; at the default sensitivity of
//! // 0.5 degrees per pixel that is +2 degrees pitch and +5 degrees yaw.
//! let next = rotate.update(Point::new(110.0, 104.0), Euler::ZERO).unwrap();
//! assert_eq!(next, Euler::new(2.0, 5.0, 0.0));
//! # }
//! ```
//!
//! ### Pinch-to-Zoom
//!
//! Use [`pinch::PinchState`] to turn two-pointer distance changes into
//! per-axis scale factors. Each move rebases the gesture, so small pinches
//! compound multiplicatively:
//!
//! ```rust
//! # #[cfg(feature = "pinch")]
//! # fn example() {
//! use kurbo::Point;
//! use tactile_gesture::pinch::{PinchState, Scale3};
//!
//! let mut pinch = PinchState::default();
//!
//! // Two pointers land 100px apart on an object scaled at 0.5.
//! pinch.begin(
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 0.0),
//!     Some(Scale3::splat(0.5)),
//! );
//!
//! // They spread to 120px apart: a 20% distance change attenuated to a
//! // 4% scale change.
//! let scale = pinch.update(Point::new(0.0, 0.0), Point::new(120.0, 0.0)).unwrap();
//! assert!((scale.x - 0.52).abs() < 1e-9);
//! # }
//! ```
//!
//! ### Rapid Re-activation
//!
//! Use [`tap::TapCounter`] to fire a toggle when activations arrive quickly
//! enough, e.g. a triple tap revealing a diagnostics overlay:
//!
//! ```rust
//! use tactile_gesture::tap::TapCounter;
//!
//! let mut taps = TapCounter::default();
//! assert!(!taps.record(0));
//! assert!(!taps.record(300));
//! assert!(taps.record(600)); // third tap inside the window fires
//! assert_eq!(taps.count(), 0); // and resets the counter
//! ```
//!
//! ## Features
//!
//! - `rotate`: Enable drag-to-rotate state tracking (requires `kurbo`)
//! - `pinch`: Enable pinch-to-zoom state tracking (requires `kurbo`)
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(feature = "pinch")]
pub mod pinch;

#[cfg(feature = "rotate")]
pub mod rotate;
pub mod tap;
