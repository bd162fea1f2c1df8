// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-rotate helper: map pointer motion onto orientation changes.
//!
//! ## Usage
//!
//! 1) Start a rotation gesture by calling [`RotateState::start`] with the pointer-down position.
//! 2) On each move event, call [`RotateState::update`] with the new position and the target's
//!    current orientation to get the orientation to write back.
//! 3) End the gesture with [`RotateState::end`] when the pointer lifts or is lost.
//!
//! Vertical pointer motion maps to pitch (`x`), horizontal motion to yaw (`y`),
//! and roll (`z`) is never touched. There is no inertia: the orientation stops
//! exactly at the last applied value.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tactile_gesture::rotate::{Euler, RotateState};
//!
//! let mut rotate = RotateState::default();
//!
//! rotate.start(Point::new(10.0, 20.0));
//! assert!(rotate.is_active());
//!
//! // Move 6px right, 2px down: +1 degree pitch, +3 degrees yaw.
//! let next = rotate.update(Point::new(16.0, 22.0), Euler::new(30.0, 60.0, 5.0)).unwrap();
//! assert_eq!(next, Euler::new(31.0, 63.0, 5.0));
//!
//! rotate.end();
//! assert!(!rotate.is_active());
//! ```

use kurbo::Point;

/// Orientation as rotations about the x, y, and z axes, in degrees.
///
/// Angles are unbounded and never normalized here; they wrap implicitly when
/// the host applies them trigonometrically.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Euler {
    /// Rotation about the x axis (pitch), in degrees.
    pub x: f64,
    /// Rotation about the y axis (yaw), in degrees.
    pub y: f64,
    /// Rotation about the z axis (roll), in degrees.
    pub z: f64,
}

impl Euler {
    /// The zero orientation.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates an orientation from per-axis angles in degrees.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Configuration for the drag-to-rotate mapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotateConfig {
    /// Degrees of rotation applied per pixel of pointer motion.
    pub degrees_per_pixel: f64,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            degrees_per_pixel: 0.5,
        }
    }
}

/// Tracks a single-pointer rotation gesture.
#[derive(Copy, Clone, Debug, Default)]
pub struct RotateState {
    config: RotateConfig,
    last_pos: Option<Point>,
}

impl RotateState {
    /// Creates an inactive state with the given configuration.
    #[must_use]
    pub fn new(config: RotateConfig) -> Self {
        Self {
            config,
            last_pos: None,
        }
    }

    /// Starts (or re-anchors) the gesture at the given pointer position.
    ///
    /// Starting while already active simply moves the anchor; the next
    /// [`update`](Self::update) measures its delta from `pos`.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Advances the gesture to a new pointer position.
    ///
    /// Given the target's `current` orientation, returns the orientation to
    /// write back: pitch advanced by `dy * degrees_per_pixel`, yaw by
    /// `dx * degrees_per_pixel`, roll unchanged. Returns `None` while the
    /// gesture is inactive; that is the silent no-op for moves outside a
    /// down→up bracket, not an error.
    pub fn update(&mut self, pos: Point, current: Euler) -> Option<Euler> {
        let last = self.last_pos?;
        let delta = pos - last;
        self.last_pos = Some(pos);
        let s = self.config.degrees_per_pixel;
        Some(Euler {
            x: current.x + delta.y * s,
            y: current.y + delta.x * s,
            z: current.z,
        })
    }

    /// Ends the gesture and resets the anchor.
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a rotation gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_inactive() {
        let rotate = RotateState::default();
        assert!(!rotate.is_active());
    }

    #[test]
    fn update_before_start_is_noop() {
        let mut rotate = RotateState::default();
        let next = rotate.update(Point::new(5.0, 5.0), Euler::ZERO);
        assert_eq!(next, None);
        assert!(!rotate.is_active());
    }

    #[test]
    fn vertical_motion_maps_to_pitch_horizontal_to_yaw() {
        let mut rotate = RotateState::default();
        rotate.start(Point::new(100.0, 100.0));

        let next = rotate
            .update(Point::new(110.0, 104.0), Euler::new(1.0, 2.0, 3.0))
            .unwrap();

        // dx = 10 -> yaw +5, dy = 4 -> pitch +2, roll untouched.
        assert_eq!(next, Euler::new(3.0, 7.0, 3.0));
    }

    #[test]
    fn roll_is_never_modified() {
        let mut rotate = RotateState::default();
        rotate.start(Point::new(0.0, 0.0));

        let next = rotate
            .update(Point::new(50.0, -30.0), Euler::new(0.0, 0.0, 42.5))
            .unwrap();

        assert_eq!(next.z, 42.5);
    }

    #[test]
    fn successive_updates_measure_from_last_position() {
        let mut rotate = RotateState::default();
        rotate.start(Point::new(0.0, 0.0));

        let first = rotate.update(Point::new(10.0, 0.0), Euler::ZERO).unwrap();
        assert_eq!(first, Euler::new(0.0, 5.0, 0.0));

        // Second move measures from (10, 0), not from the start.
        let second = rotate.update(Point::new(14.0, 0.0), first).unwrap();
        assert_eq!(second, Euler::new(0.0, 7.0, 0.0));
    }

    #[test]
    fn negative_deltas_rotate_backwards() {
        let mut rotate = RotateState::default();
        rotate.start(Point::new(100.0, 100.0));

        let next = rotate
            .update(Point::new(90.0, 80.0), Euler::new(10.0, 10.0, 0.0))
            .unwrap();

        assert_eq!(next, Euler::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn custom_sensitivity_is_honored() {
        let mut rotate = RotateState::new(RotateConfig {
            degrees_per_pixel: 2.0,
        });
        rotate.start(Point::new(0.0, 0.0));

        let next = rotate.update(Point::new(3.0, 1.0), Euler::ZERO).unwrap();
        assert_eq!(next, Euler::new(2.0, 6.0, 0.0));
    }

    #[test]
    fn end_makes_further_updates_noops() {
        let mut rotate = RotateState::default();
        rotate.start(Point::new(0.0, 0.0));
        rotate.end();

        assert!(!rotate.is_active());
        assert_eq!(rotate.update(Point::new(10.0, 10.0), Euler::ZERO), None);
    }

    #[test]
    fn restart_reanchors_the_gesture() {
        let mut rotate = RotateState::default();
        rotate.start(Point::new(0.0, 0.0));
        rotate.update(Point::new(10.0, 10.0), Euler::ZERO);

        // Re-anchor at a new position; the next delta is measured from there.
        rotate.start(Point::new(100.0, 100.0));
        let next = rotate.update(Point::new(102.0, 100.0), Euler::ZERO).unwrap();
        assert_eq!(next, Euler::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn orientation_is_unbounded() {
        let mut rotate = RotateState::default();
        rotate.start(Point::new(0.0, 0.0));

        let next = rotate
            .update(Point::new(1000.0, 0.0), Euler::new(0.0, 350.0, 0.0))
            .unwrap();

        // No normalization: 350 + 500 stays 850.
        assert_eq!(next.y, 850.0);
    }
}
