// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch-to-zoom helper: map two-pointer distance changes onto clamped scale.
//!
//! ## Usage
//!
//! 1) When a second pointer lands, call [`PinchState::begin`] with both
//!    positions and the target's current scale (`None` falls back to the
//!    configured baseline).
//! 2) On each move with both pointers down, call [`PinchState::update`] to get
//!    the per-axis scale to write back.
//! 3) End the gesture with [`PinchState::end`] when either pointer lifts.
//!
//! The gesture is incremental: every update rebases the anchor distance and
//! anchor scale to the values just computed, so repeated small pinches
//! compound multiplicatively instead of re-measuring from the original start.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tactile_gesture::pinch::{PinchState, Scale3};
//!
//! let mut pinch = PinchState::default();
//!
//! pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0), Some(Scale3::splat(0.5)));
//! assert!(pinch.is_active());
//!
//! // Spreading from 100px to 120px grows a 0.5 scale to 0.52.
//! let scale = pinch.update(Point::new(0.0, 0.0), Point::new(120.0, 0.0)).unwrap();
//! assert!((scale.x - 0.52).abs() < 1e-9);
//!
//! pinch.end();
//! assert!(!pinch.is_active());
//! ```

use kurbo::Point;

/// Per-axis scale factors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale3 {
    /// Scale factor along the x axis.
    pub x: f64,
    /// Scale factor along the y axis.
    pub y: f64,
    /// Scale factor along the z axis.
    pub z: f64,
}

impl Scale3 {
    /// Creates a scale from per-axis factors.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a uniform scale with all axes set to `v`.
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }
}

/// Inclusive clamp bounds applied to each scale axis independently.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleLimits {
    /// Smallest permitted scale factor.
    pub min: f64,
    /// Largest permitted scale factor.
    pub max: f64,
}

impl ScaleLimits {
    fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: 0.1, max: 3.0 }
    }
}

/// Configuration for the pinch-to-zoom mapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinchConfig {
    /// Attenuation applied to the raw distance-ratio change.
    ///
    /// A spread from 100px to 120px is a 20% ratio change; at the default
    /// sensitivity of `0.2` it becomes a 4% scale change.
    pub sensitivity: f64,
    /// Clamp bounds applied per axis.
    pub limits: ScaleLimits,
    /// Scale assumed when the target has no scale attribute at gesture start.
    pub baseline: f64,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.2,
            limits: ScaleLimits::default(),
            baseline: 0.5,
        }
    }
}

/// Tracks a two-pointer pinch gesture.
#[derive(Copy, Clone, Debug, Default)]
pub struct PinchState {
    config: PinchConfig,
    anchor: Option<(f64, Scale3)>,
}

impl PinchState {
    /// Creates an inactive state with the given configuration.
    #[must_use]
    pub fn new(config: PinchConfig) -> Self {
        Self {
            config,
            anchor: None,
        }
    }

    /// Begins a pinch with both pointer positions and the target's scale.
    ///
    /// `scale` is the target's current per-axis scale; pass `None` when the
    /// attribute is absent to fall back to the configured baseline.
    pub fn begin(&mut self, a: Point, b: Point, scale: Option<Scale3>) {
        let scale = scale.unwrap_or(Scale3::splat(self.config.baseline));
        self.anchor = Some((a.distance(b), scale));
    }

    /// Advances the gesture to new pointer positions.
    ///
    /// Returns the clamped per-axis scale to write back, then rebases the
    /// anchor distance and anchor scale to the just-computed values. Returns
    /// `None` while inactive, or when the anchor distance is degenerate
    /// (coincident pointers), in which case only the distance is rebased.
    pub fn update(&mut self, a: Point, b: Point) -> Option<Scale3> {
        let (anchor_distance, anchor_scale) = self.anchor?;
        let current = a.distance(b);
        if anchor_distance <= f64::EPSILON {
            // No meaningful ratio from a zero-length anchor.
            self.anchor = Some((current, anchor_scale));
            return None;
        }
        let factor =
            1.0 + ((current - anchor_distance) / anchor_distance) * self.config.sensitivity;
        let limits = self.config.limits;
        let next = Scale3 {
            x: limits.clamp(anchor_scale.x * factor),
            y: limits.clamp(anchor_scale.y * factor),
            z: limits.clamp(anchor_scale.z * factor),
        };
        self.anchor = Some((current, next));
        Some(next)
    }

    /// Ends the gesture and resets the anchor. There is no inertia.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while a pinch gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }
}
