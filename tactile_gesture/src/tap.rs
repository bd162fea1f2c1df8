// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap counter: detect rapid repeated activations within a rolling window.
//!
//! ## Usage
//!
//! 1) On each discrete activation (tap, click), call [`TapCounter::record`]
//!    with the host-supplied timestamp in milliseconds.
//! 2) When the call returns `true`, the threshold was reached inside the
//!    window: fire your toggle action. The counter has already reset.
//! 3) Hosts with a timer can call [`TapCounter::expire`] to clear a stale
//!    window eagerly; otherwise the next activation after the window lapses
//!    restarts the count on its own.
//!
//! The window is anchored at the first activation of a run. Reaching the
//! threshold fires exactly once per run; an activation arriving after the
//! window has elapsed starts a fresh run with a count of one.
//!
//! ## Minimal example
//!
//! ```
//! use tactile_gesture::tap::TapCounter;
//!
//! let mut taps = TapCounter::default();
//!
//! assert!(!taps.record(0));
//! assert!(!taps.record(400));
//! assert!(taps.record(800)); // three taps within 1000ms
//! assert_eq!(taps.count(), 0);
//!
//! // Two taps followed by silence never fire.
//! assert!(!taps.record(5000));
//! assert!(!taps.record(5100));
//! assert!(!taps.record(7000)); // window lapsed; this starts a new run
//! assert_eq!(taps.count(), 1);
//! ```

/// Configuration for rapid re-activation detection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TapConfig {
    /// Number of activations that fires the toggle.
    pub threshold: u32,
    /// Length of the rolling window, in milliseconds.
    pub window_ms: u64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            threshold: 3,
            window_ms: 1000,
        }
    }
}

/// Counts activations inside a rolling window and fires on a threshold.
#[derive(Copy, Clone, Debug, Default)]
pub struct TapCounter {
    config: TapConfig,
    count: u32,
    window_start: Option<u64>,
}

impl TapCounter {
    /// Creates a counter with the given configuration.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            count: 0,
            window_start: None,
        }
    }

    /// Records an activation at `now_ms`.
    ///
    /// Returns `true` exactly when this activation reaches the threshold
    /// inside the window; the counter resets before returning. An activation
    /// after the window has elapsed starts a new run counting from one.
    pub fn record(&mut self, now_ms: u64) -> bool {
        match self.window_start {
            Some(start) if now_ms.saturating_sub(start) < self.config.window_ms => {
                self.count += 1;
            }
            _ => {
                self.window_start = Some(now_ms);
                self.count = 1;
            }
        }
        if self.count >= self.config.threshold {
            self.reset();
            return true;
        }
        false
    }

    /// Resets the counter if the window has elapsed by `now_ms`.
    ///
    /// This is the timer-driven variant of the lazy reset performed by
    /// [`record`](Self::record); calling it is optional.
    pub fn expire(&mut self, now_ms: u64) {
        if let Some(start) = self.window_start {
            if now_ms.saturating_sub(start) >= self.config.window_ms {
                self.reset();
            }
        }
    }

    /// Unconditionally clears the current run.
    pub fn reset(&mut self) {
        self.count = 0;
        self.window_start = None;
    }

    /// Returns the number of activations in the current run.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}
