//! Convergence detection
//!
//! Sliding-window stability check over normalized average-fitness samples.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Sliding-window detector for average-fitness stabilization
///
/// Holds the most recent `capacity` normalized samples (each in `[0, 1]`).
/// The tracked quantity counts as still changing until the window has
/// filled, and afterwards whenever the window's max-min spread exceeds the
/// tolerance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConvergenceTracker {
    /// Most recent samples, oldest first
    window: VecDeque<f64>,
    /// Maximum number of samples retained
    capacity: usize,
    /// Spread under which the samples count as stable
    tolerance: f64,
}

impl ConvergenceTracker {
    /// Create a tracker with the given window capacity and tolerance
    pub fn new(capacity: usize, tolerance: f64) -> Self {
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
            tolerance,
        }
    }

    /// Append a sample, evicting the oldest once the window is full
    pub fn record(&mut self, sample: f64) {
        self.window.push_back(sample);
        while self.window.len() > self.capacity {
            self.window.pop_front();
        }
    }

    /// Whether the tracked quantity is still judged to be moving
    ///
    /// Reports `true` while fewer than `capacity` samples have been seen
    /// (not enough history to judge stability). Once full, reports `true`
    /// iff `max - min > tolerance`.
    pub fn is_changing(&self) -> bool {
        if self.window.len() < self.capacity {
            return true;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &sample in &self.window {
            min = min.min(sample);
            max = max.max(sample);
        }
        max - min > self.tolerance
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if no samples have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Spread tolerance
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The retained samples, oldest first
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.window.iter().copied()
    }
}
