//! Angle sequences for relaxation-based tangent estimation.
//!
//! Each entry carries the current angle value and the interval it is
//! allowed to move in. The minimizer itself (the relaxation) lives
//! upstream; this type is the state that gets displayed.

use serde::{Deserialize, Serialize};

/// One angle with its admissible interval, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleEntry {
    /// Current angle value.
    pub value: f64,
    /// Lower bound of the admissible interval.
    pub min: f64,
    /// Upper bound of the admissible interval.
    pub max: f64,
}

impl AngleEntry {
    /// Entry from a value and its interval.
    #[must_use]
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        Self { value, min, max }
    }
}

/// A circular sequence of angle entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleMinimizer {
    entries: Vec<AngleEntry>,
}

impl AngleMinimizer {
    /// Minimizer state over the given entries.
    #[must_use]
    pub fn new(entries: Vec<AngleEntry>) -> Self {
        Self { entries }
    }

    /// Appends one entry.
    pub fn push(&mut self, entry: AngleEntry) {
        self.entries.push(entry);
    }

    /// The entries, in sequence order.
    #[must_use]
    pub fn entries(&self) -> &[AngleEntry] {
        &self.entries
    }

    /// Entry at position `i`.
    #[must_use]
    pub fn entry(&self, i: usize) -> AngleEntry {
        self.entries[i]
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
