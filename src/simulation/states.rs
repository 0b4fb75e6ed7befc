//! Core state types for the oscillator simulation
//!
//! Defines the single-degree-of-freedom sample and sequence types:
//! - `State` — one (t, x, v) instant, immutable once produced
//! - `Trajectory` — the ordered samples of one integrator run
//!
//! A trajectory is built incrementally during a run and never mutated after
//! the generating call returns.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub t: f64, // time
    pub x: f64, // position
    pub v: f64, // velocity
}

#[derive(Debug, Clone)]
pub struct Trajectory {
    pub samples: Vec<State>, // ordered samples, strictly increasing t
}

impl Trajectory {
    /// Trajectory seeded with its initial sample, preallocated for `steps`
    /// further samples
    pub fn with_initial(initial: State, steps: usize) -> Self {
        let mut samples = Vec::with_capacity(steps + 1);
        samples.push(initial);
        Self { samples }
    }

    /// Final sample, if any
    pub fn last(&self) -> Option<&State> {
        self.samples.last()
    }

    /// Number of samples (steps taken + 1 for a completed run)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
