//! Numerical and physical parameters for one oscillator run
//!
//! `Parameters` holds runtime settings:
//! - mass and the two damping/stiffness pairs (free regime and stopper regime),
//! - gravitational acceleration,
//! - initial state, step size, and simulation horizon
//!
//! Field names track the scenario file keys one-to-one; those keys are the
//! wire format and must not be renamed

use crate::simulation::error::SimError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub m: f64,     // mass
    pub b: f64,     // damping coefficient, free regime
    pub ba: f64,    // damping coefficient, stopper regime
    pub k: f64,     // stiffness coefficient, free regime
    pub ke: f64,    // stiffness coefficient, stopper regime
    pub g: f64,     // gravitational acceleration
    pub x0: f64,    // initial position
    pub v0: f64,    // initial velocity
    pub h: f64,     // step size
    pub t_max: f64, // simulation horizon
}

impl Parameters {
    /// Reject non-finite values and out-of-range `m`/`h`/`t_max` before a run
    ///
    /// `t_max == 0` is allowed: the run then returns only the initial sample
    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            ("m", self.m),
            ("b", self.b),
            ("ba", self.ba),
            ("k", self.k),
            ("ke", self.ke),
            ("g", self.g),
            ("x0", self.x0),
            ("v0", self.v0),
            ("h", self.h),
            ("t_max", self.t_max),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if self.m <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "m",
                value: self.m,
                reason: "must be strictly positive",
            });
        }
        if self.h <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "h",
                value: self.h,
                reason: "must be strictly positive",
            });
        }
        if self.t_max < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "t_max",
                value: self.t_max,
                reason: "must be non-negative",
            });
        }
        Ok(())
    }
}
