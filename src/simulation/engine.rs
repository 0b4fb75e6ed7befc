//! High-level runtime engine settings
//!
//! Selects which integration methods to run and the damping values used
//! for the Euler-only sweep

use crate::simulation::integrator::Method;

#[derive(Debug, Clone)]
pub struct Engine {
    pub methods: Vec<Method>, // integrators to run, in order
    pub b_sweep: Vec<f64>,    // free-regime damping values for the Euler sweep
}
