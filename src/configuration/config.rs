//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which methods to run and the damping sweep
//! - [`ParametersConfig`] – oscillator parameters and numerical settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   methods: [euler, heun, rk4]
//!   b_sweep: [10.0, 5.0, 1.0]   # optional: Euler re-runs with varied b
//!
//! parameters:
//!   m: 1.0          # mass
//!   b: 0.5          # damping, free regime
//!   ba: 2.0         # damping, stopper regime
//!   k: 5.0          # stiffness, free regime
//!   ke: 50.0        # stiffness, stopper regime
//!   g: 9.8          # gravitational acceleration
//!   x0: 1.0         # initial position
//!   v0: 0.0         # initial velocity
//!   h: 0.0001       # step size
//!   t_max: 10.0     # simulation horizon
//! ```
//!
//! Missing or non-numeric keys are rejected by `serde_yaml` at load time;
//! range checks (positive `m` and `h`, finite values) happen when the
//! scenario is built into its runtime representation.

use serde::Deserialize;

/// Which integration method(s) the engine runs
/// `methods: [euler, heun, rk4]` in YAML
#[derive(Deserialize, Debug, Clone, Copy)]
pub enum MethodConfig {
    #[serde(rename = "euler")] // explicit Euler, first-order accurate
    Euler,

    #[serde(rename = "heun")] // Heun predictor-corrector, second-order
    Heun,

    #[serde(rename = "rk4")] // classical 4th-order Runge-Kutta, the reference method
    Rk4,
}

/// High-level engine configuration
/// Controls which runs the driver performs
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub methods: Vec<MethodConfig>, // integrators to run, in order
    pub b_sweep: Option<Vec<f64>>,  // Euler damping sweep; defaults to [10, 5, 1]
}

/// Oscillator parameters exactly as they appear in the scenario file
/// The key names are the wire format; keep them as-is
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
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

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // which methods to run, sweep values
    pub parameters: ParametersConfig, // oscillator and numerical parameters
}
