//! Build fully-initialized simulation runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - validated numerical parameters (`Parameters`)
//!
//! The driver then runs each configured method against the parameters and
//! hands the trajectories to the output layer.

use crate::configuration::config::{MethodConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::integrator::Method;
use crate::simulation::params::Parameters;

/// Runtime bundle for one scenario: engine settings plus validated parameters
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Methods: map `MethodConfig` -> runtime `Method`, preserving order
        let methods: Vec<Method> = cfg
            .engine
            .methods
            .iter()
            .map(|mc| match mc {
                MethodConfig::Euler => Method::Euler,
                MethodConfig::Heun => Method::Heun,
                MethodConfig::Rk4 => Method::Rk4,
            })
            .collect();

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            methods,
            b_sweep: cfg.engine.b_sweep.unwrap_or_else(|| vec![10.0, 5.0, 1.0]),
        };

        // Parameters (runtime) from ParametersConfig, rejected here if any
        // value is non-finite or out of range
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            m: p_cfg.m,
            b: p_cfg.b,
            ba: p_cfg.ba,
            k: p_cfg.k,
            ke: p_cfg.ke,
            g: p_cfg.g,
            x0: p_cfg.x0,
            v0: p_cfg.v0,
            h: p_cfg.h,
            t_max: p_cfg.t_max,
        };
        parameters.validate()?;

        Ok(Self { engine, parameters })
    }
}
