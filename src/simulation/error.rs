//! Error taxonomy for simulation runs
//!
//! Every variant is fatal to the single run that produced it; the driver
//! reports it and moves on to the remaining methods or sweep values

use thiserror::Error;

/// Errors a single integrator run can produce
#[derive(Debug, Error)]
pub enum SimError {
    /// A required parameter is out of range or not finite
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Scenario key of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Position or velocity became NaN or infinite; the run diverged
    #[error("non-finite state at t = {t}")]
    NonFiniteState {
        /// Time of the first non-finite sample
        t: f64,
    },

    /// `t_max / h` asks for more steps than the ceiling allows
    #[error("step budget exceeded: {required} steps needed, ceiling is {max}")]
    StepBudgetExceeded {
        /// Steps the run would take
        required: u64,
        /// Hard ceiling on steps per run
        max: u64,
    },
}
