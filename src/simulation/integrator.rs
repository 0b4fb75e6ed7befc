//! Fixed-step time integrators for the stopper oscillator
//!
//! Provides explicit Euler, Heun (improved Euler), and classical 4th-order
//! Runge-Kutta, all driven by `acceleration` and `Parameters`. The three
//! methods share one stepping loop and termination rule; only the per-step
//! update differs. Every step has extent exactly `h`.

use super::error::SimError;
use super::forces::acceleration;
use super::params::Parameters;
use super::rest::REST_TOLERANCE;
use super::states::{State, Trajectory};

/// Ceiling on `t_max / h`; runs that would need more steps are rejected
/// before the loop starts
pub const MAX_STEPS: u64 = 100_000_000;

/// Per-step update rule driving the shared loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Euler, // first order, one force evaluation per step
    Heun,  // second order, predictor-corrector
    Rk4,   // fourth order, four stage evaluations
}

impl Method {
    /// Short lowercase name used for output files and logs
    pub fn name(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Heun => "heun",
            Method::Rk4 => "rk4",
        }
    }

    /// Advance one state by a single step of extent `params.h`
    fn step(&self, s: &State, params: &Parameters) -> State {
        match self {
            Method::Euler => euler_step(s, params),
            Method::Heun => heun_step(s, params),
            Method::Rk4 => rk4_step(s, params),
        }
    }
}

/// Run `method` from `(t = 0, x0, v0)` until the horizon or the rest condition
///
/// The loop keeps going while `t < t_max` AND the system has not settled
/// (`|v| >= 0.001` or `|x| >= 0.001`). The returned trajectory always contains
/// the initial sample; with `t_max = 0` or an initially settled state it
/// contains nothing else.
pub fn integrate(method: Method, params: &Parameters) -> Result<Trajectory, SimError> {
    params.validate()?;

    // The loop takes at most ceil(t_max / h) steps, so the budget can be
    // checked upfront. The float-to-int cast saturates for absurd ratios.
    let required = (params.t_max / params.h).ceil() as u64;
    if required > MAX_STEPS {
        return Err(SimError::StepBudgetExceeded {
            required,
            max: MAX_STEPS,
        });
    }

    let mut state = State {
        t: 0.0,
        x: params.x0,
        v: params.v0,
    };
    let mut traj = Trajectory::with_initial(state, required as usize);

    while state.t < params.t_max
        && (state.v.abs() >= REST_TOLERANCE || state.x.abs() >= REST_TOLERANCE)
    {
        state = method.step(&state, params);

        // A diverging run is aborted rather than padded with garbage
        if !state.x.is_finite() || !state.v.is_finite() {
            return Err(SimError::NonFiniteState { t: state.t });
        }
        traj.samples.push(state);
    }

    Ok(traj)
}

/// One explicit-Euler step
///
/// The position update uses the *old* velocity: first-order accurate and not
/// symplectic
fn euler_step(s: &State, p: &Parameters) -> State {
    let h = p.h; // time step

    // a_n from (x_n, v_n)
    let a = acceleration(s.x, s.v, p);

    // x_n+1 = x_n + h v_n,  v_n+1 = v_n + h a_n
    State {
        t: s.t + h,
        x: s.x + h * s.v,
        v: s.v + h * a,
    }
}

/// One Heun step: Euler predictor, trapezoidal corrector (second order)
fn heun_step(s: &State, p: &Parameters) -> State {
    let h = p.h; // time step

    // a1 from the current state
    let a1 = acceleration(s.x, s.v, p);

    // Predictor: plain Euler estimate of the state at t + h
    let x_pred = s.x + h * s.v;
    let v_pred = s.v + h * a1;

    // Corrector: average the slopes at both ends of the step
    let a2 = acceleration(x_pred, v_pred, p);
    State {
        t: s.t + h,
        x: s.x + h * 0.5 * (s.v + v_pred),
        v: s.v + h * 0.5 * (a1 + a2),
    }
}

/// One classical RK4 step with dx/dt = v and dv/dt = acceleration(x, v)
fn rk4_step(s: &State, p: &Parameters) -> State {
    let h = p.h; // time step
    let (x_n, v_n) = (s.x, s.v);

    // Stage 1: slopes at the start of the step
    let k1x = h * v_n;
    let k1v = h * acceleration(x_n, v_n, p);

    // Stage 2: slopes at the midpoint, using stage-1 estimates
    let k2x = h * (v_n + 0.5 * k1v);
    let k2v = h * acceleration(x_n + 0.5 * k1x, v_n + 0.5 * k1v, p);

    // Stage 3: slopes at the midpoint again, using stage-2 estimates
    let k3x = h * (v_n + 0.5 * k2v);
    let k3v = h * acceleration(x_n + 0.5 * k2x, v_n + 0.5 * k2v, p);

    // Stage 4: slopes at the end of the step
    let k4x = h * (v_n + k3v);
    let k4v = h * acceleration(x_n + k3x, v_n + k3v, p);

    // Weighted combination: (k1 + 2 k2 + 2 k3 + k4) / 6
    State {
        t: s.t + h,
        x: x_n + (k1x + 2.0 * k2x + 2.0 * k3x + k4x) / 6.0,
        v: v_n + (k1v + 2.0 * k2v + 2.0 * k3v + k4v) / 6.0,
    }
}
