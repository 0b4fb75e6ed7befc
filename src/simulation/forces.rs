//! Restoring-force model for the stopper oscillator
//!
//! Above the reference point the regular spring/damper pair (`b`, `k`) acts;
//! at or below it the elastic stopper pair (`ba`, `ke`) takes over, modeling
//! contact with a stiffer surface.

use super::params::Parameters;

/// Acceleration at position `x` with velocity `v`
///
/// Branches on the sign of `x`: strictly positive positions use the free
/// regime, everything else (including `x == 0`) uses the stopper regime.
/// The force law therefore jumps at `x = 0` whenever `(b, k) != (ba, ke)`;
/// that sharp boundary is intentional and must not be smoothed.
///
/// Pure function of its inputs. `params.m` is nonzero for any validated
/// parameter set.
pub fn acceleration(x: f64, v: f64, params: &Parameters) -> f64 {
    if x > 0.0 {
        // Free regime: regular spring and damping force
        (-params.b * v - params.k * x) / params.m - params.g
    } else {
        // Stopper regime: elastic stopper and alternate damping force
        (-params.ba * v - params.ke * x) / params.m - params.g
    }
}
