//! Fixed-step time integrator for the pendulum
//!
//! Classical fourth-order Runge–Kutta driven by an `AccelSet` and `Parameters`.
//! No error estimate, the step size is fixed for the whole run.

use super::error::SimError;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{Pendulum, State};

/// One RK4 step of size `dt` starting from `state`
/// Returns the new state, the input is left untouched
pub fn advance(state: &State, forces: &AccelSet, params: &Parameters, dt: f64) -> Result<State, SimError> {
    let half_dt = 0.5 * dt; // half step dt/2

    // k1 at the start of the interval
    let k1 = forces.derivatives(state, params)?;

    // k2, k3 at the midpoint, using the previous slope to get there
    let k2 = forces.derivatives(&state.offset(&k1, half_dt), params)?;
    let k3 = forces.derivatives(&state.offset(&k2, half_dt), params)?;

    // k4 at the end of the interval
    let k4 = forces.derivatives(&state.offset(&k3, dt), params)?;

    // y_n+1 = y_n + dt/6 (k1 + 2 k2 + 2 k3 + k4), all four components together
    let w = dt / 6.0;
    Ok(State {
        x: state.x + w * (k1.dx + 2.0 * k2.dx + 2.0 * k3.dx + k4.dx),
        v: state.v + w * (k1.dv + 2.0 * k2.dv + 2.0 * k3.dv + k4.dv),
    })
}

/// Advance the pendulum by one step using RK4
/// Updates the state and `p.t` in-place based on `params.dt`.
/// On error nothing is modified.
pub fn rk4_integrator(p: &mut Pendulum, forces: &AccelSet, params: &Parameters) -> Result<(), SimError> {
    p.state = advance(&p.state, forces, params, params.dt)?;

    // Increment the time by one full step
    p.t += params.dt;
    Ok(())
}
