//! Mechanical energy of the pendulum, used as an integrator health check

use super::params::{Parameters, SpringLaw};
use super::states::State;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub kinetic: f64,
    pub spring: f64,
    pub gravitational: f64,
}

impl Energy {
    pub fn total(&self) -> f64 {
        self.kinetic + self.spring + self.gravitational
    }
}

/// Energy of `state`, zero potential at the anchor distance 0 / y = 0
pub fn energy(state: &State, params: &Parameters) -> Energy {
    let distance = (state.x - params.anchor).norm();

    let kinetic = 0.5 * params.mass * state.v.norm_squared();
    let spring = match params.spring {
        // constant-magnitude central force, potential grows linearly
        SpringLaw::FixedStretch { stretch } => params.stiffness * stretch * distance,
        SpringLaw::NaturalLength { rest_length } => {
            0.5 * params.stiffness * (distance - rest_length).powi(2)
        }
    };
    // gravity pulls toward +y
    let gravitational = -params.mass * params.gravity * state.x.y;

    Energy { kinetic, spring, gravitational }
}

/// `|E(b) - E(a)| / |E(a)|`, falling back to the absolute drift when `E(a)` is 0
pub fn relative_drift(a: &State, b: &State, params: &Parameters) -> f64 {
    let e0 = energy(a, params).total();
    let e1 = energy(b, params).total();
    let drift = (e1 - e0).abs();
    if e0 == 0.0 {
        drift
    } else {
        drift / e0.abs()
    }
}
