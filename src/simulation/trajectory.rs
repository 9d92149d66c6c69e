//! In-memory recording of a batch run
//!
//! `Trajectory` keeps every post-step state and the matching elapsed time
//! in two parallel vectors, in temporal order. `run_batch` drives the
//! integrator for a fixed number of steps and records into one.

use tracing::debug;

use super::error::SimError;
use super::forces::AccelSet;
use super::integrator::rk4_integrator;
use super::params::Parameters;
use super::states::{NVec2, Pendulum, State};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
    times: Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            states: Vec::with_capacity(n),
            times: Vec::with_capacity(n),
        }
    }

    /// Append one sample
    pub fn record(&mut self, state: State, t: f64) {
        self.states.push(state);
        self.times.push(t);
    }

    /// Recorded `(state, t)` pairs in order
    pub fn history(&self) -> impl Iterator<Item = (&State, f64)> + '_ {
        self.states.iter().zip(self.times.iter().copied())
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Positions only, for plotting
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.states.iter().map(|s| (s.x.x, s.x.y))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn last(&self) -> Option<&State> {
        self.states.last()
    }

    /// Euclidean distance between matched positions of two runs
    /// Stops at the shorter of the two
    pub fn divergence(&self, other: &Trajectory) -> Vec<f64> {
        self.states
            .iter()
            .zip(other.states.iter())
            .map(|(a, b)| (a.x - b.x).norm())
            .collect()
    }
}

/// Integrate `steps` RK4 steps from `initial` and record every state,
/// the initial condition included (`steps + 1` samples)
pub fn run_batch(initial: State, forces: &AccelSet, params: &Parameters, steps: usize) -> Result<Trajectory, SimError> {
    let mut pendulum = Pendulum::new(initial);
    let mut trajectory = Trajectory::with_capacity(steps + 1);
    trajectory.record(pendulum.state, pendulum.t);

    for _ in 0..steps {
        rk4_integrator(&mut pendulum, forces, params)?;
        trajectory.record(pendulum.state, pendulum.t);
    }

    let end: NVec2 = pendulum.state.x;
    debug!(steps, t = pendulum.t, x = end.x, y = end.y, "batch run finished");
    Ok(trajectory)
}
