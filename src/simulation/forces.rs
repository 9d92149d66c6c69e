//! Force / acceleration contributors for the pendulum
//!
//! Defines the acceleration trait and the three terms acting on the mass:
//! spring restoring force, uniform gravity and linear damping.
//! An [`AccelSet`] sums them into the derivative of the state.

use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Derivative, NVec2, State};

/// Below this anchor distance the spring direction is treated as undefined
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Collection of acceleration terms (spring, gravity, damping, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector for the mass
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Spring + gravity + damping, the full elastic pendulum
    pub fn elastic_pendulum() -> Self {
        Self::new()
            .with(SpringRestoring)
            .with(UniformGravity)
            .with(LinearDamping)
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration on the mass in `state`
    pub fn accumulate_accel(&self, state: &State, params: &Parameters) -> Result<NVec2, SimError> {
        let mut out = NVec2::zeros();
        for term in &self.terms {
            term.acceleration(state, params, &mut out)?;
        }
        Ok(out)
    }

    /// Time derivative of `state`: position changes with the velocity,
    /// velocity with the summed acceleration
    pub fn derivatives(&self, state: &State, params: &Parameters) -> Result<Derivative, SimError> {
        let dv = self.accumulate_accel(state, params)?;
        Ok(Derivative { dx: state.v, dv })
    }
}

/// Trait for acceleration sources acting on the mass
/// Implementations add their contribution into `out`
pub trait Acceleration {
    fn acceleration(&self, state: &State, params: &Parameters, out: &mut NVec2) -> Result<(), SimError>;
}

/// Hooke's law along the anchor -> mass direction
/// Magnitude is `stiffness * elongation / mass`, elongation given by the `SpringLaw`
pub struct SpringRestoring;

impl Acceleration for SpringRestoring {
    fn acceleration(&self, state: &State, params: &Parameters, out: &mut NVec2) -> Result<(), SimError> {
        // r points from the anchor to the mass
        let r = state.x - params.anchor;
        let distance = r.norm();
        if distance < GEOMETRY_EPSILON {
            return Err(SimError::DegenerateGeometry { distance });
        }

        // (sin, cos) of the spring angle
        let unit = r / distance;
        let magnitude = params.stiffness * params.spring.elongation(distance) / params.mass;

        // A stretched spring pulls the mass back toward the anchor
        *out -= magnitude * unit;
        Ok(())
    }
}

/// Constant gravitational pull along +y
pub struct UniformGravity;

impl Acceleration for UniformGravity {
    fn acceleration(&self, _state: &State, params: &Parameters, out: &mut NVec2) -> Result<(), SimError> {
        out.y += params.gravity;
        Ok(())
    }
}

/// Linear drag, `-(damping / mass) * v`
pub struct LinearDamping;

impl Acceleration for LinearDamping {
    fn acceleration(&self, state: &State, params: &Parameters, out: &mut NVec2) -> Result<(), SimError> {
        *out -= (params.damping / params.mass) * state.v;
        Ok(())
    }
}
