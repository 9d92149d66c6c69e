//! Core state types for the elastic pendulum.
//!
//! Defines the single-mass state and its time derivative:
//! - `State`      position and velocity of the mass using `NVec2`
//! - `Derivative` d/dt of a `State` (velocity and acceleration)
//! - `Pendulum`   the state together with the elapsed simulation time `t`

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl State {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            x: NVec2::new(x, y),
            v: NVec2::new(vx, vy),
        }
    }

    /// Mass at rest at `(x, y)`
    pub fn at_rest(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// `(x, y, vx, vy)`
    pub fn components(&self) -> [f64; 4] {
        [self.x.x, self.x.y, self.v.x, self.v.y]
    }

    /// `self + h * d`, applied to all four components at once
    pub fn offset(&self, d: &Derivative, h: f64) -> Self {
        Self {
            x: self.x + h * d.dx,
            v: self.v + h * d.dv,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.components().iter().all(|c| c.is_finite())
    }
}

/// Time derivative of a [`State`]
/// `dx` is (dx/dt, dy/dt), `dv` is (dvx/dt, dvy/dt)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    pub dx: NVec2,
    pub dv: NVec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    pub state: State, // current state of the mass
    pub t: f64, // time
}

impl Pendulum {
    pub fn new(state: State) -> Self {
        Self { state, t: 0.0 }
    }
}
