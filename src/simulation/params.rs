//! Physical and numerical parameters for the pendulum
//!
//! `Parameters` is built once at start and only ever borrowed afterwards:
//! - mass, stiffness and spring law,
//! - linear damping and gravity (positive gravity pulls toward +y),
//! - anchor point and fixed step size `dt`

use super::error::SimError;
use super::states::NVec2;

/// Restoring-force law of the spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpringLaw {
    /// Constant elongation regardless of the current geometry
    FixedStretch { stretch: f64 },
    /// Hookean spring, elongation is `distance - rest_length`
    NaturalLength { rest_length: f64 },
}

impl SpringLaw {
    /// Spring elongation when the mass is `distance` from the anchor
    pub fn elongation(&self, distance: f64) -> f64 {
        match *self {
            SpringLaw::FixedStretch { stretch } => stretch,
            SpringLaw::NaturalLength { rest_length } => distance - rest_length,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub mass: f64, // mass of the bob
    pub stiffness: f64, // spring constant k
    pub spring: SpringLaw, // restoring-force law
    pub damping: f64, // linear damping coefficient b
    pub gravity: f64, // gravitational acceleration along +y
    pub anchor: NVec2, // fixed spring end
    pub dt: f64, // step size
}

impl Parameters {
    /// Reject values the integrator cannot work with
    pub fn validate(&self) -> Result<(), SimError> {
        let finite = [
            ("mass", self.mass),
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("gravity", self.gravity),
            ("anchor.x", self.anchor.x),
            ("anchor.y", self.anchor.y),
            ("dt", self.dt),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(name, format!("must be finite, got {value}")));
            }
        }

        if self.mass <= 0.0 {
            return Err(invalid("mass", format!("must be positive, got {}", self.mass)));
        }
        if self.dt <= 0.0 {
            return Err(invalid("dt", format!("must be positive, got {}", self.dt)));
        }
        if self.stiffness < 0.0 {
            return Err(invalid("stiffness", format!("must not be negative, got {}", self.stiffness)));
        }
        if self.damping < 0.0 {
            return Err(invalid("damping", format!("must not be negative, got {}", self.damping)));
        }

        match self.spring {
            SpringLaw::FixedStretch { stretch } if !stretch.is_finite() => {
                Err(invalid("stretch", format!("must be finite, got {stretch}")))
            }
            SpringLaw::NaturalLength { rest_length } if !(rest_length.is_finite() && rest_length >= 0.0) => {
                Err(invalid("rest_length", format!("must be finite and not negative, got {rest_length}")))
            }
            _ => Ok(()),
        }
    }
}

fn invalid(name: &'static str, reason: String) -> SimError {
    SimError::InvalidParameter { name, reason }
}
