//! Configuration types for loading pendulum scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the fixed step size
//! - [`InitialConfig`]    – initial position and velocity of the mass
//! - [`BatchConfig`]      – step count and initial-condition offsets of the batch comparison
//! - [`LiveConfig`]       – window, trail and clock settings of the live viewer
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section falls back to the batch reference values, so an empty
//! document is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   mass: 0.5
//!   stiffness: 6.0
//!   spring:
//!     law: natural_length   # or fixed_stretch, with `stretch:`
//!     rest_length: 2.0
//!   damping: 0.005
//!   gravity: 9.81           # along +y, y points down
//!   anchor: [ 2.0, 2.0 ]
//!   dt: 0.01
//!
//! initial:
//!   x: [ 1.0, 1.0 ]
//!   v: [ 0.0, 0.0 ]
//!
//! batch:
//!   steps: 3000
//!   y_offsets: [ 0.0, 0.1 ] # one run per offset, added to initial y
//!
//! live:
//!   window: [ 800.0, 800.0 ]
//!   tail: 50
//!   steps_per_second: 60.0
//!   max_steps_per_frame: 8
//! ```

use serde::Deserialize;

/// Restoring-force law, `law: "fixed_stretch"` or `law: "natural_length"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum SpringConfig {
    FixedStretch { stretch: f64 }, // constant elongation
    NaturalLength { rest_length: f64 }, // Hookean, elongation from the current length
}

/// Physical constants and step size
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub spring: SpringConfig,
    pub damping: f64,     // linear damping coefficient
    pub gravity: f64,     // gravitational acceleration along +y
    pub anchor: [f64; 2], // fixed spring end
    pub dt: f64,          // fixed step size
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            mass: 0.5,
            stiffness: 6.0,
            spring: SpringConfig::NaturalLength { rest_length: 2.0 },
            damping: 0.005,
            gravity: 9.81,
            anchor: [2.0, 2.0],
            dt: 0.01,
        }
    }
}

/// Initial state of the mass
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InitialConfig {
    pub x: [f64; 2], // position
    pub v: [f64; 2], // velocity
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            x: [1.0, 1.0],
            v: [0.0, 0.0],
        }
    }
}

/// Batch comparison of several initial conditions
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BatchConfig {
    pub steps: usize,        // RK4 steps per run
    pub y_offsets: Vec<f64>, // one run per entry, shifted along y from `initial.x`
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            steps: 3000,
            y_offsets: vec![0.0, 0.1],
        }
    }
}

/// Live viewer settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LiveConfig {
    pub window: [f32; 2],         // logical window size, also the simulation's pixel frame
    pub tail: usize,              // trail length in samples
    pub steps_per_second: f64,    // physics steps per real second
    pub max_steps_per_frame: u32, // catch-up cap after a slow frame
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            window: [800.0, 800.0],
            tail: 50,
            steps_per_second: 60.0,
            max_steps_per_frame: 8,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub initial: InitialConfig,
    pub batch: BatchConfig,
    pub live: LiveConfig,
}

impl ScenarioConfig {
    /// Batch reference: two starts 0.1 apart in y, 3000 steps
    pub fn elastic_pendulum() -> Self {
        Self::default()
    }

    /// Live reference, in window pixels with y pointing down
    pub fn spring_forces() -> Self {
        Self {
            parameters: ParametersConfig {
                mass: 2.5,
                stiffness: 1.0,
                spring: SpringConfig::NaturalLength { rest_length: 200.0 },
                damping: 0.13,
                gravity: 9.81,
                anchor: [300.0, 100.0],
                dt: 0.02,
            },
            initial: InitialConfig {
                x: [500.0, 400.0],
                v: [0.0, 0.0],
            },
            batch: BatchConfig::default(),
            live: LiveConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_batch_reference() {
        let cfg: ScenarioConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, ScenarioConfig::elastic_pendulum());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let yaml = "
parameters:
  mass: 1.5
  spring:
    law: fixed_stretch
    stretch: 2.0
batch:
  steps: 10
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.parameters.mass, 1.5);
        assert_eq!(cfg.parameters.spring, SpringConfig::FixedStretch { stretch: 2.0 });
        assert_eq!(cfg.parameters.stiffness, 6.0);
        assert_eq!(cfg.batch.steps, 10);
        assert_eq!(cfg.batch.y_offsets, vec![0.0, 0.1]);
        assert_eq!(cfg.live, LiveConfig::default());
    }

    #[test]
    fn unknown_spring_law_is_rejected() {
        let yaml = "
parameters:
  spring:
    law: cubic
";
        assert!(serde_yaml::from_str::<ScenarioConfig>(yaml).is_err());
    }
}
