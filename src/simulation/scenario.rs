//! Build fully-initialized pendulum scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical and physical parameters (`Parameters`)
//! - pendulum state (`Pendulum` at t = 0)
//! - active force set (`AccelSet`)
//! - batch and live settings
//!
//! The scenario is inserted into Bevy as a `Resource` by the live viewer
//! and driven directly by the batch comparison.

use bevy::prelude::Resource;
use tracing::info;

use crate::configuration::config::{BatchConfig, LiveConfig, ScenarioConfig, SpringConfig};
use crate::simulation::energy::relative_drift;
use crate::simulation::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::rk4_integrator;
use crate::simulation::params::{Parameters, SpringLaw};
use crate::simulation::states::{NVec2, Pendulum, State};
use crate::simulation::tail::Tail;
use crate::simulation::trajectory::{run_batch, Trajectory};

/// Bevy resource representing a fully-initialized pendulum scenario
///
/// Parameters are fixed once built; only `pendulum` changes while the
/// simulation runs.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub pendulum: Pendulum,
    pub forces: AccelSet,
    pub batch: BatchConfig,
    pub live: LiveConfig,
}

/// One recorded batch run and its legend label
#[derive(Debug, Clone)]
pub struct LabeledRun {
    pub label: String,
    pub trajectory: Trajectory,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let spring = match p_cfg.spring {
            SpringConfig::FixedStretch { stretch } => SpringLaw::FixedStretch { stretch },
            SpringConfig::NaturalLength { rest_length } => SpringLaw::NaturalLength { rest_length },
        };
        let parameters = Parameters {
            mass: p_cfg.mass,
            stiffness: p_cfg.stiffness,
            spring,
            damping: p_cfg.damping,
            gravity: p_cfg.gravity,
            anchor: NVec2::new(p_cfg.anchor[0], p_cfg.anchor[1]),
            dt: p_cfg.dt,
        };
        parameters.validate()?;

        // Initial state at t = 0
        let i_cfg = cfg.initial;
        let initial = State::new(i_cfg.x[0], i_cfg.x[1], i_cfg.v[0], i_cfg.v[1]);
        if !initial.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "initial",
                reason: format!("state must be finite, got {:?}", initial.components()),
            });
        }

        if cfg.batch.y_offsets.iter().any(|dy| !dy.is_finite()) {
            return Err(SimError::InvalidParameter {
                name: "batch.y_offsets",
                reason: "offsets must be finite".to_string(),
            });
        }
        if cfg.live.tail == 0 {
            return Err(SimError::InvalidParameter {
                name: "live.tail",
                reason: "trail needs at least one sample".to_string(),
            });
        }
        if !(cfg.live.steps_per_second.is_finite() && cfg.live.steps_per_second > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "live.steps_per_second",
                reason: format!("must be positive, got {}", cfg.live.steps_per_second),
            });
        }
        if cfg.live.max_steps_per_frame == 0 {
            return Err(SimError::InvalidParameter {
                name: "live.max_steps_per_frame",
                reason: "at least one step per frame is needed to advance".to_string(),
            });
        }
        if cfg.live.window.iter().any(|side| !(side.is_finite() && *side > 0.0)) {
            return Err(SimError::InvalidParameter {
                name: "live.window",
                reason: format!("sides must be positive, got {:?}", cfg.live.window),
            });
        }

        Ok(Self {
            parameters,
            pendulum: Pendulum::new(initial),
            forces: AccelSet::elastic_pendulum(),
            batch: cfg.batch,
            live: cfg.live,
        })
    }

    /// Advance the live pendulum by one fixed step
    pub fn step(&mut self) -> Result<(), SimError> {
        let Scenario { pendulum, forces, parameters, .. } = self;
        rk4_integrator(pendulum, forces, parameters)
    }

    /// Run `due` live steps, pushing the position each step starts from
    /// into `trail` first. Stops at the first failing step, whose start
    /// position is already in the trail while the state is left untouched.
    pub fn advance_live(&mut self, trail: &mut Tail, due: u32) -> Result<(), SimError> {
        for _ in 0..due {
            trail.push(self.pendulum.state.x);
            self.step()?;
        }
        Ok(())
    }

    /// Run the batch comparison: one trajectory per configured y offset,
    /// all starting from the scenario's initial state
    pub fn run_comparison(&self) -> Result<Vec<LabeledRun>, SimError> {
        let start = self.pendulum.state;
        let mut runs = Vec::with_capacity(self.batch.y_offsets.len());

        for (i, dy) in self.batch.y_offsets.iter().enumerate() {
            let mut initial = start;
            initial.x.y += dy;

            let label = format!("init {}", i + 1);
            info!(run = %label, x = initial.x.x, y = initial.x.y, steps = self.batch.steps, "integrating");

            let trajectory = run_batch(initial, &self.forces, &self.parameters, self.batch.steps)?;
            if let Some(last) = trajectory.last() {
                let drift = relative_drift(&initial, last, &self.parameters);
                info!(run = %label, samples = trajectory.len(), energy_drift = drift, "run complete");
            }

            runs.push(LabeledRun { label, trajectory });
        }

        Ok(runs)
    }
}
