pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{State, Derivative, Pendulum, NVec2};
pub use simulation::params::{Parameters, SpringLaw};
pub use simulation::error::SimError;
pub use simulation::forces::{Acceleration, AccelSet, SpringRestoring, UniformGravity, LinearDamping, GEOMETRY_EPSILON};
pub use simulation::integrator::{advance, rk4_integrator};
pub use simulation::energy::{energy, relative_drift, Energy};
pub use simulation::trajectory::{run_batch, Trajectory};
pub use simulation::tail::Tail;
pub use simulation::clock::FixedStepClock;
pub use simulation::scenario::{Scenario, LabeledRun};

pub use configuration::config::{ScenarioConfig, ParametersConfig, SpringConfig, InitialConfig, BatchConfig, LiveConfig};

pub use visualization::{pendulum_plot::plot_runs, pendulum_vis2d::run_2d};
