use springsim::{ScenarioConfig, Scenario};
use springsim::{plot_runs, run_2d};

use clap::{Parser, ValueEnum};
use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Mode {
    /// integrate both initial conditions and plot them
    Batch,
    /// animate the pendulum in a window
    Live,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(value_enum, default_value_t = Mode::Batch)]
    mode: Mode,

    /// scenario file under `scenarios/`, built-in constants when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// chart written by batch mode
    #[arg(short, long, default_value = "elastic_pendulum.svg")]
    output: PathBuf,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = match (&args.file_name, args.mode) {
        (Some(file_name), _) => load_scenario_from_yaml(file_name)?,
        (None, Mode::Batch) => ScenarioConfig::elastic_pendulum(),
        (None, Mode::Live) => ScenarioConfig::spring_forces(),
    };
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    match args.mode {
        Mode::Batch => {
            // live mode gets its subscriber from bevy's LogPlugin
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();

            info!(source = args.file_name.as_deref().unwrap_or("built-in"), "batch comparison");
            let runs = scenario.run_comparison()?;

            // separation of every run from the first one
            if let Some((reference, rest)) = runs.split_first() {
                for run in rest {
                    let gap = reference.trajectory.divergence(&run.trajectory);
                    let widest = gap.iter().copied().fold(0.0, f64::max);
                    let last = gap.last().copied().unwrap_or(0.0);
                    info!(a = %reference.label, b = %run.label, max_separation = widest, final_separation = last, "sensitivity");
                }
            }

            plot_runs(&args.output, &runs)?;
        }
        Mode::Live => {
            let exit = run_2d(scenario);
            if exit.is_error() {
                bail!("live viewer exited with an error");
            }
        }
    }

    Ok(())
}
