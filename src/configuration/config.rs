//! Configuration types for loading golden-run scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`GeneratorConfig`]  – reference-state generator settings
//! - [`ParametersConfig`] – force law and step size
//! - [`FilesConfig`]      – input and output paths
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every key is optional. Missing keys fall back to the built-in defaults
//! when the scenario is resolved into a [`RunConfig`], and command-line flags
//! are layered on top with [`ScenarioConfig::overlay`].
//!
//! # YAML format
//!
//! ```yaml
//! generator:
//!   n: 8                    # particle count
//!   pos_min: -1.0           # position range, per coordinate
//!   pos_max:  1.0
//!   mass_min: 0.5           # mass range
//!   mass_max: 2.0
//!   vel_init_zero: true     # false -> velocities uniform in [-0.1, 0.1]
//!   seed: 0                 # golden random stream seed
//!
//! parameters:
//!   dt: 1.0e-2              # step size
//!   eps: 1.0e-3             # softening added to r^2
//!   G: 1.0                  # global scale
//!
//! files:
//!   input: input_frame0.txt
//!   acc_output: golden_acc.txt
//!   full_output: golden_out_full.txt
//!   next_frame: input_frame1.txt
//!
//! debug: true               # log particle 0 before/after the step
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::simulation::generator::ReferenceSpec;
use crate::simulation::params::Parameters;

/// Generator settings
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub n: Option<usize>, // number of particles
    pub pos_min: Option<f64>,
    pub pos_max: Option<f64>,
    pub mass_min: Option<f64>,
    pub mass_max: Option<f64>,
    pub vel_init_zero: Option<bool>, // zero initial velocity?
    pub seed: Option<u64>, // seed of the golden random stream
}

/// Force law and step size
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub dt: Option<f64>, // time step
    pub eps: Option<f64>, // softening
    pub G: Option<f64>, // global scale
}

/// Input and output files
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    pub input: Option<PathBuf>, // frame read by `step`, written by `generate`
    pub acc_output: Option<PathBuf>, // i acc_x acc_y
    pub full_output: Option<PathBuf>, // frame columns + accelerations
    pub next_frame: Option<PathBuf>, // frame after one step
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub generator: GeneratorConfig,
    pub parameters: ParametersConfig,
    pub files: FilesConfig,
    pub debug: Option<bool>, // log particle 0 summary
}

fn pick<T>(low: Option<T>, high: Option<T>) -> Option<T> {
    high.or(low)
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("invalid scenario yaml")
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader)
            .with_context(|| format!("invalid scenario yaml {}", path.display()))
    }

    /// Layer `over` on top of `self`; any value set in `over` wins
    pub fn overlay(self, over: ScenarioConfig) -> Self {
        let g = self.generator;
        let og = over.generator;
        let p = self.parameters;
        let op = over.parameters;
        let f = self.files;
        let of = over.files;

        Self {
            generator: GeneratorConfig {
                n: pick(g.n, og.n),
                pos_min: pick(g.pos_min, og.pos_min),
                pos_max: pick(g.pos_max, og.pos_max),
                mass_min: pick(g.mass_min, og.mass_min),
                mass_max: pick(g.mass_max, og.mass_max),
                vel_init_zero: pick(g.vel_init_zero, og.vel_init_zero),
                seed: pick(g.seed, og.seed),
            },
            parameters: ParametersConfig {
                dt: pick(p.dt, op.dt),
                eps: pick(p.eps, op.eps),
                G: pick(p.G, op.G),
            },
            files: FilesConfig {
                input: pick(f.input, of.input),
                acc_output: pick(f.acc_output, of.acc_output),
                full_output: pick(f.full_output, of.full_output),
                next_frame: pick(f.next_frame, of.next_frame),
            },
            debug: pick(self.debug, over.debug),
        }
    }

    /// Fill in defaults and validate, producing the runtime configuration
    pub fn resolve(self) -> Result<RunConfig> {
        let defaults = RunConfig::default();
        let g = self.generator;
        let p = self.parameters;
        let f = self.files;

        let spec = ReferenceSpec {
            n: g.n.unwrap_or(defaults.spec.n),
            pos_range: (
                g.pos_min.unwrap_or(defaults.spec.pos_range.0),
                g.pos_max.unwrap_or(defaults.spec.pos_range.1),
            ),
            mass_range: (
                g.mass_min.unwrap_or(defaults.spec.mass_range.0),
                g.mass_max.unwrap_or(defaults.spec.mass_range.1),
            ),
            zero_velocity: g.vel_init_zero.unwrap_or(defaults.spec.zero_velocity),
        };

        let params = Parameters {
            eps: p.eps.unwrap_or(defaults.params.eps),
            G: p.G.unwrap_or(defaults.params.G),
            dt: p.dt.unwrap_or(defaults.params.dt),
        };

        let run = RunConfig {
            spec,
            seed: g.seed.unwrap_or(defaults.seed),
            params,
            input: f.input.unwrap_or(defaults.input),
            acc_output: f.acc_output.unwrap_or(defaults.acc_output),
            full_output: f.full_output.unwrap_or(defaults.full_output),
            next_frame: f.next_frame.unwrap_or(defaults.next_frame),
            debug: self.debug.unwrap_or(defaults.debug),
        };
        run.validate()?;
        Ok(run)
    }
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub spec: ReferenceSpec,
    pub seed: u64,
    pub params: Parameters,
    pub input: PathBuf,
    pub acc_output: PathBuf,
    pub full_output: PathBuf,
    pub next_frame: PathBuf,
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            spec: ReferenceSpec::default(),
            seed: 0,
            params: Parameters::default(),
            input: PathBuf::from("input_frame0.txt"),
            acc_output: PathBuf::from("golden_acc.txt"),
            full_output: PathBuf::from("golden_out_full.txt"),
            next_frame: PathBuf::from("input_frame1.txt"),
            debug: true,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        let (pos_min, pos_max) = self.spec.pos_range;
        let (mass_min, mass_max) = self.spec.mass_range;

        ensure!(
            pos_min.is_finite() && pos_max.is_finite() && pos_min <= pos_max,
            "position range [{pos_min}, {pos_max}] is invalid"
        );
        ensure!(
            mass_min.is_finite() && mass_max.is_finite() && mass_min <= mass_max,
            "mass range [{mass_min}, {mass_max}] is invalid"
        );
        ensure!(
            self.params.eps > 0.0 && self.params.eps.is_finite(),
            "softening eps must be positive, got {}",
            self.params.eps
        );
        ensure!(
            self.params.dt >= 0.0 && self.params.dt.is_finite(),
            "time step dt must be non-negative, got {}",
            self.params.dt
        );
        ensure!(self.params.G.is_finite(), "global scale G must be finite");
        Ok(())
    }
}
