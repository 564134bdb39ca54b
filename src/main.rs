use golden2d::{run_all, run_generate, run_step};
use golden2d::{FilesConfig, GeneratorConfig, ParametersConfig, RunConfig, ScenarioConfig};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Golden reference for a softened 2D N-body kernel", long_about = None)]
struct Cli {
    /// Optional YAML scenario; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a reproducible random initial frame
    Generate(Overrides),
    /// Read a frame, compute accelerations and advance one step
    Step(Overrides),
    /// Generate then step
    Run(Overrides),
}

#[derive(Args, Debug, Default)]
struct Overrides {
    /// Number of particles to generate
    #[arg(short, long)]
    number: Option<usize>,

    #[arg(long, allow_hyphen_values = true)]
    pos_min: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pos_max: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    mass_min: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    mass_max: Option<f64>,

    /// Draw initial velocities in [-0.1, 0.1] instead of starting at rest
    #[arg(long, overrides_with = "zero_velocity")]
    random_velocity: bool,

    /// Start every particle at rest
    #[arg(long, overrides_with = "random_velocity")]
    zero_velocity: bool,

    /// Seed of the golden random stream
    #[arg(short, long)]
    seed: Option<u64>,

    /// Time step
    #[arg(long)]
    dt: Option<f64>,

    /// Softening added to r^2
    #[arg(long)]
    eps: Option<f64>,

    /// Global scale of the force law
    #[arg(short = 'G', long = "g-scale")]
    g_scale: Option<f64>,

    /// Frame read by `step` and written by `generate`
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long)]
    acc_output: Option<PathBuf>,

    #[arg(long)]
    full_output: Option<PathBuf>,

    #[arg(long)]
    next_frame: Option<PathBuf>,

    /// Skip the particle 0 summary
    #[arg(short, long, overrides_with = "debug")]
    quiet: bool,

    /// Log the particle 0 summary
    #[arg(long, overrides_with = "quiet")]
    debug: bool,
}

// paired on/off flags: unset leaves the config value alone
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

impl Overrides {
    fn into_scenario(self) -> ScenarioConfig {
        ScenarioConfig {
            generator: GeneratorConfig {
                n: self.number,
                pos_min: self.pos_min,
                pos_max: self.pos_max,
                mass_min: self.mass_min,
                mass_max: self.mass_max,
                vel_init_zero: switch(self.zero_velocity, self.random_velocity),
                seed: self.seed,
            },
            parameters: ParametersConfig {
                dt: self.dt,
                eps: self.eps,
                G: self.g_scale,
            },
            files: FilesConfig {
                input: self.input,
                acc_output: self.acc_output,
                full_output: self.full_output,
                next_frame: self.next_frame,
            },
            debug: switch(self.debug, self.quiet),
        }
    }
}

// defaults < yaml < flags
fn resolve_config(config: Option<PathBuf>, overrides: Overrides) -> Result<RunConfig> {
    let base = match config {
        Some(path) => ScenarioConfig::from_yaml_file(&path)?,
        None => ScenarioConfig::default(),
    };
    let run = base.overlay(overrides.into_scenario()).resolve()?;
    log::debug!("{:?}", run);
    Ok(run)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate(o) => {
            let run = resolve_config(cli.config, o)?;
            run_generate(&run)?;
        }
        Command::Step(o) => {
            let run = resolve_config(cli.config, o)?;
            run_step(&run)?;
        }
        Command::Run(o) => {
            let run = resolve_config(cli.config, o)?;
            run_all(&run)?;
        }
    }

    Ok(())
}
