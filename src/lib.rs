pub mod simulation;
pub mod configuration;
pub mod textio;

pub use simulation::states::{Particle, ParticleTable, AccelerationField, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{SoftenedGravity, g_of_r2, compute_accelerations};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::generator::{ReferenceSpec, generate, generate_seeded, seeded_rng};
pub use simulation::engine::{GoldenStep, golden_step, run_generate, run_step, run_all};

pub use configuration::config::{GeneratorConfig, ParametersConfig, FilesConfig, ScenarioConfig, RunConfig};

pub use textio::frames::{parse_frame, read_frame, render_frame, render_accelerations, render_full};
