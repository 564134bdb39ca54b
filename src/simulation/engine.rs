//! Golden pipeline driver
//!
//! generator -> loader -> force kernel -> integrator -> writer
//!
//! Each entry point takes the resolved `RunConfig` explicitly. All output
//! text is rendered before the first file is created, so a failing run leaves
//! no partial set of golden files behind.

use anyhow::Result;

use crate::configuration::config::RunConfig;
use crate::simulation::forces::compute_accelerations;
use crate::simulation::generator::{generate, seeded_rng};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{AccelerationField, ParticleTable};
use crate::textio::frames::{self, render_accelerations, render_frame, render_full};

/// One frame, its accelerations and the frame that follows
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenStep {
    pub current: ParticleTable,
    pub acc: AccelerationField,
    pub next: ParticleTable,
}

/// Pure core: accelerations of `current`, then one semi-implicit Euler step
pub fn golden_step(current: ParticleTable, params: &Parameters) -> GoldenStep {
    let acc = compute_accelerations(&current, params);
    let next = semi_implicit_euler(&current, &acc, params.dt);
    GoldenStep { current, acc, next }
}

/// Generate the reference initial frame and write it to `run.input`
pub fn run_generate(run: &RunConfig) -> Result<ParticleTable> {
    log::debug!("generator: {:?}, seed {}", run.spec, run.seed);

    let mut rng = seeded_rng(run.seed);
    let table = generate(&run.spec, &mut rng);

    frames::write_frame(&run.input, &table)?;
    log::info!("Generated {} with N={}", run.input.display(), table.len());

    Ok(table)
}

/// Read `run.input`, evaluate the kernel, integrate, and write all outputs
pub fn run_step(run: &RunConfig) -> Result<GoldenStep> {
    let current = frames::read_frame(&run.input)?;
    log::info!("Read N={} from {}", current.len(), run.input.display());

    let step = golden_step(current, &run.params);

    // render everything before touching the filesystem
    let acc_text = render_accelerations(&step.acc);
    let full_text = render_full(&step.current, &step.acc);
    let next_text = render_frame(&step.next);

    frames::write_text(&run.acc_output, &acc_text)?;
    frames::write_text(&run.full_output, &full_text)?;
    frames::write_text(&run.next_frame, &next_text)?;

    if run.debug {
        log_first_particle(&step);
    }
    log::info!(
        "Wrote {}, {}, and {}",
        run.acc_output.display(),
        run.full_output.display(),
        run.next_frame.display()
    );

    Ok(step)
}

/// `run_generate` followed by `run_step`
pub fn run_all(run: &RunConfig) -> Result<GoldenStep> {
    run_generate(run)?;
    run_step(run)
}

fn log_first_particle(step: &GoldenStep) {
    // nothing to show for an empty frame
    let (Some(p), Some(a), Some(q)) = (
        step.current.particles.first(),
        step.acc.acc.first(),
        step.next.particles.first(),
    ) else {
        return;
    };

    log::info!(
        "pos[0]=[{}, {}]  vel[0]=[{}, {}]  acc[0]=[{}, {}]",
        p.x.x, p.x.y, p.v.x, p.v.y, a.x, a.y
    );
    log::info!(
        "pos_next[0]=[{}, {}]  vel_next[0]=[{}, {}]",
        q.x.x, q.x.y, q.v.x, q.v.y
    );
}
