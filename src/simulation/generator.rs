//! Reproducible initial particle tables
//!
//! Builds a pseudo-random `ParticleTable` from a `ReferenceSpec` and an
//! explicit `ChaChaRng`. The random stream is consumed in a fixed order that
//! is part of the golden contract:
//!
//! 1. positions, particle 0..N, x then y
//! 2. masses, particle 0..N
//! 3. velocities, particle 0..N, x then y (skipped entirely when
//!    `zero_velocity` is set)
//!
//! Every draw is `min + (max - min) * u` with `u` uniform in `[0, 1)`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::simulation::states::{NVec2, Particle, ParticleTable};

/// Half-width of the symmetric range used for non-zero initial velocities
pub const VELOCITY_SPAN: f64 = 0.1;

/// What to generate
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSpec {
    pub n: usize, // particle count
    pub pos_range: (f64, f64), // [min, max] per coordinate
    pub mass_range: (f64, f64), // [min, max]
    pub zero_velocity: bool, // true -> all velocities are exactly zero
}

impl Default for ReferenceSpec {
    fn default() -> Self {
        Self {
            n: 8,
            pos_range: (-1.0, 1.0),
            mass_range: (0.5, 2.0),
            zero_velocity: true,
        }
    }
}

/// Seed the golden random stream
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

fn uniform(rng: &mut ChaChaRng, (min, max): (f64, f64)) -> f64 {
    min + (max - min) * rng.random::<f64>()
}

/// Draw a table from `rng` following the documented order
pub fn generate(spec: &ReferenceSpec, rng: &mut ChaChaRng) -> ParticleTable {
    let n = spec.n;

    let positions: Vec<NVec2> = (0..n)
        .map(|_| {
            let x = uniform(rng, spec.pos_range);
            let y = uniform(rng, spec.pos_range);
            NVec2::new(x, y)
        })
        .collect();

    let masses: Vec<f64> = (0..n).map(|_| uniform(rng, spec.mass_range)).collect();

    let velocities: Vec<NVec2> = if spec.zero_velocity {
        vec![NVec2::zeros(); n]
    } else {
        let span = (-VELOCITY_SPAN, VELOCITY_SPAN);
        (0..n)
            .map(|_| {
                let vx = uniform(rng, span);
                let vy = uniform(rng, span);
                NVec2::new(vx, vy)
            })
            .collect()
    };

    positions
        .into_iter()
        .zip(velocities)
        .zip(masses)
        .map(|((x, v), m)| Particle::new(x, v, m))
        .collect()
}

/// Convenience: seed a fresh stream and generate from it
pub fn generate_seeded(spec: &ReferenceSpec, seed: u64) -> ParticleTable {
    let mut rng = seeded_rng(seed);
    generate(spec, &mut rng)
}
