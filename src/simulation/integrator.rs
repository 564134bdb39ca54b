//! Fixed-step time integrator for the golden reference
//!
//! One semi-implicit (symplectic) Euler step: kick the velocity with the
//! supplied accelerations, then drift the position with the new velocity.

use super::states::{AccelerationField, Particle, ParticleTable};

/// Advance `table` by one step of size `dt` using accelerations `field`
///
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
///
/// Mass is carried through unchanged. `field` must have been computed from
/// `table`; a length mismatch panics.
pub fn semi_implicit_euler(table: &ParticleTable, field: &AccelerationField, dt: f64) -> ParticleTable {
    assert_eq!(
        table.len(),
        field.len(),
        "acceleration field does not match particle table"
    );

    table
        .iter()
        .zip(field.iter())
        .map(|(p, a)| {
            // Kick: velocity first
            let v = p.v + *a * dt;
            // Drift: uses the updated velocity
            let x = p.x + v * dt;
            Particle { x, v, m: p.m }
        })
        .collect()
}
