//! Pairwise acceleration kernel for the golden reference
//!
//! Direct O(N^2) sum of a softened inverse-cube law in 2D. Every (i, j)
//! term is evaluated on its own, so the result can be compared bit for bit
//! against an implementation that does not reuse the j -> i term either.

use crate::simulation::params::Parameters;
use crate::simulation::states::{AccelerationField, NVec2, ParticleTable};

/// Distance-dependent coefficient of the force law
///
/// `g(r2) = G * 1 / (r2 + eps)^(3/2)`, where `r2` is the unsoftened squared
/// separation `dx^2 + dy^2`
#[allow(non_snake_case)]
#[inline]
pub fn g_of_r2(r2: f64, eps: f64, G: f64) -> f64 {
    let r2e = r2 + eps;
    G * (1.0 / r2e.powf(1.5))
}

/// 2D softened gravity, direct sum without Newton's third law shortcut
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftenedGravity {
    pub G: f64, // global scale
    pub eps: f64, // softening, added to r^2
}

impl SoftenedGravity {
    pub fn from_params(params: &Parameters) -> Self {
        Self {
            G: params.G,
            eps: params.eps,
        }
    }

    /// Compute `a_i = sum_{j != i} m_j * g(r2_ij) * (x_j - x_i)` for every particle
    ///
    /// Accumulation is i-major with j ascending into a zeroed vector per i.
    /// Masses are not validated; a negative mass just flips its contribution.
    pub fn accelerations(&self, table: &ParticleTable) -> AccelerationField {
        let bodies = &table.particles;
        let n = bodies.len();
        let mut acc = Vec::with_capacity(n);

        // Outer loop: one target particle i at a time (i-major order)
        for i in 0..n {
            let xi = bodies[i].x; // position of particle i

            // Running sum for particle i, starts at exactly zero
            let mut ai = NVec2::zeros();

            // Inner loop: every source particle j, ascending
            // Each (i, j) term is computed here even though (j, i) is its
            // mirror, so no term is reused between the two particles
            for (j, bj) in bodies.iter().enumerate() {
                if j == i { // no self force
                    continue;
                }

                // d is the displacement vector from i to j
                // i is pulled along +d when m_j > 0
                let d = bj.x - xi;

                // Squared separation |d|^2 = dx^2 + dy^2 (softening not added yet)
                let r2 = d.x * d.x + d.y * d.y;

                // Distance factor with softening:
                //   g = G / (r2 + eps)^(3/2)
                // eps keeps g finite when i and j coincide (r2 = 0)
                let g = g_of_r2(r2, self.eps, self.G);

                // -------------------------
                // Contribution of j to i:
                //   a_i += (m_j * g) * d
                // the scalar m_j * g is formed first, then scales both
                // components of d; changing this grouping changes rounding
                // -------------------------
                ai += d * (bj.m * g);
            }

            // a_i is final once every j has been added
            acc.push(ai);
        }

        AccelerationField::new(acc)
    }
}

/// Free-function form of [`SoftenedGravity::accelerations`]
pub fn compute_accelerations(table: &ParticleTable, params: &Parameters) -> AccelerationField {
    SoftenedGravity::from_params(params).accelerations(table)
}
