//! Core state types for the golden reference.
//!
//! Defines the 2D particle table and the acceleration field derived from it:
//! - `Particle` / `ParticleTable`  one time instant, using `NVec2`
//! - `AccelerationField`           one acceleration per particle, same order
//!
//! A particle's identity is its index in the table.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

impl Particle {
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Self {
        Self { x, v, m }
    }

    /// Particle at `x` with mass `m` and zero velocity
    pub fn at_rest(x: NVec2, m: f64) -> Self {
        Self { x, v: NVec2::zeros(), m }
    }
}

/// Ordered particles for one time instant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleTable {
    pub particles: Vec<Particle>,
}

impl ParticleTable {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}

impl FromIterator<Particle> for ParticleTable {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self { particles: iter.into_iter().collect() }
    }
}

/// Accelerations computed from exactly one `ParticleTable` snapshot.
/// `acc[i]` belongs to particle `i` of that table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccelerationField {
    pub acc: Vec<NVec2>,
}

impl AccelerationField {
    pub fn new(acc: Vec<NVec2>) -> Self {
        Self { acc }
    }

    pub fn len(&self) -> usize {
        self.acc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acc.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NVec2> {
        self.acc.iter()
    }
}
