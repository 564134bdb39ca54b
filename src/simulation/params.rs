//! Numerical and physical parameters for one golden step
//!
//! `Parameters` holds the runtime settings read by the force kernel and the
//! integrator:
//! - softening and global scale (`eps`, `G`),
//! - the fixed step size `dt`

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub eps: f64, // softening added to r^2
    pub G: f64, // global scale of the force law
    pub dt: f64, // step size
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            eps: 1e-3,
            G: 1.0,
            dt: 1e-2,
        }
    }
}
