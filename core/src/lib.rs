// core holds the noise kernel: lattice hashing, the primitive samplers,
// fractal layering, domain warp and the `Noise` facade tying them together
pub mod cellular;
pub mod config;
pub mod domain_warp;
pub mod error;
pub mod fractal;
pub mod hash;
pub mod noise;
pub mod open_simplex2;
pub mod open_simplex2s;
pub mod perlin;
pub mod rotation;
pub mod simplex;
pub mod tables;
pub mod utils;
pub mod value;
pub mod value_cubic;

pub use cellular::{CellularNoise, CellularSearch};
pub use config::{
    CellularDistance, CellularReturn, DomainWarpFractal, DomainWarpType, FractalType, NoiseConfig,
    NoiseType, RotationType,
};
pub use domain_warp::DomainWarp;
pub use error::NoiseError;
pub use fractal::Fractal;
pub use noise::{Coord, Noise};
pub use open_simplex2::OpenSimplex2Noise;
pub use open_simplex2s::OpenSimplex2SNoise;
pub use perlin::PerlinNoise;
pub use rotation::{Transform2D, Transform3D};
pub use simplex::SimplexNoise;
pub use value::ValueNoise;
pub use value_cubic::ValueCubicNoise;

// A primitive sampler: one octave of one noise family at a given seed.
// Coordinates arrive already scaled by frequency (and skewed or rotated where
// the family needs it). Every implementation is a pure function of its
// arguments, so one instance can be shared across threads.
pub trait NoiseGenerator: Send + Sync {
    // Sample 2D noise at (x, y)
    fn get2(&self, seed: i32, x: f64, y: f64) -> f64;

    // Sample 3D noise at (x, y, z)
    fn get3(&self, seed: i32, x: f64, y: f64, z: f64) -> f64;
}
