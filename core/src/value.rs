use crate::NoiseGenerator;
use crate::hash::{PRIME_X, PRIME_Y, PRIME_Z, value2, value3};
use crate::utils::{interp_hermite, lattice, lerp};

// Value noise: a hashed scalar at every lattice corner, blended with a
// Hermite curve. Output lies in [-1, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueNoise;

impl NoiseGenerator for ValueNoise {
    fn get2(&self, seed: i32, x: f64, y: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();

        let xs = interp_hermite(x - xf);
        let ys = interp_hermite(y - yf);

        let x0 = lattice(xf).wrapping_mul(PRIME_X);
        let y0 = lattice(yf).wrapping_mul(PRIME_Y);
        let x1 = x0.wrapping_add(PRIME_X);
        let y1 = y0.wrapping_add(PRIME_Y);

        let xf0 = lerp(value2(seed, x0, y0), value2(seed, x1, y0), xs);
        let xf1 = lerp(value2(seed, x0, y1), value2(seed, x1, y1), xs);

        lerp(xf0, xf1, ys)
    }

    fn get3(&self, seed: i32, x: f64, y: f64, z: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let zf = z.floor();

        let xs = interp_hermite(x - xf);
        let ys = interp_hermite(y - yf);
        let zs = interp_hermite(z - zf);

        let x0 = lattice(xf).wrapping_mul(PRIME_X);
        let y0 = lattice(yf).wrapping_mul(PRIME_Y);
        let z0 = lattice(zf).wrapping_mul(PRIME_Z);
        let x1 = x0.wrapping_add(PRIME_X);
        let y1 = y0.wrapping_add(PRIME_Y);
        let z1 = z0.wrapping_add(PRIME_Z);

        let xf00 = lerp(value3(seed, x0, y0, z0), value3(seed, x1, y0, z0), xs);
        let xf10 = lerp(value3(seed, x0, y1, z0), value3(seed, x1, y1, z0), xs);
        let xf01 = lerp(value3(seed, x0, y0, z1), value3(seed, x1, y0, z1), xs);
        let xf11 = lerp(value3(seed, x0, y1, z1), value3(seed, x1, y1, z1), xs);

        let yf0 = lerp(xf00, xf10, ys);
        let yf1 = lerp(xf01, xf11, ys);

        lerp(yf0, yf1, zs)
    }
}
