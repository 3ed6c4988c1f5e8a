use crate::NoiseGenerator;
use crate::hash::{PRIME_X, PRIME_Y, PRIME_Z, gradient2, gradient3};
use crate::utils::{interp_quintic, lattice, lerp};

// Rescale the raw gradient sum to roughly [-1, +1]
const SCALE_2D: f64 = 1.424_769_110_467_781_3;
const SCALE_3D: f64 = 0.964_921_414_852_142_3;

// Classic gradient (Perlin) noise: a hashed gradient at each of the 2^n cell
// corners, dotted with the offset to the sample point and blended with the
// quintic fade
#[derive(Debug, Clone, Copy, Default)]
pub struct PerlinNoise;

impl NoiseGenerator for PerlinNoise {
    fn get2(&self, seed: i32, x: f64, y: f64) -> f64 {
        // Find unit square that contains point (Which square to sample?)
        let xf = x.floor();
        let yf = y.floor();
        // Relative x/y within the square (Where within the square?)
        let xd0 = x - xf;
        let yd0 = y - yf;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;

        let xs = interp_quintic(xd0);
        let ys = interp_quintic(yd0);

        let x0 = lattice(xf).wrapping_mul(PRIME_X);
        let y0 = lattice(yf).wrapping_mul(PRIME_Y);
        let x1 = x0.wrapping_add(PRIME_X);
        let y1 = y0.wrapping_add(PRIME_Y);

        let xf0 = lerp(
            gradient2(seed, x0, y0, xd0, yd0),
            gradient2(seed, x1, y0, xd1, yd0),
            xs,
        );
        let xf1 = lerp(
            gradient2(seed, x0, y1, xd0, yd1),
            gradient2(seed, x1, y1, xd1, yd1),
            xs,
        );

        // Interpolate the two results along y
        lerp(xf0, xf1, ys) * SCALE_2D
    }

    fn get3(&self, seed: i32, x: f64, y: f64, z: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let zf = z.floor();

        let xd0 = x - xf;
        let yd0 = y - yf;
        let zd0 = z - zf;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;
        let zd1 = zd0 - 1.0;

        let xs = interp_quintic(xd0);
        let ys = interp_quintic(yd0);
        let zs = interp_quintic(zd0);

        let x0 = lattice(xf).wrapping_mul(PRIME_X);
        let y0 = lattice(yf).wrapping_mul(PRIME_Y);
        let z0 = lattice(zf).wrapping_mul(PRIME_Z);
        let x1 = x0.wrapping_add(PRIME_X);
        let y1 = y0.wrapping_add(PRIME_Y);
        let z1 = z0.wrapping_add(PRIME_Z);

        let xf00 = lerp(
            gradient3(seed, x0, y0, z0, xd0, yd0, zd0),
            gradient3(seed, x1, y0, z0, xd1, yd0, zd0),
            xs,
        );
        let xf10 = lerp(
            gradient3(seed, x0, y1, z0, xd0, yd1, zd0),
            gradient3(seed, x1, y1, z0, xd1, yd1, zd0),
            xs,
        );
        let xf01 = lerp(
            gradient3(seed, x0, y0, z1, xd0, yd0, zd1),
            gradient3(seed, x1, y0, z1, xd1, yd0, zd1),
            xs,
        );
        let xf11 = lerp(
            gradient3(seed, x0, y1, z1, xd0, yd1, zd1),
            gradient3(seed, x1, y1, z1, xd1, yd1, zd1),
            xs,
        );

        let yf0 = lerp(xf00, xf10, ys);
        let yf1 = lerp(xf01, xf11, ys);

        // Final interpolation along z
        lerp(yf0, yf1, zs) * SCALE_3D
    }
}

#[cfg(test)]
mod tests {
    use super::PerlinNoise;
    use crate::NoiseGenerator;

    #[test]
    fn perlin_determinism() {
        let p = PerlinNoise;
        // Same seed + coordinates => same bits
        assert_eq!(p.get2(1234, 10.5, -3.7), p.get2(1234, 10.5, -3.7));
        assert_eq!(p.get3(2025, 1.23, 4.56, 7.89), p.get3(2025, 1.23, 4.56, 7.89));
    }

    #[test]
    fn perlin_is_zero_on_lattice_points() {
        // Every corner gradient is dotted with a zero offset there
        let p = PerlinNoise;
        assert_eq!(p.get2(7, 3.0, -8.0), 0.0);
        assert_eq!(p.get3(7, -1.0, 0.0, 12.0), 0.0);
    }

    #[test]
    // Stays within [-1.0, 1.0] range
    fn perlin_range() {
        let p = PerlinNoise;
        for &(x, y) in &[(0.0, 0.0), (5.3, -1.2), (100.1, 200.2), (0.5, 0.5)] {
            let v = p.get2(0, x, y);
            assert!((-1.0 - 1e-6..=1.0 + 1e-6).contains(&v));
        }
        for &(x, y, z) in &[(0.0, 0.0, 0.0), (1.5, -2.5, 3.5), (100.1, 200.2, -50.3)] {
            let v = p.get3(0, x, y, z);
            assert!((-1.0 - 1e-6..=1.0 + 1e-6).contains(&v));
        }
    }

    #[test]
    fn perlin_seed_changes_output() {
        let p = PerlinNoise;
        assert_ne!(p.get2(1, 0.37, 0.61), p.get2(2, 0.37, 0.61));
    }
}
