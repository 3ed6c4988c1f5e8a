use crate::NoiseGenerator;
use crate::hash::{PRIME_X, PRIME_Y, PRIME_Z, gradient2, gradient3};
use crate::utils::{F2, G2, lattice};

// Skewing/Unskewing factors for 3D simplex
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

// Squared radius of influence around each simplex vertex
const RADIUS_SQ_2D: f64 = 0.5;
const RADIUS_SQ_3D: f64 = 0.6;

// The result is scaled to return roughly [-1,1] to make it consistent
const SCALE_2D: f64 = 99.836_854_463_036_47;
const SCALE_3D: f64 = 32.0;

// Classic simplex noise.
// Simplex divides space into triangles (tetrahedra in 3D) rather than
// squares, which gives better isotropy and visits n+1 corners instead of 2^n.
// Unlike the OpenSimplex2 samplers it skews its own input, so it takes plain
// frequency-scaled coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexNoise;

// (r^2 - d^2)^4 * dot(gradient, offset), zero outside the radius
#[inline(always)]
fn falloff(radius_sq: f64, d_sq: f64) -> Option<f64> {
    let t = radius_sq - d_sq;
    if t > 0.0 {
        let t_sq = t * t;
        Some(t_sq * t_sq)
    } else {
        None
    }
}

impl NoiseGenerator for SimplexNoise {
    fn get2(&self, seed: i32, x: f64, y: f64) -> f64 {
        // Skew input space to determine simplex cell
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        // Unskew back to get the relative position to the origin corner
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Determine which simplex triangle we are in (Lower or Upper)
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        // Offsets for remaining corners
        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ip = lattice(i).wrapping_mul(PRIME_X);
        let jp = lattice(j).wrapping_mul(PRIME_Y);

        let mut n = 0.0;
        if let Some(w) = falloff(RADIUS_SQ_2D, x0 * x0 + y0 * y0) {
            n += w * gradient2(seed, ip, jp, x0, y0);
        }
        if let Some(w) = falloff(RADIUS_SQ_2D, x1 * x1 + y1 * y1) {
            let ip1 = ip.wrapping_add(PRIME_X.wrapping_mul(i1));
            let jp1 = jp.wrapping_add(PRIME_Y.wrapping_mul(j1));
            n += w * gradient2(seed, ip1, jp1, x1, y1);
        }
        if let Some(w) = falloff(RADIUS_SQ_2D, x2 * x2 + y2 * y2) {
            let ip2 = ip.wrapping_add(PRIME_X);
            let jp2 = jp.wrapping_add(PRIME_Y);
            n += w * gradient2(seed, ip2, jp2, x2, y2);
        }

        n * SCALE_2D
    }

    fn get3(&self, seed: i32, x: f64, y: f64, z: f64) -> f64 {
        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();

        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        // Rank the offsets to pick which of the six tetrahedra holds the point
        let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let x1 = x0 - f64::from(i1) + G3;
        let y1 = y0 - f64::from(j1) + G3;
        let z1 = z0 - f64::from(k1) + G3;
        let x2 = x0 - f64::from(i2) + 2.0 * G3;
        let y2 = y0 - f64::from(j2) + 2.0 * G3;
        let z2 = z0 - f64::from(k2) + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ip = lattice(i).wrapping_mul(PRIME_X);
        let jp = lattice(j).wrapping_mul(PRIME_Y);
        let kp = lattice(k).wrapping_mul(PRIME_Z);

        let corner = |di: i32, dj: i32, dk: i32| {
            (
                ip.wrapping_add(PRIME_X.wrapping_mul(di)),
                jp.wrapping_add(PRIME_Y.wrapping_mul(dj)),
                kp.wrapping_add(PRIME_Z.wrapping_mul(dk)),
            )
        };

        let mut n = 0.0;
        if let Some(w) = falloff(RADIUS_SQ_3D, x0 * x0 + y0 * y0 + z0 * z0) {
            n += w * gradient3(seed, ip, jp, kp, x0, y0, z0);
        }
        if let Some(w) = falloff(RADIUS_SQ_3D, x1 * x1 + y1 * y1 + z1 * z1) {
            let (a, b, c) = corner(i1, j1, k1);
            n += w * gradient3(seed, a, b, c, x1, y1, z1);
        }
        if let Some(w) = falloff(RADIUS_SQ_3D, x2 * x2 + y2 * y2 + z2 * z2) {
            let (a, b, c) = corner(i2, j2, k2);
            n += w * gradient3(seed, a, b, c, x2, y2, z2);
        }
        if let Some(w) = falloff(RADIUS_SQ_3D, x3 * x3 + y3 * y3 + z3 * z3) {
            let (a, b, c) = corner(1, 1, 1);
            n += w * gradient3(seed, a, b, c, x3, y3, z3);
        }

        n * SCALE_3D
    }
}

#[cfg(test)]
mod tests {
    use super::SimplexNoise;
    use crate::NoiseGenerator;

    #[test]
    fn simplex_determinism() {
        let s = SimplexNoise;
        assert_eq!(s.get2(9999, 1.23, 4.56), s.get2(9999, 1.23, 4.56));
        assert_eq!(s.get3(9999, 1.23, 4.56, -7.0), s.get3(9999, 1.23, 4.56, -7.0));
    }

    #[test]
    fn simplex_range() {
        let s = SimplexNoise;
        for i in 0..5000 {
            let t = i as f64 * 0.0371;
            let a = s.get2(0, t, 13.0 - t * 0.61);
            let b = s.get3(0, t * 0.9, -t, t * 0.45 + 3.0);
            assert!(a.abs() <= 1.0 + 1e-6, "2D value {a}");
            assert!(b.abs() <= 1.0 + 1e-6, "3D value {b}");
        }
    }

    #[test]
    fn simplex_is_zero_at_origin_vertex() {
        // only the origin vertex is in reach and its offset is zero
        let s = SimplexNoise;
        assert_eq!(s.get2(4, 0.0, 0.0), 0.0);
    }
}
