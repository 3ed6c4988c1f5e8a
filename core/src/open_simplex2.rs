use crate::NoiseGenerator;
use crate::hash::{PRIME_X, PRIME_Y, PRIME_Z, gradient2, gradient3};
use crate::utils::{G2, lattice};

const SCALE_2D: f64 = 99.836_854_463_036_47;
const SCALE_3D: f64 = 32.694_282_531_738_28;

// OpenSimplex2 ("fast" variant).
//
// 2D is simplex noise evaluated on coordinates that were already skewed by
// the caller (see `rotation`), radius^2 = 0.5.
// 3D sums two offset, rotated body-centred cube lattices with radius^2 = 0.6;
// the caller applies the lattice rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSimplex2Noise;

impl NoiseGenerator for OpenSimplex2Noise {
    fn get2(&self, seed: i32, x: f64, y: f64) -> f64 {
        let i = x.floor();
        let j = y.floor();
        let xi = x - i;
        let yi = y - j;

        let t = (xi + yi) * G2;
        let x0 = xi - t;
        let y0 = yi - t;

        let i = lattice(i).wrapping_mul(PRIME_X);
        let j = lattice(j).wrapping_mul(PRIME_Y);

        let a = 0.5 - x0 * x0 - y0 * y0;
        let n0 = if a <= 0.0 {
            0.0
        } else {
            (a * a) * (a * a) * gradient2(seed, i, j, x0, y0)
        };

        // Far corner weight expressed through `a` and `t`, saves a dot product
        let c = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
            + ((-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2)) + a);
        let n2 = if c <= 0.0 {
            0.0
        } else {
            let x2 = x0 + (2.0 * G2 - 1.0);
            let y2 = y0 + (2.0 * G2 - 1.0);
            (c * c)
                * (c * c)
                * gradient2(
                    seed,
                    i.wrapping_add(PRIME_X),
                    j.wrapping_add(PRIME_Y),
                    x2,
                    y2,
                )
        };

        let n1 = if y0 > x0 {
            let x1 = x0 + G2;
            let y1 = y0 + (G2 - 1.0);
            let b = 0.5 - x1 * x1 - y1 * y1;
            if b <= 0.0 {
                0.0
            } else {
                (b * b) * (b * b) * gradient2(seed, i, j.wrapping_add(PRIME_Y), x1, y1)
            }
        } else {
            let x1 = x0 + (G2 - 1.0);
            let y1 = y0 + G2;
            let b = 0.5 - x1 * x1 - y1 * y1;
            if b <= 0.0 {
                0.0
            } else {
                (b * b) * (b * b) * gradient2(seed, i.wrapping_add(PRIME_X), j, x1, y1)
            }
        };

        (n0 + n1 + n2) * SCALE_2D
    }

    fn get3(&self, seed: i32, x: f64, y: f64, z: f64) -> f64 {
        let mut seed = seed;

        let i = x.round();
        let j = y.round();
        let k = z.round();
        let mut x0 = x - i;
        let mut y0 = y - j;
        let mut z0 = z - k;

        // Negated sign of each offset, x0 is in [-0.5, 0.5]
        let mut x_n_sign = (-1.0 - x0) as i32 | 1;
        let mut y_n_sign = (-1.0 - y0) as i32 | 1;
        let mut z_n_sign = (-1.0 - z0) as i32 | 1;

        let mut ax0 = f64::from(x_n_sign) * -x0;
        let mut ay0 = f64::from(y_n_sign) * -y0;
        let mut az0 = f64::from(z_n_sign) * -z0;

        let mut i = lattice(i).wrapping_mul(PRIME_X);
        let mut j = lattice(j).wrapping_mul(PRIME_Y);
        let mut k = lattice(k).wrapping_mul(PRIME_Z);

        let mut value = 0.0;
        let mut a = (0.6 - x0 * x0) - (y0 * y0 + z0 * z0);

        // Two passes: the closest vertex of the first lattice, then of the
        // second lattice offset by half a cell
        for lattice_pass in 0..2 {
            if a > 0.0 {
                value += (a * a) * (a * a) * gradient3(seed, i, j, k, x0, y0, z0);
            }

            // The next closest vertex lies one step along the dominant axis
            if ax0 >= ay0 && ax0 >= az0 {
                let b = a + ax0 + ax0;
                if b > 1.0 {
                    let b = b - 1.0;
                    value += (b * b)
                        * (b * b)
                        * gradient3(
                            seed,
                            i.wrapping_sub(x_n_sign.wrapping_mul(PRIME_X)),
                            j,
                            k,
                            x0 + f64::from(x_n_sign),
                            y0,
                            z0,
                        );
                }
            } else if ay0 > ax0 && ay0 >= az0 {
                let b = a + ay0 + ay0;
                if b > 1.0 {
                    let b = b - 1.0;
                    value += (b * b)
                        * (b * b)
                        * gradient3(
                            seed,
                            i,
                            j.wrapping_sub(y_n_sign.wrapping_mul(PRIME_Y)),
                            k,
                            x0,
                            y0 + f64::from(y_n_sign),
                            z0,
                        );
                }
            } else {
                let b = a + az0 + az0;
                if b > 1.0 {
                    let b = b - 1.0;
                    value += (b * b)
                        * (b * b)
                        * gradient3(
                            seed,
                            i,
                            j,
                            k.wrapping_sub(z_n_sign.wrapping_mul(PRIME_Z)),
                            x0,
                            y0,
                            z0 + f64::from(z_n_sign),
                        );
                }
            }

            if lattice_pass == 1 {
                break;
            }

            ax0 = 0.5 - ax0;
            ay0 = 0.5 - ay0;
            az0 = 0.5 - az0;

            x0 = f64::from(x_n_sign) * ax0;
            y0 = f64::from(y_n_sign) * ay0;
            z0 = f64::from(z_n_sign) * az0;

            a += (0.75 - ax0) - (ay0 + az0);

            i = i.wrapping_add((x_n_sign >> 1) & PRIME_X);
            j = j.wrapping_add((y_n_sign >> 1) & PRIME_Y);
            k = k.wrapping_add((z_n_sign >> 1) & PRIME_Z);

            x_n_sign = -x_n_sign;
            y_n_sign = -y_n_sign;
            z_n_sign = -z_n_sign;

            seed = !seed;
        }

        value * SCALE_3D
    }
}

#[cfg(test)]
mod tests {
    use super::OpenSimplex2Noise;
    use crate::NoiseGenerator;

    #[test]
    fn open_simplex2_determinism() {
        let n = OpenSimplex2Noise;
        assert_eq!(n.get2(77, 0.3, 0.9), n.get2(77, 0.3, 0.9));
        assert_eq!(n.get3(77, 0.3, 0.9, -2.2), n.get3(77, 0.3, 0.9, -2.2));
    }

    #[test]
    fn open_simplex2_range() {
        let n = OpenSimplex2Noise;
        for i in 0..5000 {
            let t = i as f64 * 0.0419;
            assert!(n.get2(5, t, -t * 0.77).abs() <= 1.0 + 1e-6);
            assert!(n.get3(5, t * 0.3, t, -t * 1.3).abs() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn open_simplex2_differs_between_seeds() {
        let n = OpenSimplex2Noise;
        let differing = (0..100)
            .filter(|i| {
                let t = *i as f64 * 0.37 + 0.11;
                n.get3(1, t, t * 0.5, -t) != n.get3(2, t, t * 0.5, -t)
            })
            .count();
        assert!(differing > 90);
    }
}
