use crate::NoiseGenerator;
use crate::hash::{PRIME_X, PRIME_Y, PRIME_Z, gradient2, gradient3};
use crate::utils::{G2, lattice};

const RADIUS_SQ_2D: f64 = 2.0 / 3.0;
const RADIUS_SQ_3D: f64 = 0.75;

const SCALE_2D: f64 = 18.241_961_944_860_65;
const SCALE_3D: f64 = 9.046_026_385_208_288;

// Offset between the two interleaved 3D lattices' seeds
const SECOND_LATTICE_SEED: i32 = 1_293_373;

// OpenSimplex2S ("smooth" variant): larger kernels than OpenSimplex2, more
// vertices per sample. Like OpenSimplex2 it expects coordinates already
// skewed (2D) or rotated (3D) by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSimplex2SNoise;

#[inline(always)]
fn pow4(a: f64) -> f64 {
    let a2 = a * a;
    a2 * a2
}

impl NoiseGenerator for OpenSimplex2SNoise {
    fn get2(&self, seed: i32, x: f64, y: f64) -> f64 {
        let i = x.floor();
        let j = y.floor();
        let xi = x - i;
        let yi = y - j;

        let i = lattice(i).wrapping_mul(PRIME_X);
        let j = lattice(j).wrapping_mul(PRIME_Y);
        let i1 = i.wrapping_add(PRIME_X);
        let j1 = j.wrapping_add(PRIME_Y);

        let t = (xi + yi) * G2;
        let x0 = xi - t;
        let y0 = yi - t;

        // The two corners on the cell diagonal always contribute
        let a0 = RADIUS_SQ_2D - x0 * x0 - y0 * y0;
        let mut value = pow4(a0) * gradient2(seed, i, j, x0, y0);

        let a1 = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
            + ((-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2)) + a0);
        let x1 = x0 - (1.0 - 2.0 * G2);
        let y1 = y0 - (1.0 - 2.0 * G2);
        value += pow4(a1) * gradient2(seed, i1, j1, x1, y1);

        let mut add = |xd: f64, yd: f64, xp: i32, yp: i32| {
            let a = RADIUS_SQ_2D - xd * xd - yd * yd;
            if a > 0.0 {
                value += pow4(a) * gradient2(seed, xp, yp, xd, yd);
            }
        };

        // Two more vertices, picked by which third of the cell we are in
        let xmyi = xi - yi;
        if t > G2 {
            if xi + xmyi > 1.0 {
                add(
                    x0 + (3.0 * G2 - 2.0),
                    y0 + (3.0 * G2 - 1.0),
                    i.wrapping_add(PRIME_X << 1),
                    j.wrapping_add(PRIME_Y),
                );
            } else {
                add(x0 + G2, y0 + (G2 - 1.0), i, j.wrapping_add(PRIME_Y));
            }

            if yi - xmyi > 1.0 {
                add(
                    x0 + (3.0 * G2 - 1.0),
                    y0 + (3.0 * G2 - 2.0),
                    i.wrapping_add(PRIME_X),
                    j.wrapping_add(PRIME_Y << 1),
                );
            } else {
                add(x0 + (G2 - 1.0), y0 + G2, i.wrapping_add(PRIME_X), j);
            }
        } else {
            if xi + xmyi < 0.0 {
                add(x0 + (1.0 - G2), y0 - G2, i.wrapping_sub(PRIME_X), j);
            } else {
                add(x0 + (G2 - 1.0), y0 + G2, i.wrapping_add(PRIME_X), j);
            }

            if yi < xmyi {
                add(x0 - G2, y0 - (G2 - 1.0), i, j.wrapping_sub(PRIME_Y));
            } else {
                add(x0 + G2, y0 + (G2 - 1.0), i, j.wrapping_add(PRIME_Y));
            }
        }

        value * SCALE_2D
    }

    fn get3(&self, seed: i32, x: f64, y: f64, z: f64) -> f64 {
        let i = x.floor();
        let j = y.floor();
        let k = z.floor();
        let xi = x - i;
        let yi = y - j;
        let zi = z - k;

        let i = lattice(i).wrapping_mul(PRIME_X);
        let j = lattice(j).wrapping_mul(PRIME_Y);
        let k = lattice(k).wrapping_mul(PRIME_Z);
        let seed2 = seed.wrapping_add(SECOND_LATTICE_SEED);

        // -1 on axes where the point is in the upper half of the cell, else 0
        let x_mask = (-0.5 - xi) as i32;
        let y_mask = (-0.5 - yi) as i32;
        let z_mask = (-0.5 - zi) as i32;
        let x_sign = f64::from(x_mask | 1);
        let y_sign = f64::from(y_mask | 1);
        let z_sign = f64::from(z_mask | 1);

        let mut value = 0.0;
        let mut add = |s: i32, xp: i32, yp: i32, zp: i32, xd: f64, yd: f64, zd: f64, a: f64| {
            value += pow4(a) * gradient3(s, xp, yp, zp, xd, yd, zd);
        };

        // Closest vertex of the first lattice
        let x0 = xi + f64::from(x_mask);
        let y0 = yi + f64::from(y_mask);
        let z0 = zi + f64::from(z_mask);
        let a0 = RADIUS_SQ_3D - x0 * x0 - y0 * y0 - z0 * z0;
        add(
            seed,
            i.wrapping_add(x_mask & PRIME_X),
            j.wrapping_add(y_mask & PRIME_Y),
            k.wrapping_add(z_mask & PRIME_Z),
            x0,
            y0,
            z0,
            a0,
        );

        // Cell centre, on the second lattice
        let x1 = xi - 0.5;
        let y1 = yi - 0.5;
        let z1 = zi - 0.5;
        let a1 = RADIUS_SQ_3D - x1 * x1 - y1 * y1 - z1 * z1;
        add(
            seed2,
            i.wrapping_add(PRIME_X),
            j.wrapping_add(PRIME_Y),
            k.wrapping_add(PRIME_Z),
            x1,
            y1,
            z1,
            a1,
        );

        // Attenuation changes when stepping to a neighbouring vertex along one axis
        let x_flip0 = f64::from((x_mask | 1) << 1) * x1;
        let y_flip0 = f64::from((y_mask | 1) << 1) * y1;
        let z_flip0 = f64::from((z_mask | 1) << 1) * z1;
        let x_flip1 = f64::from(-2 - (x_mask << 2)) * x1 - 1.0;
        let y_flip1 = f64::from(-2 - (y_mask << 2)) * y1 - 1.0;
        let z_flip1 = f64::from(-2 - (z_mask << 2)) * z1 - 1.0;

        let mut skip_yz1 = false;
        let a = x_flip0 + a0;
        if a > 0.0 {
            add(
                seed,
                i.wrapping_add(!x_mask & PRIME_X),
                j.wrapping_add(y_mask & PRIME_Y),
                k.wrapping_add(z_mask & PRIME_Z),
                x0 - x_sign,
                y0,
                z0,
                a,
            );
        } else {
            let a = y_flip0 + z_flip0 + a0;
            if a > 0.0 {
                add(
                    seed,
                    i.wrapping_add(x_mask & PRIME_X),
                    j.wrapping_add(!y_mask & PRIME_Y),
                    k.wrapping_add(!z_mask & PRIME_Z),
                    x0,
                    y0 - y_sign,
                    z0 - z_sign,
                    a,
                );
            }

            let a = x_flip1 + a1;
            if a > 0.0 {
                add(
                    seed2,
                    i.wrapping_add(x_mask & (PRIME_X << 1)),
                    j.wrapping_add(PRIME_Y),
                    k.wrapping_add(PRIME_Z),
                    x_sign + x1,
                    y1,
                    z1,
                    a,
                );
                skip_yz1 = true;
            }
        }

        let mut skip_xz1 = false;
        let a = y_flip0 + a0;
        if a > 0.0 {
            add(
                seed,
                i.wrapping_add(x_mask & PRIME_X),
                j.wrapping_add(!y_mask & PRIME_Y),
                k.wrapping_add(z_mask & PRIME_Z),
                x0,
                y0 - y_sign,
                z0,
                a,
            );
        } else {
            let a = x_flip0 + z_flip0 + a0;
            if a > 0.0 {
                add(
                    seed,
                    i.wrapping_add(!x_mask & PRIME_X),
                    j.wrapping_add(y_mask & PRIME_Y),
                    k.wrapping_add(!z_mask & PRIME_Z),
                    x0 - x_sign,
                    y0,
                    z0 - z_sign,
                    a,
                );
            }

            let a = y_flip1 + a1;
            if a > 0.0 {
                add(
                    seed2,
                    i.wrapping_add(PRIME_X),
                    j.wrapping_add(y_mask & (PRIME_Y << 1)),
                    k.wrapping_add(PRIME_Z),
                    x1,
                    y_sign + y1,
                    z1,
                    a,
                );
                skip_xz1 = true;
            }
        }

        let mut skip_xy1 = false;
        let a = z_flip0 + a0;
        if a > 0.0 {
            add(
                seed,
                i.wrapping_add(x_mask & PRIME_X),
                j.wrapping_add(y_mask & PRIME_Y),
                k.wrapping_add(!z_mask & PRIME_Z),
                x0,
                y0,
                z0 - z_sign,
                a,
            );
        } else {
            let a = x_flip0 + y_flip0 + a0;
            if a > 0.0 {
                add(
                    seed,
                    i.wrapping_add(!x_mask & PRIME_X),
                    j.wrapping_add(!y_mask & PRIME_Y),
                    k.wrapping_add(z_mask & PRIME_Z),
                    x0 - x_sign,
                    y0 - y_sign,
                    z0,
                    a,
                );
            }

            let a = z_flip1 + a1;
            if a > 0.0 {
                add(
                    seed2,
                    i.wrapping_add(PRIME_X),
                    j.wrapping_add(PRIME_Y),
                    k.wrapping_add(z_mask & (PRIME_Z << 1)),
                    x1,
                    y1,
                    z_sign + z1,
                    a,
                );
                skip_xy1 = true;
            }
        }

        if !skip_yz1 {
            let a = y_flip1 + z_flip1 + a1;
            if a > 0.0 {
                add(
                    seed2,
                    i.wrapping_add(PRIME_X),
                    j.wrapping_add(y_mask & (PRIME_Y << 1)),
                    k.wrapping_add(z_mask & (PRIME_Z << 1)),
                    x1,
                    y_sign + y1,
                    z_sign + z1,
                    a,
                );
            }
        }

        if !skip_xz1 {
            let a = x_flip1 + z_flip1 + a1;
            if a > 0.0 {
                add(
                    seed2,
                    i.wrapping_add(x_mask & (PRIME_X << 1)),
                    j.wrapping_add(PRIME_Y),
                    k.wrapping_add(z_mask & (PRIME_Z << 1)),
                    x_sign + x1,
                    y1,
                    z_sign + z1,
                    a,
                );
            }
        }

        if !skip_xy1 {
            let a = x_flip1 + y_flip1 + a1;
            if a > 0.0 {
                add(
                    seed2,
                    i.wrapping_add(x_mask & (PRIME_X << 1)),
                    j.wrapping_add(y_mask & (PRIME_Y << 1)),
                    k.wrapping_add(PRIME_Z),
                    x_sign + x1,
                    y_sign + y1,
                    z1,
                    a,
                );
            }
        }

        value * SCALE_3D
    }
}
