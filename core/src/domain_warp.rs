use crate::config::{DomainWarpFractal, DomainWarpType, NoiseConfig};
use crate::hash::{
    PRIME_X, PRIME_Y, PRIME_Z, gradient_dual2, gradient_dual3, gradient_out2, gradient_out3,
    hash2, hash3, rand_vec2, rand_vec3,
};
use crate::rotation::{Transform2D, Transform3D};
use crate::utils::{G2, interp_hermite, lattice, lerp};

// Bring each vector field's typical displacement up to roughly `amplitude`
const SIMPLEX_SCALE_2D: f64 = 38.283_687_591_552_734;
const SIMPLEX_SCALE_3D: f64 = 32.694_282_531_738_28;
const REDUCED_SCALE_2D: f64 = 16.0;
const REDUCED_SCALE_3D: f64 = 7.716_049_382_716_05;

// Seed offset for the second of the two interleaved 3D lattices
const SECOND_LATTICE_SEED: i32 = 1_293_373;

// Displaces coordinates by a smooth pseudo-random vector field.
//
// The field is sampled at the (optionally skewed or rotated) input, and the
// displacement is added to the raw input. With more than one octave the
// field is layered like fractal noise: seed +1, amplitude * gain and
// frequency * lacunarity per octave.
#[derive(Debug, Clone, Copy)]
pub struct DomainWarp {
    kind: DomainWarpType,
    fractal: DomainWarpFractal,
    seed: i32,
    // Warp amplitude times the octave bounding
    amplitude: f64,
    frequency: f64,
    octaves: u32,
    gain: f64,
    lacunarity: f64,
    transform2: Transform2D,
    transform3: Transform3D,
}

// 1 / sum(|gain|^i) over the octaves, keeps the layered field's reach near
// the configured amplitude
fn bounding(gain: f64, octaves: u32) -> f64 {
    let gain = gain.abs();
    let mut amp = gain;
    let mut total = 1.0;
    for _ in 1..octaves {
        total += amp;
        amp *= gain;
    }
    1.0 / total
}

impl DomainWarp {
    pub fn new(config: &NoiseConfig) -> Self {
        let octaves = match config.domain_warp_fractal {
            DomainWarpFractal::None => 1,
            _ => config.domain_warp_octaves.max(1),
        };
        let simplex_field = matches!(
            config.domain_warp_type,
            DomainWarpType::OpenSimplex2 | DomainWarpType::OpenSimplex2Reduced
        );

        Self {
            kind: config.domain_warp_type,
            fractal: config.domain_warp_fractal,
            seed: config.seed,
            amplitude: config.domain_warp * bounding(config.gain, octaves),
            frequency: config.frequency,
            octaves,
            gain: config.gain,
            lacunarity: config.lacunarity,
            transform2: Transform2D::resolve(simplex_field),
            transform3: Transform3D::resolve(config.rotation_type, simplex_field),
        }
    }

    pub fn kind(&self) -> DomainWarpType {
        self.kind
    }

    // True when warping leaves every coordinate untouched.
    pub fn is_identity(&self) -> bool {
        self.kind == DomainWarpType::None || self.amplitude == 0.0
    }

    pub fn warp2(&self, x: f64, y: f64) -> (f64, f64) {
        if self.is_identity() {
            return (x, y);
        }

        let (mut x, mut y) = (x, y);
        let mut seed = self.seed;
        let mut amp = self.amplitude;
        let mut freq = self.frequency;
        let (mut xs, mut ys) = self.transform2.apply(x, y);

        for _ in 0..self.octaves {
            if self.fractal == DomainWarpFractal::Progressive {
                (xs, ys) = self.transform2.apply(x, y);
            }
            let (dx, dy) = self.displace2(seed, amp, freq, xs, ys);
            x += dx;
            y += dy;

            seed = seed.wrapping_add(1);
            amp *= self.gain;
            freq *= self.lacunarity;
        }
        (x, y)
    }

    pub fn warp3(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        if self.is_identity() {
            return (x, y, z);
        }

        let (mut x, mut y, mut z) = (x, y, z);
        let mut seed = self.seed;
        let mut amp = self.amplitude;
        let mut freq = self.frequency;
        let (mut xs, mut ys, mut zs) = self.transform3.apply(x, y, z);

        for _ in 0..self.octaves {
            if self.fractal == DomainWarpFractal::Progressive {
                (xs, ys, zs) = self.transform3.apply(x, y, z);
            }
            let (dx, dy, dz) = self.displace3(seed, amp, freq, xs, ys, zs);
            x += dx;
            y += dy;
            z += dz;

            seed = seed.wrapping_add(1);
            amp *= self.gain;
            freq *= self.lacunarity;
        }
        (x, y, z)
    }

    fn displace2(&self, seed: i32, amp: f64, freq: f64, x: f64, y: f64) -> (f64, f64) {
        match self.kind {
            DomainWarpType::None => (0.0, 0.0),
            DomainWarpType::OpenSimplex2 => {
                simplex_field2(seed, amp * SIMPLEX_SCALE_2D, freq, x, y, false)
            }
            DomainWarpType::OpenSimplex2Reduced => {
                simplex_field2(seed, amp * REDUCED_SCALE_2D, freq, x, y, true)
            }
            DomainWarpType::BasicGrid => basic_grid2(seed, amp, freq, x, y),
        }
    }

    fn displace3(&self, seed: i32, amp: f64, freq: f64, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        match self.kind {
            DomainWarpType::None => (0.0, 0.0, 0.0),
            DomainWarpType::OpenSimplex2 => {
                simplex_field3(seed, amp * SIMPLEX_SCALE_3D, freq, x, y, z, false)
            }
            DomainWarpType::OpenSimplex2Reduced => {
                simplex_field3(seed, amp * REDUCED_SCALE_3D, freq, x, y, z, true)
            }
            DomainWarpType::BasicGrid => basic_grid3(seed, amp, freq, x, y, z),
        }
    }
}

// Random unit vectors at the cell corners, Hermite-blended
fn basic_grid2(seed: i32, amp: f64, freq: f64, x: f64, y: f64) -> (f64, f64) {
    let xf = x * freq;
    let yf = y * freq;
    let x0 = xf.floor();
    let y0 = yf.floor();

    let xs = interp_hermite(xf - x0);
    let ys = interp_hermite(yf - y0);

    let x0 = lattice(x0).wrapping_mul(PRIME_X);
    let y0 = lattice(y0).wrapping_mul(PRIME_Y);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);

    let blend_x = |yp: i32| {
        let (ax, ay) = rand_vec2(hash2(seed, x0, yp));
        let (bx, by) = rand_vec2(hash2(seed, x1, yp));
        (lerp(ax, bx, xs), lerp(ay, by, xs))
    };
    let (lx0, ly0) = blend_x(y0);
    let (lx1, ly1) = blend_x(y1);

    (lerp(lx0, lx1, ys) * amp, lerp(ly0, ly1, ys) * amp)
}

fn basic_grid3(seed: i32, amp: f64, freq: f64, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let xf = x * freq;
    let yf = y * freq;
    let zf = z * freq;
    let x0 = xf.floor();
    let y0 = yf.floor();
    let z0 = zf.floor();

    let xs = interp_hermite(xf - x0);
    let ys = interp_hermite(yf - y0);
    let zs = interp_hermite(zf - z0);

    let x0 = lattice(x0).wrapping_mul(PRIME_X);
    let y0 = lattice(y0).wrapping_mul(PRIME_Y);
    let z0 = lattice(z0).wrapping_mul(PRIME_Z);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);
    let z1 = z0.wrapping_add(PRIME_Z);

    let blend_x = |yp: i32, zp: i32| {
        let (ax, ay, az) = rand_vec3(hash3(seed, x0, yp, zp));
        let (bx, by, bz) = rand_vec3(hash3(seed, x1, yp, zp));
        (lerp(ax, bx, xs), lerp(ay, by, xs), lerp(az, bz, xs))
    };
    let blend_xy = |zp: i32| {
        let (ax, ay, az) = blend_x(y0, zp);
        let (bx, by, bz) = blend_x(y1, zp);
        (lerp(ax, bx, ys), lerp(ay, by, ys), lerp(az, bz, ys))
    };
    let (lx0, ly0, lz0) = blend_xy(z0);
    let (lx1, ly1, lz1) = blend_xy(z1);

    (
        lerp(lx0, lx1, zs) * amp,
        lerp(ly0, ly1, zs) * amp,
        lerp(lz0, lz1, zs) * amp,
    )
}

// OpenSimplex2 kernel summing vectors instead of scalars. `reduced` uses the
// plain random vector per vertex, otherwise the gradient dot product is
// projected onto it.
fn simplex_field2(seed: i32, amp: f64, freq: f64, x: f64, y: f64, reduced: bool) -> (f64, f64) {
    let x = x * freq;
    let y = y * freq;

    let i = x.floor();
    let j = y.floor();
    let xi = x - i;
    let yi = y - j;

    let t = (xi + yi) * G2;
    let x0 = xi - t;
    let y0 = yi - t;

    let i = lattice(i).wrapping_mul(PRIME_X);
    let j = lattice(j).wrapping_mul(PRIME_Y);

    let vector = |xp: i32, yp: i32, xd: f64, yd: f64| {
        if reduced {
            gradient_out2(seed, xp, yp)
        } else {
            gradient_dual2(seed, xp, yp, xd, yd)
        }
    };

    let mut vx = 0.0;
    let mut vy = 0.0;

    let a = 0.5 - x0 * x0 - y0 * y0;
    if a > 0.0 {
        let aaaa = (a * a) * (a * a);
        let (xo, yo) = vector(i, j, x0, y0);
        vx += aaaa * xo;
        vy += aaaa * yo;
    }

    let c = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
        + ((-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2)) + a);
    if c > 0.0 {
        let x2 = x0 + (2.0 * G2 - 1.0);
        let y2 = y0 + (2.0 * G2 - 1.0);
        let cccc = (c * c) * (c * c);
        let (xo, yo) = vector(i.wrapping_add(PRIME_X), j.wrapping_add(PRIME_Y), x2, y2);
        vx += cccc * xo;
        vy += cccc * yo;
    }

    let (x1, y1, i1, j1) = if y0 > x0 {
        (x0 + G2, y0 + (G2 - 1.0), i, j.wrapping_add(PRIME_Y))
    } else {
        (x0 + (G2 - 1.0), y0 + G2, i.wrapping_add(PRIME_X), j)
    };
    let b = 0.5 - x1 * x1 - y1 * y1;
    if b > 0.0 {
        let bbbb = (b * b) * (b * b);
        let (xo, yo) = vector(i1, j1, x1, y1);
        vx += bbbb * xo;
        vy += bbbb * yo;
    }

    (vx * amp, vy * amp)
}

#[allow(clippy::too_many_arguments)]
fn simplex_field3(
    seed: i32,
    amp: f64,
    freq: f64,
    x: f64,
    y: f64,
    z: f64,
    reduced: bool,
) -> (f64, f64, f64) {
    let x = x * freq;
    let y = y * freq;
    let z = z * freq;

    let i = x.round();
    let j = y.round();
    let k = z.round();
    let mut x0 = x - i;
    let mut y0 = y - j;
    let mut z0 = z - k;

    let mut x_n_sign = (-x0 - 1.0) as i32 | 1;
    let mut y_n_sign = (-y0 - 1.0) as i32 | 1;
    let mut z_n_sign = (-z0 - 1.0) as i32 | 1;

    let mut ax0 = f64::from(x_n_sign) * -x0;
    let mut ay0 = f64::from(y_n_sign) * -y0;
    let mut az0 = f64::from(z_n_sign) * -z0;

    let mut i = lattice(i).wrapping_mul(PRIME_X);
    let mut j = lattice(j).wrapping_mul(PRIME_Y);
    let mut k = lattice(k).wrapping_mul(PRIME_Z);

    let mut seed = seed;
    let vector = |s: i32, xp: i32, yp: i32, zp: i32, xd: f64, yd: f64, zd: f64| {
        if reduced {
            gradient_out3(s, xp, yp, zp)
        } else {
            gradient_dual3(s, xp, yp, zp, xd, yd, zd)
        }
    };

    let mut vx = 0.0;
    let mut vy = 0.0;
    let mut vz = 0.0;

    let mut a = (0.6 - x0 * x0) - (y0 * y0 + z0 * z0);
    for lattice_pass in 0..2 {
        if a > 0.0 {
            let aaaa = (a * a) * (a * a);
            let (xo, yo, zo) = vector(seed, i, j, k, x0, y0, z0);
            vx += aaaa * xo;
            vy += aaaa * yo;
            vz += aaaa * zo;
        }

        let mut b = a;
        let (mut i1, mut j1, mut k1) = (i, j, k);
        let (mut x1, mut y1, mut z1) = (x0, y0, z0);

        if ax0 >= ay0 && ax0 >= az0 {
            x1 += f64::from(x_n_sign);
            b = b + ax0 + ax0;
            i1 = i1.wrapping_sub(x_n_sign.wrapping_mul(PRIME_X));
        } else if ay0 > ax0 && ay0 >= az0 {
            y1 += f64::from(y_n_sign);
            b = b + ay0 + ay0;
            j1 = j1.wrapping_sub(y_n_sign.wrapping_mul(PRIME_Y));
        } else {
            z1 += f64::from(z_n_sign);
            b = b + az0 + az0;
            k1 = k1.wrapping_sub(z_n_sign.wrapping_mul(PRIME_Z));
        }

        if b > 1.0 {
            b -= 1.0;
            let bbbb = (b * b) * (b * b);
            let (xo, yo, zo) = vector(seed, i1, j1, k1, x1, y1, z1);
            vx += bbbb * xo;
            vy += bbbb * yo;
            vz += bbbb * zo;
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

        seed = seed.wrapping_add(SECOND_LATTICE_SEED);
    }

    (vx * amp, vy * amp, vz * amp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warp(kind: DomainWarpType, amplitude: f64) -> DomainWarp {
        DomainWarp::new(
            &NoiseConfig::default()
                .with_domain_warp_type(kind)
                .with_domain_warp(amplitude)
                .with_frequency(0.05),
        )
    }

    const FIELDS: [DomainWarpType; 3] = [
        DomainWarpType::OpenSimplex2,
        DomainWarpType::OpenSimplex2Reduced,
        DomainWarpType::BasicGrid,
    ];

    #[test]
    fn none_and_zero_amplitude_are_identity() {
        let none = warp(DomainWarpType::None, 30.0);
        assert_eq!(none.warp2(1.5, -2.5), (1.5, -2.5));
        assert_eq!(none.warp3(1.5, -2.5, 9.0), (1.5, -2.5, 9.0));
        for kind in FIELDS {
            let flat = warp(kind, 0.0);
            assert_eq!(flat.warp2(1.5, -2.5), (1.5, -2.5));
            assert_eq!(flat.warp3(1.5, -2.5, 9.0), (1.5, -2.5, 9.0));
        }
    }

    #[test]
    fn warp_moves_points_a_bounded_distance() {
        for kind in FIELDS {
            let w = warp(kind, 10.0);
            let mut moved = 0;
            for i in 0..400 {
                let x = i as f64 * 1.37;
                let y = i as f64 * -0.83;
                let (wx, wy) = w.warp2(x, y);
                let d = ((wx - x).powi(2) + (wy - y).powi(2)).sqrt();
                assert!(d.is_finite() && d < 60.0, "{kind:?} moved {d}");
                if d > 1e-9 {
                    moved += 1;
                }
            }
            assert!(moved > 300, "{kind:?} moved only {moved} points");
        }
    }

    #[test]
    fn warp_is_deterministic_and_seeded() {
        let a = warp(DomainWarpType::OpenSimplex2, 20.0);
        let b = DomainWarp::new(
            &NoiseConfig::default()
                .with_domain_warp_type(DomainWarpType::OpenSimplex2)
                .with_domain_warp(20.0)
                .with_frequency(0.05)
                .with_seed(4),
        );
        assert_eq!(a.warp3(3.3, 4.4, 5.5), a.warp3(3.3, 4.4, 5.5));
        assert_ne!(a.warp3(3.3, 4.4, 5.5), b.warp3(3.3, 4.4, 5.5));
    }

    #[test]
    fn fractal_modes_differ_after_the_first_octave() {
        let layered = |mode: DomainWarpFractal, octaves: u32| {
            DomainWarp::new(
                &NoiseConfig::default()
                    .with_domain_warp_type(DomainWarpType::BasicGrid)
                    .with_domain_warp(25.0)
                    .with_frequency(0.03)
                    .with_gain(0.5)
                    .with_lacunarity(2.0)
                    .with_domain_warp_fractal(mode, octaves),
            )
        };
        let progressive = layered(DomainWarpFractal::Progressive, 3);
        let independent = layered(DomainWarpFractal::Independent, 3);
        assert_ne!(progressive.warp2(10.0, 20.0), independent.warp2(10.0, 20.0));

        // a single octave samples the field once at the input either way
        assert_eq!(
            layered(DomainWarpFractal::Progressive, 1).warp2(10.0, 20.0),
            layered(DomainWarpFractal::Independent, 1).warp2(10.0, 20.0)
        );
    }

    #[test]
    fn bounding_sums_gain_powers() {
        assert_eq!(bounding(0.5, 1), 1.0);
        assert_eq!(bounding(0.5, 3), 1.0 / 1.75);
        assert_eq!(bounding(-0.5, 2), 1.0 / 1.5);
    }
}
