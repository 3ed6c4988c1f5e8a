// Shared scalar helpers for the samplers, the fractal loop and the warp.

// sqrt(3), and the 2D simplex skew/unskew factors derived from it
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub const F2: f64 = 0.5 * (SQRT_3 - 1.0);
pub const G2: f64 = (3.0 - SQRT_3) / 6.0;

// Integer lattice index of an already floored or rounded coordinate.
// Goes through i64 so coordinates past the i32 range wrap around the lattice
// instead of saturating on one cell.
#[inline(always)]
pub fn lattice(f: f64) -> i32 {
    f as i64 as i32
}

// Linear interpolation
#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

// 3t^2 - 2t^3, zero slope at both ends
#[inline(always)]
pub fn interp_hermite(t: f64) -> f64 {
    t * t * (t * -2.0 + 3.0)
}

// Ken Perlin's fade: 6t^5 - 15t^4 + 10t^3
// first and second derivatives are zero at t=0 and t=1
#[inline(always)]
pub fn interp_quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

// Catmull-Rom style cubic through b (t=0) and c (t=1), a and d shape the tangents
#[inline(always)]
pub fn cubic_lerp(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}

// Triangle wave with period 2: 0 -> 1 -> 0
#[inline(always)]
pub fn ping_pong(t: f64) -> f64 {
    let t = t - (t * 0.5).trunc() * 2.0;
    if t < 1.0 { t } else { 2.0 - t }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolants_hit_endpoints() {
        for f in [interp_hermite, interp_quintic] {
            assert_eq!(f(0.0), 0.0);
            assert_eq!(f(1.0), 1.0);
            assert!((f(0.5) - 0.5).abs() < 1e-15);
        }
    }

    #[test]
    fn cubic_lerp_passes_through_inner_points() {
        assert_eq!(cubic_lerp(-3.0, 0.25, 0.75, 9.0, 0.0), 0.25);
        assert!((cubic_lerp(-3.0, 0.25, 0.75, 9.0, 1.0) - 0.75).abs() < 1e-15);
    }

    #[test]
    fn ping_pong_folds() {
        assert_eq!(ping_pong(0.25), 0.25);
        assert_eq!(ping_pong(1.5), 0.5);
        assert_eq!(ping_pong(2.25), 0.25);
        assert_eq!(ping_pong(3.75), 0.25);
    }

    #[test]
    fn lattice_wraps_instead_of_saturating() {
        assert_eq!(lattice(-3.0), -3);
        assert_eq!(lattice(4_294_967_296.0 + 5.0), 5);
        assert_eq!(lattice(f64::NAN), 0);
    }
}
