use crate::tables::{GRADIENTS_2D, GRADIENTS_3D, RAND_VECS_2D, RAND_VECS_3D};

// Lattice coordinates are multiplied by these primes before hashing
// ("primed"), so neighbouring cells are one wrapping add apart.
pub const PRIME_X: i32 = 501_125_321;
pub const PRIME_Y: i32 = 1_136_930_381;
pub const PRIME_Z: i32 = 1_720_413_743;

const HASH_MULTIPLIER: i32 = 0x27d4_eb2d;

// Maps an i32 onto [-1, 1)
const INV_I32_RANGE: f64 = 1.0 / 2_147_483_648.0;

// Scrambles a primed 2D lattice point and a seed into an `i32`.
//
// Total over every input: only xor and wrapping multiplication are used.
#[inline(always)]
pub fn hash2(seed: i32, x_primed: i32, y_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed).wrapping_mul(HASH_MULTIPLIER)
}

// Scrambles a primed 3D lattice point and a seed into an `i32`.
#[inline(always)]
pub fn hash3(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed ^ z_primed).wrapping_mul(HASH_MULTIPLIER)
}

// Maps a hash onto [-1, 1). The hash is squared and folded first: the raw
// product is linear in the seed and stays correlated across nearby seeds.
#[inline(always)]
pub fn hash_to_unit(hash: i32) -> f64 {
    let hash = hash.wrapping_mul(hash);
    let hash = hash ^ (hash << 19);
    f64::from(hash) * INV_I32_RANGE
}

// Table index helpers: the mask keeps the index inside the table and aligned
// to the first component of a vector. Masked values are non-negative so the
// cast is lossless.
#[inline(always)]
fn index(hash: i32, mask: i32) -> usize {
    (hash & mask) as usize
}

// Pseudo-random lattice value in [-1, 1)
#[inline(always)]
pub fn value2(seed: i32, x_primed: i32, y_primed: i32) -> f64 {
    hash_to_unit(hash2(seed, x_primed, y_primed))
}

#[inline(always)]
pub fn value3(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> f64 {
    hash_to_unit(hash3(seed, x_primed, y_primed, z_primed))
}

// Dot product of the hashed lattice gradient with the offset `(xd, yd)`.
#[inline(always)]
pub fn gradient2(seed: i32, x_primed: i32, y_primed: i32, xd: f64, yd: f64) -> f64 {
    let hash = hash2(seed, x_primed, y_primed);
    let i = index(hash ^ (hash >> 15), 127 << 1);
    xd * GRADIENTS_2D[i] + yd * GRADIENTS_2D[i | 1]
}

// Dot product of the hashed lattice gradient with the offset `(xd, yd, zd)`.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub fn gradient3(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
    xd: f64,
    yd: f64,
    zd: f64,
) -> f64 {
    let hash = hash3(seed, x_primed, y_primed, z_primed);
    let i = index(hash ^ (hash >> 15), 63 << 2);
    xd * GRADIENTS_3D[i] + yd * GRADIENTS_3D[i | 1] + zd * GRADIENTS_3D[i | 2]
}

// Random unit vector selected by an existing hash.
#[inline(always)]
pub fn rand_vec2(hash: i32) -> (f64, f64) {
    let i = index(hash, 255 << 1);
    (RAND_VECS_2D[i], RAND_VECS_2D[i | 1])
}

#[inline(always)]
pub fn rand_vec3(hash: i32) -> (f64, f64, f64) {
    let i = index(hash, 255 << 2);
    (RAND_VECS_3D[i], RAND_VECS_3D[i | 1], RAND_VECS_3D[i | 2])
}

// Hashed random unit vector for a 2D lattice point.
#[inline(always)]
pub fn gradient_out2(seed: i32, x_primed: i32, y_primed: i32) -> (f64, f64) {
    rand_vec2(hash2(seed, x_primed, y_primed))
}

// Hashed random unit vector for a 3D lattice point.
#[inline(always)]
pub fn gradient_out3(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> (f64, f64, f64) {
    rand_vec3(hash3(seed, x_primed, y_primed, z_primed))
}

// Gradient dot product projected onto an independent random direction: one
// hash yields both the gradient (low bits) and the output direction (high bits).
#[inline(always)]
pub fn gradient_dual2(seed: i32, x_primed: i32, y_primed: i32, xd: f64, yd: f64) -> (f64, f64) {
    let hash = hash2(seed, x_primed, y_primed);
    let g = index(hash, 127 << 1);
    let o = index(hash >> 7, 255 << 1);

    let value = xd * GRADIENTS_2D[g] + yd * GRADIENTS_2D[g | 1];
    (value * RAND_VECS_2D[o], value * RAND_VECS_2D[o | 1])
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub fn gradient_dual3(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
    xd: f64,
    yd: f64,
    zd: f64,
) -> (f64, f64, f64) {
    let hash = hash3(seed, x_primed, y_primed, z_primed);
    let g = index(hash, 63 << 2);
    let o = index(hash >> 6, 255 << 2);

    let value = xd * GRADIENTS_3D[g] + yd * GRADIENTS_3D[g | 1] + zd * GRADIENTS_3D[g | 2];
    (
        value * RAND_VECS_3D[o],
        value * RAND_VECS_3D[o | 1],
        value * RAND_VECS_3D[o | 2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_seed_sensitive() {
        let a = hash2(1337, 5i32.wrapping_mul(PRIME_X), (-3i32).wrapping_mul(PRIME_Y));
        let b = hash2(1337, 5i32.wrapping_mul(PRIME_X), (-3i32).wrapping_mul(PRIME_Y));
        let c = hash2(1338, 5i32.wrapping_mul(PRIME_X), (-3i32).wrapping_mul(PRIME_Y));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_is_total_at_extremes() {
        // wrapping arithmetic only, nothing may overflow-panic in debug builds
        let _ = hash3(i32::MIN, i32::MAX, i32::MIN, -1);
        let _ = value2(i32::MAX, i32::MIN, i32::MAX);
        let _ = gradient3(i32::MIN, i32::MIN, i32::MIN, i32::MIN, 1.0, 1.0, 1.0);
        let _ = gradient_dual2(-1, i32::MAX, i32::MAX, 0.5, -0.5);
    }

    #[test]
    fn lattice_values_stay_in_unit_range() {
        for x in -50i32..50 {
            for y in -50i32..50 {
                let v = value2(42, x.wrapping_mul(PRIME_X), y.wrapping_mul(PRIME_Y));
                assert!((-1.0..1.0).contains(&v), "value {v} out of range");
            }
        }
    }

    #[test]
    fn gradient_out_is_unit_length() {
        for x in -20i32..20 {
            let (gx, gy) = gradient_out2(7, x.wrapping_mul(PRIME_X), PRIME_Y);
            assert!(((gx * gx + gy * gy).sqrt() - 1.0).abs() < 1e-9);
            let (gx, gy, gz) = gradient_out3(7, x.wrapping_mul(PRIME_X), PRIME_Y, PRIME_Z);
            assert!(((gx * gx + gy * gy + gz * gz).sqrt() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn gradient_at_zero_offset_is_zero() {
        assert_eq!(gradient2(3, PRIME_X, PRIME_Y, 0.0, 0.0), 0.0);
        assert_eq!(gradient3(3, PRIME_X, PRIME_Y, PRIME_Z, 0.0, 0.0, 0.0), 0.0);
    }
}
