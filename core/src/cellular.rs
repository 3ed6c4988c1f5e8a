use crate::NoiseGenerator;
use crate::config::{CellularDistance, CellularReturn};
use crate::hash::{PRIME_X, PRIME_Y, PRIME_Z, hash_to_unit, hash2, hash3, rand_vec2, rand_vec3};
use crate::utils::lattice;

// Largest displacement that keeps a feature point inside its own cell once
// scaled by the random unit vector
const JITTER_SCALE_2D: f64 = 0.437_015_95;
const JITTER_SCALE_3D: f64 = 0.396_143_53;

// Starting distance, larger than anything a 3x3(x3) scan can produce
const FAR: f64 = 1e10;

// Nearest and second nearest feature point of a cellular (Worley) scan.
//
// Distances are in the configured metric, `Euclidean` already rooted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellularSearch {
    pub distance0: f64,
    pub distance1: f64,
    // Hash of the cell owning the nearest feature point.
    pub closest_hash: i32,
}

impl CellularSearch {
    fn new() -> Self {
        Self {
            distance0: FAR,
            distance1: FAR,
            closest_hash: 0,
        }
    }

    // distance1 keeps the runner-up: never below the current nearest
    #[inline(always)]
    fn offer(&mut self, distance: f64, hash: i32) {
        self.distance1 = self.distance1.min(distance).max(self.distance0);
        if distance < self.distance0 {
            self.distance0 = distance;
            self.closest_hash = hash;
        }
    }

    fn finish(mut self, metric: CellularDistance) -> Self {
        if metric == CellularDistance::Euclidean {
            self.distance0 = self.distance0.sqrt();
            self.distance1 = self.distance1.sqrt();
        }
        self
    }

    // Combines the search into the scalar selected by `return_type`.
    pub fn resolve(&self, return_type: CellularReturn) -> f64 {
        let d0 = self.distance0;
        let d1 = self.distance1;
        match return_type {
            CellularReturn::CellValue => hash_to_unit(self.closest_hash),
            CellularReturn::Distance => d0 - 1.0,
            CellularReturn::Distance2 => d1 - 1.0,
            CellularReturn::Distance2Add => (d1 + d0) * 0.5 - 1.0,
            CellularReturn::Distance2Sub => d1 - d0 - 1.0,
            CellularReturn::Distance2Mul => d1 * d0 * 0.5 - 1.0,
            CellularReturn::Distance2Div => d0 / d1 - 1.0,
        }
    }
}

impl CellularDistance {
    // Euclidean stays squared during the scan, `CellularSearch::finish` roots it
    #[inline(always)]
    fn measure2(self, dx: f64, dy: f64) -> f64 {
        match self {
            CellularDistance::Euclidean | CellularDistance::EuclideanSq => dx * dx + dy * dy,
            CellularDistance::Manhattan => dx.abs() + dy.abs(),
            CellularDistance::Hybrid => (dx.abs() + dy.abs()) + (dx * dx + dy * dy),
        }
    }

    #[inline(always)]
    fn measure3(self, dx: f64, dy: f64, dz: f64) -> f64 {
        match self {
            CellularDistance::Euclidean | CellularDistance::EuclideanSq => {
                dx * dx + dy * dy + dz * dz
            }
            CellularDistance::Manhattan => dx.abs() + dy.abs() + dz.abs(),
            CellularDistance::Hybrid => {
                (dx.abs() + dy.abs() + dz.abs()) + (dx * dx + dy * dy + dz * dz)
            }
        }
    }
}

// Cellular (Worley) noise: one feature point per lattice cell, displaced from
// the cell's lattice point by a hashed random vector times the jitter.
// The 3x3(x3) cells around the nearest lattice point are scanned.
#[derive(Debug, Clone, Copy)]
pub struct CellularNoise {
    distance: CellularDistance,
    return_type: CellularReturn,
    jitter: f64,
}

impl CellularNoise {
    // `jitter` is expected in [0, 1]; larger values let feature points
    // leave their cell and the scan may miss the true nearest point.
    pub fn new(distance: CellularDistance, return_type: CellularReturn, jitter: f64) -> Self {
        Self {
            distance,
            return_type,
            jitter,
        }
    }

    pub fn search2(&self, seed: i32, x: f64, y: f64) -> CellularSearch {
        let xr = x.round();
        let yr = y.round();
        let jitter = JITTER_SCALE_2D * self.jitter;

        let mut search = CellularSearch::new();
        let mut x_primed = lattice(xr).wrapping_sub(1).wrapping_mul(PRIME_X);
        let y_primed_base = lattice(yr).wrapping_sub(1).wrapping_mul(PRIME_Y);

        for dx in -1i32..=1 {
            let cell_x = xr + f64::from(dx) - x;
            let mut y_primed = y_primed_base;

            for dy in -1i32..=1 {
                let cell_y = yr + f64::from(dy) - y;
                let hash = hash2(seed, x_primed, y_primed);
                let (rx, ry) = rand_vec2(hash);

                let vx = cell_x + rx * jitter;
                let vy = cell_y + ry * jitter;
                search.offer(self.distance.measure2(vx, vy), hash);

                y_primed = y_primed.wrapping_add(PRIME_Y);
            }
            x_primed = x_primed.wrapping_add(PRIME_X);
        }

        search.finish(self.distance)
    }

    pub fn search3(&self, seed: i32, x: f64, y: f64, z: f64) -> CellularSearch {
        let xr = x.round();
        let yr = y.round();
        let zr = z.round();
        let jitter = JITTER_SCALE_3D * self.jitter;

        let mut search = CellularSearch::new();
        let mut x_primed = lattice(xr).wrapping_sub(1).wrapping_mul(PRIME_X);
        let y_primed_base = lattice(yr).wrapping_sub(1).wrapping_mul(PRIME_Y);
        let z_primed_base = lattice(zr).wrapping_sub(1).wrapping_mul(PRIME_Z);

        for dx in -1i32..=1 {
            let cell_x = xr + f64::from(dx) - x;
            let mut y_primed = y_primed_base;

            for dy in -1i32..=1 {
                let cell_y = yr + f64::from(dy) - y;
                let mut z_primed = z_primed_base;

                for dz in -1i32..=1 {
                    let cell_z = zr + f64::from(dz) - z;
                    let hash = hash3(seed, x_primed, y_primed, z_primed);
                    let (rx, ry, rz) = rand_vec3(hash);

                    let vx = cell_x + rx * jitter;
                    let vy = cell_y + ry * jitter;
                    let vz = cell_z + rz * jitter;
                    search.offer(self.distance.measure3(vx, vy, vz), hash);

                    z_primed = z_primed.wrapping_add(PRIME_Z);
                }
                y_primed = y_primed.wrapping_add(PRIME_Y);
            }
            x_primed = x_primed.wrapping_add(PRIME_X);
        }

        search.finish(self.distance)
    }
}

impl NoiseGenerator for CellularNoise {
    fn get2(&self, seed: i32, x: f64, y: f64) -> f64 {
        self.search2(seed, x, y).resolve(self.return_type)
    }

    fn get3(&self, seed: i32, x: f64, y: f64, z: f64) -> f64 {
        self.search3(seed, x, y, z).resolve(self.return_type)
    }
}
