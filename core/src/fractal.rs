use crate::NoiseGenerator;
use crate::config::{FractalType, NoiseConfig};
use crate::utils::{lerp, ping_pong};

// Layers octaves of one primitive sampler: each octave raises the frequency
// by `lacunarity`, scales the amplitude by `gain` and advances the seed.
//
// Octaves are summed in order 0..octaves, left to right; the result is
// divided by the sum of the absolute amplitudes actually used when
// `bounding` is set. Changing either order changes the low bits.
#[derive(Debug, Clone, Copy)]
pub struct Fractal {
    kind: FractalType,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
    weighted_strength: f64,
    ping_pong_strength: f64,
    bounding: bool,
}

impl Fractal {
    pub fn new(config: &NoiseConfig) -> Self {
        Self {
            kind: config.fractal_type,
            octaves: config.octaves,
            lacunarity: config.lacunarity,
            gain: config.gain,
            weighted_strength: config.weighted_strength,
            ping_pong_strength: config.ping_pong_strength,
            bounding: config.fractal_bounding,
        }
    }

    pub fn kind(&self) -> FractalType {
        self.kind
    }

    pub fn octaves(&self) -> u32 {
        match self.kind {
            FractalType::None => 1,
            _ => self.octaves,
        }
    }

    // Octave value and the factor it feeds into the next octave's amplitude
    #[inline(always)]
    fn shape(&self, n: f64) -> (f64, f64) {
        match self.kind {
            FractalType::None | FractalType::FBm => (n, ((n + 1.0) * 0.5).clamp(0.0, 1.0)),
            FractalType::Ridged => {
                let r = 1.0 - n.abs();
                let v = r * r;
                (v, v)
            }
            FractalType::PingPong => {
                let fold = ping_pong((n + 1.0) * self.ping_pong_strength);
                ((fold - 0.5) * 2.0, fold)
            }
        }
    }

    // Shared octave loop, `sample` receives (seed, frequency multiplier).
    // The first octave runs at multiplier 1.0 and amplitude 1.0, so a single
    // octave reproduces the shaped sample bit for bit.
    #[inline(always)]
    fn accumulate(&self, seed: i32, mut sample: impl FnMut(i32, f64) -> f64) -> f64 {
        if self.kind == FractalType::None {
            return sample(seed, 1.0);
        }

        let mut seed = seed;
        let mut scale = 1.0;
        let mut amp = 1.0;
        let mut sum = 0.0;
        let mut amp_sum = 0.0;

        for _ in 0..self.octaves {
            let (v, factor) = self.shape(sample(seed, scale));
            sum += v * amp;
            amp_sum += amp.abs();

            amp *= lerp(1.0, factor, self.weighted_strength);
            amp *= self.gain;
            scale *= self.lacunarity;
            seed = seed.wrapping_add(1);
        }

        if self.bounding && amp_sum > 0.0 {
            sum / amp_sum
        } else {
            sum
        }
    }

    // Fractal sum of `sampler` at already transformed 2D coordinates.
    pub fn accumulate2<N: NoiseGenerator + ?Sized>(&self, sampler: &N, seed: i32, x: f64, y: f64) -> f64 {
        self.accumulate(seed, |s, scale| sampler.get2(s, x * scale, y * scale))
    }

    pub fn accumulate3<N: NoiseGenerator + ?Sized>(
        &self,
        sampler: &N,
        seed: i32,
        x: f64,
        y: f64,
        z: f64,
    ) -> f64 {
        self.accumulate(seed, |s, scale| {
            sampler.get3(s, x * scale, y * scale, z * scale)
        })
    }
}
