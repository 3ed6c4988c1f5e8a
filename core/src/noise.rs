use tracing::{debug, warn};

use crate::cellular::CellularNoise;
use crate::config::{NoiseConfig, NoiseType};
use crate::domain_warp::DomainWarp;
use crate::error::{NoiseError, Result};
use crate::fractal::Fractal;
use crate::open_simplex2::OpenSimplex2Noise;
use crate::open_simplex2s::OpenSimplex2SNoise;
use crate::perlin::PerlinNoise;
use crate::rotation::{Transform2D, Transform3D};
use crate::simplex::SimplexNoise;
use crate::value::ValueNoise;
use crate::value_cubic::ValueCubicNoise;

// A 2D or 3D sample position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    D2([f64; 2]),
    D3([f64; 3]),
}

impl Coord {
    pub fn dimensions(&self) -> usize {
        match self {
            Coord::D2(_) => 2,
            Coord::D3(_) => 3,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Coord::D2(c) => c,
            Coord::D3(c) => c,
        }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::D2([x, y])
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coord::D3([x, y, z])
    }
}

impl From<[f64; 2]> for Coord {
    fn from(c: [f64; 2]) -> Self {
        Coord::D2(c)
    }
}

impl From<[f64; 3]> for Coord {
    fn from(c: [f64; 3]) -> Self {
        Coord::D3(c)
    }
}

// The sampler chosen at construction. Matching on it once per call hands a
// concrete type to the fractal loop, which is monomorphised per variant.
#[derive(Debug, Clone, Copy)]
enum Sampler {
    Value(ValueNoise),
    ValueCubic(ValueCubicNoise),
    Perlin(PerlinNoise),
    Simplex(SimplexNoise),
    OpenSimplex2(OpenSimplex2Noise),
    OpenSimplex2S(OpenSimplex2SNoise),
    Cellular(CellularNoise),
}

impl Sampler {
    fn new(config: &NoiseConfig) -> Self {
        match config.noise_type {
            NoiseType::Value => Sampler::Value(ValueNoise),
            NoiseType::ValueCubic => Sampler::ValueCubic(ValueCubicNoise),
            NoiseType::Perlin => Sampler::Perlin(PerlinNoise),
            NoiseType::Simplex => Sampler::Simplex(SimplexNoise),
            NoiseType::OpenSimplex2 => Sampler::OpenSimplex2(OpenSimplex2Noise),
            NoiseType::OpenSimplex2S => Sampler::OpenSimplex2S(OpenSimplex2SNoise),
            NoiseType::Cellular => Sampler::Cellular(CellularNoise::new(
                config.cellular_distance,
                config.cellular_return,
                config.cellular_jitter,
            )),
        }
    }
}

// Configured noise source: the public entry point of the kernel.
//
// Holds one validated configuration and nothing else; every method is a
// pure function of it and the input, so a `Noise` can be shared freely
// between threads.
#[derive(Debug, Clone)]
pub struct Noise {
    config: NoiseConfig,
    sampler: Sampler,
    fractal: Fractal,
    warp: DomainWarp,
    transform2: Transform2D,
    transform3: Transform3D,
}

impl Default for Noise {
    fn default() -> Self {
        Self::build(NoiseConfig::default())
    }
}

impl Noise {
    // Validates `config` and resolves it into a sampler, fractal and warp.
    pub fn new(mut config: NoiseConfig) -> Result<Self> {
        config.validate()?;

        if !(0.0..=1.0).contains(&config.cellular_jitter) {
            let clamped = config.cellular_jitter.clamp(0.0, 1.0);
            warn!(
                jitter = config.cellular_jitter,
                clamped, "cellular jitter outside [0, 1], clamping"
            );
            config.cellular_jitter = clamped;
        }
        if !(0.0..=1.0).contains(&config.weighted_strength) {
            let clamped = config.weighted_strength.clamp(0.0, 1.0);
            warn!(
                weighted_strength = config.weighted_strength,
                clamped, "weighted strength outside [0, 1], clamping"
            );
            config.weighted_strength = clamped;
        }

        let noise = Self::build(config);
        debug!(
            seed = noise.config.seed,
            noise_type = %noise.config.noise_type,
            fractal = %noise.fractal.kind(),
            octaves = noise.fractal.octaves(),
            warp = %noise.warp.kind(),
            transform3 = ?noise.transform3,
            "noise constructed"
        );
        Ok(noise)
    }

    fn build(config: NoiseConfig) -> Self {
        let skewed = matches!(
            config.noise_type,
            NoiseType::OpenSimplex2 | NoiseType::OpenSimplex2S
        );
        Self {
            sampler: Sampler::new(&config),
            fractal: Fractal::new(&config),
            warp: DomainWarp::new(&config),
            transform2: Transform2D::resolve(skewed),
            transform3: Transform3D::resolve(config.rotation_type, skewed),
            config,
        }
    }

    // The resolved configuration, jitter and weighted strength already clamped.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn sample2(&self, x: f64, y: f64) -> f64 {
        let f = self.config.frequency;
        let (x, y) = self.transform2.apply(x * f, y * f);

        let seed = self.config.seed;
        let fractal = &self.fractal;
        match &self.sampler {
            Sampler::Value(s) => fractal.accumulate2(s, seed, x, y),
            Sampler::ValueCubic(s) => fractal.accumulate2(s, seed, x, y),
            Sampler::Perlin(s) => fractal.accumulate2(s, seed, x, y),
            Sampler::Simplex(s) => fractal.accumulate2(s, seed, x, y),
            Sampler::OpenSimplex2(s) => fractal.accumulate2(s, seed, x, y),
            Sampler::OpenSimplex2S(s) => fractal.accumulate2(s, seed, x, y),
            Sampler::Cellular(s) => fractal.accumulate2(s, seed, x, y),
        }
    }

    pub fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        let f = self.config.frequency;
        let (x, y, z) = self.transform3.apply(x * f, y * f, z * f);

        let seed = self.config.seed;
        let fractal = &self.fractal;
        match &self.sampler {
            Sampler::Value(s) => fractal.accumulate3(s, seed, x, y, z),
            Sampler::ValueCubic(s) => fractal.accumulate3(s, seed, x, y, z),
            Sampler::Perlin(s) => fractal.accumulate3(s, seed, x, y, z),
            Sampler::Simplex(s) => fractal.accumulate3(s, seed, x, y, z),
            Sampler::OpenSimplex2(s) => fractal.accumulate3(s, seed, x, y, z),
            Sampler::OpenSimplex2S(s) => fractal.accumulate3(s, seed, x, y, z),
            Sampler::Cellular(s) => fractal.accumulate3(s, seed, x, y, z),
        }
    }

    // Samples at `coord`. Non-finite input is not rejected: NaN propagates
    // into the result, `try_sample` reports it instead.
    pub fn sample(&self, coord: impl Into<Coord>) -> f64 {
        match coord.into() {
            Coord::D2([x, y]) => self.sample2(x, y),
            Coord::D3([x, y, z]) => self.sample3(x, y, z),
        }
    }

    pub fn try_sample(&self, coord: impl Into<Coord>) -> Result<f64> {
        let coord = coord.into();
        for (&value, axis) in coord.as_slice().iter().zip(['x', 'y', 'z']) {
            if !value.is_finite() {
                return Err(NoiseError::NonFiniteInput { axis, value });
            }
        }
        Ok(self.sample(coord))
    }

    pub fn warp2(&self, x: f64, y: f64) -> (f64, f64) {
        self.warp.warp2(x, y)
    }

    pub fn warp3(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        self.warp.warp3(x, y, z)
    }

    // Displaces `coord` by the configured domain warp.
    pub fn warp(&self, coord: impl Into<Coord>) -> Coord {
        match coord.into() {
            Coord::D2([x, y]) => self.warp2(x, y).into(),
            Coord::D3([x, y, z]) => self.warp3(x, y, z).into(),
        }
    }

    // Warps `coord`, then samples at the warped position.
    pub fn sample_warped(&self, coord: impl Into<Coord>) -> (Coord, f64) {
        let warped = self.warp(coord);
        (warped, self.sample(warped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CellularReturn, DomainWarpType, FractalType, RotationType};

    #[test]
    fn new_rejects_invalid_configuration() {
        let err = Noise::new(NoiseConfig::default().with_octaves(0)).unwrap_err();
        assert!(matches!(
            err,
            NoiseError::InvalidConfiguration { field: "octaves", .. }
        ));
    }

    #[test]
    fn jitter_is_clamped_not_rejected() {
        let noise = Noise::new(
            NoiseConfig::default()
                .with_noise_type(NoiseType::Cellular)
                .with_cellular_jitter(4.0),
        )
        .unwrap();
        assert_eq!(noise.config().cellular_jitter, 1.0);
    }

    #[test]
    fn builder_record_with_strong_weighting_is_accepted() {
        let config = NoiseConfig::default()
            .with_seed(42)
            .with_frequency(0.02)
            .with_noise_type(NoiseType::Simplex)
            .with_octaves(5)
            .with_lacunarity(2.5)
            .with_gain(0.6)
            .with_weighted_strength(1.2)
            .with_ping_pong_strength(1.5)
            .with_fractal_bounding(false)
            .with_cellular_jitter(0.4)
            .with_domain_warp(0.8);
        let noise = Noise::new(config.clone()).unwrap();
        assert_eq!(noise.config().weighted_strength, 1.0);

        let layered = Noise::new(config.with_fractal_type(FractalType::FBm)).unwrap();
        let full = Noise::new(layered.config().clone()).unwrap();
        assert_eq!(layered.sample2(10.0, 20.0), full.sample2(10.0, 20.0));
        assert!(layered.sample3(10.0, 20.0, 30.0).is_finite());
    }

    #[test]
    fn deep_valid_octave_stack_stays_finite() {
        let noise = Noise::new(
            NoiseConfig::default()
                .with_fractal_type(FractalType::FBm)
                .with_octaves(1000)
                .with_lacunarity(2.0)
                .with_gain(0.5),
        )
        .unwrap();
        assert!(noise.sample2(3.3, 4.4).is_finite());
        assert!(noise.sample3(3.3, 4.4, 5.5).is_finite());
    }

    #[test]
    fn default_matches_default_config() {
        let a = Noise::default();
        let b = Noise::new(NoiseConfig::default()).unwrap();
        assert_eq!(a.sample2(12.0, 34.0), b.sample2(12.0, 34.0));
        assert_eq!(a.config(), b.config());
    }

    #[test]
    fn coord_dispatch_matches_direct_calls() {
        let noise = Noise::new(NoiseConfig::default().with_fractal_type(FractalType::FBm).with_octaves(3))
            .unwrap();
        assert_eq!(noise.sample((1.5, 2.5)), noise.sample2(1.5, 2.5));
        assert_eq!(noise.sample([1.5, 2.5, 3.5]), noise.sample3(1.5, 2.5, 3.5));
    }

    #[test]
    fn try_sample_reports_the_bad_axis() {
        let noise = Noise::default();
        let err = noise.try_sample((1.0, f64::NAN, 2.0)).unwrap_err();
        assert!(matches!(err, NoiseError::NonFiniteInput { axis: 'y', .. }));
        assert!(noise.try_sample((f64::INFINITY, 0.0)).is_err());
        assert_eq!(noise.try_sample((3.0, 4.0)), Ok(noise.sample2(3.0, 4.0)));
    }

    #[test]
    fn sample_propagates_nan() {
        assert!(Noise::default().sample2(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn rotation_has_no_effect_in_2d() {
        let base = NoiseConfig::default().with_noise_type(NoiseType::OpenSimplex2);
        let plain = Noise::new(base.clone()).unwrap();
        let rotated = Noise::new(base.with_rotation_type(RotationType::XYPlanes)).unwrap();
        for i in 0..100 {
            let t = i as f64 * 3.7;
            assert_eq!(plain.sample2(t, -t), rotated.sample2(t, -t));
        }
    }

    #[test]
    fn sample_warped_without_warp_is_plain_sample() {
        let noise = Noise::default();
        let (c, v) = noise.sample_warped((10.0, 20.0));
        assert_eq!(c, Coord::D2([10.0, 20.0]));
        assert_eq!(v, noise.sample2(10.0, 20.0));
    }

    #[test]
    fn warped_sample_uses_warped_coordinate() {
        let noise = Noise::new(
            NoiseConfig::default()
                .with_domain_warp_type(DomainWarpType::OpenSimplex2)
                .with_domain_warp(30.0),
        )
        .unwrap();
        let (c, v) = noise.sample_warped((10.0, 20.0, 30.0));
        assert_eq!(c, noise.warp((10.0, 20.0, 30.0)));
        assert_eq!(v, noise.sample(c));
    }

    #[test]
    fn cellular_value_is_reachable_through_facade() {
        let noise = Noise::new(
            NoiseConfig::default()
                .with_noise_type(NoiseType::Cellular)
                .with_cellular_return(CellularReturn::CellValue)
                .with_frequency(1.0),
        )
        .unwrap();
        let v = noise.sample2(2.2, 3.1);
        assert!((-1.0..1.0).contains(&v));
    }
}
