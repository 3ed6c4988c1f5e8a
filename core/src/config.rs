use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};

// Declares a configuration enum whose variants parse case-insensitively from
// their names, both through `FromStr` and when deserialized.
macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = NoiseError;

            fn from_str(s: &str) -> Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| {
                        NoiseError::invalid(stringify!($name), format!("has no variant named {s:?}"))
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = NoiseError;

            fn try_from(s: String) -> Result<Self> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.name().to_string()
            }
        }
    };
}

config_enum! {
    // Primitive sampler family.
    NoiseType {
        Value,
        ValueCubic,
        Perlin,
        Simplex,
        OpenSimplex2,
        OpenSimplex2S,
        Cellular,
    }
}

config_enum! {
    // Rotation applied to 3D input. 2D input is never rotated.
    RotationType {
        None,
        Improved3D,
        XYPlanes,
        XZPlanes,
    }
}

config_enum! {
    // How octaves are combined.
    FractalType {
        None,
        FBm,
        Ridged,
        PingPong,
    }
}

config_enum! {
    CellularDistance {
        Euclidean,
        EuclideanSq,
        Manhattan,
        Hybrid,
    }
}

config_enum! {
    // What a cellular sample reports: the nearest cell's value or a
    // combination of the two nearest distances.
    CellularReturn {
        CellValue,
        Distance,
        Distance2,
        Distance2Add,
        Distance2Sub,
        Distance2Mul,
        Distance2Div,
    }
}

config_enum! {
    // Vector field used to displace coordinates.
    DomainWarpType {
        None,
        OpenSimplex2,
        OpenSimplex2Reduced,
        BasicGrid,
    }
}

config_enum! {
    // How warp octaves feed into each other.
    DomainWarpFractal {
        None,
        Progressive,
        Independent,
    }
}

// Flat noise configuration. Every field has a default, so a partial record
// (e.g. `{"noise_type": "Cellular"}`) deserializes into a full one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub seed: i32,
    pub frequency: f64,
    pub noise_type: NoiseType,
    pub rotation_type: RotationType,
    pub fractal_type: FractalType,
    pub octaves: u32,
    pub lacunarity: f64,
    pub gain: f64,
    pub weighted_strength: f64,
    pub ping_pong_strength: f64,
    pub fractal_bounding: bool,
    pub cellular_distance: CellularDistance,
    pub cellular_return: CellularReturn,
    pub cellular_jitter: f64,
    pub domain_warp_type: DomainWarpType,
    // Warp amplitude
    pub domain_warp: f64,
    pub domain_warp_fractal: DomainWarpFractal,
    pub domain_warp_octaves: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 1337,
            frequency: 0.01,
            noise_type: NoiseType::Perlin,
            rotation_type: RotationType::None,
            fractal_type: FractalType::None,
            octaves: 1,
            lacunarity: 1.0,
            gain: 1.0,
            weighted_strength: 1.0,
            ping_pong_strength: 1.0,
            fractal_bounding: true,
            cellular_distance: CellularDistance::EuclideanSq,
            cellular_return: CellularReturn::Distance,
            cellular_jitter: 0.0,
            domain_warp_type: DomainWarpType::None,
            domain_warp: 1.0,
            domain_warp_fractal: DomainWarpFractal::None,
            domain_warp_octaves: 1,
        }
    }
}

fn finite(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(NoiseError::invalid(field, format!("must be finite, got {v}")))
    }
}

fn nonzero(field: &'static str, v: f64) -> Result<()> {
    if v == 0.0 {
        Err(NoiseError::invalid(field, "must be nonzero"))
    } else {
        Ok(())
    }
}

// The deepest octave's frequency and the summed amplitudes must stay finite,
// otherwise the octave loop feeds inf into the samplers and gets inf - inf
fn octave_reach(field: &'static str, config: &NoiseConfig, octaves: u32) -> Result<()> {
    let deepest = f64::from(octaves - 1);
    let top_frequency = config.frequency.abs() * config.lacunarity.abs().max(1.0).powf(deepest);

    // a negative ping-pong strength folds below zero, the weighting can then
    // double |amp| per octave
    let growth = if config.fractal_type == FractalType::PingPong && config.ping_pong_strength < 0.0 {
        2.0
    } else {
        1.0
    };
    let g = config.gain.abs() * growth;
    let amplitude_sum = if g == 1.0 {
        f64::from(octaves)
    } else {
        (g.powf(f64::from(octaves)) - 1.0) / (g - 1.0)
    };

    if top_frequency.is_finite() && amplitude_sum.is_finite() {
        Ok(())
    } else {
        Err(NoiseError::invalid(
            field,
            format!(
                "{octaves} octaves overflow with lacunarity {} and gain {}",
                config.lacunarity, config.gain
            ),
        ))
    }
}

impl NoiseConfig {
    // Checks every invariant `Noise::new` relies on.
    //
    // `cellular_jitter` and `weighted_strength` are only required to be
    // finite: values outside [0, 1] are clamped at construction rather than
    // rejected. Layered octave stacks must not overflow their frequency or
    // amplitude sum.
    pub fn validate(&self) -> Result<()> {
        if self.octaves < 1 {
            return Err(NoiseError::invalid("octaves", "must be at least 1"));
        }
        if self.domain_warp_octaves < 1 {
            return Err(NoiseError::invalid("domain_warp_octaves", "must be at least 1"));
        }

        finite("frequency", self.frequency)?;
        finite("lacunarity", self.lacunarity)?;
        finite("gain", self.gain)?;
        finite("weighted_strength", self.weighted_strength)?;
        finite("ping_pong_strength", self.ping_pong_strength)?;
        finite("cellular_jitter", self.cellular_jitter)?;
        finite("domain_warp", self.domain_warp)?;

        nonzero("lacunarity", self.lacunarity)?;
        nonzero("gain", self.gain)?;

        if self.fractal_type != FractalType::None {
            octave_reach("octaves", self, self.octaves)?;
        }
        if self.domain_warp_type != DomainWarpType::None
            && self.domain_warp_fractal != DomainWarpFractal::None
        {
            octave_reach("domain_warp_octaves", self, self.domain_warp_octaves)?;
        }

        Ok(())
    }

    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_noise_type(mut self, noise_type: NoiseType) -> Self {
        self.noise_type = noise_type;
        self
    }

    pub fn with_rotation_type(mut self, rotation_type: RotationType) -> Self {
        self.rotation_type = rotation_type;
        self
    }

    pub fn with_fractal_type(mut self, fractal_type: FractalType) -> Self {
        self.fractal_type = fractal_type;
        self
    }

    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    pub fn with_weighted_strength(mut self, weighted_strength: f64) -> Self {
        self.weighted_strength = weighted_strength;
        self
    }

    pub fn with_ping_pong_strength(mut self, ping_pong_strength: f64) -> Self {
        self.ping_pong_strength = ping_pong_strength;
        self
    }

    pub fn with_fractal_bounding(mut self, fractal_bounding: bool) -> Self {
        self.fractal_bounding = fractal_bounding;
        self
    }

    pub fn with_cellular_distance(mut self, cellular_distance: CellularDistance) -> Self {
        self.cellular_distance = cellular_distance;
        self
    }

    pub fn with_cellular_return(mut self, cellular_return: CellularReturn) -> Self {
        self.cellular_return = cellular_return;
        self
    }

    pub fn with_cellular_jitter(mut self, cellular_jitter: f64) -> Self {
        self.cellular_jitter = cellular_jitter;
        self
    }

    pub fn with_domain_warp_type(mut self, domain_warp_type: DomainWarpType) -> Self {
        self.domain_warp_type = domain_warp_type;
        self
    }

    pub fn with_domain_warp(mut self, amplitude: f64) -> Self {
        self.domain_warp = amplitude;
        self
    }

    pub fn with_domain_warp_fractal(mut self, mode: DomainWarpFractal, octaves: u32) -> Self {
        self.domain_warp_fractal = mode;
        self.domain_warp_octaves = octaves;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_builder_record() {
        let c = NoiseConfig::default();
        assert_eq!(c.seed, 1337);
        assert_eq!(c.frequency, 0.01);
        assert_eq!(c.noise_type, NoiseType::Perlin);
        assert_eq!(c.octaves, 1);
        assert_eq!(c.lacunarity, 1.0);
        assert_eq!(c.gain, 1.0);
        assert_eq!(c.weighted_strength, 1.0);
        assert_eq!(c.ping_pong_strength, 1.0);
        assert!(c.fractal_bounding);
        assert_eq!(c.cellular_jitter, 0.0);
        assert_eq!(c.domain_warp, 1.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn enum_names_parse_case_insensitively() {
        assert_eq!("perlin".parse::<NoiseType>(), Ok(NoiseType::Perlin));
        assert_eq!("OPENSIMPLEX2S".parse::<NoiseType>(), Ok(NoiseType::OpenSimplex2S));
        assert_eq!(" fbm ".parse::<FractalType>(), Ok(FractalType::FBm));
        assert_eq!(
            "distance2div".parse::<CellularReturn>(),
            Ok(CellularReturn::Distance2Div)
        );
        for &t in NoiseType::ALL {
            assert_eq!(t.to_string().parse::<NoiseType>(), Ok(t));
        }
    }

    #[test]
    fn unknown_enum_name_is_invalid_configuration() {
        let err = "Worley".parse::<NoiseType>().unwrap_err();
        assert!(matches!(
            err,
            NoiseError::InvalidConfiguration { field: "NoiseType", .. }
        ));
    }

    #[test]
    fn validate_rejects_broken_fields() {
        let bad = [
            NoiseConfig::default().with_octaves(0),
            NoiseConfig::default().with_lacunarity(0.0),
            NoiseConfig::default().with_gain(0.0),
            NoiseConfig::default().with_frequency(f64::NAN),
            NoiseConfig::default().with_domain_warp(f64::INFINITY),
            NoiseConfig::default().with_domain_warp_fractal(DomainWarpFractal::Progressive, 0),
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn octave_stacks_that_overflow_are_rejected() {
        let deep = NoiseConfig::default()
            .with_fractal_type(FractalType::FBm)
            .with_octaves(1100)
            .with_lacunarity(2.0)
            .with_gain(0.5);
        let err = deep.validate().unwrap_err();
        assert!(matches!(err, NoiseError::InvalidConfiguration { field: "octaves", .. }));

        // shrinking frequencies and amplitudes never overflow
        assert!(deep.clone().with_lacunarity(0.5).validate().is_ok());
        // growing amplitudes do
        assert!(deep.clone().with_lacunarity(1.0).with_gain(2.0).validate().is_err());
        // octave count is irrelevant without layering
        assert!(deep.clone().with_fractal_type(FractalType::None).validate().is_ok());

        let warp = NoiseConfig::default()
            .with_lacunarity(2.0)
            .with_gain(0.5)
            .with_domain_warp_type(DomainWarpType::BasicGrid)
            .with_domain_warp_fractal(DomainWarpFractal::Progressive, 1100);
        let err = warp.validate().unwrap_err();
        assert!(matches!(
            err,
            NoiseError::InvalidConfiguration { field: "domain_warp_octaves", .. }
        ));
        assert!(warp.with_domain_warp_fractal(DomainWarpFractal::Progressive, 900).validate().is_ok());
    }

    #[test]
    fn out_of_range_jitter_and_weighting_are_not_errors() {
        assert!(NoiseConfig::default().with_cellular_jitter(3.0).validate().is_ok());
        assert!(NoiseConfig::default().with_weighted_strength(1.2).validate().is_ok());
        assert!(NoiseConfig::default().with_weighted_strength(-0.5).validate().is_ok());
        assert!(NoiseConfig::default().with_weighted_strength(f64::NAN).validate().is_err());
    }
}
