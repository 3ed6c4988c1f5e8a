use noise_kernel::{
    CellularDistance, CellularNoise, CellularReturn, Coord, DomainWarpType, FractalType, Noise,
    NoiseConfig, NoiseGenerator, NoiseType, PerlinNoise, RotationType,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALL_TYPES: [NoiseType; 7] = [
    NoiseType::Value,
    NoiseType::ValueCubic,
    NoiseType::Perlin,
    NoiseType::Simplex,
    NoiseType::OpenSimplex2,
    NoiseType::OpenSimplex2S,
    NoiseType::Cellular,
];

fn noise(config: NoiseConfig) -> Noise {
    Noise::new(config).expect("valid test configuration")
}

fn fbm(noise_type: NoiseType, octaves: u32) -> NoiseConfig {
    NoiseConfig::default()
        .with_noise_type(noise_type)
        .with_fractal_type(FractalType::FBm)
        .with_octaves(octaves)
        .with_lacunarity(2.0)
        .with_gain(0.5)
}

fn correlation(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        cov += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a) * (x - mean_a);
        var_b += (y - mean_b) * (y - mean_b);
    }
    cov / (var_a * var_b).sqrt()
}

#[test]
fn same_input_gives_same_bits() {
    for noise_type in ALL_TYPES {
        let config = fbm(noise_type, 4).with_cellular_jitter(0.8);
        let a = noise(config.clone());
        let b = noise(config);
        for i in 0..200 {
            let t = i as f64 * 7.31 - 500.0;
            assert_eq!(
                a.sample2(t, t * 0.3).to_bits(),
                b.sample2(t, t * 0.3).to_bits(),
                "{noise_type}"
            );
            assert_eq!(
                a.sample3(t, -t, t * 0.7).to_bits(),
                b.sample3(t, -t, t * 0.7).to_bits(),
                "{noise_type}"
            );
        }
    }
}

#[test]
fn different_seeds_are_uncorrelated() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let points: Vec<(f64, f64, f64)> = (0..10_000)
        .map(|_| {
            (
                rng.gen_range(-10_000.0..10_000.0),
                rng.gen_range(-10_000.0..10_000.0),
                rng.gen_range(-10_000.0..10_000.0),
            )
        })
        .collect();

    for noise_type in ALL_TYPES {
        let config = NoiseConfig::default()
            .with_noise_type(noise_type)
            .with_frequency(0.05)
            .with_cellular_return(CellularReturn::CellValue);
        let a = noise(config.clone().with_seed(1));
        let b = noise(config.with_seed(2));

        let va: Vec<f64> = points.iter().map(|&(x, y, _)| a.sample2(x, y)).collect();
        let vb: Vec<f64> = points.iter().map(|&(x, y, _)| b.sample2(x, y)).collect();
        let r = correlation(&va, &vb);
        assert!(r.abs() < 0.1, "{noise_type} 2D correlation {r}");

        let va: Vec<f64> = points.iter().map(|&(x, y, z)| a.sample3(x, y, z)).collect();
        let vb: Vec<f64> = points.iter().map(|&(x, y, z)| b.sample3(x, y, z)).collect();
        let r = correlation(&va, &vb);
        assert!(r.abs() < 0.1, "{noise_type} 3D correlation {r}");
    }
}

#[test]
fn single_octave_fbm_equals_the_plain_sampler() {
    for noise_type in ALL_TYPES {
        let layered = noise(fbm(noise_type, 1).with_cellular_jitter(0.5));
        let plain = noise(
            NoiseConfig::default()
                .with_noise_type(noise_type)
                .with_cellular_jitter(0.5),
        );
        for i in 0..100 {
            let t = i as f64 * 13.7;
            assert_eq!(layered.sample2(t, -t), plain.sample2(t, -t), "{noise_type}");
            assert_eq!(layered.sample3(t, 2.0, -t), plain.sample3(t, 2.0, -t), "{noise_type}");
        }
    }

    // and the facade adds nothing beyond frequency scaling for Perlin
    let perlin = noise(fbm(NoiseType::Perlin, 1).with_seed(99));
    assert_eq!(
        perlin.sample2(37.0, 51.0),
        PerlinNoise.get2(99, 37.0 * 0.01, 51.0 * 0.01)
    );
}

#[test]
fn single_octave_ridged_and_ping_pong_are_the_octave_transform() {
    let plain = noise(NoiseConfig::default());
    let ridged = noise(
        NoiseConfig::default()
            .with_fractal_type(FractalType::Ridged)
            .with_octaves(1),
    );
    let ping_pong = noise(
        NoiseConfig::default()
            .with_fractal_type(FractalType::PingPong)
            .with_octaves(1)
            .with_ping_pong_strength(0.5),
    );
    for i in 0..100 {
        let t = i as f64 * 9.1 + 0.5;
        let n = plain.sample2(t, t * 0.5);
        assert_eq!(ridged.sample2(t, t * 0.5), (1.0 - n.abs()) * (1.0 - n.abs()));
        // strength 0.5 keeps (n + 1) * 0.5 inside [0, 1], no fold happens
        assert_eq!(ping_pong.sample2(t, t * 0.5), ((n + 1.0) * 0.5 - 0.5) * 2.0);
    }
}

#[test]
fn unweighted_fractals_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let fractals = [FractalType::FBm, FractalType::Ridged, FractalType::PingPong];

    for i in 0..100_000usize {
        let noise_type = ALL_TYPES[i % ALL_TYPES.len()];
        let fractal = fractals[i % fractals.len()];
        let config = fbm(noise_type, 3)
            .with_fractal_type(fractal)
            .with_weighted_strength(0.0)
            .with_seed(rng.r#gen())
            .with_frequency(rng.gen_range(0.001..0.5));
        let n = noise(config);

        let (x, y, z) = (
            rng.gen_range(-1e5..1e5),
            rng.gen_range(-1e5..1e5),
            rng.gen_range(-1e5..1e5),
        );
        let v2 = n.sample2(x, y);
        let v3 = n.sample3(x, y, z);
        assert!(v2.abs() <= 1.0 + 1e-6, "{noise_type} {fractal} 2D gave {v2}");
        assert!(v3.abs() <= 1.0 + 1e-6, "{noise_type} {fractal} 3D gave {v3}");
    }
}

#[test]
fn zero_jitter_cells_are_centred_on_lattice_points() {
    let cellular = noise(
        NoiseConfig::default()
            .with_noise_type(NoiseType::Cellular)
            .with_frequency(1.0)
            .with_cellular_distance(CellularDistance::Euclidean)
            .with_cellular_return(CellularReturn::Distance)
            .with_cellular_jitter(0.0),
    );
    let search = CellularNoise::new(CellularDistance::Euclidean, CellularReturn::Distance, 0.0);
    for x in -5i32..5 {
        for y in -5i32..5 {
            let (x, y) = (f64::from(x), f64::from(y));
            assert_eq!(search.search2(1337, x, y).distance0, 0.0);
            assert_eq!(search.search3(1337, x, y, 3.0).distance0, 0.0);
            // Distance return is d0 - 1
            assert_eq!(cellular.sample2(x, y), -1.0);
            assert_eq!(cellular.sample3(x, y, 3.0), -1.0);
        }
    }
}

#[test]
fn disabled_warp_leaves_coordinates_alone() {
    let configs = [
        NoiseConfig::default()
            .with_domain_warp_type(DomainWarpType::None)
            .with_domain_warp(50.0),
        NoiseConfig::default()
            .with_domain_warp_type(DomainWarpType::OpenSimplex2)
            .with_domain_warp(0.0),
        NoiseConfig::default()
            .with_domain_warp_type(DomainWarpType::BasicGrid)
            .with_domain_warp(0.0),
    ];
    for config in configs {
        let n = noise(config);
        for coord in [Coord::D2([12.5, -3.25]), Coord::D3([12.5, -3.25, 99.0])] {
            let (warped, value) = n.sample_warped(coord);
            assert_eq!(warped, coord);
            assert_eq!(value, n.sample(coord));
        }
    }
}

#[test]
fn warp_displaces_coordinates() {
    for kind in [
        DomainWarpType::OpenSimplex2,
        DomainWarpType::OpenSimplex2Reduced,
        DomainWarpType::BasicGrid,
    ] {
        let n = noise(
            NoiseConfig::default()
                .with_domain_warp_type(kind)
                .with_domain_warp(40.0),
        );
        let (x, y, z) = n.warp3(150.3, -20.7, 8.8);
        assert!((x, y, z) != (150.3, -20.7, 8.8), "{kind}");
        assert!(x.is_finite() && y.is_finite() && z.is_finite());
    }
}

#[test]
fn rotation_is_ignored_in_2d() {
    for noise_type in ALL_TYPES {
        let base = NoiseConfig::default().with_noise_type(noise_type);
        let reference = noise(base.clone());
        for rotation in [
            RotationType::Improved3D,
            RotationType::XYPlanes,
            RotationType::XZPlanes,
        ] {
            let rotated = noise(base.clone().with_rotation_type(rotation));
            for i in 0..50 {
                let t = i as f64 * 17.3;
                assert_eq!(reference.sample2(t, t * 0.2), rotated.sample2(t, t * 0.2));
            }
        }
    }
}

#[test]
fn rotation_changes_3d_output() {
    let base = NoiseConfig::default().with_noise_type(NoiseType::Perlin);
    let plain = noise(base.clone());
    let rotated = noise(base.with_rotation_type(RotationType::Improved3D));
    let differing = (0..100)
        .filter(|i| {
            let t = *i as f64 * 31.7 + 5.0;
            plain.sample3(t, t * 0.4, -t) != rotated.sample3(t, t * 0.4, -t)
        })
        .count();
    assert!(differing > 90);
}

#[test]
fn perlin_fbm_regression_anchor() {
    let n = noise(
        NoiseConfig::default()
            .with_seed(1337)
            .with_frequency(0.01)
            .with_noise_type(NoiseType::Perlin)
            .with_fractal_type(FractalType::FBm)
            .with_octaves(3)
            .with_lacunarity(2.0)
            .with_gain(0.5),
    );
    // (100, 200) * 0.01 lands on lattice points at every octave, where
    // gradient noise is exactly zero
    assert_eq!(n.sample2(100.0, 200.0), 0.0);

    let v = n.sample2(123.4, -56.7);
    assert!((v - -0.329_596_336_934_770_1).abs() < 1e-12, "got {v}");
}

#[test]
fn single_octave_regression_anchors() {
    let anchors = [
        (NoiseType::OpenSimplex2, -0.727_009_121_006_833_1),
        (NoiseType::Value, -0.079_590_126_874_992_62),
    ];
    for (noise_type, expected) in anchors {
        let n = noise(NoiseConfig::default().with_noise_type(noise_type));
        let v = n.sample2(123.4, -56.7);
        assert!((v - expected).abs() < 1e-12, "{noise_type}: got {v}");
    }
}

#[test]
fn one_noise_serves_many_threads() {
    let n = noise(
        fbm(NoiseType::OpenSimplex2S, 4)
            .with_domain_warp_type(DomainWarpType::OpenSimplex2)
            .with_domain_warp(20.0),
    );
    let expected: Vec<f64> = (0..256)
        .map(|i| n.sample_warped((i as f64, i as f64 * 0.5, 7.0)).1)
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (0..256)
                        .map(|i| n.sample_warped((i as f64, i as f64 * 0.5, 7.0)).1)
                        .collect::<Vec<f64>>()
                })
            })
            .collect();
        for handle in handles {
            let got = handle.join().expect("sampling thread panicked");
            assert_eq!(got, expected);
        }
    });
}

#[test]
fn huge_and_negative_coordinates_stay_finite() {
    for noise_type in ALL_TYPES {
        let n = noise(
            NoiseConfig::default()
                .with_noise_type(noise_type)
                .with_frequency(1.0)
                .with_cellular_jitter(1.0),
        );
        for &c in &[1e12, -1e12, 3.0e9, -2.5e9, -0.5] {
            assert!(n.sample2(c, -c).is_finite(), "{noise_type} at {c}");
            assert!(n.sample3(c, c * 0.5, -c).is_finite(), "{noise_type} at {c}");
        }
    }
}
