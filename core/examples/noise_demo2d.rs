use noise_kernel::{FractalType, Noise, NoiseConfig, NoiseType};

fn main() {
    // Perlin FBm, 4 octaves, seed 2025
    let config = NoiseConfig::default()
        .with_seed(2025)
        .with_frequency(0.05)
        .with_noise_type(NoiseType::Perlin)
        .with_fractal_type(FractalType::FBm)
        .with_octaves(4)
        .with_lacunarity(2.0)
        .with_gain(0.5);
    let noise = Noise::new(config).unwrap();

    // Print the top-left 16×16 corner of the field
    for y in 0..16 {
        for x in 0..16 {
            print!("{:>6.3} ", noise.sample2(x as f64, y as f64));
        }
        println!();
    }
}
