use image::{Rgb, RgbImage};
use noise_kernel::{DomainWarpFractal, DomainWarpType, FractalType, Noise, NoiseConfig, NoiseType};
use palette::{Gradient, LinSrgb};
use std::path::Path;

type HeightMap = Vec<Vec<f32>>;

// Compute simple hillshade for a height-map
// `z_scale` adjusts vertical exaggeration
fn hillshade(map: &HeightMap, z_scale: f32) -> Vec<Vec<f32>> {
    let h = map.len();
    let w = map[0].len();
    let mut shade = vec![vec![0.0; w]; h];
    let azimuth = std::f32::consts::PI / 4.0; // 45°
    let altitude = std::f32::consts::PI / 4.0; // 45°
    let (sin_alt, cos_alt) = altitude.sin_cos();
    let (lx, ly, lz) = (azimuth.cos() * cos_alt, azimuth.sin() * cos_alt, sin_alt);

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let dzdx = ((map[y][x + 1] - map[y][x - 1]) / 2.0) * z_scale;
            let dzdy = ((map[y + 1][x] - map[y - 1][x]) / 2.0) * z_scale;
            let (nx, ny, nz) = (-dzdx, -dzdy, 1.0);
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            // Lambertian dot
            shade[y][x] = ((nx * lx + ny * ly + nz * lz) / len).max(0.0);
        }
    }
    shade
}

fn main() {
    let size = 512;

    // OpenSimplex2 FBm terrain, domain warped so coastlines meander
    let config = NoiseConfig::default()
        .with_seed(2025)
        .with_frequency(0.004)
        .with_noise_type(NoiseType::OpenSimplex2)
        .with_fractal_type(FractalType::FBm)
        .with_octaves(6)
        .with_lacunarity(2.0)
        .with_gain(0.5)
        .with_weighted_strength(0.3)
        .with_domain_warp_type(DomainWarpType::OpenSimplex2)
        .with_domain_warp(60.0)
        .with_domain_warp_fractal(DomainWarpFractal::Progressive, 3);
    let noise = Noise::new(config).unwrap();

    let terrain: HeightMap = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| noise.sample_warped((x as f64, y as f64)).1 as f32 * 40.0)
                .collect()
        })
        .collect();

    let shade = hillshade(&terrain, 1.0);

    // Create a color gradient - deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for row in &terrain {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }

    let mut img = RgbImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let norm = if (max - min).abs() < f32::EPSILON {
                0.5
            } else {
                (terrain[y][x] - min) / (max - min)
            };
            let col: LinSrgb = gradient.get(norm);
            let rgb = col.into_format::<u8>();
            let light = (shade[y][x] * 0.5 + 0.5).clamp(0.0, 1.0);
            let pixel = Rgb([
                (rgb.red as f32 * light) as u8,
                (rgb.green as f32 * light) as u8,
                (rgb.blue as f32 * light) as u8,
            ]);
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }

    let path = Path::new("terrain_final.png");
    img.save(path).unwrap();
    println!("Saved final terrain image to {:?}", path);
}
