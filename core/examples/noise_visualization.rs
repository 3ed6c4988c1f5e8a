use image::{GrayImage, Luma};
use noise_kernel::{CellularReturn, FractalType, Noise, NoiseConfig, NoiseType};
use std::path::Path;

// Stretch samples to 0..255 using the observed min/max
fn write_gray(data: &[Vec<f64>], filename: &str) {
    let size = data.len();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in data {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }

    let mut img = GrayImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let v = data[y][x];
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn save_noise2d(noise: &Noise, size: usize, filename: &str) {
    let data: Vec<Vec<f64>> = (0..size)
        .map(|y| (0..size).map(|x| noise.sample2(x as f64, y as f64)).collect())
        .collect();
    write_gray(&data, filename);
}

fn save_noise3d_slice(noise: &Noise, size: usize, slice_z: f64, filename: &str) {
    let data: Vec<Vec<f64>> = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| noise.sample3(x as f64, y as f64, slice_z))
                .collect()
        })
        .collect();
    write_gray(&data, filename);
}

fn main() {
    let size = 256;
    let base = NoiseConfig::default()
        .with_seed(42)
        .with_frequency(0.02)
        .with_fractal_type(FractalType::FBm)
        .with_octaves(4)
        .with_lacunarity(2.0)
        .with_gain(0.5)
        .with_cellular_return(CellularReturn::Distance2Sub)
        .with_cellular_jitter(1.0);

    // One image per sampler family
    for &noise_type in NoiseType::ALL {
        let noise = Noise::new(base.clone().with_noise_type(noise_type)).unwrap();
        let filename = format!("{}2d.png", noise_type.name().to_lowercase());
        save_noise2d(&noise, size, &filename);
    }

    // And a slice through 3D OpenSimplex2
    let noise = Noise::new(base.with_noise_type(NoiseType::OpenSimplex2)).unwrap();
    save_noise3d_slice(&noise, size, 64.0, "opensimplex2_3d_slice.png");
}
