//! Box blur benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (thumbnail to 4K frames)
//! - Radius (cost should stay flat as the radius grows)
//! - Band height of the parallel pass
//! - Image content (noise, photographic gradients, flat fills)
//!
//! For serial execution, use `FASTBOXBLUR_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTBOXBLUR_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastBoxblur::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTBOXBLUR_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Image Generation with Reproducible RNG
// ============================================================================

/// Uniform random RGBA noise.
fn generate_noise_image(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pixels = vec![0u8; width * height * 4];
    rng.fill_bytes(&mut pixels);
    pixels
}

/// Smooth diagonal gradient with Gaussian sensor noise, opaque.
fn generate_photo_image(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 8.0).unwrap();

    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let base = 255.0 * (x + y) as f64 / (width + height) as f64;
            for offset in [0.0, 30.0, 60.0] {
                let v = base + offset + noise_dist.sample(&mut rng);
                pixels.push(v.clamp(0.0, 255.0) as u8);
            }
            pixels.push(255);
        }
    }
    pixels
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(30);

    for (width, height) in [(160, 120), (640, 480), (1920, 1080), (3840, 2160)] {
        group.throughput(Throughput::Elements((width * height) as u64));

        let mut pixels = generate_photo_image(width, height, 42);
        let model = BoxBlur::new()
            .radius(5)
            .adapter(Batch)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("batch", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| b.iter(|| model.apply(black_box(&mut pixels), w, h).unwrap()),
        );
    }
    group.finish();
}

fn bench_radius(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("radius_{}", mode_name));
    group.sample_size(50);

    let (width, height) = (640, 480);
    let mut pixels = generate_noise_image(width, height, 42);

    for radius in [1, 2, 5, 10, 25, 50, 100] {
        let model = BoxBlur::new()
            .radius(radius)
            .adapter(Batch)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("batch", radius), &radius, |b, _| {
            b.iter(|| model.apply(black_box(&mut pixels), width, height).unwrap())
        });
    }
    group.finish();
}

fn bench_chunk_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_rows_parallel");
    group.sample_size(50);

    let (width, height) = (1920, 1080);
    let mut pixels = generate_photo_image(width, height, 7);

    for chunk_rows in [1, 8, 32, 64, 256, 1080] {
        let model = BoxBlur::new()
            .radius(5)
            .adapter(Batch)
            .chunk_rows(chunk_rows)
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("batch", chunk_rows),
            &chunk_rows,
            |b, _| b.iter(|| model.apply(black_box(&mut pixels), width, height).unwrap()),
        );
    }
    group.finish();
}

fn bench_content(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("content_{}", mode_name));
    group.sample_size(50);

    let (width, height) = (640, 480);
    let images = [
        ("noise", generate_noise_image(width, height, 1)),
        ("photo", generate_photo_image(width, height, 2)),
        ("flat", vec![128u8; width * height * 4]),
    ];

    let model = BoxBlur::new()
        .radius(5)
        .adapter(Batch)
        .parallel(use_parallel)
        .build()
        .unwrap();

    for (name, image) in images {
        let mut pixels = image;
        group.bench_function(name, |b| {
            b.iter(|| model.apply(black_box(&mut pixels), width, height).unwrap())
        });
    }
    group.finish();
}

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_shot");
    group.sample_size(50);

    let (width, height) = (640, 480);
    let mut pixels = generate_photo_image(width, height, 3);

    group.bench_function("boxblur", |b| {
        b.iter(|| boxblur::blur(black_box(pixels.as_mut_slice()), width, height, 5).unwrap())
    });
    group.bench_function("fastBoxblur", |b| {
        b.iter(|| fastBoxblur::blur(black_box(&mut pixels), width, height, 5).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_radius,
    bench_chunk_rows,
    bench_content,
    bench_one_shot,
);

criterion_main!(benches);
