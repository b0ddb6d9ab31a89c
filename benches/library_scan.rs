// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image_rs::{Rgba, RgbaImage};
use photo_swipe::domain::display::BlurSigma;
use photo_swipe::domain::TargetSize;
use photo_swipe::infrastructure::filesystem::{decode, scan};
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

/// Builds a library of `count` small PNGs spread over a few nested folders.
fn build_library(count: usize) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for index in 0..count {
        let folder = dir.path().join(format!("album-{}", index % 4));
        std::fs::create_dir_all(&folder).expect("create album");
        RgbaImage::from_pixel(8, 8, Rgba([index as u8, 0, 0, 255]))
            .save(folder.join(format!("photo-{index:04}.png")))
            .expect("write png");
    }
    dir
}

fn scan_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("library_scan");

    for count in [50, 500] {
        let library = build_library(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), library.path(), |b, root| {
            b.iter(|| black_box(scan::scan_library(root, true).expect("scan")));
        });
    }

    group.finish();
}

fn resolve_benchmark(c: &mut Criterion) {
    let library = build_library(1);
    let photo = scan::scan_library(library.path(), true)
        .expect("scan")
        .into_iter()
        .next()
        .expect("one photo");

    c.bench_function("resolve_card", |b| {
        b.iter(|| {
            black_box(
                decode::resolve(
                    Path::new(&photo),
                    TargetSize::new(320, 450),
                    BlurSigma::default(),
                )
                .expect("resolve"),
            )
        });
    });
}

criterion_group!(benches, scan_benchmark, resolve_benchmark);
criterion_main!(benches);
