//! Benchmarks for the per-frame detection pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gauge_detector::config::{LocatorConfig, NeedleConfig};
use gauge_detector::gauge_locator::{average_circles, GaugeLocator};
use gauge_detector::needle_extractor::NeedleExtractor;
use opencv::core::{Mat, Point, Scalar, Vec3f, Vector, CV_8UC4};
use opencv::imgproc::{self, LINE_8};
use opencv::prelude::*;

/// 640x480 RGBA frame with a gauge ring and an in-band needle segment
fn synthetic_gauge_frame() -> Mat {
    let mut frame = Mat::zeros(480, 640, CV_8UC4).unwrap().to_mat().unwrap();

    imgproc::circle(
        &mut frame,
        Point::new(320, 240),
        200,
        Scalar::new(255.0, 255.0, 255.0, 255.0),
        3,
        LINE_8,
        0,
    )
    .unwrap();
    imgproc::line(
        &mut frame,
        Point::new(320, 240),
        Point::new(500, 240),
        Scalar::new(90.0, 88.0, 76.0, 255.0),
        3,
        LINE_8,
        0,
    )
    .unwrap();

    frame
}

fn benchmark_locator(c: &mut Criterion) {
    let frame = synthetic_gauge_frame();
    let locator = GaugeLocator::new(LocatorConfig::default());

    c.bench_function("locator_detect_640x480", |b| {
        b.iter(|| black_box(locator.detect(black_box(&frame)).unwrap()));
    });
}

fn benchmark_extractor(c: &mut Criterion) {
    let frame = synthetic_gauge_frame();
    let extractor = NeedleExtractor::new(NeedleConfig::default());

    let mut group = c.benchmark_group("extractor");

    group.bench_function("mask_640x480", |b| {
        b.iter(|| black_box(extractor.mask(black_box(&frame)).unwrap()));
    });

    group.bench_function("detect_640x480", |b| {
        b.iter(|| black_box(extractor.detect(black_box(&frame)).unwrap()));
    });

    group.finish();
}

fn benchmark_average_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_circles");

    for candidate_count in [1usize, 10, 100] {
        let circles: Vector<Vec3f> = (0..candidate_count)
            .map(|i| {
                let offset = i as f32;
                Vec3f::from([320.0 + offset, 240.0 - offset, 190.0 + offset])
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            &circles,
            |b, circles| {
                b.iter(|| black_box(average_circles(black_box(circles))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_locator,
    benchmark_extractor,
    benchmark_average_circles
);
criterion_main!(benches);
