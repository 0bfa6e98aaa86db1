use carousel::config::CarouselConfig;
use carousel::geometry::{sample_circle, RingSpec};
use carousel::{AnimationContext, Carousel, Catalog, ControlFlags, RingLevel};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark: circle sampling at the configured step
fn bench_sample_circle(c: &mut Criterion) {
    c.bench_function("sample_circle_5deg", |b| {
        b.iter(|| black_box(sample_circle(black_box(10.5), black_box(5.0))))
    });
}

/// Benchmark: ring extrusion across tessellation steps
fn bench_ring_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_build");

    for step in [1.0f32, 5.0, 15.0] {
        let spec = RingSpec::new(10.5, 7.5, 2.0, step);
        group.bench_with_input(BenchmarkId::from_parameter(step), &spec, |b, spec| {
            b.iter(|| black_box(spec.build()))
        });
    }

    group.finish();
}

/// Benchmark: full scene construction (rings, catalog, placement)
fn bench_carousel_build(c: &mut Criterion) {
    let config = CarouselConfig::default();
    let catalog = Catalog::new();

    c.bench_function("carousel_build", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| black_box(Carousel::build(&config, &catalog, &mut rng)))
    });

    c.bench_function("catalog_build", |b| b.iter(|| black_box(Catalog::new())));
}

/// Benchmark: one animation tick with every ring engaged
fn bench_animation_tick(c: &mut Criterion) {
    let config = CarouselConfig::default();
    let mut rng = StdRng::seed_from_u64(0);
    let carousel = match Carousel::build(&config, &Catalog::new(), &mut rng) {
        Ok(carousel) => carousel,
        Err(e) => panic!("default carousel failed to build: {e:#}"),
    };
    let mut context = AnimationContext::new(carousel, &config);
    context.set_flags(ControlFlags::with_engaged(&RingLevel::ALL));

    c.bench_function("animation_tick", |b| b.iter(|| context.tick()));
}

criterion_group!(
    benches,
    bench_sample_circle,
    bench_ring_build,
    bench_carousel_build,
    bench_animation_tick
);
criterion_main!(benches);
