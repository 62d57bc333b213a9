use criterion::{criterion_group, criterion_main, Criterion};
use glyphdex::{classify, glyph_bounds, BinConfig, ForegroundRule, Raster};
use std::hint::black_box;

/// Canvas with an ink blob covering roughly the middle third.
fn make_canvas(width: usize, height: usize) -> Raster {
    let mut raster = Raster::filled(width, height, 255).unwrap();
    for y in height / 3..2 * height / 3 {
        for x in width / 3..2 * width / 3 {
            // Leave some anti-aliased-looking values along the blob.
            let value = (((x * 13) ^ (y * 7)) & 0x3F) as u8;
            *raster.get_mut(x, y).unwrap() = value;
        }
    }
    raster
}

fn bench_bounds(c: &mut Criterion) {
    let raster = make_canvas(512, 512);
    let rule = ForegroundRule::default();

    c.bench_function("glyph_bounds_512", |b| {
        b.iter(|| glyph_bounds(black_box(raster.view()), black_box(&rule)).unwrap())
    });

    let small = make_canvas(60, 60);
    c.bench_function("glyph_bounds_60", |b| {
        b.iter(|| glyph_bounds(black_box(small.view()), black_box(&rule)).unwrap())
    });
}

fn bench_classify(c: &mut Criterion) {
    let raster = make_canvas(60, 60);
    let rule = ForegroundRule::default();
    let bbox = glyph_bounds(raster.view(), &rule).unwrap();
    let cfg = BinConfig::default();

    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(&bbox), black_box(&cfg)).unwrap())
    });
}

criterion_group!(benches, bench_bounds, bench_classify);
criterion_main!(benches);
