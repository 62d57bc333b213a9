//! Invariant checks for bounding-box extraction on synthetic rasters.

use glyphdex::{glyph_bounds, ForegroundRule, Point, Raster};
use rand::Rng;

const BACKGROUND: u8 = 255;

fn scatter(width: usize, height: usize, points: &[Point]) -> Raster {
    let mut raster = Raster::filled(width, height, BACKGROUND).unwrap();
    for p in points {
        *raster.get_mut(p.x, p.y).unwrap() = 0;
    }
    raster
}

#[test]
fn extracted_box_is_the_running_extremes() {
    let points = [
        Point { x: 3, y: 9 },
        Point { x: 14, y: 2 },
        Point { x: 7, y: 7 },
    ];
    let raster = scatter(20, 12, &points);
    let bbox = glyph_bounds(raster.view(), &ForegroundRule::default()).unwrap();

    assert_eq!(bbox.min, Point { x: 3, y: 2 });
    assert_eq!(bbox.max, Point { x: 14, y: 9 });
}

#[test]
fn random_rasters_satisfy_box_invariants() {
    let mut rng = rand::rng();
    let width = 48;
    let height = 32;

    for _ in 0..200 {
        let count = rng.random_range(1..=20);
        let points: Vec<Point> = (0..count)
            .map(|_| Point {
                x: rng.random_range(0..width),
                y: rng.random_range(0..height),
            })
            .collect();
        let raster = scatter(width, height, &points);
        let bbox = glyph_bounds(raster.view(), &ForegroundRule::default()).unwrap();

        assert!(bbox.min.x <= bbox.max.x);
        assert!(bbox.min.y <= bbox.max.y);
        assert!(bbox.max.x < width);
        assert!(bbox.max.y < height);
        for p in &points {
            assert!(p.x >= bbox.min.x && p.x <= bbox.max.x);
            assert!(p.y >= bbox.min.y && p.y <= bbox.max.y);
        }

        let expected_min_x = points.iter().map(|p| p.x).min().unwrap();
        let expected_max_y = points.iter().map(|p| p.y).max().unwrap();
        assert_eq!(bbox.min.x, expected_min_x);
        assert_eq!(bbox.max.y, expected_max_y);
    }
}

#[test]
fn crop_then_extract_spans_the_whole_crop() {
    let mut rng = rand::rng();
    let width = 40;
    let height = 40;

    for _ in 0..50 {
        let count = rng.random_range(2..=12);
        let points: Vec<Point> = (0..count)
            .map(|_| Point {
                x: rng.random_range(0..width),
                y: rng.random_range(0..height),
            })
            .collect();
        let raster = scatter(width, height, &points);
        let rule = ForegroundRule::default();

        let bbox = glyph_bounds(raster.view(), &rule).unwrap();
        let crop = raster.crop(&bbox).unwrap();
        let rebbox = glyph_bounds(crop.view(), &rule).unwrap();

        // A tight crop cannot be trimmed further.
        assert_eq!(rebbox.min, Point { x: 0, y: 0 });
        assert_eq!(
            rebbox.max,
            Point {
                x: crop.width() - 1,
                y: crop.height() - 1,
            }
        );
    }
}

#[test]
fn extraction_is_deterministic() {
    let points = [Point { x: 5, y: 5 }, Point { x: 20, y: 17 }];
    let raster = scatter(30, 24, &points);
    let rule = ForegroundRule::default();

    let first = glyph_bounds(raster.view(), &rule).unwrap();
    let second = glyph_bounds(raster.view(), &rule).unwrap();
    assert_eq!(first, second);
}
