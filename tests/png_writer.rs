#![cfg(feature = "image-io")]

//! PNG round trips through the directory writer.

use glyphdex::io::{load_gray_raster, PngDirWriter};
use glyphdex::{glyph_bounds, ForegroundRule, GlyphWriter, Point, Raster};

fn glyph_raster() -> Raster {
    let mut raster = Raster::filled(12, 9, 255).unwrap();
    for y in 2..7 {
        for x in 3..10 {
            *raster.get_mut(x, y).unwrap() = 0;
        }
    }
    raster
}

#[test]
fn written_glyph_reads_back_bit_identical() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = PngDirWriter::create(dir.path()).unwrap();

    let crop = glyph_raster();
    let image_ref = writer.write_glyph(1, &crop).unwrap();
    assert_eq!(image_ref, "1.png");

    let loaded = load_gray_raster(dir.path().join(&image_ref)).unwrap();
    assert_eq!(loaded, crop);
}

#[test]
fn sequence_numbers_name_the_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = PngDirWriter::create(dir.path()).unwrap();
    let crop = glyph_raster();

    writer.write_glyph(1, &crop).unwrap();
    writer.write_glyph(2, &crop).unwrap();

    assert!(dir.path().join("1.png").is_file());
    assert!(dir.path().join("2.png").is_file());
    assert!(!dir.path().join("3.png").exists());
}

#[test]
fn persisted_crop_stays_tight() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = PngDirWriter::create(dir.path()).unwrap();
    let rule = ForegroundRule::default();

    let raster = glyph_raster();
    let bbox = glyph_bounds(raster.view(), &rule).unwrap();
    let crop = raster.crop(&bbox).unwrap();
    let image_ref = writer.write_glyph(1, &crop).unwrap();

    let loaded = load_gray_raster(dir.path().join(&image_ref)).unwrap();
    let rebbox = glyph_bounds(loaded.view(), &rule).unwrap();
    assert_eq!(rebbox.min, Point { x: 0, y: 0 });
    assert_eq!(
        rebbox.max,
        Point {
            x: loaded.width() - 1,
            y: loaded.height() - 1,
        }
    );
}
