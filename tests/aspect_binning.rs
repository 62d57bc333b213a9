//! Classification scenarios driven through real bounds extraction.

use glyphdex::{classify, glyph_bounds, BinConfig, ForegroundRule, GlyphdexError, Raster};

/// Draws a solid ink rectangle of `width x height` pixels at (2, 2).
fn ink_rect(width: usize, height: usize) -> Raster {
    let mut raster = Raster::filled(width + 8, height + 8, 255).unwrap();
    for y in 2..2 + height {
        for x in 2..2 + width {
            *raster.get_mut(x, y).unwrap() = 0;
        }
    }
    raster
}

fn extract(raster: &Raster) -> glyphdex::BoundingBox {
    glyph_bounds(raster.view(), &ForegroundRule::default()).unwrap()
}

#[test]
fn ratio_one_point_five_lands_in_bin_one() {
    // 21x31 ink pixels: extents 20 and 30, ratio 1.5, floor(1.5 / 0.8) = 1.
    let cfg = BinConfig::new(0.8, 5).unwrap();
    let bbox = extract(&ink_rect(21, 31));
    assert_eq!(classify(&bbox, &cfg).unwrap(), 1);
}

#[test]
fn ratio_beyond_configured_range_is_an_overflow() {
    // Extents 10 and 45: ratio 4.5 exceeds 0.8 * 5 = 4.0.
    let cfg = BinConfig::new(0.8, 5).unwrap();
    let bbox = extract(&ink_rect(11, 46));
    let err = classify(&bbox, &cfg).err().unwrap();
    assert_eq!(err, GlyphdexError::BinOverflow { bin: 5, bin_num: 5 });
}

#[test]
fn single_column_stroke_is_degenerate() {
    // One pixel wide: extent_x is 0 under the difference-of-extremes
    // convention, so no ratio can be formed.
    let cfg = BinConfig::new(0.8, 5).unwrap();
    let bbox = extract(&ink_rect(1, 30));
    assert_eq!(bbox.extent_x(), 0);
    let err = classify(&bbox, &cfg).err().unwrap();
    assert_eq!(err, GlyphdexError::DegenerateGlyph);
}

#[test]
fn every_valid_ratio_maps_below_bin_num() {
    let cfg = BinConfig::new(0.8, 5).unwrap();
    for (w, h) in [(2, 2), (30, 10), (10, 30), (40, 5), (9, 28)] {
        let bbox = extract(&ink_rect(w, h));
        let bin = classify(&bbox, &cfg).unwrap();
        assert!(bin < cfg.bin_num);
    }
}
