//! Aspect-ratio binning of glyph bounding boxes.
//!
//! Glyphs are grouped by the ratio of their bounding-box height to width:
//! `bin = floor(ratio / bin_size)`. The bin id is validated against the
//! configured bin count here, before anything indexes a bin-sized structure
//! with it.

use crate::raster::BoundingBox;
use crate::util::{GlyphdexError, GlyphdexResult};

/// Bin layout for aspect-ratio classification.
///
/// `bin_size` is the ratio width of one bin; `bin_num` bins cover ratios in
/// `[0, bin_size * bin_num)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinConfig {
    /// Ratio width of a single bin.
    pub bin_size: f32,
    /// Number of bins.
    pub bin_num: usize,
}

impl BinConfig {
    /// Creates a validated bin layout.
    pub fn new(bin_size: f32, bin_num: usize) -> GlyphdexResult<Self> {
        if !bin_size.is_finite() {
            return Err(GlyphdexError::InvalidBinConfig {
                reason: "bin_size must be finite",
            });
        }
        if bin_size <= 0.0 {
            return Err(GlyphdexError::InvalidBinConfig {
                reason: "bin_size must be > 0",
            });
        }
        if bin_num == 0 {
            return Err(GlyphdexError::InvalidBinConfig {
                reason: "bin_num must be at least 1",
            });
        }
        Ok(Self { bin_size, bin_num })
    }
}

impl Default for BinConfig {
    /// Five bins of width 0.8, covering ratios up to 4.0.
    fn default() -> Self {
        Self {
            bin_size: 0.8,
            bin_num: 5,
        }
    }
}

/// Maps a bounding box to its aspect-ratio bin.
///
/// Height and width are the differences of the box extremes (`max - min`),
/// not inclusive pixel counts; see [`BoundingBox::extent_x`]. A zero-width
/// box cannot form a ratio and is reported as
/// [`GlyphdexError::DegenerateGlyph`] instead of dividing. A ratio beyond the
/// configured range is reported as [`GlyphdexError::BinOverflow`] rather than
/// silently clamped.
pub fn classify(bbox: &BoundingBox, cfg: &BinConfig) -> GlyphdexResult<usize> {
    let width = bbox.extent_x();
    if width == 0 {
        return Err(GlyphdexError::DegenerateGlyph);
    }
    let ratio = bbox.extent_y() as f32 / width as f32;
    let bin = (ratio / cfg.bin_size).floor() as i64;
    if bin < 0 || bin as u64 >= cfg.bin_num as u64 {
        return Err(GlyphdexError::BinOverflow {
            bin,
            bin_num: cfg.bin_num,
        });
    }
    Ok(bin as usize)
}
