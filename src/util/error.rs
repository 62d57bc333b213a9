//! Error types for glyphdex.

use thiserror::Error;

/// Result alias for glyphdex operations.
pub type GlyphdexResult<T> = std::result::Result<T, GlyphdexError>;

/// Errors that can occur while building a glyph template index.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GlyphdexError {
    /// The font source could not be loaded or parsed. Fatal to a run.
    #[error("failed to load font: {reason}")]
    FontLoad {
        /// Description from the font parser.
        reason: String,
    },
    /// The rasterization engine could not render a specific glyph.
    #[error("failed to rasterize {glyph:?}: {reason}")]
    Rasterization {
        /// The glyph string that was requested.
        glyph: String,
        /// Description of what went wrong.
        reason: &'static str,
    },
    /// A rendered raster contained no foreground pixels.
    #[error("glyph raster contains no foreground pixels")]
    EmptyGlyph,
    /// A bounding box with zero width cannot be classified by aspect ratio.
    #[error("glyph bounding box has zero width")]
    DegenerateGlyph,
    /// The computed bin falls outside the configured bin range.
    #[error("aspect bin {bin} outside configured range of {bin_num} bins")]
    BinOverflow {
        /// The bin that was computed from the aspect ratio.
        bin: i64,
        /// The number of configured bins.
        bin_num: usize,
    },
    /// Writing a cropped glyph image failed.
    #[error("failed to write glyph image: {reason}")]
    FileWrite {
        /// Description from the writer.
        reason: String,
    },
    /// Reading or decoding an image file failed.
    #[error("image i/o failed: {reason}")]
    ImageIo {
        /// Description from the image decoder.
        reason: String,
    },
    /// Raster dimensions are zero or overflow the address space.
    #[error("invalid raster dimensions {width}x{height}")]
    InvalidDimensions {
        /// Raster width in pixels.
        width: usize,
        /// Raster height in pixels.
        height: usize,
    },
    /// The stride is smaller than the row width.
    #[error("stride {stride} smaller than width {width}")]
    InvalidStride {
        /// Raster width in pixels.
        width: usize,
        /// Stride in elements between row starts.
        stride: usize,
    },
    /// The backing buffer is too small for the requested view.
    #[error("buffer of {got} bytes too small, need {needed}")]
    BufferTooSmall {
        /// Required buffer length.
        needed: usize,
        /// Actual buffer length.
        got: usize,
    },
    /// A crop region does not fit inside the source raster.
    #[error("region {width}x{height} at ({x}, {y}) outside raster {raster_width}x{raster_height}")]
    RegionOutOfBounds {
        /// Region origin column.
        x: usize,
        /// Region origin row.
        y: usize,
        /// Region width.
        width: usize,
        /// Region height.
        height: usize,
        /// Source raster width.
        raster_width: usize,
        /// Source raster height.
        raster_height: usize,
    },
    /// The bin configuration is unusable.
    #[error("invalid bin configuration: {reason}")]
    InvalidBinConfig {
        /// Why the configuration was rejected.
        reason: &'static str,
    },
}
