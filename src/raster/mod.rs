//! Glyph rasters and borrowed raster views.
//!
//! `Raster` owns a contiguous grayscale buffer; `RasterView` is a borrowed 2D
//! view with an explicit stride, so cropping a region out of a canvas is a
//! zero-copy slice until the crop is materialized. The stride counts pixels
//! between the starts of consecutive rows.
//!
//! The whole pipeline works in 8-bit grayscale with ink dark on a light
//! background, matching what the font engine composites.

use crate::util::{GlyphdexError, GlyphdexResult};

pub mod bounds;

pub use bounds::{glyph_bounds, BoundingBox, ForegroundRule, Point};

/// Borrowed 2D grayscale view with an explicit stride.
#[derive(Copy, Clone)]
pub struct RasterView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> RasterView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> GlyphdexResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> GlyphdexResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(GlyphdexError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the view width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the view height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in pixels between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx).copied()
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy sub-view of the given region.
    pub fn region(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> GlyphdexResult<RasterView<'a>> {
        let oob = GlyphdexError::RegionOutOfBounds {
            x,
            y,
            width,
            height,
            raster_width: self.width,
            raster_height: self.height,
        };
        if width == 0 || height == 0 {
            return Err(GlyphdexError::InvalidDimensions { width, height });
        }
        let end_x = x.checked_add(width).ok_or_else(|| oob.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| oob.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(oob);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(GlyphdexError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(GlyphdexError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        RasterView::new(data, width, height, self.stride)
    }
}

/// Owned contiguous grayscale raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Creates a raster from a contiguous buffer of exactly `width * height` pixels.
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> GlyphdexResult<Self> {
        let needed = checked_area(width, height)?;
        if data.len() < needed {
            return Err(GlyphdexError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(GlyphdexError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a raster filled with a uniform value.
    pub fn filled(width: usize, height: usize, value: u8) -> GlyphdexResult<Self> {
        let len = checked_area(width, height)?;
        Ok(Self {
            data: vec![value; len],
            width,
            height,
        })
    }

    /// Copies a (possibly strided) view into an owned contiguous raster.
    pub fn from_view(view: RasterView<'_>) -> GlyphdexResult<Self> {
        let width = view.width();
        let height = view.height();
        let mut data = vec![0u8; checked_area(width, height)?];
        for y in 0..height {
            let row = view.row(y).ok_or(GlyphdexError::BufferTooSmall {
                needed: (y + 1).saturating_mul(view.stride()),
                got: view.stride().saturating_mul(view.height()),
            })?;
            data[y * width..(y + 1) * width].copy_from_slice(row);
        }
        Self::from_vec(data, width, height)
    }

    /// Returns the raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the backing pixel buffer in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the raster and returns its pixel buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns a mutable pixel reference, if `(x, y)` is within bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    /// Returns a borrowed view of the whole raster.
    pub fn view(&self) -> RasterView<'_> {
        RasterView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Crops to the inclusive pixel span of a bounding box.
    ///
    /// Uses the inclusive span (`max - min + 1` per axis) so the extreme
    /// pixels that defined the box survive the crop.
    pub fn crop(&self, bbox: &BoundingBox) -> GlyphdexResult<Raster> {
        let region = self
            .view()
            .region(bbox.min.x, bbox.min.y, bbox.span_x(), bbox.span_y())?;
        Raster::from_view(region)
    }
}

fn checked_area(width: usize, height: usize) -> GlyphdexResult<usize> {
    if width == 0 || height == 0 {
        return Err(GlyphdexError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(GlyphdexError::InvalidDimensions { width, height })
}

fn required_len(width: usize, height: usize, stride: usize) -> GlyphdexResult<usize> {
    if width == 0 || height == 0 {
        return Err(GlyphdexError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(GlyphdexError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(GlyphdexError::InvalidDimensions { width, height })
}
