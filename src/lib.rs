//! Glyphdex renders a character set through a font rasterizer and builds an
//! index of glyph templates grouped by aspect ratio.
//!
//! For each character the pipeline rasterizes the glyph onto a fixed canvas,
//! extracts the tight bounding box of its ink, crops and persists the glyph
//! image, classifies the box's height/width ratio into a discrete bin, and
//! appends a template record to that bin. Rendering is pluggable through the
//! [`GlyphRasterizer`] trait (a `fontdue`-backed engine ships behind the
//! `fontdue` feature), persistence through [`GlyphWriter`] (PNG output behind
//! `image-io`).

pub mod classify;
pub mod engine;
#[cfg(feature = "fontdue")]
pub mod font;
pub mod index;
#[cfg(feature = "image-io")]
pub mod io;
pub mod pipeline;
pub mod raster;
mod trace;
pub mod util;

pub use classify::{classify, BinConfig};
pub use engine::{GlyphRasterizer, RenderSpec};
#[cfg(feature = "fontdue")]
pub use font::FontEngine;
pub use index::{Template, TemplateIndex};
pub use pipeline::{run, GlyphFailure, GlyphWriter, MemoryWriter, PipelineConfig, RunReport};
pub use raster::{glyph_bounds, BoundingBox, ForegroundRule, Point, Raster, RasterView};
pub use util::{GlyphdexError, GlyphdexResult};
