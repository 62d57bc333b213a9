//! PNG persistence for cropped glyphs via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::pipeline::GlyphWriter;
use crate::raster::Raster;
use crate::util::{GlyphdexError, GlyphdexResult};
use std::path::{Path, PathBuf};

/// Writes each cropped glyph as `<seq>.png` into one directory.
pub struct PngDirWriter {
    dir: PathBuf,
}

impl PngDirWriter {
    /// Creates the output directory (and parents) if needed.
    pub fn create<P: Into<PathBuf>>(dir: P) -> GlyphdexResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|err| GlyphdexError::FileWrite {
            reason: format!("{}: {err}", dir.display()),
        })?;
        Ok(Self { dir })
    }

    /// Returns the output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl GlyphWriter for PngDirWriter {
    /// Encodes the crop as an 8-bit grayscale PNG and returns its file name.
    ///
    /// The write is synchronous and flushed before returning, so a crash
    /// mid-run leaves at most one partial file behind.
    fn write_glyph(&mut self, seq: usize, glyph: &Raster) -> GlyphdexResult<String> {
        let name = format!("{seq}.png");
        let path = self.dir.join(&name);
        let img = image::GrayImage::from_raw(
            glyph.width() as u32,
            glyph.height() as u32,
            glyph.data().to_vec(),
        )
        .ok_or_else(|| GlyphdexError::FileWrite {
            reason: "raster buffer does not match its dimensions".to_string(),
        })?;
        img.save(&path).map_err(|err| GlyphdexError::FileWrite {
            reason: format!("{}: {err}", path.display()),
        })?;
        Ok(name)
    }
}

/// Loads an image from disk as a grayscale raster.
pub fn load_gray_raster<P: AsRef<Path>>(path: P) -> GlyphdexResult<Raster> {
    let img = image::open(&path).map_err(|err| GlyphdexError::ImageIo {
        reason: format!("{}: {err}", path.as_ref().display()),
    })?;
    let gray = img.to_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    Raster::from_vec(gray.into_raw(), width, height)
}
