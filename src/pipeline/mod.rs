//! Per-character batch pipeline: rasterize, bound, crop, persist, classify.
//!
//! The run is strictly sequential with a single writer; one character's
//! failure is recorded and the batch moves on. Only a missing or unparsable
//! font (and structural config errors) abort a run, since nothing can
//! proceed without one.

use crate::classify::{classify, BinConfig};
use crate::engine::{GlyphRasterizer, RenderSpec};
use crate::index::{Template, TemplateIndex};
use crate::raster::{glyph_bounds, ForegroundRule, Raster};
use crate::trace::{trace_event, trace_span};
use crate::util::{GlyphdexError, GlyphdexResult};

/// Everything a run needs, passed in explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Characters to process, in order. Each entry renders as one glyph.
    pub characters: Vec<String>,
    /// Canvas and font sizing shared by every glyph of the run.
    pub render: RenderSpec,
    /// Aspect-ratio bin layout.
    pub bins: BinConfig,
    /// Background/foreground pixel rule for bounds extraction.
    pub foreground: ForegroundRule,
}

impl PipelineConfig {
    /// Config with default sizing: 40 px font, white background, exact-match
    /// foreground rule, five 0.8-wide aspect bins.
    pub fn new(characters: Vec<String>) -> Self {
        let render = RenderSpec::for_font_size(40.0);
        Self {
            characters,
            render,
            bins: BinConfig::default(),
            foreground: ForegroundRule::exact(render.background),
        }
    }
}

/// A character the run could not turn into a template, and why.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphFailure {
    /// The character that failed.
    pub character: String,
    /// The step-specific error.
    pub error: GlyphdexError,
}

/// Outcome of a full run: the accumulated index plus per-character failures.
#[derive(Debug)]
pub struct RunReport {
    /// Bin -> templates mapping for every successful character.
    pub index: TemplateIndex,
    /// Characters that produced no template, in processing order.
    pub failures: Vec<GlyphFailure>,
}

/// Persists cropped glyph images and hands back their references.
pub trait GlyphWriter {
    /// Writes the cropped glyph for sequence number `seq` (1-based,
    /// processing order) and returns its reference.
    fn write_glyph(&mut self, seq: usize, glyph: &Raster) -> GlyphdexResult<String>;
}

/// Writer that keeps crops in memory. Useful for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    glyphs: Vec<(String, Raster)>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded (reference, crop) pairs in write order.
    pub fn glyphs(&self) -> &[(String, Raster)] {
        &self.glyphs
    }
}

impl GlyphWriter for MemoryWriter {
    fn write_glyph(&mut self, seq: usize, glyph: &Raster) -> GlyphdexResult<String> {
        let image_ref = seq.to_string();
        self.glyphs.push((image_ref.clone(), glyph.clone()));
        Ok(image_ref)
    }
}

/// Runs the whole batch and builds the template index.
///
/// Characters are processed in order, each through rasterize -> bounds ->
/// crop -> persist -> classify. A failing character is recorded in the
/// report's failure list and skipped; the run always completes the sequence.
/// The writer sequence number advances once per character that reaches the
/// write step, so persisted names stay gapless in processing order.
pub fn run<R, W>(
    rasterizer: &R,
    writer: &mut W,
    cfg: &PipelineConfig,
) -> GlyphdexResult<RunReport>
where
    R: GlyphRasterizer,
    W: GlyphWriter,
{
    // Reject an unusable bin layout up front instead of failing every glyph.
    BinConfig::new(cfg.bins.bin_size, cfg.bins.bin_num)?;

    let _span = trace_span!("build_index", characters = cfg.characters.len()).entered();

    let mut index = TemplateIndex::new(cfg.bins.bin_num);
    let mut failures = Vec::new();
    let mut seq = 0usize;

    for character in &cfg.characters {
        match process_glyph(rasterizer, writer, cfg, character, &mut seq) {
            Ok(template) => {
                trace_event!(
                    "glyph_indexed",
                    glyph = character.as_str(),
                    bin = template.bin,
                );
                index.push(template)?;
            }
            Err(error) => {
                let reason = error.to_string();
                trace_event!(
                    "glyph_failed",
                    glyph = character.as_str(),
                    error = reason.as_str(),
                );
                failures.push(GlyphFailure {
                    character: character.clone(),
                    error,
                });
            }
        }
    }

    trace_event!(
        "index_built",
        templates = index.len(),
        failures = failures.len(),
    );
    Ok(RunReport { index, failures })
}

fn process_glyph<R, W>(
    rasterizer: &R,
    writer: &mut W,
    cfg: &PipelineConfig,
    character: &str,
    seq: &mut usize,
) -> GlyphdexResult<Template>
where
    R: GlyphRasterizer,
    W: GlyphWriter,
{
    let raster = rasterizer.rasterize(character, &cfg.render)?;
    let bbox = glyph_bounds(raster.view(), &cfg.foreground)?;
    let crop = raster.crop(&bbox)?;

    *seq += 1;
    let image_ref = writer.write_glyph(*seq, &crop)?;

    let bin = classify(&bbox, &cfg.bins)?;
    Ok(Template {
        character: character.to_string(),
        image_ref,
        bin,
    })
}
