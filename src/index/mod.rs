//! The bin -> templates index.

use crate::util::{GlyphdexError, GlyphdexResult};

/// One classified glyph: the character, where its cropped image went, and the
/// aspect bin it fell into. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// The character the glyph renders.
    pub character: String,
    /// Identifier of the persisted cropped image, e.g. a file name.
    pub image_ref: String,
    /// Aspect-ratio bin id.
    pub bin: usize,
}

/// Mapping from bin id to the templates assigned to it, in insertion order.
///
/// Built one template at a time as characters are processed; insertion order
/// within a bin is the processing order of the input sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateIndex {
    bins: Vec<Vec<Template>>,
}

impl TemplateIndex {
    /// Creates an empty index with `bin_num` bins.
    pub fn new(bin_num: usize) -> Self {
        Self {
            bins: vec![Vec::new(); bin_num],
        }
    }

    /// Appends a template to its bin.
    ///
    /// The bin id was already validated by the classifier; this re-checks it
    /// at the container boundary so a bad id can never reach the vector index.
    pub fn push(&mut self, template: Template) -> GlyphdexResult<()> {
        let bin = template.bin;
        match self.bins.get_mut(bin) {
            Some(slot) => {
                slot.push(template);
                Ok(())
            }
            None => Err(GlyphdexError::BinOverflow {
                bin: bin as i64,
                bin_num: self.bins.len(),
            }),
        }
    }

    /// Returns the number of bins.
    pub fn bin_num(&self) -> usize {
        self.bins.len()
    }

    /// Returns the templates in one bin, in insertion order.
    pub fn bin(&self, idx: usize) -> Option<&[Template]> {
        self.bins.get(idx).map(Vec::as_slice)
    }

    /// Returns all bins in id order.
    pub fn bins(&self) -> &[Vec<Template>] {
        &self.bins
    }

    /// Returns the total number of templates across all bins.
    pub fn len(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }

    /// Returns true if no template has been added.
    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(Vec::is_empty)
    }

    /// Finalizes the index, handing back the accumulated bins.
    ///
    /// There is no merging or reordering step; this just consumes the builder.
    pub fn finalize(self) -> Vec<Vec<Template>> {
        self.bins
    }
}
