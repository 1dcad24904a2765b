use crate::core::align::{self, AlignOptions};
use crate::core::parser;
use crate::domain::model::{Document, Layout};
use crate::utils::error::Result;

/// Read-only view of one alignment run's intermediate state, exposed for
/// the debug visualization.
#[derive(Debug)]
pub struct AlignReport {
    pub layout: Layout,
    pub document: Document,
    pub widths: Vec<usize>,
}

/// Batch alignment engine: one document in, one rewritten document out.
/// The layout is loaded once and immutable; independent documents can be
/// processed by separate engines with no shared state.
pub struct AlignEngine {
    layout: Layout,
    options: AlignOptions,
}

impl AlignEngine {
    pub fn new(layout: Layout, options: AlignOptions) -> Self {
        Self { layout, options }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Parse, measure, and re-emit every binding block of `source`. All
    /// bytes outside the blocks are returned unchanged.
    pub fn run(&self, source: &str) -> Result<String> {
        let document = parser::parse_document(source)?;
        tracing::debug!(
            layers = document.layers.len(),
            layout = %self.layout.name,
            "parsed keymap"
        );

        let widths = align::column_widths(&self.layout, &document.layers)?;

        let mut replacements = Vec::with_capacity(document.layers.len());
        for layer in &document.layers {
            let block = align::render_block(&self.layout, layer, &widths, &self.options)?;
            replacements.push((layer.span, block));
        }

        Ok(align::splice(&document.source, &replacements))
    }

    /// Structured parse plus computed column widths, without rewriting.
    pub fn inspect(&self, source: &str) -> Result<AlignReport> {
        let document = parser::parse_document(source)?;
        let widths = align::column_widths(&self.layout, &document.layers)?;
        Ok(AlignReport {
            layout: self.layout.clone(),
            document,
            widths,
        })
    }
}
