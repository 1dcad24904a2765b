use crate::domain::model::{Cell, Layer, Layout, Span};
use crate::utils::error::AlignmentError;

/// Minimum separator appended after the widest entry of every column.
pub const DEFAULT_PADDING: usize = 2;
/// Indentation used for binding lines when the original block was inline.
pub const DEFAULT_INDENT_SIZE: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct AlignOptions {
    pub padding: usize,
    pub indent_size: usize,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

/// Maximum rendered width per matrix column across all layers. Fails if
/// any layer's binding count disagrees with the layout's key count.
pub fn column_widths(layout: &Layout, layers: &[Layer]) -> Result<Vec<usize>, AlignmentError> {
    let expected = layout.key_count();
    for layer in layers {
        if layer.bindings.len() != expected {
            return Err(AlignmentError::BindingCountMismatch {
                layer: layer.name.clone(),
                layout: layout.name.clone(),
                expected,
                found: layer.bindings.len(),
            });
        }
    }

    let mut widths = vec![0usize; layout.column_count()];
    for layer in layers {
        let mut next = 0;
        for row in &layout.rows {
            for (col, cell) in row.iter().enumerate() {
                if *cell == Cell::Key {
                    widths[col] = widths[col].max(layer.bindings[next].width());
                    next += 1;
                }
            }
        }
    }
    Ok(widths)
}

/// Re-serialize one layer's binding block against the layout matrix.
/// Occupied cells are left-justified to their column width plus padding,
/// gap cells become pure whitespace, and each line mirrors one layout row.
/// The result replaces the block interior, so it is wrapped in newlines and
/// the layer's original closing indentation.
pub fn render_block(
    layout: &Layout,
    layer: &Layer,
    widths: &[usize],
    options: &AlignOptions,
) -> Result<String, AlignmentError> {
    let expected = layout.key_count();
    if layer.bindings.len() != expected {
        return Err(AlignmentError::BindingCountMismatch {
            layer: layer.name.clone(),
            layout: layout.name.clone(),
            expected,
            found: layer.bindings.len(),
        });
    }

    let indent = match &layer.indent {
        Some(indent) => indent.clone(),
        None => " ".repeat(options.indent_size),
    };

    let mut next = 0;
    let mut lines = Vec::with_capacity(layout.rows.len());
    for row in &layout.rows {
        let mut line = indent.clone();
        for (col, cell) in row.iter().enumerate() {
            let cell_width = widths[col] + options.padding;
            match cell {
                Cell::Key => {
                    line.push_str(&format!(
                        "{:<width$}",
                        layer.bindings[next].render(),
                        width = cell_width
                    ));
                    next += 1;
                }
                Cell::Gap => line.push_str(&" ".repeat(cell_width)),
            }
        }
        lines.push(line.trim_end().to_string());
    }

    if next < layer.bindings.len() {
        return Err(AlignmentError::RowsExhausted {
            layer: layer.name.clone(),
            remaining: layer.bindings.len() - next,
        });
    }

    Ok(format!("\n{}\n{}", lines.join("\n"), layer.closing_indent))
}

/// Apply sorted, non-overlapping span replacements over the original
/// buffer in a single forward pass. Bytes outside the spans are copied
/// through verbatim.
pub fn splice(source: &str, replacements: &[(Span, String)]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for (span, text) in replacements {
        out.push_str(&source[cursor..span.start]);
        out.push_str(text);
        cursor = span.end;
    }
    out.push_str(&source[cursor..]);
    out
}
