use serde::Deserialize;

use crate::utils::error::LayoutError;

/// One parameter of a binding: either a literal token or a nested binding
/// (e.g. a hold-tap whose tap side is itself a behavior reference).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Leaf(String),
    Binding(Binding),
}

impl Param {
    pub fn render(&self) -> String {
        match self {
            Param::Leaf(text) => text.clone(),
            Param::Binding(binding) => binding.render(),
        }
    }
}

/// A behavior invocation and its parameters, treated as a single aligned unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub behavior: String,
    pub params: Vec<Param>,
}

impl Binding {
    pub fn new(behavior: impl Into<String>) -> Self {
        Self {
            behavior: behavior.into(),
            params: Vec::new(),
        }
    }

    /// Tokens joined by single spaces, nested bindings rendered inline.
    pub fn render(&self) -> String {
        let mut out = self.behavior.clone();
        for param in &self.params {
            out.push(' ');
            out.push_str(&param.render());
        }
        out
    }

    pub fn width(&self) -> usize {
        self.render().chars().count()
    }
}

/// Byte range of a bindings-block interior in the source document,
/// exclusive of the `<` and `>` delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// One named layer: its bindings in row-major physical order plus the
/// positional information needed to splice the realigned block back in.
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub display_name: Option<String>,
    pub bindings: Vec<Binding>,
    pub span: Span,
    /// Leading whitespace of the first binding line, `None` for inline blocks.
    pub indent: Option<String>,
    /// Whitespace before the closing `>` when it sits on its own line.
    pub closing_indent: String,
}

/// One position of the physical key matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Key,
    Gap,
}

/// Physical key arrangement: occupied/empty cells per row. Rows may be
/// ragged (thumb clusters); the matrix is immutable once loaded.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Deserialize)]
struct RawLayout {
    name: String,
    rows: Vec<Vec<String>>,
}

impl Layout {
    /// Parse a layout definition from JSON. Each cell must be the marker
    /// `"x"` (key position) or `"-"` (gap).
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let raw: RawLayout = serde_json::from_str(json)?;
        if raw.rows.is_empty() || raw.rows.iter().all(|row| row.is_empty()) {
            return Err(LayoutError::EmptyMatrix { name: raw.name });
        }

        let mut rows = Vec::with_capacity(raw.rows.len());
        for (row_index, raw_row) in raw.rows.iter().enumerate() {
            let mut row = Vec::with_capacity(raw_row.len());
            for marker in raw_row {
                match marker.as_str() {
                    "x" => row.push(Cell::Key),
                    "-" => row.push(Cell::Gap),
                    other => {
                        return Err(LayoutError::InvalidMarker {
                            row: row_index,
                            marker: other.to_string(),
                        })
                    }
                }
            }
            rows.push(row);
        }

        Ok(Layout {
            name: raw.name,
            rows,
        })
    }

    /// Number of occupied cells; every layer must supply exactly this many bindings.
    pub fn key_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| **cell == Cell::Key).count())
            .sum()
    }

    /// Widest row of the matrix, i.e. the number of alignment columns.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// The original source text plus its parsed layers. Layers reference the
/// source only by byte span; the document is consumed by one alignment run.
#[derive(Debug)]
pub struct Document {
    pub source: String,
    pub layers: Vec<Layer>,
}
