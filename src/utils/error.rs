use thiserror::Error;

/// Errors raised while loading a keyboard layout definition.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid cell marker '{marker}' in row {row} (expected \"x\" or \"-\")")]
    InvalidMarker { row: usize, marker: String },

    #[error("layout '{name}' has an empty matrix")]
    EmptyMatrix { name: String },

    #[error("unknown bundled layout '{name}'. Available: {available}")]
    UnknownBundledLayout { name: String, available: String },

    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while parsing layer blocks out of a keymap document.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unterminated bindings block in layer '{layer}' (offset {offset})")]
    UnterminatedBlock { layer: String, offset: usize },

    #[error("unbalanced parentheses in layer '{layer}' (offset {offset})")]
    UnbalancedGroup { layer: String, offset: usize },

    #[error("unexpected token '{token}' in layer '{layer}': bindings must start with '&'")]
    UnexpectedToken { layer: String, token: String },

    #[error("layer '{layer}' contains no bindings")]
    EmptyLayer { layer: String },

    #[error("no bindings blocks found in keymap")]
    NoLayers,
}

/// Errors raised while mapping parsed layers onto the layout matrix.
#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("layer '{layer}': expected {expected} bindings for layout '{layout}', found {found}")]
    BindingCountMismatch {
        layer: String,
        layout: String,
        expected: usize,
        found: usize,
    },

    #[error("layer '{layer}': layout rows exhausted with {remaining} bindings left over")]
    RowsExhausted { layer: String, remaining: usize },
}

#[derive(Error, Debug)]
pub enum KeymapError {
    #[error("Layout error: {0}")]
    LayoutError(#[from] LayoutError),

    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Alignment error: {0}")]
    AlignmentError(#[from] AlignmentError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, KeymapError>;
