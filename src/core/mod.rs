pub mod align;
pub mod debug;
pub mod engine;
pub mod parser;

pub use align::{AlignOptions, DEFAULT_INDENT_SIZE, DEFAULT_PADDING};
pub use engine::{AlignEngine, AlignReport};
