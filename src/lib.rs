pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{AlignConfig, LayoutSource};
pub use crate::core::{AlignEngine, AlignOptions, AlignReport};
pub use domain::model::{Binding, Document, Layer, Layout};
pub use utils::error::{AlignmentError, KeymapError, LayoutError, ParseError, Result};
