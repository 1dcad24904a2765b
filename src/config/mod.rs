pub mod layouts;
pub mod toml_config;

pub use layouts::{resolve_layout, LayoutSource};
pub use toml_config::AlignConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "keymap-align")]
#[command(about = "Align ZMK keymap bindings using a keyboard layout")]
pub struct CliConfig {
    #[arg(short = 'k', long, help = "Input keymap file")]
    pub keymap: String,

    #[arg(short = 'l', long, help = "Bundled layout name or layout JSON file")]
    pub layout: Option<String>,

    #[arg(long, help = "Explicit layout JSON file (takes precedence over --layout)")]
    pub layout_file: Option<String>,

    #[arg(short = 'o', long, help = "Output keymap file (default: modify in place)")]
    pub output: Option<String>,

    #[arg(long, help = "Print a detailed parse/alignment report")]
    pub debug: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("keymap", &self.keymap)?;
        if let Some(layout) = &self.layout {
            validation::validate_non_empty_string("layout", layout)?;
        }
        if let Some(layout_file) = &self.layout_file {
            validation::validate_path("layout_file", layout_file)?;
        }
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}
