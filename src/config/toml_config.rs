use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::layouts::is_file_path;
use crate::core::align::{DEFAULT_INDENT_SIZE, DEFAULT_PADDING};
use crate::utils::validation;
use crate::utils::error::Result;

pub const CONFIG_FILE_NAME: &str = "keymap_align.toml";

/// Alignment settings resolved from `keymap_align.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignConfig {
    /// Bundled layout name or layout file path; relative paths are already
    /// resolved against the config file's directory.
    pub layout: Option<String>,
    pub indent_size: usize,
    pub padding: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            layout: None,
            indent_size: DEFAULT_INDENT_SIZE,
            padding: DEFAULT_PADDING,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    layout: Option<String>,
    indent_size: Option<usize>,
    padding: Option<usize>,
}

/// Search up the directory tree for `keymap_align.toml`, starting at
/// `start_dir`. Stops at the repository root (a directory containing
/// `.git`) or the filesystem root; the nearest file wins.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if current.join(".git").exists() {
            return None;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

pub fn load_config(config_path: &Path) -> Result<toml::Table> {
    let content = std::fs::read_to_string(config_path)?;
    Ok(toml::from_str(&content)?)
}

/// Layout value from a parsed config table. A path-like value (containing
/// a separator or ending in `.json`) is resolved relative to the config
/// file's directory; a bare name passes through for bundled lookup.
pub fn resolve_config_layout(layout: &str, config_path: Option<&Path>) -> String {
    if !is_file_path(layout) {
        return layout.to_string();
    }

    let layout_path = Path::new(layout);
    if layout_path.is_absolute() {
        return layout.to_string();
    }

    match config_path.and_then(Path::parent) {
        Some(dir) => dir.join(layout_path).to_string_lossy().into_owned(),
        None => layout.to_string(),
    }
}

/// Merge a parsed config table over the built-in defaults. Unknown keys
/// are ignored.
pub fn get_align_config(table: toml::Table, config_path: Option<&Path>) -> Result<AlignConfig> {
    let raw: RawConfig = table.try_into()?;

    let config = AlignConfig {
        layout: raw
            .layout
            .map(|value| resolve_config_layout(&value, config_path)),
        indent_size: raw.indent_size.unwrap_or(DEFAULT_INDENT_SIZE),
        padding: raw.padding.unwrap_or(DEFAULT_PADDING),
    };
    validation::validate_positive_number("padding", config.padding, 1)?;
    Ok(config)
}

/// Discover, load, and merge the config file nearest to `start_dir`.
/// Returns the defaults when no config file exists.
pub fn discover_align_config(start_dir: &Path) -> Result<AlignConfig> {
    match find_config_file(start_dir) {
        Some(config_path) => {
            tracing::debug!(path = %config_path.display(), "loaded config file");
            let table = load_config(&config_path)?;
            get_align_config(table, Some(config_path.as_path()))
        }
        None => Ok(AlignConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_config() {
        let config = get_align_config(toml::Table::new(), None).unwrap();
        assert_eq!(config, AlignConfig::default());
        assert_eq!(config.indent_size, DEFAULT_INDENT_SIZE);
        assert_eq!(config.padding, DEFAULT_PADDING);
    }

    #[test]
    fn test_parses_all_options() {
        let table: toml::Table =
            toml::from_str("layout = \"glove80\"\nindent_size = 2\npadding = 3\n").unwrap();
        let config = get_align_config(table, None).unwrap();
        assert_eq!(config.layout.as_deref(), Some("glove80"));
        assert_eq!(config.indent_size, 2);
        assert_eq!(config.padding, 3);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let table: toml::Table = toml::from_str("layout = \"corne42\"\nfuture = true\n").unwrap();
        let config = get_align_config(table, None).unwrap();
        assert_eq!(config.layout.as_deref(), Some("corne42"));
    }

    #[test]
    fn test_zero_padding_rejected() {
        let table: toml::Table = toml::from_str("padding = 0\n").unwrap();
        assert!(get_align_config(table, None).is_err());
    }

    #[test]
    fn test_resolve_config_layout_bundled_name_passes_through() {
        let config_path = PathBuf::from("/project/keymap_align.toml");
        assert_eq!(
            resolve_config_layout("corne42", Some(config_path.as_path())),
            "corne42"
        );
    }

    #[test]
    fn test_resolve_config_layout_relative_path() {
        let config_path = PathBuf::from("/project/keymap_align.toml");
        assert_eq!(
            resolve_config_layout("./layouts/custom.json", Some(config_path.as_path())),
            "/project/./layouts/custom.json"
        );
    }

    #[test]
    fn test_resolve_config_layout_absolute_path_preserved() {
        let config_path = PathBuf::from("/project/keymap_align.toml");
        assert_eq!(
            resolve_config_layout("/abs/layout.json", Some(config_path.as_path())),
            "/abs/layout.json"
        );
    }
}
