use std::fs;
use std::path::PathBuf;

use crate::domain::model::Layout;
use crate::utils::error::{KeymapError, LayoutError, Result};

/// Layout definitions shipped with the binary, sorted by name.
const BUNDLED_LAYOUTS: &[(&str, &str)] = &[
    ("corne42", include_str!("../layouts/corne42.json")),
    ("glove80", include_str!("../layouts/glove80.json")),
    ("piantor", include_str!("../layouts/piantor.json")),
];

pub fn bundled_layout_names() -> Vec<&'static str> {
    BUNDLED_LAYOUTS.iter().map(|(name, _)| *name).collect()
}

/// JSON text of a bundled layout, or an error listing the available names.
pub fn bundled_layout(name: &str) -> std::result::Result<&'static str, LayoutError> {
    BUNDLED_LAYOUTS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, json)| *json)
        .ok_or_else(|| LayoutError::UnknownBundledLayout {
            name: name.to_string(),
            available: bundled_layout_names().join(", "),
        })
}

/// Values with a path separator or a `.json` suffix are file paths;
/// anything else is a bundled layout name.
pub(crate) fn is_file_path(value: &str) -> bool {
    value.contains('/') || value.contains('\\') || value.ends_with(".json")
}

/// Where a layout definition comes from after precedence resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    Bundled {
        name: String,
        json: &'static str,
    },
    File(PathBuf),
}

impl LayoutSource {
    pub fn load(&self) -> Result<Layout> {
        match self {
            LayoutSource::Bundled { json, .. } => Ok(Layout::from_json(json)?),
            LayoutSource::File(path) => {
                let content = fs::read_to_string(path)?;
                Ok(Layout::from_json(&content)?)
            }
        }
    }
}

/// Resolve the layout to use. Precedence: `--layout-file` > `--layout` >
/// config file > error.
pub fn resolve_layout(
    layout_arg: Option<&str>,
    layout_file_arg: Option<&str>,
    config_layout: Option<&str>,
) -> Result<LayoutSource> {
    if let Some(path) = layout_file_arg {
        return Ok(LayoutSource::File(PathBuf::from(path)));
    }

    let value = layout_arg
        .or(config_layout)
        .ok_or_else(|| KeymapError::ConfigError {
            message: "No layout specified. Use --layout <name> for bundled layouts, \
                      --layout-file <path> for custom layouts, or create keymap_align.toml"
                .to_string(),
        })?;

    if is_file_path(value) {
        return Ok(LayoutSource::File(PathBuf::from(value)));
    }

    Ok(LayoutSource::Bundled {
        name: value.to_string(),
        json: bundled_layout(value)?,
    })
}
