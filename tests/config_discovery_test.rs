use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use keymap_align::config::toml_config::{
    discover_align_config, find_config_file, get_align_config, load_config, AlignConfig,
};

#[test]
fn test_finds_config_in_same_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_file = temp_dir.path().join("keymap_align.toml");
    fs::write(&config_file, "layout = \"corne42\"\n")?;

    assert_eq!(find_config_file(temp_dir.path()), Some(config_file));
    Ok(())
}

#[test]
fn test_finds_config_in_parent_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_file = temp_dir.path().join("keymap_align.toml");
    fs::write(&config_file, "layout = \"corne42\"\n")?;

    let subdir = temp_dir.path().join("config").join("boards");
    fs::create_dir_all(&subdir)?;

    assert_eq!(find_config_file(&subdir), Some(config_file));
    Ok(())
}

#[test]
fn test_prefers_closer_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("keymap_align.toml"),
        "layout = \"corne42\"\n",
    )?;

    let subdir = temp_dir.path().join("sub");
    fs::create_dir(&subdir)?;
    let closer = subdir.join("keymap_align.toml");
    fs::write(&closer, "layout = \"piantor\"\n")?;

    assert_eq!(find_config_file(&subdir), Some(closer));
    Ok(())
}

#[test]
fn test_returns_none_when_no_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = temp_dir.path().join("repo");
    fs::create_dir_all(repo.join(".git"))?;
    assert_eq!(find_config_file(&repo), None);
    Ok(())
}

#[test]
fn test_search_stops_at_git_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // Config above the repository root must not be picked up.
    fs::write(
        temp_dir.path().join("keymap_align.toml"),
        "layout = \"corne42\"\n",
    )?;

    let repo = temp_dir.path().join("repo");
    let subdir = repo.join("config");
    fs::create_dir_all(repo.join(".git"))?;
    fs::create_dir_all(&subdir)?;

    assert_eq!(find_config_file(&subdir), None);
    Ok(())
}

#[test]
fn test_config_inside_git_root_is_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = temp_dir.path().join("repo");
    let subdir = repo.join("config");
    fs::create_dir_all(repo.join(".git"))?;
    fs::create_dir_all(&subdir)?;
    let config_file = repo.join("keymap_align.toml");
    fs::write(&config_file, "layout = \"glove80\"\n")?;

    assert_eq!(find_config_file(&subdir), Some(config_file));
    Ok(())
}

#[test]
fn test_load_config_rejects_invalid_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_file = temp_dir.path().join("keymap_align.toml");
    fs::write(&config_file, "invalid = [missing bracket\n")?;

    assert!(load_config(&config_file).is_err());
    Ok(())
}

#[test]
fn test_load_config_missing_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    assert!(load_config(&temp_dir.path().join("nonexistent.toml")).is_err());
    Ok(())
}

#[test]
fn test_discover_returns_defaults_without_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = temp_dir.path().join("repo");
    fs::create_dir_all(repo.join(".git"))?;

    let config = discover_align_config(&repo)?;
    assert_eq!(config, AlignConfig::default());
    Ok(())
}

#[test]
fn test_discover_merges_config_over_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("keymap_align.toml"),
        "layout = \"glove80\"\nindent_size = 2\n",
    )?;

    let config = discover_align_config(temp_dir.path())?;
    assert_eq!(config.layout.as_deref(), Some("glove80"));
    assert_eq!(config.indent_size, 2);
    assert_eq!(config.padding, AlignConfig::default().padding);
    Ok(())
}

#[test]
fn test_relative_layout_path_resolved_against_config_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_file = temp_dir.path().join("keymap_align.toml");
    fs::write(&config_file, "layout = \"./layouts/custom.json\"\n")?;

    let table = load_config(&config_file)?;
    let config = get_align_config(table, Some(config_file.as_path()))?;
    let layout = config.layout.unwrap();
    assert!(layout.starts_with(temp_dir.path().to_str().unwrap()));
    assert!(layout.ends_with("custom.json"));
    Ok(())
}
