use anyhow::Context;
use clap::Parser;
use std::path::Path;

use keymap_align::config::{layouts, toml_config};
use keymap_align::core::debug;
use keymap_align::utils::{logger, validation::Validate};
use keymap_align::{AlignEngine, AlignOptions, CliConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting keymap-align");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("Alignment failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let keymap_path = Path::new(&config.keymap);
    let start_dir = keymap_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let align_config = toml_config::discover_align_config(start_dir)?;

    let layout_source = layouts::resolve_layout(
        config.layout.as_deref(),
        config.layout_file.as_deref(),
        align_config.layout.as_deref(),
    )?;
    let layout = layout_source.load()?;
    tracing::info!("Using layout '{}' ({} keys)", layout.name, layout.key_count());

    let source = std::fs::read_to_string(keymap_path)
        .with_context(|| format!("failed to read keymap file {}", config.keymap))?;

    let options = AlignOptions {
        padding: align_config.padding,
        indent_size: align_config.indent_size,
    };
    let engine = AlignEngine::new(layout, options);

    if config.debug {
        let report = engine.inspect(&source)?;
        print!("{}", debug::render_report(&report));
    }

    let aligned = engine.run(&source)?;

    let output_path = config.output.as_deref().unwrap_or(&config.keymap);
    std::fs::write(output_path, &aligned)
        .with_context(|| format!("failed to write output file {}", output_path))?;

    tracing::info!("Aligned keymap written to {}", output_path);
    println!("✅ Aligned keymap written to {}", output_path);
    Ok(())
}
