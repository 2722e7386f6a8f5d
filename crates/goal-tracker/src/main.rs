mod bootstrap;

use anyhow::Result;
use clap::Parser;
use tracker_core::settings::Settings;
use tracker_data::analysis::aggregate_file;
use tracker_render::write_site;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("goal-tracker v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, output dir: {}",
        settings.input.display(),
        settings.output_dir.display()
    );

    bootstrap::ensure_output_dir(&settings.output_dir)?;

    let result = aggregate_file(&settings.input)?;

    let written = write_site(&result.context, &result.people, &settings.output_dir)?;
    for path in &written {
        tracing::info!("Wrote {}", path.display());
    }

    if let Some(json_path) = &settings.json {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(json_path, json)?;
        tracing::info!("Wrote aggregate JSON to {}", json_path.display());
    }

    Ok(())
}
