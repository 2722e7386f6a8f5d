use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Goal-survey aggregation and report generation
#[derive(Parser, Debug, Clone)]
#[command(
    name = "goal-tracker",
    about = "Aggregate a goal-survey CSV export into per-person roundup pages",
    version
)]
pub struct Settings {
    /// Path to the survey export CSV
    pub input: PathBuf,

    /// Directory where the generated HTML pages are written
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Also write the aggregate as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
