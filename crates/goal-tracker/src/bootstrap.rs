use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Output-directory bootstrap ─────────────────────────────────────────────────

/// Ensure the output directory exists, creating missing parents.
pub fn ensure_output_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_output_dir_creates_nested_dirs() {
        let tmp = TempDir::new().expect("tempdir");
        let target = tmp.path().join("site").join("2026");

        ensure_output_dir(&target).expect("ensure_output_dir should succeed");
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_output_dir_idempotent() {
        let tmp = TempDir::new().expect("tempdir");
        ensure_output_dir(tmp.path()).expect("first call");
        ensure_output_dir(tmp.path()).expect("second call");
        assert!(tmp.path().is_dir());
    }
}
