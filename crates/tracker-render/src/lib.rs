//! Rendering layer for the goal tracker.
//!
//! Consumes the read-only aggregate (header context + person mapping) and
//! writes the static site: current-month, previous-month and quarter
//! roundup pages plus the leaderboard.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use tracker_core::context::HeaderContext;
use tracker_core::error::Result;
use tracker_core::models::PersonRecord;

pub mod html;
pub mod leaderboard;
pub mod pages;

pub use tracker_core as core;

/// Render every page and write it under `out_dir`, returning the written
/// paths. File names follow the lowercased month/quarter names; the
/// previous-month page is only written when a previous month was resolved.
pub fn write_site(
    ctx: &HeaderContext,
    people: &BTreeMap<String, PersonRecord>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written: Vec<PathBuf> = Vec::new();

    let month_path = out_dir.join(format!("{}.html", ctx.current_month.to_lowercase()));
    std::fs::write(&month_path, pages::month_page(ctx, people))?;
    written.push(month_path);

    if let Some(page) = pages::previous_month_page(ctx, people) {
        // previous_month is present whenever the page is.
        let previous = ctx.previous_month.as_deref().unwrap_or_default();
        let path = out_dir.join(format!("{}.html", previous.to_lowercase()));
        std::fs::write(&path, page)?;
        written.push(path);
    }

    let quarter_path = out_dir.join(format!(
        "{}.html",
        ctx.current_quarter.to_string().to_lowercase()
    ));
    std::fs::write(&quarter_path, pages::quarter_page(ctx, people))?;
    written.push(quarter_path);

    let leaderboard_path = out_dir.join("leaderboard.html");
    std::fs::write(&leaderboard_path, leaderboard::leaderboard_page(ctx, people))?;
    written.push(leaderboard_path);

    debug!("Wrote {} pages to {}", written.len(), out_dir.display());
    Ok(written)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
