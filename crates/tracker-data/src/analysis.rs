//! Top-level aggregation pipeline for the goal tracker.
//!
//! Orchestrates loading the export, resolving the header context and
//! folding every row, returning an [`AggregateResult`] ready for the
//! rendering layer.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use tracker_core::context::HeaderContext;
use tracker_core::error::Result;
use tracker_core::models::PersonRecord;

use crate::aggregator::GoalAggregator;
use crate::reader::load_survey;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateMetadata {
    /// ISO-8601 timestamp when this aggregate was generated.
    pub generated_at: String,
    /// Data rows read from the export.
    pub rows_read: usize,
    /// Rows discarded for a blank name or unparsable timestamp.
    pub rows_skipped: u64,
    /// Distinct people in the final mapping.
    pub people_count: usize,
    /// Wall-clock seconds spent reading the CSV.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent classifying and folding rows.
    pub aggregate_time_seconds: f64,
}

/// The complete output of [`aggregate_file`]: the resolved context, the
/// read-only person mapping, and run metadata.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Month/quarter context resolved from the headers.
    pub context: HeaderContext,
    /// Per-person records, keyed and sorted by normalised name.
    pub people: BTreeMap<String, PersonRecord>,
    /// Metadata about this run.
    pub metadata: AggregateMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full aggregation pipeline over the export at `path`.
///
/// 1. Load the header row and data rows.
/// 2. Resolve the month/quarter context from the headers (fatal on failure).
/// 3. Fold every row, in file order, into the person mapping.
/// 4. Return the mapping with metadata.
pub fn aggregate_file(path: &Path) -> Result<AggregateResult> {
    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let load_start = std::time::Instant::now();
    let (headers, rows) = load_survey(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    // ── Step 2: Resolve context ───────────────────────────────────────────────
    let context = HeaderContext::resolve(&headers)?;

    // ── Step 3: Fold rows ─────────────────────────────────────────────────────
    let aggregate_start = std::time::Instant::now();
    let mut aggregator = GoalAggregator::new(context);
    for row in &rows {
        aggregator.ingest(row);
    }
    let aggregate_time = aggregate_start.elapsed().as_secs_f64();

    // ── Step 4: Build result ──────────────────────────────────────────────────
    let rows_skipped = aggregator.rows_skipped();
    let (context, people) = aggregator.finish();

    info!(
        "Aggregated {} people from {} rows ({} skipped) for {} / {}",
        people.len(),
        rows.len(),
        rows_skipped,
        context.current_month,
        context.current_quarter
    );

    let metadata = AggregateMetadata {
        generated_at: Utc::now().to_rfc3339(),
        rows_read: rows.len(),
        rows_skipped,
        people_count: people.len(),
        load_time_seconds: load_time,
        aggregate_time_seconds: aggregate_time,
    };

    Ok(AggregateResult {
        context,
        people,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
