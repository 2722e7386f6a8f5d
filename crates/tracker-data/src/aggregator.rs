//! Row classification and per-person aggregation.
//!
//! [`GoalAggregator`] owns the person mapping and folds one submission row
//! at a time into it. Rows are consumed strictly in input order: the
//! last-write-wins semantics of results and progress markers depend on it.

use std::collections::BTreeMap;

use tracing::debug;

use tracker_core::calendar::{checkin_slot, classify_timestamp, target_month};
use tracker_core::classify::{classify_header, ColumnKind, Response};
use tracker_core::context::HeaderContext;
use tracker_core::models::PersonRecord;
use tracker_core::names::normalize_name;

use crate::reader::SurveyRow;

// ── GoalAggregator ────────────────────────────────────────────────────────────

/// Accumulates survey rows into per-person records under a fixed header
/// context. Single writer, sequential, no reordering.
pub struct GoalAggregator {
    context: HeaderContext,
    people: BTreeMap<String, PersonRecord>,
    rows_ingested: u64,
    rows_skipped: u64,
}

impl GoalAggregator {
    /// Create an empty aggregator for the given resolved context.
    pub fn new(context: HeaderContext) -> Self {
        Self {
            context,
            people: BTreeMap::new(),
            rows_ingested: 0,
            rows_skipped: 0,
        }
    }

    /// The context this aggregator classifies against.
    pub fn context(&self) -> &HeaderContext {
        &self.context
    }

    /// The person mapping, keyed by normalised name, sorted by name.
    pub fn people(&self) -> &BTreeMap<String, PersonRecord> {
        &self.people
    }

    /// Rows folded into the mapping so far.
    pub fn rows_ingested(&self) -> u64 {
        self.rows_ingested
    }

    /// Rows discarded for a blank name or unparsable timestamp.
    pub fn rows_skipped(&self) -> u64 {
        self.rows_skipped
    }

    /// Consume the aggregator, yielding the context and the final mapping.
    pub fn finish(self) -> (HeaderContext, BTreeMap<String, PersonRecord>) {
        (self.context, self.people)
    }

    /// Fold one submission row into the mapping.
    ///
    /// A row with a blank normalised name or an unparsable timestamp is
    /// discarded whole; no partial aggregation occurs for it. Cells are
    /// classified in column order, and repeated writes to the same result
    /// field or history slot resolve as last-row-wins.
    pub fn ingest(&mut self, row: &SurveyRow) {
        let name = normalize_name(row.get("Name"));
        if name.is_empty() {
            debug!("Skipping row with blank name");
            self.rows_skipped += 1;
            return;
        }

        let time = match classify_timestamp(row.get("Timestamp").unwrap_or("")) {
            Some(t) => t,
            None => {
                debug!("Skipping row for {}: unparsable timestamp", name);
                self.rows_skipped += 1;
                return;
            }
        };

        let record = self.people.entry(name).or_default();

        for (header, value) in row.fields() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match classify_header(header, &self.context) {
                Some(ColumnKind::CurrentMonthGoal) => record.push_current_goal(value),
                Some(ColumnKind::PreviousMonthGoal) => record.push_previous_goal(value),
                Some(ColumnKind::QuarterGoal) => record.push_quarter_goal(value),
                Some(ColumnKind::Accomplishment) => {
                    record.monthly_result = value.to_string();
                    let marker = Response::parse(value).history_marker();
                    record.set_month_marker(target_month(time.month), marker);
                }
                Some(ColumnKind::QuarterProgress) => {
                    record.quarter_progress = value.to_string();
                    let marker = Response::parse(value).history_marker();
                    record.set_quarter_marker(
                        time.effective_quarter,
                        checkin_slot(time.month),
                        marker,
                    );
                }
                None => {}
            }
        }

        self.rows_ingested += 1;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
