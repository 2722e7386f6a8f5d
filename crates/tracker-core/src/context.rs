//! Header-context resolution.
//!
//! The survey export does not say which month it covers; the column headers
//! do. Scanning the header row once yields the current month, the previous
//! month (when the export still carries last month's columns) and the
//! current quarter. Every later classification decision reads this context.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::calendar::{find_month, month_name, Quarter};
use crate::error::{Result, TrackerError};

/// The month/quarter context resolved once from the column headers,
/// immutable for the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderContext {
    /// Name of the latest calendar month appearing in any header.
    pub current_month: String,
    /// 1-based index of `current_month`.
    pub current_month_index: u32,
    /// Name of the second-latest month, absent when the headers only
    /// mention one month.
    pub previous_month: Option<String>,
    /// Quarter containing `current_month`.
    pub current_quarter: Quarter,
}

impl HeaderContext {
    /// Resolve the context from the ordered column headers.
    ///
    /// Each header contributes at most one month (the first month name, in
    /// calendar order, that appears in it); duplicates collapse. The latest
    /// month found becomes current, the second-latest previous.
    ///
    /// Fails with [`TrackerError::NoMonthContext`] when no header mentions
    /// any month: without a context nothing can be classified, so the run
    /// must abort rather than guess.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        // BTreeSet keeps the found months distinct and calendar-sorted.
        let months: BTreeSet<u32> = headers
            .iter()
            .filter_map(|h| find_month(h.as_ref()))
            .collect();

        let mut sorted = months.into_iter();
        let (current_index, previous_index) = match sorted.next_back() {
            Some(latest) => (latest, sorted.next_back()),
            None => return Err(TrackerError::NoMonthContext),
        };

        let current_month = month_name(current_index)
            .unwrap_or_default()
            .to_string();
        let previous_month =
            previous_index.and_then(month_name).map(str::to_string);
        let current_quarter = Quarter::for_month(current_index);

        debug!(
            "Resolved header context: current={}, previous={:?}, quarter={}",
            current_month, previous_month, current_quarter
        );

        Ok(HeaderContext {
            current_month,
            current_month_index: current_index,
            previous_month,
            current_quarter,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
