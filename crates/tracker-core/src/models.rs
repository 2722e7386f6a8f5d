use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calendar::Quarter;

/// Slots in the month history: indices 1–12 are the calendar months, index 0
/// is unused padding so month numbers index directly.
pub const MONTH_HISTORY_SLOTS: usize = 13;

/// Progress slots per quarter: first check-in, second check-in, final result.
pub const QUARTER_SLOTS: usize = 3;

/// The accumulated record for one person, created on the first row that
/// mentions them and mutated by every later row. Records are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Goals for the current month, insertion-ordered, deduplicated.
    pub current_month_goals: Vec<String>,
    /// Goals for the previous month, insertion-ordered, deduplicated.
    pub previous_month_goals: Vec<String>,
    /// Most recently seen accomplishment response (last write wins).
    pub monthly_result: String,
    /// Goals for the current quarter, insertion-ordered, deduplicated.
    pub quarter_goals: Vec<String>,
    /// Most recently seen check-in / final-results response (last write wins).
    pub quarter_progress: String,
    /// Per-month outcome markers; index 0 unused.
    pub month_history: Vec<String>,
    /// Per-quarter progress markers, three slots each.
    pub quarter_history: BTreeMap<Quarter, [String; QUARTER_SLOTS]>,
}

impl Default for PersonRecord {
    fn default() -> Self {
        let empty_slots = || [String::new(), String::new(), String::new()];
        PersonRecord {
            current_month_goals: Vec::new(),
            previous_month_goals: Vec::new(),
            monthly_result: String::new(),
            quarter_goals: Vec::new(),
            quarter_progress: String::new(),
            month_history: vec![String::new(); MONTH_HISTORY_SLOTS],
            quarter_history: Quarter::ALL
                .into_iter()
                .map(|q| (q, empty_slots()))
                .collect(),
        }
    }
}

impl PersonRecord {
    /// Append a current-month goal unless an equal one is already present.
    pub fn push_current_goal(&mut self, goal: &str) {
        Self::push_unique(&mut self.current_month_goals, goal);
    }

    /// Append a previous-month goal unless an equal one is already present.
    pub fn push_previous_goal(&mut self, goal: &str) {
        Self::push_unique(&mut self.previous_month_goals, goal);
    }

    /// Append a quarter goal unless an equal one is already present.
    pub fn push_quarter_goal(&mut self, goal: &str) {
        Self::push_unique(&mut self.quarter_goals, goal);
    }

    /// Write an outcome marker for the 1-based `month`. Out-of-range months
    /// are ignored. Repeated writes overwrite (last row wins).
    pub fn set_month_marker(&mut self, month: usize, marker: &str) {
        if let Some(slot) = self.month_history.get_mut(month) {
            *slot = marker.to_string();
        }
    }

    /// Write a progress marker into `slot` (0–2) of `quarter`. Out-of-range
    /// slots are ignored. Repeated writes overwrite (last row wins).
    pub fn set_quarter_marker(&mut self, quarter: Quarter, slot: usize, marker: &str) {
        if slot < QUARTER_SLOTS {
            let slots = self.quarter_history.entry(quarter).or_default();
            slots[slot] = marker.to_string();
        }
    }

    /// Whether any goal list or result carries content worth rendering.
    pub fn is_empty(&self) -> bool {
        self.current_month_goals.is_empty()
            && self.previous_month_goals.is_empty()
            && self.quarter_goals.is_empty()
            && self.monthly_result.is_empty()
            && self.quarter_progress.is_empty()
    }

    fn push_unique(goals: &mut Vec<String>, goal: &str) {
        if !goals.iter().any(|g| g == goal) {
            goals.push(goal.to_string());
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_shape() {
        let record = PersonRecord::default();
        assert!(record.current_month_goals.is_empty());
        assert!(record.previous_month_goals.is_empty());
        assert!(record.quarter_goals.is_empty());
        assert_eq!(record.monthly_result, "");
        assert_eq!(record.quarter_progress, "");
        assert_eq!(record.month_history.len(), MONTH_HISTORY_SLOTS);
        assert!(record.month_history.iter().all(String::is_empty));
        assert_eq!(record.quarter_history.len(), 4);
        for quarter in Quarter::ALL {
            let slots = &record.quarter_history[&quarter];
            assert!(slots.iter().all(|s| s.is_empty()));
        }
        assert!(record.is_empty());
    }

    #[test]
    fn test_push_goal_deduplicates() {
        let mut record = PersonRecord::default();
        record.push_current_goal("Write report");
        record.push_current_goal("Write report");
        record.push_current_goal("Ship feature");
        assert_eq!(
            record.current_month_goals,
            vec!["Write report", "Ship feature"]
        );
    }

    #[test]
    fn test_goal_lists_are_independent() {
        let mut record = PersonRecord::default();
        record.push_current_goal("Write report");
        record.push_previous_goal("Write report");
        record.push_quarter_goal("Write report");
        assert_eq!(record.current_month_goals.len(), 1);
        assert_eq!(record.previous_month_goals.len(), 1);
        assert_eq!(record.quarter_goals.len(), 1);
    }

    #[test]
    fn test_set_month_marker() {
        let mut record = PersonRecord::default();
        record.set_month_marker(2, "✅");
        assert_eq!(record.month_history[2], "✅");
        // Overwrite: last write wins.
        record.set_month_marker(2, "❌");
        assert_eq!(record.month_history[2], "❌");
    }

    #[test]
    fn test_set_month_marker_out_of_range_ignored() {
        let mut record = PersonRecord::default();
        record.set_month_marker(13, "✅");
        assert!(record.month_history.iter().all(String::is_empty));
    }

    #[test]
    fn test_set_quarter_marker() {
        let mut record = PersonRecord::default();
        record.set_quarter_marker(Quarter::Q2, 1, "✅");
        assert_eq!(record.quarter_history[&Quarter::Q2][1], "✅");
        assert_eq!(record.quarter_history[&Quarter::Q2][0], "");
        assert_eq!(record.quarter_history[&Quarter::Q2][2], "");
    }

    #[test]
    fn test_set_quarter_marker_out_of_range_ignored() {
        let mut record = PersonRecord::default();
        record.set_quarter_marker(Quarter::Q1, 3, "✅");
        assert!(record.quarter_history[&Quarter::Q1]
            .iter()
            .all(|s| s.is_empty()));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut record = PersonRecord::default();
        record.push_current_goal("Write report");
        record.set_quarter_marker(Quarter::Q1, 0, "✅");
        let json = serde_json::to_string(&record).unwrap();
        let back: PersonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
