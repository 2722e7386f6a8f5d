//! Calendar arithmetic for the goal tracker.
//!
//! Months are 1-based (January = 1) throughout, matching the survey's
//! month/day/year timestamps. Quarters follow the plain calendar mapping
//! with one twist: submissions made in the first month of Q2–Q4 report on
//! the quarter that just ended, so they are credited one quarter back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Month names ───────────────────────────────────────────────────────────────

/// English calendar month names, index 0 = January.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The name of the 1-based month `index`, or `None` when out of range.
pub fn month_name(index: u32) -> Option<&'static str> {
    if (1..=12).contains(&index) {
        Some(MONTH_NAMES[(index - 1) as usize])
    } else {
        None
    }
}

/// Find the first month name (in calendar order) that appears as a substring
/// of `text`, returning its 1-based index.
///
/// Matching is case-sensitive: survey headers spell months capitalised
/// ("March Goal"), and a case-insensitive match would false-positive on
/// words like "may".
pub fn find_month(text: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|name| text.contains(name))
        .map(|i| (i + 1) as u32)
}

// ── Quarter ───────────────────────────────────────────────────────────────────

/// A fiscal quarter of the single annual cycle being tracked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// All quarters in calendar order.
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// The quarter number, 1–4.
    pub fn number(self) -> u32 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    /// The quarter containing the 1-based `month`.
    ///
    /// Months 1–3 → Q1, 4–6 → Q2, 7–9 → Q3, 10–12 → Q4.
    pub fn for_month(month: u32) -> Quarter {
        match month.saturating_sub(1) / 3 {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// The preceding quarter. Q1 has no predecessor within the annual cycle
    /// and returns itself.
    pub fn previous(self) -> Quarter {
        match self {
            Quarter::Q1 => Quarter::Q1,
            Quarter::Q2 => Quarter::Q1,
            Quarter::Q3 => Quarter::Q2,
            Quarter::Q4 => Quarter::Q3,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

// ── Effective quarter (reporting lag) ─────────────────────────────────────────

/// The quarter a submission made in `month` is credited to.
///
/// People report "how did the quarter go" during the first days of the next
/// quarter, so a submission in the first month of Q2–Q4 rolls back one
/// quarter. January is exempt: there is no earlier quarter in the cycle, so
/// a January submission stays in Q1.
pub fn effective_quarter(month: u32) -> Quarter {
    let raw = Quarter::for_month(month);
    if month != 1 && (month - 1) % 3 == 0 {
        raw.previous()
    } else {
        raw
    }
}

// ── Slot mappings ─────────────────────────────────────────────────────────────

/// The check-in slot (0 = first check-in, 1 = second, 2 = final) that a
/// submission made in `month` writes within its effective quarter.
///
/// The second month of a quarter carries the first check-in, the third month
/// the second check-in, and the month after quarter end the final result.
pub fn checkin_slot(month: u32) -> usize {
    match month % 3 {
        2 => 0,
        0 => 1,
        _ => 2,
    }
}

/// The month an accomplishment response actually describes.
///
/// The survey asks about the month before the submission month; January maps
/// to itself since the cycle has no earlier month.
pub fn target_month(month: u32) -> usize {
    if month == 1 {
        1
    } else {
        (month - 1) as usize
    }
}

// ── Timestamp classification ──────────────────────────────────────────────────

/// A submission timestamp resolved into its month and effective quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTime {
    /// The parsed submission date.
    pub date: NaiveDate,
    /// 1-based submission month.
    pub month: u32,
    /// The quarter the submission is credited to after the reporting lag.
    pub effective_quarter: Quarter,
}

/// Parse a month/day/year timestamp and resolve its effective quarter.
///
/// Returns `None` for anything that does not parse; callers discard the
/// whole row in that case.
pub fn classify_timestamp(raw: &str) -> Option<SubmissionTime> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%m/%d/%Y").ok()?;
    let month = date.month();
    Some(SubmissionTime {
        date,
        month,
        effective_quarter: effective_quarter(month),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── month_name / find_month ───────────────────────────────────────────────

    #[test]
    fn test_month_name_in_range() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_find_month_simple() {
        assert_eq!(find_month("March Goal"), Some(3));
        assert_eq!(find_month("What is your December Goal?"), Some(12));
    }

    #[test]
    fn test_find_month_first_in_calendar_order_wins() {
        // Both months present: the earlier calendar month is reported.
        assert_eq!(find_month("June or July Goal"), Some(6));
    }

    #[test]
    fn test_find_month_case_sensitive() {
        assert_eq!(find_month("you may answer later"), None);
        assert_eq!(find_month("May Goal"), Some(5));
    }

    #[test]
    fn test_find_month_absent() {
        assert_eq!(find_month("Timestamp"), None);
        assert_eq!(find_month(""), None);
    }

    // ── Quarter::for_month ────────────────────────────────────────────────────

    #[test]
    fn test_quarter_for_month_all_twelve() {
        let expected = [
            (1, Quarter::Q1),
            (2, Quarter::Q1),
            (3, Quarter::Q1),
            (4, Quarter::Q2),
            (5, Quarter::Q2),
            (6, Quarter::Q2),
            (7, Quarter::Q3),
            (8, Quarter::Q3),
            (9, Quarter::Q3),
            (10, Quarter::Q4),
            (11, Quarter::Q4),
            (12, Quarter::Q4),
        ];
        for (month, quarter) in expected {
            assert_eq!(Quarter::for_month(month), quarter, "month {}", month);
        }
    }

    #[test]
    fn test_quarter_display() {
        assert_eq!(Quarter::Q1.to_string(), "Q1");
        assert_eq!(Quarter::Q4.to_string(), "Q4");
    }

    #[test]
    fn test_quarter_previous() {
        assert_eq!(Quarter::Q4.previous(), Quarter::Q3);
        assert_eq!(Quarter::Q2.previous(), Quarter::Q1);
        assert_eq!(Quarter::Q1.previous(), Quarter::Q1);
    }

    // ── effective_quarter ─────────────────────────────────────────────────────

    #[test]
    fn test_effective_quarter_first_of_quarter_rolls_back() {
        assert_eq!(effective_quarter(4), Quarter::Q1);
        assert_eq!(effective_quarter(7), Quarter::Q2);
        assert_eq!(effective_quarter(10), Quarter::Q3);
    }

    #[test]
    fn test_effective_quarter_january_is_exempt() {
        assert_eq!(effective_quarter(1), Quarter::Q1);
    }

    #[test]
    fn test_effective_quarter_mid_quarter_unchanged() {
        assert_eq!(effective_quarter(2), Quarter::Q1);
        assert_eq!(effective_quarter(3), Quarter::Q1);
        assert_eq!(effective_quarter(5), Quarter::Q2);
        assert_eq!(effective_quarter(9), Quarter::Q3);
        assert_eq!(effective_quarter(12), Quarter::Q4);
    }

    // ── checkin_slot ──────────────────────────────────────────────────────────

    #[test]
    fn test_checkin_slot_second_month_of_quarter() {
        for month in [2, 5, 8, 11] {
            assert_eq!(checkin_slot(month), 0, "month {}", month);
        }
    }

    #[test]
    fn test_checkin_slot_third_month_of_quarter() {
        for month in [3, 6, 9, 12] {
            assert_eq!(checkin_slot(month), 1, "month {}", month);
        }
    }

    #[test]
    fn test_checkin_slot_month_after_quarter_end() {
        for month in [4, 7, 10] {
            assert_eq!(checkin_slot(month), 2, "month {}", month);
        }
    }

    // ── target_month ──────────────────────────────────────────────────────────

    #[test]
    fn test_target_month_is_previous_month() {
        assert_eq!(target_month(5), 4);
        assert_eq!(target_month(12), 11);
        assert_eq!(target_month(2), 1);
    }

    #[test]
    fn test_target_month_january_maps_to_itself() {
        assert_eq!(target_month(1), 1);
    }

    // ── classify_timestamp ────────────────────────────────────────────────────

    #[test]
    fn test_classify_timestamp_basic() {
        let t = classify_timestamp("03/05/2026").unwrap();
        assert_eq!(t.month, 3);
        assert_eq!(t.effective_quarter, Quarter::Q1);
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
    }

    #[test]
    fn test_classify_timestamp_unpadded() {
        let t = classify_timestamp("4/1/2026").unwrap();
        assert_eq!(t.month, 4);
        // First month of Q2 reports on Q1.
        assert_eq!(t.effective_quarter, Quarter::Q1);
    }

    #[test]
    fn test_classify_timestamp_surrounding_whitespace() {
        let t = classify_timestamp("  07/02/2026 ").unwrap();
        assert_eq!(t.month, 7);
        assert_eq!(t.effective_quarter, Quarter::Q2);
    }

    #[test]
    fn test_classify_timestamp_rejects_garbage() {
        assert!(classify_timestamp("not-a-date").is_none());
        assert!(classify_timestamp("").is_none());
        assert!(classify_timestamp("2026-03-05").is_none());
        assert!(classify_timestamp("13/01/2026").is_none());
    }

    // ── Quarter serde ─────────────────────────────────────────────────────────

    #[test]
    fn test_quarter_serde_round_trip() {
        let json = serde_json::to_string(&Quarter::Q2).unwrap();
        assert_eq!(json, r#""Q2""#);
        let back: Quarter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Quarter::Q2);
    }
}
