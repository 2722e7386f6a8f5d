//! Header and response classification.
//!
//! Survey columns are free text; classification works by substring markers
//! checked in a fixed priority order against the resolved [`HeaderContext`].
//! Response values get the same treatment: a small closed vocabulary with an
//! explicit catch-all.

use crate::context::HeaderContext;

// ── Column classification ─────────────────────────────────────────────────────

/// The semantic bucket a survey column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Goal for the resolved current month.
    CurrentMonthGoal,
    /// Goal for the resolved previous month.
    PreviousMonthGoal,
    /// Goal for the resolved current quarter.
    QuarterGoal,
    /// "Did you accomplish ..." result for the prior month.
    Accomplishment,
    /// Quarterly check-in or final-results response.
    QuarterProgress,
}

/// Classify a column header against the resolved context.
///
/// Rules are evaluated in priority order; the first match wins and a header
/// matching an earlier rule never falls into a later one:
///
/// 1. current month name + "Goal"
/// 2. previous month name + "Goal" (when a previous month exists)
/// 3. "<quarter> Goal" without "Check-In"
/// 4. "accomplish"
/// 5. "Check-In" or "Final Results"
///
/// Headers matching none of the rules return `None` and are ignored.
pub fn classify_header(header: &str, ctx: &HeaderContext) -> Option<ColumnKind> {
    if header.contains(&ctx.current_month) && header.contains("Goal") {
        return Some(ColumnKind::CurrentMonthGoal);
    }

    if let Some(previous) = &ctx.previous_month {
        if header.contains(previous.as_str()) && header.contains("Goal") {
            return Some(ColumnKind::PreviousMonthGoal);
        }
    }

    let quarter_goal = format!("{} Goal", ctx.current_quarter);
    if header.contains(&quarter_goal) && !header.contains("Check-In") {
        return Some(ColumnKind::QuarterGoal);
    }

    if header.contains("accomplish") {
        return Some(ColumnKind::Accomplishment);
    }

    if header.contains("Check-In") || header.contains("Final Results") {
        return Some(ColumnKind::QuarterProgress);
    }

    None
}

// ── Response classification ───────────────────────────────────────────────────

/// A classified survey response value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// "yes" / "on track"
    Yes,
    /// "no" / "off track"
    No,
    /// "pivot"
    Pivot,
    /// Anything else, carrying the trimmed original text.
    Other(String),
}

impl Response {
    /// Classify a raw response value, case-insensitively, trimmed.
    pub fn parse(raw: &str) -> Response {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "yes" | "on track" => Response::Yes,
            "no" | "off track" => Response::No,
            "pivot" => Response::Pivot,
            _ => Response::Other(trimmed.to_string()),
        }
    }

    /// Marker used when displaying a response inline on a roundup page.
    ///
    /// Unrecognised values pass through unchanged so free-text answers stay
    /// readable.
    pub fn display_marker(&self) -> String {
        match self {
            Response::Yes => "✅".to_string(),
            Response::No => "❌".to_string(),
            Response::Pivot => "🔀".to_string(),
            Response::Other(text) => text.clone(),
        }
    }

    /// Marker written into a fixed history slot.
    ///
    /// History cells must stay one glyph wide, so unrecognised values map to
    /// the 🔀 catch-all instead of passing through. Distinct from
    /// [`Response::display_marker`] on purpose; the two contexts differ.
    pub fn history_marker(&self) -> &'static str {
        match self {
            Response::Yes => "✅",
            Response::No => "❌",
            Response::Pivot | Response::Other(_) => "🔀",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
