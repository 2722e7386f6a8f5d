//! Per-month and per-quarter roundup pages.
//!
//! Each page is one card per person, skipping people with nothing to show.
//! Results and progress are display-mapped: recognised responses become
//! emoji, anything else passes through as typed.

use std::collections::BTreeMap;

use tracker_core::classify::Response;
use tracker_core::context::HeaderContext;
use tracker_core::models::PersonRecord;

use crate::html::{goal_list, page_wrapper};

/// Display marker for a stored response string; blank stays blank.
fn display(value: &str) -> String {
    Response::parse(value).display_marker()
}

/// The current-month roundup: each person's current goals, with last
/// month's goals and result shown above them when a previous month exists.
pub fn month_page(ctx: &HeaderContext, people: &BTreeMap<String, PersonRecord>) -> String {
    let cards: String = people
        .iter()
        .filter(|(_, record)| {
            !record.current_month_goals.is_empty() || !record.previous_month_goals.is_empty()
        })
        .map(|(name, record)| {
            let mut sections = String::new();

            if let Some(previous) = &ctx.previous_month {
                if !record.previous_month_goals.is_empty() {
                    sections.push_str(&format!(
                        "<div><h3>{} Goals</h3>{}<h4>Results: {}</h4></div>",
                        previous,
                        goal_list(&record.previous_month_goals),
                        display(&record.monthly_result),
                    ));
                }
            }

            if !record.current_month_goals.is_empty() {
                sections.push_str(&format!(
                    "<div><h3>{} Goals</h3>{}</div>",
                    ctx.current_month,
                    goal_list(&record.current_month_goals),
                ));
            }

            format!(
                "<article class=\"card\"><h2>{}</h2>{}</article>",
                name, sections
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    page_wrapper(
        &ctx.current_month,
        &format!("{} Roundup", ctx.current_month),
        &cards,
        ctx,
    )
}

/// The retroactive previous-month roundup (goals plus results), or `None`
/// when the headers only carried one month.
pub fn previous_month_page(
    ctx: &HeaderContext,
    people: &BTreeMap<String, PersonRecord>,
) -> Option<String> {
    let previous = ctx.previous_month.as_ref()?;

    let cards: String = people
        .iter()
        .filter(|(_, record)| !record.previous_month_goals.is_empty())
        .map(|(name, record)| {
            format!(
                "<article class=\"card\"><h2>{}</h2><div><h3>{} Goals</h3>{}<h4>Results: {}</h4></div></article>",
                name,
                previous,
                goal_list(&record.previous_month_goals),
                display(&record.monthly_result),
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    Some(page_wrapper(
        previous,
        &format!("{} Roundup", previous),
        &cards,
        ctx,
    ))
}

/// The current-quarter roundup: quarter goals plus latest progress.
pub fn quarter_page(ctx: &HeaderContext, people: &BTreeMap<String, PersonRecord>) -> String {
    let cards: String = people
        .iter()
        .filter(|(_, record)| !record.quarter_goals.is_empty())
        .map(|(name, record)| {
            format!(
                "<article class=\"card\"><h2>{}</h2><div><h3>{} Goals</h3>{}<h4>Progress: {}</h4></div></article>",
                name,
                ctx.current_quarter,
                goal_list(&record.quarter_goals),
                display(&record.quarter_progress),
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    page_wrapper(
        &ctx.current_quarter.to_string(),
        &format!("Quarter {} Roundup", ctx.current_quarter.number()),
        &cards,
        ctx,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
