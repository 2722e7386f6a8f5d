//! The leaderboard page: month and quarter history tables.

use std::collections::BTreeMap;

use tracker_core::calendar::Quarter;
use tracker_core::context::HeaderContext;
use tracker_core::models::PersonRecord;

use crate::html::page_wrapper;

/// Render the leaderboard: one table of per-month outcome markers
/// (columns 1–12) and one of per-quarter progress markers (three cells per
/// quarter: check-in 1, check-in 2, final). People appear sorted by name.
pub fn leaderboard_page(ctx: &HeaderContext, people: &BTreeMap<String, PersonRecord>) -> String {
    let month_head: String = (1..=12).map(|m| format!("<th>{}</th>", m)).collect();
    let month_body: String = people
        .iter()
        .map(|(name, record)| {
            let cells: String = (1..=12usize)
                .map(|m| format!("<td>{}</td>", record.month_history[m]))
                .collect();
            format!("<tr><td class=\"name\">{}</td>{}</tr>", name, cells)
        })
        .collect::<Vec<String>>()
        .join("\n");

    let quarter_body: String = people
        .iter()
        .map(|(name, record)| {
            let cells: String = Quarter::ALL
                .iter()
                .flat_map(|q| record.quarter_history[q].iter())
                .map(|marker| format!("<td>{}</td>", marker))
                .collect();
            format!("<tr><td class=\"name\">{}</td>{}</tr>", name, cells)
        })
        .collect::<Vec<String>>()
        .join("\n");

    let content = format!(
        r#"<article>
  <table>
    <caption>Leaderboard - Months</caption>
    <thead><tr><th>Name</th>{month_head}</tr></thead>
    <tbody>{month_body}</tbody>
  </table>
</article>
<article>
  <table>
    <caption>Leaderboard - Quarters</caption>
    <thead>
      <tr><th>Name</th><th colspan="3">Q1</th><th colspan="3">Q2</th><th colspan="3">Q3</th><th colspan="3">Q4</th></tr>
      <tr><td></td><td>1</td><td>2</td><td>F</td><td>1</td><td>2</td><td>F</td><td>1</td><td>2</td><td>F</td><td>1</td><td>2</td><td>F</td></tr>
    </thead>
    <tbody>{quarter_body}</tbody>
  </table>
</article>"#,
        month_head = month_head,
        month_body = month_body,
        quarter_body = quarter_body,
    );

    page_wrapper("Leaderboard", "Leaderboard", &content, ctx)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
