//! Shared HTML chrome for the generated site.

use tracker_core::context::HeaderContext;

/// Site name shown in page titles, the header and the footer.
pub const SITE_TITLE: &str = "Accountability";

/// Wrap page content in the shared document skeleton: head, header,
/// navigation to the current-month / current-quarter / leaderboard pages,
/// and footer.
pub fn page_wrapper(title: &str, h1_title: &str, content: &str, ctx: &HeaderContext) -> String {
    let month_href = format!("{}.html", ctx.current_month.to_lowercase());
    let quarter_href = format!("{}.html", ctx.current_quarter.to_string().to_lowercase());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <link rel="stylesheet" href="styles.css">
  <title>{site} - {title}</title>
</head>
<body>
  <header><a href="index.html">{site}</a></header>
  <nav>
    <ul class="nav-ul">
      <li class="nav-link"><a href="{month_href}">Current Month</a></li>
      <li class="nav-link"><a href="{quarter_href}">Current Quarter</a></li>
      <li class="nav-link"><a href="leaderboard.html">Leaderboard</a></li>
    </ul>
  </nav>
  <main>
    <h1>{h1_title}</h1>
{content}
  </main>
  <footer>{site}</footer>
</body>
</html>
"#,
        site = SITE_TITLE,
        title = title,
        month_href = month_href,
        quarter_href = quarter_href,
        h1_title = h1_title,
        content = content,
    )
}

/// Render a goal list as an unordered list.
pub fn goal_list(goals: &[String]) -> String {
    let items: String = goals
        .iter()
        .map(|g| format!("<li>{}</li>", g))
        .collect();
    format!("<ul>{}</ul>", items)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
