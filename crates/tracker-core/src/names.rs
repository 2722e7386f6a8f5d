use regex::Regex;

/// Normalise a respondent name for use as an aggregation key.
///
/// Trims the input, collapses internal whitespace runs to a single space and
/// uppercases the first letter of each token, leaving the rest of each token
/// as typed. Idempotent: normalising an already-normalised name is a no-op.
///
/// An absent input normalises to the empty string, which the aggregator
/// treats as "skip this row".
///
/// # Examples
///
/// ```
/// use tracker_core::names::normalize_name;
///
/// assert_eq!(normalize_name(Some("  jane   doe ")), "Jane Doe");
/// assert_eq!(normalize_name(Some("Jane Doe")), "Jane Doe");
/// assert_eq!(normalize_name(None), "");
/// ```
pub fn normalize_name(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(r) => r.trim(),
        None => return String::new(),
    };
    if raw.is_empty() {
        return String::new();
    }

    let ws = Regex::new(r"\s+").expect("regex is valid");
    let collapsed = ws.replace_all(raw, " ");

    collapsed
        .split(' ')
        .map(capitalize_token)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Uppercase the first character of `token`, leaving the remainder as is.
fn capitalize_token(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
