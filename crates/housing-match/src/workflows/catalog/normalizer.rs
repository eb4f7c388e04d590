/// Lowercase and trim a match tag, dropping blanks.
pub(crate) fn normalize_tag(value: &str) -> Option<String> {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalize a tag collection, keeping first-seen order and removing duplicates.
pub(crate) fn normalize_tags<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for value in values {
        if let Some(tag) = normalize_tag(value.as_ref()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Split a flat tag list such as `"family-friendly; accessible"`.
pub(crate) fn split_tags(value: &str) -> Vec<String> {
    normalize_tags(value.split([',', ';', '|']))
}

/// Parse a rent amount, tolerating `$` and thousands separators. Negative or
/// non-numeric values are treated as absent.
pub(crate) fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}

/// Collapse runs of whitespace in display text; empty text becomes `None`.
pub(crate) fn clean_text(value: &str) -> Option<String> {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
