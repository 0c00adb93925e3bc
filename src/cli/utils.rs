//! Shared CLI utilities.

/// Split a comma-separated option into trimmed, non-empty segments.
/// Returns `None` when the option was not given.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    let raw = value.as_deref()?;
    let parts = raw
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            (!part.is_empty()).then(|| part.to_string())
        })
        .collect();
    Some(parts)
}

/// Format an integer with thousands separators for readable row counts.
pub fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
