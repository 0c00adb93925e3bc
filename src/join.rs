//! The join engine: a hash join of two in-memory tables on one key column.

use anyhow::Result;
use std::collections::HashMap;

use crate::domain::{JoinMode, MergeStats};
use crate::table::Table;

/// The joined table plus the row accounting for the merge summary.
#[derive(Debug)]
pub struct JoinOutput {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub stats: MergeStats,
}

/// Join `left` and `right` on `key`. Rows pair up when their key values are
/// equal; duplicate keys produce the cross product of the matching groups,
/// left input order outermost. Unmatched rows are kept or dropped per
/// `mode`, and counted either way.
pub fn join(
    left: &Table,
    right: &Table,
    key: &str,
    mode: JoinMode,
    suffixes: (&str, &str),
) -> Result<JoinOutput> {
    let left_key = left.key_index(key)?;
    let right_key = right.key_index(key)?;

    let headers = merge_headers(left, right, left_key, right_key, suffixes);

    // Right-side index: key value -> row positions, in input order.
    let mut right_index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, row) in right.rows.iter().enumerate() {
        right_index.entry(row[right_key].as_str()).or_default().push(idx);
    }

    let right_width = right.headers.len() - 1;
    let mut right_matched = vec![false; right.rows.len()];
    let mut rows = Vec::new();
    let mut stats = MergeStats {
        rows_left: left.rows.len(),
        rows_right: right.rows.len(),
        columns_out: headers.len(),
        ..MergeStats::default()
    };

    for left_row in &left.rows {
        match right_index.get(left_row[left_key].as_str()) {
            Some(matches) => {
                for &right_idx in matches {
                    right_matched[right_idx] = true;
                    let mut out = left_row.clone();
                    append_right(&mut out, &right.rows[right_idx], right_key);
                    rows.push(out);
                }
            }
            None => {
                stats.unmatched_left += 1;
                if mode.keeps_unmatched_left() {
                    let mut out = left_row.clone();
                    out.extend(std::iter::repeat(String::new()).take(right_width));
                    rows.push(out);
                }
            }
        }
    }

    // Unmatched right rows come last, in right input order. The key value
    // lands in the shared key column; left-only columns stay empty.
    for (right_idx, matched) in right_matched.iter().enumerate() {
        if *matched {
            continue;
        }
        stats.unmatched_right += 1;
        if mode.keeps_unmatched_right() {
            let right_row = &right.rows[right_idx];
            let mut out = vec![String::new(); left.headers.len()];
            out[left_key] = right_row[right_key].clone();
            append_right(&mut out, right_row, right_key);
            rows.push(out);
        }
    }

    stats.rows_out = rows.len();
    tracing::debug!(
        mode = %mode,
        rows_out = stats.rows_out,
        unmatched_left = stats.unmatched_left,
        unmatched_right = stats.unmatched_right,
        "join complete"
    );

    Ok(JoinOutput { headers, rows, stats })
}

/// Output header: left columns in order, then right columns minus the key.
/// Non-key names present on both sides get the left/right suffix pair.
/// Suffixed names are not re-disambiguated: an input that already has a
/// column equal to a suffixed name (say `name` plus a literal `name_x`)
/// yields a duplicate header, matching the original library's behavior.
fn merge_headers(
    left: &Table,
    right: &Table,
    left_key: usize,
    right_key: usize,
    suffixes: (&str, &str),
) -> Vec<String> {
    let mut headers = Vec::with_capacity(left.headers.len() + right.headers.len() - 1);

    for (idx, name) in left.headers.iter().enumerate() {
        if idx != left_key && right.headers.iter().any(|h| h == name) {
            headers.push(format!("{name}{}", suffixes.0));
        } else {
            headers.push(name.clone());
        }
    }
    for (idx, name) in right.headers.iter().enumerate() {
        if idx == right_key {
            continue;
        }
        if left.headers.iter().any(|h| h == name) {
            headers.push(format!("{name}{}", suffixes.1));
        } else {
            headers.push(name.clone());
        }
    }

    headers
}

fn append_right(out: &mut Vec<String>, right_row: &[String], right_key: usize) {
    for (idx, field) in right_row.iter().enumerate() {
        if idx != right_key {
            out.push(field.clone());
        }
    }
}
