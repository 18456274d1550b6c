//! Header normalization to ASCII snake_case.

use std::collections::BTreeSet;

use tracing::debug;

use tabclean_model::{HeaderRename, Table};

/// Result of renaming a table's header.
#[derive(Debug, Clone)]
pub struct HeaderOutcome {
    pub table: Table,
    pub renames: Vec<HeaderRename>,
}

/// Normalizes a single column name.
///
/// Lowercases, turns every run of characters outside `[a-z0-9]` into one
/// `_`, and strips leading and trailing `_`. May return an empty string;
/// [`normalize_headers`] assigns positional names in that case.
pub fn normalize_header(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !normalized.is_empty() {
                normalized.push('_');
            }
            pending_separator = false;
            normalized.push(ch);
        } else {
            pending_separator = true;
        }
    }
    normalized
}

/// Normalizes a full header, keeping names pairwise distinct.
///
/// A name that normalizes to nothing becomes `column_<n>` (1-based
/// position). When a name is already taken, the later column gets the first
/// free suffix among `_2`, `_3`, …
pub fn normalize_headers(names: &[String]) -> Vec<String> {
    let mut taken: BTreeSet<String> = BTreeSet::new();
    let mut headers = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let mut base = normalize_header(name);
        if base.is_empty() {
            base = format!("column_{}", idx + 1);
        }
        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}_{suffix}");
        }
        taken.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

/// Renames every column of `table` with [`normalize_headers`].
pub fn apply_header_normalization(table: Table) -> HeaderOutcome {
    let normalized = normalize_headers(table.columns());
    let renames: Vec<HeaderRename> = table
        .columns()
        .iter()
        .zip(&normalized)
        .filter(|(from, to)| from != to)
        .map(|(from, to)| HeaderRename {
            from: from.clone(),
            to: to.clone(),
        })
        .collect();
    for rename in &renames {
        debug!(from = %rename.from, to = %rename.to, "renamed column");
    }

    let table = table
        .with_columns(normalized)
        .expect("normalized headers are distinct and as wide as the table");
    HeaderOutcome { table, renames }
}
