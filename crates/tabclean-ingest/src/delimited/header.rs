//! Raw header cleanup applied at load time.

use std::collections::{BTreeMap, BTreeSet};

const UTF8_BOM: char = '\u{feff}';

/// Prepares the raw header record so it satisfies the unique-name invariant.
///
/// Strips a UTF-8 byte-order mark from the first name and renames exact
/// repeats the way pandas does: `a, a, a` becomes `a, a.1, a.2`. Spelling is
/// otherwise kept as written; header normalization happens later.
pub fn dedupe_raw_headers(raw: &[String]) -> Vec<String> {
    let originals: BTreeSet<&str> = raw.iter().map(String::as_str).collect();
    let mut taken: BTreeSet<String> = BTreeSet::new();
    let mut repeats: BTreeMap<String, usize> = BTreeMap::new();
    let mut headers = Vec::with_capacity(raw.len());

    for (idx, name) in raw.iter().enumerate() {
        let name = if idx == 0 {
            name.trim_start_matches(UTF8_BOM).to_string()
        } else {
            name.clone()
        };
        if taken.insert(name.clone()) {
            headers.push(name);
            continue;
        }
        let counter = repeats.entry(name.clone()).or_insert(0);
        let renamed = loop {
            *counter += 1;
            let candidate = format!("{name}.{counter}");
            if !taken.contains(&candidate) && !originals.contains(candidate.as_str()) {
                break candidate;
            }
        };
        taken.insert(renamed.clone());
        headers.push(renamed);
    }
    headers
}
