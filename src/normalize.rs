use crate::table::Table;
use std::collections::HashSet;
use tracing::debug;

/// Canonicalize one column label.
///
/// Lowercases the label, collapses every run of whitespace and punctuation
/// into a single underscore, and strips leading/trailing underscores.
///
/// # Examples
///
/// ```
/// use egrid_ingest::normalize::clean_name;
///
/// assert_eq!(clean_name("State Abbr"), "state_abbr");
/// assert_eq!(clean_name("eGRID Subregion"), "egrid_subregion");
/// assert_eq!(clean_name("Total Generation (MWh)"), "total_generation_mwh");
/// ```
pub fn clean_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !cleaned.is_empty() {
                cleaned.push('_');
            }
            pending_separator = false;
            for lower in ch.to_lowercase() {
                cleaned.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    cleaned
}

/// Canonicalize a full header, keeping the result collision-free.
///
/// Duplicates after cleaning get a numeric suffix (`_2`, `_3`, ...) in
/// left-to-right order; a label that cleans to nothing falls back to its
/// 1-based position as `column_N`.
pub fn clean_names(names: &[String]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(names.len());
    let mut cleaned = Vec::with_capacity(names.len());

    for (idx, name) in names.iter().enumerate() {
        let mut base = clean_name(name);
        if base.is_empty() {
            base = format!("column_{}", idx + 1);
        }

        let unique = if used.contains(&base) {
            let mut n = 2;
            loop {
                let candidate = format!("{base}_{n}");
                if !used.contains(&candidate) {
                    debug!("Column name collision: {name:?} renamed to {candidate}");
                    break candidate;
                }
                n += 1;
            }
        } else {
            base
        };

        used.insert(unique.clone());
        cleaned.push(unique);
    }

    cleaned
}

/// Rewrite a table's column names into canonical form.
///
/// Row count and cell values are untouched; only the header changes.
pub fn clean_table(mut table: Table) -> Table {
    let cleaned = clean_names(table.columns());
    table.rename_columns(cleaned);
    table
}
