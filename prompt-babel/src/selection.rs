//! Target selection parsing
//!
//! Users pick targets with a comma-separated list. Entries may be menu numbers
//! (`1`-`4`, with `5` meaning every target), `all`, or target names:
//!
//! ```text
//! 1,3          -> claude-code, github-copilot
//! gemini, 5    -> all four
//! cursor,claude -> claude-code, cursor
//! ```
//!
//! The result is always deduplicated and in canonical target order.

use crate::error::FormatError;
use crate::target::Target;
use std::collections::BTreeSet;

/// Menu number that stands for every target.
pub const ALL_TARGETS_INDEX: usize = 5;

/// Resolve a selection string into targets.
pub fn parse_selection(input: &str) -> Result<Vec<Target>, FormatError> {
    // Target's ordering is the canonical order.
    let mut selected = BTreeSet::new();
    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        selected.extend(resolve_entry(entry)?);
    }

    if selected.is_empty() {
        return Err(FormatError::EmptySelection);
    }
    Ok(selected.into_iter().collect())
}

/// Resolve a list of already-split entries, e.g. from a config file array.
pub fn resolve_names<S: AsRef<str>>(entries: &[S]) -> Result<Vec<Target>, FormatError> {
    let joined = entries
        .iter()
        .map(|entry| entry.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    parse_selection(&joined)
}

fn resolve_entry(entry: &str) -> Result<Vec<Target>, FormatError> {
    if entry.eq_ignore_ascii_case("all") {
        return Ok(Target::ALL.to_vec());
    }

    if let Ok(index) = entry.parse::<usize>() {
        if index == ALL_TARGETS_INDEX {
            return Ok(Target::ALL.to_vec());
        }
        return Target::from_menu_index(index)
            .map(|target| vec![target])
            .ok_or_else(|| FormatError::UnknownTarget(entry.to_string()));
    }

    entry.parse::<Target>().map(|target| vec![target])
}
