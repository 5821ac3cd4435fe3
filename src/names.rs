//! Name records and name-list files.
//!
//! A name list on disk is a flat JSON array of strings (UTF-8). Each entry is
//! split into a [`NameRecord`] whose first and last whitespace tokens are the
//! keys used to link names together; the untouched entry is the identity.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed name. `full` is the original string and the node identity;
/// `first` and `last` are only matching keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub first: String,
    pub last: String,
    pub full: String,
}

impl NameRecord {
    /// Parses one raw name. Returns `None` for entries with fewer than two
    /// whitespace-separated tokens.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let first = tokens.next()?;
        let last = tokens.last()?;
        Some(Self {
            first: first.to_string(),
            last: last.to_string(),
            full: raw.to_string(),
        })
    }
}

/// Parses every raw name, silently dropping malformed entries.
pub fn parse_names<S: AsRef<str>>(raw: &[S]) -> Vec<NameRecord> {
    raw.iter()
        .filter_map(|name| NameRecord::parse(name.as_ref()))
        .collect()
}

/// Load a name list from a JSON array file.
pub fn load_names(path: &Path) -> Result<Vec<String>, NamesError> {
    let contents = fs::read_to_string(path)?;
    let names: Vec<String> = serde_json::from_str(&contents)?;
    Ok(names)
}

/// Save a name list as a pretty-printed JSON array, creating parent
/// directories as needed.
pub fn save_names(names: &[String], path: &Path) -> Result<(), NamesError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(names)?;
    fs::write(path, json)?;
    Ok(())
}

/// Whether a raw name survives cleaning.
///
/// Names with initials (`.`) or a `jr`/`sr` suffix are rejected. In strict
/// mode only names with exactly one space are kept.
fn is_clean_candidate(name: &str, strict: bool) -> bool {
    let lower = name.to_lowercase();
    if name.contains('.') || lower.contains(" jr") || lower.contains(" sr") {
        return false;
    }
    if strict {
        return name.matches(' ').count() == 1;
    }
    true
}

/// Filter and normalise a raw name list: lowercase each token and re-join
/// with single spaces.
pub fn clean_names<S: AsRef<str>>(names: &[S], strict: bool) -> Vec<String> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| is_clean_candidate(name, strict))
        .map(|name| {
            name.split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
