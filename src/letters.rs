//! First-letter frequency of given names.
//!
//! Input is a directory of yearly name-count files (`yobYYYY.txt`), one
//! `name,sex,count` record per line. Counts are summed per upper-cased first
//! letter of the name. The key is the whole upper-case form of that letter,
//! so `ß` counts under `SS`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LetterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no name counts found in {0}")]
    Empty(String),
}

/// Default bar width for [`render_histogram`].
pub const DEFAULT_BAR_WIDTH: usize = 30;

fn is_count_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("yob") && n.ends_with(".txt"))
}

/// Adds the counts from one file's contents. Malformed lines are skipped.
pub fn accumulate_counts(contents: &str, counts: &mut BTreeMap<String, u64>) {
    for line in contents.lines() {
        let parts: Vec<&str> = line.trim().split(',').collect();
        let [name, _, count] = parts.as_slice() else {
            continue;
        };
        let Some(first) = name.chars().next() else {
            continue;
        };
        let Ok(count) = count.trim().parse::<u64>() else {
            continue;
        };
        *counts.entry(first.to_uppercase().to_string()).or_insert(0) += count;
    }
}

/// Sums first-letter counts over every `yob*.txt` file in `dir`.
pub fn count_starting_letters(dir: &Path) -> Result<BTreeMap<String, u64>, LetterError> {
    let mut counts = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !is_count_file(&path) {
            continue;
        }
        let contents = fs::read_to_string(&path)?;
        accumulate_counts(&contents, &mut counts);
    }
    if counts.is_empty() {
        return Err(LetterError::Empty(dir.display().to_string()));
    }
    log::info!("counted {} distinct starting letters", counts.len());
    Ok(counts)
}

/// Each letter's share of the total.
pub fn normalize(counts: &BTreeMap<String, u64>) -> BTreeMap<String, f64> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return counts.keys().map(|c| (c.clone(), 0.0)).collect();
    }
    counts
        .iter()
        .map(|(c, &n)| (c.clone(), n as f64 / total as f64))
        .collect()
}

/// Writes normalized frequencies as a pretty JSON object keyed by letter.
pub fn save_frequencies(freqs: &BTreeMap<String, f64>, path: &Path) -> Result<(), LetterError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(freqs)?)?;
    Ok(())
}

/// One `L: ####` line per letter, bars scaled so the largest count spans
/// `max_bar_width` characters.
pub fn render_histogram(counts: &BTreeMap<String, u64>, max_bar_width: usize) -> Vec<String> {
    let max = counts.values().copied().max().unwrap_or(0);
    counts
        .iter()
        .map(|(letter, &count)| {
            let bar_len = if max == 0 {
                0
            } else {
                (count as u128 * max_bar_width as u128 / max as u128) as usize
            };
            format!("{}: {}", letter, "#".repeat(bar_len))
        })
        .collect()
}
