//! Bounded enumeration of name chains and loops.
//!
//! A *chain* of length L is a simple directed path of L distinct names. A
//! *loop* of length L is a chain whose last name also has an edge back to its
//! first name.
//!
//! # Algorithm
//!
//! Backtracking depth-first search, one search tree per start candidate,
//! candidates tried in descending connectivity order. A single path buffer
//! and visited table are pushed on the way down and popped on every way out,
//! so sibling branches never see each other's state. Once `target_count` raw
//! results exist the search stops everywhere, including the remaining start
//! candidates. Raw results are then de-duplicated: chains by exact sequence,
//! loops by their canonical rotation (see [`canonical_rotation`]).
//!
//! The only pruning is the start order and the global early exit, so the
//! worst case is exponential in L. The returned set is the first results found
//! under this order, not a ranked selection.

use crate::graph::{NameGraph, NodeId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Smallest meaningful chain or loop.
pub const MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no usable names after parsing")]
    InputEmpty,
    #[error("length must be at least 2, got {0}")]
    InvalidLength(usize),
    #[error("target count must be at least 1, got {0}")]
    InvalidTargetCount(usize),
    #[error("unknown search mode '{0}' (expected 'chain' or 'loop')")]
    InvalidMode(String),
}

/// What kind of result a search collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Chain,
    #[default]
    Loop,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Chain => "chain",
            SearchMode::Loop => "loop",
        }
    }

    /// Capitalised label used when printing numbered results.
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Chain => "Chain",
            SearchMode::Loop => "Loop",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chain" => Ok(SearchMode::Chain),
            "loop" => Ok(SearchMode::Loop),
            _ => Err(SearchError::InvalidMode(s.to_string())),
        }
    }
}

/// Outcome of searching one length in a multi-length run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthOutcome {
    pub length: usize,
    pub result: Result<Vec<Vec<String>>, SearchError>,
}

/// Rotates a cyclic sequence so it starts at its smallest element.
///
/// Two sequences that are rotations of each other have the same canonical
/// rotation, provided their elements are distinct.
pub fn canonical_rotation<T: Ord + Clone>(cycle: &[T]) -> Vec<T> {
    let Some(min_idx) = cycle
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
    else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(cycle.len());
    rotated.extend_from_slice(&cycle[min_idx..]);
    rotated.extend_from_slice(&cycle[..min_idx]);
    rotated
}

/// Searches the whole graph, starting from every name in descending
/// connectivity order.
pub fn search(
    graph: &NameGraph,
    length: usize,
    mode: SearchMode,
    target_count: usize,
) -> Result<Vec<Vec<String>>, SearchError> {
    search_from(graph, &graph.start_candidates(false), length, mode, target_count)
}

/// Searches from an explicit, already ordered list of start candidates.
///
/// Every returned path has exactly `length` distinct names; loops are in
/// canonical rotation. At most `target_count` results are returned, in
/// discovery order.
pub fn search_from(
    graph: &NameGraph,
    candidates: &[NodeId],
    length: usize,
    mode: SearchMode,
    target_count: usize,
) -> Result<Vec<Vec<String>>, SearchError> {
    if length < MIN_LENGTH {
        return Err(SearchError::InvalidLength(length));
    }
    if target_count < 1 {
        return Err(SearchError::InvalidTargetCount(target_count));
    }
    if graph.num_records() == 0 {
        return Err(SearchError::InputEmpty);
    }
    if length > graph.num_nodes() {
        // a simple path cannot visit more names than the graph holds
        return Ok(Vec::new());
    }

    let mut walk = Walk::new(graph.adjacency(), length, mode, target_count);
    for &start in candidates {
        if walk.is_full() {
            break;
        }
        walk.start = start;
        walk.visit(start);
    }

    let raw = walk.found;
    log::debug!(
        "{} length {}: {} raw results from {} candidates",
        mode,
        length,
        raw.len(),
        candidates.len()
    );

    let results = dedup(graph, raw, mode, target_count);
    log::debug!("{} length {}: {} after dedup", mode, length, results.len());
    Ok(results)
}

/// Runs [`search_from`] once per length, in ascending order.
///
/// With `parallel`, lengths are searched concurrently on the rayon pool; each
/// task owns its own buffers and the output is identical to a sequential run.
pub fn search_lengths(
    graph: &NameGraph,
    candidates: &[NodeId],
    lengths: RangeInclusive<usize>,
    mode: SearchMode,
    target_count: usize,
    parallel: bool,
) -> Vec<LengthOutcome> {
    let run = |length: usize| LengthOutcome {
        length,
        result: search_from(graph, candidates, length, mode, target_count),
    };
    if parallel {
        lengths.into_par_iter().map(run).collect()
    } else {
        lengths.map(run).collect()
    }
}

fn dedup(
    graph: &NameGraph,
    raw: Vec<Vec<NodeId>>,
    mode: SearchMode,
    target_count: usize,
) -> Vec<Vec<String>> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut results = Vec::new();
    for path in raw {
        let names: Vec<String> = path.iter().map(|&id| graph.get_name(id).to_string()).collect();
        let key = match mode {
            SearchMode::Chain => names,
            SearchMode::Loop => canonical_rotation(&names),
        };
        if seen.insert(key.clone()) {
            results.push(key);
        }
    }
    results.truncate(target_count);
    results
}

/// Backtracking state for one search call.
struct Walk<'g> {
    adj: &'g [Vec<NodeId>],
    length: usize,
    mode: SearchMode,
    target_count: usize,
    start: NodeId,
    path: Vec<NodeId>,
    visited: Vec<bool>,
    found: Vec<Vec<NodeId>>,
}

impl<'g> Walk<'g> {
    fn new(adj: &'g [Vec<NodeId>], length: usize, mode: SearchMode, target_count: usize) -> Self {
        Self {
            adj,
            length,
            mode,
            target_count,
            start: 0,
            path: Vec::with_capacity(length.min(adj.len())),
            visited: vec![false; adj.len()],
            found: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.found.len() >= self.target_count
    }

    fn visit(&mut self, node: NodeId) {
        if self.is_full() {
            return;
        }

        self.path.push(node);
        self.visited[node] = true;

        if self.path.len() == self.length {
            let accepted = match self.mode {
                SearchMode::Chain => true,
                SearchMode::Loop => self.adj[node].contains(&self.start),
            };
            if accepted {
                self.found.push(self.path.clone());
            }
        } else {
            let adj = self.adj;
            for &next in &adj[node] {
                if !self.visited[next] {
                    self.visit(next);
                }
            }
        }

        self.path.pop();
        self.visited[node] = false;
    }
}
