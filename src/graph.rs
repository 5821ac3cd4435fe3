//! The name connectivity graph.
//!
//! Nodes are full name strings. There is a directed edge `A → B` whenever
//! `A.last == B.first` and `A.full != B.full`. Internally nodes are numbered
//! in first-seen input order and edges are stored as an adjacency list of
//! those numbers; the public API speaks in name strings.

use crate::names::{NameRecord, parse_names};
use serde::Serialize;
use std::collections::HashMap;

/// A node identifier. Index into the graph's name table.
pub type NodeId = usize;

/// Summary counts printed after a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Records that survived parsing.
    pub names_processed: usize,
    /// Distinct names with at least one outgoing edge.
    pub nodes_with_edges: usize,
    /// Total edges, counting duplicates.
    pub edges: usize,
}

/// Directed graph of names plus per-node degree counts.
///
/// Built once from a record list and read-only afterwards, so a single graph
/// can be shared by any number of concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct NameGraph {
    names: Vec<String>,
    name_to_id: HashMap<String, NodeId>,
    adj: Vec<Vec<NodeId>>,
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
    records: usize,
}

/// Parses raw names and builds their graph.
pub fn build_graph<S: AsRef<str>>(names: &[S]) -> NameGraph {
    NameGraph::from_records(&parse_names(names))
}

impl NameGraph {
    /// Builds the graph from parsed records.
    ///
    /// Records are grouped by first token, then every record is linked to
    /// each record whose first token equals its last token. Duplicate input
    /// records produce duplicate edges; upstream lists are expected to be
    /// de-duplicated already.
    pub fn from_records(records: &[NameRecord]) -> Self {
        let mut graph = Self {
            records: records.len(),
            ..Self::default()
        };

        let ids: Vec<NodeId> = records.iter().map(|r| graph.add_node(&r.full)).collect();

        let mut by_first: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_first.entry(record.first.as_str()).or_default().push(idx);
        }

        for (idx, record) in records.iter().enumerate() {
            let Some(successors) = by_first.get(record.last.as_str()) else {
                continue;
            };
            for &succ in successors {
                if records[succ].full == record.full {
                    continue;
                }
                let (from, to) = (ids[idx], ids[succ]);
                graph.adj[from].push(to);
                graph.out_degree[from] += 1;
                graph.in_degree[to] += 1;
            }
        }

        graph
    }

    fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.name_to_id.insert(name.to_string(), id);
        self.adj.push(Vec::new());
        self.in_degree.push(0);
        self.out_degree.push(0);
        id
    }

    /// Returns the numeric ID for a name, if it exists.
    pub fn get_id(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the name for a numeric ID.
    pub fn get_name(&self, id: NodeId) -> &str {
        &self.names[id]
    }

    /// Number of distinct names.
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Number of records the graph was built from.
    pub fn num_records(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Adjacency list indexed by [`NodeId`].
    pub fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adj
    }

    /// Successor names of `name`, in edge insertion order.
    pub fn successors(&self, name: &str) -> Vec<&str> {
        self.get_id(name)
            .map(|id| self.adj[id].iter().map(|&s| self.get_name(s)).collect())
            .unwrap_or_default()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.get_id(from), self.get_id(to)) {
            (Some(f), Some(t)) => self.adj[f].contains(&t),
            _ => false,
        }
    }

    /// Every edge as `(from, to)` name pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adj.iter().enumerate().flat_map(move |(from, succs)| {
            succs
                .iter()
                .map(move |&to| (self.get_name(from), self.get_name(to)))
        })
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.in_degree[id]
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.out_degree[id]
    }

    /// In-degree plus out-degree of a name; `None` if the name is unknown.
    pub fn connectivity(&self, name: &str) -> Option<usize> {
        self.get_id(name)
            .map(|id| self.in_degree[id] + self.out_degree[id])
    }

    /// Connectivity of every name, including names with no edges (score 0).
    pub fn connectivity_map(&self) -> HashMap<String, usize> {
        self.names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), self.in_degree[id] + self.out_degree[id]))
            .collect()
    }

    /// Search start order: distinct names by descending connectivity, ties
    /// kept in input order. With `connected_only`, names lacking either an
    /// incoming or an outgoing edge are left out.
    pub fn start_candidates(&self, connected_only: bool) -> Vec<NodeId> {
        let mut candidates: Vec<NodeId> = (0..self.num_nodes())
            .filter(|&id| !connected_only || (self.in_degree[id] > 0 && self.out_degree[id] > 0))
            .collect();
        // sort_by is stable, which preserves input order among equal scores
        candidates.sort_by(|&a, &b| {
            let score_a = self.in_degree[a] + self.out_degree[a];
            let score_b = self.in_degree[b] + self.out_degree[b];
            score_b.cmp(&score_a)
        });
        candidates
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            names_processed: self.records,
            nodes_with_edges: self.adj.iter().filter(|succs| !succs.is_empty()).count(),
            edges: self.adj.iter().map(Vec::len).sum(),
        }
    }
}
