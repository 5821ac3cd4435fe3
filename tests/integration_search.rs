//! Integration tests for graph construction and chain/loop search.
//!
//! Tests cover:
//! 1. Worked examples: triangle loop, open chain, single record, bad length
//! 2. Start order and the global early exit
//! 3. Loop canonicalisation across start candidates
//! 4. Names with middle tokens and duplicate input records

use namechain::graph::build_graph;
use namechain::names::parse_names;
use namechain::search::{SearchError, SearchMode, search, search_from, search_lengths};
use namechain::NameGraph;

fn paths(items: &[&[&str]]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|p| p.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn assert_connected(graph: &NameGraph, path: &[String]) {
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]),
            "missing edge {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

// ===========================================================================
// 1. Worked examples
// ===========================================================================

#[test]
fn test_triangle_single_canonical_loop() {
    let graph = build_graph(&["Ann Bell", "Bell Cole", "Cole Ann"]);
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges.len(), 3);

    let loops = search(&graph, 3, SearchMode::Loop, 5).unwrap();
    assert_eq!(loops, paths(&[&["Ann Bell", "Bell Cole", "Cole Ann"]]));
}

#[test]
fn test_open_chain_has_no_loop() {
    let graph = build_graph(&["Ann Bell", "Bell Cole"]);
    assert_eq!(
        search(&graph, 2, SearchMode::Chain, 5).unwrap(),
        paths(&[&["Ann Bell", "Bell Cole"]])
    );
    assert!(search(&graph, 2, SearchMode::Loop, 5).unwrap().is_empty());
}

#[test]
fn test_single_record_graph_is_empty() {
    let graph = build_graph(&["X Y"]);
    assert_eq!(graph.edges().count(), 0);
    for mode in [SearchMode::Chain, SearchMode::Loop] {
        for length in 2..=4 {
            assert!(search(&graph, length, mode, 5).unwrap().is_empty());
        }
    }
}

#[test]
fn test_length_one_is_reported_and_skipped() {
    let graph = build_graph(&["Ann Bell", "Bell Cole", "Cole Ann"]);
    let candidates = graph.start_candidates(false);
    let outcomes = search_lengths(&graph, &candidates, 1..=3, SearchMode::Chain, 5, false);
    let lengths: Vec<_> = outcomes.iter().map(|o| o.length).collect();
    assert_eq!(lengths, vec![1, 2, 3]);
    assert_eq!(outcomes[0].result, Err(SearchError::InvalidLength(1)));
    assert!(outcomes[1].result.as_ref().is_ok_and(|r| !r.is_empty()));
    assert!(outcomes[2].result.as_ref().is_ok_and(|r| !r.is_empty()));
}

#[test]
fn test_zero_target_count_is_reported() {
    let graph = build_graph(&["Ann Bell", "Bell Cole"]);
    assert_eq!(
        search(&graph, 2, SearchMode::Loop, 0),
        Err(SearchError::InvalidTargetCount(0))
    );
}

// ===========================================================================
// 2. Start order and early exit
// ===========================================================================

#[test]
fn test_hub_is_searched_first() {
    // "bo cy" has the highest connectivity and so supplies the first chain
    let graph = build_graph(&["al bo", "di bo", "bo cy", "cy ed", "cy fa"]);
    let chains = search(&graph, 2, SearchMode::Chain, 1).unwrap();
    assert_eq!(chains, paths(&[&["bo cy", "cy ed"]]));
}

#[test]
fn test_result_count_never_exceeds_target() {
    let names: Vec<String> = (0..6)
        .flat_map(|a| (0..6).map(move |b| format!("n{} n{}", a, b)))
        .collect();
    let graph = build_graph(&names);
    for target in 1..=7 {
        for mode in [SearchMode::Chain, SearchMode::Loop] {
            let results = search(&graph, 3, mode, target).unwrap();
            assert!(results.len() <= target, "{} > {}", results.len(), target);
            for path in &results {
                assert_eq!(path.len(), 3);
                assert_connected(&graph, path);
            }
        }
    }
}

#[test]
fn test_connected_only_candidates() {
    // "ann bell" has no incoming edge, so it cannot start a chain once trimmed
    let graph = build_graph(&["ann bell", "bell cole", "cole dean"]);
    let trimmed = graph.start_candidates(true);
    let chains = search_from(&graph, &trimmed, 2, SearchMode::Chain, 5).unwrap();
    assert_eq!(chains, paths(&[&["bell cole", "cole dean"]]));

    let all = search(&graph, 2, SearchMode::Chain, 5).unwrap();
    assert_eq!(all.len(), 2);
}

// ===========================================================================
// 3. Loop canonicalisation
// ===========================================================================

#[test]
fn test_two_distinct_loops_through_shared_node() {
    // a b -> b a and a b -> b c -> c a share "a b"
    let graph = build_graph(&["a b", "b a", "b c", "c a"]);
    let two = search(&graph, 2, SearchMode::Loop, 10).unwrap();
    assert_eq!(two, paths(&[&["a b", "b a"]]));
    let three = search(&graph, 3, SearchMode::Loop, 10).unwrap();
    assert_eq!(three, paths(&[&["a b", "b c", "c a"]]));
}

#[test]
fn test_loops_never_contain_rotational_duplicates() {
    let graph = build_graph(&[
        "a b", "b c", "c a", "b d", "d a", "c d", "d b", "a c", "c b", "a d", "d c",
    ]);
    for length in 2..=4 {
        let loops = search(&graph, length, SearchMode::Loop, 50).unwrap();
        let mut canon = std::collections::HashSet::new();
        for l in &loops {
            assert!(canon.insert(namechain::canonical_rotation(l)));
            assert_eq!(&namechain::canonical_rotation(l), l);
            assert!(graph.has_edge(l.last().unwrap(), &l[0]));
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let graph = build_graph(&["a b", "b c", "c a", "b d", "d a", "c d", "d b"]);
    let first = search(&graph, 3, SearchMode::Loop, 4).unwrap();
    for _ in 0..5 {
        assert_eq!(search(&graph, 3, SearchMode::Loop, 4).unwrap(), first);
    }
}

// ===========================================================================
// 4. Middle tokens and duplicates
// ===========================================================================

#[test]
fn test_middle_token_names_link_on_first_and_last() {
    let raw = ["Paul Thomas Anderson", "Anderson Cooper", "Cooper Paul"];
    assert_eq!(parse_names(&raw).len(), 3);
    let graph = build_graph(&raw);
    let loops = search(&graph, 3, SearchMode::Loop, 5).unwrap();
    assert_eq!(
        loops,
        paths(&[&["Anderson Cooper", "Cooper Paul", "Paul Thomas Anderson"]])
    );
}

#[test]
fn test_malformed_entries_are_ignored() {
    let graph = build_graph(&["Cher", "", "   ", "Ann Bell", "Bell Ann"]);
    assert_eq!(graph.num_records(), 2);
    let loops = search(&graph, 2, SearchMode::Loop, 5).unwrap();
    assert_eq!(loops.len(), 1);
}
