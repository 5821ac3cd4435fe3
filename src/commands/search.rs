use anyhow::Result;
use crossterm::style::Stylize;
use namechain::graph::GraphStats;
use namechain::search::{LengthOutcome, SearchMode, search_lengths};
use namechain::Config;

use super::load_name_graph;

pub fn run(config: &Config, json: bool) -> Result<()> {
    let (loaded, graph) = load_name_graph(&config.input)?;
    if !json {
        println!("Loaded {} names", loaded);
    }

    let candidates = graph.start_candidates(config.connected_only);
    log::info!(
        "{} nodes, {} start candidates",
        graph.num_nodes(),
        candidates.len()
    );

    if !json {
        println!("{}", "\nGraph has been built. Starting search...".green());
    }

    let outcomes = search_lengths(
        &graph,
        &candidates,
        config.min_length..=config.max_length,
        config.mode,
        config.max_per_length,
        config.parallel,
    );

    for outcome in &outcomes {
        if let Err(e) = &outcome.result {
            log::warn!("skipping length {}: {}", outcome.length, e);
        }
    }

    if json {
        print_json(config.mode, &outcomes, graph.stats())?;
    } else {
        print_human(config.mode, &outcomes, graph.stats());
    }

    Ok(())
}

/// Renders one result; loops repeat their first name at the end.
pub fn format_path(mode: SearchMode, path: &[String]) -> String {
    let mut parts: Vec<&str> = path.iter().map(String::as_str).collect();
    if mode == SearchMode::Loop
        && let Some(first) = path.first()
    {
        parts.push(first);
    }
    parts.join(" → ")
}

fn print_json(mode: SearchMode, outcomes: &[LengthOutcome], stats: GraphStats) -> Result<()> {
    let lengths: Vec<_> = outcomes
        .iter()
        .map(|o| match &o.result {
            Ok(results) => serde_json::json!({
                "length": o.length,
                "count": results.len(),
                "results": results,
            }),
            Err(e) => serde_json::json!({
                "length": o.length,
                "count": 0,
                "results": [],
                "error": e.to_string(),
            }),
        })
        .collect();

    let output = serde_json::json!({
        "mode": mode,
        "lengths": lengths,
        "stats": stats,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_human(mode: SearchMode, outcomes: &[LengthOutcome], stats: GraphStats) {
    for outcome in outcomes {
        println!(
            "{}",
            format!("\n=== Finding {}s of length {} ===", mode, outcome.length).green()
        );
        let results = match &outcome.result {
            Ok(results) => results,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };
        println!("{}", format!("Found {} {}s", results.len(), mode).yellow());
        for (i, path) in results.iter().enumerate() {
            println!("{} {}: {}", mode.label(), i + 1, format_path(mode, path));
        }
    }

    print_stats(stats);
}

pub fn print_stats(stats: GraphStats) {
    println!("{}", "\n--- Statistics ---".green());
    println!("Total names processed: {}", stats.names_processed);
    println!(
        "Names with connections (nodes in graph): {}",
        stats.nodes_with_edges
    );
    println!("Total connections (edges in graph): {}", stats.edges);
}
