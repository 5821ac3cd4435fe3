use anyhow::Result;
use std::path::Path;

use super::load_name_graph;
use super::search::print_stats;

pub fn run(input: &Path, json: bool) -> Result<()> {
    let (_, graph) = load_name_graph(input)?;
    let stats = graph.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(stats);
    }
    Ok(())
}
