pub mod clean;
pub mod letters;
pub mod search;
pub mod stats;

use anyhow::{Context, Result};
use namechain::graph::NameGraph;
use namechain::names::load_names;
use std::path::Path;

/// Load a name list and build its graph.
///
/// A missing or malformed file, or a list with no usable two-part names,
/// aborts the command.
pub fn load_name_graph(input: &Path) -> Result<(usize, NameGraph)> {
    let names = load_names(input)
        .with_context(|| format!("No names loaded from {}, aborting.", input.display()))?;
    if names.is_empty() {
        anyhow::bail!("No names loaded from {}, aborting.", input.display());
    }

    let graph = namechain::build_graph(&names);
    if graph.num_records() == 0 {
        anyhow::bail!(
            "None of the {} names in {} has two parts, aborting.",
            names.len(),
            input.display()
        );
    }
    Ok((names.len(), graph))
}
