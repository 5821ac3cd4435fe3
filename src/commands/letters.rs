use anyhow::{Context, Result};
use namechain::letters::{
    DEFAULT_BAR_WIDTH, count_starting_letters, normalize, render_histogram, save_frequencies,
};
use std::path::Path;

pub fn run(data_dir: &Path, output: &Path, json: bool) -> Result<()> {
    let counts = count_starting_letters(data_dir)
        .with_context(|| format!("Failed to count names in {}", data_dir.display()))?;
    let freqs = normalize(&counts);
    save_frequencies(&freqs, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if json {
        let out = serde_json::json!({
            "output": output.display().to_string(),
            "counts": counts,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Normalized letter counts saved to '{}'.", output.display());
    println!("\nLETTER FREQUENCY HISTOGRAM:");
    for line in render_histogram(&counts, DEFAULT_BAR_WIDTH) {
        println!("{}", line);
    }
    Ok(())
}
