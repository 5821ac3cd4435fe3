use anyhow::{Context, Result};
use namechain::names::{clean_names, load_names, save_names};
use std::path::Path;

pub fn run(input: &Path, output: &Path, strict: bool, json: bool) -> Result<()> {
    let names = load_names(input)
        .with_context(|| format!("Failed to load names from {}", input.display()))?;

    let cleaned = clean_names(&names, strict);
    save_names(&cleaned, output)
        .with_context(|| format!("Failed to save names to {}", output.display()))?;

    log::info!(
        "cleaned {} -> {} ({} dropped)",
        input.display(),
        output.display(),
        names.len() - cleaned.len()
    );

    if json {
        let out = serde_json::json!({
            "input": input.display().to_string(),
            "output": output.display().to_string(),
            "total": names.len(),
            "kept": cleaned.len(),
            "strict": strict,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Cleaned {} names out of {}.", cleaned.len(), names.len());
        println!("Saved cleaned names to '{}'.", output.display());
    }

    Ok(())
}
