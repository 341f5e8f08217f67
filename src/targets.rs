use std::fs;
use std::path::Path;

use anyhow::{bail, Context};

/// Resolve the target list from positional arguments or an input file.
///
/// A missing input file is a hard error so the run fails before any network
/// activity instead of proceeding with an empty list.
pub fn resolve(targets: &[String], input_file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let out: Vec<String> = match input_file {
        Some(path) => {
            if !path.exists() {
                bail!("targets file {} does not exist", path.display());
            }
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            data.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect()
        }
        None => targets
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    };
    if out.is_empty() {
        bail!("no targets to process");
    }
    Ok(out)
}
