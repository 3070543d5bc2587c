use std::path::Path;

use anyhow::{Context, Result};
use forkwise::presentation::{create_resolve_use_case, output, OutputFormat, PathsReport};

/// One path per line so shell scripts can consume it directly
pub fn cmd_paths(root: &Path, network: &str, json: bool) -> Result<()> {
    let resolved = create_resolve_use_case(root)?.execute(root)?;
    let report = PathsReport::build(&resolved.config, network)?;

    if json {
        let encoded = output::encode(OutputFormat::Json, &report)
            .context("rendering search paths")?
            .unwrap_or_default();
        println!("{}", encoded);
        return Ok(());
    }

    for path in &report.search_paths {
        println!("{}", path.display());
    }
    Ok(())
}
