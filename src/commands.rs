//! CLI command implementations

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use repograph_analyzer::{analyze_repo, AnalyzerConfig};

/// Analyze the repository rooted at `root` and write the graph JSON to `out`.
pub async fn analyze(root: PathBuf, out: PathBuf) -> anyhow::Result<()> {
    // Missing root is the one fatal precondition; check it before any
    // traversal so no partial result is produced. Canonicalizing also pins
    // the absolute paths the node identities are derived from.
    let root = root
        .canonicalize()
        .with_context(|| format!("repository root not found: {}", root.display()))?;

    tracing::info!("Analyzing repository: {}", root.display());

    let config = AnalyzerConfig::default();
    let result = analyze_repo(&root, &config).await?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create output directory {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(&result)?;
    fs::write(&out, json).with_context(|| format!("cannot write {}", out.display()))?;

    tracing::info!(
        "Graph saved to {} ({} nodes, {} edges)",
        out.display(),
        result.nodes.len(),
        result.edges.len()
    );
    Ok(())
}
