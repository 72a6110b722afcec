//! Repograph Analyzer — repository analysis pipeline
//!
//! Three sequential stages over one in-memory traversal: enumerate the tree,
//! build directory/file nodes with hierarchy edges, then resolve Python
//! imports into dependency edges.
//!
//! ```rust,no_run
//! use repograph_analyzer::{analyze_repo, AnalyzerConfig};
//! use std::path::Path;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = AnalyzerConfig::default();
//! let result = analyze_repo(Path::new("/path/to/repo"), &config).await?;
//! println!("{} nodes, {} edges", result.nodes.len(), result.edges.len());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod imports;
pub mod traverser;


#[cfg(test)]
pub mod test_utils;

pub use config::AnalyzerConfig;
pub use imports::{ImportRef, ImportScanner, ModuleIndex, RegexScanner};
pub use traverser::Traversal;

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

use repograph_core::{AnalysisResult, Meta, NodeKind};

/// Analyze the repository rooted at `root`, stamping the result with the
/// current time.
///
/// The caller is responsible for checking that `root` exists; a missing root
/// degenerates to an empty tree containing only the root node.
pub async fn analyze_repo(root: &Path, config: &AnalyzerConfig) -> Result<AnalysisResult> {
    analyze_repo_at(root, config, Utc::now()).await
}

/// The full pipeline as a pure function of (root, config, timestamp).
///
/// The timestamp is explicit so tests can pin it; repeated runs against an
/// unchanged tree differ only in `meta.generated_at`.
pub async fn analyze_repo_at(
    root: &Path,
    config: &AnalyzerConfig,
    generated_at: DateTime<Utc>,
) -> Result<AnalysisResult> {
    let excluded = config.exclusion_matcher()?;

    let traversal = traverser::traverse(root, &excluded);
    debug!(
        "traversed {} directories, {} files under {}",
        traversal.dirs.len(),
        traversal.files.len(),
        root.display()
    );

    let files = builder::code_files(&traversal, config);
    let mut graph = builder::build_hierarchy(root, &traversal.dirs, &files);

    imports::add_import_edges(&mut graph, root, &files, config, &RegexScanner);

    let meta = Meta {
        repo: root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string()),
        generated_at,
        file_count: graph.kind_count(NodeKind::File),
        dir_count: graph.kind_count(NodeKind::Dir),
    };

    Ok(graph.into_result(meta))
}
