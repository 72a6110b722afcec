//! Analyzer configuration: exclusion patterns and extension allow-lists

use std::path::Path;

use anyhow::Result;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Configuration for one analysis run.
///
/// All lists are overridable so the pipeline can be exercised against
/// synthetic trees; `Default` carries the production values.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Directory-name patterns pruned during traversal (version-control
    /// metadata, dependency caches, build output). Matched case-insensitively
    /// against the directory name, not the full path.
    pub excluded_dirs: Vec<String>,
    /// Extensions whose files receive nodes in the graph. Other files are
    /// still inventoried for ancestor-directory completeness.
    pub code_extensions: Vec<String>,
    /// Extension of the one source language whose imports are resolved.
    pub import_extension: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            excluded_dirs: [
                ".git",
                ".hg",
                ".svn",
                "node_modules",
                "dist",
                "build",
                ".next",
                "target",
                "__pycache__",
                ".venv",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            code_extensions: ["js", "jsx", "ts", "tsx", "py"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            import_extension: "py".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Compile the excluded-directory patterns into a matcher.
    pub fn exclusion_matcher(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.excluded_dirs {
            builder.add(GlobBuilder::new(pattern).case_insensitive(true).build()?);
        }
        Ok(builder.build()?)
    }

    /// Whether this file gets a node in the graph.
    pub fn is_code_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.code_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    /// Whether this file participates in import resolution.
    pub fn is_import_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.import_extension))
    }
}
