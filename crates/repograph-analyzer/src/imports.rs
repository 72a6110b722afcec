//! Import resolution: module index plus a regex-based statement scanner
//!
//! Resolution is purely syntactic and name-based. No file is opened to
//! verify an imported symbol exists, and relative-import dots get no special
//! handling. The goal is a mostly-right visualization, not build-accurate
//! dependency resolution; unresolvable imports simply emit no edge.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use repograph_core::{EdgeKind, NodeId, RepoGraph};

use crate::config::AnalyzerConfig;

/// One import statement target extracted from source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportRef {
    /// `from <base> import <name>` — resolve `base.name` as an exact module
    /// first; fall back to `base` alone, treating the name as an attribute.
    FromImport { base: String, name: String },
    /// `import <module>` — resolve the dotted path directly.
    Plain { module: String },
}

/// Extracts import references from raw source text.
///
/// This seam isolates the textual heuristic so a syntax-aware parser could
/// replace it per language without touching graph assembly.
pub trait ImportScanner: Send + Sync {
    fn scan(&self, source: &str) -> Vec<ImportRef>;
}

static FROM_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*from[ \t]+([\w.]+)[ \t]+import[ \t]+([*\w, \t]+?)[ \t]*\r?$")
        .expect("from-import pattern")
});

static PLAIN_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*import[ \t]+([\w., \t]+?)[ \t]*\r?$").expect("plain-import pattern")
});

/// Line-oriented regex scanner for Python import statements.
#[derive(Debug, Default)]
pub struct RegexScanner;

impl ImportScanner for RegexScanner {
    fn scan(&self, source: &str) -> Vec<ImportRef> {
        let mut refs = Vec::new();

        for caps in FROM_IMPORT_RE.captures_iter(source) {
            let base = caps[1].to_string();
            for name in caps[2].split(',').map(str::trim).filter(|s| !s.is_empty()) {
                refs.push(ImportRef::FromImport {
                    base: base.clone(),
                    name: name.to_string(),
                });
            }
        }

        for caps in PLAIN_IMPORT_RE.captures_iter(source) {
            for module in caps[1].split(',').map(str::trim).filter(|s| !s.is_empty()) {
                refs.push(ImportRef::Plain {
                    module: module.to_string(),
                });
            }
        }

        refs
    }
}

/// Mapping from a dotted module name to the file implementing it.
///
/// Built once per analysis run from the recognized source files, discarded
/// after resolution.
#[derive(Debug, Default)]
pub struct ModuleIndex {
    modules: HashMap<String, PathBuf>,
}

impl ModuleIndex {
    pub fn build<'a>(
        root: &Path,
        files: impl Iterator<Item = &'a PathBuf>,
        config: &AnalyzerConfig,
    ) -> Self {
        let mut modules = HashMap::new();
        for file in files.filter(|f| config.is_import_source(f)) {
            if let Some(name) = module_name(root, file) {
                modules.insert(name, file.clone());
            }
        }
        ModuleIndex { modules }
    }

    pub fn resolve(&self, module: &str) -> Option<&PathBuf> {
        self.modules.get(module)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Dotted module name from a root-relative path: `dir/file.py` -> `dir.file`.
pub fn module_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let stem = rel.with_extension("");
    let parts: Vec<String> = stem
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("."))
}

/// Scan every import-resolvable file and emit `imports` edges for the
/// references that resolve against the module index.
pub fn add_import_edges(
    graph: &mut RepoGraph,
    root: &Path,
    files: &[PathBuf],
    config: &AnalyzerConfig,
    scanner: &dyn ImportScanner,
) {
    let index = ModuleIndex::build(root, files.iter(), config);

    for file in files.iter().filter(|f| config.is_import_source(f)) {
        // Per-entry soft failure: unreadable source is skipped, not fatal.
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                debug!("skipping unreadable source {}: {err}", file.display());
                continue;
            }
        };

        for import in scanner.scan(&source) {
            let target = match &import {
                ImportRef::FromImport { base, name } => index
                    .resolve(&format!("{base}.{name}"))
                    .or_else(|| index.resolve(base)),
                ImportRef::Plain { module } => index.resolve(module),
            };
            match target {
                Some(target) => {
                    graph.add_edge(&NodeId::file(file), &NodeId::file(target), EdgeKind::Imports);
                }
                None => {
                    debug!("unresolved import {import:?} in {}", file.display());
                }
            }
        }
    }
}
