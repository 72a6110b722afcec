//! Filesystem traversal: enumerate entries under a root, pruning excluded
//! directories

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use ignore::WalkBuilder;
use tracing::debug;

/// Classified traversal output: every reachable directory (including
/// ancestors of matched files and the root itself) and every regular file.
#[derive(Debug, Default)]
pub struct Traversal {
    pub dirs: HashSet<PathBuf>,
    pub files: HashSet<PathBuf>,
}

/// Walk the tree under `root`, skipping directories whose name matches
/// `excluded`.
///
/// This is a best-effort inventory: entries that cannot be read or typed
/// (permissions, races, broken links) are skipped silently. The root is
/// always part of the directory set, even when the walk finds nothing.
pub fn traverse(root: &Path, excluded: &GlobSet) -> Traversal {
    let mut traversal = Traversal::default();

    let excluded = excluded.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && excluded.is_match(Path::new(entry.file_name())))
        })
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.into_path();

        if file_type.is_dir() {
            traversal.dirs.insert(path);
        } else if file_type.is_file() {
            // Every ancestor up to the root belongs to the directory set,
            // even if traversal yields no other entry for it. Stop once a
            // path escapes the root or the filesystem root is reached.
            let mut current = path.parent();
            while let Some(dir) = current {
                if !dir.starts_with(root) {
                    break;
                }
                traversal.dirs.insert(dir.to_path_buf());
                current = dir.parent();
            }
            traversal.files.insert(path);
        }
        // Other entry types (sockets, symlinks with follow off) are skipped.
    }

    traversal.dirs.insert(root.to_path_buf());
    traversal
}
