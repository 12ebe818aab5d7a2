use crate::error::{Error, Result};
use crate::model::{FileTree, Node, NodeId};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Entries skipped during a scan, by cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub long_paths_skipped: u64,
    pub permission_denied: u64,
    pub other_errors: u64,
}

impl ScanStats {
    pub fn has_errors(&self) -> bool {
        self.total_skipped() > 0
    }

    pub fn total_skipped(&self) -> u64 {
        self.long_paths_skipped + self.permission_denied + self.other_errors
    }
}

/// A finished scan: the populated tree (sizes computed) and its skip counters.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub tree: FileTree,
    pub stats: ScanStats,
}

#[cfg(any(target_os = "linux", target_os = "android"))]
const NAME_TOO_LONG: Option<i32> = Some(36);
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
const NAME_TOO_LONG: Option<i32> = Some(63);
#[cfg(windows)]
const NAME_TOO_LONG: Option<i32> = Some(206);
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
    windows
)))]
const NAME_TOO_LONG: Option<i32> = None;

/// Whether `err` is the OS "file name too long" error.
pub fn is_name_too_long(err: &io::Error) -> bool {
    match (err.raw_os_error(), NAME_TOO_LONG) {
        (Some(code), Some(expected)) => code == expected,
        _ => false,
    }
}

pub struct Scanner {
    root_path: PathBuf,
}

impl Scanner {
    pub fn new<P: AsRef<Path>>(root_path: P) -> Self {
        Self {
            root_path: root_path.as_ref().to_path_buf(),
        }
    }

    /// Walk the whole tree under the root.
    ///
    /// Only a missing or unlistable root is an error; everything below it that
    /// cannot be read is counted in [`ScanStats`] and skipped.
    pub fn scan(&self) -> Result<ScanOutcome> {
        let root_path = fs::canonicalize(&self.root_path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::NotFound {
                    path: self.root_path.clone(),
                }
            } else {
                Error::Io {
                    path: self.root_path.clone(),
                    source,
                }
            }
        })?;

        let root_name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root_path.display().to_string());
        let root = Node::new(root_name, &root_path, 0)?;
        let root_is_dir = root.is_dir;

        let mut tree = FileTree::new(root);
        let mut stats = ScanStats::default();

        if root_is_dir {
            // The root must be listable; nothing below it is fatal.
            let entries = fs::read_dir(&root_path).map_err(|source| Error::RootUnreadable {
                path: root_path.clone(),
                source,
            })?;
            let mut stack = Vec::new();
            let root_id = tree.root();
            self.add_entries(&mut tree, root_id, entries, &mut stats, &mut stack);

            while let Some(dir_id) = stack.pop() {
                let dir_path = tree.node(dir_id).path.clone();
                match fs::read_dir(&dir_path) {
                    Ok(entries) => {
                        self.add_entries(&mut tree, dir_id, entries, &mut stats, &mut stack)
                    }
                    Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                        debug!("Permission denied: {}", dir_path.display());
                        stats.permission_denied += 1;
                    }
                    Err(e) => {
                        debug!("Cannot read {}: {}", dir_path.display(), e);
                        stats.other_errors += 1;
                    }
                }
            }
        }

        tree.compute_sizes(|path| fs::symlink_metadata(path).map(|m| m.len()).unwrap_or(0));

        info!(
            "Scanned {} ({} nodes, {} bytes, {} skipped)",
            root_path.display(),
            tree.len(),
            tree.total_size(),
            stats.total_skipped()
        );

        Ok(ScanOutcome { tree, stats })
    }

    /// Add the listed entries of `parent` to the tree, queueing subdirectories.
    fn add_entries(
        &self,
        tree: &mut FileTree,
        parent: NodeId,
        entries: fs::ReadDir,
        stats: &mut ScanStats,
        stack: &mut Vec<NodeId>,
    ) {
        let depth = tree.node(parent).depth + 1;

        let mut listed = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => listed.push(entry),
                Err(e) => record_skip(stats, &e, &tree.node(parent).path),
            }
        }
        // read_dir order is platform dependent
        listed.sort_by_key(|e| e.file_name());

        let mut subdirs = Vec::new();
        for entry in listed {
            let name = entry.file_name().to_string_lossy().into_owned();
            match Node::new(name, entry.path(), depth) {
                Ok(node) => {
                    let is_dir = node.is_dir;
                    let id = tree.add_child(parent, node);
                    if is_dir {
                        subdirs.push(id);
                    }
                }
                Err(Error::NotFound { path }) => {
                    debug!("Vanished during scan: {}", path.display());
                    stats.other_errors += 1;
                }
                Err(err) => match err.io_source() {
                    Some(source) => record_skip(stats, source, &entry.path()),
                    None => stats.other_errors += 1,
                },
            }
        }

        // Reversed so the first subdirectory is popped first
        stack.extend(subdirs.into_iter().rev());
    }
}

fn record_skip(stats: &mut ScanStats, err: &io::Error, path: &Path) {
    if is_name_too_long(err) {
        debug!("Path too long: {}", path.display());
        stats.long_paths_skipped += 1;
    } else {
        debug!("Skipping {}: {}", path.display(), err);
        stats.other_errors += 1;
    }
}
