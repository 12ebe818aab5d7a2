//! In-memory file tree produced by a scan
//!
//! Nodes live in one arena `Vec<Node>` in discovery order. A directory owns
//! its children through a list of [`NodeId`]s; since a child is always pushed
//! after its parent, walking the arena backwards visits children first.

use crate::category::{classify, extension_of, Category};
use crate::error::{Error, Result};
use crate::style::{Style, StyleManager};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Index of a node in its [`FileTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One file or directory.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub path: PathBuf,
    pub depth: usize,
    pub is_dir: bool,
    /// Files: byte length. Directories: sum of children.
    pub size: u64,
    /// Lowercase extension with its dot, empty for directories.
    pub extension: String,
    pub category: Category,
    pub style: Option<Style>,
    children: Vec<NodeId>,
}

impl Node {
    /// Build a node for an existing path.
    ///
    /// Symlinks are not followed, so a link to a directory is a leaf. Fails
    /// with [`Error::NotFound`] if nothing exists at `path`.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, depth: usize) -> Result<Self> {
        let path = path.into();
        let metadata = fs::symlink_metadata(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::NotFound { path: path.clone() }
            } else {
                Error::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        Ok(Self::with_kind(name, path, depth, metadata.is_dir()))
    }

    /// Build a node without touching the filesystem.
    pub fn with_kind(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        depth: usize,
        is_dir: bool,
    ) -> Self {
        let name = name.into();
        let (extension, category) = if is_dir {
            (String::new(), Category::Other)
        } else {
            let extension = extension_of(&name)
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            (extension, classify(&name))
        };
        Self {
            name,
            path: path.into(),
            depth,
            is_dir,
            size: 0,
            extension,
            category,
            style: None,
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The assigned style, or the unassigned fallback.
    pub fn effective_style(&self) -> Style {
        match self.style {
            Some(style) => style,
            None if self.is_dir => Style::DIRECTORY,
            None => Style::fallback(self.category),
        }
    }

    pub fn set_style(&mut self, manager: &StyleManager) {
        self.style = Some(manager.style_for(&self.extension, self.category, self.is_dir));
    }
}

/// Arena of nodes with a single root at index 0.
#[derive(Debug, Clone)]
pub struct FileTree {
    nodes: Vec<Node>,
}

impl FileTree {
    pub fn new(root: Node) -> Self {
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Append `child` under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, child: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.nodes[id.0].children.iter().map(|c| &self.nodes[c.0])
    }

    /// Every node, root first, in discovery order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn file_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| !n.is_dir)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.nodes[0].size
    }

    /// Single bottom-up pass: files get `file_size(path)`, directories the
    /// sum of their children.
    pub fn compute_sizes<F>(&mut self, mut file_size: F)
    where
        F: FnMut(&Path) -> u64,
    {
        for i in (0..self.nodes.len()).rev() {
            let size = if self.nodes[i].is_dir {
                self.nodes[i]
                    .children
                    .iter()
                    .map(|c| self.nodes[c.0].size)
                    .sum()
            } else {
                file_size(&self.nodes[i].path)
            };
            self.nodes[i].size = size;
        }
    }

    /// Feed every file into `manager`. Directories are never recorded.
    pub fn record_extensions(&self, manager: &mut StyleManager) {
        for node in self.file_nodes() {
            manager.record_extension(&node.extension, node.size);
        }
    }

    pub fn apply_styles(&mut self, manager: &StyleManager) {
        for node in &mut self.nodes {
            node.set_style(manager);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Swatch;
    use crate::style::StyleMode;
    use std::fs;
    use tempfile::TempDir;

    /// root(dir) -> [a.py 1000, b.txt 500, sub(dir) -> [c.jpg 800]]
    fn build_tree() -> FileTree {
        let mut tree = FileTree::new(Node::with_kind("root", "/fake/root", 0, true));
        let root = tree.root();
        tree.add_child(root, Node::with_kind("a.py", "/fake/root/a.py", 1, false));
        tree.add_child(root, Node::with_kind("b.txt", "/fake/root/b.txt", 1, false));
        let sub = tree.add_child(root, Node::with_kind("sub", "/fake/root/sub", 1, true));
        tree.add_child(sub, Node::with_kind("c.jpg", "/fake/root/sub/c.jpg", 2, false));
        tree
    }

    fn fake_size(path: &Path) -> u64 {
        match path.extension().and_then(|e| e.to_str()) {
            Some("py") => 1000,
            Some("txt") => 500,
            Some("jpg") => 800,
            _ => 100,
        }
    }

    #[test]
    fn test_node_new_missing_path() {
        let err = Node::new("test.py", "/nonexistent/test.py", 0).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_node_new_file_and_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Test.PY");
        fs::write(&file, b"print()").unwrap();

        let node = Node::new("Test.PY", &file, 1).unwrap();
        assert!(!node.is_dir);
        assert_eq!(node.extension, ".py");
        assert_eq!(node.category, Category::Code);
        assert_eq!(node.depth, 1);
        assert!(node.style.is_none());

        let dir = Node::new("tmp", temp_dir.path(), 0).unwrap();
        assert!(dir.is_dir);
        assert_eq!(dir.extension, "");
        assert_eq!(dir.category, Category::Other);
    }

    #[test]
    fn test_extensionless_and_special_files() {
        let makefile = Node::with_kind("Makefile", "/p/Makefile", 1, false);
        assert_eq!(makefile.extension, "");
        assert_eq!(makefile.category, Category::Config);

        let readme = Node::with_kind("README", "/p/README", 1, false);
        assert_eq!(readme.extension, "");
        assert_eq!(readme.category, Category::Other);
    }

    #[test]
    fn test_compute_sizes_bottom_up() {
        let mut tree = build_tree();
        tree.compute_sizes(fake_size);

        assert_eq!(tree.total_size(), 2300);
        let sub = tree.nodes().iter().find(|n| n.name == "sub").unwrap();
        assert_eq!(sub.size, 800);

        for node in tree.nodes().iter().filter(|n| n.is_dir) {
            let sum: u64 = node.children().iter().map(|&c| tree.node(c).size).sum();
            assert_eq!(node.size, sum, "{}", node.name);
        }
    }

    #[test]
    fn test_record_and_apply_styles() {
        let mut tree = build_tree();
        tree.compute_sizes(fake_size);

        let mut manager = StyleManager::new();
        tree.record_extensions(&mut manager);
        assert_eq!(manager.total_bytes(), 2300);
        assert_eq!(manager.ext_size(".jpg"), 800);

        manager.assign_styles(StyleMode::Simplified);
        tree.apply_styles(&manager);

        for node in tree.nodes() {
            let style = node.style.expect("style assigned");
            assert_eq!(style.swatch, Swatch::Neutral);
            if node.is_dir {
                assert_eq!(style, Style::DIRECTORY);
            }
        }
    }

    #[test]
    fn test_children_iteration() {
        let tree = build_tree();
        let names: Vec<&str> = tree.children(tree.root()).map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a.py", "b.txt", "sub"]);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.file_nodes().count(), 3);
    }
}
