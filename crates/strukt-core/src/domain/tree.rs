//! Declarative file tree built by generators, consumed by the materializer.
//!
//! The tree is an explicit recursive sum type: a node is *either* a directory
//! (ordered, uniquely-named children) *or* a file (opaque content payload) —
//! never both.  The type system enforces the invariant; generators cannot
//! produce a node that is simultaneously a leaf and a branch, which also
//! makes cycles unrepresentable.
//!
//! Trees are transient: built fresh per generation request, walked once by
//! the materializer, then dropped.

use std::path::PathBuf;

/// A node in the declarative tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Directory(DirectoryNode),
    File(FileNode),
}

/// A leaf file: an opaque content payload.
///
/// The engine never inspects the content; it is written to disk verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct FileNode {
    content: String,
}

impl FileNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A directory: insertion-ordered mapping from child name to child node.
///
/// Child names are unique within a directory.  A collision between two
/// structural contributions is a construction-time bug in a generator, not a
/// runtime condition — [`DirectoryNode::insert`] panics on duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryNode {
    entries: Vec<(String, TreeNode)>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a child node.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already present — generators must produce
    /// internally consistent trees.
    pub fn insert(&mut self, name: impl Into<String>, node: TreeNode) {
        let name = name.into();
        assert!(
            !self.contains(&name),
            "duplicate entry '{name}' in directory node"
        );
        self.entries.push((name, node));
    }

    /// Insert a leaf file.
    pub fn insert_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.insert(name, TreeNode::File(FileNode::new(content)));
    }

    /// Insert a child directory.
    pub fn insert_dir(&mut self, name: impl Into<String>, dir: DirectoryNode) {
        self.insert(name, TreeNode::Directory(dir));
    }

    /// Builder-style [`Self::insert_file`].
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert_file(name, content);
        self
    }

    /// Builder-style [`Self::insert_dir`].
    pub fn with_dir(mut self, name: impl Into<String>, dir: DirectoryNode) -> Self {
        self.insert_dir(name, dir);
        self
    }

    /// Insert a leaf file, replacing any existing entry with the same name.
    ///
    /// Used by the orchestrator when merging cross-cutting artifacts into an
    /// already-built tree; sibling entries are never touched.
    pub fn upsert_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = TreeNode::File(FileNode::new(content));
        } else {
            self.entries.push((name, TreeNode::File(FileNode::new(content))));
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Child entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.entries.iter().map(|(n, node)| (n.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every path in the tree (directories and files), relative to this node.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        self.collect_paths(&PathBuf::new(), &mut out);
        out
    }

    fn collect_paths(&self, prefix: &PathBuf, out: &mut Vec<PathBuf>) {
        for (name, node) in self.entries() {
            let path = prefix.join(name);
            out.push(path.clone());
            if let TreeNode::Directory(dir) = node {
                dir.collect_paths(&path, out);
            }
        }
    }

    /// Look up a file by slash-separated relative path.
    ///
    /// Returns `None` when the path is missing or names a directory.
    pub fn file_at(&self, path: &str) -> Option<&str> {
        let mut current = self;
        let mut segments = path.split('/').peekable();
        while let Some(segment) = segments.next() {
            match current.get(segment)? {
                TreeNode::Directory(dir) => current = dir,
                TreeNode::File(file) => {
                    return segments.peek().is_none().then_some(file.content());
                }
            }
        }
        None
    }

    /// Number of leaf files in the whole subtree.
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                TreeNode::File(_) => 1,
                TreeNode::Directory(dir) => dir.file_count(),
            })
            .sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample() -> DirectoryNode {
        DirectoryNode::new()
            .with_dir(
                "app",
                DirectoryNode::new()
                    .with_dir(
                        "Controllers",
                        DirectoryNode::new().with_file("OrderController.php", "<?php"),
                    )
                    .with_file("helpers.php", "<?php"),
            )
            .with_file("composer.json", "{}")
    }

    #[test]
    fn insertion_order_is_preserved() {
        let tree = sample();
        let names: Vec<_> = tree.entries().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["app", "composer.json"]);
    }

    #[test]
    #[should_panic(expected = "duplicate entry")]
    fn duplicate_insert_panics() {
        let mut dir = DirectoryNode::new();
        dir.insert_file("a.php", "x");
        dir.insert_file("a.php", "y");
    }

    #[test]
    fn upsert_replaces_without_touching_siblings() {
        let mut tree = sample();
        tree.upsert_file("composer.json", "replaced");
        tree.upsert_file(".gitignore", "vendor/");

        assert_eq!(tree.file_at("composer.json"), Some("replaced"));
        assert_eq!(tree.file_at(".gitignore"), Some("vendor/"));
        assert!(tree.contains("app"), "sibling directory must survive");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn paths_enumerates_all_entries() {
        let paths = sample().paths();
        let expected: Vec<PathBuf> = [
            "app",
            "app/Controllers",
            "app/Controllers/OrderController.php",
            "app/helpers.php",
            "composer.json",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn file_at_resolves_nested_paths() {
        let tree = sample();
        assert_eq!(
            tree.file_at("app/Controllers/OrderController.php"),
            Some("<?php")
        );
        assert_eq!(tree.file_at("app/Controllers"), None, "directory, not file");
        assert_eq!(tree.file_at("app/missing.php"), None);
    }

    #[test]
    fn file_count_counts_leaves_only() {
        assert_eq!(sample().file_count(), 3);
    }

    #[test]
    fn paths_join_cleanly() {
        // Paths are relative; joining onto a base never escapes it.
        for p in sample().paths() {
            assert!(!p.is_absolute());
            assert!(Path::new("/root").join(&p).starts_with("/root"));
        }
    }
}
