//! Tree materializer - converts a declarative tree into filesystem entries.
//!
//! Walks a [`DirectoryNode`] recursively through the [`Filesystem`] port.
//! Every pre-existing target path is routed through a [`ConflictPolicy`]
//! before being touched; a denial is a silent skip, never an error.  An I/O
//! failure aborts the remaining siblings and propagates immediately, already
//! wrapped with the offending path by the port implementation.
//!
//! Recursion depth is bounded by the tree's own depth; the directory-vs-leaf
//! sum type makes cyclic trees unrepresentable, so no cycle detection exists.

use std::path::Path;

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::tree::{DirectoryNode, TreeNode},
    error::StruktResult,
};

/// Decides whether an existing target path may be overwritten or reused.
///
/// Consulted for a file node whenever the target exists at all, and for a
/// directory node only when the target exists as a non-directory.  Interactive
/// confirmation belongs to the caller: inject a closure that asks, and the
/// engine stays oblivious.
pub trait ConflictPolicy {
    fn allow(&self, target: &Path) -> bool;
}

/// The default policy: always overwrite.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overwrite;

impl ConflictPolicy for Overwrite {
    fn allow(&self, _target: &Path) -> bool {
        true
    }
}

/// Never overwrite: existing files and conflicting paths are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepExisting;

impl ConflictPolicy for KeepExisting {
    fn allow(&self, _target: &Path) -> bool {
        false
    }
}

impl<F: Fn(&Path) -> bool> ConflictPolicy for F {
    fn allow(&self, target: &Path) -> bool {
        self(target)
    }
}

/// Walks a declarative tree and performs the actual filesystem writes.
pub struct TreeMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TreeMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Materialize `tree` under `base`.
    ///
    /// `base` must be an existing, writable directory; anything else surfaces
    /// as the underlying filesystem error on the first write.
    pub fn materialize(
        &self,
        base: &Path,
        tree: &DirectoryNode,
        policy: &dyn ConflictPolicy,
    ) -> StruktResult<()> {
        for (name, node) in tree.entries() {
            let target = base.join(name);

            match node {
                TreeNode::Directory(dir) => {
                    if self.filesystem.exists(&target) && !self.filesystem.is_dir(&target) {
                        if !policy.allow(&target) {
                            debug!(path = %target.display(), "conflict: skipping subtree");
                            continue;
                        }
                        self.filesystem.remove_file(&target)?;
                    }
                    // Idempotent when the directory is already present.
                    self.filesystem.create_dir_all(&target)?;
                    self.materialize(&target, dir, policy)?;
                }
                TreeNode::File(file) => {
                    if self.filesystem.exists(&target) {
                        if !policy.allow(&target) {
                            debug!(path = %target.display(), "conflict: keeping existing file");
                            continue;
                        }
                        if self.filesystem.is_dir(&target) {
                            self.filesystem.remove_dir_all(&target)?;
                        }
                    }
                    self.filesystem.write_file(&target, file.content())?;
                }
            }
        }

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::tree::DirectoryNode;
    use std::cell::RefCell;
    use std::path::PathBuf;

    fn flat_tree() -> DirectoryNode {
        DirectoryNode::new()
            .with_file("a.php", "a")
            .with_file("b.php", "b")
    }

    #[test]
    fn writes_every_entry_on_a_clean_base() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/out/app"))
            .once()
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/out/app/a.php") && c == "a")
            .once()
            .returning(|_, _| Ok(()));

        let tree = DirectoryNode::new()
            .with_dir("app", DirectoryNode::new().with_file("a.php", "a"));
        TreeMaterializer::new(&fs)
            .materialize(Path::new("/out"), &tree, &Overwrite)
            .unwrap();
    }

    #[test]
    fn denied_file_conflict_leaves_existing_untouched() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        // write_file must never fire when the policy denies.
        fs.expect_write_file().never();

        TreeMaterializer::new(&fs)
            .materialize(Path::new("/out"), &flat_tree(), &KeepExisting)
            .unwrap();
    }

    #[test]
    fn allowed_file_conflict_overwrites() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        TreeMaterializer::new(&fs)
            .materialize(Path::new("/out"), &flat_tree(), &Overwrite)
            .unwrap();
    }

    #[test]
    fn file_node_over_existing_directory_is_replaced() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new("/out/a.php"))
            .once()
            .returning(|_| Ok(()));
        fs.expect_write_file().once().returning(|_, _| Ok(()));

        let tree = DirectoryNode::new().with_file("a.php", "a");
        TreeMaterializer::new(&fs)
            .materialize(Path::new("/out"), &tree, &Overwrite)
            .unwrap();
    }

    #[test]
    fn directory_node_blocked_by_file_skips_subtree_when_denied() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/out/app"))
            .return_const(true);
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/out/app"))
            .return_const(false);
        // Neither the directory nor anything beneath it may be touched.
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let tree = DirectoryNode::new()
            .with_dir("app", DirectoryNode::new().with_file("a.php", "a"));
        TreeMaterializer::new(&fs)
            .materialize(Path::new("/out"), &tree, &KeepExisting)
            .unwrap();
    }

    #[test]
    fn directory_node_blocked_by_file_is_replaced_when_allowed() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/out/app"))
            .return_const(true);
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().return_const(false);
        fs.expect_remove_file()
            .withf(|p| p == Path::new("/out/app"))
            .once()
            .returning(|_| Ok(()));
        fs.expect_create_dir_all().once().returning(|_| Ok(()));
        fs.expect_write_file().once().returning(|_, _| Ok(()));

        let tree = DirectoryNode::new()
            .with_dir("app", DirectoryNode::new().with_file("a.php", "a"));
        TreeMaterializer::new(&fs)
            .materialize(Path::new("/out"), &tree, &Overwrite)
            .unwrap();
    }

    #[test]
    fn io_failure_aborts_remaining_siblings() {
        use crate::application::ApplicationError;

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        // First sibling fails; the second must never be attempted.
        fs.expect_write_file()
            .withf(|p, _| p == Path::new("/out/a.php"))
            .once()
            .returning(|p, _| {
                Err(ApplicationError::Filesystem {
                    path: p.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });
        fs.expect_write_file()
            .withf(|p, _| p == Path::new("/out/b.php"))
            .never();

        let err = TreeMaterializer::new(&fs)
            .materialize(Path::new("/out"), &flat_tree(), &Overwrite)
            .unwrap_err();
        assert!(err.to_string().contains("/out/a.php"));
    }

    #[test]
    fn closure_policies_see_the_target_path() {
        let consulted: RefCell<Vec<PathBuf>> = RefCell::new(Vec::new());

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_write_file().never();

        let policy = |p: &Path| {
            consulted.borrow_mut().push(p.to_path_buf());
            false
        };
        TreeMaterializer::new(&fs)
            .materialize(Path::new("/out"), &flat_tree(), &policy)
            .unwrap();

        assert_eq!(
            consulted.into_inner(),
            vec![PathBuf::from("/out/a.php"), PathBuf::from("/out/b.php")]
        );
    }
}
