//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `strukt-adapters` implement these.

use std::path::Path;

use crate::error::StruktResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strukt_adapters::filesystem::LocalFilesystem` (production)
/// - `strukt_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Every fallible operation wraps the underlying I/O error together with
///   the offending path, so the materializer can propagate failures verbatim
/// - `exists` / `is_dir` are the two probes the conflict algorithm needs to
///   distinguish a blocking file from a reusable directory
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories (idempotent).
    fn create_dir_all(&self, path: &Path) -> StruktResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> StruktResult<()>;

    /// Check if path exists (as a file or a directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> StruktResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StruktResult<()>;
}
