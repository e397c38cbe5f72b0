//! Core domain layer for Strukt.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Generators only build declarative trees; they never touch disk
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable registry**: The style catalog is `static` and read-only

// Public API - what the world sees
pub mod entity;
pub mod error;
pub mod generators;
pub mod registry;
pub mod tree;

// Re-exports for convenience
pub use entity::EntityName;
pub use error::{DomainError, ErrorCategory};
pub use generators::{ClassicGenerator, GenerateOptions, Generator, MvcAdvancedGenerator, MvpGenerator};
pub use registry::{GeneratorKind, StyleDef, all_styles, find_style, style_ids};
pub use tree::{DirectoryNode, FileNode, TreeNode};
