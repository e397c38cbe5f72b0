//! Strukt Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strukt
//! PHP structure scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strukt-cli (CLI)              │
//! │     (Resolves the generation request)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TreeMaterializer)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    strukt-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (EntityName, DirectoryNode, Registry,  │
//! │          Per-Style Generators)          │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strukt_core::{
//!     application::{GenerateOptions, ScaffoldService},
//!     domain::EntityName,
//! };
//!
//! // 1. Resolve the request (validation is the caller's job)
//! let entity = EntityName::new("Order").unwrap();
//!
//! // 2. Use the application service (with an injected filesystem adapter)
//! let service = ScaffoldService::new(filesystem);
//! service.generate("/tmp/proj".as_ref(), "mvc", &entity, &GenerateOptions::default()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, ScaffoldService, TreeMaterializer,
        ports::Filesystem,
        services::materializer::{ConflictPolicy, KeepExisting, Overwrite},
    };
    pub use crate::domain::{
        DirectoryNode, EntityName, FileNode, TreeNode,
        registry::{self, GeneratorKind, StyleDef},
    };
    pub use crate::error::{StruktError, StruktResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
