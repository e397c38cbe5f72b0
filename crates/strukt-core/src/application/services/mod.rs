//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "generate a structure at this root".

pub mod materializer;
pub mod scaffold_service;

pub use materializer::{ConflictPolicy, KeepExisting, Overwrite, TreeMaterializer};
pub use scaffold_service::ScaffoldService;
