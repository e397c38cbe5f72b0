//! Application layer for Strukt.
//!
//! This layer contains:
//! - **Services**: orchestrate use cases (generate a structure, materialize
//!   a tree)
//! - **Ports**: traits the infrastructure implements (filesystem access)
//!
//! The application layer depends on the domain layer; it never depends on
//! adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::materializer::{ConflictPolicy, KeepExisting, Overwrite, TreeMaterializer};
pub use services::scaffold_service::{ScaffoldService, plan};

// Options live in the domain (generators read them) but are part of the
// request surface, so re-export them here as well.
pub use crate::domain::generators::GenerateOptions;
