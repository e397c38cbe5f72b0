//! Per-style structure generators.
//!
//! Each generator is a pure function from (entity, options) to a declarative
//! [`DirectoryNode`] tree — no I/O ever happens here.  Dispatch is by registry
//! lookup over the single [`Generator`] capability, not by inheritance.
//!
//! Template payloads are `&'static str` consts with `{{ENTITY}}`,
//! `{{ENTITY_LOWER}}` and `{{ENTITY_PLURAL}}` placeholders, filled by
//! [`fill`].  The engine treats the filled content as opaque data.

use crate::domain::{entity::EntityName, error::DomainError, registry::{GeneratorKind, StyleDef}, tree::DirectoryNode};

mod artifacts;
mod classic;
mod mvc_advanced;
mod mvp;

pub use artifacts::{docker_compose, dockerfile, dockerignore, gitignore};
pub use classic::ClassicGenerator;
pub use mvc_advanced::MvcAdvancedGenerator;
pub use mvp::MvpGenerator;

/// The single generator capability.
///
/// Implementations must be pure with respect to the filesystem: they build
/// and return the tree, nothing else.
#[cfg_attr(test, mockall::automock)]
pub trait Generator {
    fn generate(
        &self,
        entity: &EntityName,
        options: &GenerateOptions,
    ) -> Result<DirectoryNode, DomainError>;
}

/// Resolved options of a generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Selected component labels.  `None` means "all components" (opt-out
    /// model); `Some(vec![])` deselects every optional branch.
    pub components: Option<Vec<String>>,

    /// Merge containerization artifacts (compose descriptor, build
    /// descriptor, ignore file) into the tree root.
    pub include_docker: bool,

    /// Emit the dedicated generators' test branches.
    pub include_tests: bool,

    /// Merge a `.gitignore` into the tree root.
    pub include_gitignore: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            components: None,
            include_docker: false,
            include_tests: true,
            include_gitignore: false,
        }
    }
}

impl GenerateOptions {
    /// Whether a structural branch labelled `component` should be included.
    ///
    /// Matching is case-insensitive: the labels come from a CLI flag, not
    /// from a controlled picker.
    pub fn wants(&self, component: &str) -> bool {
        match &self.components {
            None => true,
            Some(selected) => selected.iter().any(|c| c.eq_ignore_ascii_case(component)),
        }
    }
}

/// Instantiate the generator a style definition points at.
pub fn generator_for(style: &StyleDef) -> Box<dyn Generator> {
    match style.generator {
        GeneratorKind::Classic => Box::new(ClassicGenerator::new(style.id)),
        GeneratorKind::MvcAdvanced => Box::new(MvcAdvancedGenerator),
        GeneratorKind::Mvp => Box::new(MvpGenerator),
    }
}

/// Fill entity placeholders in a template payload.
pub(crate) fn fill(template: &str, entity: &EntityName) -> String {
    template
        .replace("{{ENTITY}}", entity.canonical())
        .replace("{{ENTITY_LOWER}}", &entity.lower())
        .replace("{{ENTITY_PLURAL}}", &entity.plural())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
