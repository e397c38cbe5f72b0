//! The entity name value object.
//!
//! Every generated artifact is named after a single user-supplied domain noun
//! (e.g. `Order`, `Product`).  [`EntityName`] is the validated form of that
//! noun: purely alphabetic and non-empty.  Validation happens once, at the
//! boundary where the generation request is resolved — the generators and the
//! materializer trust the invariant and never re-check it.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A validated entity name: one or more ASCII letters, nothing else.
///
/// Three projections cover every place the entity appears in generated
/// output.  Each is a deterministic, total function of the name:
///
/// | Projection    | Example (`Order`) | Used for                           |
/// |---------------|-------------------|------------------------------------|
/// | `canonical()` | `Order`           | class names and class file names   |
/// | `lower()`     | `order`           | view directories, function prefixes|
/// | `plural()`    | `orders`          | route paths and table names        |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Validate and wrap an entity name.
    ///
    /// Rejects anything that is empty or contains a non-letter character.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidEntityName { name });
        }
        Ok(Self(name))
    }

    /// The name exactly as supplied.
    pub fn canonical(&self) -> &str {
        &self.0
    }

    /// Lower-cased form.
    pub fn lower(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Pluralized lower-cased form (naive `s` suffix, matching the shape of
    /// the generated route paths and table names).
    pub fn plural(&self) -> String {
        let mut s = self.lower();
        s.push('s');
        s
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
