//! Architecture style registry.
//!
//! Single source of truth for every scaffoldable style: id, display metadata,
//! the ordered list of selectable components, and which generator builds the
//! tree.  Populated once at compile time, read-only afterward; all lookups
//! are O(n) scans over a `static` slice.
//!
//! Lookup of an unknown id returns `None` — absence is a normal outcome the
//! orchestrator handles by falling back to the classic generator, never an
//! error from this layer.
//!
//! # Adding a New Style
//!
//! 1. Add one [`StyleDef`] entry to [`STYLE_REGISTRY`]
//! 2. Point it at an existing [`GeneratorKind`], or add a generator under
//!    `domain::generators` and a variant for it
//! 3. That's it — resolution, listing, and fallback derive from the registry

use serde::Serialize;

/// Which generator implementation builds a style's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    /// The legacy single-function generator, parameterized by style id and a
    /// component-selection predicate.  Also the fallback for every style
    /// without a dedicated implementation and for dedicated-generator
    /// failures.
    Classic,
    /// Richly-branching modern MVC layout (routing, DI, migrations, assets).
    MvcAdvanced,
    /// Model-View-Presenter layout.
    Mvp,
}

/// Describes everything the engine needs to know about one style.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StyleDef {
    /// Canonical style id.  Lookup is case-insensitive, so the UI-facing
    /// tokens (`MVC`, `Functional`) resolve to their lower-case entries.
    pub id: &'static str,

    /// Human-readable name for listings.
    pub display_name: &'static str,

    /// One-line description for listings.
    pub description: &'static str,

    /// Selectable components, in display order, unique.
    ///
    /// When a generation request carries no component selection, every
    /// component is included (opt-out model).
    pub components: &'static [&'static str],

    /// The generator responsible for this style.
    pub generator: GeneratorKind,
}

/// The fixed style catalog.
pub static STYLE_REGISTRY: &[StyleDef] = &[
    StyleDef {
        id: "mvc",
        display_name: "MVC",
        description: "Classic Model-View-Controller structure with web routes",
        components: &["Controller", "Model", "View", "Routes", "Config", "Composer"],
        generator: GeneratorKind::Classic,
    },
    StyleDef {
        id: "rest",
        display_name: "REST API",
        description: "RESTful API structure with middleware and JSON routes",
        components: &["Controller", "Model", "Middleware", "Routes", "Config", "Composer"],
        generator: GeneratorKind::Classic,
    },
    StyleDef {
        id: "functional",
        display_name: "Functional PHP",
        description: "Procedural structure with a plain public front controller",
        components: &["Controller", "Model", "Public", "Config", "Composer"],
        generator: GeneratorKind::Classic,
    },
    StyleDef {
        id: "mvc-advanced",
        display_name: "MVC Advanced",
        description: "Modern MVC with routing, middleware and dependency injection",
        components: &[
            "Controllers",
            "Models",
            "Views",
            "Routes",
            "Middleware",
            "Services",
            "Config",
            "Database",
        ],
        generator: GeneratorKind::MvcAdvanced,
    },
    StyleDef {
        id: "mvp",
        display_name: "MVP (Model-View-Presenter)",
        description: "Separation of presentation logic from business logic",
        components: &["Models", "Views", "Presenters", "Contracts", "Services", "Config"],
        generator: GeneratorKind::Mvp,
    },
    StyleDef {
        id: "layered",
        display_name: "Layered Architecture",
        description: "Domain-Driven Design with clean layer separation",
        components: &["Domain", "Application", "Infrastructure", "Presentation", "Tests"],
        generator: GeneratorKind::Classic,
    },
    StyleDef {
        id: "microservices",
        display_name: "Microservices",
        description: "Microservices architecture with service discovery",
        components: &["Services", "Gateway", "Events", "Config", "Docker", "Tests"],
        generator: GeneratorKind::Classic,
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────

/// Find the definition for a style id (case-insensitive).
///
/// `None` means "not registered" — the orchestrator falls back to the classic
/// generator; callers must not treat this as a failure.
pub fn find_style(id: &str) -> Option<&'static StyleDef> {
    STYLE_REGISTRY
        .iter()
        .find(|def| def.id.eq_ignore_ascii_case(id))
}

/// The full catalog, in registration order.
pub fn all_styles() -> &'static [StyleDef] {
    STYLE_REGISTRY
}

/// Every registered style id, in registration order.
pub fn style_ids() -> impl Iterator<Item = &'static str> {
    STYLE_REGISTRY.iter().map(|def| def.id)
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
/// Catches registration errors at development time, not at user runtime.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for def in STYLE_REGISTRY {
        assert!(!def.id.is_empty(), "style id must not be empty");
        assert!(
            def.id.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "style id '{}' must be lower-case kebab",
            def.id
        );
        assert!(
            !def.components.is_empty(),
            "style '{}' has no components",
            def.id
        );

        // Component labels must be unique within a style.
        for (i, a) in def.components.iter().enumerate() {
            for b in &def.components[i + 1..] {
                assert!(
                    !a.eq_ignore_ascii_case(b),
                    "style '{}' lists component '{}' twice",
                    def.id,
                    a
                );
            }
        }
    }

    // Ids must be unique across the catalog (case-insensitively, since
    // lookup is case-insensitive).
    for (i, a) in STYLE_REGISTRY.iter().enumerate() {
        for b in &STYLE_REGISTRY[i + 1..] {
            assert!(
                !a.id.eq_ignore_ascii_case(b.id),
                "duplicate style id '{}'",
                a.id
            );
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
