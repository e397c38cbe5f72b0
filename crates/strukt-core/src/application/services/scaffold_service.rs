//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Resolve the style to a generator (with fallback)
//! 2. Build the declarative tree
//! 3. Merge cross-cutting optional artifacts
//! 4. Materialize the tree through the filesystem port
//!
//! Steps 1-3 are pure and exposed as [`plan`]; `generate` adds step 4.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::Filesystem,
        services::materializer::{ConflictPolicy, Overwrite, TreeMaterializer},
    },
    domain::{
        entity::EntityName,
        generators::{self, ClassicGenerator, GenerateOptions, Generator},
        registry::{GeneratorKind, find_style},
        tree::DirectoryNode,
    },
    error::StruktResult,
};

/// Main generation service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate a structure at `root` with the default always-overwrite
    /// policy.
    pub fn generate(
        &self,
        root: &Path,
        style_id: &str,
        entity: &EntityName,
        options: &GenerateOptions,
    ) -> StruktResult<()> {
        self.generate_with_policy(root, style_id, entity, options, &Overwrite)
    }

    /// Generate a structure at `root`, consulting `policy` for every
    /// pre-existing target path.
    ///
    /// Not transactional: a materialization failure leaves the files written
    /// so far on disk and surfaces the offending path to the caller.
    #[instrument(skip_all, fields(style = %style_id, entity = %entity, root = %root.display()))]
    pub fn generate_with_policy(
        &self,
        root: &Path,
        style_id: &str,
        entity: &EntityName,
        options: &GenerateOptions,
        policy: &dyn ConflictPolicy,
    ) -> StruktResult<()> {
        let tree = plan(style_id, entity, options)?;
        info!(entries = tree.file_count(), "structure planned");

        TreeMaterializer::new(self.filesystem.as_ref()).materialize(root, &tree, policy)?;

        info!("generation completed");
        Ok(())
    }
}

/// Build the final declarative tree for a request, without touching disk.
///
/// Unknown style ids and dedicated-generator failures both resolve to the
/// classic generator; neither is an error.
pub fn plan(
    style_id: &str,
    entity: &EntityName,
    options: &GenerateOptions,
) -> StruktResult<DirectoryNode> {
    let mut tree = match find_style(style_id) {
        Some(style) => match style.generator {
            GeneratorKind::Classic => ClassicGenerator::new(style.id)
                .generate(entity, options)?,
            GeneratorKind::MvcAdvanced | GeneratorKind::Mvp => {
                let dedicated = generators::generator_for(style);
                dedicated_or_fallback(dedicated.as_ref(), style.id, entity, options)?
            }
        },
        None => {
            warn!(style = style_id, "unknown style, using the classic generator");
            ClassicGenerator::new(style_id).generate(entity, options)?
        }
    };

    if options.include_docker {
        tree.upsert_file("docker-compose.yml", generators::docker_compose(entity));
        tree.upsert_file("Dockerfile", generators::dockerfile(entity));
        tree.upsert_file(".dockerignore", generators::dockerignore());
    }
    if options.include_gitignore {
        tree.upsert_file(".gitignore", generators::gitignore());
    }

    Ok(tree)
}

/// Run a dedicated generator inside a failure boundary.
///
/// On any generator error the classic generator is substituted with the same
/// arguments; only a failure of the fallback itself propagates.
fn dedicated_or_fallback(
    generator: &dyn Generator,
    style_id: &str,
    entity: &EntityName,
    options: &GenerateOptions,
) -> StruktResult<DirectoryNode> {
    match generator.generate(entity, options) {
        Ok(tree) => Ok(tree),
        Err(e) => {
            warn!(style = style_id, error = %e, "dedicated generator failed, falling back");
            ClassicGenerator::new(style_id)
                .generate(entity, options)
                .map_err(Into::into)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::generators::MockGenerator;
    use crate::domain::registry;

    fn entity() -> EntityName {
        EntityName::new("Order").unwrap()
    }

    fn opts() -> GenerateOptions {
        GenerateOptions::default()
    }

    // ── plan ──────────────────────────────────────────────────────────────

    #[test]
    fn every_registered_style_plans_a_non_empty_tree() {
        for id in registry::style_ids() {
            let tree = plan(id, &entity(), &opts()).unwrap();
            assert!(!tree.is_empty(), "style '{id}' planned an empty tree");
        }
    }

    #[test]
    fn unknown_style_falls_back_to_classic() {
        let tree = plan("does-not-exist", &entity(), &opts()).unwrap();
        assert!(!tree.is_empty());
        assert!(tree.file_at("config/config.php").is_some());
        assert!(tree.file_at("composer.json").is_some());
    }

    #[test]
    fn planning_is_deterministic() {
        for id in ["mvc", "mvp", "mvc-advanced", "functional"] {
            let a = plan(id, &entity(), &opts()).unwrap();
            let b = plan(id, &entity(), &opts()).unwrap();
            assert_eq!(a, b, "style '{id}' is not deterministic");
        }
    }

    #[test]
    fn docker_adds_exactly_three_root_entries() {
        let base = plan("mvc", &entity(), &opts()).unwrap();
        let with_docker = plan(
            "mvc",
            &entity(),
            &GenerateOptions {
                include_docker: true,
                ..opts()
            },
        )
        .unwrap();

        assert_eq!(with_docker.len(), base.len() + 3);
        assert!(with_docker.file_at("docker-compose.yml").is_some());
        assert!(with_docker.file_at("Dockerfile").is_some());
        assert!(with_docker.file_at(".dockerignore").is_some());
        // Nothing the base generator produced may disappear.
        for (name, _) in base.entries() {
            assert!(with_docker.contains(name), "lost base entry '{name}'");
        }
    }

    #[test]
    fn gitignore_adds_exactly_one_root_entry() {
        let base = plan("mvp", &entity(), &opts()).unwrap();
        let with_ignore = plan(
            "mvp",
            &entity(),
            &GenerateOptions {
                include_gitignore: true,
                ..opts()
            },
        )
        .unwrap();

        assert_eq!(with_ignore.len(), base.len() + 1);
        assert!(with_ignore.file_at(".gitignore").is_some());
    }

    #[test]
    fn optional_artifacts_compose() {
        let tree = plan(
            "functional",
            &entity(),
            &GenerateOptions {
                include_docker: true,
                include_gitignore: true,
                ..opts()
            },
        )
        .unwrap();
        assert!(tree.file_at("docker-compose.yml").is_some());
        assert!(tree.file_at(".gitignore").is_some());
        assert!(tree.file_at("src/order_controller.php").is_some());
    }

    // ── failure boundary ──────────────────────────────────────────────────

    #[test]
    fn failing_dedicated_generator_falls_back_to_classic() {
        let mut failing = MockGenerator::new();
        failing.expect_generate().returning(|_, _| {
            Err(DomainError::GeneratorFailed {
                style: "mvc-advanced".into(),
                reason: "boom".into(),
            })
        });

        let tree = dedicated_or_fallback(&failing, "mvc", &entity(), &opts()).unwrap();
        // The classic MVC shape, not an error.
        assert!(tree.file_at("app/Controllers/OrderController.php").is_some());
        assert!(tree.file_at("config/config.php").is_some());
    }

    #[test]
    fn healthy_dedicated_generator_is_used_directly() {
        let mut healthy = MockGenerator::new();
        healthy.expect_generate().returning(|_, _| {
            Ok(DirectoryNode::new().with_file("marker.txt", "dedicated"))
        });

        let tree = dedicated_or_fallback(&healthy, "mvc", &entity(), &opts()).unwrap();
        assert_eq!(tree.file_at("marker.txt"), Some("dedicated"));
    }
}
