//! Integration tests: the full generate-and-materialize pipeline against the
//! adapters, exercising the testable properties of the engine end to end.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

use strukt_adapters::{LocalFilesystem, MemoryFilesystem};
use strukt_core::{
    application::{GenerateOptions, ScaffoldService, services::materializer::KeepExisting},
    domain::{EntityName, registry},
};

fn service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()))
}

fn entity(name: &str) -> EntityName {
    EntityName::new(name).unwrap()
}

/// All paths under `root`, relative, sorted.
fn walk(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

// ── Round-trip: planned paths == materialized paths ──────────────────────────

#[test]
fn every_style_round_trips_on_an_empty_root() {
    for id in registry::style_ids() {
        let temp = TempDir::new().unwrap();
        let options = GenerateOptions::default();
        let e = entity("Order");

        service()
            .generate(temp.path(), id, &e, &options)
            .unwrap_or_else(|err| panic!("style '{id}' failed: {err}"));

        let planned: BTreeSet<PathBuf> = strukt_core::application::plan(id, &e, &options)
            .unwrap()
            .paths()
            .into_iter()
            .collect();
        let on_disk = walk(temp.path());

        assert_eq!(planned, on_disk, "path sets differ for style '{id}'");
    }
}

// ── Idempotence ───────────────────────────────────────────────────────────────

#[test]
fn regenerating_with_overwrite_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let e = entity("Order");
    let options = GenerateOptions::default();

    service().generate(temp.path(), "mvc", &e, &options).unwrap();
    let first: Vec<(PathBuf, String)> = walk(temp.path())
        .into_iter()
        .filter(|p| temp.path().join(p).is_file())
        .map(|p| {
            let content = fs::read_to_string(temp.path().join(&p)).unwrap();
            (p, content)
        })
        .collect();

    service().generate(temp.path(), "mvc", &e, &options).unwrap();
    for (path, content) in &first {
        let again = fs::read_to_string(temp.path().join(path)).unwrap();
        assert_eq!(&again, content, "content drifted for {}", path.display());
    }
}

// ── Conflict policy ───────────────────────────────────────────────────────────

#[test]
fn keep_existing_preserves_prior_content() {
    let temp = TempDir::new().unwrap();
    let e = entity("Order");
    let options = GenerateOptions::default();

    let composer = temp.path().join("composer.json");
    fs::write(&composer, "my customized manifest").unwrap();

    service()
        .generate_with_policy(temp.path(), "mvc", &e, &options, &KeepExisting)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&composer).unwrap(),
        "my customized manifest"
    );
    // Paths that did not previously exist are still created.
    assert!(temp.path().join("app/Models/Order.php").is_file());
}

#[test]
fn overwrite_replaces_prior_content() {
    let temp = TempDir::new().unwrap();
    let e = entity("Order");

    let composer = temp.path().join("composer.json");
    fs::write(&composer, "stale").unwrap();

    service()
        .generate(temp.path(), "mvc", &e, &GenerateOptions::default())
        .unwrap();

    let content = fs::read_to_string(&composer).unwrap();
    assert_ne!(content, "stale");
    assert!(content.contains("psr-4"));
}

#[test]
fn selective_policy_skips_only_matching_paths() {
    let temp = TempDir::new().unwrap();
    let e = entity("Order");

    let config = temp.path().join("config");
    fs::create_dir(&config).unwrap();
    fs::write(config.join("config.php"), "hand-edited").unwrap();
    fs::write(temp.path().join("composer.json"), "stale").unwrap();

    // Protect config/, overwrite everything else.
    let policy = |p: &Path| !p.ends_with("config/config.php");
    service()
        .generate_with_policy(temp.path(), "mvc", &e, &GenerateOptions::default(), &policy)
        .unwrap();

    assert_eq!(
        fs::read_to_string(config.join("config.php")).unwrap(),
        "hand-edited"
    );
    assert!(
        fs::read_to_string(temp.path().join("composer.json"))
            .unwrap()
            .contains("psr-4")
    );
}

#[test]
fn directory_blocked_by_file_skips_subtree_when_denied() {
    let temp = TempDir::new().unwrap();
    let e = entity("Order");

    // A file where the generator wants the `app` directory.
    fs::write(temp.path().join("app"), "blocker").unwrap();

    service()
        .generate_with_policy(
            temp.path(),
            "mvc",
            &e,
            &GenerateOptions::default(),
            &KeepExisting,
        )
        .unwrap();

    // The blocker survives and the subtree was never created,
    // but sibling branches were materialized.
    assert_eq!(fs::read_to_string(temp.path().join("app")).unwrap(), "blocker");
    assert!(temp.path().join("routes/web.php").is_file());
}

// ── Failure semantics ─────────────────────────────────────────────────────────

#[test]
#[cfg(unix)]
fn materialization_failure_names_the_offending_path() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let e = entity("Order");

    // Make the root read-only so the first directory creation fails.
    let mut perms = fs::metadata(temp.path()).unwrap().permissions();
    perms.set_mode(0o555);
    fs::set_permissions(temp.path(), perms.clone()).unwrap();

    let err = service()
        .generate(temp.path(), "mvc", &e, &GenerateOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains(temp.path().to_str().unwrap()));

    // Restore so TempDir can clean up.
    perms.set_mode(0o755);
    fs::set_permissions(temp.path(), perms).unwrap();
}

// ── Unknown style fallback ────────────────────────────────────────────────────

#[test]
fn unknown_style_materializes_a_non_empty_tree() {
    let temp = TempDir::new().unwrap();
    service()
        .generate(
            temp.path(),
            "does-not-exist",
            &entity("Order"),
            &GenerateOptions::default(),
        )
        .unwrap();

    assert!(temp.path().join("config/config.php").is_file());
    assert!(temp.path().join("composer.json").is_file());
}

// ── Concrete scenarios ────────────────────────────────────────────────────────

#[test]
fn mvc_order_with_controller_and_model_only() {
    let temp = TempDir::new().unwrap();
    let options = GenerateOptions {
        components: Some(vec!["Controller".into(), "Model".into()]),
        ..Default::default()
    };

    service()
        .generate(temp.path(), "MVC", &entity("Order"), &options)
        .unwrap();

    assert!(temp.path().join("app/Controllers/OrderController.php").is_file());
    assert!(temp.path().join("app/Models/Order.php").is_file());
    assert!(!temp.path().join("app/Views/Order.php").exists());
    assert!(!temp.path().join("routes/web.php").exists());
    assert!(temp.path().join("config/config.php").is_file());
    assert!(temp.path().join("composer.json").is_file());
}

#[test]
fn functional_product_full_layout() {
    let temp = TempDir::new().unwrap();

    service()
        .generate(
            temp.path(),
            "Functional",
            &entity("Product"),
            &GenerateOptions::default(),
        )
        .unwrap();

    for path in [
        "src/product_controller.php",
        "src/product_model.php",
        "public/index.php",
        "public/create_product.html",
        "public/list_products.html",
    ] {
        assert!(temp.path().join(path).is_file(), "missing {path}");
    }
}

#[test]
fn mvc_advanced_materializes_deep_branches() {
    let temp = TempDir::new().unwrap();

    service()
        .generate(
            temp.path(),
            "mvc-advanced",
            &entity("Order"),
            &GenerateOptions::default(),
        )
        .unwrap();

    assert!(temp.path().join("public/assets/css/app.css").is_file());
    assert!(temp.path().join("app/Views/order/index.php").is_file());
    assert!(temp
        .path()
        .join("database/migrations/0001_create_orders_table.php")
        .is_file());
}

// ── Optional artifacts ────────────────────────────────────────────────────────

#[test]
fn docker_and_gitignore_add_only_root_entries() {
    let base_dir = TempDir::new().unwrap();
    let full_dir = TempDir::new().unwrap();
    let e = entity("Order");

    service()
        .generate(base_dir.path(), "mvc", &e, &GenerateOptions::default())
        .unwrap();
    service()
        .generate(
            full_dir.path(),
            "mvc",
            &e,
            &GenerateOptions {
                include_docker: true,
                include_gitignore: true,
                ..Default::default()
            },
        )
        .unwrap();

    let mut expected = walk(base_dir.path());
    for extra in ["docker-compose.yml", "Dockerfile", ".dockerignore", ".gitignore"] {
        expected.insert(PathBuf::from(extra));
    }
    assert_eq!(walk(full_dir.path()), expected);
}

// ── MemoryFilesystem parity ───────────────────────────────────────────────────

#[test]
fn memory_filesystem_supports_the_full_pipeline() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    service
        .generate(
            Path::new("/proj"),
            "mvp",
            &entity("Invoice"),
            &GenerateOptions::default(),
        )
        .unwrap();

    assert!(
        fs.read_file(Path::new("/proj/app/Presenters/InvoicePresenter.php"))
            .is_some()
    );
    assert!(fs.read_file(Path::new("/proj/composer.json")).is_some());
}

#[test]
fn memory_filesystem_respects_keep_existing() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(Path::new("/proj/composer.json"), "seeded");

    let service = ScaffoldService::new(Box::new(fs.clone()));
    service
        .generate_with_policy(
            Path::new("/proj"),
            "mvc",
            &entity("Order"),
            &GenerateOptions::default(),
            &KeepExisting,
        )
        .unwrap();

    assert_eq!(
        fs.read_file(Path::new("/proj/composer.json")).as_deref(),
        Some("seeded")
    );
}
