//! The legacy generator.
//!
//! One generator shared by several styles, parameterized by the requested
//! style id and the component-selection predicate.  It also serves as the
//! fallback for unknown style ids and for dedicated-generator failures, so
//! it must always produce a non-empty tree: `config/config.php` and
//! `composer.json` are emitted unconditionally for every style.

use crate::domain::{
    entity::EntityName,
    error::DomainError,
    generators::{GenerateOptions, Generator, fill},
    tree::DirectoryNode,
};

/// Legacy single-pass generator for the classic MVC / REST / Functional
/// layouts.
///
/// Styles without a shape of their own (layered, microservices, unknown ids)
/// still receive the unconditional base artifacts.
#[derive(Debug, Clone)]
pub struct ClassicGenerator {
    style: String,
}

impl ClassicGenerator {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }

    fn mvc(&self, root: &mut DirectoryNode, entity: &EntityName, options: &GenerateOptions) {
        let mut app = DirectoryNode::new();
        if options.wants("Controller") {
            app.insert_dir(
                "Controllers",
                DirectoryNode::new().with_file(
                    format!("{}Controller.php", entity.canonical()),
                    fill(MVC_CONTROLLER, entity),
                ),
            );
        }
        if options.wants("Model") {
            app.insert_dir(
                "Models",
                DirectoryNode::new()
                    .with_file(format!("{}.php", entity.canonical()), fill(MVC_MODEL, entity)),
            );
        }
        if options.wants("View") {
            app.insert_dir(
                "Views",
                DirectoryNode::new()
                    .with_file(format!("{}.php", entity.canonical()), fill(MVC_VIEW, entity)),
            );
        }
        if !app.is_empty() {
            root.insert_dir("app", app);
        }
        if options.wants("Routes") {
            root.insert_dir(
                "routes",
                DirectoryNode::new().with_file("web.php", fill(MVC_ROUTES, entity)),
            );
        }
    }

    fn rest(&self, root: &mut DirectoryNode, entity: &EntityName, options: &GenerateOptions) {
        let mut app = DirectoryNode::new();
        if options.wants("Controller") {
            app.insert_dir(
                "Controllers",
                DirectoryNode::new().with_file(
                    format!("{}Controller.php", entity.canonical()),
                    fill(REST_CONTROLLER, entity),
                ),
            );
        }
        if options.wants("Model") {
            app.insert_dir(
                "Models",
                DirectoryNode::new()
                    .with_file(format!("{}.php", entity.canonical()), fill(REST_MODEL, entity)),
            );
        }
        if options.wants("Middleware") {
            app.insert_dir(
                "Middlewares",
                DirectoryNode::new().with_file("AuthMiddleware.php", REST_AUTH_MIDDLEWARE),
            );
        }
        if !app.is_empty() {
            root.insert_dir("app", app);
        }
        if options.wants("Routes") {
            root.insert_dir(
                "routes",
                DirectoryNode::new().with_file("api.php", fill(REST_ROUTES, entity)),
            );
        }
    }

    fn functional(&self, root: &mut DirectoryNode, entity: &EntityName, options: &GenerateOptions) {
        let mut src = DirectoryNode::new();
        if options.wants("Controller") {
            src.insert_file(
                format!("{}_controller.php", entity.lower()),
                fill(FN_CONTROLLER, entity),
            );
        }
        if options.wants("Model") {
            src.insert_file(
                format!("{}_model.php", entity.lower()),
                fill(FN_MODEL, entity),
            );
        }
        if !src.is_empty() {
            root.insert_dir("src", src);
        }
        if options.wants("Public") {
            root.insert_dir(
                "public",
                DirectoryNode::new()
                    .with_file("index.php", fill(FN_INDEX, entity))
                    .with_file(
                        format!("create_{}.html", entity.lower()),
                        fill(FN_CREATE_PAGE, entity),
                    )
                    .with_file(
                        format!("list_{}.html", entity.plural()),
                        fill(FN_LIST_PAGE, entity),
                    ),
            );
        }
    }
}

impl Generator for ClassicGenerator {
    fn generate(
        &self,
        entity: &EntityName,
        options: &GenerateOptions,
    ) -> Result<DirectoryNode, DomainError> {
        let mut root = DirectoryNode::new();

        match self.style.to_ascii_lowercase().as_str() {
            "mvc" => self.mvc(&mut root, entity, options),
            "rest" => self.rest(&mut root, entity, options),
            "functional" => self.functional(&mut root, entity, options),
            // No shape of its own; base artifacts below keep the tree
            // non-empty for any style id.
            _ => {}
        }

        root.insert_dir(
            "config",
            DirectoryNode::new().with_file("config.php", CONFIG_PHP),
        );
        root.insert_file("composer.json", COMPOSER_JSON);

        Ok(root)
    }
}

// ── Template payloads ─────────────────────────────────────────────────────────

const MVC_CONTROLLER: &str = r#"<?php
namespace App\Controllers;
use App\Models\{{ENTITY}};

class {{ENTITY}}Controller {
    public function index() {
        echo json_encode({{ENTITY}}::all());
    }
    public function show($id) {
        echo json_encode({{ENTITY}}::find($id));
    }
    public function store($data) {
        $entity = new {{ENTITY}}($data);
        $entity->save();
    }
}
?>"#;

const MVC_MODEL: &str = r#"<?php
namespace App\Models;
class {{ENTITY}} {
    public $id;
    public $created_at;
    public function __construct($data = []) {
        foreach ($data as $key => $value) {
            $this->$key = $value;
        }
    }
    public static function all() {
        return []; // placeholder query
    }
    public static function find($id) {
        return new self(['id' => $id]);
    }
    public function save() {
        echo "Saving {{ENTITY}}";
    }
}
?>"#;

const MVC_VIEW: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>{{ENTITY}} View</title>
</head>
<body>
    <h1>{{ENTITY}} view</h1>
</body>
</html>"#;

const MVC_ROUTES: &str = r#"<?php
require '../app/Controllers/{{ENTITY}}Controller.php';
$controller = new {{ENTITY}}Controller();
$controller->index();
?>"#;

const REST_CONTROLLER: &str = r#"<?php
namespace App\Controllers;
use App\Models\{{ENTITY}};

class {{ENTITY}}Controller {
    public function index() {
        echo json_encode({{ENTITY}}::all());
    }
}
?>"#;

const REST_MODEL: &str = r#"<?php
namespace App\Models;
class {{ENTITY}} {
    public static function all() {
        return []; // placeholder query
    }
}
?>"#;

const REST_AUTH_MIDDLEWARE: &str = r#"<?php
namespace App\Middlewares;
class AuthMiddleware {
    public function handle() {
        echo "Authentication middleware";
    }
}
?>"#;

const REST_ROUTES: &str = r#"<?php
require '../app/Controllers/{{ENTITY}}Controller.php';
header('Content-Type: application/json');
$controller = new {{ENTITY}}Controller();
$controller->index();
?>"#;

const FN_CONTROLLER: &str = r#"<?php
require_once '{{ENTITY_LOWER}}_model.php';

function get_all_{{ENTITY_PLURAL}}() {
    $data = {{ENTITY_LOWER}}_all();
    echo json_encode($data);
}

function create_{{ENTITY_LOWER}}($data) {
    {{ENTITY_LOWER}}_save($data);
    echo "New {{ENTITY}} saved!";
}
?>"#;

const FN_MODEL: &str = r#"<?php
function {{ENTITY_LOWER}}_all() {
    return []; // placeholder query
}

function {{ENTITY_LOWER}}_save($data) {
    file_put_contents('data.txt', json_encode($data) . PHP_EOL, FILE_APPEND);
}
?>"#;

const FN_INDEX: &str = r#"<?php
require_once '../src/{{ENTITY_LOWER}}_controller.php';
if ($_SERVER['REQUEST_METHOD'] === 'POST') {
    create_{{ENTITY_LOWER}}($_POST);
} else {
    get_all_{{ENTITY_PLURAL}}();
}
?>"#;

const FN_CREATE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Create {{ENTITY}}</title>
</head>
<body>
    <h1>Create a new {{ENTITY}}</h1>
    <form method="POST" action="index.php">
        <label for="name">Name:</label>
        <input type="text" id="name" name="name" required>
        <br>
        <label for="email">Email:</label>
        <input type="email" id="email" name="email" required>
        <br>
        <button type="submit">Submit</button>
    </form>
</body>
</html>"#;

const FN_LIST_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>{{ENTITY}} list</title>
</head>
<body>
    <h1>All {{ENTITY_PLURAL}}</h1>
    <ul id="list"></ul>

    <script>
        fetch('index.php')
            .then(response => response.json())
            .then(data => {
                const list = document.getElementById('list');
                data.forEach(item => {
                    const li = document.createElement('li');
                    li.textContent = JSON.stringify(item);
                    list.appendChild(li);
                });
            });
    </script>
</body>
</html>"#;

const CONFIG_PHP: &str = r#"<?php
return [
    'db' => [
        'host' => 'localhost',
        'database' => 'app_db',
        'user' => 'root',
        'password' => ''
    ]
];
?>"#;

const COMPOSER_JSON: &str = r#"{
    "autoload": {
        "psr-4": {
            "App\\": "app/"
        }
    }
}"#;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str) -> EntityName {
        EntityName::new(name).unwrap()
    }

    fn all() -> GenerateOptions {
        GenerateOptions::default()
    }

    #[test]
    fn mvc_full_shape() {
        let tree = ClassicGenerator::new("mvc")
            .generate(&entity("Order"), &all())
            .unwrap();

        assert!(tree.file_at("app/Controllers/OrderController.php").is_some());
        assert!(tree.file_at("app/Models/Order.php").is_some());
        assert!(tree.file_at("app/Views/Order.php").is_some());
        assert!(tree.file_at("routes/web.php").is_some());
        assert!(tree.file_at("config/config.php").is_some());
        assert!(tree.file_at("composer.json").is_some());
    }

    #[test]
    fn mvc_component_subset() {
        // Concrete scenario: only Controller + Model selected.
        let opts = GenerateOptions {
            components: Some(vec!["Controller".into(), "Model".into()]),
            ..Default::default()
        };
        let tree = ClassicGenerator::new("mvc")
            .generate(&entity("Order"), &opts)
            .unwrap();

        assert!(tree.file_at("app/Controllers/OrderController.php").is_some());
        assert!(tree.file_at("app/Models/Order.php").is_some());
        assert!(tree.file_at("app/Views/Order.php").is_none());
        assert!(tree.file_at("routes/web.php").is_none());
        // Base artifacts are unconditional.
        assert!(tree.file_at("config/config.php").is_some());
        assert!(tree.file_at("composer.json").is_some());
    }

    #[test]
    fn functional_full_shape() {
        let tree = ClassicGenerator::new("functional")
            .generate(&entity("Product"), &all())
            .unwrap();

        assert!(tree.file_at("src/product_controller.php").is_some());
        assert!(tree.file_at("src/product_model.php").is_some());
        assert!(tree.file_at("public/index.php").is_some());
        assert!(tree.file_at("public/create_product.html").is_some());
        assert!(tree.file_at("public/list_products.html").is_some());
    }

    #[test]
    fn rest_shape_has_middleware_not_views() {
        let tree = ClassicGenerator::new("rest")
            .generate(&entity("User"), &all())
            .unwrap();

        assert!(tree.file_at("app/Middlewares/AuthMiddleware.php").is_some());
        assert!(tree.file_at("routes/api.php").is_some());
        assert!(tree.get("app").is_some());
        assert!(
            tree.file_at("app/Views/User.php").is_none(),
            "REST has no views"
        );
    }

    #[test]
    fn unknown_style_still_produces_base_artifacts() {
        let tree = ClassicGenerator::new("does-not-exist")
            .generate(&entity("Order"), &all())
            .unwrap();

        assert!(!tree.is_empty());
        assert!(tree.file_at("config/config.php").is_some());
        assert!(tree.file_at("composer.json").is_some());
        assert_eq!(tree.file_count(), 2);
    }

    #[test]
    fn style_matching_is_case_insensitive() {
        let upper = ClassicGenerator::new("MVC")
            .generate(&entity("Order"), &all())
            .unwrap();
        let lower = ClassicGenerator::new("mvc")
            .generate(&entity("Order"), &all())
            .unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn no_app_components_means_no_app_directory() {
        let opts = GenerateOptions {
            components: Some(vec!["Routes".into()]),
            ..Default::default()
        };
        let tree = ClassicGenerator::new("mvc")
            .generate(&entity("Order"), &opts)
            .unwrap();
        assert!(tree.get("app").is_none());
        assert!(tree.file_at("routes/web.php").is_some());
    }

    #[test]
    fn payloads_interpolate_entity_forms() {
        let tree = ClassicGenerator::new("functional")
            .generate(&entity("Product"), &all())
            .unwrap();
        let controller = tree.file_at("src/product_controller.php").unwrap();
        assert!(controller.contains("get_all_products"));
        assert!(controller.contains("create_product"));
        assert!(controller.contains("New Product saved!"));
    }

    #[test]
    fn generation_is_deterministic() {
        let a = ClassicGenerator::new("mvc")
            .generate(&entity("Order"), &all())
            .unwrap();
        let b = ClassicGenerator::new("mvc")
            .generate(&entity("Order"), &all())
            .unwrap();
        assert_eq!(a, b);
    }
}
