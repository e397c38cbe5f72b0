//! Dedicated generator for the `mvc-advanced` style.
//!
//! The richly-branching layout: application code, configuration, persistence
//! migrations, public assets, core framework files and tests, nested four to
//! five directory levels deep.  Migration filenames carry a fixed ordinal
//! prefix so the whole tree is a deterministic function of the entity name.

use crate::domain::{
    entity::EntityName,
    error::DomainError,
    generators::{GenerateOptions, Generator, fill},
    tree::DirectoryNode,
};

/// Modern MVC layout with routing, middleware and dependency injection.
#[derive(Debug, Clone, Copy)]
pub struct MvcAdvancedGenerator;

impl Generator for MvcAdvancedGenerator {
    fn generate(
        &self,
        entity: &EntityName,
        options: &GenerateOptions,
    ) -> Result<DirectoryNode, DomainError> {
        let mut root = DirectoryNode::new();

        // ── app ──────────────────────────────────────────────────────────
        let mut app = DirectoryNode::new();
        if options.wants("Controllers") {
            app.insert_dir(
                "Controllers",
                DirectoryNode::new()
                    .with_file(
                        format!("{}Controller.php", entity.canonical()),
                        fill(CONTROLLER, entity),
                    )
                    .with_file("BaseController.php", BASE_CONTROLLER),
            );
        }
        if options.wants("Models") {
            app.insert_dir(
                "Models",
                DirectoryNode::new()
                    .with_file(format!("{}.php", entity.canonical()), fill(MODEL, entity))
                    .with_file("BaseModel.php", BASE_MODEL),
            );
        }
        if options.wants("Views") {
            app.insert_dir(
                "Views",
                DirectoryNode::new()
                    .with_dir(
                        entity.lower(),
                        DirectoryNode::new()
                            .with_file("index.php", fill(VIEW_INDEX, entity))
                            .with_file("create.php", fill(VIEW_CREATE, entity))
                            .with_file("edit.php", fill(VIEW_EDIT, entity))
                            .with_file("show.php", fill(VIEW_SHOW, entity)),
                    )
                    .with_dir(
                        "layouts",
                        DirectoryNode::new().with_file("app.php", LAYOUT),
                    ),
            );
        }
        if options.wants("Middleware") {
            app.insert_dir(
                "Middleware",
                DirectoryNode::new()
                    .with_file("AuthMiddleware.php", AUTH_MIDDLEWARE)
                    .with_file("CorsMiddleware.php", CORS_MIDDLEWARE)
                    .with_file("ValidateMiddleware.php", VALIDATE_MIDDLEWARE),
            );
        }
        if options.wants("Services") {
            app.insert_dir(
                "Services",
                DirectoryNode::new()
                    .with_file(
                        format!("{}Service.php", entity.canonical()),
                        fill(SERVICE, entity),
                    )
                    .with_file("Container.php", CONTAINER),
            );
        }
        app.insert_dir(
            "Validators",
            DirectoryNode::new().with_file(
                format!("{}Validator.php", entity.canonical()),
                fill(VALIDATOR, entity),
            ),
        );
        root.insert_dir("app", app);

        // ── config ───────────────────────────────────────────────────────
        let mut config = DirectoryNode::new();
        if options.wants("Config") {
            config.insert_file("app.php", APP_CONFIG);
            config.insert_file("database.php", DATABASE_CONFIG);
        }
        if options.wants("Routes") {
            config.insert_file("routes.php", fill(ROUTES, entity));
        }
        if !config.is_empty() {
            root.insert_dir("config", config);
        }

        // ── database ─────────────────────────────────────────────────────
        if options.wants("Database") {
            root.insert_dir(
                "database",
                DirectoryNode::new()
                    .with_dir(
                        "migrations",
                        DirectoryNode::new().with_file(
                            format!("0001_create_{}_table.php", entity.plural()),
                            fill(MIGRATION, entity),
                        ),
                    )
                    .with_dir(
                        "seeders",
                        DirectoryNode::new().with_file(
                            format!("{}Seeder.php", entity.canonical()),
                            fill(SEEDER, entity),
                        ),
                    ),
            );
        }

        // ── public / core / tests / root files ───────────────────────────
        root.insert_dir(
            "public",
            DirectoryNode::new()
                .with_file("index.php", PUBLIC_INDEX)
                .with_dir(
                    "assets",
                    DirectoryNode::new()
                        .with_dir("css", DirectoryNode::new().with_file("app.css", APP_CSS))
                        .with_dir("js", DirectoryNode::new().with_file("app.js", APP_JS)),
                ),
        );

        root.insert_dir(
            "core",
            DirectoryNode::new()
                .with_file("Router.php", ROUTER)
                .with_file("Request.php", REQUEST)
                .with_file("Response.php", RESPONSE)
                .with_file("Database.php", DATABASE),
        );

        if options.include_tests {
            root.insert_dir(
                "tests",
                DirectoryNode::new().with_file(
                    format!("{}ControllerTest.php", entity.canonical()),
                    fill(CONTROLLER_TEST, entity),
                ),
            );
        }

        root.insert_file("composer.json", fill(COMPOSER, entity));
        root.insert_file(".env.example", ENV_EXAMPLE);
        root.insert_file(".htaccess", HTACCESS);
        root.insert_file("README.md", fill(README, entity));

        Ok(root)
    }
}

// ── Template payloads ─────────────────────────────────────────────────────────

const CONTROLLER: &str = r#"<?php

namespace App\Controllers;

use App\Models\{{ENTITY}};
use App\Services\{{ENTITY}}Service;
use App\Validators\{{ENTITY}}Validator;
use Core\Request;
use Core\Response;

class {{ENTITY}}Controller extends BaseController
{
    private {{ENTITY}}Service $service;
    private {{ENTITY}}Validator $validator;

    public function __construct({{ENTITY}}Service $service, {{ENTITY}}Validator $validator)
    {
        $this->service = $service;
        $this->validator = $validator;
    }

    public function index(Request $request): Response
    {
        ${{ENTITY_PLURAL}} = $this->service->getAll($request->query());

        if ($request->expectsJson()) {
            return $this->json(${{ENTITY_PLURAL}});
        }

        return $this->view('{{ENTITY_LOWER}}/index', [
            '{{ENTITY_PLURAL}}' => ${{ENTITY_PLURAL}}
        ]);
    }

    public function create(): Response
    {
        return $this->view('{{ENTITY_LOWER}}/create');
    }

    public function store(Request $request): Response
    {
        $data = $request->all();

        $errors = $this->validator->validate($data);
        if ($errors) {
            return $this->json(['errors' => $errors], 422);
        }

        ${{ENTITY_LOWER}} = $this->service->create($data);

        if ($request->expectsJson()) {
            return $this->json(${{ENTITY_LOWER}}, 201);
        }

        return $this->redirect('/{{ENTITY_PLURAL}}');
    }

    public function show(Request $request, int $id): Response
    {
        ${{ENTITY_LOWER}} = $this->service->findById($id);

        if (!${{ENTITY_LOWER}}) {
            return $this->json(['error' => '{{ENTITY}} not found'], 404);
        }

        if ($request->expectsJson()) {
            return $this->json(${{ENTITY_LOWER}});
        }

        return $this->view('{{ENTITY_LOWER}}/show', [
            '{{ENTITY_LOWER}}' => ${{ENTITY_LOWER}}
        ]);
    }

    public function edit(int $id): Response
    {
        ${{ENTITY_LOWER}} = $this->service->findById($id);

        if (!${{ENTITY_LOWER}}) {
            return $this->redirect('/{{ENTITY_PLURAL}}');
        }

        return $this->view('{{ENTITY_LOWER}}/edit', [
            '{{ENTITY_LOWER}}' => ${{ENTITY_LOWER}}
        ]);
    }

    public function update(Request $request, int $id): Response
    {
        $data = $request->all();

        $errors = $this->validator->validate($data, $id);
        if ($errors) {
            return $this->json(['errors' => $errors], 422);
        }

        ${{ENTITY_LOWER}} = $this->service->update($id, $data);

        if (!${{ENTITY_LOWER}}) {
            return $this->json(['error' => '{{ENTITY}} not found'], 404);
        }

        if ($request->expectsJson()) {
            return $this->json(${{ENTITY_LOWER}});
        }

        return $this->redirect('/{{ENTITY_PLURAL}}');
    }

    public function destroy(Request $request, int $id): Response
    {
        $deleted = $this->service->delete($id);

        if (!$deleted) {
            return $this->json(['error' => '{{ENTITY}} not found'], 404);
        }

        if ($request->expectsJson()) {
            return $this->json(['message' => '{{ENTITY}} deleted successfully']);
        }

        return $this->redirect('/{{ENTITY_PLURAL}}');
    }
}
"#;

const BASE_CONTROLLER: &str = r#"<?php

namespace App\Controllers;

use Core\Response;

abstract class BaseController
{
    protected function view(string $view, array $data = []): Response
    {
        extract($data);
        ob_start();
        require __DIR__ . '/../Views/' . str_replace('.', '/', $view) . '.php';
        $content = ob_get_clean();

        return new Response($content);
    }

    protected function json($data, int $statusCode = 200): Response
    {
        return new Response(
            json_encode($data),
            $statusCode,
            ['Content-Type' => 'application/json']
        );
    }

    protected function redirect(string $url, int $statusCode = 302): Response
    {
        return new Response('', $statusCode, ['Location' => $url]);
    }
}
"#;

const MODEL: &str = r#"<?php

namespace App\Models;

class {{ENTITY}} extends BaseModel
{
    protected string $table = '{{ENTITY_PLURAL}}';

    protected array $fillable = [
        'name',
        'email',
        'status'
    ];

    protected array $casts = [
        'id' => 'int',
        'status' => 'bool',
        'created_at' => 'datetime',
        'updated_at' => 'datetime'
    ];
}
"#;

const BASE_MODEL: &str = r#"<?php

namespace App\Models;

use Core\Database;
use PDO;

abstract class BaseModel
{
    protected string $table;
    protected array $fillable = [];
    protected array $casts = [];
    protected Database $db;

    public function __construct()
    {
        $this->db = Database::getInstance();
    }

    public function all(): array
    {
        $stmt = $this->db->prepare("SELECT * FROM {$this->table}");
        $stmt->execute();
        return $stmt->fetchAll(PDO::FETCH_CLASS, static::class);
    }

    public function find(int $id): ?self
    {
        $stmt = $this->db->prepare("SELECT * FROM {$this->table} WHERE id = ?");
        $stmt->execute([$id]);
        $result = $stmt->fetchObject(static::class);
        return $result ?: null;
    }

    public function create(array $data): self
    {
        $data = $this->filterFillable($data);
        $columns = implode(', ', array_keys($data));
        $placeholders = implode(', ', array_fill(0, count($data), '?'));

        $sql = "INSERT INTO {$this->table} ($columns) VALUES ($placeholders)";
        $stmt = $this->db->prepare($sql);
        $stmt->execute(array_values($data));

        return $this->find($this->db->lastInsertId());
    }

    public function update(int $id, array $data): bool
    {
        $data = $this->filterFillable($data);
        $set = implode(', ', array_map(fn($col) => "$col = ?", array_keys($data)));

        $sql = "UPDATE {$this->table} SET $set WHERE id = ?";
        $stmt = $this->db->prepare($sql);
        return $stmt->execute([...array_values($data), $id]);
    }

    public function delete(int $id): bool
    {
        $stmt = $this->db->prepare("DELETE FROM {$this->table} WHERE id = ?");
        return $stmt->execute([$id]);
    }

    protected function filterFillable(array $data): array
    {
        return array_filter(
            $data,
            fn($key) => in_array($key, $this->fillable),
            ARRAY_FILTER_USE_KEY
        );
    }
}
"#;

const SERVICE: &str = r#"<?php

namespace App\Services;

use App\Models\{{ENTITY}};

class {{ENTITY}}Service
{
    private {{ENTITY}} $model;

    public function __construct({{ENTITY}} $model)
    {
        $this->model = $model;
    }

    public function getAll(array $filters = []): array
    {
        return $this->model->all();
    }

    public function findById(int $id): ?{{ENTITY}}
    {
        return $this->model->find($id);
    }

    public function create(array $data): {{ENTITY}}
    {
        return $this->model->create($data);
    }

    public function update(int $id, array $data): ?{{ENTITY}}
    {
        ${{ENTITY_LOWER}} = $this->findById($id);
        if (!${{ENTITY_LOWER}}) {
            return null;
        }

        $this->model->update($id, $data);
        return $this->findById($id);
    }

    public function delete(int $id): bool
    {
        return $this->model->delete($id);
    }
}
"#;

const VALIDATOR: &str = r#"<?php

namespace App\Validators;

class {{ENTITY}}Validator
{
    public function validate(array $data, ?int $id = null): array
    {
        $errors = [];

        if (empty($data['name'])) {
            $errors['name'] = 'Name is required';
        } elseif (strlen($data['name']) < 3) {
            $errors['name'] = 'Name must be at least 3 characters';
        }

        if (empty($data['email'])) {
            $errors['email'] = 'Email is required';
        } elseif (!filter_var($data['email'], FILTER_VALIDATE_EMAIL)) {
            $errors['email'] = 'Email must be valid';
        }

        return $errors;
    }
}
"#;

const AUTH_MIDDLEWARE: &str = r#"<?php

namespace App\Middleware;

use Core\Request;
use Core\Response;

class AuthMiddleware
{
    public function handle(Request $request, callable $next): Response
    {
        if (!isset($_SESSION['user_id'])) {
            if ($request->expectsJson()) {
                return new Response(
                    json_encode(['error' => 'Unauthorized']),
                    401,
                    ['Content-Type' => 'application/json']
                );
            }
            return new Response('', 302, ['Location' => '/login']);
        }

        return $next($request);
    }
}
"#;

const CORS_MIDDLEWARE: &str = r#"<?php

namespace App\Middleware;

use Core\Request;
use Core\Response;

class CorsMiddleware
{
    public function handle(Request $request, callable $next): Response
    {
        $response = $next($request);

        $response->headers['Access-Control-Allow-Origin'] = '*';
        $response->headers['Access-Control-Allow-Methods'] = 'GET, POST, PUT, DELETE, OPTIONS';
        $response->headers['Access-Control-Allow-Headers'] = 'Content-Type, Authorization';

        return $response;
    }
}
"#;

const VALIDATE_MIDDLEWARE: &str = r#"<?php

namespace App\Middleware;

use Core\Request;
use Core\Response;

class ValidateMiddleware
{
    public function handle(Request $request, callable $next): Response
    {
        if (in_array($request->method(), ['POST', 'PUT', 'DELETE'])) {
            $token = $request->input('csrf_token') ?? $request->header('X-CSRF-TOKEN');
            if (!$this->validateCsrfToken($token)) {
                return new Response(
                    json_encode(['error' => 'Invalid CSRF token']),
                    403,
                    ['Content-Type' => 'application/json']
                );
            }
        }

        return $next($request);
    }

    private function validateCsrfToken(?string $token): bool
    {
        return isset($_SESSION['csrf_token']) && hash_equals($_SESSION['csrf_token'], $token ?? '');
    }
}
"#;

const CONTAINER: &str = r#"<?php

namespace App\Services;

class Container
{
    private array $bindings = [];
    private array $instances = [];

    public function bind(string $abstract, callable $concrete): void
    {
        $this->bindings[$abstract] = $concrete;
    }

    public function singleton(string $abstract, callable $concrete): void
    {
        $this->bind($abstract, $concrete);
        $this->instances[$abstract] = null;
    }

    public function make(string $abstract)
    {
        if (isset($this->instances[$abstract]) && $this->instances[$abstract] !== null) {
            return $this->instances[$abstract];
        }

        if (isset($this->bindings[$abstract])) {
            $instance = $this->bindings[$abstract]($this);

            if (array_key_exists($abstract, $this->instances)) {
                $this->instances[$abstract] = $instance;
            }

            return $instance;
        }

        return new $abstract();
    }
}
"#;

const VIEW_INDEX: &str = r#"<?php include __DIR__ . '/../layouts/app.php'; ?>

<div class="container">
    <div class="header">
        <h1>{{ENTITY}} List</h1>
        <a href="/{{ENTITY_PLURAL}}/create" class="btn btn-primary">Create New {{ENTITY}}</a>
    </div>

    <table class="table">
        <thead>
            <tr>
                <th>ID</th>
                <th>Name</th>
                <th>Email</th>
                <th>Status</th>
                <th>Actions</th>
            </tr>
        </thead>
        <tbody>
            <?php foreach (${{ENTITY_PLURAL}} as ${{ENTITY_LOWER}}): ?>
            <tr>
                <td><?= htmlspecialchars(${{ENTITY_LOWER}}->id) ?></td>
                <td><?= htmlspecialchars(${{ENTITY_LOWER}}->name) ?></td>
                <td><?= htmlspecialchars(${{ENTITY_LOWER}}->email) ?></td>
                <td><?= ${{ENTITY_LOWER}}->status ? 'Active' : 'Inactive' ?></td>
                <td>
                    <a href="/{{ENTITY_PLURAL}}/<?= ${{ENTITY_LOWER}}->id ?>" class="btn btn-sm">View</a>
                    <a href="/{{ENTITY_PLURAL}}/<?= ${{ENTITY_LOWER}}->id ?>/edit" class="btn btn-sm">Edit</a>
                    <form method="POST" action="/{{ENTITY_PLURAL}}/<?= ${{ENTITY_LOWER}}->id ?>" style="display:inline;">
                        <input type="hidden" name="_method" value="DELETE">
                        <button type="submit" class="btn btn-sm btn-danger" onclick="return confirm('Are you sure?')">Delete</button>
                    </form>
                </td>
            </tr>
            <?php endforeach; ?>
        </tbody>
    </table>
</div>
"#;

const VIEW_CREATE: &str = r#"<?php include __DIR__ . '/../layouts/app.php'; ?>

<div class="container">
    <h1>Create {{ENTITY}}</h1>

    <form method="POST" action="/{{ENTITY_PLURAL}}" class="form">
        <div class="form-group">
            <label for="name">Name</label>
            <input type="text" id="name" name="name" required>
        </div>

        <div class="form-group">
            <label for="email">Email</label>
            <input type="email" id="email" name="email" required>
        </div>

        <div class="form-group">
            <label for="status">
                <input type="checkbox" id="status" name="status" value="1">
                Active
            </label>
        </div>

        <div class="form-actions">
            <button type="submit" class="btn btn-primary">Create</button>
            <a href="/{{ENTITY_PLURAL}}" class="btn">Cancel</a>
        </div>
    </form>
</div>
"#;

const VIEW_EDIT: &str = r#"<?php include __DIR__ . '/../layouts/app.php'; ?>

<div class="container">
    <h1>Edit {{ENTITY}}</h1>

    <form method="POST" action="/{{ENTITY_PLURAL}}/<?= ${{ENTITY_LOWER}}->id ?>" class="form">
        <input type="hidden" name="_method" value="PUT">

        <div class="form-group">
            <label for="name">Name</label>
            <input type="text" id="name" name="name" value="<?= htmlspecialchars(${{ENTITY_LOWER}}->name) ?>" required>
        </div>

        <div class="form-group">
            <label for="email">Email</label>
            <input type="email" id="email" name="email" value="<?= htmlspecialchars(${{ENTITY_LOWER}}->email) ?>" required>
        </div>

        <div class="form-group">
            <label for="status">
                <input type="checkbox" id="status" name="status" value="1" <?= ${{ENTITY_LOWER}}->status ? 'checked' : '' ?>>
                Active
            </label>
        </div>

        <div class="form-actions">
            <button type="submit" class="btn btn-primary">Update</button>
            <a href="/{{ENTITY_PLURAL}}" class="btn">Cancel</a>
        </div>
    </form>
</div>
"#;

const VIEW_SHOW: &str = r#"<?php include __DIR__ . '/../layouts/app.php'; ?>

<div class="container">
    <h1>{{ENTITY}} Details</h1>

    <div class="card">
        <div class="card-row">
            <strong>ID:</strong>
            <span><?= htmlspecialchars(${{ENTITY_LOWER}}->id) ?></span>
        </div>
        <div class="card-row">
            <strong>Name:</strong>
            <span><?= htmlspecialchars(${{ENTITY_LOWER}}->name) ?></span>
        </div>
        <div class="card-row">
            <strong>Email:</strong>
            <span><?= htmlspecialchars(${{ENTITY_LOWER}}->email) ?></span>
        </div>
        <div class="card-row">
            <strong>Status:</strong>
            <span><?= ${{ENTITY_LOWER}}->status ? 'Active' : 'Inactive' ?></span>
        </div>
        <div class="card-row">
            <strong>Created:</strong>
            <span><?= htmlspecialchars(${{ENTITY_LOWER}}->created_at) ?></span>
        </div>
    </div>

    <div class="form-actions">
        <a href="/{{ENTITY_PLURAL}}/<?= ${{ENTITY_LOWER}}->id ?>/edit" class="btn btn-primary">Edit</a>
        <a href="/{{ENTITY_PLURAL}}" class="btn">Back to List</a>
    </div>
</div>
"#;

const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>PHP MVC Application</title>
    <link rel="stylesheet" href="/assets/css/app.css">
</head>
<body>
    <nav class="navbar">
        <div class="container">
            <a href="/" class="navbar-brand">PHP MVC App</a>
            <ul class="navbar-nav">
                <li><a href="/">Home</a></li>
                <li><a href="/about">About</a></li>
            </ul>
        </div>
    </nav>

    <main>
        <?php echo $content ?? ''; ?>
    </main>

    <footer>
        <div class="container">
            <p>&copy; PHP MVC Application. All rights reserved.</p>
        </div>
    </footer>

    <script src="/assets/js/app.js"></script>
</body>
</html>
"#;

const APP_CONFIG: &str = r#"<?php

return [
    'name' => getenv('APP_NAME') ?: 'PHP MVC App',
    'env' => getenv('APP_ENV') ?: 'development',
    'debug' => getenv('APP_DEBUG') === 'true',
    'url' => getenv('APP_URL') ?: 'http://localhost',
    'timezone' => 'UTC',
];
"#;

const DATABASE_CONFIG: &str = r#"<?php

return [
    'default' => getenv('DB_CONNECTION') ?: 'mysql',

    'connections' => [
        'mysql' => [
            'driver' => 'mysql',
            'host' => getenv('DB_HOST') ?: 'localhost',
            'port' => getenv('DB_PORT') ?: '3306',
            'database' => getenv('DB_DATABASE') ?: 'app_db',
            'username' => getenv('DB_USERNAME') ?: 'root',
            'password' => getenv('DB_PASSWORD') ?: '',
            'charset' => 'utf8mb4',
            'collation' => 'utf8mb4_unicode_ci',
        ],
    ],
];
"#;

const ROUTES: &str = r#"<?php

use Core\Router;
use App\Controllers\{{ENTITY}}Controller;
use App\Middleware\AuthMiddleware;
use App\Middleware\CorsMiddleware;

$router = new Router();

$router->middleware(new CorsMiddleware());

$router->get('/{{ENTITY_PLURAL}}', [{{ENTITY}}Controller::class, 'index']);
$router->get('/{{ENTITY_PLURAL}}/create', [{{ENTITY}}Controller::class, 'create']);
$router->post('/{{ENTITY_PLURAL}}', [{{ENTITY}}Controller::class, 'store']);
$router->get('/{{ENTITY_PLURAL}}/{id}', [{{ENTITY}}Controller::class, 'show']);
$router->get('/{{ENTITY_PLURAL}}/{id}/edit', [{{ENTITY}}Controller::class, 'edit']);
$router->put('/{{ENTITY_PLURAL}}/{id}', [{{ENTITY}}Controller::class, 'update']);
$router->delete('/{{ENTITY_PLURAL}}/{id}', [{{ENTITY}}Controller::class, 'destroy']);

$router->group(['prefix' => 'api', 'middleware' => AuthMiddleware::class], function($router) {
    $router->get('/{{ENTITY_PLURAL}}', [{{ENTITY}}Controller::class, 'index']);
    $router->post('/{{ENTITY_PLURAL}}', [{{ENTITY}}Controller::class, 'store']);
    $router->get('/{{ENTITY_PLURAL}}/{id}', [{{ENTITY}}Controller::class, 'show']);
    $router->put('/{{ENTITY_PLURAL}}/{id}', [{{ENTITY}}Controller::class, 'update']);
    $router->delete('/{{ENTITY_PLURAL}}/{id}', [{{ENTITY}}Controller::class, 'destroy']);
});

return $router;
"#;

const MIGRATION: &str = r#"<?php

use Core\Database;

class Create{{ENTITY}}sTable
{
    public function up(): void
    {
        $db = Database::getInstance();
        $sql = "
            CREATE TABLE IF NOT EXISTS {{ENTITY_PLURAL}} (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL UNIQUE,
                status BOOLEAN DEFAULT true,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;
        ";
        $db->exec($sql);
    }

    public function down(): void
    {
        $db = Database::getInstance();
        $db->exec("DROP TABLE IF EXISTS {{ENTITY_PLURAL}}");
    }
}

$migration = new Create{{ENTITY}}sTable();
$migration->up();
echo "{{ENTITY_PLURAL}} table created successfully!\n";
"#;

const SEEDER: &str = r#"<?php

use App\Models\{{ENTITY}};

class {{ENTITY}}Seeder
{
    public function run(): void
    {
        $model = new {{ENTITY}}();

        $data = [
            ['name' => 'John Doe', 'email' => 'john@example.com', 'status' => true],
            ['name' => 'Jane Smith', 'email' => 'jane@example.com', 'status' => true],
            ['name' => 'Bob Wilson', 'email' => 'bob@example.com', 'status' => false],
        ];

        foreach ($data as $item) {
            $model->create($item);
        }

        echo "{{ENTITY}} seeded successfully!\n";
    }
}

$seeder = new {{ENTITY}}Seeder();
$seeder->run();
"#;

const PUBLIC_INDEX: &str = r#"<?php

session_start();

require_once __DIR__ . '/../vendor/autoload.php';

if (file_exists(__DIR__ . '/../.env')) {
    $lines = file(__DIR__ . '/../.env', FILE_IGNORE_NEW_LINES | FILE_SKIP_EMPTY_LINES);
    foreach ($lines as $line) {
        if (strpos(trim($line), '#') === 0) continue;
        list($name, $value) = explode('=', $line, 2);
        putenv(sprintf('%s=%s', trim($name), trim($value)));
    }
}

$appConfig = require __DIR__ . '/../config/app.php';

if ($appConfig['debug']) {
    error_reporting(E_ALL);
    ini_set('display_errors', '1');
} else {
    error_reporting(0);
    ini_set('display_errors', '0');
}

$router = require __DIR__ . '/../config/routes.php';

use Core\Request;

$request = Request::createFromGlobals();
$response = $router->dispatch($request);
$response->send();
"#;

const APP_CSS: &str = r#"* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #333;
    background: #f5f5f5;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
}

.navbar {
    background: #2c3e50;
    color: white;
    padding: 1rem 0;
    margin-bottom: 2rem;
}

.btn {
    display: inline-block;
    padding: 0.5rem 1rem;
    background: #3498db;
    color: white;
    text-decoration: none;
    border-radius: 4px;
    border: none;
    cursor: pointer;
}

.btn-primary {
    background: #2ecc71;
}

.btn-danger {
    background: #e74c3c;
}

.table {
    width: 100%;
    background: white;
    border-collapse: collapse;
    margin: 1rem 0;
}

.table th,
.table td {
    padding: 0.75rem;
    text-align: left;
    border-bottom: 1px solid #ddd;
}

.form {
    background: white;
    padding: 2rem;
    border-radius: 8px;
    max-width: 600px;
}

.form-group {
    margin-bottom: 1rem;
}

.card {
    background: white;
    padding: 1.5rem;
    border-radius: 8px;
    margin: 1rem 0;
}

footer {
    background: #2c3e50;
    color: white;
    text-align: center;
    padding: 2rem 0;
    margin-top: 3rem;
}
"#;

const APP_JS: &str = r#"// Confirmation dialogs
document.querySelectorAll('form[data-confirm]').forEach(form => {
    form.addEventListener('submit', (e) => {
        if (!confirm(form.dataset.confirm)) {
            e.preventDefault();
        }
    });
});

// AJAX form submissions
document.querySelectorAll('form[data-ajax]').forEach(form => {
    form.addEventListener('submit', async (e) => {
        e.preventDefault();

        const formData = new FormData(form);
        const response = await fetch(form.action, {
            method: form.method,
            body: formData,
            headers: {
                'X-Requested-With': 'XMLHttpRequest'
            }
        });

        const data = await response.json();
        console.log('Response:', data);
    });
});
"#;

const ROUTER: &str = r#"<?php

namespace Core;

class Router
{
    private array $routes = [];
    private array $middleware = [];
    private array $groupOptions = [];

    public function middleware($middleware): self
    {
        $this->middleware[] = $middleware;
        return $this;
    }

    public function group(array $options, callable $callback): void
    {
        $previousGroup = $this->groupOptions;
        $this->groupOptions = array_merge($this->groupOptions, $options);

        $callback($this);

        $this->groupOptions = $previousGroup;
    }

    public function get(string $uri, $action): void
    {
        $this->addRoute('GET', $uri, $action);
    }

    public function post(string $uri, $action): void
    {
        $this->addRoute('POST', $uri, $action);
    }

    public function put(string $uri, $action): void
    {
        $this->addRoute('PUT', $uri, $action);
    }

    public function delete(string $uri, $action): void
    {
        $this->addRoute('DELETE', $uri, $action);
    }

    private function addRoute(string $method, string $uri, $action): void
    {
        $prefix = $this->groupOptions['prefix'] ?? '';
        $middleware = $this->groupOptions['middleware'] ?? null;

        $uri = '/' . trim($prefix . '/' . trim($uri, '/'), '/');

        $this->routes[] = [
            'method' => $method,
            'uri' => $uri,
            'action' => $action,
            'middleware' => $middleware
        ];
    }

    public function dispatch(Request $request): Response
    {
        $method = $request->method();
        $uri = parse_url($request->uri(), PHP_URL_PATH);

        foreach ($this->routes as $route) {
            if ($route['method'] !== $method) {
                continue;
            }

            $pattern = preg_replace('/\{([a-zA-Z]+)\}/', '(?P<$1>[^/]+)', $route['uri']);
            $pattern = '#^' . $pattern . '$#';

            if (preg_match($pattern, $uri, $matches)) {
                $params = array_filter($matches, 'is_string', ARRAY_FILTER_USE_KEY);

                $handler = function($request) use ($route, $params) {
                    return $this->callAction($route['action'], $request, $params);
                };

                if ($route['middleware']) {
                    $middleware = new $route['middleware']();
                    $handler = fn($req) => $middleware->handle($req, fn($r) => $this->callAction($route['action'], $r, $params));
                }

                foreach (array_reverse($this->middleware) as $mw) {
                    $prevHandler = $handler;
                    $handler = fn($req) => $mw->handle($req, $prevHandler);
                }

                return $handler($request);
            }
        }

        return new Response('Not Found', 404);
    }

    private function callAction($action, Request $request, array $params): Response
    {
        if (is_array($action)) {
            [$controller, $method] = $action;
            $instance = new $controller();
            return $instance->$method($request, ...array_values($params));
        }

        if (is_callable($action)) {
            return $action($request, ...array_values($params));
        }

        return new Response('Invalid action', 500);
    }
}
"#;

const REQUEST: &str = r#"<?php

namespace Core;

class Request
{
    private string $method;
    private string $uri;
    private array $query;
    private array $post;
    private array $headers;

    public function __construct(
        string $method,
        string $uri,
        array $query = [],
        array $post = [],
        array $headers = []
    ) {
        $this->method = strtoupper($method);
        $this->uri = $uri;
        $this->query = $query;
        $this->post = $post;
        $this->headers = $headers;
    }

    public static function createFromGlobals(): self
    {
        $headers = [];
        foreach ($_SERVER as $key => $value) {
            if (strpos($key, 'HTTP_') === 0) {
                $headers[str_replace('HTTP_', '', $key)] = $value;
            }
        }

        return new self(
            $_SERVER['REQUEST_METHOD'] ?? 'GET',
            $_SERVER['REQUEST_URI'] ?? '/',
            $_GET,
            $_POST,
            $headers
        );
    }

    public function method(): string
    {
        return $this->post['_method'] ?? $this->method;
    }

    public function uri(): string
    {
        return $this->uri;
    }

    public function query(?string $key = null, $default = null)
    {
        if ($key === null) {
            return $this->query;
        }
        return $this->query[$key] ?? $default;
    }

    public function input(?string $key = null, $default = null)
    {
        if ($key === null) {
            return array_merge($this->query, $this->post);
        }
        return $this->post[$key] ?? $this->query[$key] ?? $default;
    }

    public function all(): array
    {
        return array_merge($this->query, $this->post);
    }

    public function header(string $key, $default = null)
    {
        return $this->headers[strtoupper(str_replace('-', '_', $key))] ?? $default;
    }

    public function expectsJson(): bool
    {
        return strpos($this->header('Accept', ''), 'application/json') !== false ||
               strpos($this->header('Content-Type', ''), 'application/json') !== false;
    }
}
"#;

const RESPONSE: &str = r#"<?php

namespace Core;

class Response
{
    public string $content;
    public int $statusCode;
    public array $headers;

    public function __construct(string $content = '', int $statusCode = 200, array $headers = [])
    {
        $this->content = $content;
        $this->statusCode = $statusCode;
        $this->headers = $headers;
    }

    public function send(): void
    {
        http_response_code($this->statusCode);

        foreach ($this->headers as $name => $value) {
            header("$name: $value");
        }

        echo $this->content;
    }
}
"#;

const DATABASE: &str = r#"<?php

namespace Core;

use PDO;
use PDOException;

class Database extends PDO
{
    private static ?Database $instance = null;

    private function __construct()
    {
        $config = require __DIR__ . '/../config/database.php';
        $connection = $config['connections'][$config['default']];

        $dsn = sprintf(
            '%s:host=%s;port=%s;dbname=%s;charset=%s',
            $connection['driver'],
            $connection['host'],
            $connection['port'],
            $connection['database'],
            $connection['charset']
        );

        try {
            parent::__construct(
                $dsn,
                $connection['username'],
                $connection['password'],
                [
                    PDO::ATTR_ERRMODE => PDO::ERRMODE_EXCEPTION,
                    PDO::ATTR_DEFAULT_FETCH_MODE => PDO::FETCH_ASSOC,
                    PDO::ATTR_EMULATE_PREPARES => false,
                ]
            );
        } catch (PDOException $e) {
            die('Database connection failed: ' . $e->getMessage());
        }
    }

    public static function getInstance(): Database
    {
        if (self::$instance === null) {
            self::$instance = new self();
        }
        return self::$instance;
    }

    private function __clone() {}
    public function __wakeup() {}
}
"#;

const CONTROLLER_TEST: &str = r#"<?php

use PHPUnit\Framework\TestCase;
use App\Controllers\{{ENTITY}}Controller;

class {{ENTITY}}ControllerTest extends TestCase
{
    public function testIndex()
    {
        $this->assertTrue(true);
    }

    public function testStore()
    {
        $this->assertTrue(true);
    }
}
"#;

const COMPOSER: &str = r#"{
    "name": "app/mvc-advanced",
    "description": "Modern PHP MVC Application for {{ENTITY}}",
    "type": "project",
    "require": {
        "php": "^8.0"
    },
    "require-dev": {
        "phpunit/phpunit": "^9.0"
    },
    "autoload": {
        "psr-4": {
            "App\\": "app/",
            "Core\\": "core/"
        }
    },
    "autoload-dev": {
        "psr-4": {
            "Tests\\": "tests/"
        }
    },
    "scripts": {
        "test": "phpunit",
        "migrate": "php database/migrate.php",
        "seed": "php database/seed.php"
    }
}
"#;

const ENV_EXAMPLE: &str = r#"APP_NAME="PHP MVC App"
APP_ENV=development
APP_DEBUG=true
APP_URL=http://localhost

DB_CONNECTION=mysql
DB_HOST=localhost
DB_PORT=3306
DB_DATABASE=app_db
DB_USERNAME=root
DB_PASSWORD=

SESSION_LIFETIME=120
SESSION_DRIVER=file
"#;

const HTACCESS: &str = r#"<IfModule mod_rewrite.c>
    RewriteEngine On
    RewriteBase /

    # Redirect to public directory
    RewriteCond %{REQUEST_URI} !^/public/
    RewriteRule ^(.*)$ /public/$1 [L]

    # Handle front controller
    RewriteCond %{REQUEST_FILENAME} !-f
    RewriteCond %{REQUEST_FILENAME} !-d
    RewriteRule ^(.*)$ /public/index.php [QSA,L]
</IfModule>

# Disable directory browsing
Options -Indexes

# Security headers
<IfModule mod_headers.c>
    Header set X-Content-Type-Options "nosniff"
    Header set X-Frame-Options "SAMEORIGIN"
    Header set X-XSS-Protection "1; mode=block"
</IfModule>
"#;

const README: &str = r#"# PHP MVC Advanced Application

Modern PHP MVC application with {{ENTITY}} CRUD functionality.

## Installation

1. Install dependencies:
   ```bash
   composer install
   ```

2. Copy environment file:
   ```bash
   cp .env.example .env
   ```

3. Configure your database in `.env`, then run migrations and start the
   development server:
   ```bash
   composer migrate
   php -S localhost:8000 -t public
   ```

## API Endpoints

- `GET /{{ENTITY_PLURAL}}` - List all {{ENTITY_PLURAL}}
- `GET /{{ENTITY_PLURAL}}/{id}` - Get a single {{ENTITY_LOWER}}
- `POST /{{ENTITY_PLURAL}}` - Create a new {{ENTITY_LOWER}}
- `PUT /{{ENTITY_PLURAL}}/{id}` - Update a {{ENTITY_LOWER}}
- `DELETE /{{ENTITY_PLURAL}}/{id}` - Delete a {{ENTITY_LOWER}}

## Project Structure

```
app/
├── Controllers/      # Application controllers
├── Models/           # Data models
├── Views/            # View templates
├── Middleware/       # HTTP middleware
├── Services/         # Business logic
└── Validators/       # Input validation

config/               # Configuration files
core/                 # Core framework files
database/
├── migrations/       # Database migrations
└── seeders/          # Database seeders
public/               # Public web root
tests/                # Unit tests
```

## Testing

```bash
composer test
```
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────
