//! Dedicated generator for the `mvp` style.
//!
//! The flatter layout: passive views, testable presenters, contracts between
//! them, and `.phtml` templates two to three directory levels deep.

use crate::domain::{
    entity::EntityName,
    error::DomainError,
    generators::{GenerateOptions, Generator, fill},
    tree::DirectoryNode,
};

/// Model-View-Presenter layout.
#[derive(Debug, Clone, Copy)]
pub struct MvpGenerator;

impl Generator for MvpGenerator {
    fn generate(
        &self,
        entity: &EntityName,
        options: &GenerateOptions,
    ) -> Result<DirectoryNode, DomainError> {
        let mut root = DirectoryNode::new();

        let mut app = DirectoryNode::new();
        if options.wants("Models") {
            app.insert_dir(
                "Models",
                DirectoryNode::new()
                    .with_file(
                        format!("{}Model.php", entity.canonical()),
                        fill(MODEL, entity),
                    )
                    .with_file("BaseModel.php", BASE_MODEL)
                    .with_file(
                        format!("{}Repository.php", entity.canonical()),
                        fill(REPOSITORY, entity),
                    ),
            );
        }
        if options.wants("Views") {
            app.insert_dir(
                "Views",
                DirectoryNode::new()
                    .with_file(format!("{}View.php", entity.canonical()), fill(VIEW, entity))
                    .with_file("BaseView.php", BASE_VIEW),
            );
            app.insert_dir(
                "Templates",
                DirectoryNode::new().with_dir(
                    entity.lower(),
                    DirectoryNode::new()
                        .with_file("list.phtml", fill(LIST_TEMPLATE, entity))
                        .with_file("form.phtml", fill(FORM_TEMPLATE, entity))
                        .with_file("detail.phtml", fill(DETAIL_TEMPLATE, entity)),
                ),
            );
        }
        if options.wants("Presenters") {
            app.insert_dir(
                "Presenters",
                DirectoryNode::new()
                    .with_file(
                        format!("{}Presenter.php", entity.canonical()),
                        fill(PRESENTER, entity),
                    )
                    .with_file("BasePresenter.php", BASE_PRESENTER),
            );
        }
        if options.wants("Contracts") {
            app.insert_dir(
                "Contracts",
                DirectoryNode::new()
                    .with_file(
                        format!("{}ViewInterface.php", entity.canonical()),
                        fill(VIEW_INTERFACE, entity),
                    )
                    .with_file(
                        format!("{}PresenterInterface.php", entity.canonical()),
                        fill(PRESENTER_INTERFACE, entity),
                    ),
            );
        }
        if options.wants("Services") {
            app.insert_dir(
                "Services",
                DirectoryNode::new().with_file(
                    format!("{}Service.php", entity.canonical()),
                    fill(SERVICE, entity),
                ),
            );
        }
        if !app.is_empty() {
            root.insert_dir("app", app);
        }

        if options.wants("Config") {
            root.insert_dir(
                "config",
                DirectoryNode::new()
                    .with_file("app.php", APP_CONFIG)
                    .with_file("database.php", DATABASE_CONFIG),
            );
        }

        root.insert_dir(
            "public",
            DirectoryNode::new().with_file("index.php", fill(PUBLIC_INDEX, entity)),
        );

        if options.include_tests {
            root.insert_dir(
                "tests",
                DirectoryNode::new()
                    .with_dir(
                        "Presenters",
                        DirectoryNode::new().with_file(
                            format!("{}PresenterTest.php", entity.canonical()),
                            fill(PRESENTER_TEST, entity),
                        ),
                    )
                    .with_dir(
                        "Models",
                        DirectoryNode::new().with_file(
                            format!("{}ModelTest.php", entity.canonical()),
                            fill(MODEL_TEST, entity),
                        ),
                    ),
            );
        }

        root.insert_file("composer.json", fill(COMPOSER, entity));
        root.insert_file("README.md", fill(README, entity));

        Ok(root)
    }
}

// ── Template payloads ─────────────────────────────────────────────────────────

const MODEL: &str = r#"<?php

namespace App\Models;

class {{ENTITY}}Model extends BaseModel
{
    protected string $table = '{{ENTITY_PLURAL}}';

    public function findAll(): array
    {
        return $this->query("SELECT * FROM {$this->table} ORDER BY id DESC");
    }

    public function findById(int $id): ?array
    {
        $rows = $this->query("SELECT * FROM {$this->table} WHERE id = ?", [$id]);
        return $rows[0] ?? null;
    }

    public function insert(array $data): int
    {
        $columns = implode(', ', array_keys($data));
        $placeholders = implode(', ', array_fill(0, count($data), '?'));
        $this->execute(
            "INSERT INTO {$this->table} ($columns) VALUES ($placeholders)",
            array_values($data)
        );
        return $this->lastInsertId();
    }

    public function remove(int $id): bool
    {
        return $this->execute("DELETE FROM {$this->table} WHERE id = ?", [$id]);
    }
}
"#;

const BASE_MODEL: &str = r#"<?php

namespace App\Models;

use PDO;

abstract class BaseModel
{
    protected string $table;
    protected PDO $pdo;

    public function __construct(PDO $pdo)
    {
        $this->pdo = $pdo;
    }

    protected function query(string $sql, array $params = []): array
    {
        $stmt = $this->pdo->prepare($sql);
        $stmt->execute($params);
        return $stmt->fetchAll(PDO::FETCH_ASSOC);
    }

    protected function execute(string $sql, array $params = []): bool
    {
        $stmt = $this->pdo->prepare($sql);
        return $stmt->execute($params);
    }

    protected function lastInsertId(): int
    {
        return (int) $this->pdo->lastInsertId();
    }
}
"#;

const REPOSITORY: &str = r#"<?php

namespace App\Models;

class {{ENTITY}}Repository
{
    private {{ENTITY}}Model $model;

    public function __construct({{ENTITY}}Model $model)
    {
        $this->model = $model;
    }

    public function all(): array
    {
        return $this->model->findAll();
    }

    public function find(int $id): ?array
    {
        return $this->model->findById($id);
    }

    public function save(array $data): int
    {
        return $this->model->insert($data);
    }

    public function delete(int $id): bool
    {
        return $this->model->remove($id);
    }
}
"#;

const VIEW: &str = r#"<?php

namespace App\Views;

use App\Contracts\{{ENTITY}}ViewInterface;

class {{ENTITY}}View extends BaseView implements {{ENTITY}}ViewInterface
{
    public function showList(array ${{ENTITY_PLURAL}}): void
    {
        $this->render('{{ENTITY_LOWER}}/list', ['{{ENTITY_PLURAL}}' => ${{ENTITY_PLURAL}}]);
    }

    public function showDetail(array ${{ENTITY_LOWER}}): void
    {
        $this->render('{{ENTITY_LOWER}}/detail', ['{{ENTITY_LOWER}}' => ${{ENTITY_LOWER}}]);
    }

    public function showForm(array $errors = []): void
    {
        $this->render('{{ENTITY_LOWER}}/form', ['errors' => $errors]);
    }

    public function showError(string $message): void
    {
        http_response_code(404);
        echo htmlspecialchars($message);
    }
}
"#;

const BASE_VIEW: &str = r#"<?php

namespace App\Views;

abstract class BaseView
{
    protected function render(string $template, array $data = []): void
    {
        extract($data);
        require __DIR__ . '/../Templates/' . $template . '.phtml';
    }
}
"#;

const PRESENTER: &str = r#"<?php

namespace App\Presenters;

use App\Contracts\{{ENTITY}}PresenterInterface;
use App\Contracts\{{ENTITY}}ViewInterface;
use App\Services\{{ENTITY}}Service;

class {{ENTITY}}Presenter extends BasePresenter implements {{ENTITY}}PresenterInterface
{
    private {{ENTITY}}ViewInterface $view;
    private {{ENTITY}}Service $service;

    public function __construct({{ENTITY}}ViewInterface $view, {{ENTITY}}Service $service)
    {
        $this->view = $view;
        $this->service = $service;
    }

    public function listAll(): void
    {
        $this->view->showList($this->service->getAll());
    }

    public function showOne(int $id): void
    {
        ${{ENTITY_LOWER}} = $this->service->getById($id);

        if (${{ENTITY_LOWER}} === null) {
            $this->view->showError('{{ENTITY}} not found');
            return;
        }

        $this->view->showDetail(${{ENTITY_LOWER}});
    }

    public function create(array $input): void
    {
        $errors = $this->service->validate($input);

        if ($errors) {
            $this->view->showForm($errors);
            return;
        }

        $this->service->create($input);
        $this->listAll();
    }
}
"#;

const BASE_PRESENTER: &str = r#"<?php

namespace App\Presenters;

abstract class BasePresenter
{
    protected function redirect(string $url): void
    {
        header('Location: ' . $url);
        exit;
    }
}
"#;

const VIEW_INTERFACE: &str = r#"<?php

namespace App\Contracts;

interface {{ENTITY}}ViewInterface
{
    public function showList(array ${{ENTITY_PLURAL}}): void;

    public function showDetail(array ${{ENTITY_LOWER}}): void;

    public function showForm(array $errors = []): void;

    public function showError(string $message): void;
}
"#;

const PRESENTER_INTERFACE: &str = r#"<?php

namespace App\Contracts;

interface {{ENTITY}}PresenterInterface
{
    public function listAll(): void;

    public function showOne(int $id): void;

    public function create(array $input): void;
}
"#;

const SERVICE: &str = r#"<?php

namespace App\Services;

use App\Models\{{ENTITY}}Repository;

class {{ENTITY}}Service
{
    private {{ENTITY}}Repository $repository;

    public function __construct({{ENTITY}}Repository $repository)
    {
        $this->repository = $repository;
    }

    public function getAll(): array
    {
        return $this->repository->all();
    }

    public function getById(int $id): ?array
    {
        return $this->repository->find($id);
    }

    public function create(array $data): int
    {
        return $this->repository->save($data);
    }

    public function validate(array $data): array
    {
        $errors = [];

        if (empty($data['name'])) {
            $errors['name'] = 'Name is required';
        }
        if (empty($data['email']) || !filter_var($data['email'], FILTER_VALIDATE_EMAIL)) {
            $errors['email'] = 'A valid email is required';
        }

        return $errors;
    }
}
"#;

const LIST_TEMPLATE: &str = r#"<h1>{{ENTITY}} List</h1>
<table>
    <thead>
        <tr><th>ID</th><th>Name</th><th>Email</th></tr>
    </thead>
    <tbody>
        <?php foreach (${{ENTITY_PLURAL}} as $row): ?>
        <tr>
            <td><?= htmlspecialchars($row['id']) ?></td>
            <td><?= htmlspecialchars($row['name']) ?></td>
            <td><?= htmlspecialchars($row['email']) ?></td>
        </tr>
        <?php endforeach; ?>
    </tbody>
</table>
<a href="?action=create">New {{ENTITY}}</a>
"#;

const FORM_TEMPLATE: &str = r#"<h1>Create {{ENTITY}}</h1>
<?php if (!empty($errors)): ?>
<ul class="errors">
    <?php foreach ($errors as $error): ?>
    <li><?= htmlspecialchars($error) ?></li>
    <?php endforeach; ?>
</ul>
<?php endif; ?>
<form method="POST">
    <label>Name: <input type="text" name="name"></label>
    <label>Email: <input type="email" name="email"></label>
    <button type="submit">Save</button>
</form>
"#;

const DETAIL_TEMPLATE: &str = r#"<h1>{{ENTITY}} Detail</h1>
<dl>
    <dt>ID</dt><dd><?= htmlspecialchars(${{ENTITY_LOWER}}['id']) ?></dd>
    <dt>Name</dt><dd><?= htmlspecialchars(${{ENTITY_LOWER}}['name']) ?></dd>
    <dt>Email</dt><dd><?= htmlspecialchars(${{ENTITY_LOWER}}['email']) ?></dd>
</dl>
<a href="?action=list">Back to list</a>
"#;

const APP_CONFIG: &str = r#"<?php

return [
    'name' => getenv('APP_NAME') ?: 'PHP MVP App',
    'env' => getenv('APP_ENV') ?: 'development',
    'debug' => getenv('APP_DEBUG') === 'true',
];
"#;

const DATABASE_CONFIG: &str = r#"<?php

return [
    'dsn' => getenv('DB_DSN') ?: 'mysql:host=localhost;dbname=app_db;charset=utf8mb4',
    'username' => getenv('DB_USERNAME') ?: 'root',
    'password' => getenv('DB_PASSWORD') ?: '',
];
"#;

const PUBLIC_INDEX: &str = r#"<?php

require_once __DIR__ . '/../vendor/autoload.php';

use App\Models\{{ENTITY}}Model;
use App\Models\{{ENTITY}}Repository;
use App\Presenters\{{ENTITY}}Presenter;
use App\Services\{{ENTITY}}Service;
use App\Views\{{ENTITY}}View;

$config = require __DIR__ . '/../config/database.php';
$pdo = new PDO($config['dsn'], $config['username'], $config['password']);

$view = new {{ENTITY}}View();
$service = new {{ENTITY}}Service(new {{ENTITY}}Repository(new {{ENTITY}}Model($pdo)));
$presenter = new {{ENTITY}}Presenter($view, $service);

$action = $_GET['action'] ?? 'list';

switch ($action) {
    case 'show':
        $presenter->showOne((int) ($_GET['id'] ?? 0));
        break;
    case 'create':
        if ($_SERVER['REQUEST_METHOD'] === 'POST') {
            $presenter->create($_POST);
        } else {
            $view->showForm();
        }
        break;
    default:
        $presenter->listAll();
}
"#;

const PRESENTER_TEST: &str = r#"<?php

use PHPUnit\Framework\TestCase;
use App\Presenters\{{ENTITY}}Presenter;

class {{ENTITY}}PresenterTest extends TestCase
{
    public function testListAllRendersList()
    {
        $this->assertTrue(true);
    }

    public function testShowOneHandlesMissing()
    {
        $this->assertTrue(true);
    }
}
"#;

const MODEL_TEST: &str = r#"<?php

use PHPUnit\Framework\TestCase;
use App\Models\{{ENTITY}}Model;

class {{ENTITY}}ModelTest extends TestCase
{
    public function testTableName()
    {
        $this->assertTrue(true);
    }
}
"#;

const COMPOSER: &str = r#"{
    "name": "app/mvp",
    "description": "PHP MVP application for {{ENTITY}}",
    "type": "project",
    "require": {
        "php": "^8.0"
    },
    "require-dev": {
        "phpunit/phpunit": "^9.0"
    },
    "autoload": {
        "psr-4": {
            "App\\": "app/"
        }
    },
    "scripts": {
        "test": "phpunit"
    }
}
"#;

const README: &str = r#"# PHP MVP Application

Model-View-Presenter application scaffolded around {{ENTITY}}.

The presenter mediates between the passive `{{ENTITY}}View` and the
`{{ENTITY}}Service`; contracts in `app/Contracts` keep both sides mockable.

## Running

```bash
composer install
php -S localhost:8000 -t public
```

## Testing

```bash
composer test
```
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────
