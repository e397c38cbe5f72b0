//! Cross-cutting optional artifacts merged at the tree root.
//!
//! The containerization trio and the ignore file are pure functions of the
//! entity name only; the orchestrator merges them into whatever tree the
//! style generator produced.

use crate::domain::entity::EntityName;
use crate::domain::generators::fill;

/// Compose descriptor: PHP app container plus a MySQL service.
pub fn docker_compose(entity: &EntityName) -> String {
    fill(DOCKER_COMPOSE, entity)
}

/// Build descriptor for the PHP application image.
pub fn dockerfile(entity: &EntityName) -> String {
    fill(DOCKERFILE, entity)
}

/// Ignore file for the Docker build context.
pub fn dockerignore() -> String {
    DOCKERIGNORE.to_string()
}

/// Ignore file for the generated project's repository.
pub fn gitignore() -> String {
    GITIGNORE.to_string()
}

const DOCKER_COMPOSE: &str = r#"services:
  app:
    build: .
    container_name: {{ENTITY_LOWER}}-app
    ports:
      - "8000:8000"
    volumes:
      - .:/var/www/html
    depends_on:
      - db

  db:
    image: mysql:8.0
    container_name: {{ENTITY_LOWER}}-db
    environment:
      MYSQL_DATABASE: app_db
      MYSQL_ROOT_PASSWORD: root
    ports:
      - "3306:3306"
    volumes:
      - db-data:/var/lib/mysql

volumes:
  db-data:
"#;

const DOCKERFILE: &str = r#"FROM php:8.2-cli

RUN docker-php-ext-install pdo pdo_mysql

WORKDIR /var/www/html

COPY . .

EXPOSE 8000

CMD ["php", "-S", "0.0.0.0:8000", "-t", "public"]
"#;

const DOCKERIGNORE: &str = r#".git
vendor
node_modules
.env
*.log
"#;

const GITIGNORE: &str = r#"/vendor/
.env
composer.lock
*.log
.DS_Store
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_names_containers_after_entity() {
        let entity = EntityName::new("Order").unwrap();
        let compose = docker_compose(&entity);
        assert!(compose.contains("order-app"));
        assert!(compose.contains("order-db"));
    }

    #[test]
    fn artifacts_are_pure_functions_of_entity() {
        let entity = EntityName::new("Order").unwrap();
        assert_eq!(docker_compose(&entity), docker_compose(&entity));
        assert_eq!(dockerfile(&entity), dockerfile(&entity));
        assert_eq!(dockerignore(), dockerignore());
        assert_eq!(gitignore(), gitignore());
    }
}
