//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! The style argument is deliberately a free string, not a `ValueEnum`:
//! unknown style ids route to the fallback generator inside the core instead
//! of failing argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strukt",
    bin_name = "strukt",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3d7}\u{fe0f} PHP architecture scaffolding",
    long_about = "Strukt generates a CRUD boilerplate structure for an entity \
                  in a chosen architecture style (MVC, MVP, REST, ...).",
    after_help = "EXAMPLES:\n\
        \x20 strukt generate mvc Order\n\
        \x20 strukt generate rest User --components Controller,Model --docker\n\
        \x20 strukt generate mvc-advanced Product -o ./shop --gitignore\n\
        \x20 strukt list\n\
        \x20 strukt completions bash > /usr/share/bash-completion/completions/strukt",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a structure for an entity.
    #[command(
        visible_alias = "g",
        about = "Generate a project structure",
        after_help = "EXAMPLES:\n\
            \x20 strukt generate mvc Order\n\
            \x20 strukt generate functional Product -o ./shop\n\
            \x20 strukt generate mvc Order --components Controller,Model --skip-existing"
    )]
    Generate(GenerateArgs),

    /// List available architecture styles.
    #[command(
        visible_alias = "ls",
        about = "List available styles",
        after_help = "EXAMPLES:\n\
            \x20 strukt list\n\
            \x20 strukt list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strukt completions bash > ~/.local/share/bash-completion/completions/strukt\n\
            \x20 strukt completions zsh  > ~/.zfunc/_strukt\n\
            \x20 strukt completions fish > ~/.config/fish/completions/strukt.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `strukt generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Architecture style id (e.g. mvc, rest, functional, mvc-advanced, mvp).
    #[arg(value_name = "STYLE", help = "Architecture style")]
    pub style: String,

    /// Entity name the structure is built around.  Letters only.
    #[arg(value_name = "ENTITY", help = "Entity name (e.g. Order, Product)")]
    pub entity: String,

    /// Target directory.  Must already exist.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory (default: current directory)"
    )]
    pub output: PathBuf,

    /// Components to generate; omit to generate all of them.
    #[arg(
        short = 'C',
        long = "components",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated component labels (default: all)"
    )]
    pub components: Option<Vec<String>>,

    /// Add Docker artifacts at the root.
    #[arg(long = "docker", help = "Include docker-compose.yml, Dockerfile, .dockerignore")]
    pub docker: bool,

    /// Add a .gitignore at the root.
    #[arg(long = "gitignore", help = "Include a .gitignore")]
    pub gitignore: bool,

    /// Skip the generated test stubs.
    #[arg(long = "no-tests", help = "Do not generate test stubs")]
    pub no_tests: bool,

    /// Leave pre-existing files and conflicting paths untouched.
    #[arg(
        long = "skip-existing",
        help = "Never overwrite existing files (default: overwrite)"
    )]
    pub skip_existing: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `strukt list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strukt completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["strukt", "generate", "mvc", "Order", "--yes"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.style, "mvc");
                assert_eq!(args.entity, "Order");
                assert!(args.yes);
                assert_eq!(args.output, PathBuf::from("."));
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn components_split_on_commas() {
        let cli = Cli::parse_from([
            "strukt",
            "generate",
            "mvc",
            "Order",
            "--components",
            "Controller,Model",
        ]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(
                args.components,
                Some(vec!["Controller".into(), "Model".into()])
            );
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn unknown_style_is_accepted_by_the_parser() {
        // Fallback routing happens in the core, not in clap.
        let cli = Cli::parse_from(["strukt", "generate", "no-such-style", "Order"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["strukt", "g", "mvp", "Invoice"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["strukt", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
