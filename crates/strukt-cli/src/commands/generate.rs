//! Implementation of the `strukt generate` command.
//!
//! Responsibility: resolve the generation request (validated entity name,
//! existing output directory, options, conflict policy), call the core
//! scaffold service, and display results.  The core never re-validates what
//! this layer resolved.

use tracing::{debug, info, instrument};

use strukt_adapters::LocalFilesystem;
use strukt_core::{
    application::{
        GenerateOptions, ScaffoldService, plan,
        services::materializer::{ConflictPolicy, KeepExisting, Overwrite},
    },
    domain::{EntityName, find_style},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `strukt generate` command.
///
/// Dispatch sequence:
/// 1. Validate the entity name and output directory
/// 2. Build the resolved option set
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run` (prints the planned paths)
/// 5. Execute generation via `ScaffoldService`
/// 6. Report the resolved style and entity
#[instrument(skip_all, fields(style = %args.style, entity = %args.entity))]
pub fn execute(args: GenerateArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // 1. Resolve the request. InvalidRequest never reaches the core.
    let entity = EntityName::new(&args.entity).map_err(|_| CliError::InvalidEntityName {
        name: args.entity.clone(),
    })?;

    if !args.output.is_dir() {
        return Err(CliError::OutputDirMissing {
            path: args.output.clone(),
        });
    }

    // 2. Options.
    let options = GenerateOptions {
        components: args.components.clone(),
        include_docker: args.docker,
        include_tests: !args.no_tests,
        include_gitignore: args.gitignore,
    };

    // Unknown ids are valid — the core falls back — but the display name
    // comes from the registry when we have one.
    let style_def = find_style(&args.style);
    if style_def.is_none() {
        output.warning(&format!(
            "Unknown style '{}', using the classic fallback layout",
            args.style
        ))?;
    }
    let style_display = style_def
        .map(|def| def.display_name)
        .unwrap_or(args.style.as_str());

    debug!(
        style = %args.style,
        resolved = style_display,
        components = ?options.components,
        "request resolved"
    );

    // 3. Show configuration and confirm.
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&args, style_display, &entity, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: list the planned paths, write nothing.
    if args.dry_run {
        let tree = plan(&args.style, &entity, &options)?;
        output.info(&format!(
            "Dry run: would create {} paths under {}",
            tree.paths().len(),
            args.output.display(),
        ))?;
        for path in tree.paths() {
            output.print(&format!("  {}", path.display()))?;
        }
        return Ok(());
    }

    // 5. Generate through the core with the selected conflict policy.
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let policy: &dyn ConflictPolicy = if args.skip_existing {
        &KeepExisting
    } else {
        &Overwrite
    };

    output.header(&format!("Generating {style_display} structure..."))?;
    info!(root = %args.output.display(), "generation started");

    service.generate_with_policy(&args.output, &args.style, &entity, &options, policy)?;

    // 6. Success: name the resolved style and the entity.
    output.success(&format!(
        "{style_display} structure for '{entity}' generated successfully!"
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.output.display()))?;
        output.print("  composer install")?;
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    args: &GenerateArgs,
    display: &str,
    entity: &EntityName,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Style:      {display}"))?;
    out.print(&format!("  Entity:     {entity}"))?;
    out.print(&format!(
        "  Components: {}",
        args.components
            .as_ref()
            .map(|c| c.join(", "))
            .unwrap_or_else(|| "all".into())
    ))?;
    out.print(&format!("  Location:   {}", args.output.display()))?;
    if args.docker {
        out.print("  Docker:     yes")?;
    }
    if args.gitignore {
        out.print("  Gitignore:  yes")?;
    }
    if args.skip_existing {
        out.print("  Conflicts:  keep existing files")?;
    }
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::AppConfig;
    use std::path::Path;

    fn args(style: &str, entity: &str, output: &Path) -> GenerateArgs {
        GenerateArgs {
            style: style.into(),
            entity: entity.into(),
            output: output.to_path_buf(),
            components: None,
            docker: false,
            gitignore: false,
            no_tests: false,
            skip_existing: false,
            yes: true,
            dry_run: false,
        }
    }

    fn quiet_global() -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        }
    }

    fn out() -> OutputManager {
        OutputManager::new(&quiet_global(), &AppConfig::default())
    }

    #[test]
    fn rejects_invalid_entity_before_touching_the_core() {
        let err = execute(args("mvc", "Order1", Path::new(".")), quiet_global(), out())
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidEntityName { .. }));
    }

    #[test]
    fn rejects_missing_output_directory() {
        let err = execute(
            args("mvc", "Order", Path::new("/definitely/not/here")),
            quiet_global(),
            out(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::OutputDirMissing { .. }));
    }
}
