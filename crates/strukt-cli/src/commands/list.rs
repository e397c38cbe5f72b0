//! Implementation of the `strukt list` command.

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

use strukt_core::domain::registry;

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let styles = registry::all_styles();

    match args.format {
        ListFormat::Table => {
            output.header("Available styles:")?;
            for style in styles {
                output.print(&format!(
                    "  {:<14} {} — {}",
                    style.id, style.display_name, style.description
                ))?;
                output.print(&format!(
                    "  {:<14} components: {}",
                    "",
                    style.components.join(", ")
                ))?;
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(styles).map_err(|e| CliError::ConfigError {
                message: format!("failed to serialise style registry: {e}"),
                source: Some(Box::new(e)),
            })?;
            println!("{json}");
        }

        ListFormat::List => {
            for style in styles {
                println!("{}", style.id);
            }
        }

        ListFormat::Csv => {
            println!("id,name,components");
            for style in styles {
                println!(
                    "{},{},{}",
                    style.id,
                    style.display_name,
                    style.components.join("|")
                );
            }
        }
    }

    Ok(())
}
