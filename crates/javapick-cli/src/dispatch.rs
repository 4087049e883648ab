use std::path::Path;

use anyhow::{Context, Result};
use javapick_core::{leading_major, Installation};
use javapick_resolver::{classify_major, resolve, RequirementTable};
use tracing::info;

use crate::render::{current_output_style, format_classification_line, format_resolution_lines};
use crate::{Cli, Commands};

pub(crate) fn run_cli(cli: Cli) -> Result<()> {
    let table = load_requirement_table(cli.requirements.as_deref(), cli.default_java)?;

    match cli.command {
        Commands::Required { target } => {
            println!("{}", table.required_major_for(&target));
        }
        Commands::Resolve {
            target,
            installations,
            json,
        } => {
            let installations = read_installations(&installations)?;
            let required = table.required_major_for(&target);
            let resolution = resolve(&installations, required);

            if json {
                let rendered = serde_json::to_string_pretty(&resolution)
                    .context("failed to encode resolution")?;
                println!("{rendered}");
                return Ok(());
            }

            for line in format_resolution_lines(&target, &resolution, current_output_style()) {
                println!("{line}");
            }
        }
        Commands::Classify { version, required } => {
            let major = leading_major(&version).unwrap_or(0);
            let tier = classify_major(major, required);
            println!(
                "{}",
                format_classification_line(&version, tier, current_output_style())
            );
        }
    }

    Ok(())
}

pub(crate) fn load_requirement_table(
    path: Option<&Path>,
    default_java: Option<u32>,
) -> Result<RequirementTable> {
    let mut table = match path {
        Some(path) => {
            info!(path = %path.display(), "loading requirement table");
            RequirementTable::load(path)?
        }
        None => RequirementTable::minecraft(),
    };

    if let Some(default_java) = default_java {
        table.default = default_java;
        table.validate()?;
    }

    Ok(table)
}

pub(crate) fn read_installations(path: &Path) -> Result<Vec<Installation>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed reading installations: {}", path.display()))?;
    parse_installations(&content)
        .with_context(|| format!("invalid installations file: {}", path.display()))
}

pub(crate) fn parse_installations(content: &str) -> Result<Vec<Installation>> {
    serde_json::from_str(content).context("failed to parse installation list")
}

