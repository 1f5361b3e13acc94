//! Implementation of the `crudkit generate` command.
//!
//! Responsibility: resolve options from flags and config, call the core
//! scaffold service, and display results. No business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use crudkit_adapters::LocalFilesystem;
use crudkit_core::application::{ScaffoldOptions, ScaffoldReport, ScaffoldService};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    commands::build_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `crudkit generate` command.
///
/// Dispatch sequence:
/// 1. Resolve output directory, extension and template directory
/// 2. Build the template store (built-ins plus custom manifests)
/// 3. Offer to overwrite existing files when attached to a terminal
/// 4. Scaffold via `ScaffoldService`
/// 5. Report what was (or would be) written
#[instrument(skip_all, fields(resource = %args.resource))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve options
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.scaffold.output_dir.clone());
    let templates_dir = args
        .templates_dir
        .clone()
        .or_else(|| config.templates.local_path.clone());
    let mut options = ScaffoldOptions {
        extension: args.ext.unwrap_or(config.scaffold.extension),
        force: args.force,
        dry_run: args.dry_run,
    };

    debug!(
        output_dir = %output_dir.display(),
        extension = %options.extension,
        templates_dir = ?templates_dir,
        "Options resolved"
    );

    // 2. Adapters and service
    let store = build_store(templates_dir.as_deref())?;
    let service = ScaffoldService::new(Box::new(store), Box::new(LocalFilesystem::new()));

    // 3. Existing files
    if !options.force && !options.dry_run && !global.quiet {
        options.force = prompt::confirm_overwrite(&service, &args.resource, &output_dir, &options)?;
    }

    // 4. Scaffold
    info!(resource = %args.resource, path = %output_dir.display(), "Scaffold started");
    let report = service.scaffold(&args.resource, &output_dir, options)?;
    info!(files = report.files.len(), "Scaffold completed");

    // 5. Report
    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }
    show_report(&report, &output_dir, &output)?;

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_report(report: &ScaffoldReport, output_dir: &Path, out: &OutputManager) -> CliResult<()> {
    if report.dry_run {
        out.info(&format!(
            "Dry run: would create {} file(s) for '{}' in {}",
            report.files.len(),
            report.resource,
            output_dir.display(),
        ))?;
        for file in &report.files {
            let note = if report.overwritten.contains(&file.path) {
                " (overwrite)"
            } else {
                ""
            };
            out.print(&format!("  {}{note}", file.path))?;
        }
        return Ok(());
    }

    for file in &report.files {
        out.success(&format!("Created {} ({} bytes)", file.path, file.bytes))?;
    }
    for path in &report.overwritten {
        out.warning(&format!("Overwrote {path}"))?;
    }

    out.print("")?;
    out.print(&format!(
        "Resource '{}' scaffolded. Register the view in your router to use it.",
        report.resource
    ))?;
    Ok(())
}

/// Overwrite confirmation. Only asks when stdin and stderr are terminals;
/// otherwise the scaffold fails on the first existing file.
#[cfg(feature = "interactive")]
mod prompt {
    use super::*;
    use console::Term;
    use dialoguer::Confirm;
    use std::io::IsTerminal;
    use std::path::PathBuf;

    use crate::error::CliError;

    pub fn confirm_overwrite(
        service: &ScaffoldService,
        resource: &str,
        output_dir: &Path,
        options: &ScaffoldOptions,
    ) -> CliResult<bool> {
        if !std::io::stdin().is_terminal() || !Term::stderr().is_term() {
            return Ok(false);
        }

        // Invalid names surface from scaffold() with the usual error.
        let Ok(artifacts) = service.plan(resource, options.extension) else {
            return Ok(false);
        };
        let existing: Vec<PathBuf> = service.conflicts(&artifacts, output_dir);
        if existing.is_empty() {
            return Ok(false);
        }

        let term = Term::stderr();
        for path in &existing {
            term.write_line(&format!("  exists: {}", path.display()))?;
        }

        let overwrite = Confirm::new()
            .with_prompt(format!("Overwrite {} existing file(s)?", existing.len()))
            .default(false)
            .interact_on(&term)
            .map_err(|e| CliError::InvalidInput {
                message: "failed to read confirmation".into(),
                source: Some(Box::new(e)),
            })?;

        if overwrite {
            Ok(true)
        } else {
            Err(CliError::Cancelled)
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod prompt {
    use super::*;

    pub fn confirm_overwrite(
        _service: &ScaffoldService,
        _resource: &str,
        _output_dir: &Path,
        _options: &ScaffoldOptions,
    ) -> CliResult<bool> {
        Ok(false)
    }
}
