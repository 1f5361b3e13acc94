//! Implementation of the `crudkit list` command.

use crudkit_adapters::LocalFilesystem;
use crudkit_core::application::{ScaffoldService, TemplateInfo};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::build_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let templates_dir = args.templates_dir.or(config.templates.local_path);
    let store = build_store(templates_dir.as_deref())?;

    let service = ScaffoldService::new(Box::new(store), Box::new(LocalFilesystem::new()));
    let templates = service.list_templates()?;

    match args.format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for line in table_rows(&templates) {
                output.print(&line)?;
            }
        }

        // JSON, list and CSV go straight to stdout: they must stay parseable
        // in pipes, quiet mode included.
        ListFormat::Json => output.json(&templates)?,

        ListFormat::List => {
            for t in &templates {
                println!("{}", t.name);
            }
        }

        ListFormat::Csv => {
            println!("name,path,description");
            for t in &templates {
                println!("{},{},{}", csv_field(&t.name), csv_field(&t.path), csv_field(&t.description));
            }
        }
    }

    Ok(())
}

fn table_rows(templates: &[TemplateInfo]) -> Vec<String> {
    let name_width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
    let path_width = templates.iter().map(|t| t.path.len()).max().unwrap_or(0);

    templates
        .iter()
        .map(|t| {
            format!(
                "  {:<name_width$}  {:<path_width$}  {}",
                t.name, t.path, t.description
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
