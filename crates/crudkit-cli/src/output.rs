//! Writing command results to stdout.
//!
//! Status lines carry a marker (`✓`, `⚠`, `ℹ`) that is colored only in
//! [`OutputFormat::Human`]. Everything except [`OutputManager::json`] is
//! dropped under `--quiet`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Warning,
    Info,
}

impl Status {
    fn marker(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Info => Style::new().blue(),
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = args
            .output_format
            .resolve(config.output.format, io::stdout().is_terminal());

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Resolved format, never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.line(msg.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.line(line)
    }

    /// Pretty JSON, written even under `--quiet` since it is the result.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&rendered)
    }

    fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        self.line(self.marked(status, msg))
    }

    fn marked(&self, status: Status, msg: &str) -> String {
        if self.color {
            let style = status.style();
            format!("{} {}", status.marker().style(style.bold()), msg.style(style))
        } else {
            format!("{} {msg}", status.marker())
        }
    }

    fn line(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format,
        }
    }

    #[test]
    fn color_only_for_human_format() {
        let config = AppConfig::default();
        assert!(OutputManager::new(&args(false, OutputFormat::Human), &config).color);
        assert!(!OutputManager::new(&args(true, OutputFormat::Human), &config).color);
        assert!(!OutputManager::new(&args(false, OutputFormat::Plain), &config).color);
        assert!(!OutputManager::new(&args(false, OutputFormat::Json), &config).color);
    }

    #[test]
    fn config_disables_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args(false, OutputFormat::Human), &config).color);
    }

    #[test]
    fn configured_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;

        let out = OutputManager::new(&args(false, OutputFormat::Auto), &config);
        assert_eq!(out.format(), OutputFormat::Json);

        let out = OutputManager::new(&args(false, OutputFormat::Plain), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn plain_markers_have_no_escape_codes() {
        let out = OutputManager::new(&args(false, OutputFormat::Plain), &AppConfig::default());
        assert_eq!(out.marked(Status::Success, "Created api/widget.js"), "\u{2713} Created api/widget.js");
        assert!(!out.marked(Status::Warning, "x").contains('\u{1b}'));
    }

    #[test]
    fn quiet_drops_status_lines() {
        let mut quiet = args(false, OutputFormat::Plain);
        quiet.quiet = true;
        let out = OutputManager::new(&quiet, &AppConfig::default());
        assert!(out.success("hidden").is_ok());
        assert!(out.json(&["api", "view"]).is_ok());
    }
}
