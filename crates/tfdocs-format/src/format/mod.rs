//! Formatter registry — trait-based output format dispatch.

pub mod json;
pub mod markup;
pub mod pretty;
pub mod tfvars;
pub mod toml;
pub mod xml;
pub mod yaml;

use crate::error::{Error, Result};
use crate::model::Module;
use crate::settings::Settings;

/// Renders a loaded module in one output format.
pub trait Formatter {
    fn render(&self, module: &Module, settings: &Settings) -> Result<String>;
}

/// Every name [`create_formatter`] resolves.
pub const FORMATTERS: &[&str] = &[
    "asciidoc",
    "asciidoc document",
    "asciidoc table",
    "json",
    "markdown",
    "markdown document",
    "markdown table",
    "pretty",
    "tfvars hcl",
    "tfvars json",
    "toml",
    "xml",
    "yaml",
];

/// Create a formatter for the given name: a subcommand path without the
/// program name, e.g. `markdown table`.
pub fn create_formatter(name: &str) -> Result<Box<dyn Formatter>> {
    match name {
        "asciidoc" | "asciidoc table" => Ok(Box::new(markup::AsciidocTable)),
        "asciidoc document" => Ok(Box::new(markup::AsciidocDocument)),
        "json" => Ok(Box::new(json::Json)),
        "markdown" | "markdown table" => Ok(Box::new(markup::MarkdownTable)),
        "markdown document" => Ok(Box::new(markup::MarkdownDocument)),
        "pretty" => Ok(Box::new(pretty::Pretty)),
        "tfvars hcl" => Ok(Box::new(tfvars::TfvarsHcl)),
        "tfvars json" => Ok(Box::new(tfvars::TfvarsJson)),
        "toml" => Ok(Box::new(toml::Toml)),
        "xml" => Ok(Box::new(xml::Xml)),
        "yaml" => Ok(Box::new(yaml::Yaml)),
        _ => Err(Error::UnknownFormatter(name.to_string())),
    }
}

/// Description text, `n/a` when absent.
pub(crate) fn description(text: &Option<String>) -> &str {
    text.as_deref().unwrap_or("n/a")
}
