//! Markdown and AsciiDoc formatters, table and document layouts.
//!
//! Both markup languages share the same section structure; a [`Dialect`]
//! supplies the syntax for headings, anchors, code and tables.

use super::{description, Formatter};
use crate::error::Result;
use crate::model::*;
use crate::settings::Settings;

pub struct MarkdownTable;
pub struct MarkdownDocument;
pub struct AsciidocTable;
pub struct AsciidocDocument;

impl Formatter for MarkdownTable {
    fn render(&self, module: &Module, settings: &Settings) -> Result<String> {
        Ok(table_layout(Dialect::Markdown, module, settings))
    }
}

impl Formatter for MarkdownDocument {
    fn render(&self, module: &Module, settings: &Settings) -> Result<String> {
        Ok(document_layout(Dialect::Markdown, module, settings))
    }
}

impl Formatter for AsciidocTable {
    fn render(&self, module: &Module, settings: &Settings) -> Result<String> {
        Ok(table_layout(Dialect::Asciidoc, module, settings))
    }
}

impl Formatter for AsciidocDocument {
    fn render(&self, module: &Module, settings: &Settings) -> Result<String> {
        Ok(document_layout(Dialect::Asciidoc, module, settings))
    }
}

// -- Dialect ------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Markdown,
    Asciidoc,
}

impl Dialect {
    fn heading(self, level: usize, text: &str) -> String {
        let marker = match self {
            Dialect::Markdown => "#",
            Dialect::Asciidoc => "=",
        };
        format!("{} {}\n\n", marker.repeat(level), text)
    }

    /// Escape emphasis characters in plain markdown text.
    fn escape(self, text: &str, settings: &Settings) -> String {
        if self == Dialect::Markdown && settings.escape {
            text.replace('_', "\\_").replace('*', "\\*")
        } else {
            text.to_string()
        }
    }

    /// Linkable name: `<a name="input_x"></a> [x](#input_x)` or `[[input_x]] <<input_x,x>>`.
    fn anchor(self, kind: &str, name: &str, settings: &Settings) -> String {
        if !settings.show_anchor {
            return self.escape(name, settings);
        }
        let id = format!("{}_{}", kind, name);
        match self {
            Dialect::Markdown => format!(
                "<a name=\"{}\"></a> [{}](#{})",
                id,
                self.escape(name, settings),
                self.escape(&id, settings)
            ),
            Dialect::Asciidoc => format!("[[{}]] <<{},{}>>", id, id, name),
        }
    }

    fn code_block(self, lang: &str, text: &str) -> String {
        match self {
            Dialect::Markdown => format!("```{}\n{}\n```\n\n", lang, text),
            Dialect::Asciidoc => format!("[source,{}]\n----\n{}\n----\n\n", lang, text),
        }
    }

    fn table(self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut out = String::new();
        match self {
            Dialect::Markdown => {
                out.push_str(&format!("| {} |\n", headers.join(" | ")));
                let rule: Vec<String> = headers.iter().map(|h| "-".repeat(h.len() + 2)).collect();
                out.push_str(&format!("|{}|\n", rule.join("|")));
                for row in rows {
                    let cells: Vec<String> = row.iter().map(|c| cell(c)).collect();
                    out.push_str(&format!("| {} |\n", cells.join(" | ")));
                }
            }
            Dialect::Asciidoc => {
                let cols = vec!["a"; headers.len()].join(",");
                out.push_str(&format!("[cols=\"{}\",options=\"header,autowidth\"]\n|===\n", cols));
                out.push_str(&format!("|{}\n", headers.join(" |")));
                for row in rows {
                    let cells: Vec<String> = row.iter().map(|c| cell(c)).collect();
                    out.push_str(&format!("|{}\n", cells.join(" |")));
                }
                out.push_str("|===\n");
            }
        }
        out.push('\n');
        out
    }
}

/// Table cell: single line, pipes escaped.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn code(text: &str) -> String {
    format!("`{}`", text.replace('\n', " "))
}

fn header(out: &mut String, module: &Module, settings: &Settings) {
    if settings.show_header && !module.header.is_empty() {
        out.push_str(&module.header);
        out.push_str("\n\n");
    }
}

// -- Table layout -------------------------------------------------------------

fn table_layout(d: Dialect, module: &Module, settings: &Settings) -> String {
    let level = settings.indent.max(1);
    let mut out = String::new();
    header(&mut out, module, settings);

    out.push_str(&d.heading(level, "Requirements"));
    if module.requirements.is_empty() {
        out.push_str("No requirements.\n\n");
    } else {
        let rows: Vec<Vec<String>> = module
            .requirements
            .iter()
            .map(|r| vec![d.anchor("requirement", &r.name, settings), version(&r.version)])
            .collect();
        out.push_str(&d.table(&["Name", "Version"], &rows));
    }

    out.push_str(&d.heading(level, "Providers"));
    if module.providers.is_empty() {
        out.push_str("No providers.\n\n");
    } else {
        let rows: Vec<Vec<String>> = module
            .providers
            .iter()
            .map(|p| vec![d.anchor("provider", &p.full_name(), settings), version(&p.version)])
            .collect();
        out.push_str(&d.table(&["Name", "Version"], &rows));
    }

    out.push_str(&d.heading(level, "Modules"));
    if module.modules.is_empty() {
        out.push_str("No modules.\n\n");
    } else {
        let rows: Vec<Vec<String>> = module
            .modules
            .iter()
            .map(|m| {
                vec![
                    d.anchor("module", &m.name, settings),
                    m.source.clone(),
                    version(&m.version),
                ]
            })
            .collect();
        out.push_str(&d.table(&["Name", "Source", "Version"], &rows));
    }

    out.push_str(&d.heading(level, "Resources"));
    if module.resources.is_empty() {
        out.push_str("No resources.\n\n");
    } else {
        let rows: Vec<Vec<String>> = module
            .resources
            .iter()
            .map(|r| vec![r.address(), r.mode.label().to_string()])
            .collect();
        out.push_str(&d.table(&["Name", "Type"], &rows));
    }

    out.push_str(&d.heading(level, "Inputs"));
    if module.inputs.is_empty() {
        out.push_str("No inputs.\n\n");
    } else {
        let mut headers = vec!["Name", "Description"];
        if settings.show_type {
            headers.push("Type");
        }
        if settings.show_default {
            headers.push("Default");
        }
        if settings.show_required {
            headers.push("Required");
        }
        let rows: Vec<Vec<String>> = module
            .inputs
            .iter()
            .map(|input| {
                let mut row = vec![
                    d.anchor("input", &input.name, settings),
                    description(&input.description).to_string(),
                ];
                if settings.show_type {
                    row.push(code(&input.type_name));
                }
                if settings.show_default {
                    row.push(match input.default {
                        Some(_) => code(&input.default_display()),
                        None => "n/a".to_string(),
                    });
                }
                if settings.show_required {
                    row.push(yes_no(input.required));
                }
                row
            })
            .collect();
        out.push_str(&d.table(&headers, &rows));
    }

    out.push_str(&d.heading(level, "Outputs"));
    if module.outputs.is_empty() {
        out.push_str("No outputs.\n\n");
    } else {
        let sensitive = settings.show_sensitive && module.outputs.iter().any(|o| o.sensitive);
        let mut headers = vec!["Name", "Description"];
        if sensitive {
            headers.push("Sensitive");
        }
        let rows: Vec<Vec<String>> = module
            .outputs
            .iter()
            .map(|output| {
                let mut row = vec![
                    d.anchor("output", &output.name, settings),
                    description(&output.description).to_string(),
                ];
                if sensitive {
                    row.push(yes_no(output.sensitive));
                }
                row
            })
            .collect();
        out.push_str(&d.table(&headers, &rows));
    }

    out.trim_end().to_string()
}

fn version(version: &Option<String>) -> String {
    version.clone().unwrap_or_else(|| "n/a".to_string())
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

// -- Document layout ----------------------------------------------------------

fn document_layout(d: Dialect, module: &Module, settings: &Settings) -> String {
    let level = settings.indent.max(1);
    let mut out = String::new();
    header(&mut out, module, settings);

    out.push_str(&d.heading(level, "Requirements"));
    if module.requirements.is_empty() {
        out.push_str("No requirements.\n\n");
    } else {
        out.push_str("The following requirements are needed by this module:\n\n");
        for r in &module.requirements {
            out.push_str(&list_item(d.anchor("requirement", &r.name, settings), &r.version));
        }
        out.push('\n');
    }

    out.push_str(&d.heading(level, "Providers"));
    if module.providers.is_empty() {
        out.push_str("No providers.\n\n");
    } else {
        out.push_str("The following providers are used by this module:\n\n");
        for p in &module.providers {
            out.push_str(&list_item(d.anchor("provider", &p.full_name(), settings), &p.version));
        }
        out.push('\n');
    }

    out.push_str(&d.heading(level, "Modules"));
    if module.modules.is_empty() {
        out.push_str("No modules.\n\n");
    } else {
        out.push_str("The following Modules are called:\n\n");
        for m in &module.modules {
            out.push_str(&d.heading(level + 1, &d.anchor("module", &m.name, settings)));
            out.push_str(&format!("Source: {}\n\nVersion: {}\n\n", m.source, version(&m.version)));
        }
    }

    out.push_str(&d.heading(level, "Resources"));
    if module.resources.is_empty() {
        out.push_str("No resources.\n\n");
    } else {
        out.push_str("The following resources are used by this module:\n\n");
        for r in &module.resources {
            out.push_str(&format!("- {} ({})\n", r.address(), r.mode.label()));
        }
        out.push('\n');
    }

    let (required, optional): (Vec<&Input>, Vec<&Input>) =
        module.inputs.iter().partition(|i| i.required);
    if module.inputs.is_empty() {
        out.push_str(&d.heading(level, "Inputs"));
        out.push_str("No inputs.\n\n");
    }
    if !required.is_empty() {
        out.push_str(&d.heading(level, "Required Inputs"));
        out.push_str("The following input variables are required:\n\n");
        for input in required {
            document_input(&mut out, d, level + 1, input, settings);
        }
    }
    if !optional.is_empty() {
        out.push_str(&d.heading(level, "Optional Inputs"));
        out.push_str("The following input variables are optional (have default values):\n\n");
        for input in optional {
            document_input(&mut out, d, level + 1, input, settings);
        }
    }

    out.push_str(&d.heading(level, "Outputs"));
    if module.outputs.is_empty() {
        out.push_str("No outputs.\n\n");
    } else {
        out.push_str("The following outputs are exported:\n\n");
        for output in &module.outputs {
            out.push_str(&d.heading(level + 1, &d.anchor("output", &output.name, settings)));
            out.push_str(&format!("Description: {}\n\n", description(&output.description)));
            if settings.show_sensitive && output.sensitive {
                out.push_str("Sensitive: yes\n\n");
            }
        }
    }

    out.trim_end().to_string()
}

fn list_item(name: String, version: &Option<String>) -> String {
    match version {
        Some(v) => format!("- {} ({})\n", name, v),
        None => format!("- {}\n", name),
    }
}

fn document_input(out: &mut String, d: Dialect, level: usize, input: &Input, settings: &Settings) {
    out.push_str(&d.heading(level, &d.anchor("input", &input.name, settings)));
    out.push_str(&format!("Description: {}\n\n", description(&input.description)));
    if settings.show_type {
        if input.type_name.contains('\n') {
            out.push_str("Type:\n\n");
            out.push_str(&d.code_block("hcl", &input.type_name));
        } else {
            out.push_str(&format!("Type: {}\n\n", code(&input.type_name)));
        }
    }
    if settings.show_default && !input.required {
        out.push_str(&format!("Default: {}\n\n", code(&input.default_display())));
    }
}
