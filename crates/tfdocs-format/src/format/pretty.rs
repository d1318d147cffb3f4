//! Pretty formatter — colourised plain text for terminals.

use super::{description, Formatter};
use crate::error::Result;
use crate::model::*;
use crate::settings::Settings;

const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

pub struct Pretty;

impl Formatter for Pretty {
    fn render(&self, module: &Module, settings: &Settings) -> Result<String> {
        let mut sections: Vec<String> = Vec::new();

        if settings.show_header && !module.header.is_empty() {
            sections.push(module.header.clone());
        }

        let lines: Vec<String> = module
            .requirements
            .iter()
            .map(|r| entry(&format!("requirement.{}", r.name), r.version.as_deref(), settings))
            .collect();
        push_lines(&mut sections, lines);

        let lines: Vec<String> = module
            .providers
            .iter()
            .map(|p| entry(&format!("provider.{}", p.full_name()), p.version.as_deref(), settings))
            .collect();
        push_lines(&mut sections, lines);

        let lines: Vec<String> = module
            .modules
            .iter()
            .map(|m| entry(&format!("module.{}", m.name), Some(m.source.as_str()), settings))
            .collect();
        push_lines(&mut sections, lines);

        let lines: Vec<String> = module
            .resources
            .iter()
            .map(|r| entry(&format!("resource.{}", r.address()), Some(r.mode.label()), settings))
            .collect();
        push_lines(&mut sections, lines);

        for input in &module.inputs {
            let detail = match input.default {
                Some(_) => input.default_display(),
                None => "required".to_string(),
            };
            sections.push(format!(
                "{}\n{}",
                entry(&format!("input.{}", input.name), Some(detail.as_str()), settings),
                description(&input.description)
            ));
        }

        for output in &module.outputs {
            let detail = (settings.show_sensitive && output.sensitive).then_some("sensitive");
            sections.push(format!(
                "{}\n{}",
                entry(&format!("output.{}", output.name), detail, settings),
                description(&output.description)
            ));
        }

        Ok(sections.join("\n\n"))
    }
}

fn push_lines(sections: &mut Vec<String>, lines: Vec<String>) {
    if !lines.is_empty() {
        sections.push(lines.join("\n"));
    }
}

/// `title (detail)`, coloured when enabled.
fn entry(title: &str, detail: Option<&str>, settings: &Settings) -> String {
    let title = paint(title, CYAN, settings);
    match detail {
        Some(detail) => format!("{} ({})", title, paint(detail, GRAY, settings)),
        None => title,
    }
}

fn paint(text: &str, color: &str, settings: &Settings) -> String {
    if settings.show_color {
        format!("{}{}{}", color, text, RESET)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module() -> Module {
        Module {
            header: "Demo".to_string(),
            inputs: vec![Input {
                name: "name".to_string(),
                type_name: "string".to_string(),
                description: Some("Bucket name".to_string()),
                default: None,
                required: true,
                sensitive: false,
            }],
            outputs: vec![Output {
                name: "arn".to_string(),
                description: None,
                sensitive: false,
            }],
            ..Module::default()
        }
    }

    #[test]
    fn plain_without_color() {
        let settings = Settings {
            show_color: false,
            ..Settings::default()
        };
        let out = Pretty.render(&module(), &settings).unwrap();
        assert_eq!(out, "Demo\n\ninput.name (required)\nBucket name\n\noutput.arn\nn/a");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn colored_by_default() {
        let out = Pretty.render(&module(), &Settings::default()).unwrap();
        assert!(out.contains("\x1b[36minput.name\x1b[0m (\x1b[90mrequired\x1b[0m)"));
    }
}
