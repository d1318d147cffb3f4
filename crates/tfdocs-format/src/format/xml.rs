//! XML formatter — one element per model field, two-space indentation.

use super::Formatter;
use crate::error::Result;
use crate::model::*;
use crate::settings::Settings;

pub struct Xml;

impl Formatter for Xml {
    fn render(&self, module: &Module, settings: &Settings) -> Result<String> {
        let mut out = String::from("<module>\n");
        if settings.show_header {
            element(&mut out, 1, "header", Some(module.header.as_str()));
        }

        list(&mut out, "inputs", &module.inputs, |out, input| {
            element(out, 3, "name", Some(input.name.as_str()));
            element(out, 3, "type", Some(input.type_name.as_str()));
            element(out, 3, "description", input.description.as_deref());
            let default = input.default.as_ref().map(value_to_string);
            element(out, 3, "default", default.as_deref());
            element(out, 3, "required", Some(input.required.to_string().as_str()));
        });
        list(&mut out, "modules", &module.modules, |out, m| {
            element(out, 3, "name", Some(m.name.as_str()));
            element(out, 3, "source", Some(m.source.as_str()));
            element(out, 3, "version", m.version.as_deref());
        });
        list(&mut out, "outputs", &module.outputs, |out, output| {
            element(out, 3, "name", Some(output.name.as_str()));
            element(out, 3, "description", output.description.as_deref());
            element(out, 3, "sensitive", Some(output.sensitive.to_string().as_str()));
        });
        list(&mut out, "providers", &module.providers, |out, p| {
            element(out, 3, "name", Some(p.name.as_str()));
            element(out, 3, "alias", p.alias.as_deref());
            element(out, 3, "version", p.version.as_deref());
        });
        list(&mut out, "requirements", &module.requirements, |out, r| {
            element(out, 3, "name", Some(r.name.as_str()));
            element(out, 3, "version", r.version.as_deref());
        });
        list(&mut out, "resources", &module.resources, |out, r| {
            element(out, 3, "type", Some(r.type_name.as_str()));
            element(out, 3, "name", Some(r.name.as_str()));
            element(out, 3, "provider", Some(r.provider.as_str()));
            element(out, 3, "mode", Some(r.mode.label()));
        });

        out.push_str("</module>");
        Ok(out)
    }
}

/// `<inputs>` wrapper with one `<input>` child per item.
fn list<T>(out: &mut String, tag: &str, items: &[T], mut write_item: impl FnMut(&mut String, &T)) {
    let child = tag.strip_suffix('s').unwrap_or(tag);
    if items.is_empty() {
        out.push_str(&format!("  <{}></{}>\n", tag, tag));
        return;
    }
    out.push_str(&format!("  <{}>\n", tag));
    for item in items {
        out.push_str(&format!("    <{}>\n", child));
        write_item(out, item);
        out.push_str(&format!("    </{}>\n", child));
    }
    out.push_str(&format!("  </{}>\n", tag));
}

/// A text element; absent values become `xsi:nil`.
fn element(out: &mut String, depth: usize, tag: &str, text: Option<&str>) {
    let indent = "  ".repeat(depth);
    match text {
        Some(text) => out.push_str(&format!("{}<{}>{}</{}>\n", indent, tag, xml_escape(text), tag)),
        None => out.push_str(&format!("{}<{} xsi:nil=\"true\"></{}>\n", indent, tag, tag)),
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
