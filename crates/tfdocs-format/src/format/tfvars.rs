//! tfvars formatters — a starting `.tfvars` file in HCL or JSON.
//!
//! Inputs without a default get an empty string placeholder.

use super::Formatter;
use crate::error::Result;
use crate::model::*;
use crate::settings::Settings;
use serde_json::{Map, Value};

pub struct TfvarsHcl;
pub struct TfvarsJson;

impl Formatter for TfvarsHcl {
    fn render(&self, module: &Module, _settings: &Settings) -> Result<String> {
        let width = module.inputs.iter().map(|i| i.name.len()).max().unwrap_or(0);
        let lines: Vec<String> = module
            .inputs
            .iter()
            .map(|input| {
                let value = placeholder(input);
                format!("{:<width$} = {}", input.name, hcl_value(&value, 0), width = width)
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

impl Formatter for TfvarsJson {
    fn render(&self, module: &Module, _settings: &Settings) -> Result<String> {
        let mut map = Map::new();
        for input in &module.inputs {
            map.insert(input.name.clone(), placeholder(input));
        }
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }
}

fn placeholder(input: &Input) -> Value {
    input
        .default
        .clone()
        .unwrap_or_else(|| Value::String(String::new()))
}

/// HCL rendering of a literal; objects span lines, everything else is inline.
fn hcl_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(|v| hcl_value(v, depth)).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let indent = "  ".repeat(depth + 1);
            let mut out = String::from("{\n");
            for (key, v) in map {
                out.push_str(&format!("{}{} = {}\n", indent, hcl_key(key), hcl_value(v, depth + 1)));
            }
            out.push_str(&"  ".repeat(depth));
            out.push('}');
            out
        }
        other => value_to_string(other),
    }
}

fn hcl_key(key: &str) -> String {
    let bare = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        value_to_string(&Value::String(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(name: &str, default: Option<Value>) -> Input {
        Input {
            name: name.to_string(),
            type_name: "any".to_string(),
            description: None,
            required: default.is_none(),
            default,
            sensitive: false,
        }
    }

    fn module() -> Module {
        Module {
            inputs: vec![
                input("name", None),
                input("tags", Some(json!({"Team": "platform", "cost center": 42}))),
                input("zones", Some(json!(["a", "b"]))),
            ],
            ..Module::default()
        }
    }

    #[test]
    fn hcl_aligned_assignments() {
        let out = TfvarsHcl.render(&module(), &Settings::default()).unwrap();
        assert_eq!(
            out,
            "name  = \"\"\ntags  = {\n  Team = \"platform\"\n  \"cost center\" = 42\n}\nzones = [\"a\", \"b\"]"
        );
    }

    #[test]
    fn json_object() {
        let out = TfvarsJson.render(&module(), &Settings::default()).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["name"], json!(""));
        assert_eq!(parsed["zones"], json!(["a", "b"]));
    }
}
