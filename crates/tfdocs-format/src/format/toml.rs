//! TOML formatter.
//!
//! TOML has no null, so absent descriptions and `null` defaults are dropped
//! before serializing.

use super::Formatter;
use crate::error::Result;
use crate::model::Module;
use crate::settings::Settings;
use serde_json::Value;

pub struct Toml;

impl Formatter for Toml {
    fn render(&self, module: &Module, _settings: &Settings) -> Result<String> {
        let mut value = serde_json::to_value(module)?;
        strip_nulls(&mut value);
        let out = ::toml::to_string(&value)?;
        Ok(out.trim_end().to_string())
    }
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(strip_nulls);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Input, Module};
    use serde_json::json;

    #[test]
    fn nulls_are_dropped() {
        let mut value = json!({"a": null, "b": [1, null, {"c": null, "d": 2}]});
        strip_nulls(&mut value);
        assert_eq!(value, json!({"b": [1, {"d": 2}]}));
    }

    #[test]
    fn inputs_as_array_of_tables() {
        let module = Module {
            header: "Demo".to_string(),
            inputs: vec![Input {
                name: "name".to_string(),
                type_name: "string".to_string(),
                description: None,
                default: None,
                required: true,
                sensitive: false,
            }],
            ..Module::default()
        };
        let out = Toml.render(&module, &Settings::default()).unwrap();
        assert!(out.contains("header = \"Demo\""));
        assert!(out.contains("name = \"name\""));
        assert!(out.contains("required = true"));
        assert!(!out.contains("description"));
        assert!(!out.contains("default"));
    }
}
