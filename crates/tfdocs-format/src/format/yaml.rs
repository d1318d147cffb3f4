//! YAML formatter.

use super::Formatter;
use crate::error::Result;
use crate::model::Module;
use crate::settings::Settings;

pub struct Yaml;

impl Formatter for Yaml {
    fn render(&self, module: &Module, _settings: &Settings) -> Result<String> {
        let out = serde_yaml::to_string(module)?;
        Ok(out.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Input, Module};
    use serde_json::json;

    #[test]
    fn inputs_as_sequence() {
        let module = Module {
            inputs: vec![Input {
                name: "region".to_string(),
                type_name: "string".to_string(),
                description: Some("AWS region".to_string()),
                default: Some(json!("eu-west-1")),
                required: false,
                sensitive: false,
            }],
            ..Module::default()
        };
        let out = Yaml.render(&module, &Settings::default()).unwrap();
        assert!(out.contains("inputs:\n- name: region\n  type: string\n  description: AWS region\n  default: eu-west-1\n"));
        assert!(!out.ends_with('\n'));
    }
}
