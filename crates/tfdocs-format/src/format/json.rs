//! JSON formatter — the module model serialized as-is.

use super::Formatter;
use crate::error::Result;
use crate::model::Module;
use crate::settings::Settings;

pub struct Json;

impl Formatter for Json {
    fn render(&self, module: &Module, settings: &Settings) -> Result<String> {
        let mut value = serde_json::to_value(module)?;
        if !settings.show_header {
            if let Some(map) = value.as_object_mut() {
                map.remove("header");
            }
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Output;

    fn module() -> Module {
        Module {
            header: "Demo".to_string(),
            outputs: vec![Output {
                name: "arn".to_string(),
                description: None,
                sensitive: true,
            }],
            ..Module::default()
        }
    }

    #[test]
    fn keys_in_model_order() {
        let out = Json.render(&module(), &Settings::default()).unwrap();
        let keys: Vec<usize> = ["\"header\"", "\"inputs\"", "\"modules\"", "\"outputs\"", "\"providers\""]
            .iter()
            .map(|k| out.find(k).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(out.contains("\"description\": null"));
        assert!(out.contains("\"sensitive\": true"));
    }

    #[test]
    fn header_dropped_when_hidden() {
        let settings = Settings {
            show_header: false,
            ..Settings::default()
        };
        let out = Json.render(&module(), &settings).unwrap();
        assert!(!out.contains("\"header\""));
    }
}
