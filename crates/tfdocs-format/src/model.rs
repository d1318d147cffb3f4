//! Data model for a loaded Terraform module — format-agnostic.

use serde::Serialize;
use serde_json::Value;

/// Everything the formatters know about one module directory.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Module {
    /// Leading comment of the header file, markers stripped.
    pub header: String,
    pub inputs: Vec<Input>,
    pub modules: Vec<ModuleCall>,
    pub outputs: Vec<Output>,
    pub providers: Vec<Provider>,
    pub requirements: Vec<Requirement>,
    pub resources: Vec<Resource>,
}

/// A `variable` block.
#[derive(Debug, Clone, Serialize)]
pub struct Input {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: Option<String>,
    /// Literal default, `None` when the variable has no default at all.
    pub default: Option<Value>,
    pub required: bool,
    pub sensitive: bool,
}

impl Input {
    /// Default value as it appears in tables: compact JSON, `n/a` when required.
    pub fn default_display(&self) -> String {
        match &self.default {
            Some(value) => value_to_string(value),
            None => "n/a".to_string(),
        }
    }
}

/// An `output` block.
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    pub name: String,
    pub description: Option<String>,
    pub sensitive: bool,
}

/// A `module` call.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleCall {
    pub name: String,
    pub source: String,
    pub version: Option<String>,
}

/// A provider used by the module, declared or implied by a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub name: String,
    pub alias: Option<String>,
    pub version: Option<String>,
}

impl Provider {
    /// `aws` or `aws.west` when aliased.
    pub fn full_name(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{}.{}", self.name, alias),
            None => self.name.clone(),
        }
    }
}

/// A `required_version` or `required_providers` constraint.
#[derive(Debug, Clone, Serialize)]
pub struct Requirement {
    pub name: String,
    pub version: Option<String>,
}

/// Managed resource or data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
    Managed,
    Data,
}

impl ResourceMode {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceMode::Managed => "resource",
            ResourceMode::Data => "data source",
        }
    }
}

/// A `resource` or `data` block.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub provider: String,
    pub mode: ResourceMode,
}

impl Resource {
    /// Address as written in Terraform: `aws_s3_bucket.this`, `data.aws_region.current`.
    pub fn address(&self) -> String {
        match self.mode {
            ResourceMode::Managed => format!("{}.{}", self.type_name, self.name),
            ResourceMode::Data => format!("data.{}.{}", self.type_name, self.name),
        }
    }
}

/// Compact single-line rendering of a literal value.
pub fn value_to_string(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(default: Option<Value>) -> Input {
        Input {
            name: "region".to_string(),
            type_name: "string".to_string(),
            description: None,
            required: default.is_none(),
            default,
            sensitive: false,
        }
    }

    #[test]
    fn required_input_has_no_default() {
        assert_eq!(input(None).default_display(), "n/a");
    }

    #[test]
    fn default_is_compact_json() {
        assert_eq!(input(Some(json!("eu-west-1"))).default_display(), "\"eu-west-1\"");
        assert_eq!(input(Some(json!({"a": [1, 2]}))).default_display(), "{\"a\":[1,2]}");
        assert_eq!(input(Some(Value::Null)).default_display(), "null");
    }

    #[test]
    fn resource_address_by_mode() {
        let mut res = Resource {
            type_name: "aws_region".to_string(),
            name: "current".to_string(),
            provider: "aws".to_string(),
            mode: ResourceMode::Data,
        };
        assert_eq!(res.address(), "data.aws_region.current");
        res.mode = ResourceMode::Managed;
        assert_eq!(res.address(), "aws_region.current");
    }

    #[test]
    fn aliased_provider_name() {
        let provider = Provider {
            name: "aws".to_string(),
            alias: Some("west".to_string()),
            version: None,
        };
        assert_eq!(provider.full_name(), "aws.west");
    }
}
