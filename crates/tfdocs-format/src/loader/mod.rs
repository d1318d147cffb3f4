//! Module loader — read every `.tf` file of a directory into a [`Module`].

mod hcl;

use crate::error::{Error, Result};
use crate::model::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RE_BLOCK_COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\*?[ \t]?").unwrap());

static RE_LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(#|//) ?").unwrap());

/// Input ordering. With both switches off inputs keep declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortBy {
    pub name: bool,
    pub required: bool,
}

impl Default for SortBy {
    fn default() -> Self {
        Self {
            name: true,
            required: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Module directory.
    pub path: PathBuf,
    pub show_header: bool,
    /// File, relative to `path`, whose leading comment becomes the header.
    pub header_from: String,
    pub sort_by: SortBy,
}

impl LoadOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            show_header: true,
            header_from: "main.tf".to_string(),
            sort_by: SortBy::default(),
        }
    }
}

/// Load a module directory.
pub fn load(options: &LoadOptions) -> Result<Module> {
    let dir = &options.path;
    if !dir.is_dir() {
        return Err(Error::MissingDirectory(dir.clone()));
    }

    let files = module_files(dir)?;
    if files.is_empty() {
        return Err(Error::NoFiles(dir.clone()));
    }

    let mut collector = Collector::default();
    for path in &files {
        let content = read(path)?;
        collector
            .collect(&content)
            .map_err(|hcl::Unterminated(kind)| Error::UnterminatedBlock {
                kind,
                path: path.clone(),
            })?;
    }

    let mut module = collector.finish();
    if options.show_header {
        module.header = extract_header(&read(&dir.join(&options.header_from))?);
    }
    sort(&mut module, options.sort_by);

    tracing::debug!(
        path = %dir.display(),
        files = files.len(),
        inputs = module.inputs.len(),
        outputs = module.outputs.len(),
        "loaded module"
    );
    Ok(module)
}

/// `*.tf` files of a directory, sorted for deterministic output.
fn module_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.tf", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

// -- Block collection ---------------------------------------------------------

#[derive(Default)]
struct Collector {
    module: Module,
    /// `required_providers` versions by provider name.
    provider_versions: BTreeMap<String, String>,
}

impl Collector {
    fn collect(&mut self, content: &str) -> std::result::Result<(), hcl::Unterminated> {
        let file = hcl::parse(content)?;
        for block in &file.blocks {
            let body = hcl::parse(block.body)?;
            match (block.kind, block.labels.as_slice()) {
                ("variable", [name]) => self.module.inputs.push(input(name, &body)),
                ("output", [name]) => self.module.outputs.push(Output {
                    name: name.clone(),
                    description: body.string("description"),
                    sensitive: body.bool("sensitive"),
                }),
                ("resource", [type_name, name]) => {
                    self.resource(type_name, name, &body, ResourceMode::Managed)
                }
                ("data", [type_name, name]) => {
                    self.resource(type_name, name, &body, ResourceMode::Data)
                }
                ("module", [name]) => self.module.modules.push(ModuleCall {
                    name: name.clone(),
                    source: body.string("source").unwrap_or_default(),
                    version: body.string("version"),
                }),
                ("provider", [name]) => self.provider(name, body.string("alias")),
                ("terraform", []) => self.terraform(&body)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn resource(&mut self, type_name: &str, name: &str, body: &hcl::Body, mode: ResourceMode) {
        let provider = match body.attribute("provider") {
            Some(reference) => reference.split('.').next().unwrap_or(reference).to_string(),
            None => type_name.split('_').next().unwrap_or(type_name).to_string(),
        };
        self.provider(&provider, None);
        self.module.resources.push(Resource {
            type_name: type_name.to_string(),
            name: name.to_string(),
            provider,
            mode,
        });
    }

    fn provider(&mut self, name: &str, alias: Option<String>) {
        let known = self
            .module
            .providers
            .iter()
            .any(|p| p.name == name && p.alias == alias);
        if !known {
            self.module.providers.push(Provider {
                name: name.to_string(),
                alias,
                version: None,
            });
        }
    }

    fn terraform(&mut self, body: &hcl::Body) -> std::result::Result<(), hcl::Unterminated> {
        if let Some(version) = body.string("required_version") {
            self.module.requirements.push(Requirement {
                name: "terraform".to_string(),
                version: Some(version),
            });
        }
        for block in body.blocks_of("required_providers") {
            let providers = hcl::parse(block.body)?;
            for attr in &providers.attributes {
                // `aws = { source = "...", version = "..." }` or legacy `aws = "~> 4.0"`
                let version = match hcl::literal(attr.raw) {
                    serde_json::Value::Object(map) => map
                        .get("version")
                        .and_then(|v| v.as_str())
                        .map(str::to_string),
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                };
                if let Some(ref v) = version {
                    self.provider_versions.insert(attr.key.to_string(), v.clone());
                }
                self.module.requirements.push(Requirement {
                    name: attr.key.to_string(),
                    version,
                });
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Module {
        for provider in &mut self.module.providers {
            if provider.version.is_none() {
                provider.version = self.provider_versions.get(&provider.name).cloned();
            }
        }
        self.module
    }
}

fn input(name: &str, body: &hcl::Body) -> Input {
    let default = body.attribute("default").map(hcl::literal);
    Input {
        name: name.to_string(),
        type_name: body.attribute("type").unwrap_or("any").to_string(),
        description: body.string("description"),
        required: default.is_none(),
        default,
        sensitive: body.bool("sensitive"),
    }
}

fn sort(module: &mut Module, sort_by: SortBy) {
    if sort_by.name {
        module.inputs.sort_by(|a, b| {
            if sort_by.required {
                b.required.cmp(&a.required).then_with(|| a.name.cmp(&b.name))
            } else {
                a.name.cmp(&b.name)
            }
        });
        module.outputs.sort_by(|a, b| a.name.cmp(&b.name));
        module.modules.sort_by(|a, b| a.name.cmp(&b.name));
    } else if sort_by.required {
        module.inputs.sort_by_key(|i| !i.required);
    }

    module
        .providers
        .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.alias.cmp(&b.alias)));
    module
        .requirements
        .sort_by(|a, b| (a.name != "terraform", &a.name).cmp(&(b.name != "terraform", &b.name)));
    module.resources.sort_by_key(|r| r.address());
}

// -- Header -------------------------------------------------------------------

/// Leading comment of a file, comment markers stripped.
///
/// Accepts either a `/** ... */` block or a run of `#` / `//` lines.
fn extract_header(content: &str) -> String {
    let trimmed = content.trim_start();
    let lines: Vec<String> = if let Some(rest) = trimmed.strip_prefix("/*") {
        let inner = rest.find("*/").map_or(rest, |end| &rest[..end]);
        inner
            .lines()
            .map(|line| RE_BLOCK_COMMENT_LINE.replace(line, "").trim_end().to_string())
            .collect()
    } else {
        trimmed
            .lines()
            .take_while(|line| RE_LINE_COMMENT.is_match(line))
            .map(|line| RE_LINE_COMMENT.replace(line, "").trim_end().to_string())
            .collect()
    };

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |e| e + 1);
    lines[start..end].join("\n")
}
