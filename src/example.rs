//! Example embedder — renders the example module through a leaf page's own
//! formatter and embeds the result as an indented code block.
//!
//! Module loading and formatter lookup are injected so page assembly can be
//! exercised without the real HCL loader.

use crate::config::ExampleSource;
use crate::link::Layout;
use anyhow::{Context, Result};
use tfdocs_format::{Formatter, LoadOptions, Module, Settings, SortBy};

/// Parses a module directory.
pub trait ModuleLoader {
    fn load(&self, options: &LoadOptions) -> Result<Module>;
}

/// Resolves a formatter by name (`markdown table`, `json`, ...).
pub trait FormatterRegistry {
    fn resolve(&self, name: &str) -> Result<Box<dyn Formatter>>;
}

/// The loader and formatters of `tfdocs-format`.
pub struct Builtin;

impl ModuleLoader for Builtin {
    fn load(&self, options: &LoadOptions) -> Result<Module> {
        Ok(tfdocs_format::load(options)?)
    }
}

impl FormatterRegistry for Builtin {
    fn resolve(&self, name: &str) -> Result<Box<dyn Formatter>> {
        Ok(tfdocs_format::create_formatter(name)?)
    }
}

pub struct ExampleEmbedder<'a> {
    loader: &'a dyn ModuleLoader,
    registry: &'a dyn FormatterRegistry,
    source: &'a ExampleSource,
    layout: &'a Layout,
}

impl<'a> ExampleEmbedder<'a> {
    pub fn new(
        loader: &'a dyn ModuleLoader,
        registry: &'a dyn FormatterRegistry,
        source: &'a ExampleSource,
        layout: &'a Layout,
    ) -> Self {
        Self {
            loader,
            registry,
            source,
            layout,
        }
    }

    /// The `### Example` section for the command at `command_path`.
    pub fn embed(&self, command_path: &str) -> Result<String> {
        let formatter_name = self.layout.formatter_name(command_path);
        let dir = self.source.dir.display().to_string();

        let mut buf = String::new();
        buf.push_str("### Example\n\n");
        buf.push_str(&format!("Given the [`{}`](/{}/) module:\n\n", dir, dir));
        buf.push_str("```shell\n");
        buf.push_str(&format!(
            "{}{} ./{}/\n",
            command_path,
            extra_flags(&formatter_name),
            dir
        ));
        buf.push_str("```\n\n");
        buf.push_str("generates the following output:\n\n");

        let settings = Settings {
            show_color: false,
            ..Settings::default()
        };
        let options = LoadOptions {
            path: self.source.dir.clone(),
            show_header: true,
            header_from: self.source.header_from.clone(),
            sort_by: SortBy {
                name: settings.sort_by_name,
                required: settings.sort_by_required,
            },
        };

        let formatter = self
            .registry
            .resolve(&formatter_name)
            .with_context(|| format!("failed to resolve formatter for `{}`", command_path))?;
        let module = self
            .loader
            .load(&options)
            .with_context(|| format!("failed to load example module {}", dir))?;
        let output = formatter
            .render(&module, &settings)
            .with_context(|| format!("formatter `{}` failed", formatter_name))?;

        buf.push_str(&indent(&output));
        buf.push('\n');
        Ok(buf)
    }
}

/// Extra flag shown in the example invocation so its output is plain text.
fn extra_flags(formatter_name: &str) -> &'static str {
    match formatter_name {
        "pretty" => " --no-color",
        _ => "",
    }
}

/// Indent every non-empty line by four spaces; empty lines stay empty.
fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for line in text.split('\n') {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Stand-ins for the real loader and registry.
#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;

    /// Returns fixed text, with an ANSI reset appended if colour was left on.
    pub struct FixedText(pub String);

    impl Formatter for FixedText {
        fn render(&self, _module: &Module, settings: &Settings) -> tfdocs_format::Result<String> {
            if settings.show_color {
                Ok(format!("{}\x1b[0m", self.0))
            } else {
                Ok(self.0.clone())
            }
        }
    }

    #[derive(Default)]
    pub struct Fake {
        pub text: String,
        pub unknown: Vec<String>,
        pub broken_module: bool,
        pub resolved: RefCell<Vec<String>>,
        pub loaded: RefCell<Vec<LoadOptions>>,
    }

    impl Fake {
        pub fn with_text(text: &str) -> Self {
            Self {
                text: text.to_string(),
                ..Self::default()
            }
        }
    }

    impl ModuleLoader for Fake {
        fn load(&self, options: &LoadOptions) -> Result<Module> {
            self.loaded.borrow_mut().push(options.clone());
            if self.broken_module {
                return Err(anyhow!("malformed module"));
            }
            Ok(Module::default())
        }
    }

    impl FormatterRegistry for Fake {
        fn resolve(&self, name: &str) -> Result<Box<dyn Formatter>> {
            self.resolved.borrow_mut().push(name.to_string());
            if self.unknown.iter().any(|n| n == name) {
                return Err(anyhow!("unknown formatter: {}", name));
            }
            Ok(Box::new(FixedText(self.text.clone())))
        }
    }
}
