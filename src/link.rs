//! Output naming: where a command's page lives and how other pages link to it.

use std::path::PathBuf;

/// Flat output layout: a docs root, one subdirectory for every formatter page
/// regardless of nesting depth, and the URL prefix the docs are served under.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Docs root on disk, relative to the working directory.
    pub docs_dir: PathBuf,
    /// Subdirectory of `docs_dir` holding the formatter pages.
    pub formats_dir: String,
    /// URL path of `docs_dir` as seen from rendered pages.
    pub url_base: String,
    /// Root program name, stripped from page names.
    pub program: String,
}

impl Layout {
    /// `terraform-docs markdown table` → `markdown-table`.
    pub fn derived_name(&self, command_path: &str) -> String {
        let dashed = command_path.replace(' ', "-");
        let prefix = format!("{}-", self.program);
        match dashed.strip_prefix(&prefix) {
            Some(rest) => rest.to_string(),
            None => dashed,
        }
    }

    /// `terraform-docs markdown table` → `markdown table`, the name the
    /// formatter registry resolves.
    pub fn formatter_name(&self, command_path: &str) -> String {
        let prefix = format!("{} ", self.program);
        match command_path.strip_prefix(&prefix) {
            Some(rest) => rest.to_string(),
            None => command_path.to_string(),
        }
    }
}

/// A page's file name and the absolute href other pages use to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Full command path, used as the link text.
    pub name: String,
    pub filename: String,
    pub href: String,
}

impl Link {
    pub fn new(command_path: &str, layout: &Layout) -> Self {
        let filename = format!("{}.md", layout.derived_name(command_path));
        let href = format!("{}/{}/{}", layout.url_base, layout.formats_dir, filename);
        Self {
            name: command_path.to_string(),
            filename,
            href,
        }
    }

    /// `[name](href)`
    pub fn markdown(&self) -> String {
        format!("[{}]({})", self.name, self.href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            docs_dir: PathBuf::from("docs"),
            formats_dir: "formats".to_string(),
            url_base: "/docs".to_string(),
            program: "terraform-docs".to_string(),
        }
    }

    #[test]
    fn derived_names() {
        let layout = layout();
        assert_eq!(layout.derived_name("terraform-docs markdown table"), "markdown-table");
        assert_eq!(layout.derived_name("terraform-docs json"), "json");
        assert_eq!(layout.derived_name("other-tool json"), "other-tool-json");
    }

    #[test]
    fn formatter_names() {
        let layout = layout();
        assert_eq!(layout.formatter_name("terraform-docs tfvars hcl"), "tfvars hcl");
        assert_eq!(layout.formatter_name("terraform-docs pretty"), "pretty");
    }

    #[test]
    fn link_for_nested_command() {
        let link = Link::new("terraform-docs asciidoc document", &layout());
        assert_eq!(link.filename, "asciidoc-document.md");
        assert_eq!(link.href, "/docs/formats/asciidoc-document.md");
        assert_eq!(
            link.markdown(),
            "[terraform-docs asciidoc document](/docs/formats/asciidoc-document.md)"
        );
    }

    #[test]
    fn layout_is_a_parameter() {
        let layout = Layout {
            formats_dir: "reference".to_string(),
            url_base: "".to_string(),
            ..layout()
        };
        assert_eq!(Link::new("terraform-docs yaml", &layout).href, "/reference/yaml.md");
    }
}
