//! Tree walker — visits every documentable command, children before parents,
//! and writes one page per command into a flat output layout.

use crate::command::Command;
use crate::config::{Config, GUIDE_PAGE};
use crate::example::{ExampleEmbedder, FormatterRegistry, ModuleLoader};
use crate::link::Layout;
use crate::page::PageRenderer;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

/// One rendered page, written once and dropped.
pub struct Page {
    pub path: PathBuf,
    pub content: String,
}

impl Page {
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&self.path, &self.content)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

pub struct Walker<'a> {
    layout: &'a Layout,
    renderer: &'a PageRenderer<'a>,
    written: Vec<PathBuf>,
}

impl<'a> Walker<'a> {
    pub fn new(layout: &'a Layout, renderer: &'a PageRenderer<'a>) -> Self {
        Self {
            layout,
            renderer,
            written: Vec::new(),
        }
    }

    /// Write the pages of every documentable descendant of `cmd` into the
    /// formatter directory, then `cmd`'s own page to `subdir/basename.md`.
    pub fn walk(&mut self, cmd: &Command, subdir: &str, basename: &str) -> Result<()> {
        let layout = self.layout;
        for child in cmd.documentable_children() {
            let name = layout.derived_name(&child.path());
            self.walk(child, &layout.formats_dir, &name)?;
        }

        let path = layout.docs_dir.join(subdir).join(format!("{}.md", basename));
        if self.written.contains(&path) {
            bail!(
                "duplicate page {}: `{}` maps to a page already written in this run",
                path.display(),
                cmd.path()
            );
        }

        let content = self
            .renderer
            .render(cmd)
            .with_context(|| format!("failed to render page for `{}`", cmd.path()))?;
        let page = Page { path, content };
        page.write()?;
        tracing::debug!(command = %cmd.path(), path = %page.path.display(), "wrote page");

        self.written.push(page.path);
        Ok(())
    }

    /// Pages written so far, in write order.
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

/// Regenerate the guide page and every formatter page under `root`.
pub fn generate(
    root: &Command,
    config: &Config,
    loader: &dyn ModuleLoader,
    registry: &dyn FormatterRegistry,
) -> Result<Vec<PathBuf>> {
    let examples = ExampleEmbedder::new(loader, registry, &config.example, &config.layout);
    let renderer = PageRenderer::new(&config.layout, &examples, config.generated_on);
    let mut walker = Walker::new(&config.layout, &renderer);
    walker.walk(root, "", GUIDE_PAGE)?;
    Ok(walker.into_written())
}
