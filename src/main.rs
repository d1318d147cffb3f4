//! formats-docgen — regenerate the terraform-docs formatter reference pages.
//!
//! Walks the formatter subcommands of the `terraform-docs` command tree and
//! writes `docs/FORMATS_GUIDE.md` plus one `docs/formats/<name>.md` page per
//! formatter. Leaf pages embed the `demo/` module rendered by that formatter.
//! Run from the repository root; takes no arguments.

mod command;
mod config;
mod example;
mod link;
mod page;
mod tree;
mod walk;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "formats-docgen",
    version,
    about = "Generate the terraform-docs formatter reference pages"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::new(chrono::Local::now().date_naive());
    let root = tree::terraform_docs();
    let written = walk::generate(&root, &config, &example::Builtin, &example::Builtin)?;

    tracing::info!(
        pages = written.len(),
        dir = %config.layout.docs_dir.display(),
        "generated formatter docs"
    );
    Ok(())
}
