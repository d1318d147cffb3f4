//! Fixed generation settings: output layout and the example module.

use crate::link::Layout;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Name of the host program; stripped from page names.
pub const PROGRAM: &str = "terraform-docs";

/// Basename of the top-level guide page.
pub const GUIDE_PAGE: &str = "FORMATS_GUIDE";

/// The module every leaf page renders as its example.
#[derive(Debug, Clone)]
pub struct ExampleSource {
    /// Module directory, relative to the working directory.
    pub dir: PathBuf,
    /// File whose leading comment becomes the module header.
    pub header_from: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub layout: Layout,
    pub example: ExampleSource,
    /// Date stamped into the auto-generated footer.
    pub generated_on: NaiveDate,
}

impl Config {
    pub fn new(generated_on: NaiveDate) -> Self {
        Self {
            layout: Layout {
                docs_dir: PathBuf::from("docs"),
                formats_dir: "formats".to_string(),
                url_base: "/docs".to_string(),
                program: PROGRAM.to_string(),
            },
            example: ExampleSource {
                dir: PathBuf::from("demo"),
                header_from: "main.tf".to_string(),
            },
            generated_on,
        }
    }
}
