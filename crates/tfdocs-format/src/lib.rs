//! tfdocs-format — load a Terraform module directory and print it in the
//! output formats of `terraform-docs`.
//!
//! ```no_run
//! use tfdocs_format::{create_formatter, load, LoadOptions, Settings};
//!
//! let settings = Settings { show_color: false, ..Settings::default() };
//! let module = load(&LoadOptions::new("./demo"))?;
//! let text = create_formatter("markdown table")?.render(&module, &settings)?;
//! # Ok::<(), tfdocs_format::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod loader;
pub mod model;
pub mod settings;

pub use error::{Error, Result};
pub use format::{create_formatter, Formatter, FORMATTERS};
pub use loader::{load, LoadOptions, SortBy};
pub use model::Module;
pub use settings::Settings;
