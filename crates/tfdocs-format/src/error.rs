//! Error type shared by the loader and the formatters.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The module directory does not exist.
    #[error("module directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// The module directory holds no `.tf` files.
    #[error("no Terraform files in {}", .0.display())]
    NoFiles(PathBuf),

    /// Reading a module file failed.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A block's braces never close.
    #[error("unterminated {kind} block in {}", path.display())]
    UnterminatedBlock { kind: String, path: PathBuf },

    #[error("invalid module file pattern")]
    Pattern(#[from] glob::PatternError),

    /// No formatter is registered under this name.
    #[error("unknown formatter: {0}")]
    UnknownFormatter(String),

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML serialization failed")]
    Toml(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
