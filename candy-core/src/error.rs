//! Error types for candy-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading site configuration or mapping paths.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse site config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A page path that does not live under the pages root.
    #[error("{path} is not inside the pages directory {pages_dir}")]
    OutsidePages { path: PathBuf, pages_dir: PathBuf },
}
