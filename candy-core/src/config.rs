//! Site configuration and directory layout.
//!
//! # Storage layout
//!
//! ```text
//! <root>/
//!   candy.yaml     (optional — overrides the directory names below)
//!   pages/         documents to render
//!   templates/     wrappers referenced by `@template`
//!   sections/      fragments referenced by `@section` / `@append`
//!   www/           output (created on build)
//! ```
//!
//! Relative paths in `candy.yaml` are resolved against the site root;
//! absolute paths are used as-is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::DocumentKind;

/// File name looked up at the site root.
pub const CONFIG_FILE: &str = "candy.yaml";

// ---------------------------------------------------------------------------
// 1. SiteConfig
// ---------------------------------------------------------------------------

/// Directory names as written in `candy.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub pages: PathBuf,
    pub templates: PathBuf,
    pub sections: PathBuf,
    pub output: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            pages: PathBuf::from("pages"),
            templates: PathBuf::from("templates"),
            sections: PathBuf::from("sections"),
            output: PathBuf::from("www"),
        }
    }
}

impl SiteConfig {
    /// Load `<root>/candy.yaml`, falling back to defaults when it is absent.
    ///
    /// Returns `ConfigError::Parse` (with path + line context) if malformed YAML.
    pub fn load_at(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(SiteConfig::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(SiteConfig::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }
}

// ---------------------------------------------------------------------------
// 2. SiteLayout
// ---------------------------------------------------------------------------

/// Resolved directories for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub root: PathBuf,
    pub pages_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub sections_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl SiteLayout {
    /// Resolve every configured directory against `root`.
    pub fn new(root: impl Into<PathBuf>, config: &SiteConfig) -> Self {
        let root = root.into();
        SiteLayout {
            pages_dir: root.join(&config.pages),
            templates_dir: root.join(&config.templates),
            sections_dir: root.join(&config.sections),
            output_dir: root.join(&config.output),
            root,
        }
    }

    /// Read `candy.yaml` under `root` and resolve the layout.
    pub fn load_at(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let config = SiteConfig::load_at(&root)?;
        Ok(SiteLayout::new(root, &config))
    }

    /// Replace the output directory (e.g. from `--output-path`).
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// `<templates>/<name>` — pure, no I/O.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(name)
    }

    /// `<sections>/<relative>` — pure, no I/O.
    pub fn section_path(&self, relative: &str) -> PathBuf {
        self.sections_dir.join(relative)
    }
}

// ---------------------------------------------------------------------------
// 3. Output mapping
// ---------------------------------------------------------------------------

/// Destination of a page under the output directory.
///
/// `pages/blog/post.md` becomes `www/blog/post.html`; every other file keeps
/// its name.
pub fn output_path(layout: &SiteLayout, page: &Path) -> Result<PathBuf, ConfigError> {
    let relative = page
        .strip_prefix(&layout.pages_dir)
        .map_err(|_| ConfigError::OutsidePages {
            path: page.to_path_buf(),
            pages_dir: layout.pages_dir.clone(),
        })?;
    let mut dest = layout.output_dir.join(relative);
    if let Some(ext) = DocumentKind::from_path(page).output_extension() {
        dest.set_extension(ext);
    }
    Ok(dest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
