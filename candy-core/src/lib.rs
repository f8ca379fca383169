//! Candy core library — document classification, template stacks, site layout.
//!
//! Public API surface:
//! - [`types`] — newtypes, [`DocumentKind`], [`TemplateStack`]
//! - [`config`] — `candy.yaml` loading and the resolved [`SiteLayout`]
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{output_path, SiteConfig, SiteLayout, CONFIG_FILE};
pub use error::ConfigError;
pub use types::{DocumentKind, SectionName, TemplateName, TemplateStack};
