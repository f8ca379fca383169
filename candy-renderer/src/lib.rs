//! # candy-renderer
//!
//! Document composition engine: metadata directives, template chains, named
//! sections and Tera variable interpolation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use candy_core::SiteLayout;
//! use candy_renderer::Renderer;
//!
//! fn render_index(root: &Path) {
//!     if let Ok(layout) = SiteLayout::load_at(root) {
//!         let page = layout.pages_dir.join("index.md");
//!         let renderer = Renderer::new(layout);
//!         match renderer.render_document(&page) {
//!             Ok(bytes) => println!("{} bytes", bytes.len()),
//!             Err(e) => eprintln!("{e}"),
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod loader;
pub mod markdown;
pub mod meta;
pub mod sections;
pub mod variables;

pub use context::RenderContext;
pub use engine::Renderer;
pub use error::RenderError;
pub use loader::{DocumentLoader, INNER_DOCUMENT};
pub use meta::{parse_meta, Directive, SectionSource};
pub use sections::resolve_sections;
pub use variables::render_variables;
