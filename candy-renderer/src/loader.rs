//! Document loading and template-chain composition.
//!
//! Each iteration reads one file, strips its metadata, converts markdown,
//! substitutes the previous iteration's output for `{{#INNER_DOCUMENT}}`, and
//! then pops the next wrapper template off the stack. The loop ends when the
//! stack is empty, so stack depth stays bounded by the chain length rather
//! than growing with recursion.

use std::path::{Path, PathBuf};

use candy_core::{DocumentKind, SiteLayout};

use crate::context::RenderContext;
use crate::error::{io_err, RenderError};
use crate::markdown;
use crate::meta::{self, SectionSource};

/// Placeholder a wrapper template uses to pull in the content it wraps.
pub const INNER_DOCUMENT: &str = "{{#INNER_DOCUMENT}}";

/// Most wrapper templates a single load may apply.
pub const MAX_TEMPLATE_CHAIN: usize = 64;

/// Loads documents relative to a site's template and section directories.
#[derive(Debug, Clone, Copy)]
pub struct DocumentLoader<'a> {
    layout: &'a SiteLayout,
}

impl<'a> DocumentLoader<'a> {
    pub fn new(layout: &'a SiteLayout) -> Self {
        DocumentLoader { layout }
    }

    /// Load `path` and fold it through every template its chain declares.
    ///
    /// Opaque files are returned byte-for-byte. Templates may declare further
    /// `@template` directives; composition continues until the stack is empty.
    pub fn load(&self, ctx: &mut RenderContext, path: &Path) -> Result<Vec<u8>, RenderError> {
        let mut path: PathBuf = path.to_path_buf();
        let mut inner: Option<String> = None;
        let mut applied = 0usize;

        loop {
            let raw = read_raw(&path)?;
            let kind = DocumentKind::from_path(&path);
            if !kind.is_text() {
                tracing::debug!(path = %path.display(), "opaque passthrough");
                return Ok(raw);
            }

            let text = String::from_utf8(raw).map_err(|_| RenderError::Encoding {
                path: path.clone(),
            })?;
            let body = meta::parse_meta(self, ctx, &text)?;
            let mut content = match kind {
                DocumentKind::Markdown => markdown::to_html(body),
                _ => body.to_owned(),
            };
            if let Some(inner) = inner.take() {
                content = content.replace(INNER_DOCUMENT, &inner);
            }

            match ctx.template_stack.pop() {
                Some(template) => {
                    applied += 1;
                    if applied > MAX_TEMPLATE_CHAIN {
                        return Err(RenderError::TemplateChainTooLong {
                            path: self.layout.template_path(&template.0),
                            limit: MAX_TEMPLATE_CHAIN,
                        });
                    }
                    tracing::debug!(%template, "wrapping {}", path.display());
                    path = self.layout.template_path(&template.0);
                    inner = Some(content);
                }
                None => return Ok(content.into_bytes()),
            }
        }
    }
}

impl SectionSource for DocumentLoader<'_> {
    fn load_section(&self, ctx: &mut RenderContext, path: &str) -> Result<Vec<u8>, RenderError> {
        let path = self.layout.section_path(path);
        if !ctx.enter_section_load(&path) {
            return Err(RenderError::CyclicSectionLoad { path });
        }
        let loaded = self.load(ctx, &path);
        ctx.leave_section_load();
        loaded
    }
}

fn read_raw(path: &Path) -> Result<Vec<u8>, RenderError> {
    std::fs::read(path).map_err(|e| io_err(path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
