//! Page rendering pipeline — [`Renderer`].
//!
//! | Stage | Module        | Input → output                                   |
//! |-------|---------------|--------------------------------------------------|
//! | 1     | `loader`      | page path → composed text (metadata + templates) |
//! | 2     | `sections`    | composed text → text without `{{#name}}`         |
//! | 3     | `variables`   | resolved text → final bytes via Tera             |

use std::path::Path;

use candy_core::{DocumentKind, SiteLayout};

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::loader::DocumentLoader;
use crate::sections::resolve_sections;
use crate::variables::render_variables;

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders pages of one site.
///
/// Holds no per-page state: every call builds a fresh [`RenderContext`], so a
/// single `Renderer` can be reused for a whole build.
#[derive(Debug, Clone)]
pub struct Renderer {
    layout: SiteLayout,
}

impl Renderer {
    /// Construct a new [`Renderer`] for the given site layout.
    pub fn new(layout: SiteLayout) -> Self {
        Renderer { layout }
    }

    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// Render one page to its final bytes.
    ///
    /// Opaque files come back unchanged. Markdown and HTML pages are composed
    /// through their template chain, have their section placeholders expanded,
    /// and are finally interpolated with their variables.
    pub fn render_document(&self, path: &Path) -> Result<Vec<u8>, RenderError> {
        let kind = DocumentKind::from_path(path);
        let _span = tracing::debug_span!("render", path = %path.display(), %kind).entered();

        let mut ctx = RenderContext::new();
        let composed = DocumentLoader::new(&self.layout).load(&mut ctx, path)?;
        if !kind.is_text() {
            return Ok(composed);
        }

        // Text pages only produce text; the loader checked the encoding.
        let composed = String::from_utf8_lossy(&composed);
        let resolved = resolve_sections(&composed, &ctx.sections)?;
        let rendered = render_variables(path, &resolved, &ctx)?;
        tracing::debug!(
            bytes = rendered.len(),
            sections = ctx.sections.len(),
            variables = ctx.variables.len(),
            "rendered"
        );
        Ok(rendered.into_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
