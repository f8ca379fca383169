//! Final variable interpolation with Tera.
//!
//! The composed, section-resolved page is parsed as a Tera template and
//! rendered against the page's variables. Autoescaping is on, so values are
//! HTML-escaped unless piped through `| safe`.
//!
//! Referencing a variable that no directive set is a render error. Use
//! `{{ key | default(value="") }}` or `{% if key is defined %}` for optional
//! values.
//!
//! Markdown pages are converted to HTML before this step, and the converter
//! escapes `<`, `>` and `&` in text, including inside `{% ... %}` tags. A
//! comparison such as `{% if a > b %}` in a `.md` page therefore reaches Tera
//! as `a &gt; b` and fails to parse. Keep such logic in HTML templates.

use std::path::Path;

use tera::Tera;

use crate::context::RenderContext;
use crate::error::RenderError;

/// Parse `text` as a template named after `path` and render it with `ctx.variables`.
pub fn render_variables(
    path: &Path,
    text: &str,
    ctx: &RenderContext,
) -> Result<String, RenderError> {
    let name = path.to_string_lossy();
    let mut tera = Tera::default();
    tera.autoescape_on(vec![""]);
    tera.add_raw_template(&name, text)
        .map_err(|source| RenderError::TemplateParse {
            path: path.to_path_buf(),
            source,
        })?;
    tera.render(&name, &ctx.to_tera_context())
        .map_err(|source| RenderError::TemplateExec {
            path: path.to_path_buf(),
            source,
        })
}
