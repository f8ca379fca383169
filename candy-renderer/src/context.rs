//! Render context — the per-page state threaded through composition.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use candy_core::{SectionName, TemplateStack};

/// Mutable state for one top-level render.
///
/// Created fresh for every page and dropped once the page is rendered.
/// Section sub-loads suspend `template_stack` but share `variables` and
/// `sections`, so anything a section declares is visible to the page.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Pending wrapper templates, consumed last-in first-out.
    pub template_stack: TemplateStack,
    /// Interpolation variables; the first assignment of a key wins.
    pub variables: BTreeMap<String, String>,
    /// Accumulated section bodies keyed by name.
    pub sections: HashMap<SectionName, Vec<u8>>,
    /// Section files currently being loaded, outermost first.
    loading_sections: Vec<PathBuf>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `key` unless it already holds a value. Returns whether the value was kept.
    pub fn set_variable(&mut self, key: &str, value: &str) -> bool {
        if self.variables.contains_key(key) {
            return false;
        }
        self.variables.insert(key.to_owned(), value.to_owned());
        true
    }

    pub fn has_section(&self, name: &SectionName) -> bool {
        self.sections.contains_key(name)
    }

    /// Concatenate `content` onto the section, creating it when absent.
    pub fn append_section(&mut self, name: SectionName, content: &[u8]) {
        self.sections.entry(name).or_default().extend_from_slice(content);
    }

    /// Mark `path` as being loaded. Returns `false` if it already is.
    pub(crate) fn enter_section_load(&mut self, path: &Path) -> bool {
        if self.loading_sections.iter().any(|p| p == path) {
            return false;
        }
        self.loading_sections.push(path.to_path_buf());
        true
    }

    pub(crate) fn leave_section_load(&mut self) {
        self.loading_sections.pop();
    }

    /// Convert the variables to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> tera::Context {
        let mut ctx = tera::Context::new();
        for (key, value) in &self.variables {
            ctx.insert(key.as_str(), value);
        }
        ctx
    }
}
