//! Domain types shared by the renderer and the build driver.
//!
//! All path arguments use `Path`/`PathBuf`; names that come out of metadata
//! directives are wrapped in newtypes so a template can never be passed where
//! a section is expected.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier of a wrapper template, resolved under the templates directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateName(pub String);

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Name of a content section, referenced as `{{#name}}` in composed text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionName(pub String);

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SectionName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SectionName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// How a source file takes part in composition. Decided once, from the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// `.md` — metadata, templates and sections, then converted to HTML.
    Markdown,
    /// `.html` — metadata, templates and sections, no conversion.
    Html,
    /// Anything else; copied through byte-for-byte.
    Opaque,
}

impl DocumentKind {
    /// Classify a path by its final extension. Matching is case-sensitive.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") => DocumentKind::Markdown,
            Some("html") => DocumentKind::Html,
            _ => DocumentKind::Opaque,
        }
    }

    /// Markdown and HTML documents go through the composition pipeline.
    pub fn is_text(&self) -> bool {
        !matches!(self, DocumentKind::Opaque)
    }

    /// Extension the rendered file is emitted with, when it differs from the source.
    pub fn output_extension(&self) -> Option<&'static str> {
        match self {
            DocumentKind::Markdown => Some("html"),
            DocumentKind::Html | DocumentKind::Opaque => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Markdown => write!(f, "markdown"),
            DocumentKind::Html => write!(f, "html"),
            DocumentKind::Opaque => write!(f, "opaque"),
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateStack
// ---------------------------------------------------------------------------

/// LIFO stack of pending wrapper templates.
///
/// `@template outer inner` pushes `outer` then `inner`; [`pop`](Self::pop)
/// yields `inner` first, so the last-declared template wraps the content
/// first and the first-declared one ends up outermost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateStack {
    names: Vec<TemplateName>,
}

impl TemplateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: TemplateName) {
        self.names.push(name);
    }

    /// Push every name in iteration order.
    pub fn extend<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = TemplateName>,
    {
        self.names.extend(names);
    }

    /// Remove and return the most recently pushed name.
    pub fn pop(&mut self) -> Option<TemplateName> {
        self.names.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Bottom (first pushed) to top.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateName> {
        self.names.iter()
    }

    /// Suspend the stack: hand back its contents and leave an empty stack behind.
    pub fn take(&mut self) -> TemplateStack {
        std::mem::take(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
