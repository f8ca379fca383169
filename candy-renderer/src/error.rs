//! Error types for candy-renderer.

use std::path::PathBuf;

use thiserror::Error;

use candy_core::SectionName;

/// All errors that can abort the render of a single document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A page, template or section file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A markdown or HTML document that is not valid UTF-8.
    #[error("{path} is not valid UTF-8 text")]
    Encoding { path: PathBuf },

    /// The composed document is not a valid Tera template.
    #[error("template syntax error in {path}: {source}")]
    TemplateParse {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    /// Tera failed while interpolating variables (e.g. an unset key).
    #[error("template render error in {path}: {source}")]
    TemplateExec {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    /// Section placeholders that keep expanding into each other.
    #[error("section `{name}` references itself, directly or through other sections")]
    CyclicSectionReference { name: SectionName },

    /// A section file that (transitively) loads itself through `@section`/`@append`.
    #[error("section file {path} includes itself")]
    CyclicSectionLoad { path: PathBuf },

    /// A template chain longer than [`MAX_TEMPLATE_CHAIN`](crate::loader::MAX_TEMPLATE_CHAIN).
    #[error("template chain for {path} exceeds {limit} templates; does a template wrap itself?")]
    TemplateChainTooLong { path: PathBuf, limit: usize },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
