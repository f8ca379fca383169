//! Site build entrypoint used by the CLI.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use candy_core::{output_path, DocumentKind, SiteLayout};
use candy_renderer::Renderer;

use crate::error::{error_chain, BuildError};
use crate::writer::{write_output, WriteResult};

/// Knobs for a build run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Report what would be written without touching the output directory.
    pub dry_run: bool,
}

/// What happened to a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOutcome {
    Output(WriteResult),
    Failed { error: String },
}

/// One entry per file found under the pages directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    /// Source path relative to the pages directory.
    pub source: PathBuf,
    pub kind: DocumentKind,
    pub outcome: PageOutcome,
}

/// Outcome of a whole build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub pages: Vec<PageReport>,
}

impl BuildReport {
    fn count(&self, pred: impl Fn(&PageOutcome) -> bool) -> usize {
        self.pages.iter().filter(|p| pred(&p.outcome)).count()
    }

    /// Pages written, or that would be written in dry-run mode.
    pub fn written(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                PageOutcome::Output(WriteResult::Written { .. } | WriteResult::WouldWrite { .. })
            )
        })
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, PageOutcome::Output(WriteResult::Unchanged { .. })))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, PageOutcome::Failed { .. }))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Render every file under `layout.pages_dir` into `layout.output_dir`.
///
/// Pages are visited in file-name order. A page that fails to render or
/// write is logged and recorded as [`PageOutcome::Failed`]; the walk goes on.
/// Only a missing pages directory aborts the build.
pub fn build_site(layout: &SiteLayout, options: BuildOptions) -> Result<BuildReport, BuildError> {
    if !layout.pages_dir.is_dir() {
        return Err(BuildError::PagesNotFound {
            path: layout.pages_dir.clone(),
        });
    }

    let renderer = Renderer::new(layout.clone());
    let mut report = BuildReport::default();

    for entry in WalkDir::new(&layout.pages_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("cannot read entry under {}: {e}, skip", layout.pages_dir.display());
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let source = entry.path();
        let relative = source
            .strip_prefix(&layout.pages_dir)
            .unwrap_or(source)
            .to_path_buf();
        let outcome = match build_page(&renderer, layout, source, options) {
            Ok(result) => PageOutcome::Output(result),
            Err(e) => {
                let error = error_chain(&e);
                tracing::warn!("handling {} failed, {error}, skip", relative.display());
                PageOutcome::Failed { error }
            }
        };
        report.pages.push(PageReport {
            kind: DocumentKind::from_path(source),
            source: relative,
            outcome,
        });
    }

    tracing::info!(
        written = report.written(),
        unchanged = report.unchanged(),
        failed = report.failed(),
        "build finished"
    );
    Ok(report)
}

fn build_page(
    renderer: &Renderer,
    layout: &SiteLayout,
    source: &Path,
    options: BuildOptions,
) -> Result<WriteResult, BuildError> {
    let dest = output_path(layout, source)?;
    let content = renderer.render_document(source)?;
    write_output(&dest, &content, options.dry_run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
