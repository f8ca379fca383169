//! `candy render <page>` — print one rendered page to stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use candy_renderer::Renderer;

use super::load_layout;

/// Arguments for `candy render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page to render, relative to the pages directory (or absolute).
    pub page: PathBuf,

    /// Site root containing `candy.yaml`.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let layout = load_layout(&self.root)?;
        let page = layout.pages_dir.join(&self.page);
        let renderer = Renderer::new(layout);

        let bytes = renderer
            .render_document(&page)
            .with_context(|| format!("failed to render '{}'", self.page.display()))?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes).context("cannot write to stdout")?;
        stdout.flush().context("cannot write to stdout")?;
        Ok(())
    }
}
