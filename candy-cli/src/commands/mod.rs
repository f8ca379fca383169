pub mod build;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};

use candy_core::SiteLayout;

/// Load `candy.yaml` under `root` and resolve the site directories.
pub(crate) fn load_layout(root: &Path) -> Result<SiteLayout> {
    SiteLayout::load_at(root)
        .with_context(|| format!("failed to load site config under '{}'", root.display()))
}
