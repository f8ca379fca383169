//! `candy build` — render the whole page tree.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use candy_build::{build_site, BuildOptions, BuildReport, PageOutcome, WriteResult};

use super::load_layout;

/// Arguments for `candy build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Site root containing `candy.yaml`, `pages/`, `templates/` and `sections/`.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output directory; overrides `output` from `candy.yaml`.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_path: Option<PathBuf>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit a machine-readable JSON report.
    #[arg(long)]
    pub json: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let mut layout = load_layout(&self.root)?;
        if let Some(output) = self.output_path {
            layout = layout.with_output_dir(output);
        }

        let report = build_site(&layout, BuildOptions { dry_run: self.dry_run })
            .with_context(|| format!("build failed for '{}'", self.root.display()))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report, self.dry_run);
        }

        if !report.is_success() {
            bail!("{} page(s) failed to render", report.failed());
        }
        Ok(())
    }
}

fn print_report(report: &BuildReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    for page in &report.pages {
        let source = page.source.display();
        match &page.outcome {
            PageOutcome::Output(result) => {
                let glyph = match result {
                    WriteResult::Written { .. } => "✎".green(),
                    WriteResult::WouldWrite { .. } => "~".yellow(),
                    WriteResult::Unchanged { .. } => "·".dimmed(),
                };
                println!("  {glyph}  {source} -> {}", result.path().display())
            }
            PageOutcome::Failed { error } => {
                println!("  {}  {source}: {error}", "✗".red())
            }
        }
    }

    if report.pages.is_empty() {
        println!("{prefix}no pages found");
        return;
    }

    println!(
        "{prefix}{} processed ({} written, {} unchanged, {} failed)",
        report.pages.len(),
        report.written(),
        report.unchanged(),
        report.failed()
    );
}
