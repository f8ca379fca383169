//! # candy-build
//!
//! Page-tree walker and change-gated atomic writer.
//!
//! Call [`build_site`] to render every file under the pages directory into
//! the output directory. A page that fails to render is reported and skipped;
//! the rest of the site is still built.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::BuildError;
pub use pipeline::{build_site, BuildOptions, BuildReport, PageOutcome, PageReport};
pub use writer::{write_output, WriteResult};
