//! Section placeholder expansion.
//!
//! `{{#name}}` anywhere in the composed text is replaced by the accumulated
//! section body, or by nothing when the section was never declared. Passes
//! repeat until one substitutes no defined section, so sections may reference
//! other sections.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use candy_core::SectionName;

use crate::error::RenderError;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{#([^}]+)\}\}").expect("placeholder pattern is valid"))
}

/// Expand every section placeholder in `text` to a fixed point.
///
/// Without cycles, nesting can be at most `sections.len()` levels deep, so a
/// pass count beyond that means some section expands into itself; that is
/// reported as [`RenderError::CyclicSectionReference`].
pub fn resolve_sections(
    text: &str,
    sections: &HashMap<SectionName, Vec<u8>>,
) -> Result<String, RenderError> {
    let mut current = text.to_owned();
    let mut passes = 0usize;

    loop {
        let mut expanded: Option<SectionName> = None;
        let next = placeholder_re().replace_all(&current, |caps: &Captures<'_>| {
            let name = SectionName::from(&caps[1]);
            match sections.get(&name) {
                Some(body) => {
                    expanded.get_or_insert(name);
                    String::from_utf8_lossy(body)
                }
                None => Cow::Borrowed(""),
            }
        });
        let next = next.into_owned();

        let Some(name) = expanded else {
            return Ok(next);
        };
        passes += 1;
        if passes > sections.len() {
            return Err(RenderError::CyclicSectionReference { name });
        }
        tracing::trace!(pass = passes, "expanded section placeholders");
        current = next;
    }
}
