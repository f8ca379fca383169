//! Metadata block parsing.
//!
//! A document may open with a block of directives:
//!
//! ```text
//! <!--!
//! @template base.html post.html
//! @section nav nav.md
//! @append scripts analytics.html
//! @title Hello
//! -->
//! Body starts here.
//! ```
//!
//! The block is only recognised when the document starts with `<!--!` and a
//! closing `-->` follows. Lines that don't split into a command and an
//! argument are skipped.

use candy_core::{SectionName, TemplateName};

use crate::context::RenderContext;
use crate::error::RenderError;

pub const META_START: &str = "<!--!";
pub const META_END: &str = "-->";

const BLOCK_TRIM: &[char] = &[' ', '\r', '\n', '\t'];

// ---------------------------------------------------------------------------
// Directive
// ---------------------------------------------------------------------------

/// One parsed line of a metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `@template <n1> [n2 ...]`
    Template(Vec<TemplateName>),
    /// `@section <name> <path>` — only loads when `name` is still unset.
    Section { name: SectionName, path: &'a str },
    /// `@append <name> <path>` — always loads and concatenates.
    Append { name: SectionName, path: &'a str },
    /// `<key> <value>`; a single leading `@` is dropped from the key.
    Variable { key: &'a str, value: &'a str },
}

impl<'a> Directive<'a> {
    /// Parse a single line. `None` for blank or malformed lines.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (command, argument) = split_first_word(line.trim())?;
        match command {
            "@template" => Some(Directive::Template(
                argument.split_whitespace().map(TemplateName::from).collect(),
            )),
            "@section" | "@append" => {
                let (name, path) = split_first_word(argument)?;
                let name = SectionName::from(name);
                if command == "@append" {
                    Some(Directive::Append { name, path })
                } else {
                    Some(Directive::Section { name, path })
                }
            }
            _ => {
                let key = command.strip_prefix('@').unwrap_or(command);
                if key.is_empty() {
                    return None;
                }
                Some(Directive::Variable {
                    key,
                    value: argument,
                })
            }
        }
    }
}

/// Split on the first whitespace run; both halves must be non-empty.
fn split_first_word(s: &str) -> Option<(&str, &str)> {
    let (head, tail) = s.split_once(char::is_whitespace)?;
    let tail = tail.trim_start();
    if head.is_empty() || tail.is_empty() {
        return None;
    }
    Some((head, tail))
}

// ---------------------------------------------------------------------------
// Section loading seam
// ---------------------------------------------------------------------------

/// Loads the body of a section file as an independent document.
///
/// Called with the page's template stack already suspended; implementations
/// only ever see the templates the section itself declares.
pub trait SectionSource {
    fn load_section(&self, ctx: &mut RenderContext, path: &str) -> Result<Vec<u8>, RenderError>;
}

// ---------------------------------------------------------------------------
// parse_meta
// ---------------------------------------------------------------------------

/// Split a document into its metadata block and body.
///
/// Returns `None` when the document has no complete block.
pub fn split_meta(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(META_START)?;
    let (block, body) = rest.split_once(META_END)?;
    Some((block, body.trim_start_matches(BLOCK_TRIM)))
}

/// Apply the document's directives to `ctx` and return its body.
///
/// Without a metadata block the input is returned unchanged. The only errors
/// are those raised while loading section files.
pub fn parse_meta<'a>(
    sections: &dyn SectionSource,
    ctx: &mut RenderContext,
    text: &'a str,
) -> Result<&'a str, RenderError> {
    let Some((block, body)) = split_meta(text) else {
        return Ok(text);
    };

    for line in block.trim_matches(BLOCK_TRIM).lines() {
        let Some(directive) = Directive::parse(line) else {
            tracing::trace!("ignoring metadata line {line:?}");
            continue;
        };
        apply(sections, ctx, directive)?;
    }
    Ok(body)
}

fn apply(
    sections: &dyn SectionSource,
    ctx: &mut RenderContext,
    directive: Directive<'_>,
) -> Result<(), RenderError> {
    match directive {
        Directive::Template(names) => {
            tracing::debug!(?names, "push templates");
            ctx.template_stack.extend(names);
        }
        Directive::Section { name, path } if ctx.has_section(&name) => {
            tracing::debug!(section = %name, "section already set, skipping {path}");
        }
        Directive::Section { name, path } | Directive::Append { name, path } => {
            let outer = ctx.template_stack.take();
            let loaded = sections.load_section(ctx, path);
            ctx.template_stack = outer;
            let content = loaded?;
            tracing::debug!(section = %name, bytes = content.len(), "loaded {path}");
            ctx.append_section(name, &content);
        }
        Directive::Variable { key, value } => {
            if !ctx.set_variable(key, value) {
                tracing::trace!("variable {key} already set");
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
