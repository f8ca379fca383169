//! Markdown → HTML conversion.

use pulldown_cmark::{html, Options, Parser};

/// Render CommonMark with the usual extensions (tables, footnotes,
/// strikethrough, task lists, heading attributes).
///
/// Smart punctuation stays off so quotes inside `{{ ... }}` expressions reach
/// the variable renderer untouched.
pub fn to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
