use std::fs;
use std::path::{Path, PathBuf};

use candy_core::{SiteConfig, SiteLayout};
use candy_renderer::{RenderError, Renderer};
use tempfile::TempDir;

struct Site {
    _root: TempDir,
    renderer: Renderer,
}

impl Site {
    fn new() -> Self {
        let root = TempDir::new().expect("tempdir");
        let layout = SiteLayout::new(root.path(), &SiteConfig::default());
        for dir in [&layout.pages_dir, &layout.templates_dir, &layout.sections_dir] {
            fs::create_dir_all(dir).expect("mkdir");
        }
        Site {
            _root: root,
            renderer: Renderer::new(layout),
        }
    }

    fn layout(&self) -> &SiteLayout {
        self.renderer.layout()
    }

    fn write(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> PathBuf {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir parent");
        }
        fs::write(&path, content).expect("write");
        path
    }

    fn page(&self, name: &str, content: &str) -> PathBuf {
        self.write(self.layout().pages_dir.join(name), content)
    }

    fn template(&self, name: &str, content: &str) {
        self.write(self.layout().template_path(name), content);
    }

    fn section(&self, name: &str, content: &str) {
        self.write(self.layout().section_path(name), content);
    }

    fn render(&self, page: &Path) -> String {
        let bytes = self
            .renderer
            .render_document(page)
            .unwrap_or_else(|e| panic!("render {} failed: {e}", page.display()));
        String::from_utf8(bytes).expect("utf-8 output")
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[test]
fn title_directive_is_stripped_and_interpolated() {
    let site = Site::new();
    let page = site.page("index.html", "<!--!\n@title X\n-->\nBody {{ title }}");
    assert_eq!(site.render(&page), "Body X");
}

#[test]
fn first_title_wins() {
    let site = Site::new();
    let page = site.page("index.html", "<!--!\n@title A\n@title B\n-->\n{{ title }}");
    assert_eq!(site.render(&page), "A");
}

#[test]
fn page_variables_take_precedence_over_template_defaults() {
    let site = Site::new();
    site.template(
        "base.html",
        "<!--!\n@title Untitled\n@lang en\n-->\n<h1 lang=\"{{ lang }}\">{{ title }}</h1>{{#INNER_DOCUMENT}}",
    );
    let page = site.page("p.html", "<!--!\n@template base.html\n@title Mine\n-->\nx");
    assert_eq!(site.render(&page), "<h1 lang=\"en\">Mine</h1>x");
}

// ---------------------------------------------------------------------------
// Template chain
// ---------------------------------------------------------------------------

#[test]
fn last_declared_template_wraps_first() {
    let site = Site::new();
    site.template("outer.html", "<outer>{{#INNER_DOCUMENT}}</outer>");
    site.template("inner.html", "<inner>{{#INNER_DOCUMENT}}</inner>");
    let page = site.page("leaf.html", "<!--!\n@template outer.html inner.html\n-->\nleaf");
    assert_eq!(site.render(&page), "<outer><inner>leaf</inner></outer>");
}

#[test]
fn separate_template_lines_append_to_the_stack() {
    let site = Site::new();
    site.template("outer.html", "<outer>{{#INNER_DOCUMENT}}</outer>");
    site.template("inner.html", "<inner>{{#INNER_DOCUMENT}}</inner>");
    let page = site.page(
        "leaf.html",
        "<!--!\n@template outer.html\n@template inner.html\n-->\nleaf",
    );
    assert_eq!(site.render(&page), "<outer><inner>leaf</inner></outer>");
}

#[test]
fn inner_document_placeholder_may_repeat() {
    let site = Site::new();
    site.template("twice.html", "{{#INNER_DOCUMENT}}|{{#INNER_DOCUMENT}}");
    let page = site.page("p.html", "<!--!\n@template twice.html\n-->\nab");
    assert_eq!(site.render(&page), "ab|ab");
}

#[test]
fn markdown_template_is_converted_too() {
    let site = Site::new();
    site.template("doc.md", "# Docs\n\n{{#INNER_DOCUMENT}}\n");
    let page = site.page("p.html", "<!--!\n@template doc.md\n-->\n<b>x</b>");
    assert_eq!(site.render(&page), "<h1>Docs</h1>\n<p><b>x</b></p>\n");
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[test]
fn repeated_section_keeps_first_load() {
    let site = Site::new();
    site.section("nav.html", "<nav>1</nav>");
    site.section("other.html", "<nav>2</nav>");
    let page = site.page(
        "p.html",
        "<!--!\n@section nav nav.html\n@section nav other.html\n-->\n{{#nav}}",
    );
    assert_eq!(site.render(&page), "<nav>1</nav>");
}

#[test]
fn append_concatenates_in_directive_order() {
    let site = Site::new();
    site.section("nav.html", "<nav>1</nav>");
    site.section("other.html", "<nav>2</nav>");
    let page = site.page(
        "p.html",
        "<!--!\n@append nav nav.html\n@append nav other.html\n@append nav nav.html\n-->\n{{#nav}}",
    );
    assert_eq!(site.render(&page), "<nav>1</nav><nav>2</nav><nav>1</nav>");
}

#[test]
fn missing_section_renders_empty() {
    let site = Site::new();
    site.section("nav.html", "N");
    let page = site.page(
        "p.html",
        "<!--!\n@section nav nav.html\n-->\n[{{#nav}}][{{#missing}}]",
    );
    assert_eq!(site.render(&page), "[N][]");
}

#[test]
fn section_declared_in_template_is_visible_to_page_body() {
    let site = Site::new();
    site.section("footer.md", "*fin*");
    site.template(
        "base.html",
        "<!--!\n@section footer footer.md\n-->\n{{#INNER_DOCUMENT}}",
    );
    let page = site.page("p.html", "<!--!\n@template base.html\n-->\n<p>{{#footer}}</p>");
    assert_eq!(site.render(&page), "<p><p><em>fin</em></p>\n</p>");
}

#[test]
fn section_with_its_own_template_is_wrapped_independently() {
    let site = Site::new();
    site.template("page.html", "<page>{{#INNER_DOCUMENT}}</page>");
    site.template("box.html", "<box>{{#INNER_DOCUMENT}}</box>");
    site.section("aside.html", "<!--!\n@template box.html\n-->\naside");
    let page = site.page(
        "p.html",
        "<!--!\n@template page.html\n@section aside aside.html\n-->\n{{#aside}}",
    );
    assert_eq!(site.render(&page), "<page><box>aside</box></page>");
}

#[test]
fn variables_set_by_a_section_are_shared() {
    let site = Site::new();
    site.section("meta.html", "<!--!\n@author Ada\n-->\n");
    let page = site.page(
        "p.html",
        "<!--!\n@section meta meta.html\n-->\nby {{ author }}",
    );
    assert_eq!(site.render(&page), "by Ada");
}

#[test]
fn missing_section_file_fails_the_page() {
    let site = Site::new();
    let page = site.page("p.html", "<!--!\n@section nav gone.html\n-->\nx");
    let err = site.renderer.render_document(&page).unwrap_err();
    match err {
        RenderError::Io { path, .. } => assert!(path.ends_with("sections/gone.html")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cyclic_sections_fail_instead_of_hanging() {
    let site = Site::new();
    site.section("a.html", "a{{#b}}");
    site.section("b.html", "b{{#a}}");
    let page = site.page(
        "p.html",
        "<!--!\n@section a a.html\n@section b b.html\n-->\n{{#a}}",
    );
    let err = site.renderer.render_document(&page).unwrap_err();
    assert!(
        matches!(err, RenderError::CyclicSectionReference { .. }),
        "got: {err}"
    );
}

#[test]
fn section_appending_itself_fails_instead_of_overflowing() {
    let site = Site::new();
    site.section("a.html", "<!--!\n@append a a.html\n-->\nA");
    let page = site.page("p.html", "<!--!\n@section a a.html\n-->\n{{#a}}");
    let err = site.renderer.render_document(&page).unwrap_err();
    assert!(
        matches!(err, RenderError::CyclicSectionLoad { .. }),
        "got: {err}"
    );
    assert!(err.to_string().contains("a.html"));
}

#[test]
fn sections_loading_each_other_fail() {
    let site = Site::new();
    site.section("a.html", "<!--!\n@section b b.html\n-->\nA");
    site.section("b.html", "<!--!\n@section c a.html\n-->\nB");
    let page = site.page("p.html", "<!--!\n@section a a.html\n-->\n{{#a}}");
    let err = site.renderer.render_document(&page).unwrap_err();
    assert!(
        matches!(err, RenderError::CyclicSectionLoad { .. }),
        "got: {err}"
    );
}

#[test]
fn template_wrapping_itself_fails_instead_of_looping() {
    let site = Site::new();
    site.template("loop.html", "<!--!\n@template loop.html\n-->\n{{#INNER_DOCUMENT}}");
    let page = site.page("p.html", "<!--!\n@template loop.html\n-->\nbody");
    let err = site.renderer.render_document(&page).unwrap_err();
    assert!(
        matches!(err, RenderError::TemplateChainTooLong { .. }),
        "got: {err}"
    );
}

#[test]
fn template_may_appear_twice_in_a_chain() {
    let site = Site::new();
    site.template("box.html", "[{{#INNER_DOCUMENT}}]");
    let page = site.page(
        "p.html",
        "<!--!\n@template box.html\n@template box.html\n-->\nx",
    );
    assert_eq!(site.render(&page), "[[x]]");
}

// ---------------------------------------------------------------------------
// Passthrough and errors
// ---------------------------------------------------------------------------

#[test]
fn plain_html_round_trips_byte_for_byte() {
    let site = Site::new();
    let html = "<!doctype html>\n<html>\n  <body class=\"x\">Hi &amp; bye</body>\n</html>\n";
    let page = site.page("plain.html", html);
    assert_eq!(site.render(&page), html);
}

#[test]
fn opaque_file_is_copied_unmodified() {
    let site = Site::new();
    let png: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];
    let page = site.write(site.layout().pages_dir.join("image.png"), &png);
    assert_eq!(site.renderer.render_document(&page).unwrap(), png);
}

#[test]
fn template_syntax_error_is_reported_for_the_page() {
    let site = Site::new();
    let page = site.page("broken.html", "{% if %}");
    let err = site.renderer.render_document(&page).unwrap_err();
    assert!(matches!(err, RenderError::TemplateParse { .. }), "got: {err}");
    assert!(err.to_string().contains("broken.html"));
}

#[test]
fn unset_variable_is_reported_for_the_page() {
    let site = Site::new();
    let page = site.page("p.html", "{{ subtitle }}");
    let err = site.renderer.render_document(&page).unwrap_err();
    assert!(matches!(err, RenderError::TemplateExec { .. }), "got: {err}");
}

#[test]
fn tera_tags_in_markdown_pages_are_escaped_by_conversion() {
    // Markdown conversion escapes `>` inside `{% %}`, so comparisons only
    // work in HTML documents.
    let site = Site::new();
    let md = site.page("q.md", "x {% if 2 > 1 %}y{% endif %}");
    let err = site.renderer.render_document(&md).unwrap_err();
    assert!(matches!(err, RenderError::TemplateParse { .. }), "got: {err}");

    let html = site.page("q.html", "x {% if 2 > 1 %}y{% endif %}");
    assert_eq!(site.render(&html), "x y");
}
