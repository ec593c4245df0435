//! Page rendering.
//!
//! Rendering reads an indexed corpus only, so pages render independently
//! and in parallel. The same corpus always renders to the same bytes.

use super::links::{MISSING_LINK_CLASS, page_anchor, resolve_references};
use super::page::{Corpus, Indexed, Page};
use rayon::prelude::*;

/// Everything the template needs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext<'a> {
    pub title: &'a str,
    pub resolved_body: String,
    pub backlink_list: &'a [String],
}

impl<'a> RenderContext<'a> {
    pub fn new(page: &'a Page, corpus: &Corpus<Indexed>) -> Self {
        Self {
            title: page.name(),
            resolved_body: resolve_references(page.content(), corpus),
            backlink_list: page.backlinks(),
        }
    }
}

/// The HTML document wrapped around every page.
#[derive(Debug, Clone, Default)]
pub struct PageTemplate {
    /// External stylesheet URL; empty for none.
    pub stylesheet: String,
}

impl PageTemplate {
    pub fn new(stylesheet: impl Into<String>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
        }
    }

    /// Fill the template from a render context.
    pub fn fill(&self, ctx: &RenderContext) -> String {
        let title = ctx.title;
        let mut html = String::with_capacity(ctx.resolved_body.len() + 512);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(&format!("  <title>{title}</title>\n"));
        html.push_str(&format!(
            "  <style>\n    .{MISSING_LINK_CLASS} {{ text-decoration: underline dotted; }}\n  </style>\n"
        ));
        if !self.stylesheet.is_empty() {
            html.push_str(&format!(
                "  <link rel=\"stylesheet\" href=\"{}\">\n",
                self.stylesheet
            ));
        }
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("  <h1>{title}</h1>\n"));
        html.push_str(&format!("  <main>{}</main>\n", ctx.resolved_body));

        if !ctx.backlink_list.is_empty() {
            html.push_str("  <h2>backlinks</h2>\n  <ul>\n");
            for name in ctx.backlink_list {
                html.push_str(&format!("    <li>{}</li>\n", page_anchor(name)));
            }
            html.push_str("  </ul>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

/// A rendered page ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub name: String,
    pub html: String,
}

/// Render a single page.
pub fn render(page: &Page, corpus: &Corpus<Indexed>, template: &PageTemplate) -> String {
    template.fill(&RenderContext::new(page, corpus))
}

/// Render every page of the corpus, in name order.
pub fn render_all(corpus: &Corpus<Indexed>, template: &PageTemplate) -> Vec<RenderedPage> {
    let pages: Vec<&Page> = corpus.pages().collect();
    pages
        .par_iter()
        .map(|page| RenderedPage {
            name: page.name().to_owned(),
            html: render(page, corpus, template),
        })
        .collect()
}
