//! `[[NAME]]` reference syntax.
//!
//! Extraction collapses repeats; resolution rewrites every occurrence.

use super::page::Corpus;
use regex::{Captures, Regex};
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Extension of rendered pages, also used in every generated `href`.
pub const OUTPUT_EXTENSION: &str = "html";

/// CSS class marking references to pages that do not exist.
pub const MISSING_LINK_CLASS: &str = "missing-link";

/// Non-greedy: `[[a]] [[b]]` yields two references, not `a]] [[b`.
static REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("valid regex"));

/// Output file name (and link target) of a page.
pub fn page_href(name: &str) -> String {
    format!("{name}.{OUTPUT_EXTENSION}")
}

/// Anchor element pointing at a page.
pub fn page_anchor(name: &str) -> String {
    format!(r#"<a href="{}">{name}</a>"#, page_href(name))
}

/// Collect referenced names in first-occurrence order, dropping repeats.
pub fn extract_links(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    REFERENCE_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_owned())
        .filter(|target| seen.insert(target.clone()))
        .collect()
}

/// Replace every reference in `text` with an anchor to the target page,
/// or with a missing-link marker when no such page exists.
///
/// All other text is left untouched.
pub fn resolve_references<P>(text: &str, corpus: &Corpus<P>) -> String {
    REFERENCE_RE
        .replace_all(text, |caps: &Captures| {
            let target = &caps[1];
            if corpus.contains(target) {
                page_anchor(target)
            } else {
                format!(r#"<a class="{MISSING_LINK_CLASS}">{target}</a>"#)
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Document, load};

    fn corpus(names: &[&str]) -> Corpus {
        load(names.iter().map(|name| Document::new(*name, ""))).unwrap()
    }

    #[test]
    fn test_extract_links_basic() {
        assert_eq!(extract_links("see [[A]] and [[B]]"), vec!["A", "B"]);
    }

    #[test]
    fn test_extract_links_dedup_keeps_first_order() {
        assert_eq!(
            extract_links("[[B]] [[A]] [[B]] [[C]] [[A]]"),
            vec!["B", "A", "C"]
        );
    }

    #[test]
    fn test_extract_links_non_greedy() {
        assert_eq!(extract_links("[[a]]]] [[b]]"), vec!["a", "b"]);
        assert_eq!(extract_links("[[a [b] c]]"), vec!["a [b] c"]);
    }

    #[test]
    fn test_extract_links_case_sensitive() {
        assert_eq!(extract_links("[[Home]] [[home]]"), vec!["Home", "home"]);
    }

    #[test]
    fn test_extract_links_ignores_unclosed() {
        assert!(extract_links("[[open and [single] ]").is_empty());
        assert!(extract_links("no references here").is_empty());
    }

    #[test]
    fn test_extract_links_does_not_span_lines() {
        assert!(extract_links("[[first\nsecond]]").is_empty());
    }

    #[test]
    fn test_resolve_existing_reference() {
        let corpus = corpus(&["B"]);
        assert_eq!(
            resolve_references("see [[B]].", &corpus),
            r#"see <a href="B.html">B</a>."#
        );
    }

    #[test]
    fn test_resolve_missing_reference() {
        let corpus = corpus(&["A"]);
        assert_eq!(
            resolve_references("see [[Ghost]]", &corpus),
            r#"see <a class="missing-link">Ghost</a>"#
        );
    }

    #[test]
    fn test_resolve_every_occurrence() {
        let corpus = corpus(&["B"]);
        let html = resolve_references("[[B]], [[Ghost]], [[B]]", &corpus);
        assert_eq!(html.matches(r#"<a href="B.html">B</a>"#).count(), 2);
        assert_eq!(html.matches("missing-link").count(), 1);
    }

    #[test]
    fn test_resolve_leaves_other_text_alone() {
        let corpus = corpus(&[]);
        let text = "<b>bold</b> & [single] brackets\n  indented";
        assert_eq!(resolve_references(text, &corpus), text);
    }

    #[test]
    fn test_page_href() {
        assert_eq!(page_href("Home"), "Home.html");
        assert_eq!(page_anchor("Home"), r#"<a href="Home.html">Home</a>"#);
    }
}
