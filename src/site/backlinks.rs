//! Backlink indexing: the inverse of the outbound link relation.

use super::page::{Corpus, Indexed, Loaded};

/// Fill every page's backlinks from the outbound links of all pages.
///
/// Targets without a page are skipped. Pages are visited in name order,
/// so backlink order is stable across runs.
pub fn compute_backlinks(corpus: Corpus<Loaded>) -> Corpus<Indexed> {
    let mut pages = corpus.into_pages();

    let edges: Vec<(String, String)> = pages
        .values()
        .flat_map(|page| {
            page.outbound_links()
                .iter()
                .map(move |target| (target.clone(), page.name().to_owned()))
        })
        .collect();

    for (target, source) in edges {
        if let Some(page) = pages.get_mut(&target) {
            page.push_backlink(source);
        }
    }

    Corpus::indexed(pages)
}
