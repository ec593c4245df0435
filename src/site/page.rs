//! Page and corpus types.
//!
//! A [`Corpus`] moves through two phases: [`Loaded`] (pages parsed, backlinks
//! empty) and [`Indexed`] (backlinks computed). Only the loader builds a
//! loaded corpus and only [`compute_backlinks`](super::compute_backlinks)
//! turns it into an indexed one, so rendering can never observe a corpus
//! whose backlinks are incomplete.

use std::collections::BTreeMap;
use std::marker::PhantomData;

/// A single wiki page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    name: String,
    content: String,
    outbound_links: Vec<String>,
    backlinks: Vec<String>,
}

impl Page {
    pub(super) fn new(name: String, content: String, outbound_links: Vec<String>) -> Self {
        Self {
            name,
            content,
            outbound_links,
            backlinks: Vec::new(),
        }
    }

    /// Page name, derived from the source file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw document text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Referenced names in first-occurrence order, without duplicates.
    /// May contain names with no page.
    pub fn outbound_links(&self) -> &[String] {
        &self.outbound_links
    }

    /// Names of pages referencing this one.
    pub fn backlinks(&self) -> &[String] {
        &self.backlinks
    }

    pub(super) fn push_backlink(&mut self, name: String) {
        self.backlinks.push(name);
    }
}

/// Marker: pages loaded, backlinks not computed yet.
#[derive(Debug, Clone)]
pub enum Loaded {}

/// Marker: backlinks computed, corpus is read-only.
#[derive(Debug, Clone)]
pub enum Indexed {}

/// All pages of one run, keyed by name.
#[derive(Debug, Clone)]
pub struct Corpus<P = Loaded> {
    pages: BTreeMap<String, Page>,
    _phase: PhantomData<P>,
}

impl<P> Corpus<P> {
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Page> {
        self.pages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    /// Pages in name order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Count of references to names that have no page, over all pages.
    pub fn missing_links(&self) -> usize {
        self.pages()
            .flat_map(Page::outbound_links)
            .filter(|target| !self.contains(target))
            .count()
    }
}

impl Corpus<Loaded> {
    pub(super) fn from_pages(pages: BTreeMap<String, Page>) -> Self {
        Self {
            pages,
            _phase: PhantomData,
        }
    }

    pub(super) fn into_pages(self) -> BTreeMap<String, Page> {
        self.pages
    }
}

impl Corpus<Indexed> {
    pub(super) fn indexed(pages: BTreeMap<String, Page>) -> Self {
        Self {
            pages,
            _phase: PhantomData,
        }
    }
}
