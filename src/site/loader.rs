//! Corpus loading: documents in, pages with outbound links out.

use super::error::BuildError;
use super::links::extract_links;
use super::page::{Corpus, Page};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

/// A source document before parsing.
#[derive(Debug, Clone)]
pub struct Document {
    /// Page name the document will be published under.
    pub name: String,
    /// Raw document text.
    pub text: String,
    /// Where the document came from, for error messages.
    pub source: PathBuf,
}

impl Document {
    /// In-memory document; the name doubles as its source.
    #[cfg(test)]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            source: PathBuf::from(&name),
            name,
            text: text.into(),
        }
    }

    /// Read a document from disk, naming it after the file stem.
    ///
    /// `notes/Home.txt` → `Home`
    pub fn read(path: &Path) -> Result<Self, BuildError> {
        let text = fs::read_to_string(path).map_err(|err| BuildError::input(path, err))?;
        Ok(Self {
            name: page_name(path),
            text,
            source: path.to_path_buf(),
        })
    }
}

/// Derive a page name from a source path: the file name minus its extension.
pub fn page_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Build a corpus from documents, extracting each page's outbound links.
///
/// Fails with [`BuildError::DuplicateName`] when two documents share a name.
pub fn load(documents: impl IntoIterator<Item = Document>) -> Result<Corpus, BuildError> {
    let mut pages = BTreeMap::new();
    let mut sources: BTreeMap<String, PathBuf> = BTreeMap::new();

    for Document { name, text, source } in documents {
        match sources.entry(name.clone()) {
            Entry::Occupied(first) => {
                return Err(BuildError::DuplicateName {
                    name,
                    first: first.get().clone(),
                    second: source,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(source);
            }
        }

        let links = extract_links(&text);
        pages.insert(name.clone(), Page::new(name, text, links));
    }

    Ok(Corpus::from_pages(pages))
}
