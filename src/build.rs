//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_source_files() ──► every *.txt under the input directory
//!     │
//!     ├── Document::read()       ──► parallel, all documents collected first
//!     │
//!     ├── load()                 ──► Corpus<Loaded>   (outbound links)
//!     │
//!     ├── compute_backlinks()    ──► Corpus<Indexed>  (backlinks)
//!     │
//!     ├── render_all()           ──► parallel, read-only corpus
//!     │
//!     └── write_pages()          ──► <output>/<name>.html
//! ```
//!
//! Every page is rendered before the first file is written. Any error aborts
//! the run.

use crate::{
    config::SiteConfig,
    log,
    site::{
        BuildError, Document, PageTemplate, RenderedPage, compute_backlinks, load, page_href,
        render_all,
    },
    utils::{
        files::{collect_source_files, prepare_output_dir},
        minify::minify,
    },
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildSummary {
    pub pages: usize,
    pub links: usize,
    pub missing: usize,
}

/// Build the whole site from `config.input` into `config.build.output`.
///
/// The config is validated first, so nothing is read or written for an
/// invalid setup.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let input = &config.input;
    let output = &config.build.output;
    config.validate()?;

    let sources = collect_source_files(input, &config.build.extension)?;
    log!("load"; "found {} pages in {}", sources.len(), input.display());

    let documents = sources
        .par_iter()
        .map(|path| Document::read(path))
        .collect::<Result<Vec<_>, BuildError>>()?;
    let corpus = load(documents)?;

    let corpus = compute_backlinks(corpus);
    let summary = BuildSummary {
        pages: corpus.len(),
        links: corpus.pages().map(|page| page.outbound_links().len()).sum(),
        missing: corpus.missing_links(),
    };
    log!("index"; "{} links, {} missing", summary.links, summary.missing);

    let template = PageTemplate::new(config.page.stylesheet.as_str());
    let rendered = render_all(&corpus, &template);
    log!("render"; "rendered {} pages", rendered.len());

    write_pages(&rendered, output, config)
        .with_context(|| format!("Failed to write site to {}", output.display()))?;

    if corpus.is_empty() {
        log!("warn"; "no .{} files found in {}", config.build.extension, input.display());
    } else {
        log!("build"; "done");
    }

    Ok(summary)
}

/// Write rendered pages into `output`, stopping at the first failure.
fn write_pages(
    pages: &[RenderedPage],
    output: &Path,
    config: &SiteConfig,
) -> Result<(), BuildError> {
    prepare_output_dir(output, config.build.clean)?;

    for page in pages {
        let path = output.join(page_href(&page.name));
        let html = minify(page.html.as_bytes(), config);
        fs::write(&path, html).map_err(|err| BuildError::output(&path, err))?;
    }

    log!("write"; "{} files written to {}", pages.len(), output.display());
    Ok(())
}
