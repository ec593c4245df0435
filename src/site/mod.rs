//! Wiki link graph: loading, backlink indexing and rendering.
//!
//! # Pipeline
//!
//! ```text
//! Vec<Document> ──load()──► Corpus<Loaded> ──compute_backlinks()──► Corpus<Indexed>
//!                                                                      │
//!                                                         render_all() ▼
//!                                                              Vec<RenderedPage>
//! ```

mod backlinks;
mod error;
mod links;
mod loader;
mod page;
mod render;

pub use backlinks::compute_backlinks;
pub use error::BuildError;
pub use links::page_href;
pub use loader::{Document, load};
pub use render::{PageTemplate, RenderedPage, render_all};
