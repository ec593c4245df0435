//! `[build]` section configuration.
//!
//! Contains the source extension, output directory and post-processing switches.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in thimble.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "dist"      # Output directory
/// extension = "txt"    # Source page extension
/// minify = false       # Minify HTML
/// clean = false        # Remove output directory first
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Extension (without the dot) of source pages.
    #[serde(default = "defaults::build::extension")]
    #[educe(Default = defaults::build::extension())]
    pub extension: String,

    /// Minify HTML output (removes whitespace).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,
}
