//! Site configuration management for `thimble.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `[build]`   | Output directory, source extension, minify, clean |
//! | `[page]`    | Head elements of the rendered pages               |
//!
//! The file is optional. Command-line values override file values.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"
//! minify = true
//!
//! [page]
//! stylesheet = "/style.css"
//! ```

mod build;
pub mod defaults;
mod error;
mod page;

use build::BuildConfig;
use error::ConfigError;
use page::PageConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing thimble.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Path of the config file (may not exist)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Input directory holding the source pages (from the CLI)
    #[serde(skip)]
    pub input: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Rendered page settings
    #[serde(default)]
    pub page: PageConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load the config file named by the CLI, falling back to defaults
    /// when it does not exist, then apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = if cli.config.exists() {
            Self::from_path(&cli.config)?
        } else {
            Self {
                config_path: cli.config.clone(),
                ..Self::default()
            }
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        self.input = cli.input.clone();

        Self::update_option(&mut self.build.output, cli.out.as_ref());
        Self::update_option(&mut self.build.minify, cli.minify.as_ref());
        self.build.clean |= cli.clean;
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        let extension = &self.build.extension;
        if extension.is_empty() {
            bail!(ConfigError::Validation(
                "[build.extension] must not be empty".into()
            ));
        }
        if extension.starts_with('.') {
            bail!(ConfigError::Validation(format!(
                "[build.extension] must not start with a dot, use `{}`",
                extension.trim_start_matches('.')
            )));
        }

        if self.build.output.as_os_str().is_empty() {
            bail!(ConfigError::Validation(
                "[build.output] must not be empty".into()
            ));
        }
        if same_dir(&self.input, &self.build.output) {
            bail!(ConfigError::Validation(
                "[build.output] must differ from the input directory".into()
            ));
        }
        if self.build.clean && dir_contains(&self.build.output, &self.input) {
            bail!(ConfigError::Validation(
                "[build.clean] would remove the input directory inside [build.output]".into()
            ));
        }

        Ok(())
    }
}

/// Compare two directories, resolving them when they exist
fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.components().eq(b.components()),
    }
}

/// Whether `inner` is `outer` or lies below it
fn dir_contains(outer: &Path, inner: &Path) -> bool {
    match (outer.canonicalize(), inner.canonicalize()) {
        (Ok(outer), Ok(inner)) => inner.starts_with(outer),
        _ => inner.starts_with(outer),
    }
}

// ============================================================================
// Tests
// ============================================================================
