//! `[page]` section configuration.
//!
//! Controls what goes into the `<head>` of every rendered page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[page]` section in thimble.toml.
///
/// # Example
/// ```toml
/// [page]
/// stylesheet = "/style.css"   # empty string disables the link
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// External stylesheet linked from every page.
    #[serde(default = "defaults::page::stylesheet")]
    #[educe(Default = defaults::page::stylesheet())]
    pub stylesheet: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_page_config_default_stylesheet() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(
            config.page.stylesheet,
            "https://cdn.simplecss.org/simple.min.css"
        );
    }

    #[test]
    fn test_page_config_disable_stylesheet() {
        let config: SiteConfig = toml::from_str("[page]\nstylesheet = \"\"").unwrap();
        assert!(config.page.stylesheet.is_empty());
    }
}
