//! HTML minification.
//!
//! Enabled by `[build] minify` or `--minify`; disabled returns the input as-is.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify a rendered page if the config asks for it.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(html: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if config.build.minify {
        Cow::Owned(minify_html_inner(html))
    } else {
        Cow::Borrowed(html)
    }
}

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    minify_html::minify(html, &cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_page() {
        let html = b"<html>\n  <head>\n  </head>\n  <body>\n    <main>see <a href=\"B.html\">B</a></main>\n  </body>\n</html>";
        let result = minify(html, &config_with_minify(true));
        let result_str = String::from_utf8_lossy(&result);

        assert!(!result_str.contains("\n  "));
        assert!(result_str.contains("B.html"));
        assert!(result.len() < html.len());
    }

    #[test]
    fn test_minify_disabled() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";
        let result = minify(html, &config_with_minify(false));

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, html);
    }

    #[test]
    fn test_minify_is_stable() {
        let html = b"<p>Hello   <a class=\"missing-link\">Ghost</a></p>";
        let config = config_with_minify(true);
        assert_eq!(minify(html, &config), minify(html, &config));
    }
}
