//! Base-path aware URL generation.
//!
//! Every site-absolute link in the config (`/guide/`, `/favicon.svg`) is
//! written without the deployment base. The builder runs links through
//! [`UrlResolver`] so that `base_path` is applied in exactly one place.
//!
//! # Usage
//!
//! ```ignore
//! let urls = config.urls();
//!
//! urls.with_base("/guide/setup");
//! // → "/docs/guide/setup" with base_path "/docs/"
//! // → "/guide/setup"      with base_path "/"
//! ```

/// Applies `base_path` to site-absolute links.
#[derive(Debug, Clone, Copy)]
pub struct UrlResolver<'a> {
    /// Always starts and ends with `/`
    base: &'a str,
}

impl<'a> UrlResolver<'a> {
    #[inline]
    pub const fn new(base: &'a str) -> Self {
        Self { base }
    }

    #[inline]
    pub const fn base(&self) -> &str {
        self.base
    }

    /// Check if base is set (anything other than `/`).
    #[inline]
    pub fn has_base(&self) -> bool {
        self.base != "/"
    }

    /// Links with a scheme (`https:`, `mailto:`, `tel:`) or protocol-relative.
    pub fn is_external(link: &str) -> bool {
        link.starts_with("//") || url::Url::parse(link).is_ok()
    }

    /// Prefix a site-absolute link with the base path.
    ///
    /// External and relative links are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // base "/docs/":
    /// urls.with_base("/a/")                 → "/docs/a/"
    /// urls.with_base("setup")               → "setup"
    /// urls.with_base("https://example.com") → "https://example.com"
    /// ```
    pub fn with_base(&self, link: &str) -> String {
        if Self::is_external(link) || !link.starts_with('/') {
            return link.to_string();
        }
        format!("{}{}", self.base, &link[1..])
    }
}
