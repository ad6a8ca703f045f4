//! Site configuration for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── raw        # RawSiteConfig: every field optional, as parsed
//! ├── markdown   # [markdown] → MarkdownConfig
//! ├── theme      # [theme]    → ThemeConfig, NavItem, SidebarGroup
//! ├── head       # HeadTag
//! ├── paths      # UrlResolver (base_path handling)
//! ├── lint       # ConfigWarning
//! ├── defaults   # Default values
//! ├── error      # ConfigError
//! └── mod.rs     # SiteConfig, resolve (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | (top level)  | title, description, base_path, lang, head tags   |
//! | `[markdown]` | Table of contents heading levels                 |
//! | `[theme]`    | Repository, edit links, nav bar, sidebars        |
//!
//! # Example
//!
//! ```toml
//! title = "Go Notes"
//! description = "Types, functions, concurrency"
//! base_path = "/go-notes/"
//! head = [["link", { rel = "icon", href = "/logo.svg" }]]
//!
//! [markdown]
//! toc_levels = [2, 3, 4, 5, 6]
//!
//! [theme]
//! repo = "alice/go-notes"
//! docs_dir = "docs"
//! edit_links = true
//! edit_link_text = "Fix a typo"
//! sidebar_depth = 3
//! nav = [["Basics", "/basic/"], ["Concurrency", "/concurrent/"]]
//!
//! [[theme.sidebar."/basic/"]]
//! title = "Basics"
//! entries = ["", "types", "functions"]
//! ```

mod defaults;
mod error;
mod head;
mod lint;
mod markdown;
mod paths;
mod raw;
mod theme;

pub use error::ConfigError;
pub use head::HeadTag;
pub use lint::ConfigWarning;
pub use markdown::MarkdownConfig;
pub use paths::UrlResolver;
pub use raw::{
    RawMarkdownConfig, RawNavItem, RawSidebarGroup, RawSiteConfig, RawThemeConfig, RawTocConfig,
    RawTocLevel,
};
pub use theme::{NavItem, SidebarGroup, ThemeConfig};

use serde::Serialize;
use std::path::Path;

// ============================================================================
// Root Configuration
// ============================================================================

/// Resolved site configuration.
///
/// Only produced by [`resolve`], so every instance satisfies the validation
/// rules. Built once and shared as `&SiteConfig`; nothing mutates it after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Starts and ends with `/`.
    pub base_path: String,

    /// Non-empty.
    pub title: String,

    pub description: String,

    /// Language code, carried verbatim (e.g. "en-US", "zh-CN").
    pub lang: String,

    pub head_tags: Vec<HeadTag>,

    pub markdown_options: MarkdownConfig,

    pub theme_config: ThemeConfig,
}

/// Validate a raw config and fill in defaults.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. `title` present and non-empty
/// 2. `basePath` starts and ends with `/`
/// 3. `tocLevels` non-empty, each an integer in `1..=6`
/// 4. `editLinkText` non-empty when edit links are enabled
/// 5. `sidebarSections` keys end with `/`
/// 6. `sidebarDepth` not negative
///
/// Defaults apply only to absent fields; a present but malformed field is
/// always an error.
pub fn resolve(raw: &RawSiteConfig) -> Result<SiteConfig, ConfigError> {
    let title = match raw.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => return Err(ConfigError::MissingRequiredField("title")),
    };

    let base_path = match raw.base_path.as_deref() {
        Some(base) if is_valid_base_path(base) => base.to_string(),
        Some(_) => return Err(ConfigError::InvalidFormat("basePath")),
        None => defaults::site::base_path(),
    };

    let markdown_options = match &raw.markdown {
        Some(markdown) => MarkdownConfig::resolve(markdown)?,
        None => MarkdownConfig::default(),
    };

    let theme_config = match &raw.theme {
        Some(theme) => ThemeConfig::resolve(theme)?,
        None => ThemeConfig::default(),
    };

    let head_tags = raw
        .head
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|(tag, attributes)| HeadTag::new(tag.clone(), attributes.clone()))
        .collect();

    Ok(SiteConfig {
        base_path,
        title,
        description: raw
            .description
            .clone()
            .unwrap_or_else(defaults::site::description),
        lang: raw.lang.clone().unwrap_or_else(defaults::site::lang),
        head_tags,
        markdown_options,
        theme_config,
    })
}

/// Read, parse and resolve a config file.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    resolve(&RawSiteConfig::from_path(path)?)
}

fn is_valid_base_path(base: &str) -> bool {
    base.starts_with('/') && base.ends_with('/')
}

impl SiteConfig {
    /// Same as [`resolve`].
    #[inline]
    pub fn resolve(raw: &RawSiteConfig) -> Result<Self, ConfigError> {
        resolve(raw)
    }

    /// Parse and resolve TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        resolve(&RawSiteConfig::from_toml_str(content)?)
    }

    /// Parse and resolve JSON content.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        resolve(&RawSiteConfig::from_json_str(content)?)
    }

    /// URL helper bound to this config's `base_path`.
    ///
    /// # Example
    /// ```ignore
    /// let urls = config.urls();
    /// let href = urls.with_base(&item.target_path);
    /// ```
    #[inline]
    pub fn urls(&self) -> UrlResolver<'_> {
        UrlResolver::new(&self.base_path)
    }
}

#[cfg(test)]
pub(crate) fn test_resolve_toml(content: &str) -> SiteConfig {
    SiteConfig::from_toml_str(content).unwrap()
}

// ============================================================================
// Tests
// ============================================================================
