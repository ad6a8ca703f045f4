//! Raw, unvalidated configuration as read from `docsite.toml` (or `.json`).
//!
//! Every field is optional here; `resolve` decides what is required and fills
//! in defaults. Keys are snake_case, and the camelCase spellings used by
//! VuePress-style `config.js` files are accepted as aliases.
//!
//! # Example
//!
//! ```toml
//! title = "Notes"
//! base_path = "/docs/"
//! head = [["link", { rel = "icon", href = "/favicon.svg" }]]
//!
//! [markdown]
//! toc_levels = [2, 3]
//!
//! [theme]
//! repo = "alice/notes"
//! edit_links = true
//! edit_link_text = "Edit this page"
//! sidebar_depth = 3
//! nav = [["Intro", "/a/"]]
//!
//! [[theme.sidebar."/a/"]]
//! title = "Group"
//! entries = ["", "setup"]
//! ```

use super::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, de::IgnoredAny};
use std::{fs, path::Path};

/// Root of the raw configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSiteConfig {
    pub title: Option<String>,

    #[serde(alias = "basePath", alias = "base")]
    pub base_path: Option<String>,

    pub description: Option<String>,

    #[serde(alias = "language")]
    pub lang: Option<String>,

    /// `[tagName, { attr = value }]` pairs, in render order.
    #[serde(alias = "headTags")]
    pub head: Option<Vec<(String, IndexMap<String, String>)>>,

    #[serde(alias = "markdownOptions")]
    pub markdown: Option<RawMarkdownConfig>,

    #[serde(alias = "themeConfig")]
    pub theme: Option<RawThemeConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMarkdownConfig {
    #[serde(alias = "tocLevels")]
    pub toc_levels: Option<Vec<RawTocLevel>>,

    /// VuePress form: `markdown.toc.includeLevel`.
    pub toc: Option<RawTocConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTocConfig {
    #[serde(alias = "includeLevel")]
    pub include_level: Option<Vec<RawTocLevel>>,
}

/// One `tocLevels` element, as written.
///
/// Anything that is not an `i64` (floats, strings, huge integers) is kept as
/// `Other` so that range validation reports it, not the parser.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTocLevel {
    Int(i64),
    Other(IgnoredAny),
}

impl From<i64> for RawTocLevel {
    fn from(level: i64) -> Self {
        Self::Int(level)
    }
}

impl RawMarkdownConfig {
    /// Levels from whichever spelling is present.
    ///
    /// Both `toc_levels` and `toc.include_level` at once is an
    /// `InvalidFormat("tocLevels")` error.
    pub fn levels(&self) -> Result<Option<&[RawTocLevel]>, ConfigError> {
        let include_level = self.toc.as_ref().and_then(|toc| toc.include_level.as_deref());
        match (self.toc_levels.as_deref(), include_level) {
            (Some(_), Some(_)) => Err(ConfigError::InvalidFormat("tocLevels")),
            (levels, None) | (None, levels) => Ok(levels),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawThemeConfig {
    #[serde(alias = "repoUrl", alias = "repo")]
    pub repo_url: Option<String>,

    #[serde(alias = "docsDir")]
    pub docs_dir: Option<String>,

    #[serde(alias = "docsBranch")]
    pub docs_branch: Option<String>,

    #[serde(alias = "editLinksEnabled", alias = "editLinks")]
    pub edit_links: Option<bool>,

    #[serde(alias = "editLinkText")]
    pub edit_link_text: Option<String>,

    #[serde(alias = "sidebarDepth")]
    pub sidebar_depth: Option<i64>,

    #[serde(alias = "navItems")]
    pub nav: Option<Vec<RawNavItem>>,

    #[serde(alias = "sidebarSections")]
    pub sidebar: Option<IndexMap<String, Vec<RawSidebarGroup>>>,
}

/// A navigation entry, either as a `[label, target]` pair or as a table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNavItem {
    Pair(String, String),
    Table { text: String, link: String },
}

impl RawNavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Pair(label, _) | Self::Table { text: label, .. } => label,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Pair(_, target) | Self::Table { link: target, .. } => target,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSidebarGroup {
    #[serde(default)]
    pub title: String,

    #[serde(default, alias = "children")]
    pub entries: Vec<String>,
}

impl RawSiteConfig {
    /// Parse configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load configuration from file path.
    ///
    /// `.json` files are parsed as JSON, everything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}
