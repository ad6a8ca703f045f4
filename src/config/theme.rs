//! `[theme]` section configuration.
//!
//! Navigation bar, per-prefix sidebars, and "edit this page" links.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! repo = "alice/notes"         # or a full https:// URL
//! docs_dir = "docs"
//! edit_links = true
//! edit_link_text = "Edit this page"
//! sidebar_depth = 2
//! nav = [["Basics", "/basic/"], ["Advanced", "/advanced/"]]
//!
//! [[theme.sidebar."/basic/"]]
//! title = "Basics"
//! entries = ["", "syntax", "functions"]
//! ```

use super::{
    ConfigError, defaults,
    raw::{RawNavItem, RawSidebarGroup, RawThemeConfig},
};
use educe::Educe;
use indexmap::IndexMap;
use serde::Serialize;

const GITHUB: &str = "https://github.com";

/// `[theme]` section - consumed by the builder's default theme.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Repository URL or GitHub `owner/repo` shorthand.
    pub repo_url: Option<String>,

    /// Directory holding the docs inside the repository.
    #[educe(Default = defaults::theme::docs_dir())]
    pub docs_dir: String,

    /// Branch used for edit links.
    #[educe(Default = defaults::theme::docs_branch())]
    pub docs_branch: String,

    pub edit_links_enabled: bool,

    /// Link text; non-empty whenever `edit_links_enabled` is set.
    pub edit_link_text: String,

    /// Heading depth shown under each sidebar entry.
    #[educe(Default = defaults::theme::sidebar_depth())]
    pub sidebar_depth: u32,

    pub nav_items: Vec<NavItem>,

    /// Path prefix (ending in `/`) → sidebar groups, in config order.
    pub sidebar_sections: IndexMap<String, Vec<SidebarGroup>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub label: String,
    pub target_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub title: String,
    /// Document slugs; `""` is the section index.
    pub entries: Vec<String>,
}

impl ThemeConfig {
    pub(super) fn resolve(raw: &RawThemeConfig) -> Result<Self, ConfigError> {
        let edit_links_enabled = raw.edit_links.unwrap_or(false);
        let edit_link_text = raw.edit_link_text.clone().unwrap_or_default();
        if edit_links_enabled && edit_link_text.is_empty() {
            return Err(ConfigError::MissingRequiredField("editLinkText"));
        }

        let sidebar_sections = match &raw.sidebar {
            Some(sections) => resolve_sidebar(sections)?,
            None => IndexMap::new(),
        };

        let sidebar_depth = match raw.sidebar_depth {
            Some(depth) => u32::try_from(depth).map_err(|_| ConfigError::OutOfRange("sidebarDepth"))?,
            None => defaults::theme::sidebar_depth(),
        };

        let nav_items = raw
            .nav
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(NavItem::from)
            .collect();

        Ok(Self {
            repo_url: raw.repo_url.clone(),
            docs_dir: raw.docs_dir.clone().unwrap_or_else(defaults::theme::docs_dir),
            docs_branch: raw
                .docs_branch
                .clone()
                .unwrap_or_else(defaults::theme::docs_branch),
            edit_links_enabled,
            edit_link_text,
            sidebar_depth,
            nav_items,
            sidebar_sections,
        })
    }

    /// Full repository URL, with `owner/repo` expanded to GitHub.
    ///
    /// # Examples
    /// ```ignore
    /// "alice/notes"                      → "https://github.com/alice/notes"
    /// "https://gitlab.com/alice/notes/"  → "https://gitlab.com/alice/notes"
    /// ```
    pub fn repo_link(&self) -> Option<String> {
        let repo = self.repo_url.as_deref()?.trim();
        if repo.is_empty() {
            return None;
        }

        let link = if has_scheme(repo) {
            repo.to_string()
        } else {
            format!("{GITHUB}/{}", repo.trim_start_matches('/'))
        };
        Some(link.trim_end_matches('/').to_string())
    }

    /// Label for the repository link in the navbar.
    pub fn repo_label(&self) -> Option<&'static str> {
        let link = self.repo_link()?;
        Some(match RepoHost::of(&link) {
            RepoHost::GitHub => "GitHub",
            RepoHost::GitLab => "GitLab",
            RepoHost::Bitbucket => "Bitbucket",
            RepoHost::Other => "Source",
        })
    }

    /// "Edit this page" URL for a document, relative to `docs_dir`.
    ///
    /// `None` unless edit links are enabled and a repository is configured.
    pub fn edit_link(&self, relative_path: &str) -> Option<String> {
        if !self.edit_links_enabled {
            return None;
        }
        let repo = self.repo_link()?;

        let branch = &self.docs_branch;
        let dir = self.docs_dir.trim_matches('/');
        let dir = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        let path = relative_path.trim_start_matches('/');

        Some(match RepoHost::of(&repo) {
            RepoHost::Bitbucket => format!(
                "{repo}/src/{branch}/{dir}{path}?mode=edit&spa=0&at={branch}&fileviewer=file-view-default"
            ),
            RepoHost::GitLab => format!("{repo}/-/edit/{branch}/{dir}{path}"),
            RepoHost::GitHub | RepoHost::Other => format!("{repo}/edit/{branch}/{dir}{path}"),
        })
    }

    /// Sidebar for a page: the section with the longest prefix of `page_path`.
    pub fn sidebar_for(&self, page_path: &str) -> Option<(&str, &[SidebarGroup])> {
        self.sidebar_sections
            .iter()
            .filter(|(prefix, _)| page_path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, groups)| (prefix.as_str(), groups.as_slice()))
    }
}

impl From<&RawNavItem> for NavItem {
    fn from(raw: &RawNavItem) -> Self {
        Self {
            label: raw.label().to_string(),
            target_path: raw.target().to_string(),
        }
    }
}

impl From<&RawSidebarGroup> for SidebarGroup {
    fn from(raw: &RawSidebarGroup) -> Self {
        Self {
            title: raw.title.clone(),
            entries: raw.entries.clone(),
        }
    }
}

impl SidebarGroup {
    /// Page paths for this group's entries under `prefix`.
    ///
    /// # Examples
    /// ```ignore
    /// // prefix "/guide/", entries ["", "setup", "/faq/"]
    /// group.links("/guide/") // → ["/guide/", "/guide/setup", "/faq/"]
    /// ```
    pub fn links(&self, prefix: &str) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                if entry.is_empty() {
                    prefix.to_string()
                } else if entry.starts_with('/') {
                    entry.clone()
                } else {
                    format!("{prefix}{entry}")
                }
            })
            .collect()
    }
}

fn resolve_sidebar(
    sections: &IndexMap<String, Vec<RawSidebarGroup>>,
) -> Result<IndexMap<String, Vec<SidebarGroup>>, ConfigError> {
    sections
        .iter()
        .map(|(prefix, groups)| {
            if !prefix.ends_with('/') {
                return Err(ConfigError::InvalidFormat("sidebarSections key"));
            }
            Ok((prefix.clone(), groups.iter().map(SidebarGroup::from).collect()))
        })
        .collect()
}

fn has_scheme(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Hosting service of a repository, by URL host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepoHost {
    GitHub,
    GitLab,
    Bitbucket,
    Other,
}

impl RepoHost {
    fn of(link: &str) -> Self {
        let Some(host) = url::Url::parse(link)
            .ok()
            .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        else {
            return Self::Other;
        };

        let is = |domain: &str| host == domain || host.ends_with(&format!(".{domain}"));
        if is("github.com") {
            Self::GitHub
        } else if is("gitlab.com") {
            Self::GitLab
        } else if is("bitbucket.org") {
            Self::Bitbucket
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(repo: Option<&str>, edit: bool) -> ThemeConfig {
        ThemeConfig {
            repo_url: repo.map(str::to_string),
            edit_links_enabled: edit,
            edit_link_text: if edit { "Edit".into() } else { String::new() },
            ..ThemeConfig::default()
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let config = ThemeConfig::resolve(&RawThemeConfig::default()).unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.sidebar_depth, 1);
        assert_eq!(config.docs_branch, "master");
        assert!(config.nav_items.is_empty());
        assert!(config.sidebar_sections.is_empty());
        assert!(!config.edit_links_enabled);
    }

    #[test]
    fn test_edit_links_require_text() {
        let raw = RawThemeConfig {
            edit_links: Some(true),
            ..RawThemeConfig::default()
        };
        let err = ThemeConfig::resolve(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequiredField("editLinkText")));

        let raw = RawThemeConfig {
            edit_links: Some(true),
            edit_link_text: Some(String::new()),
            ..RawThemeConfig::default()
        };
        let err = ThemeConfig::resolve(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequiredField("editLinkText")));
    }

    #[test]
    fn test_edit_link_text_optional_when_disabled() {
        let raw = RawThemeConfig {
            edit_links: Some(false),
            ..RawThemeConfig::default()
        };
        let config = ThemeConfig::resolve(&raw).unwrap();
        assert_eq!(config.edit_link_text, "");
    }

    #[test]
    fn test_sidebar_key_must_end_with_slash() {
        let mut sidebar = IndexMap::new();
        sidebar.insert("/guide/".to_string(), vec![]);
        sidebar.insert("/api".to_string(), vec![]);
        let raw = RawThemeConfig {
            sidebar: Some(sidebar),
            ..RawThemeConfig::default()
        };
        let err = ThemeConfig::resolve(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat("sidebarSections key")));
    }

    #[test]
    fn test_negative_sidebar_depth() {
        let raw = RawThemeConfig {
            sidebar_depth: Some(-1),
            ..RawThemeConfig::default()
        };
        let err = ThemeConfig::resolve(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange("sidebarDepth")));

        let raw = RawThemeConfig {
            sidebar_depth: Some(0),
            ..RawThemeConfig::default()
        };
        assert_eq!(ThemeConfig::resolve(&raw).unwrap().sidebar_depth, 0);
    }

    #[test]
    fn test_nav_order_preserved() {
        let raw = RawThemeConfig {
            nav: Some(vec![
                RawNavItem::Pair("B".into(), "/b/".into()),
                RawNavItem::Table {
                    text: "A".into(),
                    link: "/a/".into(),
                },
            ]),
            ..RawThemeConfig::default()
        };
        let config = ThemeConfig::resolve(&raw).unwrap();
        let labels: Vec<_> = config.nav_items.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A"]);
        assert_eq!(config.nav_items[1].target_path, "/a/");
    }

    #[test]
    fn test_repo_link() {
        assert_eq!(theme(None, false).repo_link(), None);
        assert_eq!(theme(Some(""), false).repo_link(), None);
        assert_eq!(
            theme(Some("alice/notes"), false).repo_link().as_deref(),
            Some("https://github.com/alice/notes")
        );
        assert_eq!(
            theme(Some("https://gitlab.com/alice/notes/"), false)
                .repo_link()
                .as_deref(),
            Some("https://gitlab.com/alice/notes")
        );
    }

    #[test]
    fn test_repo_label() {
        assert_eq!(theme(Some("alice/notes"), false).repo_label(), Some("GitHub"));
        assert_eq!(
            theme(Some("https://gitlab.com/a/b"), false).repo_label(),
            Some("GitLab")
        );
        assert_eq!(
            theme(Some("https://bitbucket.org/a/b"), false).repo_label(),
            Some("Bitbucket")
        );
        assert_eq!(
            theme(Some("https://git.example.com/a/b"), false).repo_label(),
            Some("Source")
        );
        assert_eq!(theme(None, false).repo_label(), None);
    }

    #[test]
    fn test_edit_link_github() {
        let mut config = theme(Some("shipengqi/go-learn-demo"), true);
        config.docs_dir = "docs".into();
        assert_eq!(
            config.edit_link("go_basic/README.md").as_deref(),
            Some("https://github.com/shipengqi/go-learn-demo/edit/master/docs/go_basic/README.md")
        );

        config.docs_dir = String::new();
        config.docs_branch = "main".into();
        assert_eq!(
            config.edit_link("/README.md").as_deref(),
            Some("https://github.com/shipengqi/go-learn-demo/edit/main/README.md")
        );
    }

    #[test]
    fn test_edit_link_gitlab_and_bitbucket() {
        let config = theme(Some("https://gitlab.com/a/b"), true);
        assert_eq!(
            config.edit_link("x.md").as_deref(),
            Some("https://gitlab.com/a/b/-/edit/master/x.md")
        );

        let config = theme(Some("https://bitbucket.org/a/b"), true);
        assert_eq!(
            config.edit_link("x.md").as_deref(),
            Some(
                "https://bitbucket.org/a/b/src/master/x.md?mode=edit&spa=0&at=master&fileviewer=file-view-default"
            )
        );
    }

    #[test]
    fn test_edit_link_needs_flag_and_repo() {
        assert_eq!(theme(Some("a/b"), false).edit_link("x.md"), None);
        assert_eq!(theme(None, true).edit_link("x.md"), None);
    }

    #[test]
    fn test_sidebar_for_longest_prefix() {
        let mut config = ThemeConfig::default();
        config.sidebar_sections.insert(
            "/".into(),
            vec![SidebarGroup {
                title: "Home".into(),
                entries: vec![String::new()],
            }],
        );
        config.sidebar_sections.insert(
            "/guide/".into(),
            vec![SidebarGroup {
                title: "Guide".into(),
                entries: vec![String::new(), "setup".into()],
            }],
        );

        let (prefix, groups) = config.sidebar_for("/guide/setup").unwrap();
        assert_eq!(prefix, "/guide/");
        assert_eq!(groups[0].title, "Guide");

        let (prefix, _) = config.sidebar_for("/about").unwrap();
        assert_eq!(prefix, "/");

        assert!(ThemeConfig::default().sidebar_for("/guide/").is_none());
    }

    #[test]
    fn test_sidebar_group_links() {
        let group = SidebarGroup {
            title: "Guide".into(),
            entries: vec![String::new(), "setup".into(), "/faq/".into()],
        };
        assert_eq!(
            group.links("/guide/"),
            vec!["/guide/", "/guide/setup", "/faq/"]
        );
    }
}
