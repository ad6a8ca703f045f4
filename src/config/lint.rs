//! Non-fatal configuration warnings.
//!
//! Lints run on an already resolved [`SiteConfig`] and never reject it; the
//! caller decides whether to print them or treat them as errors.

use super::SiteConfig;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Sidebar prefix that neither equals `base_path` nor leads any nav target.
    UnreachableSidebar { prefix: String },

    /// Same slug listed twice in one sidebar group.
    DuplicateSidebarEntry {
        prefix: String,
        group: String,
        entry: String,
    },

    /// Edit links are on but there is no repository to link to.
    EditLinksWithoutRepo,

    /// `edit_link_text` is set while edit links are off, so it is never shown.
    EditLinkTextWithoutEditLinks,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreachableSidebar { prefix } => write!(
                f,
                "sidebar `{prefix}` is not reachable from any nav item"
            ),
            Self::DuplicateSidebarEntry {
                prefix,
                group,
                entry,
            } => write!(
                f,
                "sidebar `{prefix}` group \"{group}\" lists `{entry}` more than once"
            ),
            Self::EditLinksWithoutRepo => {
                write!(f, "edit links are enabled but no repository is set")
            }
            Self::EditLinkTextWithoutEditLinks => {
                write!(f, "edit link text is set but edit links are disabled")
            }
        }
    }
}

impl SiteConfig {
    /// Collect warnings, in config order.
    pub fn lint(&self) -> Vec<ConfigWarning> {
        let theme = &self.theme_config;
        let mut warnings = Vec::new();

        for (prefix, groups) in &theme.sidebar_sections {
            let reachable = *prefix == self.base_path
                || theme
                    .nav_items
                    .iter()
                    .any(|item| item.target_path.starts_with(prefix.as_str()));
            if !reachable {
                warnings.push(ConfigWarning::UnreachableSidebar {
                    prefix: prefix.clone(),
                });
            }

            for group in groups {
                let mut seen: Vec<&str> = Vec::with_capacity(group.entries.len());
                for entry in &group.entries {
                    if seen.contains(&entry.as_str()) {
                        warnings.push(ConfigWarning::DuplicateSidebarEntry {
                            prefix: prefix.clone(),
                            group: group.title.clone(),
                            entry: entry.clone(),
                        });
                    } else {
                        seen.push(entry);
                    }
                }
            }
        }

        if theme.edit_links_enabled && theme.repo_link().is_none() {
            warnings.push(ConfigWarning::EditLinksWithoutRepo);
        }
        if !theme.edit_links_enabled && !theme.edit_link_text.is_empty() {
            warnings.push(ConfigWarning::EditLinkTextWithoutEditLinks);
        }

        warnings
    }
}
