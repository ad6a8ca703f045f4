//! Hand-off between the resolved config and the site builder.
//!
//! The builder only ever sees `&SiteConfig`: it is resolved once, before any
//! build step, and cannot change while the build runs.
//!
//! ```text
//! RawSiteConfig ──resolve()──▶ SiteConfig ──&──▶ SiteBuilder::build()
//!                    │
//!                    └── Err(ConfigError): builder is never called
//! ```

use crate::config::{RawSiteConfig, SiteConfig, resolve};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;

/// A consumer of resolved configuration (renderer, indexer, manifest writer).
pub trait SiteBuilder {
    fn build(&mut self, config: &SiteConfig) -> Result<()>;
}

/// Resolve `raw`, then run `builder` exactly once on the result.
///
/// Validation errors are returned before the builder is invoked.
pub fn build_site<B: SiteBuilder + ?Sized>(raw: &RawSiteConfig, builder: &mut B) -> Result<()> {
    let config = resolve(raw).context("invalid site configuration")?;
    builder.build(&config)
}

// ============================================================================
// Manifest
// ============================================================================

/// Everything a renderer needs, with links already resolved against the base.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest<'a> {
    pub config: &'a SiteConfig,
    /// Rendered `<head>` markup, in config order.
    pub head: Vec<String>,
    pub nav: Vec<ManifestLink<'a>>,
    /// Sidebar prefix → groups with page links.
    pub sidebar: IndexMap<&'a str, Vec<ManifestGroup<'a>>>,
    pub repo: Option<ManifestLink<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ManifestLink<'a> {
    pub label: &'a str,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct ManifestGroup<'a> {
    pub title: &'a str,
    pub links: Vec<String>,
}

impl<'a> Manifest<'a> {
    pub fn new(config: &'a SiteConfig) -> Result<Self> {
        let urls = config.urls();
        let theme = &config.theme_config;

        let head = config
            .head_tags
            .iter()
            .map(|tag| tag.render())
            .collect::<std::io::Result<Vec<_>>>()
            .context("failed to render head tags")?;

        let nav = theme
            .nav_items
            .iter()
            .map(|item| ManifestLink {
                label: &item.label,
                href: urls.with_base(&item.target_path),
            })
            .collect();

        let sidebar = theme
            .sidebar_sections
            .iter()
            .map(|(prefix, groups)| {
                let groups = groups
                    .iter()
                    .map(|group| ManifestGroup {
                        title: &group.title,
                        links: group
                            .links(prefix)
                            .iter()
                            .map(|link| urls.with_base(link))
                            .collect(),
                    })
                    .collect();
                (prefix.as_str(), groups)
            })
            .collect();

        let repo = match (theme.repo_label(), theme.repo_link()) {
            (Some(label), Some(href)) => Some(ManifestLink { label, href }),
            _ => None,
        };

        Ok(Self {
            config,
            head,
            nav,
            sidebar,
            repo,
        })
    }
}

/// Builder that writes the [`Manifest`] as pretty-printed JSON.
pub struct ManifestWriter<W: Write> {
    out: W,
}

impl<W: Write> ManifestWriter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SiteBuilder for ManifestWriter<W> {
    fn build(&mut self, config: &SiteConfig) -> Result<()> {
        let manifest = Manifest::new(config)?;
        serde_json::to_writer_pretty(&mut self.out, &manifest)
            .context("failed to serialize site manifest")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    /// Records every config it is handed.
    #[derive(Default)]
    struct RecordingBuilder {
        seen: Vec<SiteConfig>,
    }

    impl SiteBuilder for RecordingBuilder {
        fn build(&mut self, config: &SiteConfig) -> Result<()> {
            self.seen.push(config.clone());
            Ok(())
        }
    }

    fn raw(content: &str) -> RawSiteConfig {
        RawSiteConfig::from_toml_str(content).unwrap()
    }

    #[test]
    fn test_builder_runs_once_with_resolved_config() {
        let mut builder = RecordingBuilder::default();
        build_site(&raw("title = \"Notes\""), &mut builder).unwrap();

        assert_eq!(builder.seen.len(), 1);
        assert_eq!(builder.seen[0].title, "Notes");
        assert_eq!(builder.seen[0].base_path, "/");
    }

    #[test]
    fn test_builder_not_called_on_invalid_config() {
        let mut builder = RecordingBuilder::default();
        let err = build_site(&raw("base_path = \"docs\""), &mut builder).unwrap_err();

        assert!(builder.seen.is_empty());
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingRequiredField("title"))
        ));
    }

    #[test]
    fn test_manifest_links_apply_base() {
        let config = SiteConfig::from_toml_str(
            r#"
            title = "Notes"
            base_path = "/docs/"
            head = [["link", { rel = "icon", href = "/logo.svg" }]]
            [theme]
            repo = "alice/notes"
            nav = [["Intro", "/a/"], ["GitHub", "https://github.com/alice"]]
            [[theme.sidebar."/a/"]]
            title = "Group"
            entries = ["", "setup"]
        "#,
        )
        .unwrap();

        let manifest = Manifest::new(&config).unwrap();
        assert_eq!(manifest.head, vec![r#"<link rel="icon" href="/logo.svg"/>"#]);
        assert_eq!(manifest.nav[0].href, "/docs/a/");
        assert_eq!(manifest.nav[1].href, "https://github.com/alice");
        assert_eq!(manifest.sidebar["/a/"][0].links, vec!["/docs/a/", "/docs/a/setup"]);

        let repo = manifest.repo.unwrap();
        assert_eq!(repo.label, "GitHub");
        assert_eq!(repo.href, "https://github.com/alice/notes");
    }

    #[test]
    fn test_manifest_writer_emits_json() {
        let mut writer = ManifestWriter::new(Vec::new());
        build_site(
            &raw(
                r#"
                title = "Notes"
                [markdown]
                toc_levels = [2, 3]
                [theme]
                nav = [["Intro", "/a/"]]
            "#,
            ),
            &mut writer,
        )
        .unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["config"]["title"], "Notes");
        assert_eq!(json["config"]["basePath"], "/");
        assert_eq!(
            json["config"]["markdownOptions"]["tocLevels"],
            serde_json::json!([2, 3])
        );
        assert_eq!(json["config"]["themeConfig"]["sidebarDepth"], 1);
        assert_eq!(json["nav"][0]["href"], "/a/");
        assert!(json["repo"].is_null());
    }
}
