//! docsite - configuration layer for documentation sites.
//!
//! Reads one config file, validates it, fills in defaults, and hands the
//! resulting read-only [`SiteConfig`] to a [`SiteBuilder`].

pub mod builder;
pub mod config;
pub mod logger;

pub use builder::{Manifest, ManifestWriter, SiteBuilder, build_site};
pub use config::{ConfigError, ConfigWarning, RawSiteConfig, SiteConfig, load, resolve};
