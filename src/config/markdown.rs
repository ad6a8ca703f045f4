//! `[markdown]` section configuration.

use super::{
    ConfigError, defaults,
    raw::{RawMarkdownConfig, RawTocLevel},
};
use educe::Educe;
use serde::Serialize;

const MIN_HEADING_LEVEL: i64 = 1;
const MAX_HEADING_LEVEL: i64 = 6;

/// `[markdown]` section - options passed to the markdown renderer.
///
/// # Example
/// ```toml
/// [markdown]
/// toc_levels = [2, 3]   # only h2/h3 in the generated table of contents
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownConfig {
    /// Heading depths included in auto-generated tables of contents.
    /// Non-empty, each in `1..=6`, first-seen order, no repeats.
    #[educe(Default = defaults::markdown::toc_levels())]
    pub toc_levels: Vec<u8>,
}

impl MarkdownConfig {
    pub(super) fn resolve(raw: &RawMarkdownConfig) -> Result<Self, ConfigError> {
        let toc_levels = match raw.levels()? {
            Some(levels) => resolve_toc_levels(levels)?,
            None => defaults::markdown::toc_levels(),
        };
        Ok(Self { toc_levels })
    }

    /// Whether headings of `level` go into the table of contents.
    pub fn includes_level(&self, level: u8) -> bool {
        self.toc_levels.contains(&level)
    }
}

fn resolve_toc_levels(levels: &[RawTocLevel]) -> Result<Vec<u8>, ConfigError> {
    if levels.is_empty() {
        return Err(ConfigError::OutOfRange("tocLevels"));
    }

    let mut resolved: Vec<u8> = Vec::with_capacity(levels.len());
    for level in levels {
        let level = match *level {
            RawTocLevel::Int(level) if (MIN_HEADING_LEVEL..=MAX_HEADING_LEVEL).contains(&level) => {
                level
            }
            _ => return Err(ConfigError::OutOfRange("tocLevels")),
        };
        // In range, so the cast is lossless
        let level = level as u8;
        if !resolved.contains(&level) {
            resolved.push(level);
        }
    }
    Ok(resolved)
}
