//! Custom `<head>` tags (favicon, meta, stylesheets).

use indexmap::IndexMap;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, Event},
};
use serde::Serialize;
use std::io;

/// Elements written as `<tag .../>` with no closing tag.
const VOID_ELEMENTS: &[&str] = &["base", "link", "meta"];

/// One tag injected into every rendered page's `<head>`, in config order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadTag {
    pub tag_name: String,
    pub attributes: IndexMap<String, String>,
}

impl HeadTag {
    pub fn new(tag_name: impl Into<String>, attributes: IndexMap<String, String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes,
        }
    }

    /// Render as markup, attributes in declaration order and escaped.
    ///
    /// # Examples
    /// ```ignore
    /// // ("link", { rel: "icon", href: "/favicon.svg" })
    /// tag.render()? // → <link rel="icon" href="/favicon.svg"/>
    /// ```
    pub fn render(&self) -> io::Result<String> {
        let mut writer = Writer::new(Vec::new());

        let mut elem = BytesStart::new(self.tag_name.as_str());
        for (name, value) in &self.attributes {
            elem.push_attribute((name.as_str(), value.as_str()));
        }

        if VOID_ELEMENTS.contains(&self.tag_name.as_str()) {
            writer.write_event(Event::Empty(elem))?;
        } else {
            writer.write_event(Event::Start(elem))?;
            writer.write_event(Event::End(BytesEnd::new(self.tag_name.as_str())))?;
        }

        String::from_utf8(writer.into_inner())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}
