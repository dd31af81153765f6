use serde::Deserialize;
use serde_json::Value;

use crate::model::{de, Contact};

/// A top-level, independently titled block of a sectioned CV.
///
/// The payload is kept loose: which fields matter depends on `kind`, and list
/// or skills `content` is only decoded when the section is rendered.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "type", default, deserialize_with = "de::scalar")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub nickname: Option<String>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub list_type: Option<String>,
    #[serde(default)]
    pub content: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind<'a> {
    Header,
    Text,
    List,
    Skills,
    Unknown(&'a str),
}

impl<'a> SectionKind<'a> {
    pub fn from_tag(tag: &'a str) -> Self {
        match tag {
            "header" => SectionKind::Header,
            "text" => SectionKind::Text,
            "list" => SectionKind::List,
            "skills" => SectionKind::Skills,
            other => SectionKind::Unknown(other),
        }
    }
}

impl Section {
    pub fn kind(&self) -> SectionKind<'_> {
        SectionKind::from_tag(self.kind.as_deref().unwrap_or(""))
    }
}
