use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::{de, Period};
use crate::util::scalar_text;

/// A way to reach the CV's owner, shown as a pill in the header.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Contact {
    #[serde(rename = "type", default, deserialize_with = "de::text")]
    pub kind: String,
    #[serde(default, deserialize_with = "de::text")]
    pub contact: String,
    #[serde(default, deserialize_with = "de::scalar")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub onlyicon: bool,
}

impl Contact {
    /// The explicit `icon` if nonempty, else the lowercased contact type.
    pub fn icon_key(&self) -> String {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => icon.to_string(),
            _ => self.kind.to_lowercase(),
        }
    }
}

/// Either a bulleted list of points or a single run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Items(Vec<String>),
    Text(String),
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::Array(items) => Description::Items(items.iter().map(scalar_text).collect()),
            other => Description::Text(scalar_text(&other)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, deserialize_with = "de::scalar")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub job_title: Option<String>,
    pub period: Period,
    #[serde(default, deserialize_with = "de::scalar")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub link_text: Option<String>,
    pub key_points: Option<Description>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "de::scalar")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "de::optional_period")]
    pub period: Option<Period>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub link_text: Option<String>,
    pub features: Option<Description>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "de::scalar")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub course: Option<String>,
    pub period: Period,
    #[serde(default, deserialize_with = "de::scalar")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub link_text: Option<String>,
    pub description: Option<Description>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "de::scalar")]
    pub level: Option<String>,
}

/// Skill group name to skills, in source order.
pub type SkillGroups = IndexMap<String, Vec<Skill>>;
