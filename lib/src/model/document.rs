use indexmap::IndexMap;
use serde::Deserialize;

use crate::model::{de, Contact, Education, Job, Project, Section, SkillGroups};

/// A whole CV.
///
/// A document is laid out either as an ordered `sections` mapping or as the
/// fixed set of named fields `work`, `projects`, `education` and `skills`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "de::scalar")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::scalar")]
    pub nickname: Option<String>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    pub sections: Option<IndexMap<String, Section>>,
    pub work: Option<Vec<Job>>,
    pub projects: Option<Vec<Project>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<SkillGroups>,
    /// The page title.
    #[serde(default, deserialize_with = "de::scalar")]
    pub title: Option<String>,
    /// Where the CV's source lives, linked from the page when set.
    #[serde(default, deserialize_with = "de::scalar")]
    pub cv_repo_url: Option<String>,
}

impl Document {
    /// The owner's name, looking into a header section if the document is
    /// sectioned.
    pub fn owner(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| {
            self.sections.as_ref()?
                .values()
                .find_map(|section| section.name.as_deref())
        })
    }
}
