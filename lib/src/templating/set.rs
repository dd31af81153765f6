use serde::Serialize;

use crate::error::Result;
use crate::model::{Contact, Endpoint, Skill, TimedActivity};
use crate::templating::{Fragment, Templates};
use crate::util::{has_text, int_bool};

#[derive(Serialize)]
struct SectionContext<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    inner: Option<Fragment>,
}

#[derive(Serialize)]
struct HeaderContext<'a> {
    name: Option<&'a str>,
    nickname: Option<&'a str>,
    contacts: Fragment,
}

#[derive(Serialize)]
struct TitledContext<'a, T> {
    id: &'a str,
    title: Option<&'a str>,
    #[serde(flatten)]
    body: T,
}

#[derive(Serialize)]
struct ContactContext<'a> {
    kind: &'a str,
    contact: &'a str,
    href: Option<&'a str>,
    onlyicon: u8,
    icon: String,
}

#[derive(Serialize)]
struct ActivityContext<'a> {
    title: Option<&'a str>,
    subtitle: Option<&'a str>,
    location: Option<&'a str>,
    link: Option<&'a str>,
    link_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period_from: Option<Fragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period_to: Option<Fragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Fragment>,
    has_title: u8,
    has_link: u8,
    has_period: u8,
    has_subtitle: u8,
    has_location: u8,
}

/// One method per visual fragment. None of these validate their input: a
/// missing value renders as empty content.
impl Templates {
    /// The wrapper around every section, tagged with the section's `id`.
    pub fn section(&self, id: &str, inner: Option<Fragment>) -> Result<Fragment> {
        self.fragment("section.html", SectionContext { id, inner })
    }

    pub fn header_section(
        &self,
        name: Option<&str>,
        nickname: Option<&str>,
        contacts: Fragment,
    ) -> Result<Fragment> {
        self.fragment("header_section.html", HeaderContext { name, nickname, contacts })
    }

    pub fn text_section(&self, id: &str, title: Option<&str>, text: Option<&str>) -> Result<Fragment> {
        #[derive(Serialize)]
        struct Body<'a> { text: Option<&'a str> }

        self.fragment("text_section.html", TitledContext { id, title, body: Body { text } })
    }

    pub fn list_section(&self, id: &str, title: Option<&str>, content: Fragment) -> Result<Fragment> {
        self.fragment("list_section.html", TitledContext { id, title, body: Content { content } })
    }

    pub fn skills_section(&self, id: &str, title: Option<&str>, content: Fragment) -> Result<Fragment> {
        self.fragment("skills_section.html", TitledContext { id, title, body: Content { content } })
    }

    pub fn contact(&self, contact: &Contact) -> Result<Fragment> {
        self.fragment("contact.html", ContactContext {
            kind: &contact.kind,
            contact: &contact.contact,
            href: contact.href.as_deref(),
            onlyicon: int_bool(contact.onlyicon),
            icon: contact.icon_key(),
        })
    }

    /// A date span showing `date`, flagged `data-empty="1"` when `empty`.
    pub fn activity_date(&self, date: &str, empty: bool) -> Result<Fragment> {
        #[derive(Serialize)]
        struct Date<'a> { date: &'a str, empty: u8 }

        self.fragment("activity_date.html", Date { date, empty: int_bool(empty) })
    }

    pub fn description_list_item(&self, text: &str) -> Result<Fragment> {
        self.fragment("description_item.html", Text { text })
    }

    pub fn description_list(&self, items: Fragment) -> Result<Fragment> {
        #[derive(Serialize)]
        struct Items { items: Fragment }

        self.fragment("description_list.html", Items { items })
    }

    pub fn description_text(&self, text: &str) -> Result<Fragment> {
        self.fragment("description_text.html", Text { text })
    }

    /// Renders an activity block. Each period endpoint gets a date span unless
    /// it is absent; `description` is the already-rendered description.
    pub fn timed_activity(
        &self,
        activity: &TimedActivity<'_>,
        description: Option<Fragment>,
    ) -> Result<Fragment> {
        let date = |endpoint: &Endpoint| match endpoint {
            Endpoint::Absent => Ok(None),
            Endpoint::Blank(text) => self.activity_date(text, true).map(Some),
            Endpoint::Date(date) => self.activity_date(date, false).map(Some),
        };

        self.fragment("timed_activity.html", ActivityContext {
            title: activity.title,
            subtitle: activity.subtitle,
            location: activity.location,
            link: activity.link,
            link_text: activity.link_text.filter(|t| !t.is_empty()).or(activity.link),
            period_from: date(&activity.period_from)?,
            period_to: date(&activity.period_to)?,
            description,
            has_title: has_text(activity.title),
            has_link: has_text(activity.link),
            has_period: int_bool(activity.has_period()),
            has_subtitle: has_text(activity.subtitle),
            has_location: has_text(activity.location),
        })
    }

    pub fn skill(&self, skill: &Skill) -> Result<Fragment> {
        #[derive(Serialize)]
        struct SkillContext<'a> { name: &'a str, level: Option<&'a str> }

        self.fragment("skill.html", SkillContext {
            name: &skill.name,
            level: skill.level.as_deref(),
        })
    }

    pub fn skill_group(&self, name: &str, skills: Fragment) -> Result<Fragment> {
        #[derive(Serialize)]
        struct Group<'a> { name: &'a str, skills: Fragment }

        self.fragment("skill_group.html", Group { name, skills })
    }

    /// Plain, escaped text.
    pub fn text(&self, text: &str) -> Result<Fragment> {
        self.fragment("text.html", Text { text })
    }
}

#[derive(Serialize)]
struct Text<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content {
    content: Fragment,
}
