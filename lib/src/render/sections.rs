use indexmap::IndexMap;
use serde::Deserialize;

use crate::activity::{normalize, ListKind};
use crate::error::{Chainable, Result};
use crate::model::{Contact, Section, SectionKind, SkillGroups};
use crate::templating::{Fragment, Templates};

/// Renders every section in document order, one wrapper fragment each.
pub fn render_sections(
    templates: &Templates,
    sections: &IndexMap<String, Section>,
) -> Result<Vec<Fragment>> {
    sections.iter()
        .map(|(id, section)| render_section(templates, id, section))
        .collect()
}

/// Renders a single section wrapped in a `<section>` tagged with `id`.
///
/// A section of unknown type renders as an empty wrapper.
pub fn render_section(templates: &Templates, id: &str, section: &Section) -> Result<Fragment> {
    let inner = match section.kind() {
        SectionKind::Header => Some(make_header_section(templates, section)?),
        SectionKind::Text => {
            let title = section.title.as_deref();
            Some(templates.text_section(id, title, section.text.as_deref())?)
        }
        SectionKind::List => Some(make_list_section(templates, id, section)?),
        SectionKind::Skills => Some(make_skills_section(templates, id, section)?),
        SectionKind::Unknown(kind) => {
            log::warn!("section #{id} has unknown type {kind:?}: rendering it empty");
            None
        }
    };

    templates.section(id, inner)
}

pub fn make_contacts(templates: &Templates, contacts: &[Contact]) -> Result<Vec<Fragment>> {
    contacts.iter()
        .map(|contact| templates.contact(contact))
        .collect()
}

fn make_header_section(templates: &Templates, section: &Section) -> Result<Fragment> {
    let contacts = make_contacts(templates, &section.contacts)?;
    templates.header_section(
        section.name.as_deref(),
        section.nickname.as_deref(),
        contacts.into_iter().collect(),
    )
}

fn make_list_section(templates: &Templates, id: &str, section: &Section) -> Result<Fragment> {
    let tag = section.list_type.as_deref().unwrap_or("");
    let content = match ListKind::from_tag(tag) {
        Some(kind) => normalize(templates, kind, &section.content)
            .chain_with(|| error! {
                "failed to render list section",
                "section" => id,
                "list type" => kind,
            })?
            .into_iter()
            .collect(),
        None => {
            log::warn!("section #{id} has unknown list type {tag:?}: rendering it empty");
            Fragment::empty()
        }
    };

    templates.list_section(id, section.title.as_deref(), content)
}

fn make_skills_section(templates: &Templates, id: &str, section: &Section) -> Result<Fragment> {
    let groups = SkillGroups::deserialize(&section.content)
        .chain_with(|| error!("failed to read skill groups", "section" => id))?;

    let content = make_skills(templates, &groups)?;
    templates.skills_section(id, section.title.as_deref(), content.into_iter().collect())
}

/// One skill group fragment per group, in source order.
pub fn make_skills(templates: &Templates, groups: &SkillGroups) -> Result<Vec<Fragment>> {
    groups.iter()
        .map(|(name, skills)| {
            let chips = skills.iter()
                .map(|skill| templates.skill(skill))
                .collect::<Result<Fragment>>()?;

            templates.skill_group(name, chips)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Document;

    fn templates() -> &'static Templates {
        Templates::default_set()
    }

    fn sections(value: serde_json::Value) -> IndexMap<String, Section> {
        serde_json::from_value(value).unwrap()
    }

    fn section_ids(html: &str) -> Vec<&str> {
        html.match_indices(r#"<section id=""#)
            .filter_map(|(i, m)| {
                let rest = &html[i + m.len()..];
                rest.find('"').map(|end| &rest[..end])
            })
            .collect()
    }

    #[test]
    fn section_ids_follow_document_order() {
        let sections = sections(json!({
            "header": {"type": "header", "name": "Ada", "contacts": []},
            "summary": {"type": "text", "title": "Summary", "text": "Hello."},
            "experience": {"type": "list", "title": "Work", "listType": "work", "content": []},
            "skills": {"type": "skills", "title": "Skills", "content": {}}
        }));

        let fragments = render_sections(templates(), &sections).unwrap();
        assert_eq!(fragments.len(), 4);

        let html: Fragment = fragments.into_iter().collect();
        assert_eq!(section_ids(&html), ["header", "summary", "experience", "skills"]);
    }

    #[test]
    fn header_section() {
        let section: Section = serde_json::from_value(json!({
            "type": "header", "name": "Ada", "nickname": "Countess",
            "contacts": [{"type": "Email", "contact": "ada@example.com", "href": "mailto:ada"}]
        })).unwrap();

        let html = render_section(templates(), "header", &section).unwrap();
        assert!(html.starts_with(r#"<section id="header"><span id="name">Ada</span>"#));
        assert!(html.contains(r#"<span id="nickname">Countess</span>"#));
        assert!(html.contains(r#"data-icon="email""#));
    }

    #[test]
    fn text_section() {
        let section: Section = serde_json::from_value(json!({
            "type": "text", "title": "About", "text": "I <3 Rust."
        })).unwrap();

        let html = render_section(templates(), "about", &section).unwrap();
        assert!(html.contains("<h2>About</h2>"));
        assert!(html.contains(r#"<p id="aboutText" class="text">I &lt;3 Rust.</p>"#));
    }

    #[test]
    fn list_section_renders_activities() {
        let section: Section = serde_json::from_value(json!({
            "type": "list", "title": "Projects", "listType": "projects",
            "content": [
                {"name": "vitae", "features": ["renders", "composes"]},
                {"name": "quill", "period": ["2024", ""]}
            ]
        })).unwrap();

        let html = render_section(templates(), "projects", &section).unwrap();
        assert!(html.contains(r#"<div id="projectsList">"#));
        assert_eq!(html.matches(r#"class="activity tworows""#).count(), 2);
        assert_eq!(html.matches(r#"class="descriptionItem""#).count(), 2);
        assert_eq!(html.matches(r#"class="date""#).count(), 2);
        assert!(html.find("vitae") < html.find("quill"));
    }

    #[test]
    fn loosely_typed_sections_still_render() {
        let section: Section = serde_json::from_value(json!({
            "type": "text", "title": "Answer", "text": 42
        })).unwrap();

        let html = render_section(templates(), "answer", &section).unwrap();
        assert!(html.contains(r#"<p id="answerText" class="text">42</p>"#));

        let section: Section = serde_json::from_value(json!({
            "type": "list", "title": "Projects", "listType": "projects",
            "content": [{"name": "X", "period": ""}]
        })).unwrap();

        let html = render_section(templates(), "projects", &section).unwrap();
        assert!(!html.contains(r#"class="date""#));
        assert!(html.contains(r#"data-has-period="0""#));
    }

    #[test]
    fn list_section_missing_period_names_the_section() {
        let section: Section = serde_json::from_value(json!({
            "type": "list", "title": "Work", "listType": "work",
            "content": [{"company": "Acme"}]
        })).unwrap();

        let error = render_section(templates(), "experience", &section).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("failed to render list section"));
        assert!(message.contains("section: experience"));
        assert!(message.contains("list type: work"));
        assert!(message.contains("missing field `period`"));
    }

    #[test]
    fn unknown_types_render_empty() {
        let section: Section = serde_json::from_value(json!({"type": "foo", "title": "?"})).unwrap();
        let html = render_section(templates(), "mystery", &section).unwrap();
        assert_eq!(html.as_str(), r#"<section id="mystery"></section>"#);

        let section: Section = serde_json::from_value(json!({
            "type": "list", "title": "Hobbies", "listType": "hobbies", "content": [1, 2]
        })).unwrap();

        let html = render_section(templates(), "hobbies", &section).unwrap();
        assert!(html.contains(r#"<div id="hobbiesList"></div>"#));
    }

    #[test]
    fn skill_groups_keep_source_order() {
        let doc: Document = serde_json::from_str(r#"{
            "sections": {
                "skills": {"type": "skills", "title": "Skills", "content": {
                    "Languages": [{"name": "Rust", "level": 5}, {"name": "Python", "level": 4}],
                    "Tools": [{"name": "git", "level": 4}],
                    "Databases": []
                }}
            }
        }"#).unwrap();

        let section = &doc.sections.as_ref().unwrap()["skills"];
        let html = render_section(templates(), "skills", section).unwrap();
        assert!(html.contains(r#"<div id="skillsList" class="tiered">"#));

        let names = ["Languages:", "Tools:", "Databases:"];
        let positions = names.iter().map(|n| html.find(n).unwrap()).collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(r#"<span class="skill" data-level="5">Rust</span>"#));
    }
}
