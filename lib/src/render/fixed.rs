use crate::activity::make_activities;
use crate::error::{Chainable, Result};
use crate::model::Document;
use crate::mount::{anchor, Mount};
use crate::render::{make_contacts, make_skills};
use crate::templating::{Fragment, Templates};

/// Renders each named field of `doc` to its own mount point.
///
/// Every anchor in [`anchor::FIXED`] is mounted, with empty content when the
/// corresponding field is missing.
pub fn render_fixed<M>(templates: &Templates, doc: &Document, mount: &mut M) -> Result<()>
    where M: Mount + ?Sized
{
    let text = |text: Option<&str>| -> Result<Vec<Fragment>> {
        text.map(|text| templates.text(text)).into_iter().collect()
    };

    mount.mount(anchor::NAME, text(doc.name.as_deref())?)?;
    mount.mount(anchor::NICKNAME, text(doc.nickname.as_deref())?)?;
    mount.mount(anchor::CONTACTS, make_contacts(templates, &doc.contacts)?)?;

    let work = doc.work.as_deref().unwrap_or_default();
    mount.mount(anchor::WORK, make_activities(templates, work)
        .chain_with(|| error!("failed to render work entries"))?)?;

    let projects = doc.projects.as_deref().unwrap_or_default();
    mount.mount(anchor::PROJECTS, make_activities(templates, projects)
        .chain_with(|| error!("failed to render projects"))?)?;

    let education = doc.education.as_deref().unwrap_or_default();
    mount.mount(anchor::EDUCATION, make_activities(templates, education)
        .chain_with(|| error!("failed to render education entries"))?)?;

    let skills = match &doc.skills {
        Some(groups) => make_skills(templates, groups)?,
        None => vec![],
    };

    mount.mount(anchor::SKILLS, skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::Page;

    const DOC: &str = r#"{
        "name": "Ada <L>",
        "nickname": "Countess",
        "contacts": [
            {"type": "Email", "contact": "ada@example.com", "href": "mailto:ada"},
            {"type": "GitHub", "contact": "ada", "icon": "gh", "onlyicon": true}
        ],
        "work": [
            {"company": "Analytical Engines", "jobTitle": "Programmer",
             "period": ["1842", "1843"], "keyPoints": ["Note G"]}
        ],
        "projects": [{"name": "Bernoulli numbers"}],
        "skills": {"Mathematics": [{"name": "Analysis", "level": 5}]}
    }"#;

    #[test]
    fn every_field_gets_its_own_mount_point() {
        let doc: Document = serde_json::from_str(DOC).unwrap();
        let mut page = Page::new();
        render_fixed(Templates::default_set(), &doc, &mut page).unwrap();

        assert_eq!(page.anchors().collect::<Vec<_>>(), anchor::FIXED);
        let get = |anchor: &str| page.get(anchor).unwrap().as_str().to_string();

        assert_eq!(get(anchor::NAME), "Ada &lt;L&gt;");
        assert_eq!(get(anchor::NICKNAME), "Countess");
        assert_eq!(get(anchor::CONTACTS).matches(r#"class="contact""#).count(), 2);
        assert!(get(anchor::CONTACTS).contains(r#"data-icon="gh""#));
        assert!(get(anchor::CONTACTS).contains(r#"data-onlyicon="1""#));
        assert!(get(anchor::WORK).contains("Analytical Engines"));
        assert!(get(anchor::PROJECTS).contains(r#"data-has-period="0""#));
        assert_eq!(get(anchor::EDUCATION), "");
        assert!(get(anchor::SKILLS).contains("Mathematics:"));
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let doc: Document = serde_json::from_str(DOC).unwrap();
        let mut once = Page::new();
        render_fixed(Templates::default_set(), &doc, &mut once).unwrap();

        let mut twice = Page::new();
        render_fixed(Templates::default_set(), &doc, &mut twice).unwrap();
        render_fixed(Templates::default_set(), &doc, &mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn work_without_period_is_rejected_when_loading() {
        let error = serde_json::from_str::<Document>(r#"{
            "work": [{"company": "Acme"}]
        }"#).unwrap_err();

        assert!(error.to_string().contains("missing field `period`"));
    }
}
