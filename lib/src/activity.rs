//! Normalization of CV records into timed activities.
//!
//! Jobs, projects and education entries each name their fields differently.
//! They are mapped field-for-field onto [`TimedActivity`] and then rendered by
//! a single activity template:
//!
//! | kind      | title         | subtitle   | period             | location   | description   |
//! |-----------|---------------|------------|--------------------|------------|---------------|
//! | work      | `company`     | `jobTitle` | `period` required  | `location` | `keyPoints`   |
//! | projects  | `name`        | `subtitle` | `period` optional  |            | `features`    |
//! | education | `institution` | `course`   | `period` required  | `location` | `description` |

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::model::{Description, Education, Job, Project, TimedActivity};
use crate::templating::{Fragment, Templates};

/// The kinds of record a list section may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Work,
    Projects,
    Education,
}

impl ListKind {
    pub fn from_tag(tag: &str) -> Option<ListKind> {
        match tag {
            "work" => Some(ListKind::Work),
            "projects" => Some(ListKind::Projects),
            "education" => Some(ListKind::Education),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Work => "work",
            ListKind::Projects => "projects",
            ListKind::Education => "education",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl<'a> From<&'a Job> for TimedActivity<'a> {
    fn from(job: &'a Job) -> Self {
        TimedActivity {
            title: job.company.as_deref(),
            subtitle: job.job_title.as_deref(),
            period_from: job.period.from.clone(),
            period_to: job.period.to.clone(),
            location: job.location.as_deref(),
            link: job.link.as_deref(),
            link_text: job.link_text.as_deref(),
            description: job.key_points.as_ref(),
        }
    }
}

impl<'a> From<&'a Project> for TimedActivity<'a> {
    fn from(project: &'a Project) -> Self {
        let period = project.period.clone().unwrap_or_default();
        TimedActivity {
            title: project.name.as_deref(),
            subtitle: project.subtitle.as_deref(),
            period_from: period.from,
            period_to: period.to,
            location: None,
            link: project.link.as_deref(),
            link_text: project.link_text.as_deref(),
            description: project.features.as_ref(),
        }
    }
}

impl<'a> From<&'a Education> for TimedActivity<'a> {
    fn from(edu: &'a Education) -> Self {
        TimedActivity {
            title: edu.institution.as_deref(),
            subtitle: edu.course.as_deref(),
            period_from: edu.period.from.clone(),
            period_to: edu.period.to.clone(),
            location: edu.location.as_deref(),
            link: edu.link.as_deref(),
            link_text: edu.link_text.as_deref(),
            description: edu.description.as_ref(),
        }
    }
}

/// Decodes `content` as records of `kind` and renders one activity fragment
/// per record, in order.
///
/// Fails if `content` isn't a sequence of such records, including when a
/// record lacks a required field.
pub fn normalize(templates: &Templates, kind: ListKind, content: &Value) -> Result<Vec<Fragment>> {
    match kind {
        ListKind::Work => make_activities(templates, &Vec::<Job>::deserialize(content)?),
        ListKind::Projects => make_activities(templates, &Vec::<Project>::deserialize(content)?),
        ListKind::Education => make_activities(templates, &Vec::<Education>::deserialize(content)?),
    }
}

/// Renders each record in `records` as a timed activity.
pub fn make_activities<'a, R>(templates: &Templates, records: &'a [R]) -> Result<Vec<Fragment>>
    where &'a R: Into<TimedActivity<'a>>
{
    records.iter()
        .map(|record| make_timed_activity(templates, &record.into()))
        .collect()
}

pub fn make_timed_activity(templates: &Templates, activity: &TimedActivity<'_>) -> Result<Fragment> {
    let description = activity.description
        .map(|description| make_description(templates, description))
        .transpose()?;

    templates.timed_activity(activity, description)
}

/// A list of items for a sequence, inline text for a single string.
pub fn make_description(templates: &Templates, description: &Description) -> Result<Fragment> {
    match description {
        Description::Items(items) => {
            let items = items.iter()
                .map(|item| templates.description_list_item(item))
                .collect::<Result<Fragment>>()?;

            templates.description_list(items)
        }
        Description::Text(text) => templates.description_text(text),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Endpoint;

    fn templates() -> &'static Templates {
        Templates::default_set()
    }

    #[test]
    fn jobs_map_onto_activities() {
        let job: Job = serde_json::from_value(json!({
            "company": "Acme", "jobTitle": "Engineer", "period": ["2019", ""],
            "location": "Turin", "link": "https://acme.test", "linkText": "acme",
            "keyPoints": ["a", "b"]
        })).unwrap();

        let activity = TimedActivity::from(&job);
        assert_eq!(activity.title, Some("Acme"));
        assert_eq!(activity.subtitle, Some("Engineer"));
        assert_eq!(activity.period_from, Endpoint::Date("2019".into()));
        assert_eq!(activity.period_to, Endpoint::Blank("".into()));
        assert_eq!(activity.location, Some("Turin"));
        assert_eq!(activity.link_text, Some("acme"));
        assert_eq!(activity.description, job.key_points.as_ref());
    }

    #[test]
    fn projects_without_period_have_absent_endpoints() {
        let project: Project = serde_json::from_value(json!({
            "name": "vitae", "subtitle": "CV renderer", "features": "Renders CVs."
        })).unwrap();

        let activity = TimedActivity::from(&project);
        assert_eq!(activity.title, Some("vitae"));
        assert!(activity.period_from.is_absent() && activity.period_to.is_absent());
        assert_eq!(activity.location, None);
    }

    #[test]
    fn education_maps_course_and_institution() {
        let edu: Education = serde_json::from_value(json!({
            "institution": "Uni", "course": "CS", "period": ["2010", "2014"]
        })).unwrap();

        let activity = TimedActivity::from(&edu);
        assert_eq!((activity.title, activity.subtitle), (Some("Uni"), Some("CS")));
        assert_eq!(activity.description, None);
    }

    #[test]
    fn description_list_items_match_in_order() {
        let points = Description::Items(vec!["first".into(), "second".into(), "third".into()]);
        let html = make_description(templates(), &points).unwrap();
        assert_eq!(html.as_str(), concat!(
            r#"<ul class="description">"#,
            r#"<li class="descriptionItem">first</li>"#,
            r#"<li class="descriptionItem">second</li>"#,
            r#"<li class="descriptionItem">third</li>"#,
            "</ul>",
        ));

        let text = make_description(templates(), &Description::Text("Just text.".into())).unwrap();
        assert_eq!(text.as_str(), r#"<span class="description">Just text.</span>"#);
    }

    #[test]
    fn absent_description_renders_nothing() {
        let activity = TimedActivity { title: Some("x"), ..TimedActivity::default() };
        let html = make_timed_activity(templates(), &activity).unwrap();
        assert!(!html.contains("description"));
    }

    #[test]
    fn normalize_preserves_order_and_reports_missing_fields() {
        let content = json!([
            {"company": "First", "period": ["2018", "2019"]},
            {"company": "Second", "period": ["2019", ""]}
        ]);

        let fragments = normalize(templates(), ListKind::Work, &content).unwrap();
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].contains("First") && fragments[1].contains("Second"));

        let content = json!([{"company": "No Period"}]);
        let error = normalize(templates(), ListKind::Work, &content).unwrap_err();
        assert!(error.to_string().contains("missing field `period`"));

        let content = json!([{"name": "No Period"}]);
        assert_eq!(normalize(templates(), ListKind::Projects, &content).unwrap().len(), 1);
    }

    #[test]
    fn list_kind_tags() {
        assert_eq!(ListKind::from_tag("work"), Some(ListKind::Work));
        assert_eq!(ListKind::from_tag("projects"), Some(ListKind::Projects));
        assert_eq!(ListKind::from_tag("education"), Some(ListKind::Education));
        assert_eq!(ListKind::from_tag("hobbies"), None);
    }
}
