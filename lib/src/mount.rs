use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Chainable, Result};
use crate::model::Document;
use crate::render::Layout;
use crate::templating::{Fragment, Templates};

/// Anchor names of every mount point.
pub mod anchor {
    /// Where the sectioned layout mounts all of its sections.
    pub const CV: &str = "cv";

    pub const NAME: &str = "name";
    pub const NICKNAME: &str = "nickname";
    pub const CONTACTS: &str = "contacts";
    pub const WORK: &str = "work";
    pub const PROJECTS: &str = "projects";
    pub const EDUCATION: &str = "education";
    pub const SKILLS: &str = "skills";

    pub const FIXED: &[&str] = &[NAME, NICKNAME, CONTACTS, WORK, PROJECTS, EDUCATION, SKILLS];
}

/// A place rendered fragments are attached to.
///
/// Mounting at an anchor replaces whatever was mounted there before, so
/// mounting the same nodes twice leaves the same state as mounting them once.
pub trait Mount {
    fn mount(&mut self, anchor: &str, nodes: Vec<Fragment>) -> Result<()>;
}

impl<M: Mount + ?Sized> Mount for &mut M {
    fn mount(&mut self, anchor: &str, nodes: Vec<Fragment>) -> Result<()> {
        (**self).mount(anchor, nodes)
    }
}

/// An in-memory page: the content of each mount point by anchor name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    mounts: IndexMap<String, Fragment>,
}

/// Page-level metadata for the document shell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub stylesheets: Vec<String>,
    pub repo_url: Option<String>,
    pub layout: Layout,
}

impl PageMeta {
    pub fn for_document(doc: &Document, layout: Layout) -> Self {
        let title = doc.title.as_deref()
            .or_else(|| doc.owner())
            .unwrap_or("Curriculum Vitae");

        PageMeta {
            title: title.to_string(),
            stylesheets: vec![],
            repo_url: doc.cv_repo_url.clone(),
            layout,
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    pub fn get(&self, anchor: &str) -> Option<&Fragment> {
        self.mounts.get(anchor)
    }

    /// Anchors in the order they were first mounted.
    pub fn anchors(&self) -> impl Iterator<Item = &str> + '_ {
        self.mounts.keys().map(|k| k.as_str())
    }

    /// Renders the complete HTML document with every mount point filled.
    pub fn html(&self, templates: &Templates, meta: &PageMeta) -> Result<String> {
        #[derive(Serialize)]
        struct PageContext<'a> {
            #[serde(flatten)]
            meta: &'a PageMeta,
            mounts: &'a IndexMap<String, Fragment>,
        }

        let page = templates.fragment("page.html", PageContext { meta, mounts: &self.mounts })
            .chain_with(|| error!("failed to render page", "title" => &meta.title))?;

        Ok(page.as_str().to_string())
    }
}

impl Mount for Page {
    fn mount(&mut self, anchor: &str, nodes: Vec<Fragment>) -> Result<()> {
        log::debug!("mounting {} node(s) at #{anchor}", nodes.len());
        self.mounts.insert(anchor.to_string(), nodes.into_iter().collect());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(markup: &str) -> Fragment {
        Fragment::from(markup.to_string())
    }

    #[test]
    fn mounting_replaces_previous_content() {
        let mut page = Page::new();
        page.mount("cv", vec![node("<p>a</p>"), node("<p>b</p>")]).unwrap();
        page.mount("cv", vec![node("<p>c</p>")]).unwrap();
        assert_eq!(page.get("cv").map(|f| f.as_str()), Some("<p>c</p>"));
        assert_eq!(page.anchors().collect::<Vec<_>>(), ["cv"]);
    }

    #[test]
    fn page_shell_for_sections() {
        let mut page = Page::new();
        page.mount(anchor::CV, vec![node(r#"<section id="about"></section>"#)]).unwrap();

        let meta = PageMeta {
            title: "Ada <Lovelace>".into(),
            stylesheets: vec!["cv.css".into()],
            repo_url: Some("https://example.com/cv".into()),
            layout: Layout::Sections,
        };

        let html = page.html(Templates::default_set(), &meta).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada &lt;Lovelace&gt;</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="cv.css">"#));
        assert!(html.contains(r#"<div id="cv"><section id="about"></section></div>"#));
        assert!(html.contains(r#"id="cvRepo""#));
        assert!(!html.contains(r#"id="workSection""#));
    }

    #[test]
    fn page_shell_for_fixed_layout() {
        let mut page = Page::new();
        page.mount(anchor::NAME, vec![node("Ada")]).unwrap();

        let meta = PageMeta::for_document(&Document::default(), Layout::Fixed);
        let html = page.html(Templates::default_set(), &meta).unwrap();
        assert!(html.contains("<title>Curriculum Vitae</title>"));
        assert!(html.contains(r#"<span id="name">Ada</span>"#));
        assert!(html.contains(r#"<div id="work"></div>"#));
        assert!(!html.contains(r#"id="cvRepo""#));
    }
}
