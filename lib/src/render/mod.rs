//! Section dispatch: turning a [`Document`] into mounted fragments.
//!
//! A document is rendered in one of two layouts. In the [`Layout::Sections`]
//! layout every entry of the `sections` mapping is routed by its `type` to a
//! section template and all sections are mounted, in order, at
//! [`anchor::CV`]. In the [`Layout::Fixed`] layout each named top-level field
//! is rendered and mounted independently at its own anchor.
//!
//! [`anchor::CV`]: crate::mount::anchor::CV

mod sections;
mod fixed;

pub use sections::*;
pub use fixed::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Document;
use crate::mount::Mount;
use crate::templating::Templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Sections,
    Fixed,
}

impl Layout {
    /// `Sections` if `doc` has a `sections` mapping, `Fixed` otherwise.
    pub fn detect(doc: &Document) -> Layout {
        match doc.sections {
            Some(_) => Layout::Sections,
            None => Layout::Fixed,
        }
    }
}

impl FromStr for Layout {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sections" => Ok(Layout::Sections),
            "fixed" => Ok(Layout::Fixed),
            _ => err!("unknown layout", "layout" => s, "expected" => "sections, fixed"),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Sections => "sections".fmt(f),
            Layout::Fixed => "fixed".fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer<'t> {
    templates: &'t Templates,
    layout: Layout,
}

impl<'t> Renderer<'t> {
    pub fn new(templates: &'t Templates, layout: Layout) -> Self {
        Renderer { templates, layout }
    }

    /// Renders `doc` and mounts the result on `mount`.
    ///
    /// Rendering the same document again replaces the previous result.
    pub fn render<M: Mount + ?Sized>(&self, doc: &Document, mount: &mut M) -> Result<()> {
        match self.layout {
            Layout::Sections => {
                let Some(sections) = &doc.sections else {
                    return err! {
                        "document has no sections to render",
                        "layout" => self.layout,
                        "hint" => "use the fixed layout for documents without `sections`",
                    };
                };

                let fragments = render_sections(self.templates, sections)?;
                mount.mount(crate::mount::anchor::CV, fragments)
            }
            Layout::Fixed => render_fixed(self.templates, doc, mount),
        }
    }
}
