#![doc = svgbobdoc::transform!(
//! A toolkit for rendering a curriculum vitae from structured data.
//!
//! # Overview
//!
//! Vitae takes a CV [`Document`], typically read from a JSON or TOML file, and
//! renders it into HTML fragments that are attached to named mount points of
//! a page. Rendering is a pure, one-shot transform: the same document always
//! produces the same page, and rendering again replaces what was there.
//!
//! Data flows top-down and markup is composed bottom-up:
//!
//! ```svgbob
//!   +----------+     +------------+     +------------+     +---------+
//!   | Document |---->| dispatcher |---->| normalizer |---->| template|
//!   +----------+     +-----+------+     +------------+     |   set   |
//!                          |                               +----+----+
//!                          |            fragments               |
//!                          +<-----------------------------------+
//!                          |
//!                          v
//!                     +---------+
//!                     |  mount  |
//!                     +---------+
//! ```
//!
//!   * The **dispatcher** ([`render`]) walks the document's sections, routing
//!     each to the templates for its type, or renders the fixed set of named
//!     fields, depending on the [`Layout`].
//!
//!   * The **normalizer** ([`activity`]) maps jobs, projects and education
//!     entries onto one [`TimedActivity`](model::TimedActivity) shape.
//!
//!   * The **template set** ([`templating`]) turns small records into
//!     [`Fragment`]s, one template per visual element.
//!
//!   * A **mount** ([`Mount`]) receives the composed fragments. [`Page`] is an
//!     in-memory mount that renders to a standalone HTML document.
//!
//! ## Rendering
//!
//! ```rust
//! use vitae::{Document, Page, mount::anchor};
//!
//! let doc: Document = serde_json::from_str(r#"{
//!     "sections": {
//!         "about": { "type": "text", "title": "About", "text": "Hello!" }
//!     }
//! }"#).unwrap();
//!
//! let mut page = Page::new();
//! vitae::render_cv(&doc, &mut page).unwrap();
//!
//! let cv = page.get(anchor::CV).unwrap();
//! assert!(cv.starts_with(r#"<section id="about"><h2>About</h2>"#));
//! ```
)]

#[macro_use]
pub mod error;
pub mod util;
pub mod model;
pub mod templating;
pub mod activity;
pub mod render;
pub mod mount;
pub mod data;

pub use error::{Error, Result};
pub use model::Document;
pub use mount::{Mount, Page, PageMeta};
pub use render::{Layout, Renderer};
pub use templating::{Fragment, Templates};

/// Renders `doc` with the built-in templates into `mount`, choosing the
/// layout from the shape of the document.
pub fn render_cv<M: Mount + ?Sized>(doc: &Document, mount: &mut M) -> Result<()> {
    let layout = Layout::detect(doc);
    Renderer::new(Templates::default_set(), layout).render(doc, mount)
}
