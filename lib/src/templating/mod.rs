//! The template set: one HTML template per visual fragment, rendered through
//! a `minijinja` environment with HTML auto-escaping.
//!
//! Data interpolated into a template is escaped. A [`Fragment`] passed into
//! another template is already markup and is inserted verbatim, which is how
//! fragments compose bottom-up into sections and pages.

mod engine;
mod fragment;
mod set;

pub use engine::*;
pub use fragment::*;
pub use set::*;
