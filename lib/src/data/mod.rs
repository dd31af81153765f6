//! Reading CV data and writing rendered pages.

mod source;
mod sink;
mod format;

pub use source::*;
pub use sink::*;
pub use format::*;

use std::path::Path;

use crate::error::{Chainable, Result};
use crate::model::Document;

impl Document {
    /// Reads a document from `path`, as JSON or TOML by file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        let read = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Json::read(path),
            Some("toml") => Toml::read(path),
            ext => return err! {
                "unsupported CV data format",
                "path" => path.display(),
                "extension" => ext.unwrap_or("(none)"),
                "supported extensions" => "json, toml",
            },
        };

        read.chain_with(|| error!("failed to load CV data", "path" => path.display()))
    }
}
