use std::path::{Path, PathBuf};

use vitae::data::Sink;
use vitae::error::{Chainable, Result};
use vitae::{error, Document, Layout, Page, PageMeta, Renderer};

use crate::config::Config;

#[derive(Debug)]
pub struct Quill {
    pub config: Config,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Quill {
    pub fn new<I, O>(input: I, output: O, config: Config) -> Self
        where I: AsRef<Path>, O: AsRef<Path>
    {
        Quill {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            config,
        }
    }

    pub fn load(&self) -> Result<Document> {
        Document::load(&self.input)
    }

    pub fn layout(&self, doc: &Document) -> Layout {
        self.config.settings.layout.unwrap_or_else(|| Layout::detect(doc))
    }

    pub fn meta(&self, doc: &Document) -> PageMeta {
        let settings = &self.config.settings;
        let mut meta = PageMeta::for_document(doc, self.layout(doc));
        if let Some(title) = &settings.title {
            meta.title = title.clone();
        }

        meta.stylesheets = settings.stylesheets.clone();
        meta
    }

    /// Renders `doc` into a complete HTML page.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let meta = self.meta(doc);
        log::debug!("rendering {} with the {} layout", self.input.display(), meta.layout);

        let mut page = Page::new();
        Renderer::new(&self.config.templates, meta.layout)
            .render(doc, &mut page)
            .chain_with(|| error! {
                "failed to render CV",
                "input" => self.input.display(),
                "layout" => meta.layout,
            })?;

        page.html(&self.config.templates, &meta)
    }

    pub fn write(&self, html: &str) -> Result<()> {
        self.output.write(html)
    }
}
