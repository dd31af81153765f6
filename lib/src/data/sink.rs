use std::{fs, io};
use std::path::{Path, PathBuf};
use std::fmt::Debug;

use crate::error::{Result, Chainable};

/// Somewhere rendered text can be written to.
pub trait Sink: Debug {
    fn write(&self, contents: &str) -> Result<()>;
}

impl Sink for fs::File {
    fn write(&self, contents: &str) -> Result<()> {
        use io::Write;

        let mut file = io::BufWriter::new(self);
        file.write_all(contents.as_bytes())?;
        Ok(file.flush()?)
    }
}

impl Sink for &Path {
    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).chain(error! {
                "failed to create output directory",
                "directory" => parent.display()
            })?;
        }

        fs::File::create(self)
            .chain(error! {
                "failed to open/create file for writing",
                "file path" => self.display()
            })?
            .write(contents)
    }
}

impl Sink for PathBuf {
    fn write(&self, contents: &str) -> Result<()> {
        self.as_path().write(contents)
    }
}

impl<T: Sink + ?Sized> Sink for &T {
    fn write(&self, contents: &str) -> Result<()> {
        (**self).write(contents)
    }
}
