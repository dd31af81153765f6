use std::{fs, io};
use std::path::Path;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::{Result, Chainable};

/// Somewhere text can be read from.
pub trait Source: Debug {
    fn read(self) -> Result<Arc<str>>;

    fn path(&self) -> Option<&Path> {
        None
    }
}

impl Source for String {
    fn read(self) -> Result<Arc<str>> {
        Ok(self.into())
    }
}

impl Source for Arc<str> {
    fn read(self) -> Result<Arc<str>> {
        Ok(self)
    }
}

impl Source for &fs::File {
    fn read(self) -> Result<Arc<str>> {
        use io::Read;

        let mut data = String::new();
        io::BufReader::new(self).read_to_string(&mut data)?;
        Ok(data.into())
    }
}

impl Source for &Path {
    fn read(self) -> Result<Arc<str>> {
        let file = fs::File::open(self).chain(error! {
            "failed to open file for reading",
            "file path" => self.display()
        })?;

        file.read().chain_with(|| error! {
            "failed to read file as UTF-8 text",
            "file path" => self.display()
        })
    }

    fn path(&self) -> Option<&Path> {
        Some(self)
    }
}
