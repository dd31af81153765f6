use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use vitae::data::{Format, Toml};
use vitae::error::{Chainable, Result};
use vitae::{error, Layout, Templates};

#[derive(Debug)]
pub struct Config {
    pub templates: Templates,
    pub settings: Settings,
}

#[derive(Default, Debug, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub templates: Option<PathBuf>,
    #[serde(default)]
    pub stylesheets: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub globals: FxHashMap<String, serde_json::Value>,
}

impl Settings {
    /// Reads the settings at `path`, or the `CONFIG_FILE` beside `input` if
    /// no path is given. A missing default file yields default settings.
    pub fn discover(input: &Path, path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = input.with_file_name(crate::CONFIG_FILE);
                if !default.is_file() {
                    log::debug!("no {} beside {}: using defaults", crate::CONFIG_FILE, input.display());
                    return Ok(Settings::default());
                }

                default
            }
        };

        log::debug!("reading settings from {}", path.display());
        Toml::read(path.as_path())
            .chain_with(|| error!("failed to read settings", "path" => path.display()))
    }
}

impl Config {
    pub fn new(mut settings: Settings, base: &Path) -> Self {
        if let Some(dir) = settings.templates.as_mut().filter(|dir| dir.is_relative()) {
            *dir = base.join(&*dir);
        }

        let mut templates = Templates::with_overrides(settings.templates.as_ref());
        templates.set_globals(&settings.globals);
        Config { templates, settings }
    }
}
