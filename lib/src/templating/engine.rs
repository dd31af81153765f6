use std::path::{Path, PathBuf};

use derive_more::Debug;
use minijinja::{Environment, ErrorKind};
use minijinja::value::Value;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Chainable, Result};
use crate::templating::Fragment;

macro_rules! builtin_templates {
    ($($name:literal),* $(,)?) => {
        const BUILTIN: &[(&str, &str)] = &[
            $(($name, include_str!(concat!("../../templates/", $name))),)*
        ];
    };
}

builtin_templates! {
    "page.html",
    "section.html",
    "header_section.html",
    "text_section.html",
    "list_section.html",
    "skills_section.html",
    "contact.html",
    "activity_date.html",
    "description_item.html",
    "description_list.html",
    "description_text.html",
    "timed_activity.html",
    "skill.html",
    "skill_group.html",
    "text.html",
}

static DEFAULT: Lazy<Templates> = Lazy::new(Templates::builtin);

/// Returns the embedded source of the built-in template `name`, if any.
pub fn builtin_source(name: &str) -> Option<&'static str> {
    BUILTIN.iter().find(|(n, _)| *n == name).map(|(_, source)| *source)
}

/// The template engine every fragment is rendered with.
#[derive(Debug)]
pub struct Templates {
    #[debug(ignore)]
    env: Environment<'static>,
    overrides: Option<PathBuf>,
}

impl Templates {
    /// The shared engine holding only the built-in templates.
    pub fn default_set() -> &'static Templates {
        &DEFAULT
    }

    pub fn builtin() -> Self {
        Templates::with_overrides(None::<PathBuf>)
    }

    /// An engine where a file in `dir` named like a built-in template takes
    /// the built-in's place.
    pub fn with_overrides<P: AsRef<Path>>(dir: Option<P>) -> Self {
        let overrides = dir.map(|dir| dir.as_ref().to_path_buf());
        let search = overrides.clone();

        let mut env = Environment::new();
        env.set_loader(move |name| {
            if let Some(path) = search.as_ref().map(|dir| dir.join(name)) {
                if path.is_file() {
                    return std::fs::read_to_string(&path)
                        .map(Some)
                        .map_err(|e| minijinja::Error::new(
                            ErrorKind::InvalidOperation,
                            format!("failed to read template override {}", path.display())
                        ).with_source(e));
                }
            }

            Ok(builtin_source(name).map(String::from))
        });

        // Missing values render as nothing, never as `none`.
        env.set_formatter(|out, state, value| match value.is_none() {
            true => Ok(()),
            false => minijinja::escape_formatter(out, state, value),
        });

        let mut templates = Templates { env, overrides };
        templates.set_globals(std::collections::BTreeMap::<String, Value>::new());
        templates
    }

    /// Exposes `globals` to every template as `G`.
    pub fn set_globals<G: Serialize>(&mut self, globals: G) {
        self.env.add_global("G", Value::from_serializable(&globals));
    }

    pub fn overrides(&self) -> Option<&Path> {
        self.overrides.as_deref()
    }

    /// Renders the template `name` with `context` into a fragment.
    pub fn fragment<C: Serialize>(&self, name: &str, context: C) -> Result<Fragment> {
        let template = self.env.get_template(name)
            .chain_with(|| error!("failed to load template", "template" => name))?;

        let markup = template.render(context)
            .chain_with(|| error!("failed to render template", "template" => name))?;

        Ok(Fragment::from(markup))
    }
}

#[cfg(test)]
mod tests {
    use minijinja::context;

    use super::*;

    #[test]
    fn every_builtin_template_loads() {
        let templates = Templates::builtin();
        for (name, _) in BUILTIN {
            assert!(templates.env.get_template(name).is_ok(), "{name} failed to load");
        }
    }

    #[test]
    fn interpolated_data_is_escaped_but_fragments_are_not() {
        let templates = Templates::builtin();
        let inner = templates.fragment("text.html", context! { text => "<b>bold</b>" }).unwrap();
        assert_eq!(inner.as_str(), "&lt;b&gt;bold&lt;&#x2f;b&gt;");

        let raw = Fragment::from("<em>raw</em>".to_string());
        let section = templates.fragment("section.html", context! { id => "x", inner => raw })
            .unwrap();

        assert_eq!(section.as_str(), r#"<section id="x"><em>raw</em></section>"#);
    }

    #[test]
    fn override_directory_replaces_builtins() {
        let dir = std::env::temp_dir().join(format!("vitae-overrides-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("skill.html"), "<i>{{ name }}</i>").unwrap();

        let templates = Templates::with_overrides(Some(&dir));
        let skill = templates.fragment("skill.html", context! { name => "Rust" }).unwrap();
        assert_eq!(skill.as_str(), "<i>Rust</i>");

        let text = templates.fragment("text.html", context! { text => "plain" }).unwrap();
        assert_eq!(text.as_str(), "plain");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_templates_are_reported() {
        let error = Templates::builtin().fragment("nope.html", ()).unwrap_err();
        assert!(error.to_string().contains("failed to load template"));
        assert!(error.to_string().contains("nope.html"));
    }
}
