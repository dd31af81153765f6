use std::path::{Path, PathBuf};

use vitae::error::Result;
use vitae::Layout;

use crate::config::{Config, Settings};
use crate::render::Quill;

mod config;
mod render;

pub const CONFIG_FILE: &str = "quill.toml";

fn run(flags: Flags) -> Result<()> {
    let mut settings = Settings::discover(&flags.input, flags.config.as_deref())?;
    if let Some(layout) = flags.layout.as_deref() {
        settings.layout = Some(layout.parse::<Layout>()?);
    }

    if let Some(dir) = flags.templates {
        settings.templates = Some(std::env::current_dir()?.join(dir));
    }

    // Template directories named in the settings file are relative to it.
    let settings_file = flags.config.as_deref().unwrap_or(&flags.input);
    let base = settings_file.parent().unwrap_or(Path::new("."));
    let quill = Quill::new(&flags.input, &flags.output, Config::new(settings, base));

    let doc = vitae::time!("load", quill.load()?);
    let html = vitae::time!("render", quill.render(&doc)?);
    quill.write(&html)?;
    log::info!("wrote {} ({} bytes)", quill.output.display(), html.len());
    Ok(())
}

struct Flags {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    layout: Option<String>,
    templates: Option<PathBuf>,
    log: Option<String>,
}

pub fn main() {
    let flags = xflags::parse_or_exit! {
        /// CV data file, JSON or TOML.
        required input: PathBuf
        /// Where to write the rendered HTML page.
        required output: PathBuf
        /// Settings file. Defaults to `quill.toml` beside the input.
        optional -c, --config config: PathBuf
        /// Layout to render with: `sections` or `fixed`.
        optional -l, --layout layout: String
        /// Directory of templates overriding the built-in ones.
        optional -t, --templates templates: PathBuf
        /// Log level, e.g. `warn` or `debug`. Defaults to `info`.
        optional --log log: String
    };

    let flags = Flags {
        input: flags.input,
        output: flags.output,
        config: flags.config,
        layout: flags.layout,
        templates: flags.templates,
        log: flags.log,
    };

    let spec = flags.log.as_deref().unwrap_or("info");
    let _logger = match flexi_logger::Logger::try_with_env_or_str(spec).and_then(|l| l.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: failed to initialize logging: {e}");
            None
        }
    };

    let start = std::time::Instant::now();
    let result = run(flags);
    println!("total time: {}ms", start.elapsed().as_millis());

    if let Err(e) = result {
        println!("error: {e}");
        std::process::exit(1);
    }
}
