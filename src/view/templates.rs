use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use ramhorns::Template;
use spdlog::info;

const LAYOUT: &str = "layout.tpl";
const POST_LIST: &str = "post_list.tpl";
const POST: &str = "post.tpl";
const ABOUT: &str = "about.tpl";
const CONTACT: &str = "contact.tpl";
const MESSAGE: &str = "message.tpl";

fn builtin_source(file_name: &str) -> &'static str {
    match file_name {
        LAYOUT => include_str!("../../res/template/layout.tpl"),
        POST_LIST => include_str!("../../res/template/post_list.tpl"),
        POST => include_str!("../../res/template/post.tpl"),
        ABOUT => include_str!("../../res/template/about.tpl"),
        CONTACT => include_str!("../../res/template/contact.tpl"),
        _ => include_str!("../../res/template/message.tpl"),
    }
}

/// All page templates, parsed once at start-up.
pub struct Templates {
    pub layout: Template<'static>,
    pub post_list: Template<'static>,
    pub post: Template<'static>,
    pub about: Template<'static>,
    pub contact: Template<'static>,
    pub message: Template<'static>,
}

fn parse(file_name: &str, source: String) -> io::Result<Template<'static>> {
    Template::new(source).map_err(|e| {
        io::Error::new(ErrorKind::InvalidInput, format!("Error parsing template {}: {}", file_name, e))
    })
}

fn read_template(template_dir: Option<&Path>, file_name: &str) -> io::Result<String> {
    if let Some(dir) = template_dir {
        let path = dir.join(file_name);
        if path.exists() {
            info!("Using template {}", path.display());
            return fs::read_to_string(path);
        }
    }
    Ok(builtin_source(file_name).to_string())
}

impl Templates {
    pub fn builtin() -> io::Result<Templates> {
        Self::load(None)
    }

    /// Files found in `template_dir` replace the built-in template of the same name.
    pub fn load(template_dir: Option<&Path>) -> io::Result<Templates> {
        let load = |file_name: &str| parse(file_name, read_template(template_dir, file_name)?);

        Ok(Templates {
            layout: load(LAYOUT)?,
            post_list: load(POST_LIST)?,
            post: load(POST)?,
            about: load(ABOUT)?,
            contact: load(CONTACT)?,
            message: load(MESSAGE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::view::page_renderer::render_static;

    use super::*;

    #[test]
    fn test_builtin_templates_parse() {
        assert!(Templates::builtin().is_ok());
    }

    #[test]
    fn test_override_from_dir() {
        let dir = env::temp_dir().join(format!("headless-blog-tpl-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(ABOUT), "custom about {{missing}}").unwrap();

        let templates = Templates::load(Some(&dir)).unwrap();
        assert_eq!(render_static(&templates.about, "x"), "custom about ");

        fs::write(dir.join(MESSAGE), "{{#broken}}").unwrap();
        assert!(Templates::load(Some(&dir)).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
