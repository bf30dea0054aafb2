use chrono::{Datelike, Utc};
use ramhorns::Template;

#[derive(ramhorns::Content)]
struct LayoutPage<'a> {
    site_title: &'a str,
    page_title: &'a str,
    description: &'a str,
    has_stylesheet: bool,
    year: i32,
    body: &'a str,
}

/// Head metadata of a page.
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Wraps a rendered page body with the site chrome.
pub struct LayoutRenderer<'a> {
    template: &'a Template<'static>,
    site_title: &'a str,
    has_stylesheet: bool,
}

impl<'a> LayoutRenderer<'a> {
    pub fn new(template: &'a Template<'static>, site_title: &'a str, has_stylesheet: bool) -> LayoutRenderer<'a> {
        LayoutRenderer {
            template,
            site_title,
            has_stylesheet,
        }
    }

    pub fn render(&self, meta: &PageMeta, body: &str) -> String {
        self.template.render(&LayoutPage {
            site_title: self.site_title,
            page_title: meta.title,
            description: meta.description,
            has_stylesheet: self.has_stylesheet,
            year: Utc::now().year(),
            body,
        })
    }
}
