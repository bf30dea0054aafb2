use ramhorns::Template;

#[derive(ramhorns::Content)]
struct MessagePage<'a> {
    heading: &'a str,
    text: &'a str,
}

/// A heading and a line of text, used for the not-found and unavailable pages.
pub fn render_message(template: &Template<'static>, heading: &str, text: &str) -> String {
    template.render(&MessagePage { heading, text })
}

#[derive(ramhorns::Content)]
struct StaticPage<'a> {
    site_title: &'a str,
}

/// Pages without post data, such as about and contact.
pub fn render_static(template: &Template<'static>, site_title: &str) -> String {
    template.render(&StaticPage { site_title })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message() {
        let template = Template::new("<h1>{{heading}}</h1><p>{{text}}</p>").unwrap();
        let res = render_message(&template, "404 - Page Not Found", "The page you are looking for does not exist.");
        assert_eq!(res, "<h1>404 - Page Not Found</h1><p>The page you are looking for does not exist.</p>");
    }

    #[test]
    fn test_render_static() {
        let template = Template::new("<h1>About {{site_title}}</h1>").unwrap();
        assert_eq!(render_static(&template, "My Blog"), "<h1>About My Blog</h1>");
    }
}
