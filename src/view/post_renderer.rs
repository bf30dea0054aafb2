use ramhorns::Template;

use crate::content::{FormattedBody, PostView};
use crate::text_utils::{display_date, or_fallback, UNTITLED};

#[derive(ramhorns::Content)]
struct ViewParagraph<'a> {
    html: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    post_title: &'a str,
    date: String,
    has_author: bool,
    author_name: &'a str,
    read_time: u32,
    has_image: bool,
    image_url: &'a str,
    is_markup: bool,
    post_content: &'a str,
    paragraphs: Vec<ViewParagraph<'a>>,
    unsupported: bool,
}

pub struct PostRenderer<'a> {
    template: &'a Template<'static>,
}

impl<'a> PostRenderer<'a> {
    pub fn new(template: &'a Template<'static>) -> PostRenderer<'a> {
        PostRenderer { template }
    }

    pub fn render(&self, post: &PostView) -> String {
        let author_name = post.author.as_ref().and_then(|a| a.name.as_deref());
        let (post_content, paragraphs) = match post.body {
            FormattedBody::Markup(ref markup) => (markup.as_str(), vec![]),
            FormattedBody::Paragraphs(ref paragraphs) => {
                ("", paragraphs.iter().map(|p| ViewParagraph { html: p.as_str() }).collect())
            }
            FormattedBody::Unsupported => ("", vec![]),
        };

        self.template.render(&ViewItem {
            post_title: or_fallback(post.title.as_deref(), UNTITLED),
            date: display_date(post.published_at.as_ref()),
            has_author: author_name.is_some(),
            author_name: author_name.unwrap_or_default(),
            read_time: post.read_time,
            has_image: post.image_url.is_some(),
            image_url: post.image_url.as_deref().unwrap_or_default(),
            is_markup: matches!(post.body, FormattedBody::Markup(_)),
            post_content,
            paragraphs,
            unsupported: post.body == FormattedBody::Unsupported,
        })
    }
}
