use ramhorns::Template;

use crate::content::PostView;
use crate::text_utils::{display_date, or_fallback, NO_DESCRIPTION, UNTITLED};

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    post_list: Vec<PostItem<'a>>,
    has_posts: bool,
    origin: &'a str,
    page_list: Vec<ViewPagination>,
    show_pagination: bool,
}

#[derive(ramhorns::Content)]
struct PostItem<'a> {
    link: String,
    title: &'a str,
    description: &'a str,
    date: String,
    read_time: u32,
    has_image: bool,
    image_url: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewPagination {
    current: bool,
    number: u32,
}

pub struct ListRenderer<'a> {
    template: &'a Template<'static>,
    page_count: u32,
}

impl<'a> ListRenderer<'a> {
    pub fn new(template: &'a Template<'static>, page_count: u32) -> ListRenderer<'a> {
        ListRenderer {
            template,
            page_count,
        }
    }

    /// Renders one page of cards. `origin` is only shown when there is nothing to list.
    pub fn render(&self, posts: &[PostView], cur_page: u32, origin: &str) -> String {
        let post_list: Vec<PostItem> = posts.iter()
            .map(|post| PostItem {
                link: format!("/blog/{}", post.slug),
                title: or_fallback(post.title.as_deref(), UNTITLED),
                description: or_fallback(post.description.as_deref(), NO_DESCRIPTION),
                date: display_date(post.published_at.as_ref()),
                read_time: post.read_time,
                has_image: post.image_url.is_some(),
                image_url: post.image_url.as_deref().unwrap_or_default(),
            })
            .collect();

        let page_list: Vec<ViewPagination> = (1..=self.page_count)
            .map(|number| ViewPagination {
                current: number == cur_page,
                number,
            })
            .collect();

        self.template.render(&ListPage {
            has_posts: !post_list.is_empty(),
            post_list,
            origin,
            page_list,
            show_pagination: self.page_count > 1,
        })
    }
}
