use ntex::http::StatusCode;

use crate::config::Config;
use crate::content::PostView;
use crate::paginator::Paginator;
use crate::text_utils::{or_fallback, NO_DESCRIPTION, UNTITLED};
use crate::view::layout_renderer::{LayoutRenderer, PageMeta};
use crate::view::list_renderer::ListRenderer;
use crate::view::page_renderer::{render_message, render_static};
use crate::view::post_renderer::PostRenderer;
use crate::view::templates::Templates;

pub mod layout_renderer;
pub mod list_renderer;
pub mod page_renderer;
pub mod post_renderer;
pub mod templates;

const NOT_FOUND_TITLE: &str = "Post Not Found";
const NOT_FOUND_TEXT: &str = "The post you are looking for does not exist.";

/// What a single article request resolved to.
pub enum PostPage {
    Found(PostView),
    NotFound,
    Unavailable,
}

pub struct RenderedPage {
    pub status: StatusCode,
    pub html: String,
}

impl RenderedPage {
    fn ok(html: String) -> Self {
        RenderedPage { status: StatusCode::OK, html }
    }
}

/// Turns canonical posts into full HTML pages.
pub struct SiteRenderer {
    templates: Templates,
    site_title: String,
    origin: String,
    page_size: u32,
    has_stylesheet: bool,
}

impl SiteRenderer {
    pub fn new(templates: Templates, config: &Config) -> Self {
        SiteRenderer {
            templates,
            site_title: config.defaults.site_title.clone(),
            origin: config.content.origin.clone(),
            page_size: config.defaults.page_size,
            has_stylesheet: config.paths.public_dir.is_some(),
        }
    }

    fn wrap(&self, meta: &PageMeta, body: &str) -> String {
        LayoutRenderer::new(&self.templates.layout, &self.site_title, self.has_stylesheet)
            .render(meta, body)
    }

    /// Listing of routable posts. An empty slice renders the "no posts" panel.
    pub fn listing(&self, posts: &[PostView], page: u32) -> RenderedPage {
        let paginator = Paginator::from(posts, self.page_size);
        let cur_page = paginator.sanitize(page);
        let body = ListRenderer::new(&self.templates.post_list, paginator.page_count())
            .render(paginator.page_or_empty(cur_page), cur_page, &self.origin);

        let meta = PageMeta { title: &self.site_title, description: "Latest posts" };
        RenderedPage::ok(self.wrap(&meta, &body))
    }

    pub fn article(&self, page: &PostPage) -> RenderedPage {
        match page {
            PostPage::Found(post) => {
                let body = PostRenderer::new(&self.templates.post).render(post);
                let meta = PageMeta {
                    title: or_fallback(post.title.as_deref(), UNTITLED),
                    description: or_fallback(post.description.as_deref(), NO_DESCRIPTION),
                };
                RenderedPage::ok(self.wrap(&meta, &body))
            }
            PostPage::NotFound => {
                let body = render_message(&self.templates.message, "404 - Page Not Found", NOT_FOUND_TEXT);
                let meta = PageMeta { title: NOT_FOUND_TITLE, description: NOT_FOUND_TEXT };
                RenderedPage {
                    status: StatusCode::NOT_FOUND,
                    html: self.wrap(&meta, &body),
                }
            }
            PostPage::Unavailable => {
                let text = "The content server could not be reached. Please try again later.";
                let body = render_message(&self.templates.message, "Content unavailable", text);
                let meta = PageMeta { title: "Content unavailable", description: text };
                RenderedPage {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    html: self.wrap(&meta, &body),
                }
            }
        }
    }

    pub fn not_found(&self) -> RenderedPage {
        let text = "The page you are looking for does not exist.";
        let body = render_message(&self.templates.message, "404 - Page Not Found", text);
        let meta = PageMeta { title: "Page Not Found", description: text };
        RenderedPage {
            status: StatusCode::NOT_FOUND,
            html: self.wrap(&meta, &body),
        }
    }

    pub fn about(&self) -> RenderedPage {
        let meta = PageMeta { title: "About", description: "About this blog" };
        RenderedPage::ok(self.wrap(&meta, &render_static(&self.templates.about, &self.site_title)))
    }

    pub fn contact(&self) -> RenderedPage {
        let meta = PageMeta { title: "Contact", description: "Get in touch" };
        RenderedPage::ok(self.wrap(&meta, &render_static(&self.templates.contact, &self.site_title)))
    }
}
