use chrono::DateTime;
use reqwest::Url;
use spdlog::warn;

use crate::cms::raw_record::RawRecord;
use crate::content::read_time::read_time;
use crate::content::text_formatter::format_content;
use crate::content::{Author, Content, PostView};
use crate::error::PostError;

/// Builds [`PostView`]s out of raw records, qualifying relative media URLs against `origin`.
pub struct Normalizer {
    origin: String,
}

impl Normalizer {
    pub fn new(origin: &str) -> Self {
        Normalizer {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn normalize(&self, record: &RawRecord) -> Result<PostView, PostError> {
        let fields = record.shape().ok_or(PostError::MissingSlug)?.fields();
        let slug = fields.text("slug").ok_or(PostError::MissingSlug)?;

        let published_at = fields.text("publishedAt")
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok());

        let image_url = fields.relation("featuredImage")
            .and_then(|image| image.text("url"))
            .map(|url| self.resolve_url(url));

        let author = fields.relation("author").map(|author| Author {
            name: author.text("name").map(str::to_string),
            email: author.text("email").map(str::to_string),
        });

        let content = Content::from_value(fields.get("content"));

        Ok(PostView {
            slug: slug.to_string(),
            title: fields.text("title").map(str::to_string),
            description: fields.text("description").map(str::to_string),
            published_at,
            image_url,
            author,
            body: format_content(&content),
            read_time: read_time(&content),
        })
    }

    /// Every routable post, in the order received. Records without slug are logged and skipped.
    pub fn normalize_all(&self, records: &[RawRecord]) -> Vec<PostView> {
        records.iter()
            .filter_map(|record| match self.normalize(record) {
                Ok(post) => Some(post),
                Err(e) => {
                    warn!("Skipping post: {}. Record={}", e, record.as_value());
                    None
                }
            })
            .collect()
    }

    pub fn resolve_url(&self, url: &str) -> String {
        if Url::parse(url).is_ok() {
            return url.to_string();
        }
        if url.starts_with("//") {
            let scheme = Url::parse(&self.origin).map(|origin| origin.scheme().to_string());
            return format!("{}:{}", scheme.as_deref().unwrap_or("http"), url);
        }
        if url.starts_with('/') {
            format!("{}{}", self.origin, url)
        } else {
            format!("{}/{}", self.origin, url)
        }
    }
}

/// Slugs of every routable record, used to pre-generate article paths.
pub fn static_paths(records: &[RawRecord]) -> Vec<String> {
    records.iter()
        .filter_map(|record| {
            let slug = record.shape()
                .and_then(|shape| shape.fields().text("slug").map(str::to_string));
            if slug.is_none() {
                warn!("Missing slug in post data: {}", record.as_value());
            }
            slug
        })
        .collect()
}
