use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Request, RequestBuilder};
use serde_json::Value;
use spdlog::{error, info, warn};

use crate::cms::raw_record::RawRecord;
use crate::config;
use crate::error::FetchError;

const POSTS_PATH: &str = "/api/posts";

/// Outcome of a single-post request.
#[derive(Debug, PartialEq)]
pub enum Lookup {
    Found(RawRecord),
    NotFound,
    Unavailable,
}

impl Lookup {
    pub fn into_option(self) -> Option<RawRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound | Lookup::Unavailable => None,
        }
    }
}

/// Reads posts from the content API.
///
/// Every call goes to the network; nothing is cached and nothing is retried.
/// Transport errors, non-2xx answers and malformed bodies are logged and turned into
/// an empty result.
#[derive(Clone)]
pub struct ContentClient {
    http: Client,
    origin: String,
}

impl ContentClient {
    pub fn new(content: &config::Content) -> Self {
        ContentClient {
            http: Client::new(),
            origin: content.origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn posts_request(&self) -> RequestBuilder {
        self.http
            .get(format!("{}{}", self.origin, POSTS_PATH))
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store")
    }

    pub fn list_request(&self) -> reqwest::Result<Request> {
        self.posts_request()
            .query(&[("populate", "*")])
            .build()
    }

    pub fn slug_request(&self, slug: &str) -> reqwest::Result<Request> {
        self.posts_request()
            .query(&[("filters[slug][$eq]", slug), ("populate", "*")])
            .build()
    }

    async fn fetch_records(&self, request: reqwest::Result<Request>) -> Result<Vec<RawRecord>, FetchError> {
        let request = request?;
        info!("Fetching {}", request.url());

        let response = self.http.execute(request).await?;
        let status = response.status();
        info!("Response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(decode_envelope(&body)?)
    }

    /// Like [`ContentClient::fetch_all`] but keeps the reason of a failure.
    pub async fn fetch_all_result(&self) -> Result<Vec<RawRecord>, FetchError> {
        self.fetch_records(self.list_request()).await
    }

    pub async fn fetch_all(&self) -> Vec<RawRecord> {
        match self.fetch_all_result().await {
            Ok(records) => records,
            Err(e) => {
                error!("Error fetching posts: {}", e);
                vec![]
            }
        }
    }

    pub async fn lookup(&self, slug: &str) -> Lookup {
        match self.fetch_records(self.slug_request(slug)).await {
            Ok(records) => match records.into_iter().next() {
                Some(record) => Lookup::Found(record),
                None => {
                    warn!("No post found with slug {}", slug);
                    Lookup::NotFound
                }
            },
            Err(e) => {
                error!("Error fetching post with slug {}: {}", slug, e);
                Lookup::Unavailable
            }
        }
    }

    pub async fn fetch_by_slug(&self, slug: &str) -> Option<RawRecord> {
        self.lookup(slug).await.into_option()
    }
}

/// Extracts the records from a `{ "data": [...] }` envelope. Anything but an array is empty.
pub fn decode_envelope(body: &[u8]) -> Result<Vec<RawRecord>, serde_json::Error> {
    let envelope: Value = serde_json::from_slice(body)?;
    let records = match envelope {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items.into_iter().map(RawRecord::new).collect(),
            _ => vec![],
        },
        _ => vec![],
    };
    Ok(records)
}
