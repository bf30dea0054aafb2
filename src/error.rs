use ntex::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("post record has no slug")]
    MissingSlug,
}

/// Failures while talking to the content API. Never leaves the client, see `ContentClient`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content API answered {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail transport is not configured (missing {0})")]
    NotConfigured(&'static str),
    #[error("invalid mail address {0}")]
    Address(String),
    #[error("could not build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Failed to send email")]
    Mail(#[from] MailError),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
